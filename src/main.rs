//! Damista interactive entry point: play checkers against the engine over stdin/stdout.

use clap::Parser;
use damista::protocol::{run_loop, Session};
use damista::search::SearchParams;
use damista::Player;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Colour played by the human (black moves first)
    #[arg(long, default_value = "black")]
    human: Player,

    /// Search depth in turns
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Seed for the engine's tie-breaks
    #[arg(short, long)]
    seed: Option<u64>,

    /// Node limit per search (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    nodes: u64,

    /// Time limit per search in milliseconds (0 = unlimited)
    #[arg(short, long, default_value_t = 0)]
    time: u64,

    /// Do not answer automatically; the engine only moves on `go`
    #[arg(long)]
    manual: bool,
}

fn main() {
    damista::init_logging();
    let args = Args::parse();

    let mut params = SearchParams::new()
        .max_depth(args.depth)
        .node_limit(args.nodes)
        .time_limit(args.time);
    if let Some(seed) = args.seed {
        params = params.seed(seed);
    }

    let session = Session::new(args.human, params).with_auto_reply(!args.manual);
    if let Err(e) = run_loop(session) {
        eprintln!("session failed: {:?}", e);
    }
}
