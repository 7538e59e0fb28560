use clap::Parser;
use damista::perft::{perft, perft_divide};
use damista::{Board, Player, START_DIAGRAM};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_DIAGRAM))]
    board: String,

    #[arg(short, long, default_value_t = 5)]
    depth: u32,

    /// Side to move
    #[arg(short, long, default_value = "black")]
    turn: Player,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,
}

fn main() {
    damista::init_logging();
    let args = Args::parse();

    let mut board = match Board::from_diagram(&args.board) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("invalid board: {}", e);
            std::process::exit(2);
        }
    };

    println!("Running perft on '{}' ({} to move) at depth {}", args.board, args.turn, args.depth);

    if args.divide {
        for (mv, nodes) in perft_divide(&mut board, args.turn, args.depth) {
            println!("{}: {}", mv, nodes);
        }
    }

    let start = std::time::Instant::now();
    let nodes = perft(&mut board, args.turn, args.depth);
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );
}
