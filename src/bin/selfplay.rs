//! Engine-vs-engine games, for smoke testing the search at different depths.

use clap::Parser;
use damista::game::Game;
use damista::search::SearchParams;
use damista::Player;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Depth used by Black
    #[arg(long, default_value_t = 3)]
    black_depth: u8,

    /// Depth used by Red
    #[arg(long, default_value_t = 3)]
    red_depth: u8,

    /// Turns after which a game is scored as a draw
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    damista::init_logging();
    let args = Args::parse();

    let mut black_wins = 0;
    let mut red_wins = 0;
    let mut draws = 0;

    for game_idx in 0..args.games {
        let params = |depth: u8| {
            let p = SearchParams::new().max_depth(depth);
            match args.seed {
                Some(s) => p.seed(s.wrapping_add(game_idx as u64)),
                None => p,
            }
        };
        // The engine plays both colours; only the depth changes per side
        let mut game = Game::new(Player::Black, params(args.black_depth));

        let start = std::time::Instant::now();
        let mut turns = 0;
        while game.is_game_over().is_none() && turns < args.max_turns {
            let side = game.turn();
            let depth = match side {
                Player::Black => args.black_depth,
                Player::Red => args.red_depth,
            };
            game.set_search_params(params(depth));
            if game.request_ai_move(side).is_none() {
                break;
            }
            turns += 1;
        }

        let result = match game.is_game_over() {
            Some(Player::Black) => {
                black_wins += 1;
                "black"
            }
            Some(Player::Red) => {
                red_wins += 1;
                "red"
            }
            None => {
                draws += 1;
                "draw"
            }
        };
        println!(
            "game {}: {} after {} turns ({} ms)",
            game_idx + 1,
            result,
            turns,
            start.elapsed().as_millis()
        );
    }

    println!(
        "black {} red {} draws {} (depths {} vs {})",
        black_wins, red_wins, draws, args.black_depth, args.red_depth
    );
}
