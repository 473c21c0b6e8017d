use clap::Parser;
use arbitro::perft::{divide, perft};
use arbitro::{Position, START_FEN};
use shakmaty::fen::Fen;
use shakmaty::{Chess, Position as _, Role};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Cross-check the total against shakmaty (queen promotions only)
    #[arg(long)]
    compare: bool,
}

fn main() {
    let args = Args::parse();

    let pos = match Position::from_fen(&args.fen) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("invalid FEN '{}': {}", args.fen, e);
            std::process::exit(2);
        }
    };

    println!("Running perft on FEN: '{}' at depth {}", args.fen, args.depth);

    if args.divide {
        for (mv, nodes) in divide(&pos, args.depth) {
            println!("{}: {}", mv, nodes);
        }
    }

    let start = std::time::Instant::now();
    let nodes = perft(&pos, args.depth);
    let duration = start.elapsed();
    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );

    if args.compare {
        let oracle: Chess = match args.fen.parse::<Fen>() {
            Ok(fen) => match fen.into_position(shakmaty::CastlingMode::Standard) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("shakmaty rejected position: {}", e);
                    std::process::exit(2);
                }
            },
            Err(e) => {
                eprintln!("shakmaty rejected FEN: {}", e);
                std::process::exit(2);
            }
        };
        let expected = perft_shakmaty(&oracle, args.depth);
        println!("shakmaty perft({}) = {} nodes", args.depth, expected);
        if expected != nodes {
            eprintln!("MISMATCH: {} vs {}", nodes, expected);
            std::process::exit(1);
        }
    }
}

// Under-promotions are skipped: arbitro always promotes to a queen
fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    let moves = pos.legal_moves();
    for m in moves {
        if m.promotion().is_some_and(|r| r != Role::Queen) {
            continue;
        }
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
