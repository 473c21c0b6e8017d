//! arbitro text-protocol entry point.

use clap::Parser;

use arbitro::protocol::{run_stdio, Session, SessionOptions};
use arbitro::Engine;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position (defaults to the standard setup)
    #[arg(short, long)]
    fen: Option<String>,

    /// Keep the final position after checkmate or stalemate instead of resetting
    #[arg(long)]
    no_auto_reset: bool,
}

fn main() {
    let args = Args::parse();

    let engine = match args.fen.as_deref() {
        Some(fen) => match Engine::from_fen(fen) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("invalid --fen: {}", e);
                std::process::exit(2);
            }
        },
        None => Engine::new(),
    };
    let options = SessionOptions {
        auto_reset: !args.no_auto_reset,
        ..SessionOptions::default()
    };

    let mut session = Session::with_engine(engine, options);
    if let Err(e) = run_stdio(&mut session) {
        eprintln!("session loop failed: {:?}", e);
        std::process::exit(1);
    }
}
