//! Line command parser for the arbitro text protocol.
//!
//! Squares are given either as `row col` integer pairs (row 0 = rank 8,
//! col 0 = a-file) or in algebraic form (`e2`). Coordinates outside the
//! board are rejected here, before they can reach the engine.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Board,
    Turn,
    Fen,
    Moves {
        row: i32,
        col: i32,
    },
    Move {
        from: (i32, i32),
        to: (i32, i32),
    },
    Condition,
    Reset,
    Position {
        fen: Option<String>,
    },
    SetOption {
        name: String,
        value: Option<String>,
    },
    /// List the session options and their current values.
    Options,
    IsReady,
    Quit,
    /// Known command, malformed arguments.
    Invalid(String),
    Unknown(String),
}

/// Parse one command line (simple whitespace tokenizer).
pub fn parse_command(line: &str) -> Command {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Command::Unknown(String::new());
    };

    match head {
        "board" => Command::Board,
        "turn" => Command::Turn,
        "fen" => Command::Fen,
        "condition" => Command::Condition,
        "reset" => Command::Reset,
        "isready" => Command::IsReady,
        "quit" => Command::Quit,
        "moves" => match parse_squares(args, 1) {
            Ok(sq) => Command::Moves {
                row: sq[0].0,
                col: sq[0].1,
            },
            Err(e) => Command::Invalid(format!("moves: {}", e)),
        },
        "move" => match parse_squares(args, 2) {
            Ok(sq) => Command::Move {
                from: sq[0],
                to: sq[1],
            },
            Err(e) => Command::Invalid(format!("move: {}", e)),
        },
        "position" => {
            // position startpos | position fen <fenstring>
            match args.first() {
                Some(&"startpos") => Command::Position { fen: None },
                Some(&"fen") if args.len() > 1 => Command::Position {
                    fen: Some(args[1..].join(" ")),
                },
                _ => Command::Invalid("position: expected 'startpos' or 'fen <FEN>'".to_string()),
            }
        }
        "setoption" => {
            // setoption name <name> [value <val>]
            let (name_part, value) = match args.iter().position(|&t| t == "value") {
                Some(at) => (&args[..at], Some(args[at + 1..].join(" "))),
                None => (args, None),
            };
            match name_part.split_first() {
                Some((&"name", words)) if !words.is_empty() => Command::SetOption {
                    name: words.join(" "),
                    value,
                },
                _ => Command::Invalid("setoption: missing name".to_string()),
            }
        }
        "options" => Command::Options,
        other => Command::Unknown(other.to_string()),
    }
}

// Exactly `n` squares: either 2n integers or n algebraic names
fn parse_squares(args: &[&str], n: usize) -> Result<Vec<(i32, i32)>, String> {
    if args.len() == 2 * n {
        args.chunks(2)
            .map(|pair| -> Result<(i32, i32), String> {
                Ok((parse_coord(pair[0])?, parse_coord(pair[1])?))
            })
            .collect()
    } else if args.len() == n {
        args.iter().map(|s| parse_algebraic(s)).collect()
    } else {
        Err(format!(
            "expected {} square(s) as row/col pairs or algebraic names",
            n
        ))
    }
}

fn parse_coord(s: &str) -> Result<i32, String> {
    let v: i32 = s
        .parse()
        .map_err(|_| format!("not a coordinate: {}", s))?;
    if !(0..8).contains(&v) {
        return Err(format!("coordinate out of range: {}", v));
    }
    Ok(v)
}

fn parse_algebraic(s: &str) -> Result<(i32, i32), String> {
    let sq: crate::board::Square = s.parse().map_err(|e| format!("{}", e))?;
    Ok((sq.row() as i32, sq.col() as i32))
}
