//! Command loop and session state for the arbitro text protocol

use std::io::{self, BufRead, Write};

use super::options::SessionOptions;
use super::parser::{parse_command, Command};
use crate::engine::Engine;

pub struct Session {
    engine: Engine,
    options: SessionOptions,
    running: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::with_engine(Engine::new(), SessionOptions::default())
    }

    pub fn with_engine(engine: Engine, options: SessionOptions) -> Self {
        Self {
            engine,
            options,
            running: true,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::Board => {
                res.extend(self.engine.board().to_string().lines().map(str::to_string));
            }
            Command::Turn => {
                res.push(self.engine.turn().to_string());
            }
            Command::Fen => {
                res.push(format!("fen {}", self.engine.fen()));
            }
            Command::Moves { row, col } => {
                let mut line = String::from("moves");
                for sq in self.engine.available_moves(row, col) {
                    line.push_str(&format!(" {},{}", sq.row(), sq.col()));
                }
                res.push(line);
            }
            Command::Move { from, to } => {
                if self.engine.apply_move(from, to.0, to.1) {
                    if self.options.debug {
                        if let Some(last) = self.engine.last_move() {
                            res.push(format!(
                                "info string played {} {}{}",
                                last.piece.to_fen_char(),
                                last.from,
                                last.to
                            ));
                        }
                    }
                    res.push("ok".to_string());
                } else {
                    res.push("illegal".to_string());
                }
            }
            Command::Condition => {
                let condition = self.engine.game_condition();
                res.push(format!("condition {}", condition));
                // La partita è finita: si ricomincia dalla posizione iniziale
                if condition.is_terminal() && self.options.auto_reset {
                    self.engine.reset();
                    res.push("info string board reset".to_string());
                }
            }
            Command::Reset => {
                self.engine.reset();
                res.push("info string board reset".to_string());
            }
            Command::Position { fen } => {
                let loaded = match fen {
                    Some(f) => self.engine.load_fen(&f),
                    None => {
                        self.engine.reset();
                        Ok(())
                    }
                };
                if let Err(e) = loaded {
                    res.push(format!("info string FEN parse error: {}", e));
                }
            }
            Command::SetOption { name, value } => {
                match self.options.set_option(&name, value.as_deref()) {
                    Ok(()) => res.push(format!(
                        "info string {} set to {}",
                        name,
                        value.unwrap_or_default()
                    )),
                    Err(e) => res.push(format!("info string error: {}", e)),
                }
            }
            Command::Options => {
                res.extend(self.options.describe());
            }
            Command::IsReady => {
                res.push("readyok".to_string());
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Invalid(msg) => {
                res.push(format!("info string error: {}", msg));
            }
            Command::Unknown(s) => {
                res.push(format!("info string unknown command: {}", s));
            }
        }
        res
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Read commands from `reader` until `quit` or EOF, writing replies to `writer`.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    let mut buf = String::new();

    while session.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_line(line, session) {
            writeln!(writer, "{}", r)?;
        }
        // Flush per comando: il client aspetta la risposta prima di inviare il successivo
        writer.flush()?;
    }

    Ok(())
}

/// Run a session over the process's stdin/stdout.
pub fn run_stdio(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(session, stdin.lock(), stdout.lock())
}

pub fn process_line(line: &str, session: &mut Session) -> Vec<String> {
    let cmd = parse_command(line);
    session.handle_command(cmd)
}
