pub mod attacks;
pub mod board;
pub mod engine;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod protocol;
pub mod rules;

pub use board::{Board, CastlingRights, Color, LastMove, Piece, PieceKind, Position, Square, START_FEN};
pub use engine::Engine;
pub use fen::FenError;
pub use rules::GameCondition;
