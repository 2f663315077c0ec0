//! Position model consumed by the move-ordering core: squares, pieces, moves and boards.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod piece;
mod piece_kind;
mod square;

pub use board::Board;
pub use castle_rights::CastleRights;
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
