//! Moves packed into 16 bits.

use std::fmt;

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const PROMO_MASK: u16 = 0x3000;
const KIND_MASK: u16 = 0xC000;
const DST_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;
const KIND_SHIFT: u32 = 14;

/// How a move is executed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Normal = 0,
    Promotion = 1,
    EnPassant = 2,
    Castling = 3,
}

/// A move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source square
/// bits  6-11: destination square
/// bits 12-13: promotion target (Knight=0, Bishop=1, Rook=2, Queen=3)
/// bits 14-15: move kind
/// ```
///
/// Equality compares all 16 bits, so two moves are equal only when source,
/// destination, promotion target and kind all agree.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// The "no move" sentinel (a1a1, Normal). No legal move has equal source and
    /// destination, so it never compares equal to a generated move.
    pub const NULL: Move = Move(0);

    const fn pack(source: Square, dest: Square, kind: MoveKind) -> u16 {
        (source.index() as u16) | ((dest.index() as u16) << DST_SHIFT) | ((kind as u16) << KIND_SHIFT)
    }

    /// A quiet move or an ordinary capture.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move(Self::pack(source, dest, MoveKind::Normal))
    }

    /// A pawn promotion to `target`.
    ///
    /// Returns `None` unless `target` is a knight, bishop, rook or queen.
    pub const fn new_promotion(source: Square, dest: Square, target: PieceKind) -> Option<Move> {
        let promo: u16 = match target {
            PieceKind::Knight => 0,
            PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::Queen => 3,
            PieceKind::Pawn | PieceKind::King => return None,
        };
        Some(Move(Self::pack(source, dest, MoveKind::Promotion) | (promo << PROMO_SHIFT)))
    }

    /// An en passant capture; `dest` is the empty square the pawn lands on.
    pub const fn new_en_passant(source: Square, dest: Square) -> Move {
        Move(Self::pack(source, dest, MoveKind::EnPassant))
    }

    /// A castling move, given by the king's source and destination.
    pub const fn new_castle(king_src: Square, king_dst: Square) -> Move {
        Move(Self::pack(king_src, king_dst, MoveKind::Castling))
    }

    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    pub const fn kind(self) -> MoveKind {
        match (self.0 & KIND_MASK) >> KIND_SHIFT {
            0 => MoveKind::Normal,
            1 => MoveKind::Promotion,
            2 => MoveKind::EnPassant,
            _ => MoveKind::Castling,
        }
    }

    /// The promotion target, or `None` for every non-promoting move.
    pub const fn promotion(self) -> Option<PieceKind> {
        if !matches!(self.kind(), MoveKind::Promotion) {
            return None;
        }
        match (self.0 & PROMO_MASK) >> PROMO_SHIFT {
            0 => Some(PieceKind::Knight),
            1 => Some(PieceKind::Bishop),
            2 => Some(PieceKind::Rook),
            _ => Some(PieceKind::Queen),
        }
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Parse UCI long algebraic notation (`e2e4`, `e7e8q`) against `board`.
    ///
    /// The board decides the move kind: a king stepping two files castles, and
    /// a pawn moving diagonally onto the en passant square captures en passant.
    /// Returns `None` for malformed text or an empty source square. `"0000"`
    /// parses as [`Move::NULL`].
    pub fn from_uci(text: &str, board: &Board) -> Option<Move> {
        if text == "0000" {
            return Some(Move::NULL);
        }
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return None;
        }
        let source = Square::from_algebraic(&text[0..2])?;
        let dest = Square::from_algebraic(&text[2..4])?;
        let mover = board.piece_on(source)?;

        let last_rank = dest.rank() == 0 || dest.rank() == 7;

        if let Some(c) = text[4..].chars().next() {
            if mover != PieceKind::Pawn || !last_rank || c.is_ascii_uppercase() {
                return None;
            }
            return Move::new_promotion(source, dest, PieceKind::from_fen_char(c)?);
        }
        // A pawn reaching the last rank must name its promotion target.
        if mover == PieceKind::Pawn && last_rank {
            return None;
        }

        let file_delta = source.file().abs_diff(dest.file());
        let mv = match mover {
            PieceKind::King if file_delta == 2 => Move::new_castle(source, dest),
            PieceKind::Pawn if file_delta == 1 && board.en_passant() == Some(dest) && !board.is_occupied(dest) => {
                Move::new_en_passant(source, dest)
            }
            _ => Move::new(source, dest),
        };
        Some(mv)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }
        write!(f, "{}{}", self.source(), self.dest())?;
        if let Some(target) = self.promotion() {
            write!(f, "{}", target.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind};
    use crate::board::Board;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).unwrap()
    }

    #[test]
    fn fields_unpack() {
        let mv = Move::new(sq("g1"), sq("f3"));
        assert_eq!(mv.source(), sq("g1"));
        assert_eq!(mv.dest(), sq("f3"));
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert_eq!(mv.promotion(), None);
        assert_eq!(std::mem::size_of::<Move>(), 2);
    }

    #[test]
    fn promotion_targets_unpack() {
        for target in PieceKind::PROMOTIONS {
            let mv = Move::new_promotion(sq("b7"), sq("a8"), target).unwrap();
            assert_eq!(mv.kind(), MoveKind::Promotion);
            assert_eq!(mv.promotion(), Some(target));
            assert_eq!(mv.dest(), sq("a8"));
        }
    }

    #[test]
    fn equality_covers_promotion_target() {
        let queen = Move::new_promotion(sq("e7"), sq("e8"), PieceKind::Queen).unwrap();
        let knight = Move::new_promotion(sq("e7"), sq("e8"), PieceKind::Knight).unwrap();
        assert_ne!(queen, knight);
        assert_ne!(queen, Move::new(sq("e7"), sq("e8")));
    }

    #[test]
    fn null_is_distinct_from_real_moves() {
        assert!(Move::NULL.is_null());
        assert_eq!(Move::NULL.source(), Move::NULL.dest());
        assert_ne!(Move::new(sq("a1"), sq("a2")), Move::NULL);
        assert_eq!(Move::NULL.to_string(), "0000");
    }

    #[test]
    fn uci_text() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_string(), "e2e4");
        assert_eq!(Move::new_promotion(sq("e7"), sq("e8"), PieceKind::Rook).unwrap().to_string(), "e7e8r");
    }

    #[test]
    fn from_uci_resolves_kind_from_board() {
        let board: Board = "r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1".parse().unwrap();
        assert_eq!(Move::from_uci("e1g1", &board).map(Move::kind), Some(MoveKind::Castling));
        assert_eq!(Move::from_uci("e5d6", &board).map(Move::kind), Some(MoveKind::EnPassant));
        assert_eq!(Move::from_uci("e1f1", &board).map(Move::kind), Some(MoveKind::Normal));
        assert_eq!(Move::from_uci("a1a8", &board), Some(Move::new(sq("a1"), sq("a8"))));
    }

    #[test]
    fn from_uci_promotion() {
        let board: Board = "7k/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(
            Move::from_uci("e7e8q", &board),
            Move::new_promotion(sq("e7"), sq("e8"), PieceKind::Queen)
        );
        assert_eq!(Move::from_uci("e7e8k", &board), None);
        assert_eq!(Move::from_uci("e7e8Q", &board), None);
    }

    #[test]
    fn from_uci_rejects_bad_input() {
        let board = Board::starting_position();
        assert_eq!(Move::from_uci("e3e4", &board), None, "empty source");
        assert_eq!(Move::from_uci("e2", &board), None);
        assert_eq!(Move::from_uci("e2e9", &board), None);
        assert_eq!(Move::from_uci("0000", &board), Some(Move::NULL));

        let board: Board = "7k/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(Move::from_uci("e7e8", &board), None, "promotion without target");
        assert_eq!(Move::from_uci("e1e2q", &board), None, "king with promotion suffix");
        assert_eq!(Move::from_uci("e7e6q", &board), None, "suffix off the last rank");
    }

    #[test]
    fn new_promotion_rejects_pawn_and_king() {
        assert_eq!(Move::new_promotion(sq("e7"), sq("e8"), PieceKind::Pawn), None);
        assert_eq!(Move::new_promotion(sq("e7"), sq("e8"), PieceKind::King), None);
    }
}
