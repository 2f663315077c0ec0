//! Coloured pieces as stored on the board.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece kind together with the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Create a piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a FEN letter: uppercase for White, lowercase for Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        Some(Piece::new(kind, Color::of_fen_char(c)))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// FEN letter for this piece.
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn fen_letters_carry_color() {
        let white_rook = Piece::from_fen_char('R').unwrap();
        assert_eq!(white_rook.kind(), PieceKind::Rook);
        assert_eq!(white_rook.color(), Color::White);

        let black_pawn = Piece::from_fen_char('p').unwrap();
        assert_eq!(black_pawn, Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(Piece::from_fen_char('?'), None);
    }

    #[test]
    fn every_piece_survives_its_letter() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_fen_char(piece.fen_char()), Some(piece));
            }
        }
    }
}
