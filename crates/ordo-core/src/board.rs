//! Read-only position snapshot queried by move ordering.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A chess position stored as a 64-square mailbox.
///
/// Ordering only ever asks "what stands on this square", so the board keeps
/// one optional piece per square rather than per-kind bitboards.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Board {
    /// The standard starting position.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut squares = [None; Square::COUNT];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            squares[file] = Some(Piece::new(kind, Color::White));
            squares[8 + file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            squares[48 + file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            squares[56 + file] = Some(Piece::new(kind, Color::Black));
        }

        Board {
            squares,
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Assemble a board from parsed FEN fields and validate it.
    pub(crate) fn from_parts(
        squares: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Result<Board, BoardError> {
        let board = Board {
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };
        board.validate()?;
        Ok(board)
    }

    /// The occupant of `sq`, if any.
    #[inline]
    pub fn colored_piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// The kind of piece on `sq`, regardless of colour.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        self.squares[sq.index()].map(Piece::kind)
    }

    /// The colour of the piece on `sq`.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.squares[sq.index()].map(Piece::color)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Check that each side has one king and no pawn stands on a back rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .squares
                .iter()
                .flatten()
                .filter(|p| **p == Piece::new(PieceKind::King, color))
                .count();
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = Square::all()
            .filter(|sq| sq.rank() == 0 || sq.rank() == 7)
            .any(|sq| self.piece_on(sq) == Some(PieceKind::Pawn));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}
