//! FEN parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_counter(field: &'static str, text: &str) -> Result<u16, FenError> {
    text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut squares = [None; Square::COUNT];
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN lists the 8th rank first
            let rank = 7 - rank_index as u8;
            let mut file: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += digit as usize;
                    continue;
                }

                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::new(file as u8, rank).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: file + 1,
                })?;
                squares[sq.index()] = Some(piece);
                file += 1;
            }

            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file,
                });
            }
        }

        let side_to_move = Color::from_fen(fields[1]).ok_or_else(|| FenError::InvalidColor {
            found: fields[1].to_string(),
        })?;

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        let halfmove_clock = parse_counter("halfmove clock", fields[4])?;
        let fullmove_number = parse_counter("fullmove number", fields[5])?;

        let board = Board::from_parts(
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        )?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                let Some(sq) = Square::new(file, rank) else {
                    continue;
                };
                match self.colored_piece_on(sq) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                f.write_str("/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => f.write_str(" -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
