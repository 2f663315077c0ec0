//! Command-line options and the scoring run they drive.

use clap::Parser;
use ordo_core::{Board, FenError, Move};
use ordo_engine::{CaptureOnlyPolicy, HistoryTable, MAX_MOVES, MainSearchPolicy, MovePicker};

/// Score candidate moves for a position and print them in search order.
#[derive(Debug, Parser)]
#[command(name = "ordo", version)]
pub struct Options {
    /// Position to score moves in; the starting position when omitted.
    #[arg(long, conflicts_with = "startpos")]
    pub fen: Option<String>,

    /// Use the standard starting position.
    #[arg(long)]
    pub startpos: bool,

    /// Transposition-table move, or 0000 for none.
    #[arg(long, default_value = "0000")]
    pub tt: String,

    /// Killer move for this ply; may be given twice, most recent first.
    #[arg(long = "killer")]
    pub killers: Vec<String>,

    /// Score as a capture-only (quiescence) pass.
    #[arg(long)]
    pub captures: bool,

    /// Candidate moves in UCI notation.
    #[arg(required = true)]
    pub moves: Vec<String>,
}

/// Problems with the positions or moves given on the command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid FEN \"{fen}\"")]
    InvalidFen {
        fen: String,
        #[source]
        source: FenError,
    },

    /// The text is not a move from an occupied square in this position.
    #[error("invalid move: {uci_move}")]
    InvalidMove { uci_move: String },

    #[error("at most 2 killer moves are allowed, got {count}")]
    TooManyKillers { count: usize },

    #[error("at most {max} candidate moves are allowed, got {count}", max = MAX_MOVES)]
    TooManyMoves { count: usize },
}

fn parse_move(text: &str, board: &Board) -> Result<Move, CliError> {
    Move::from_uci(text, board).ok_or_else(|| CliError::InvalidMove {
        uci_move: text.to_string(),
    })
}

/// Build the position and policy described by `options` and return the
/// candidate moves in picking order with their scores.
pub fn score_moves(options: &Options) -> Result<Vec<(Move, i32)>, CliError> {
    let board = match &options.fen {
        Some(fen) if !options.startpos => fen.parse::<Board>().map_err(|source| CliError::InvalidFen {
            fen: fen.clone(),
            source,
        })?,
        _ => Board::starting_position(),
    };

    if options.killers.len() > 2 {
        return Err(CliError::TooManyKillers {
            count: options.killers.len(),
        });
    }
    if options.moves.len() > MAX_MOVES {
        return Err(CliError::TooManyMoves {
            count: options.moves.len(),
        });
    }

    let mut killers = [Move::NULL; 2];
    for (slot, text) in killers.iter_mut().zip(&options.killers) {
        *slot = parse_move(text, &board)?;
    }

    let tt_move = parse_move(&options.tt, &board)?;
    let moves = options
        .moves
        .iter()
        .map(|text| parse_move(text, &board))
        .collect::<Result<Vec<_>, _>>()?;

    let history = HistoryTable::new();
    let picker = if options.captures {
        let policy = CaptureOnlyPolicy::new(killers[0], killers[1], tt_move);
        MovePicker::new(&moves, &board, &history, &policy)
    } else {
        let policy = MainSearchPolicy::new(killers[0], killers[1], tt_move);
        MovePicker::new(&moves, &board, &history, &policy)
    };
    Ok(picker.collect())
}
