//! Move ordering via hash move, promotions, MVV-LVA captures, killers, and history.

use ordo_core::{Board, Color, Move, PieceKind};

use crate::search::heuristics::{HISTORY_MAX, HistoryTable};

/// Ceiling of the score range. The hash move scores one below it.
pub const MAX_PRIORITY: i32 = i32::MAX;

/// Row/column of the capture table used when there is no piece.
const NO_PIECE: usize = PieceKind::COUNT;

const CAPTURE_SCALE: i32 = 10_000;
const KILLER_ONE_SCORE: i32 = 900_000;
const KILLER_TWO_SCORE: i32 = 800_000;

const fn build_mvv_lva() -> [[i32; 7]; 7] {
    let mut table = [[0; 7]; 7];
    let mut victim = 0;
    while victim < NO_PIECE {
        let mut attacker = 0;
        while attacker < NO_PIECE {
            table[victim][attacker] = (2000 + 1000 * victim as i32) + (5 - attacker as i32);
            attacker += 1;
        }
        victim += 1;
    }
    table
}

/// MVV-LVA scores indexed by `[victim][attacker]` over
/// Pawn, Knight, Bishop, Rook, Queen, King and "no piece".
///
/// Entry `(v, a)` is `2000 + 1000 * v + (5 - a)`; the "no piece" row and
/// column are zero.
pub const MVV_LVA: [[i32; 7]; 7] = build_mvv_lva();

// Score bands must not overlap: lowest promotion above the best capture,
// weakest real capture above both killers, history below the second killer.
const _: () = {
    assert!(MAX_PRIORITY - 8 > MVV_LVA[PieceKind::King.index()][PieceKind::Pawn.index()] * CAPTURE_SCALE);
    assert!(MVV_LVA[PieceKind::Pawn.index()][PieceKind::King.index()] * CAPTURE_SCALE > KILLER_ONE_SCORE);
    assert!(KILLER_ONE_SCORE > KILLER_TWO_SCORE);
    assert!(KILLER_TWO_SCORE > HISTORY_MAX);
};

/// Per-node move scorer built from the node's killers and transposition-table move.
///
/// `CAPTURE_ONLY` is set for capture-generation passes (quiescence), where
/// every scored move is treated as a capture. Any of the three stored moves
/// may be [`Move::NULL`], which never matches a generated move.
#[derive(Debug, Clone, Copy)]
pub struct OrderingPolicy<const CAPTURE_ONLY: bool> {
    killer_one: Move,
    killer_two: Move,
    tt_move: Move,
}

/// Policy for the main search.
pub type MainSearchPolicy = OrderingPolicy<false>;

/// Policy for capture-only passes such as quiescence search.
pub type CaptureOnlyPolicy = OrderingPolicy<true>;

impl<const CAPTURE_ONLY: bool> OrderingPolicy<CAPTURE_ONLY> {
    pub fn new(killer_one: Move, killer_two: Move, tt_move: Move) -> Self {
        Self {
            killer_one,
            killer_two,
            tt_move,
        }
    }

    /// Score `mv` for ordering; higher scores are searched first.
    ///
    /// `piece` is the moving piece, `side` the side to move and `promotion`
    /// the promotion target, which the caller supplies for promoting moves
    /// only. The first matching band wins:
    ///
    /// - TT move: `MAX_PRIORITY - 1`
    /// - promotion: `MAX_PRIORITY - 8 + rank(target)`
    /// - capture: `MVV_LVA[victim][piece] * 10_000`
    /// - first killer: 900,000
    /// - second killer: 800,000
    /// - anything else: the history score
    ///
    /// In capture-only mode an empty destination (en passant) looks up the
    /// "no piece" row and scores 0.
    pub fn score(
        &self,
        board: &Board,
        history: &HistoryTable,
        mv: Move,
        piece: PieceKind,
        side: Color,
        promotion: Option<PieceKind>,
    ) -> i32 {
        if mv == self.tt_move {
            return MAX_PRIORITY - 1;
        }

        if let Some(target) = promotion {
            return MAX_PRIORITY - 8 + target.index() as i32;
        }

        let victim = board.piece_on(mv.dest());
        if CAPTURE_ONLY || victim.is_some() {
            let victim = victim.map_or(NO_PIECE, PieceKind::index);
            return MVV_LVA[victim][piece.index()] * CAPTURE_SCALE;
        }

        if mv == self.killer_one {
            return KILLER_ONE_SCORE;
        }
        if mv == self.killer_two {
            return KILLER_TWO_SCORE;
        }

        history.get(piece, side, mv.dest())
    }
}

// ── Move Picker ────────────────────────────────────────────────────────────────

/// Largest move list the picker holds; no chess position has more legal moves.
/// Callers feeding untrusted lists must reject longer ones before building a picker.
pub const MAX_MOVES: usize = 256;

/// Incremental move picker using selection sort.
///
/// Every move is scored once up front; [`pick_next`](Self::pick_next) then
/// yields moves in descending score order, earlier moves first on ties.
pub struct MovePicker {
    moves: [Move; MAX_MOVES],
    scores: [i32; MAX_MOVES],
    len: usize,
    cursor: usize,
}

impl MovePicker {
    /// Score `moves` for the position on `board`.
    ///
    /// The moving piece is read from the source square, the side to move from
    /// the board, and the promotion target from the move itself.
    pub fn new<const CAPTURE_ONLY: bool>(
        moves: &[Move],
        board: &Board,
        history: &HistoryTable,
        policy: &OrderingPolicy<CAPTURE_ONLY>,
    ) -> Self {
        debug_assert!(moves.len() <= MAX_MOVES, "move list too long: {}", moves.len());
        let len = moves.len().min(MAX_MOVES);
        let side = board.side_to_move();

        let mut picker = Self {
            moves: [Move::NULL; MAX_MOVES],
            scores: [0; MAX_MOVES],
            len,
            cursor: 0,
        };
        for (i, &mv) in moves.iter().take(len).enumerate() {
            let piece = board.piece_on(mv.source()).unwrap_or(PieceKind::Pawn);
            picker.moves[i] = mv;
            picker.scores[i] = policy.score(board, history, mv, piece, side, mv.promotion());
        }
        picker
    }

    /// Number of moves the picker was built with.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Yield the next highest-scored move with its score, or `None` when exhausted.
    pub fn pick_next(&mut self) -> Option<(Move, i32)> {
        if self.cursor >= self.len {
            return None;
        }

        let mut best_idx = self.cursor;
        for i in (self.cursor + 1)..self.len {
            if self.scores[i] > self.scores[best_idx] {
                best_idx = i;
            }
        }

        // Rotate instead of swapping so equal scores keep their input order.
        self.moves[self.cursor..=best_idx].rotate_right(1);
        self.scores[self.cursor..=best_idx].rotate_right(1);

        let picked = (self.moves[self.cursor], self.scores[self.cursor]);
        self.cursor += 1;
        Some(picked)
    }
}

impl Iterator for MovePicker {
    type Item = (Move, i32);

    fn next(&mut self) -> Option<Self::Item> {
        self.pick_next()
    }
}
