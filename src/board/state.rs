//! Game state: grid, move history, turn order, and outcome

use super::{MoveRecord, Outcome, Player, Pos, DEFAULT_BOARD_SIZE};
use crate::rules::connects_five;

/// Full game state for one connect-five game.
///
/// All history-driven mutation goes through [`apply_move`](Self::apply_move)
/// and [`undo_last`](Self::undo_last), which keep the invariants:
/// occupied-cell count equals move-log length, and `turn` is the pending
/// mover while the game is in progress. Once the outcome is terminal no
/// further moves are accepted until an undo.
///
/// Cloning a state gives an independent deep copy, so speculative search
/// can work on a duplicate without side effects on the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    size: usize,
    grid: Vec<Option<Player>>,
    turn: Player,
    moves: Vec<MoveRecord>,
    outcome: Outcome,
}

impl BoardState {
    /// Create an empty default-sized board, Black to move.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty `size` x `size` board, Black to move.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            grid: vec![None; size * size],
            turn: Player::Black,
            moves: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Grid dimension, fixed for the state's lifetime.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Stone at position, `None` for an empty cell.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.grid[self.index(pos.row, pos.col)]
    }

    /// Current mover. After a win this is left pointing at the winner.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of applied moves (equals the occupied-cell count).
    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Most recently applied move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.moves.last().copied()
    }

    /// Center cell of the board.
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// Whether signed coordinates fall on the board.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Position at a signed offset from `pos`, if still on the board.
    #[inline]
    pub fn offset(&self, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
        let row = pos.row as i32 + dr;
        let col = pos.col as i32 + dc;
        if self.in_bounds(row, col) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.grid.iter().all(Option::is_some)
    }

    /// True iff the game is in progress, the coordinates are on the board,
    /// and the cell is empty. No side effects.
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        self.outcome == Outcome::InProgress
            && row < self.size
            && col < self.size
            && self.grid[self.index(row, col)].is_none()
    }

    /// Apply a move for the current mover.
    ///
    /// Returns `false` (no-op) if the move is illegal. On success the move
    /// is logged and the outcome recomputed: a win keeps `turn` on the
    /// winner, a full board yields a draw, otherwise the turn flips.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        if !self.is_legal(row, col) {
            return false;
        }

        let pos = Pos::new(row, col);
        let mover = self.turn;
        let idx = self.index(row, col);
        self.grid[idx] = Some(mover);
        self.moves.push(MoveRecord { pos, player: mover });

        if connects_five(self, pos) {
            self.outcome = Outcome::Win(mover);
        } else if self.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.turn = mover.opponent();
        }

        true
    }

    /// Undo the most recent move.
    ///
    /// Returns the popped record, or `None` if the history is empty. The
    /// popped mover gets the turn back and the outcome is reset to
    /// in-progress unconditionally.
    pub fn undo_last(&mut self) -> Option<MoveRecord> {
        let record = self.moves.pop()?;
        let idx = self.index(record.pos.row, record.pos.col);
        self.grid[idx] = None;
        self.turn = record.player;
        self.outcome = Outcome::InProgress;
        Some(record)
    }

    /// Place a stone directly, bypassing turn order, history, and outcome.
    /// Used for position setup and for the heuristic's temporary probes;
    /// use [`apply_move`](Self::apply_move) for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos.row, pos.col);
        self.grid[idx] = Some(player);
    }

    /// Remove a stone directly. Counterpart of [`place`](Self::place).
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = self.index(pos.row, pos.col);
        self.grid[idx] = None;
    }

    /// Empty cells within a square window of `radius` around any stone,
    /// deduplicated, in row-major order. An empty board yields the single
    /// center cell.
    ///
    /// This bounds search breadth to locally relevant squares instead of
    /// the full empty set.
    pub fn candidate_positions(&self, radius: usize) -> Vec<Pos> {
        let mut marked = vec![false; self.size * self.size];
        let mut any_stone = false;
        let reach = radius as i32;

        for row in 0..self.size {
            for col in 0..self.size {
                if self.grid[self.index(row, col)].is_none() {
                    continue;
                }
                any_stone = true;
                for dr in -reach..=reach {
                    for dc in -reach..=reach {
                        let nr = row as i32 + dr;
                        let nc = col as i32 + dc;
                        if !self.in_bounds(nr, nc) {
                            continue;
                        }
                        let idx = self.index(nr as usize, nc as usize);
                        if self.grid[idx].is_none() {
                            marked[idx] = true;
                        }
                    }
                }
            }
        }

        if !any_stone {
            return vec![self.center()];
        }

        let mut positions = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if marked[self.index(row, col)] {
                    positions.push(Pos::new(row, col));
                }
            }
        }
        positions
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
