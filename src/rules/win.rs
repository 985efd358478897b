//! Win condition checking
//!
//! A move wins when it brings five or more same-colored stones into a
//! contiguous line; overlines count (no cap at exactly five).

use crate::board::{BoardState, Pos};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether the stone at `pos` completes five or more in a row.
///
/// Examines the four line directions through `pos`, counting contiguous
/// same-player stones extending both ways from the point (inclusive).
/// Returns `false` if the cell is empty.
pub fn connects_five(state: &BoardState, pos: Pos) -> bool {
    let Some(player) = state.get(pos) else {
        return false;
    };

    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;

        // Positive direction
        for step in 1..5 {
            let row = pos.row as i32 + dr * step;
            let col = pos.col as i32 + dc * step;
            if state.in_bounds(row, col)
                && state.get(Pos::new(row as usize, col as usize)) == Some(player)
            {
                count += 1;
            } else {
                break;
            }
        }

        // Negative direction
        for step in 1..5 {
            let row = pos.row as i32 - dr * step;
            let col = pos.col as i32 - dc * step;
            if state.in_bounds(row, col)
                && state.get(Pos::new(row as usize, col as usize)) == Some(player)
            {
                count += 1;
            } else {
                break;
            }
        }

        if count >= 5 {
            return true;
        }
    }

    false
}
