//! Heuristic scoring for candidate moves and leaf positions
//!
//! Three layers, bottom up:
//! - [`evaluate_line`]: classify one direction through a stone into a
//!   (count, block) pattern and look up its weight.
//! - [`evaluate_point`]: sum the four line directions through a cell.
//!   A stone contributes once per direction; cross-direction overlap is
//!   intentionally not deduplicated.
//! - [`evaluate_position`] ranks an empty cell for move ordering (offense
//!   plus discounted defense plus a centrality bonus), while
//!   [`evaluate_board`] is the signed whole-board sum used at search
//!   leaves.

use crate::board::{BoardState, Player, Pos};

use super::patterns::PatternWeights;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Defense is worth slightly less than offense when ranking candidates.
const DEFENSE_DISCOUNT: f64 = 0.9;

/// Maximum centrality bonus, fading with Manhattan distance from center.
const CENTER_BONUS: i64 = 10;

/// Score the line through `pos` along `(dr, dc)` for `player`.
///
/// Walks up to 4 steps in each of the two opposite directions. An
/// opponent stone or the board edge closes that end; an empty cell stops
/// counting without closing; walking all 4 steps on same-colored stones
/// also closes the end (the look-ahead window caps at a 5-cell span).
pub fn evaluate_line(
    state: &BoardState,
    pos: Pos,
    dr: i32,
    dc: i32,
    player: Player,
    weights: &PatternWeights,
) -> i64 {
    let mut count = 1;
    let mut block = 0;

    for sign in [1, -1] {
        let mut step = 1;
        while step < 5 {
            let row = pos.row as i32 + dr * step * sign;
            let col = pos.col as i32 + dc * step * sign;
            if !state.in_bounds(row, col) {
                block += 1;
                break;
            }
            match state.get(Pos::new(row as usize, col as usize)) {
                Some(p) if p == player => {
                    count += 1;
                    step += 1;
                }
                None => break,
                Some(_) => {
                    block += 1;
                    break;
                }
            }
        }
        if step == 5 {
            block += 1;
        }
    }

    weights.score(count, block)
}

/// Sum of the four-direction pattern scores for `player` at `pos`.
pub fn evaluate_point(
    state: &BoardState,
    pos: Pos,
    player: Player,
    weights: &PatternWeights,
) -> i64 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| evaluate_line(state, pos, dr, dc, player, weights))
        .sum()
}

/// Rank an empty cell as a candidate move for `player`.
///
/// Temporarily places the mover's stone to score offense, then the
/// opponent's stone to score defense (discounted), restores the cell,
/// and adds a small bonus for central cells. The same scalar orders
/// candidates at every ply.
pub fn evaluate_position(
    state: &mut BoardState,
    pos: Pos,
    player: Player,
    weights: &PatternWeights,
) -> f64 {
    let opponent = player.opponent();

    state.place(pos, player);
    let offense = evaluate_point(state, pos, player, weights);

    state.place(pos, opponent);
    let defense = evaluate_point(state, pos, opponent, weights);

    state.clear(pos);

    let center = state.center();
    let dist = pos.row.abs_diff(center.row) + pos.col.abs_diff(center.col);
    let centrality = (CENTER_BONUS - dist as i64).max(0);

    offense as f64 + defense as f64 * DEFENSE_DISCOUNT + centrality as f64
}

/// Static evaluation of the whole board from `perspective`.
///
/// Sums every occupied cell's four-direction pattern score, signed
/// positive for the perspective player and negative for the opponent.
pub fn evaluate_board(state: &BoardState, perspective: Player, weights: &PatternWeights) -> i64 {
    let mut score = 0;

    for row in 0..state.size() {
        for col in 0..state.size() {
            let pos = Pos::new(row, col);
            match state.get(pos) {
                Some(p) if p == perspective => {
                    score += evaluate_point(state, pos, p, weights);
                }
                Some(p) => {
                    score -= evaluate_point(state, pos, p, weights);
                }
                None => {}
            }
        }
    }

    score
}
