//! Pattern weights for connect-five evaluation
//!
//! A line pattern is classified by `count` (contiguous same-player stones
//! including the origin) and `block` (how many of its two ends are closed
//! by the board edge, an opponent stone, or the capped look-ahead window).
//! "Live" patterns have both ends open, "dead" patterns have one end
//! closed, and a fully enclosed line is worthless regardless of length.

/// Immutable score table mapping pattern categories to weights.
///
/// Injected into the searcher at construction; offense and defense
/// scoring and leaf evaluation all share the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternWeights {
    /// Five in a row - a win
    pub five: i64,
    /// Live four: _OOOO_ (two winning extensions)
    pub live_four: i64,
    /// Dead four: XOOOO_ (one winning extension)
    pub dead_four: i64,
    /// Live three: _OOO_ (becomes a live four if unanswered)
    pub live_three: i64,
    /// Dead three: XOOO_
    pub dead_three: i64,
    /// Live two: _OO_
    pub live_two: i64,
    /// Dead two: XOO_
    pub dead_two: i64,
    /// Lone stone
    pub one: i64,
}

impl Default for PatternWeights {
    fn default() -> Self {
        Self {
            five: 100_000_000,
            live_four: 10_000_000,
            dead_four: 1_000_000,
            live_three: 100_000,
            dead_three: 10_000,
            live_two: 1_000,
            dead_two: 100,
            one: 10,
        }
    }
}

impl PatternWeights {
    /// Score a line pattern by stone count and closed-end count.
    ///
    /// A pattern blocked on both ends scores 0 regardless of count; a
    /// count of five or more scores `five` whether or not one end is
    /// closed.
    pub fn score(&self, count: u32, block: u32) -> i64 {
        if block >= 2 {
            // Both ends closed, no way to extend to five
            return 0;
        }

        match count {
            5.. => self.five,
            4 => {
                if block == 0 {
                    self.live_four
                } else {
                    self.dead_four
                }
            }
            3 => {
                if block == 0 {
                    self.live_three
                } else {
                    self.dead_three
                }
            }
            2 => {
                if block == 0 {
                    self.live_two
                } else {
                    self.dead_two
                }
            }
            1 => self.one,
            0 => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_hierarchy() {
        let w = PatternWeights::default();
        assert!(w.five > w.live_four);
        assert!(w.live_four > w.dead_four);
        assert!(w.dead_four > w.live_three);
        assert!(w.live_three > w.dead_three);
        assert!(w.dead_three > w.live_two);
        assert!(w.live_two > w.dead_two);
        assert!(w.dead_two > w.one);
    }

    #[test]
    fn test_live_beats_dead_for_equal_count() {
        let w = PatternWeights::default();
        for count in 2..=4 {
            assert!(
                w.score(count, 0) > w.score(count, 1),
                "live {count} should outscore dead {count}"
            );
        }
    }

    #[test]
    fn test_five_ignores_single_block() {
        let w = PatternWeights::default();
        assert_eq!(w.score(5, 0), w.five);
        assert_eq!(w.score(5, 1), w.five);
        assert_eq!(w.score(7, 1), w.five);
    }

    #[test]
    fn test_fully_blocked_scores_zero() {
        let w = PatternWeights::default();
        for count in 1..=6 {
            assert_eq!(w.score(count, 2), 0);
            assert_eq!(w.score(count, 3), 0);
        }
        // Geometrically impossible mid-game, but the table defines it
        assert_eq!(w.score(5, 2), 0);
    }

    #[test]
    fn test_lone_stone_score() {
        let w = PatternWeights::default();
        assert_eq!(w.score(1, 0), w.one);
        assert_eq!(w.score(1, 1), w.one);
    }
}
