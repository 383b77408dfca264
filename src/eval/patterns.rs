//! Window scores for Gomoku evaluation
//!
//! A window is five consecutive cells along one line. Its score depends only
//! on how many stones each side has in it: a window holding both colors is
//! dead and scores nothing.

/// Score thresholds shared by evaluation and search
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 1_000_000;
    /// Magnitude at which a position is treated as already decided.
    /// Search stops descending once the static score reaches it.
    pub const DECISIVE: i32 = 100_000;
}

/// Per-count window scores, indexed by stone count (0..=5).
///
/// `own` scores windows holding only the evaluating side's stones,
/// `opponent` windows holding only the other side's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub own: [i32; 6],
    pub opponent: [i32; 6],
}

impl Weights {
    /// Default table. Opponent shapes of two to four stones weigh more than
    /// the same own shapes, so blocking outranks building.
    pub const DEFAULT: Weights = Weights {
        own: [0, 10, 100, 1_000, 10_000, PatternScore::FIVE],
        opponent: [0, -10, -500, -5_000, -50_000, -PatternScore::FIVE],
    };

    /// Table whose opponent column is the exact negation of `own`.
    pub const fn mirrored(own: [i32; 6]) -> Weights {
        Weights {
            own,
            opponent: [-own[0], -own[1], -own[2], -own[3], -own[4], -own[5]],
        }
    }

    /// Score of one window given the stone counts inside it.
    #[inline]
    pub fn window_score(&self, own_count: usize, opponent_count: usize) -> i32 {
        debug_assert!(own_count + opponent_count <= 5);
        match (own_count, opponent_count) {
            (0, 0) => 0,
            (n, 0) => self.own[n],
            (0, n) => self.opponent[n],
            _ => 0, // blocked
        }
    }

    /// True when opponent scores are the exact negation of own scores.
    pub fn is_symmetric(&self) -> bool {
        self.own.iter().zip(&self.opponent).all(|(&a, &b)| a == -b)
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_scores_increase() {
        let w = Weights::DEFAULT;
        for n in 1..5 {
            assert!(w.own[n + 1] > w.own[n], "own[{}] should exceed own[{}]", n + 1, n);
            assert!(w.opponent[n + 1] < w.opponent[n]);
        }
    }

    #[test]
    fn test_default_table_values() {
        let w = Weights::DEFAULT;
        assert_eq!(w.window_score(1, 0), 10);
        assert_eq!(w.window_score(4, 0), 10_000);
        assert_eq!(w.window_score(5, 0), 1_000_000);
        assert_eq!(w.window_score(0, 2), -500);
        assert_eq!(w.window_score(0, 4), -50_000);
        assert_eq!(w.window_score(0, 5), -1_000_000);
    }

    #[test]
    fn test_mixed_and_empty_windows_are_dead() {
        let w = Weights::DEFAULT;
        assert_eq!(w.window_score(0, 0), 0);
        assert_eq!(w.window_score(1, 1), 0);
        assert_eq!(w.window_score(4, 1), 0);
        assert_eq!(w.window_score(2, 3), 0);
    }

    #[test]
    fn test_defense_outweighs_offense() {
        let w = Weights::DEFAULT;
        for n in 2..5 {
            assert!(
                -w.opponent[n] > w.own[n],
                "blocking {} should matter more than building {}",
                n,
                n
            );
        }
        assert!(!w.is_symmetric());
    }

    #[test]
    fn test_mirrored_is_symmetric() {
        let w = Weights::mirrored(Weights::DEFAULT.own);
        assert!(w.is_symmetric());
        assert_eq!(w.window_score(0, 3), -1_000);
    }

    #[test]
    fn test_decisive_below_five() {
        assert!(PatternScore::DECISIVE < PatternScore::FIVE);
        assert!(PatternScore::DECISIVE > Weights::DEFAULT.own[4]);
    }
}
