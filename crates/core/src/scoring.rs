//! Scoring module - line clear reward policy
//!
//! Rewards are flat: every cleared row pays the same score and the same
//! credit grant, with no level or combo multipliers.

use blockfall_types::{LINE_CLEAR_CREDITS, LINE_CLEAR_SCORE};

/// Score awarded for clearing `lines` rows in one lock
pub fn line_clear_score(lines: u32) -> u32 {
    lines * LINE_CLEAR_SCORE
}

/// Credits granted for clearing `lines` rows in one lock
pub fn line_clear_credits(lines: u32) -> u32 {
    lines * LINE_CLEAR_CREDITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_clear_rewards() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);

        assert_eq!(line_clear_credits(0), 0);
        assert_eq!(line_clear_credits(1), 1);
        assert_eq!(line_clear_credits(4), 4);
    }
}
