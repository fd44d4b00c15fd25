//! Mood tiers derived from hunger and boredom.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mood of a pet, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    ExtremelyHappy,
    Happy,
    Content,
    Unhappy,
    Mad,
    RagingMad,
    PassedOut,
}

/// Upper bounds (exclusive) of every tier except the terminal one.
const THRESHOLDS: [(u64, Mood); 6] = [
    (5, Mood::ExtremelyHappy),
    (10, Mood::Happy),
    (25, Mood::Content),
    (50, Mood::Unhappy),
    (75, Mood::Mad),
    (95, Mood::RagingMad),
];

impl Mood {
    /// Derive the mood from `hunger + boredom`.
    pub fn from_factor(factor: u64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(limit, _)| factor < *limit)
            .map_or(Mood::PassedOut, |(_, mood)| *mood)
    }

    /// Passed out is the end of the game.
    pub fn is_terminal(self) -> bool {
        self == Mood::PassedOut
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::ExtremelyHappy => "Extremely Happy",
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Unhappy => "Unhappy",
            Mood::Mad => "Mad",
            Mood::RagingMad => "Raging Mad",
            Mood::PassedOut => "Passed Out",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Mood::ExtremelyHappy)]
    #[case(4, Mood::ExtremelyHappy)]
    #[case(5, Mood::Happy)]
    #[case(9, Mood::Happy)]
    #[case(10, Mood::Content)]
    #[case(24, Mood::Content)]
    #[case(25, Mood::Unhappy)]
    #[case(49, Mood::Unhappy)]
    #[case(50, Mood::Mad)]
    #[case(74, Mood::Mad)]
    #[case(75, Mood::RagingMad)]
    #[case(94, Mood::RagingMad)]
    #[case(95, Mood::PassedOut)]
    #[case(10_000, Mood::PassedOut)]
    fn test_boundaries(#[case] factor: u64, #[case] expected: Mood) {
        assert_eq!(Mood::from_factor(factor), expected);
    }

    #[test]
    fn test_severity_never_decreases() {
        let mut previous = Mood::from_factor(0);
        for factor in 1..200 {
            let mood = Mood::from_factor(factor);
            assert!(mood >= previous, "mood improved at factor {factor}");
            previous = mood;
        }
    }

    #[test]
    fn test_only_passed_out_is_terminal() {
        assert!(Mood::PassedOut.is_terminal());
        assert!(!Mood::RagingMad.is_terminal());
        assert_eq!(Mood::RagingMad.to_string(), "Raging Mad");
    }
}
