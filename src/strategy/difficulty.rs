//! Difficulty tiers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Move-selection policy tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Mostly random, otherwise takes immediate wins and blocks
    Easy,
    /// Occasionally random, otherwise a 4-ply minimax search
    Medium,
    /// Full minimax search; never loses
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Short description appended to move rationales
    pub fn note(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy: Basic strategy",
            Difficulty::Medium => "Medium: Strategic thinking",
            Difficulty::Hard => "Hard: Perfect play",
        }
    }

    /// Suggestion shown to a human who just lost at this tier
    pub fn rematch_hint(self) -> &'static str {
        match self {
            Difficulty::Easy => "Try medium difficulty for a bigger challenge!",
            Difficulty::Medium => "Good game! Try hard mode for the ultimate challenge!",
            Difficulty::Hard => "The Minimax algorithm is unbeatable on hard mode!",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" MEDIUM ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, crate::Error::ParseDifficulty { .. }));
    }

    #[test]
    fn test_default_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
