use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Qualitative label for a total score. Variants are ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "medium match")]
    MediumMatch,
    #[serde(rename = "low match")]
    LowMatch,
    #[serde(rename = "very low match")]
    VeryLowMatch,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::Excellent,
        Rating::Good,
        Rating::MediumMatch,
        Rating::LowMatch,
        Rating::VeryLowMatch,
    ];

    pub const fn from_total(total: u8) -> Self {
        match total {
            85.. => Rating::Excellent,
            75..=84 => Rating::Good,
            65..=74 => Rating::MediumMatch,
            50..=64 => Rating::LowMatch,
            _ => Rating::VeryLowMatch,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::MediumMatch => "medium match",
            Rating::LowMatch => "low match",
            Rating::VeryLowMatch => "very low match",
        }
    }

    pub const fn stars(self) -> u8 {
        match self {
            Rating::Excellent => 5,
            Rating::Good => 4,
            Rating::MediumMatch => 3,
            Rating::LowMatch => 2,
            Rating::VeryLowMatch => 1,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rating label '{0}'")]
pub struct UnknownRating(pub String);

impl FromStr for Rating {
    type Err = UnknownRating;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Rating::ALL
            .into_iter()
            .find(|rating| rating.label() == normalized)
            .ok_or_else(|| UnknownRating(value.to_string()))
    }
}
