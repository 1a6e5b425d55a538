//! Game difficulty levels.
//!
//! A level decides how large the operands of a problem may grow and how many
//! points a correct answer is worth.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty level chosen when a game starts.
///
/// On the wire a level is the string `"1"`, `"2"` or `"3"`.
///
/// # Example
///
/// ```rust
/// use mental_math::core::Level;
///
/// let level: Level = "2".parse().unwrap();
/// assert_eq!(level, Level::Two);
/// assert_eq!(level.bound(), 81);
/// assert_eq!(level.points(), 100);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    One,
    Two,
    Three,
}

/// A level value that is not one of `"1"`, `"2"`, `"3"`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown level '{0}', expected 1, 2 or 3")]
pub struct UnknownLevel(pub String);

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Numeric value of the level, used as the exponent of the operand bound.
    pub fn number(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Exclusive upper bound for operands: `9^level`.
    pub fn bound(self) -> i64 {
        9_i64.pow(self.number())
    }

    /// Points awarded for each correct answer at this level.
    pub fn points(self) -> u64 {
        match self {
            Self::One => 10,
            Self::Two => 100,
            Self::Three => 1000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = UnknownLevel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
