//! Per-letter clue marks and their `x`/`y`/`g` wire encoding.
//!
//! A [`LetterMark`] is what the player sets on each letter box. A
//! [`ClueString`] is the same information in the alphabet the solver
//! consumes. The mapping is total in both directions.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::EnumIter;
use tracing::instrument;

/// Feedback the player observed for one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, strum::Display)]
pub enum LetterMark {
    /// Letter is not in the word (or not yet marked).
    #[default]
    Unknown,
    /// Letter is in the word but in another position.
    Misplaced,
    /// Letter is in the word at this position.
    Correct,
}

impl LetterMark {
    /// Returns the next mark in the Unknown → Misplaced → Correct → Unknown cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Unknown => Self::Misplaced,
            Self::Misplaced => Self::Correct,
            Self::Correct => Self::Unknown,
        }
    }

    /// Returns the wire code for this mark.
    pub fn code(self) -> ClueCode {
        match self {
            Self::Unknown => ClueCode::X,
            Self::Misplaced => ClueCode::Y,
            Self::Correct => ClueCode::G,
        }
    }
}

/// A single character of the solver's clue alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueCode {
    /// `x`: letter absent.
    X,
    /// `y`: letter present, wrong position.
    Y,
    /// `g`: letter present, right position.
    G,
}

impl ClueCode {
    /// Returns the lowercase wire character.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::G => 'g',
        }
    }

    /// Parses a wire character, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'g' => Some(Self::G),
            _ => None,
        }
    }

    /// Returns the mark this code stands for.
    pub fn mark(self) -> LetterMark {
        match self {
            Self::X => LetterMark::Unknown,
            Self::Y => LetterMark::Misplaced,
            Self::G => LetterMark::Correct,
        }
    }
}

impl fmt::Display for ClueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Wire encoding of a full mark sequence, e.g. `gxyxx`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ClueString(Vec<ClueCode>);

impl ClueString {
    /// Returns the codes in positional order.
    pub fn codes(&self) -> &[ClueCode] {
        &self.0
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the clue has no positions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if every position is `g`.
    pub fn is_solved(&self) -> bool {
        is_solved(self)
    }
}

impl From<Vec<ClueCode>> for ClueString {
    fn from(codes: Vec<ClueCode>) -> Self {
        Self(codes)
    }
}

impl fmt::Display for ClueString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}

impl FromStr for ClueString {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, found)| {
                ClueCode::from_char(found).ok_or(ClueError::InvalidCode { position, found })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Serialize for ClueString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClueString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Error parsing clue text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ClueError {
    /// A character outside `x`, `y`, `g`.
    #[display("Invalid clue character '{found}' at position {position}; expected x, y, or g")]
    InvalidCode {
        /// Zero-based position of the offending character.
        position: usize,
        /// The character that was found.
        found: char,
    },
}

/// Encodes marks positionally into a [`ClueString`].
#[instrument(level = "trace")]
pub fn encode(marks: &[LetterMark]) -> ClueString {
    ClueString(marks.iter().map(|mark| mark.code()).collect())
}

/// Decodes a [`ClueString`] back into marks.
#[instrument(level = "trace")]
pub fn decode(clue: &ClueString) -> Vec<LetterMark> {
    clue.codes().iter().map(|code| code.mark()).collect()
}

/// True iff the clue is non-empty and every code is `g`.
pub fn is_solved(clue: &ClueString) -> bool {
    !clue.is_empty() && clue.codes().iter().all(|code| *code == ClueCode::G)
}
