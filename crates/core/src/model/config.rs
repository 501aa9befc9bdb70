use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while building a practice configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question count must be positive")]
    ZeroQuestionCount,

    #[error("anchor number {anchor} is outside the supported range 0-{MAX_ANCHOR}")]
    AnchorOutOfRange { anchor: u8 },

    #[error("unsupported operation kind: {0:?}")]
    UnsupportedOperation(String),
}

//
// ─── OPERATION ────────────────────────────────────────────────────────────────
//

/// Arithmetic operation a session drills.
///
/// Division showed up in an abandoned revision of the app and is deliberately
/// not represented; an unknown kind fails at the parse boundary instead of
/// reaching question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    /// Glyph used when rendering a question (`5 × 3 = ?`).
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
        }
    }

    /// Stable lowercase name, the inverse of `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition" => Ok(Operation::Addition),
            "subtraction" => Ok(Operation::Subtraction),
            "multiplication" => Ok(Operation::Multiplication),
            other => Err(ConfigError::UnsupportedOperation(other.to_string())),
        }
    }
}

//
// ─── PRACTICE CONFIG ──────────────────────────────────────────────────────────
//

/// Largest anchor number the selector offers (the 1-9 grid in the host UI).
pub const MAX_ANCHOR: u8 = 9;

/// Immutable configuration for one practice session.
///
/// Owned by the session for its lifetime; a retry builds a fresh session from
/// a fresh config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeConfig {
    operation: Operation,
    anchor: u8,
    count: u32,
}

impl PracticeConfig {
    /// Validating factory; nothing is partially constructed on failure.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroQuestionCount` when `count` is zero and
    /// `ConfigError::AnchorOutOfRange` when `anchor` exceeds `MAX_ANCHOR`.
    pub fn new(operation: Operation, anchor: u8, count: u32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroQuestionCount);
        }
        if anchor > MAX_ANCHOR {
            return Err(ConfigError::AnchorOutOfRange { anchor });
        }

        Ok(Self {
            operation,
            anchor,
            count,
        })
    }

    /// Parse the operation from its wire name, then validate the rest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedOperation` for unknown kinds, plus
    /// the same validation failures as [`PracticeConfig::new`].
    pub fn from_parts(operation: &str, anchor: u8, count: u32) -> Result<Self, ConfigError> {
        Self::new(operation.parse()?, anchor, count)
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The number the learner chose to drill.
    #[must_use]
    pub fn anchor(&self) -> u8 {
        self.anchor
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
