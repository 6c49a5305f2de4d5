//! Move validation.
//!
//! Raw submissions are normalized (trimmed, lowercased) and checked against
//! the legal move set and the single-use bomb rule. Validation never mutates
//! game state; the caller decides what a rejected submission costs.

use super::types::Move;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Why a submitted move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidMoveError {
    /// The token is not one of rock, paper, scissors or bomb.
    #[display("Invalid move")]
    Unrecognized {
        /// The submission as typed.
        input: String,
    },

    /// The side already spent its bomb.
    #[display("Bomb already used")]
    BombAlreadyUsed,
}

impl std::error::Error for InvalidMoveError {}

/// Outcome of validating a raw submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The submission names a legal move.
    Valid {
        /// The normalized move.
        mv: Move,
    },
    /// The submission was rejected.
    Invalid {
        /// Why it was rejected.
        error: InvalidMoveError,
    },
}

impl Validation {
    /// Returns true for a legal submission.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }

    /// Returns the normalized move, if legal.
    pub fn mv(&self) -> Option<Move> {
        match self {
            Validation::Valid { mv } => Some(*mv),
            Validation::Invalid { .. } => None,
        }
    }

    /// Human-readable rejection reason, if rejected.
    pub fn reason(&self) -> Option<String> {
        match self {
            Validation::Valid { .. } => None,
            Validation::Invalid { error } => Some(error.to_string()),
        }
    }

    /// Converts into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<Move, InvalidMoveError> {
        match self {
            Validation::Valid { mv } => Ok(mv),
            Validation::Invalid { error } => Err(error),
        }
    }
}

/// Validates a raw submission for a side whose bomb state is `bomb_used`.
#[instrument]
pub fn validate_move(raw: &str, bomb_used: bool) -> Validation {
    let normalized = raw.trim().to_lowercase();

    let mv = match Move::from_str(&normalized) {
        Ok(mv) => mv,
        Err(_) => {
            debug!(input = %raw, "Unrecognized move token");
            return Validation::Invalid {
                error: InvalidMoveError::Unrecognized {
                    input: raw.to_string(),
                },
            };
        }
    };

    if mv.is_bomb() && bomb_used {
        debug!("Bomb submitted after it was spent");
        return Validation::Invalid {
            error: InvalidMoveError::BombAlreadyUsed,
        };
    }

    Validation::Valid { mv }
}
