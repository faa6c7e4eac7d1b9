//! Error types for the career engine.

use thiserror::Error;

use muster_mechanics::MechError;

/// Result type for career operations.
pub type CareerResult<T> = Result<T, CareerError>;

/// Errors that can occur while running careers.
///
/// Every variant is a programmer or data error: the operation that raised
/// it is abandoned and the caller reports it with the context carried here.
#[derive(Debug, Error)]
pub enum CareerError {
    /// An operation was attempted in a status or mandate that forbids it.
    #[error("{track}: cannot {operation}: {reason}")]
    InvalidState {
        /// Career track name.
        track: String,
        /// The attempted operation.
        operation: &'static str,
        /// Why it is not allowed now.
        reason: String,
    },

    /// An explicit assignment is not one of the track's specializations.
    #[error("{track}: unknown assignment '{assignment}'")]
    UnknownAssignment {
        /// Career track name.
        track: String,
        /// The rejected assignment.
        assignment: String,
    },

    /// The character cannot currently take this track.
    #[error("ineligible for career: {0}")]
    IneligibleCareer(String),

    /// A career table is missing an entry or is internally inconsistent.
    #[error("malformed table {track}: {detail}")]
    MalformedTable {
        /// Career track name.
        track: String,
        /// What is wrong.
        detail: String,
    },

    /// A decision was requested with nothing to choose from.
    #[error("no options offered for '{0}'")]
    NoOptions(String),

    /// A choice provider returned an index outside the offered options.
    #[error("choice {index} out of range for '{prompt}'")]
    ChoiceOutOfRange {
        /// The prompt that was asked.
        prompt: String,
        /// The returned index.
        index: usize,
    },

    /// Dice or character sheet error.
    #[error("{0}")]
    Mech(#[from] MechError),

    /// Catalog or snapshot JSON could not be read.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive input failed.
    #[error("input: {0}")]
    Io(#[from] std::io::Error),
}

impl CareerError {
    /// Shorthand for [`CareerError::InvalidState`].
    pub fn invalid_state(
        track: impl Into<String>,
        operation: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidState {
            track: track.into(),
            operation,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CareerError::MalformedTable`].
    pub fn malformed(track: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedTable {
            track: track.into(),
            detail: detail.into(),
        }
    }
}
