//! Error types for the mechanics layer.

/// Errors that can occur while rolling dice or touching a character sheet.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A stat value fell outside the modifier table (0-20).
    #[error("stat value {0} is outside the modifier table")]
    InvalidStatValue(u32),

    /// A stat name could not be recognized.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// A skill or speciality is not in the known skill list.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// A dice expression was malformed.
    #[error("invalid dice expression: {0}")]
    InvalidDice(String),

    /// A scripted dice source ran out of recorded results.
    #[error("scripted dice exhausted while rolling {0}")]
    DiceExhausted(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
