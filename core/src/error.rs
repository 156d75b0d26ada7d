use alloc::string::String;
use thiserror::Error;

use crate::SquareId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough distinct prompts, need {required} but only {available} available")]
    InsufficientPrompts { available: usize, required: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Reasons a stored snapshot is rejected. None of these reach the player, the
/// session falls back to a fresh game instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Snapshot could not be parsed: {0}")]
    Malformed(String),
    #[error("Snapshot version {found} does not match schema version {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Square at position {position} is invalid: {reason}")]
    InvalidBoard {
        position: SquareId,
        reason: &'static str,
    },
    #[error("Winning line is not one of the board lines")]
    InvalidLine,
    #[error("Snapshot fields disagree with the game state: {0}")]
    Inconsistent(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,
    #[error("Storage backend failed: {0}")]
    Backend(String),
}
