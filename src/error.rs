//! Typing session error types

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Errors from keymap lookups and typing sessions
#[derive(Error, Debug)]
pub enum TypistError {
    /// Character has no binding in the US-layout table
    #[error("Unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },

    /// A report write landed fewer than 8 bytes on the device
    #[error("Short write: {written} of {expected} report bytes reached the device")]
    ShortWrite { written: usize, expected: usize },

    /// Device write failed (endpoint removed, permission denied, timed out)
    #[error("Device write failed: {0}")]
    Io(#[from] io::Error),

    /// Session cancelled between characters
    #[error("Cancelled after {typed} characters")]
    Cancelled { typed: usize },

    /// Release-settle must be strictly longer than press-hold
    #[error("Invalid timing: release-settle {release_settle:?} must exceed press-hold {press_hold:?}")]
    InvalidTiming {
        press_hold: Duration,
        release_settle: Duration,
    },
}
