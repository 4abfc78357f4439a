//! # Error Types
//!
//! This module defines all error types for the transposer.
//!
//! Every error carries the offending value so the UI layer can point the user
//! at the exact token or key that needs fixing.
//!
//! ## Error Types
//! - `UnknownPitchName` - Note name not in the pitch class table
//! - `MalformedToken` - Token is not of the form `name/octave`
//! - `UnknownKey` - Key is not one of the 15 canonical keys
//! - `OutOfRange` - Transposition overflowed the absolute pitch range
//! - `Settings` - Invalid YAML settings in document frontmatter
//!
//! ## Usage
//! ```rust
//! use transposer::{transpose_text, TransposeError};
//!
//! match transpose_text("c/4 h/4", "C", "G") {
//!     Ok(text) => println!("{}", text),
//!     Err(TransposeError::UnknownPitchName { name }) => {
//!         eprintln!("No such note: {}", name);
//!     }
//!     Err(TransposeError::MalformedToken { token, reason }) => {
//!         eprintln!("Bad token '{}': {}", token, reason);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransposeError {
    /// Note name not found in the pitch class table.
    ///
    /// # Example
    /// ```
    /// # use transposer::TransposeError;
    /// let err = TransposeError::UnknownPitchName { name: "h".to_string() };
    /// assert_eq!(err.to_string(), "Unknown pitch name: h");
    /// ```
    #[error("Unknown pitch name: {name}")]
    UnknownPitchName { name: String },

    /// Token could not be split into a name and an integer octave.
    ///
    /// # Example
    /// ```
    /// # use transposer::TransposeError;
    /// let err = TransposeError::MalformedToken {
    ///     token: "c4".to_string(),
    ///     reason: "missing '/' separator".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Malformed token 'c4': missing '/' separator");
    /// ```
    #[error("Malformed token '{token}': {reason}")]
    MalformedToken { token: String, reason: String },

    /// Key name is not one of the canonical keys.
    ///
    /// # Example
    /// ```
    /// # use transposer::TransposeError;
    /// let err = TransposeError::UnknownKey { key: "D#".to_string() };
    /// assert_eq!(err.to_string(), "Unknown key: D#");
    /// ```
    #[error("Unknown key: {key}")]
    UnknownKey { key: String },

    /// Shifting the token would overflow the absolute pitch number.
    #[error("Transposing '{token}' by {semitones} semitones is out of range")]
    OutOfRange { token: String, semitones: i32 },

    /// Invalid settings block.
    ///
    /// Occurs when the YAML frontmatter of a document can't be read.
    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl TransposeError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TransposeError::UnknownPitchName { .. } => "UnknownPitchName",
            TransposeError::MalformedToken { .. } => "MalformedToken",
            TransposeError::UnknownKey { .. } => "UnknownKey",
            TransposeError::OutOfRange { .. } => "OutOfRange",
            TransposeError::Settings(_) => "Settings",
        }
    }

    /// The offending input value.
    pub fn value(&self) -> &str {
        match self {
            TransposeError::UnknownPitchName { name } => name,
            TransposeError::MalformedToken { token, .. } => token,
            TransposeError::UnknownKey { key } => key,
            TransposeError::OutOfRange { token, .. } => token,
            TransposeError::Settings(msg) => msg,
        }
    }
}
