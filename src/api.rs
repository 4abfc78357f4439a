//! # Public API
//!
//! Text-in, text-out entry points for UI layers that hold the melody as a
//! string.
//!
//! ## Functions
//!
//! - [`transpose_text()`] - Transpose whitespace-separated tokens between two keys
//! - [`transpose_text_with()`] - Same, with an explicit spelling policy
//! - [`shift_text()`] - Transpose by a fixed number of semitones
//! - [`transpose_document()`] - Use the settings block inside the text
//!
//! ## Typical Usage
//!
//! ```rust
//! use transposer::transpose_text;
//!
//! let transposed = transpose_text("c/4 d/4 e/4", "C", "G")?;
//! assert_eq!(transposed, "g/4 a/4 b/4");
//! # Ok::<(), transposer::TransposeError>(())
//! ```

use crate::{parse_document, Key, Melody, SpellingPolicy, TransposeError};

/// Transpose a melody upward from `from_key` to `to_key`.
///
/// Output is spelled with sharps and joined with single spaces.
///
/// # Errors
/// Returns [`TransposeError`] for the first unknown key, unknown note name
/// or malformed token.
pub fn transpose_text(source: &str, from_key: &str, to_key: &str) -> Result<String, TransposeError> {
    transpose_text_with(source, from_key, to_key, SpellingPolicy::default())
}

/// Transpose with a chosen spelling policy.
///
/// # Example
/// ```rust
/// use transposer::{transpose_text_with, SpellingPolicy};
///
/// let flats = transpose_text_with("c/4 g/4", "C", "Eb", SpellingPolicy::FollowKey)?;
/// assert_eq!(flats, "eb/4 bb/4");
/// # Ok::<(), transposer::TransposeError>(())
/// ```
pub fn transpose_text_with(
    source: &str,
    from_key: &str,
    to_key: &str,
    policy: SpellingPolicy,
) -> Result<String, TransposeError> {
    let from: Key = from_key.parse()?;
    let to: Key = to_key.parse()?;
    let melody = Melody::from_text(source)?;
    Ok(melody.transposed(from, to, policy)?.to_string())
}

/// Transpose by a fixed number of semitones (may be negative).
pub fn shift_text(source: &str, semitones: i32) -> Result<String, TransposeError> {
    let melody = Melody::from_text(source)?;
    Ok(melody.shifted(semitones)?.to_string())
}

/// Transpose a document using its own settings block.
///
/// # Example
/// ```rust
/// use transposer::transpose_document;
///
/// let source = r#"---
/// from: G
/// to: C
/// ---
/// g/4 b/4 d/5
/// "#;
/// assert_eq!(transpose_document(source)?, "c/5 e/5 g/5");
/// # Ok::<(), transposer::TransposeError>(())
/// ```
pub fn transpose_document(source: &str) -> Result<String, TransposeError> {
    let document = parse_document(source)?;
    Ok(document.transposed()?.to_string())
}
