//! # Transposition
//!
//! Shifts whole token sequences by a number of semitones, or from one key to
//! another. Every output token is respelled from the canonical table, so
//! `db/4` shifted by 0 comes back as `c#/4` under the default sharp spelling.
//!
//! All functions are pure: the input slice is never modified, and the first
//! bad token aborts the whole call with its error.

use std::str::FromStr;

use crate::error::TransposeError;
use crate::key::Key;
use crate::pitch::{PitchToken, Spelling};

/// How transposed notes are respelled when transposing between keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellingPolicy {
    /// Always sharps (the default, matches the on-screen keyboard)
    #[default]
    Sharps,
    /// Always flats
    Flats,
    /// Flats when the target key has flats in its signature, sharps otherwise
    FollowKey,
}

impl SpellingPolicy {
    pub fn resolve(self, target: Key) -> Spelling {
        match self {
            SpellingPolicy::Sharps => Spelling::Sharps,
            SpellingPolicy::Flats => Spelling::Flats,
            SpellingPolicy::FollowKey => target.spelling(),
        }
    }
}

impl FromStr for SpellingPolicy {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharps" | "sharp" => Ok(SpellingPolicy::Sharps),
            "flats" | "flat" => Ok(SpellingPolicy::Flats),
            "key" => Ok(SpellingPolicy::FollowKey),
            other => Err(TransposeError::Settings(format!(
                "spelling must be one of sharps, flats, key (got '{}')",
                other
            ))),
        }
    }
}

/// Transpose every token by `semitones`, spelled with sharps.
///
/// # Example
/// ```
/// use transposer::pitch::PitchToken;
/// use transposer::transpose::transpose;
///
/// let notes: Vec<PitchToken> = vec!["c/4".parse()?];
/// let up_a_fifth = transpose(&notes, 7)?;
/// assert_eq!(up_a_fifth[0].to_string(), "g/4");
/// # Ok::<(), transposer::TransposeError>(())
/// ```
pub fn transpose(tokens: &[PitchToken], semitones: i32) -> Result<Vec<PitchToken>, TransposeError> {
    transpose_spelled(tokens, semitones, Spelling::default())
}

pub fn transpose_spelled(
    tokens: &[PitchToken],
    semitones: i32,
    spelling: Spelling,
) -> Result<Vec<PitchToken>, TransposeError> {
    tokens
        .iter()
        .map(|token| token.shifted(semitones, spelling))
        .collect()
}

/// Transpose from one key to another, always moving upward (0-11 semitones).
pub fn transpose_between(
    tokens: &[PitchToken],
    from: Key,
    to: Key,
    policy: SpellingPolicy,
) -> Result<Vec<PitchToken>, TransposeError> {
    let semitones = from.interval_to(to);
    log::debug!(
        "transposing {} notes from {} to {} ({} semitones up)",
        tokens.len(),
        from,
        to,
        semitones
    );
    transpose_spelled(tokens, i32::from(semitones), policy.resolve(to))
}

/// Parse raw `name/octave` strings and transpose them.
///
/// Nothing is returned unless every token parses.
pub fn transpose_strs(tokens: &[&str], semitones: i32) -> Result<Vec<PitchToken>, TransposeError> {
    let parsed = tokens
        .iter()
        .map(|t| t.parse::<PitchToken>())
        .collect::<Result<Vec<_>, _>>()?;
    transpose(&parsed, semitones)
}
