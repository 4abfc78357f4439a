//! # Melody
//!
//! The ordered list of notes the user has entered in the current session.
//! The caller owns it: notes are appended one at a time (button or piano key
//! presses) or replaced in bulk from whitespace-separated text, and the
//! transposition methods return a new melody without touching this one.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TransposeError;
use crate::key::Key;
use crate::pitch::PitchToken;
use crate::transpose::{transpose, transpose_between, SpellingPolicy};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Melody {
    notes: Vec<PitchToken>,
}

impl Melody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated tokens.
    ///
    /// # Example
    /// ```
    /// use transposer::Melody;
    ///
    /// let melody = Melody::from_text("c/4  e/4\tg/4")?;
    /// assert_eq!(melody.len(), 3);
    /// assert_eq!(melody.to_string(), "c/4 e/4 g/4");
    /// # Ok::<(), transposer::TransposeError>(())
    /// ```
    pub fn from_text(text: &str) -> Result<Self, TransposeError> {
        let notes = text
            .split_whitespace()
            .map(PitchToken::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { notes })
    }

    pub fn push(&mut self, note: PitchToken) {
        self.notes.push(note);
    }

    /// Append a single `name/octave` token
    pub fn push_str(&mut self, token: &str) -> Result<(), TransposeError> {
        let note = token.trim().parse()?;
        self.notes.push(note);
        Ok(())
    }

    /// Replace the contents with the tokens in `text`.
    ///
    /// Blank text is ignored and returns `Ok(false)`. On a parse error the
    /// melody is left as it was.
    pub fn load_text(&mut self, text: &str) -> Result<bool, TransposeError> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        *self = Self::from_text(text)?;
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn tokens(&self) -> &[PitchToken] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PitchToken> {
        self.notes.iter()
    }

    /// Copy shifted by a fixed number of semitones (sharp spelling)
    pub fn shifted(&self, semitones: i32) -> Result<Self, TransposeError> {
        Ok(Self {
            notes: transpose(&self.notes, semitones)?,
        })
    }

    /// Copy transposed upward from one key to another
    pub fn transposed(&self, from: Key, to: Key, policy: SpellingPolicy) -> Result<Self, TransposeError> {
        Ok(Self {
            notes: transpose_between(&self.notes, from, to, policy)?,
        })
    }
}

impl From<Vec<PitchToken>> for Melody {
    fn from(notes: Vec<PitchToken>) -> Self {
        Self { notes }
    }
}

impl FromStr for Melody {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<'a> IntoIterator for &'a Melody {
    type Item = &'a PitchToken;
    type IntoIter = std::slice::Iter<'a, PitchToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl fmt::Display for Melody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}
