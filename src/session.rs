//! # Session
//!
//! The entry widget's flow: note input redraws the melody stave, transposing
//! draws the copy into the second stave. Drawing is left to a
//! [`NotationRenderer`] supplied by the UI layer.
//!
//! ## Containers
//! - [`NOTATION`] - the entered melody
//! - [`TRANSPOSED_NOTATION`] - the transposed copy
//!
//! ## Example
//! ```rust
//! use transposer::session::{NotationRenderer, Session, TRANSPOSED_NOTATION};
//! use transposer::pitch::PitchToken;
//! use transposer::{Key, SpellingPolicy};
//!
//! #[derive(Default)]
//! struct Printer(Vec<String>);
//!
//! impl NotationRenderer for Printer {
//!     fn render(&mut self, container: &str, tokens: &[PitchToken]) {
//!         let notes: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
//!         self.0.push(format!("{}: {}", container, notes.join(" ")));
//!     }
//! }
//!
//! let mut session = Session::new(Printer::default());
//! session.press("c/4")?;
//! session.press("e/4")?;
//! session.transpose(Key::C, Key::G, SpellingPolicy::Sharps)?;
//! assert_eq!(
//!     session.renderer().0.last().unwrap(),
//!     &format!("{}: g/4 b/4", TRANSPOSED_NOTATION)
//! );
//! # Ok::<(), transposer::TransposeError>(())
//! ```

use crate::error::TransposeError;
use crate::key::Key;
use crate::melody::Melody;
use crate::pitch::PitchToken;
use crate::transpose::SpellingPolicy;

pub const NOTATION: &str = "notation";
pub const TRANSPOSED_NOTATION: &str = "transposedNotation";

/// Draws a sequence of notes into a named container.
///
/// An empty slice means the container should be cleared.
pub trait NotationRenderer {
    fn render(&mut self, container: &str, tokens: &[PitchToken]);
}

impl<R: NotationRenderer + ?Sized> NotationRenderer for &mut R {
    fn render(&mut self, container: &str, tokens: &[PitchToken]) {
        (**self).render(container, tokens)
    }
}

pub struct Session<R> {
    melody: Melody,
    renderer: R,
}

impl<R: NotationRenderer> Session<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            melody: Melody::new(),
            renderer,
        }
    }

    pub fn melody(&self) -> &Melody {
        &self.melody
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (Melody, R) {
        (self.melody, self.renderer)
    }

    /// One button or piano-key press
    pub fn press(&mut self, token: &str) -> Result<(), TransposeError> {
        self.melody.push_str(token)?;
        self.renderer.render(NOTATION, self.melody.tokens());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.melody.clear();
        self.renderer.render(NOTATION, &[]);
        self.renderer.render(TRANSPOSED_NOTATION, &[]);
    }

    /// Replace the melody from the text box. Blank input does nothing.
    pub fn load_text(&mut self, text: &str) -> Result<(), TransposeError> {
        if !self.melody.load_text(text)? {
            return Ok(());
        }
        log::debug!("loaded {} notes from text", self.melody.len());
        self.renderer.render(NOTATION, self.melody.tokens());
        self.renderer.render(TRANSPOSED_NOTATION, &[]);
        Ok(())
    }

    /// Draw and return the transposed copy of the current melody
    pub fn transpose(&mut self, from: Key, to: Key, policy: SpellingPolicy) -> Result<Melody, TransposeError> {
        let transposed = self.melody.transposed(from, to, policy)?;
        self.renderer.render(TRANSPOSED_NOTATION, transposed.tokens());
        Ok(transposed)
    }
}
