pub mod api;
pub mod document;
pub mod error;
pub mod key;
pub mod keyboard;
pub mod melody;
pub mod pitch;
pub mod session;
pub mod transpose;

pub use api::{shift_text, transpose_document, transpose_text, transpose_text_with};
pub use document::{parse_document, Document, Settings, Shift};
pub use error::*;
pub use key::{interval_semitones, Key};
pub use keyboard::{keyboard_layout, KeyColor, KeyboardKey};
pub use melody::Melody;
pub use pitch::{from_absolute, pitch_class_of, to_absolute, PitchToken, Spelling};
pub use session::{NotationRenderer, Session};
pub use transpose::{transpose, transpose_between, transpose_spelled, transpose_strs, SpellingPolicy};
