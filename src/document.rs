//! # Melody Documents
//!
//! Text input with an optional YAML settings block between `---` markers.
//! The block may sit anywhere in the text; everything outside it is the
//! melody, as whitespace-separated `name/octave` tokens.
//!
//! ```text
//! ---
//! from: C
//! to: Eb
//! spelling: key
//! ---
//! c/4 d/4 e/4 f/4
//! g/4
//! ```
//!
//! ## Settings
//! - `from`, `to` - key names (default `C`)
//! - `semitones` - fixed shift instead of a key pair (may be negative)
//! - `spelling` - `sharps` (default), `flats` or `key`
//!
//! ## Example
//! ```rust
//! use transposer::parse_document;
//!
//! let doc = parse_document("---\nfrom: C\nto: G\n---\nc/4 e/4")?;
//! assert_eq!(doc.transposed()?.to_string(), "g/4 b/4");
//! # Ok::<(), transposer::TransposeError>(())
//! ```

use serde::Deserialize;

use crate::error::TransposeError;
use crate::key::Key;
use crate::melody::Melody;
use crate::pitch::Spelling;
use crate::transpose::{transpose_spelled, SpellingPolicy};

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSettings {
    pub from: Option<String>,
    pub to: Option<String>,
    pub semitones: Option<i32>,
    pub spelling: Option<String>,
}

/// How far to move the melody
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Keys { from: Key, to: Key },
    Semitones(i32),
}

impl Default for Shift {
    fn default() -> Self {
        Shift::Keys {
            from: Key::C,
            to: Key::C,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub shift: Shift,
    pub spelling: SpellingPolicy,
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, TransposeError> {
        let spelling = match &raw.spelling {
            Some(s) => s.parse()?,
            None => SpellingPolicy::default(),
        };

        let shift = match (raw.semitones, &raw.from, &raw.to) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(TransposeError::Settings(
                    "semitones cannot be combined with from/to".to_string(),
                ))
            }
            (Some(n), None, None) => Shift::Semitones(n),
            (None, from, to) => Shift::Keys {
                from: parse_key_or_c(from.as_deref())?,
                to: parse_key_or_c(to.as_deref())?,
            },
        };

        Ok(Self { shift, spelling })
    }
}

fn parse_key_or_c(name: Option<&str>) -> Result<Key, TransposeError> {
    name.map_or(Ok(Key::C), |n| n.parse())
}

/// A parsed melody document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub settings: Settings,
    pub melody: Melody,
}

impl Document {
    /// Apply the document's own settings
    pub fn transposed(&self) -> Result<Melody, TransposeError> {
        match self.settings.shift {
            Shift::Keys { from, to } => self.melody.transposed(from, to, self.settings.spelling),
            Shift::Semitones(n) => {
                let spelling = match self.settings.spelling {
                    SpellingPolicy::Flats => Spelling::Flats,
                    // no target key to follow
                    SpellingPolicy::Sharps | SpellingPolicy::FollowKey => Spelling::Sharps,
                };
                Ok(transpose_spelled(self.melody.tokens(), n, spelling)?.into())
            }
        }
    }
}

/// Split the `---` settings block from the rest of the text.
///
/// Returns (settings_content, melody_text). Without a complete pair of
/// markers the whole text is melody.
pub(crate) fn extract_settings(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    let mut start_idx = None;
    let mut end_idx = None;

    for (i, line) in lines.iter().enumerate() {
        if line.trim() == "---" {
            if start_idx.is_none() {
                start_idx = Some(i);
            } else {
                end_idx = Some(i);
                break;
            }
        }
    }

    match (start_idx, end_idx) {
        (Some(start), Some(end)) => {
            let content = lines[start + 1..end].join("\n");
            let remaining: Vec<&str> = lines[..start]
                .iter()
                .chain(lines[end + 1..].iter())
                .copied()
                .collect();
            (Some(content), remaining.join("\n"))
        }
        _ => (None, source.to_string()),
    }
}

fn parse_settings(content: &str) -> Result<Settings, TransposeError> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let raw: RawSettings =
        serde_yaml::from_str(content).map_err(|e| TransposeError::Settings(e.to_string()))?;
    Settings::from_raw(raw)
}

/// Parse a melody document.
pub fn parse_document(source: &str) -> Result<Document, TransposeError> {
    let (settings_content, melody_text) = extract_settings(source);

    let settings = match settings_content {
        Some(content) => parse_settings(&content)?,
        None => Settings::default(),
    };
    let melody = Melody::from_text(&melody_text)?;

    log::debug!("parsed document: {} notes, {:?}", melody.len(), settings);
    Ok(Document { settings, melody })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_identity() {
        let doc = parse_document("c/4 d/4").unwrap();
        assert_eq!(doc.settings, Settings::default());
        assert_eq!(doc.transposed().unwrap().to_string(), "c/4 d/4");
    }

    #[test]
    fn test_with_settings() {
        let source = r#"---
from: G
to: C
---
g/4 a/4 b/4"#;
        let doc = parse_document(source).unwrap();
        assert_eq!(
            doc.settings.shift,
            Shift::Keys {
                from: Key::G,
                to: Key::C
            }
        );
        assert_eq!(doc.transposed().unwrap().to_string(), "c/5 d/5 e/5");
    }

    #[test]
    fn test_settings_at_bottom() {
        let source = "c/4 e/4\n---\nto: Bb\nspelling: key\n---\n";
        let doc = parse_document(source).unwrap();
        assert_eq!(doc.settings.spelling, SpellingPolicy::FollowKey);
        assert_eq!(doc.transposed().unwrap().to_string(), "bb/4 d/5");
    }

    #[test]
    fn test_sharp_key_name_in_yaml() {
        let doc = parse_document("---\nto: F#\n---\nc/4").unwrap();
        assert_eq!(doc.transposed().unwrap().to_string(), "f#/4");
    }

    #[test]
    fn test_semitones_setting() {
        let doc = parse_document("---\nsemitones: -2\nspelling: flats\n---\nc/4 e/4").unwrap();
        assert_eq!(doc.settings.shift, Shift::Semitones(-2));
        assert_eq!(doc.transposed().unwrap().to_string(), "bb/3 d/4");
    }

    #[test]
    fn test_semitones_with_keys_rejected() {
        let result = parse_document("---\nsemitones: 2\nto: D\n---\nc/4");
        assert!(matches!(result, Err(TransposeError::Settings(_))));
    }

    #[test]
    fn test_unknown_setting_rejected() {
        let result = parse_document("---\ntempo: 120\n---\nc/4");
        assert!(matches!(result, Err(TransposeError::Settings(_))));
    }

    #[test]
    fn test_unknown_key_setting() {
        let result = parse_document("---\nfrom: H\n---\nc/4");
        assert_eq!(result, Err(TransposeError::UnknownKey { key: "H".to_string() }));
    }

    #[test]
    fn test_empty_settings_block() {
        let doc = parse_document("---\n---\na/4").unwrap();
        assert_eq!(doc.settings, Settings::default());
        assert_eq!(doc.melody.to_string(), "a/4");
    }

    #[test]
    fn test_single_marker_is_melody() {
        let result = parse_document("---\nc/4");
        assert!(matches!(result, Err(TransposeError::MalformedToken { .. })));
    }

    #[test]
    fn test_extract_settings() {
        let (settings, melody) = extract_settings("---\nfrom: C\n---\nc/4");
        assert_eq!(settings, Some("from: C".to_string()));
        assert_eq!(melody, "c/4");
    }
}
