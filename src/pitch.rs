//! # Pitch Tokens
//!
//! Parsing and arithmetic for single pitch tokens of the form `name/octave`
//! (for example `c#/4`, `bb/3`, `g/5`).
//!
//! ## Numbering
//! - **Pitch class**: `0..=11`, C = 0, regardless of octave
//! - **Absolute pitch**: `pitch class + 12 * (octave + 1)`, so `c/4` = 60 (MIDI numbering)
//!
//! `cb` and `b#` cross the C boundary: `cb/4` sounds a semitone below `c/4`
//! and is numbered 59, `b#/3` is numbered 60.
//!
//! ## Spelling
//! Converting back from an absolute number always picks the spelling from a
//! fixed table indexed by pitch class (see [`Spelling`]), so the result never
//! depends on lookup order. Natural classes are always spelled natural.
//!
//! ## Example
//! ```rust
//! use transposer::pitch::{from_absolute, to_absolute, pitch_class_of};
//!
//! assert_eq!(pitch_class_of("Eb")?, 3);
//! assert_eq!(to_absolute("c/4")?, 60);
//! assert_eq!(from_absolute(61).to_string(), "c#/4");
//! # Ok::<(), transposer::TransposeError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TransposeError;

/// Note letters C through B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// White keys in keyboard order
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Semitone offset from C
    pub fn semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    /// Letter is case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'c',
            NoteName::D => 'd',
            NoteName::E => 'e',
            NoteName::F => 'f',
            NoteName::G => 'g',
            NoteName::A => 'a',
            NoteName::B => 'b',
        }
    }
}

/// At most one sharp or flat per token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // #
    Flat,  // b
}

impl Accidental {
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "b" => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// Which spelling table to use for the five black-key pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    /// `c c# d d# e f f# g g# a a# b`
    #[default]
    Sharps,
    /// `c db d eb e f gb g ab a bb b`
    Flats,
}

const SHARP_SPELLINGS: [(NoteName, Accidental); 12] = [
    (NoteName::C, Accidental::Natural),
    (NoteName::C, Accidental::Sharp),
    (NoteName::D, Accidental::Natural),
    (NoteName::D, Accidental::Sharp),
    (NoteName::E, Accidental::Natural),
    (NoteName::F, Accidental::Natural),
    (NoteName::F, Accidental::Sharp),
    (NoteName::G, Accidental::Natural),
    (NoteName::G, Accidental::Sharp),
    (NoteName::A, Accidental::Natural),
    (NoteName::A, Accidental::Sharp),
    (NoteName::B, Accidental::Natural),
];

const FLAT_SPELLINGS: [(NoteName, Accidental); 12] = [
    (NoteName::C, Accidental::Natural),
    (NoteName::D, Accidental::Flat),
    (NoteName::D, Accidental::Natural),
    (NoteName::E, Accidental::Flat),
    (NoteName::E, Accidental::Natural),
    (NoteName::F, Accidental::Natural),
    (NoteName::G, Accidental::Flat),
    (NoteName::G, Accidental::Natural),
    (NoteName::A, Accidental::Flat),
    (NoteName::A, Accidental::Natural),
    (NoteName::B, Accidental::Flat),
    (NoteName::B, Accidental::Natural),
];

impl Spelling {
    /// Canonical name for a pitch class (taken modulo 12)
    pub fn spell(self, pitch_class: i32) -> (NoteName, Accidental) {
        let table = match self {
            Spelling::Sharps => &SHARP_SPELLINGS,
            Spelling::Flats => &FLAT_SPELLINGS,
        };
        table[pitch_class.rem_euclid(12) as usize]
    }
}

/// Parse a note name such as `C`, `c#`, `Bb` into its letter and accidental.
pub fn parse_note_name(name: &str) -> Result<(NoteName, Accidental), TransposeError> {
    let unknown = || TransposeError::UnknownPitchName {
        name: name.to_string(),
    };

    let mut chars = name.chars();
    let letter = chars.next().and_then(NoteName::from_char).ok_or_else(unknown)?;
    let accidental = Accidental::from_suffix(chars.as_str()).ok_or_else(unknown)?;
    Ok((letter, accidental))
}

/// Pitch class (0-11) of a note name.
///
/// Every single-accidental spelling is recognised, including `E#`, `Fb`,
/// `B#` and `Cb`.
///
/// # Example
/// ```
/// use transposer::pitch::pitch_class_of;
///
/// assert_eq!(pitch_class_of("C#").unwrap(), 1);
/// assert_eq!(pitch_class_of("Db").unwrap(), 1);
/// assert_eq!(pitch_class_of("Cb").unwrap(), 11);
/// assert!(pitch_class_of("H").is_err());
/// ```
pub fn pitch_class_of(name: &str) -> Result<u8, TransposeError> {
    let (letter, accidental) = parse_note_name(name)?;
    Ok((letter.semitone() + accidental.offset()).rem_euclid(12) as u8)
}

/// A single note: letter, accidental and octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchToken {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: i32,
}

impl PitchToken {
    pub fn new(name: NoteName, accidental: Accidental, octave: i32) -> Self {
        Self {
            name,
            accidental,
            octave,
        }
    }

    pub fn pitch_class(&self) -> u8 {
        (self.name.semitone() + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// Absolute pitch number (C4 = 60).
    ///
    /// Only fails for octaves so large the number doesn't fit in an `i32`.
    pub fn absolute(&self) -> Result<i32, TransposeError> {
        self.octave
            .checked_add(1)
            .and_then(|o| o.checked_mul(12))
            .and_then(|base| base.checked_add(self.name.semitone() + self.accidental.offset()))
            .ok_or_else(|| TransposeError::OutOfRange {
                token: self.to_string(),
                semitones: 0,
            })
    }

    /// Inverse of [`PitchToken::absolute`] using the default sharp spelling
    pub fn from_absolute(absolute: i32) -> Self {
        Self::from_absolute_spelled(absolute, Spelling::default())
    }

    pub fn from_absolute_spelled(absolute: i32, spelling: Spelling) -> Self {
        let octave = absolute.div_euclid(12) - 1;
        let (name, accidental) = spelling.spell(absolute.rem_euclid(12));
        Self {
            name,
            accidental,
            octave,
        }
    }

    /// Move the token by `semitones` and respell it.
    pub fn shifted(&self, semitones: i32, spelling: Spelling) -> Result<Self, TransposeError> {
        let out_of_range = || TransposeError::OutOfRange {
            token: self.to_string(),
            semitones,
        };
        let absolute = self.absolute().map_err(|_| out_of_range())?;
        let target = absolute.checked_add(semitones).ok_or_else(out_of_range)?;
        Ok(Self::from_absolute_spelled(target, spelling))
    }
}

impl FromStr for PitchToken {
    type Err = TransposeError;

    /// Strict `name/octave` parser. Exactly one `/`, a non-empty name and an
    /// integer octave are required.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| TransposeError::MalformedToken {
            token: token.to_string(),
            reason,
        };

        let (name, octave) = token
            .split_once('/')
            .ok_or_else(|| malformed("missing '/' separator".to_string()))?;
        if octave.contains('/') {
            return Err(malformed("more than one '/' separator".to_string()));
        }
        if name.is_empty() {
            return Err(malformed("missing note name".to_string()));
        }
        if octave.is_empty() {
            return Err(malformed("missing octave".to_string()));
        }

        let octave: i32 = octave
            .parse()
            .map_err(|_| malformed(format!("octave '{}' is not an integer", octave)))?;
        let (name, accidental) = parse_note_name(name)?;

        log::trace!("parsed pitch token {}", token);
        Ok(Self {
            name,
            accidental,
            octave,
        })
    }
}

impl fmt::Display for PitchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}",
            self.name.as_char(),
            self.accidental.symbol(),
            self.octave
        )
    }
}

impl Serialize for PitchToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Absolute pitch number of a `name/octave` token.
///
/// # Example
/// ```
/// use transposer::pitch::to_absolute;
/// use transposer::TransposeError;
///
/// assert_eq!(to_absolute("a/4").unwrap(), 69);
/// assert!(matches!(to_absolute("c4"), Err(TransposeError::MalformedToken { .. })));
/// assert!(matches!(to_absolute("h/4"), Err(TransposeError::UnknownPitchName { .. })));
/// ```
pub fn to_absolute(token: &str) -> Result<i32, TransposeError> {
    token.parse::<PitchToken>()?.absolute()
}

/// Token for an absolute pitch number, spelled with sharps.
pub fn from_absolute(absolute: i32) -> PitchToken {
    PitchToken::from_absolute(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_classes_of_naturals() {
        let expected = [("C", 0), ("D", 2), ("E", 4), ("F", 5), ("G", 7), ("A", 9), ("B", 11)];
        for (name, pc) in expected {
            assert_eq!(pitch_class_of(name).unwrap(), pc, "{}", name);
        }
    }

    #[test]
    fn test_pitch_classes_of_enharmonics() {
        assert_eq!(pitch_class_of("C#").unwrap(), pitch_class_of("Db").unwrap());
        assert_eq!(pitch_class_of("F#").unwrap(), pitch_class_of("Gb").unwrap());
        assert_eq!(pitch_class_of("A#").unwrap(), pitch_class_of("Bb").unwrap());
        assert_eq!(pitch_class_of("E#").unwrap(), 5);
        assert_eq!(pitch_class_of("Fb").unwrap(), 4);
        assert_eq!(pitch_class_of("B#").unwrap(), 0);
        assert_eq!(pitch_class_of("Cb").unwrap(), 11);
    }

    #[test]
    fn test_pitch_class_is_case_insensitive() {
        assert_eq!(pitch_class_of("c#").unwrap(), 1);
        assert_eq!(pitch_class_of("bb").unwrap(), 10);
    }

    #[test]
    fn test_unknown_pitch_names() {
        for name in ["H", "", "C##", "Cx", "#", "Bbb", "CB"] {
            let result = pitch_class_of(name);
            assert_eq!(
                result,
                Err(TransposeError::UnknownPitchName { name: name.to_string() }),
                "{:?}",
                name
            );
        }
    }

    #[test]
    fn test_to_absolute_middle_c() {
        assert_eq!(to_absolute("c/4").unwrap(), 60);
        assert_eq!(to_absolute("c/-1").unwrap(), 0);
        assert_eq!(to_absolute("b/-2").unwrap(), -1);
    }

    #[test]
    fn test_to_absolute_crossing_spellings() {
        assert_eq!(to_absolute("cb/4").unwrap(), 59);
        assert_eq!(to_absolute("b#/3").unwrap(), 60);
        assert_eq!(to_absolute("e#/4").unwrap(), to_absolute("f/4").unwrap());
    }

    #[test]
    fn test_malformed_tokens() {
        let cases = [
            ("c4", "missing '/' separator"),
            ("c/4/5", "more than one '/' separator"),
            ("/4", "missing note name"),
            ("c/", "missing octave"),
            ("c/four", "octave 'four' is not an integer"),
            ("c/4.5", "octave '4.5' is not an integer"),
        ];
        for (token, reason) in cases {
            assert_eq!(
                token.parse::<PitchToken>(),
                Err(TransposeError::MalformedToken {
                    token: token.to_string(),
                    reason: reason.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_unknown_name_in_token() {
        assert_eq!(
            to_absolute("h/4"),
            Err(TransposeError::UnknownPitchName { name: "h".to_string() })
        );
    }

    #[test]
    fn test_from_absolute_uses_sharps() {
        let names: Vec<String> = (60..72).map(|n| from_absolute(n).to_string()).collect();
        assert_eq!(
            names,
            vec![
                "c/4", "c#/4", "d/4", "d#/4", "e/4", "f/4", "f#/4", "g/4", "g#/4", "a/4",
                "a#/4", "b/4"
            ]
        );
    }

    #[test]
    fn test_from_absolute_flats() {
        assert_eq!(PitchToken::from_absolute_spelled(70, Spelling::Flats).to_string(), "bb/4");
        assert_eq!(PitchToken::from_absolute_spelled(61, Spelling::Flats).to_string(), "db/4");
        assert_eq!(PitchToken::from_absolute_spelled(64, Spelling::Flats).to_string(), "e/4");
    }

    #[test]
    fn test_from_absolute_negative_numbers() {
        assert_eq!(from_absolute(-1).to_string(), "b/-2");
        assert_eq!(from_absolute(0).to_string(), "c/-1");
        assert_eq!(from_absolute(-12).to_string(), "c/-2");
    }

    #[test]
    fn test_round_trip_keeps_absolute_pitch() {
        for letter in ["c", "d", "e", "f", "g", "a", "b"] {
            for acc in ["", "#", "b"] {
                for octave in [-1, 0, 3, 4, 8] {
                    let token = format!("{}{}/{}", letter, acc, octave);
                    let abs = to_absolute(&token).unwrap();
                    assert_eq!(from_absolute(abs).absolute().unwrap(), abs, "{}", token);
                }
            }
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        let token: PitchToken = "F#/3".parse().unwrap();
        assert_eq!(token.to_string(), "f#/3");
        let token: PitchToken = "Bb/2".parse().unwrap();
        assert_eq!(token.to_string(), "bb/2");
    }

    #[test]
    fn test_shifted_overflow() {
        let token = PitchToken::new(NoteName::B, Accidental::Natural, 4);
        let result = token.shifted(i32::MAX, Spelling::Sharps);
        assert!(matches!(result, Err(TransposeError::OutOfRange { semitones: i32::MAX, .. })));
    }

    #[test]
    fn test_huge_octave_is_out_of_range() {
        let token = PitchToken::new(NoteName::C, Accidental::Natural, i32::MAX);
        assert!(matches!(token.absolute(), Err(TransposeError::OutOfRange { .. })));
    }
}
