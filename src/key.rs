//! # Keys
//!
//! The 15 canonical major keys offered by the key selectors, in the same order
//! the dropdowns list them: the naturals and sharps going round the circle of
//! fifths, then the flats.
//!
//! Intervals between keys are always measured upward, so the result is in
//! `0..=11`: going from G to C is 5 semitones up, never 7 down.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TransposeError;
use crate::pitch::{Accidental, NoteName, Spelling};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    C,
    G,
    D,
    A,
    E,
    B,
    FSharp,
    CSharp,
    F,
    BFlat,
    EFlat,
    AFlat,
    DFlat,
    GFlat,
    CFlat,
}

impl Key {
    /// Dropdown order
    pub const ALL: [Key; 15] = [
        Key::C,
        Key::G,
        Key::D,
        Key::A,
        Key::E,
        Key::B,
        Key::FSharp,
        Key::CSharp,
        Key::F,
        Key::BFlat,
        Key::EFlat,
        Key::AFlat,
        Key::DFlat,
        Key::GFlat,
        Key::CFlat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::G => "G",
            Key::D => "D",
            Key::A => "A",
            Key::E => "E",
            Key::B => "B",
            Key::FSharp => "F#",
            Key::CSharp => "C#",
            Key::F => "F",
            Key::BFlat => "Bb",
            Key::EFlat => "Eb",
            Key::AFlat => "Ab",
            Key::DFlat => "Db",
            Key::GFlat => "Gb",
            Key::CFlat => "Cb",
        }
    }

    pub fn tonic(self) -> (NoteName, Accidental) {
        match self {
            Key::C => (NoteName::C, Accidental::Natural),
            Key::G => (NoteName::G, Accidental::Natural),
            Key::D => (NoteName::D, Accidental::Natural),
            Key::A => (NoteName::A, Accidental::Natural),
            Key::E => (NoteName::E, Accidental::Natural),
            Key::B => (NoteName::B, Accidental::Natural),
            Key::FSharp => (NoteName::F, Accidental::Sharp),
            Key::CSharp => (NoteName::C, Accidental::Sharp),
            Key::F => (NoteName::F, Accidental::Natural),
            Key::BFlat => (NoteName::B, Accidental::Flat),
            Key::EFlat => (NoteName::E, Accidental::Flat),
            Key::AFlat => (NoteName::A, Accidental::Flat),
            Key::DFlat => (NoteName::D, Accidental::Flat),
            Key::GFlat => (NoteName::G, Accidental::Flat),
            Key::CFlat => (NoteName::C, Accidental::Flat),
        }
    }

    pub fn pitch_class(self) -> u8 {
        let (name, accidental) = self.tonic();
        (name.semitone() + accidental.offset()).rem_euclid(12) as u8
    }

    /// Position on the circle of fifths.
    /// Positive = sharps, Negative = flats, Zero = C major
    pub fn fifths(self) -> i8 {
        match self {
            Key::C => 0,
            Key::G => 1,
            Key::D => 2,
            Key::A => 3,
            Key::E => 4,
            Key::B => 5,
            Key::FSharp => 6,
            Key::CSharp => 7,
            Key::F => -1,
            Key::BFlat => -2,
            Key::EFlat => -3,
            Key::AFlat => -4,
            Key::DFlat => -5,
            Key::GFlat => -6,
            Key::CFlat => -7,
        }
    }

    /// Spelling that matches this key's signature (flat keys spell with flats)
    pub fn spelling(self) -> Spelling {
        if self.fifths() < 0 {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    /// Semitones UP from this key to `target`, in `0..=11`
    pub fn interval_to(self, target: Key) -> u8 {
        (i32::from(target.pitch_class()) - i32::from(self.pitch_class())).rem_euclid(12) as u8
    }
}

impl FromStr for Key {
    type Err = TransposeError;

    /// Parse a key name like "G", "F#", "Bb". The "s"/"f" ASCII forms
    /// ("Fs", "Bf") are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim() {
            "C" => Key::C,
            "G" => Key::G,
            "D" => Key::D,
            "A" => Key::A,
            "E" => Key::E,
            "B" => Key::B,
            "F#" | "Fs" => Key::FSharp,
            "C#" | "Cs" => Key::CSharp,
            "F" => Key::F,
            "Bb" | "Bf" => Key::BFlat,
            "Eb" | "Ef" => Key::EFlat,
            "Ab" | "Af" => Key::AFlat,
            "Db" | "Df" => Key::DFlat,
            "Gb" | "Gf" => Key::GFlat,
            "Cb" | "Cf" => Key::CFlat,
            _ => {
                return Err(TransposeError::UnknownKey {
                    key: s.to_string(),
                })
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Ascending interval in semitones between two key names.
///
/// # Example
/// ```
/// use transposer::key::interval_semitones;
///
/// assert_eq!(interval_semitones("C", "G").unwrap(), 7);
/// assert_eq!(interval_semitones("G", "C").unwrap(), 5);
/// assert!(interval_semitones("C", "H").is_err());
/// ```
pub fn interval_semitones(from_key: &str, to_key: &str) -> Result<u8, TransposeError> {
    let from: Key = from_key.parse()?;
    let to: Key = to_key.parse()?;
    Ok(from.interval_to(to))
}
