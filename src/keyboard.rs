//! On-screen piano keyboard layout.
//!
//! White keys C..B for each octave, with a black key (the sharp) placed after
//! C, D, F, G and A. Positioning is left to the UI; each black key records the
//! index of the white key it sits on.

use serde::Serialize;

use crate::pitch::{Accidental, NoteName, PitchToken};

/// Octaves shown by default (middle C upward)
pub const DEFAULT_OCTAVES: [i32; 2] = [4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyColor {
    White,
    Black,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardKey {
    pub note: PitchToken,
    pub color: KeyColor,
    pub white_index: usize,
}

fn has_black_key(name: NoteName) -> bool {
    !matches!(name, NoteName::E | NoteName::B)
}

/// Keys in left-to-right order for the given octaves.
pub fn keyboard_layout(octaves: &[i32]) -> Vec<KeyboardKey> {
    let mut keys = Vec::with_capacity(octaves.len() * 12);
    let mut white_index = 0;

    for &octave in octaves {
        for name in NoteName::ALL {
            keys.push(KeyboardKey {
                note: PitchToken::new(name, Accidental::Natural, octave),
                color: KeyColor::White,
                white_index,
            });
            if has_black_key(name) {
                keys.push(KeyboardKey {
                    note: PitchToken::new(name, Accidental::Sharp, octave),
                    color: KeyColor::Black,
                    white_index,
                });
            }
            white_index += 1;
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_octaves() {
        let keys = keyboard_layout(&DEFAULT_OCTAVES);
        assert_eq!(keys.len(), 24);
        assert_eq!(keys.iter().filter(|k| k.color == KeyColor::White).count(), 14);
        assert_eq!(keys[0].note.to_string(), "c/4");
        assert_eq!(keys[1].note.to_string(), "c#/4");
        assert_eq!(keys.last().unwrap().note.to_string(), "b/5");
    }

    #[test]
    fn test_keys_ascend_chromatically() {
        let keys = keyboard_layout(&DEFAULT_OCTAVES);
        let absolutes: Vec<i32> = keys.iter().map(|k| k.note.absolute().unwrap()).collect();
        let expected: Vec<i32> = (60..84).collect();
        assert_eq!(absolutes, expected);
    }

    #[test]
    fn test_black_keys_sit_on_their_white_key() {
        let keys = keyboard_layout(&[4]);
        let f_sharp = keys.iter().find(|k| k.note.to_string() == "f#/4").unwrap();
        assert_eq!(f_sharp.color, KeyColor::Black);
        assert_eq!(f_sharp.white_index, 3);
        assert!(!keys.iter().any(|k| k.note.to_string() == "e#/4"));
    }
}
