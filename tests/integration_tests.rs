//! Integration tests for the transposer
//!
//! Tests the text-in, text-out pipeline and the pitch arithmetic properties.

use transposer::{
    from_absolute, interval_semitones, parse_document, shift_text, to_absolute, transpose,
    transpose_document, transpose_text, Key, Melody, PitchToken, TransposeError,
};

fn all_spellings() -> Vec<String> {
    let mut tokens = Vec::new();
    for letter in ["c", "d", "e", "f", "g", "a", "b"] {
        for acc in ["", "#", "b"] {
            for octave in [0, 2, 4, 5, 7] {
                tokens.push(format!("{}{}/{}", letter, acc, octave));
            }
        }
    }
    tokens
}

#[test]
fn test_c_to_g_is_a_fifth() {
    assert_eq!(interval_semitones("C", "G").unwrap(), 7);
    assert_eq!(transpose_text("c/4", "C", "G").unwrap(), "g/4");
}

#[test]
fn test_g_to_c_is_a_fourth_up() {
    assert_eq!(interval_semitones("G", "C").unwrap(), 5);
    assert_eq!(transpose_text("g/4", "G", "C").unwrap(), "c/5");
}

#[test]
fn test_unknown_note_name() {
    let result = to_absolute("h/4");
    assert!(matches!(
        result,
        Err(TransposeError::UnknownPitchName { .. }) | Err(TransposeError::MalformedToken { .. })
    ));
}

#[test]
fn test_round_trip_preserves_absolute_pitch() {
    for token in all_spellings() {
        let abs = to_absolute(&token).unwrap();
        assert_eq!(from_absolute(abs).absolute().unwrap(), abs, "{}", token);
    }
}

#[test]
fn test_interval_properties() {
    for from in Key::ALL {
        assert_eq!(interval_semitones(from.name(), from.name()).unwrap(), 0);
        for to in Key::ALL {
            let interval = interval_semitones(from.name(), to.name()).unwrap();
            assert!(interval <= 11, "{} -> {} = {}", from, to, interval);
        }
    }
}

#[test]
fn test_identity_and_complementary_transposition() {
    let melody = Melody::from_text(&all_spellings().join(" ")).unwrap();
    let original: Vec<i32> = melody.iter().map(|t| t.absolute().unwrap()).collect();

    let same = transpose(melody.tokens(), 0).unwrap();
    let same: Vec<i32> = same.iter().map(|t| t.absolute().unwrap()).collect();
    assert_eq!(same, original);

    for n in 1..12 {
        let up = transpose(melody.tokens(), n).unwrap();
        let back = transpose(&up, 12 - n % 12).unwrap();
        for (t, o) in back.iter().zip(&original) {
            // n + (12 - n) semitones is exactly one octave
            assert_eq!(t.absolute().unwrap(), o + 12);
            assert_eq!(i32::from(t.pitch_class()), o.rem_euclid(12));
        }
    }
}

#[test]
fn test_bad_token_aborts_whole_melody() {
    let result = transpose_text("c/4 d/4 e4 f/4", "C", "D");
    assert_eq!(
        result,
        Err(TransposeError::MalformedToken {
            token: "e4".to_string(),
            reason: "missing '/' separator".to_string(),
        })
    );
}

#[test]
fn test_unknown_key_is_reported() {
    assert_eq!(
        transpose_text("c/4", "C", "H"),
        Err(TransposeError::UnknownKey { key: "H".to_string() })
    );
}

#[test]
fn test_mary_had_a_little_lamb_to_f() {
    let source = "e/4 d/4 c/4 d/4 e/4 e/4 e/4";
    let result = transpose_text(source, "C", "F").unwrap();
    assert_eq!(result, "a/4 g/4 f/4 g/4 a/4 a/4 a/4");
}

#[test]
fn test_shift_text_down() {
    assert_eq!(shift_text("c/4 e/4", -12).unwrap(), "c/3 e/3");
}

#[test]
fn test_document_with_settings() {
    let source = r#"---
from: D
to: Bb
spelling: key
---
d/4 f#/4 a/4
"#;
    let doc = parse_document(source).unwrap();
    assert_eq!(doc.melody.len(), 3);
    assert_eq!(transpose_document(source).unwrap(), "bb/4 d/5 f/5");
}

#[test]
fn test_tokens_display_in_render_format() {
    let token: PitchToken = "C#/4".parse().unwrap();
    assert_eq!(token.to_string(), "c#/4");
}
