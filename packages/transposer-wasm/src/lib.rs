use serde::Serialize;
use transposer::{Key, PitchToken, SpellingPolicy, TransposeError};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct TransposeFailure {
    kind: &'static str,
    value: String,
    message: String,
}

#[derive(Serialize)]
struct Diagnostic {
    message: String,
    kind: &'static str,
    token: String,
    index: usize,
    severity: String,
}

fn error_to_json(e: &TransposeError) -> String {
    let failure = TransposeFailure {
        kind: e.kind(),
        value: e.value().to_string(),
        message: e.to_string(),
    };
    serde_json::to_string(&failure).unwrap_or_else(|_| e.to_string())
}

fn to_js_error(e: TransposeError) -> JsValue {
    JsValue::from_str(&error_to_json(&e))
}

fn parse_policy(spelling: Option<String>) -> Result<SpellingPolicy, TransposeError> {
    match spelling.as_deref() {
        Some(s) => s.parse(),
        None => Ok(SpellingPolicy::default()),
    }
}

/// One diagnostic per token that fails to parse, so the text box can flag
/// every bad token at once.
fn diagnostics(text: &str) -> Vec<Diagnostic> {
    text.split_whitespace()
        .enumerate()
        .filter_map(|(index, token)| {
            token.parse::<PitchToken>().err().map(|e| Diagnostic {
                message: e.to_string(),
                kind: e.kind(),
                token: token.to_string(),
                index,
                severity: "error".to_string(),
            })
        })
        .collect()
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // a logger is already installed
        return;
    }
    log::info!("transposer module initialized");
}

/// The 15 keys in dropdown order, as an array of names
#[wasm_bindgen]
pub fn keys() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Key::ALL.iter().map(|k| k.name()).collect();
    serde_wasm_bindgen::to_value(&names).map_err(Into::into)
}

/// On-screen keyboard layout: `[{ note, color, whiteIndex }]`
#[wasm_bindgen]
pub fn keyboard() -> Result<JsValue, JsValue> {
    let layout = transposer::keyboard_layout(&transposer::keyboard::DEFAULT_OCTAVES);
    serde_wasm_bindgen::to_value(&layout).map_err(Into::into)
}

/// Ascending interval in semitones between two keys
#[wasm_bindgen]
pub fn interval(from_key: &str, to_key: &str) -> Result<u8, JsValue> {
    transposer::interval_semitones(from_key, to_key).map_err(to_js_error)
}

/// Transpose whitespace-separated notes from one key to another
#[wasm_bindgen]
pub fn transpose(text: &str, from_key: &str, to_key: &str, spelling: Option<String>) -> Result<String, JsValue> {
    let policy = parse_policy(spelling).map_err(to_js_error)?;
    transposer::transpose_text_with(text, from_key, to_key, policy).map_err(to_js_error)
}

/// Transpose whitespace-separated notes by a number of semitones
#[wasm_bindgen]
pub fn transpose_notes(text: &str, semitones: i32) -> Result<String, JsValue> {
    transposer::shift_text(text, semitones).map_err(to_js_error)
}

/// Transpose text carrying its own `---` settings block
#[wasm_bindgen]
pub fn transpose_document(source: &str) -> Result<String, JsValue> {
    transposer::transpose_document(source).map_err(to_js_error)
}

/// Check the note text and return diagnostics as a JSON array
#[wasm_bindgen]
pub fn validate(text: &str) -> String {
    serde_json::to_string(&diagnostics(text)).unwrap_or_else(|_| "[]".to_string())
}
