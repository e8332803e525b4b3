use serde_json::Value;

/// Values longer than this many characters are cut and suffixed with `...`.
pub const MAX_VALUE_CHARS: usize = 800;

/// Header and OCR artifacts that show up in scraped well records instead of real values.
const GARBAGE_PHRASES: [&str; 5] = [
    "telephone number",
    "city state zip code",
    "state izp code",
    "state izip code",
    "i state zip code",
];

/// Clean a single raw attribute value into display text.
///
/// Returns an empty string for null or absent values, blank text, and anything containing one of the
/// known garbage phrases (case-insensitive). Text longer than `MAX_VALUE_CHARS` is truncated and
/// suffixed with `...`; the garbage filter runs first, so truncation only applies to kept values.
pub fn clean(raw: Option<&Value>) -> String {
    let text = match raw.and_then(value_to_text) {
        Some(text) => text,
        None => return String::new(),
    };
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let lowercase = text.to_lowercase();
    if GARBAGE_PHRASES
        .iter()
        .any(|phrase| lowercase.contains(phrase))
    {
        return String::new();
    }

    if text.chars().count() > MAX_VALUE_CHARS {
        let mut truncated: String = text.chars().take(MAX_VALUE_CHARS).collect();
        truncated.push_str("...");
        return truncated;
    }
    text.to_string()
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                return Some(number.to_string());
            }
            number.as_f64().map(format_float)
        }
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Integral floats print without a fractional part, e.g. `7.0` becomes `7`.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
