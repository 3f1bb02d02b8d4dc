//! Masking rule for sensitive values

use serde_json::Value;

/// Replacement for sensitive values that are neither strings nor numbers
pub const MASKED_TOKEN: &str = "[MASKED]";

/// Characters kept visible at each end of a long value
const VISIBLE_EDGE: usize = 2;

/// Values up to this many characters are masked entirely
const FULL_MASK_LEN: usize = 4;

/// Mask a sensitive value
///
/// Strings and numbers are masked on their textual form, counted in
/// characters: up to four characters become the same number of `*`, longer
/// values keep their first two and last two characters. Everything else,
/// including `null`, objects and arrays, becomes [`MASKED_TOKEN`]. The token
/// itself is returned unchanged so masking is idempotent.
///
/// # Examples
///
/// ```
/// use belediye_export::sanitization::masking::mask_value;
/// use serde_json::json;
///
/// assert_eq!(mask_value(&json!("12345678901")), json!("12*******01"));
/// assert_eq!(mask_value(&json!(1234)), json!("****"));
/// assert_eq!(mask_value(&json!({"a": 1})), json!("[MASKED]"));
/// ```
pub fn mask_value(value: &Value) -> Value {
    match value {
        Value::String(s) if s == MASKED_TOKEN => value.clone(),
        Value::String(s) => Value::String(mask_text(s)),
        Value::Number(n) => Value::String(mask_text(&n.to_string())),
        _ => Value::String(MASKED_TOKEN.to_string()),
    }
}

/// Mask a string, preserving its character length
pub fn mask_text(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    if len <= FULL_MASK_LEN {
        return "*".repeat(len);
    }

    let mut masked = String::with_capacity(text.len());
    masked.extend(&chars[..VISIBLE_EDGE]);
    masked.push_str(&"*".repeat(len - 2 * VISIBLE_EDGE));
    masked.extend(&chars[len - VISIBLE_EDGE..]);
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("" => ""; "empty")]
    #[test_case("a" => "*")]
    #[test_case("abcd" => "****")]
    #[test_case("abcde" => "ab*de")]
    #[test_case("12345678901" => "12*******01"; "tc kimlik")]
    #[test_case("05321234567" => "05*******67"; "gsm")]
    #[test_case("ayşe@örnek.tr" => "ay*********tr"; "multibyte")]
    fn test_mask_text(input: &str) -> String {
        mask_text(input)
    }

    #[test]
    fn test_mask_preserves_char_length() {
        for input in ["x", "xyzw", "Çankaya Mah. 1. Sok.", "12345678901"] {
            assert_eq!(
                mask_text(input).chars().count(),
                input.chars().count(),
                "length changed for {input}"
            );
        }
    }

    #[test]
    fn test_mask_numbers() {
        assert_eq!(mask_value(&json!(42)), json!("**"));
        assert_eq!(mask_value(&json!(15000)), json!("15*00"));
        assert_eq!(mask_value(&json!(2500.75)), json!("25***75"));
    }

    #[test]
    fn test_mask_other_kinds() {
        assert_eq!(mask_value(&json!(null)), json!(MASKED_TOKEN));
        assert_eq!(mask_value(&json!(true)), json!(MASKED_TOKEN));
        assert_eq!(mask_value(&json!(["a"])), json!(MASKED_TOKEN));
        assert_eq!(mask_value(&json!({"il": "Ankara"})), json!(MASKED_TOKEN));
    }

    #[test]
    fn test_mask_is_idempotent() {
        for value in [
            json!("12345678901"),
            json!(1234567),
            json!("abc"),
            json!(null),
            json!({"nested": true}),
        ] {
            let once = mask_value(&value);
            assert_eq!(mask_value(&once), once);
        }
    }
}
