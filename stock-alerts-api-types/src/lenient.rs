//! The alert job writes its JSON with a serializer that emits bare `NaN` and
//! `Infinity` for missing indicator values. Strict JSON parsers reject the whole
//! document because of one such token, so these helpers turn them into `null`
//! first and let the renderer treat the field as absent.

use std::borrow::Cow;

use serde::de::DeserializeOwned;

const NON_FINITE: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Rewrites `NaN`, `Infinity` and `-Infinity` tokens outside of string literals to `null`.
pub fn sanitize_non_finite(input: &str) -> Cow<'_, str> {
    if !input.contains("NaN") && !input.contains("Infinity") {
        return Cow::Borrowed(input);
    }
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    let mut in_string = false;
    let mut escaped = false;
    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE.iter().find(|token| rest.starts_with(*token)) {
            output.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }
        output.push(c);
        rest = &rest[c.len_utf8()..];
    }
    Cow::Owned(output)
}

/// [`serde_json::from_str`] that tolerates non-finite number tokens.
pub fn from_str_lenient<T>(input: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(&sanitize_non_finite(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PeriodAlertRecord;

    #[test]
    fn clean_input_is_borrowed() {
        assert!(matches!(
            sanitize_non_finite(r#"[{"a": 1.5}]"#),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn tokens_become_null() {
        assert_eq!(
            sanitize_non_finite(r#"{"a": NaN, "b": -Infinity, "c": [Infinity, 2]}"#),
            r#"{"a": null, "b": null, "c": [null, 2]}"#
        );
    }

    #[test]
    fn strings_are_left_alone() {
        let input = r#"{"company_name": "NaN \"Infinity\" Corp", "x": NaN}"#;
        assert_eq!(
            sanitize_non_finite(input),
            r#"{"company_name": "NaN \"Infinity\" Corp", "x": null}"#
        );
    }

    #[test]
    fn payload_with_nan_decodes() {
        let records: Vec<PeriodAlertRecord> = from_str_lenient(
            r#"[{"symbol": "F", "period": "8-day", "current_price": NaN, "average": 11.2}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].current_price, None);
        assert_eq!(records[0].average, Some(11.2));
    }
}
