//! Reading the token a client sent back.

use returnurl_core::{FieldValue, RequestFields, Token};
use tracing::trace;

/// Reads the token field `name` from `request`.
///
/// The form body wins over the query string; a blank form value (empty or
/// `"0"`) falls through to the query. A list value (e.g. `ru[]=...`) is
/// never a token, and neither is a value that sanitizes to nothing.
pub fn extract_token<R>(request: &R, name: &str) -> Option<Token>
where
    R: RequestFields + ?Sized,
{
    let value = request
        .form(name)
        .filter(|value| !is_blank(value))
        .or_else(|| request.query(name))
        .filter(|value| !is_blank(value))?;

    let Some(raw) = value.as_scalar() else {
        trace!(field = %name, "Ignoring non-scalar token field");
        return None;
    };

    let token = sanitize(raw);
    if token.is_empty() {
        return None;
    }

    Some(Token::new_unchecked(token))
}

fn is_blank(value: &FieldValue) -> bool {
    value.is_empty() || value.as_scalar() == Some("0")
}

/// Strips NUL bytes and every whitespace character, wherever they occur.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\0' && !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use returnurl_core::RequestData;

    #[test]
    fn sanitize_compacts_internal_whitespace_and_nul() {
        assert_eq!(sanitize("ab cd\0ef"), "abcdef");
        assert_eq!(sanitize(" \tab\r\ncd \u{a0}"), "abcd");
        assert_eq!(sanitize("4GFfc4"), "4GFfc4");
    }

    #[test]
    fn form_beats_query() {
        let request = RequestData::new()
            .with_form("ru", "fromForm")
            .with_query("ru", "fromQuery");

        let token = extract_token(&request, "ru").unwrap();
        assert_eq!(token.as_str(), "fromForm");
    }

    #[test]
    fn falls_back_to_query() {
        let request = RequestData::new().with_query("ru", "fromQuery");
        assert_eq!(
            extract_token(&request, "ru").unwrap().as_str(),
            "fromQuery"
        );
    }

    #[test]
    fn empty_form_value_falls_back_to_query() {
        let request = RequestData::new()
            .with_form("ru", "")
            .with_query("ru", "fromQuery");
        assert_eq!(
            extract_token(&request, "ru").unwrap().as_str(),
            "fromQuery"
        );
    }

    #[test]
    fn zero_form_value_falls_back_to_query() {
        let request = RequestData::new()
            .with_form("ru", "0")
            .with_query("ru", "fromQuery");
        assert_eq!(
            extract_token(&request, "ru").unwrap().as_str(),
            "fromQuery"
        );

        let request = RequestData::new().with_query("ru", "0");
        assert!(extract_token(&request, "ru").is_none());
    }

    #[test]
    fn list_value_is_rejected() {
        let request =
            RequestData::new().with_query("ru", FieldValue::List(vec!["4GFfc4".to_string()]));
        assert!(extract_token(&request, "ru").is_none());
    }

    #[test]
    fn list_in_form_does_not_fall_back() {
        let request = RequestData::new()
            .with_form("ru", FieldValue::List(vec!["a".to_string()]))
            .with_query("ru", "fromQuery");
        assert!(extract_token(&request, "ru").is_none());
    }

    #[test]
    fn raw_token_is_sanitized() {
        let request = RequestData::new().with_form("ru", "ab cd\0ef");
        assert_eq!(extract_token(&request, "ru").unwrap().as_str(), "abcdef");
    }

    #[test]
    fn whitespace_only_is_absent() {
        let request = RequestData::new().with_form("ru", " \t\0 ");
        assert!(extract_token(&request, "ru").is_none());
    }

    #[test]
    fn custom_field_name() {
        let request = RequestData::new()
            .with_query("ru", "ignored")
            .with_query("back", "used");
        assert_eq!(extract_token(&request, "back").unwrap().as_str(), "used");
    }

    #[test]
    fn missing_field_or_request_is_absent() {
        assert!(extract_token(&RequestData::new(), "ru").is_none());

        let no_request: Option<RequestData> = None;
        assert!(extract_token(&no_request, "ru").is_none());
    }
}
