//! Turning an HTTP request into [`RequestData`].

use axum::http::Uri;
use returnurl_core::{FieldValue, RequestData};
use std::collections::HashMap;

/// Decodes an `application/x-www-form-urlencoded` payload.
///
/// `name[]=a&name[]=b` (or any `name[...]` key) becomes a list under
/// `name`; a repeated plain key keeps its last value.
pub fn parse_fields(input: &[u8]) -> HashMap<String, FieldValue> {
    let mut fields: HashMap<String, FieldValue> = HashMap::new();

    for (key, value) in url::form_urlencoded::parse(input) {
        match list_name(&key).map(str::to_string) {
            Some(name) => {
                let field = fields
                    .entry(name)
                    .or_insert_with(|| FieldValue::List(Vec::new()));
                match field {
                    FieldValue::List(values) => values.push(value.into_owned()),
                    scalar => *scalar = FieldValue::List(vec![value.into_owned()]),
                }
            }
            None => {
                fields.insert(key.into_owned(), FieldValue::Scalar(value.into_owned()));
            }
        }
    }

    fields
}

fn list_name(key: &str) -> Option<&str> {
    if !key.ends_with(']') {
        return None;
    }
    match key.find('[') {
        Some(idx) if idx > 0 => Some(&key[..idx]),
        _ => None,
    }
}

/// The URL of the current request as the client sees it: path plus query.
pub fn request_url(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// Collects query fields, optional form body fields and the request URL.
pub fn request_data(uri: &Uri, body: Option<&[u8]>) -> RequestData {
    let mut request = RequestData::new();
    request.set_url(request_url(uri));

    if let Some(query) = uri.query() {
        for (name, value) in parse_fields(query.as_bytes()) {
            request.insert_query(name, value);
        }
    }

    if let Some(body) = body {
        for (name, value) in parse_fields(body) {
            request.insert_form(name, value);
        }
    }

    request
}
