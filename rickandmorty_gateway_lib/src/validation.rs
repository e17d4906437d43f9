use crate::error::GatewayError;

/// Keep only ASCII letters from a `name` search term.
///
/// Empty input and input with no letters at all are both rejected the same way.
pub fn sanitize_search_name(input: &str) -> Result<String, GatewayError> {
    let sanitized: String = input.chars().filter(char::is_ascii_alphabetic).collect();
    if sanitized.is_empty() {
        return Err(GatewayError::MissingParameter("name"));
    }
    Ok(sanitized)
}

/// Reject an absent or empty path/query parameter.
pub fn require_param<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, GatewayError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GatewayError::MissingParameter(name)),
    }
}

/// First value of `key` in a raw query string, percent-decoded.
pub fn first_query_value(query: Option<&str>, key: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Last segment of a request path, still percent-encoded.
pub fn raw_last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
