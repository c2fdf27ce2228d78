use std::fmt;

use lazy_regex::regex;
use regex::Captures;

/// Redacts emails and session tokens from a string before it is logged.
///
/// - Emails keep the first character of the local part and the full domain.
/// - Three-segment base64url tokens become `[REDACTED_TOKEN]`.
///
/// Tokens are redacted first so their segments are never mistaken for
/// anything else.
pub fn redact(input: &str) -> String {
    let tokens = regex!(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b")
        .replace_all(input, "[REDACTED_TOKEN]");

    regex!(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]{1,})\b")
        .replace_all(&tokens, |caps: &Captures| format!("{}***{}", &caps[1], &caps[2]))
        .into_owned()
}

/// A wrapper that redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
