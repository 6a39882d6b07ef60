//! Redaction for values that must not reach logs or error bodies.
//!
//! Upstream error bodies sometimes echo the bearer token back; those pass
//! through [`redact`] before being logged or placed in a problem detail.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Bearer headers and long opaque runs (API keys, JWT segments, hex digests).
fn token_pattern() -> &'static Regex {
    static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"(?i)\bbearer\s+\S+|\b[A-Za-z0-9_\-+/]{24,}={0,2}").unwrap()
    });
    &TOKEN
}

/// Replace anything that looks like a credential with `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    token_pattern()
        .replace_all(input, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Formats the wrapped string through [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Owned secret whose `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
