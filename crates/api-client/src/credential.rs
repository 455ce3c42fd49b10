use std::fmt;
use zeroize::Zeroize as _;

/// Opaque bearer token for the authenticated API.
///
/// The token is never printed by `Debug` and is wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Blank input yields `None`, so an empty `TOLENO_API_KEY=` behaves the
    /// same as an unset variable.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let mut token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            token.zeroize();
            return None;
        }
        if trimmed.len() != token.len() {
            let owned = trimmed.to_string();
            token.zeroize();
            return Some(Self(owned));
        }
        Some(Self(token))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
