//! Authorization token with redacted Debug and Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// Scheme prefix prepended when the token is sent.
pub const BEARER_PREFIX: &str = "Bearer ";

/// A bearer token as typed into the credentials panel.
///
/// Stored without the `Bearer ` prefix. The value never shows up in logs and
/// is wiped from memory when dropped.
#[derive(Clone, Default)]
pub struct BearerToken {
    inner: String,
}

impl BearerToken {
    /// Wrap a raw token.
    ///
    /// Surrounding whitespace is trimmed and a pasted `Bearer ` prefix is
    /// removed, so the stored value is always the bare credential.
    pub fn new(token: impl Into<String>) -> Self {
        let mut raw: String = token.into();
        let trimmed = raw.trim();
        let bare = trimmed.strip_prefix(BEARER_PREFIX).unwrap_or(trimmed).trim();
        let inner = bare.to_string();
        raw.zeroize();
        Self { inner }
    }

    /// The bare token, for building the outgoing header only.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Full `Authorization` header value, or `None` when no token is set.
    pub fn header_value(&self) -> Option<String> {
        if self.inner.is_empty() {
            None
        } else {
            Some(format!("{BEARER_PREFIX}{}", self.inner))
        }
    }

    /// Token length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken([REDACTED])")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED TOKEN]")
    }
}

impl Drop for BearerToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Tokens only leave the process inside an Authorization header.
impl serde::Serialize for BearerToken {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("BearerToken cannot be serialized - use as_str() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
