use std::{fmt, str::FromStr};

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::FromStrVisitor;

/// The input string is not valid base64url.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Data isn't base64url encoded")]
pub struct NotB64UrlEncoded;

/// Bytes whose canonical text form is unpadded URL-safe base64 (RFC 4648 §5).
///
/// Decoding is liberal: surrounding whitespace is trimmed, and padded or
/// standard-alphabet input is accepted alongside the canonical form.
/// Encoding always produces the canonical unpadded URL-safe form, so
/// `B64Url::try_from(s)?.to_string()` canonicalizes `s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct B64Url(Vec<u8>);

impl B64Url {
    /// Borrows the decoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the value, returning the decoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for B64Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&URL_SAFE_NO_PAD.encode(&self.0))
    }
}

impl From<Vec<u8>> for B64Url {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for B64Url {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<B64Url> for Vec<u8> {
    fn from(value: B64Url) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for B64Url {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&str> for B64Url {
    type Error = NotB64UrlEncoded;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(NotB64UrlEncoded);
        }

        // Restore the standard alphabet and padding, then decode strictly.
        let mut normalized: String = trimmed
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                c => c,
            })
            .collect();
        while normalized.len() % 4 != 0 {
            normalized.push('=');
        }

        STANDARD
            .decode(normalized)
            .map(Self)
            .map_err(|_| NotB64UrlEncoded)
    }
}

impl FromStr for B64Url {
    type Err = NotB64UrlEncoded;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Serialize for B64Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for B64Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(FromStrVisitor::new())
    }
}
