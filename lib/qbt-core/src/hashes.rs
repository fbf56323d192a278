//! Info-hash values and the bulk-selection sentinel.
//!
//! Bulk torrent-management endpoints take either a list of info hashes or
//! the literal `all`. [`Hashes`] keeps that sentinel as a dedicated variant
//! so it can never be confused with a real hash value.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A validated torrent info hash.
///
/// Hex string of 40 characters (BitTorrent v1, SHA-1) or 64 characters
/// (v2, SHA-256). Construction goes through [`InfoHash::parse`]; the
/// inner representation is the lowercase-insensitive string exactly as
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InfoHash(String);

impl InfoHash {
    /// Validates and wraps an info hash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] unless the value is a hexadecimal
    /// string of exactly 40 or 64 characters.
    pub fn parse(hash: impl Into<String>) -> Result<Self> {
        let hash = hash.into();

        let valid = matches!(hash.len(), 40 | 64) && hash.bytes().all(|b| b.is_ascii_hexdigit());
        if !valid {
            return Err(Error::invalid_request(format!(
                "info hash is a hexadecimal string of 40 or 64 characters: {hash:?}"
            )));
        }

        Ok(Self(hash))
    }

    /// The hash as a hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InfoHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for InfoHash {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InfoHash {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for InfoHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Selection of torrents for bulk endpoints: specific hashes, or all.
///
/// # Example
///
/// ```
/// use qbt_core::{Hashes, InfoHash};
///
/// let one = InfoHash::parse("8c212779b4abde7c6bc608063a0d008b7e40ce32").expect("hash");
/// assert_eq!(Hashes::from(one).to_wire(), "8c212779b4abde7c6bc608063a0d008b7e40ce32");
/// assert_eq!(Hashes::All.to_wire(), "all");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hashes {
    /// Every torrent known to the server (wire literal `all`).
    All,
    /// An explicit list of torrents, transmitted in input order.
    Some(Vec<InfoHash>),
}

impl Hashes {
    /// Encodes the selection as the wire parameter value.
    ///
    /// A hash list collapses to a single comma-joined string; the sentinel
    /// bypasses joining entirely.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Some(hashes) => {
                let parts: Vec<&str> = hashes.iter().map(InfoHash::as_str).collect();
                parts.join(",")
            }
        }
    }
}

impl From<InfoHash> for Hashes {
    fn from(hash: InfoHash) -> Self {
        Self::Some(vec![hash])
    }
}

impl From<Vec<InfoHash>> for Hashes {
    fn from(hashes: Vec<InfoHash>) -> Self {
        Self::Some(hashes)
    }
}

impl FromIterator<InfoHash> for Hashes {
    fn from_iter<I: IntoIterator<Item = InfoHash>>(iter: I) -> Self {
        Self::Some(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    const V1: &str = "8c212779b4abde7c6bc608063a0d008b7e40ce32";
    const V2: &str = "d01ca79cd5b3ac2c03d24a4171de3f1e46732c2ea77f6b68b7ef5d9ac6e23b9c";

    #[test]
    fn parse_accepts_both_hash_sizes() {
        check!(InfoHash::parse(V1).is_ok());
        check!(InfoHash::parse(V2).is_ok());
        check!(InfoHash::parse(V1.to_uppercase()).is_ok());
    }

    #[test]
    fn parse_rejects_bad_values() {
        let not_hex = format!("{}zz", &V1[..38]);
        for bad in ["", "abc", &V1[..39], "all", not_hex.as_str()] {
            let_assert!(Err(Error::InvalidRequest(_)) = InfoHash::parse(bad), "{bad:?}");
        }
    }

    #[test]
    fn all_is_the_literal_sentinel() {
        assert_eq!(Hashes::All.to_wire(), "all");
    }

    #[test]
    fn list_joins_with_commas_in_input_order() {
        let hashes: Hashes = [V1, V2]
            .iter()
            .map(|h| InfoHash::parse(*h).expect("hash"))
            .collect();

        assert_eq!(hashes.to_wire(), format!("{V1},{V2}"));
    }

    #[test]
    fn single_hash_does_not_join() {
        let hashes = Hashes::from(InfoHash::parse(V1).expect("hash"));
        assert_eq!(hashes.to_wire(), V1);
    }
}
