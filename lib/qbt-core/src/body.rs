//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
    /// Plain text content type (`text/plain`).
    PlainText,
    /// Torrent metainfo content type (`application/x-bittorrent`).
    Bittorrent,
    /// Binary content type (`application/octet-stream`).
    OctetStream,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::PlainText => "text/plain",
            Self::Bittorrent => "application/x-bittorrent",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to form URL-encoded bytes.
///
/// Uses `serde_html_form`, which supports `Vec<T>` for repeated form fields.
///
/// # Errors
///
/// Returns an error if form serialization fails.
///
/// # Example
///
/// ```
/// use qbt_core::to_form;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Login { username: String, password: String }
///
/// let login = Login { username: "admin".to_string(), password: "secret".to_string() };
/// let bytes = to_form(&login).expect("serialize");
/// assert_eq!(bytes.as_ref(), b"username=admin&password=secret");
/// ```
pub fn to_form<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_html_form::to_string(value)
        .map(|s| Bytes::from(s.into_bytes()))
        .map_err(Into::into)
}

/// Deserialize JSON bytes with path-aware error messages.
///
/// Uses `serde_path_to_error` so a decode failure carries the exact JSON
/// path of the offending field (e.g. `torrents.state`) in the resulting
/// [`Error::Mapper`](crate::Error::Mapper).
///
/// # Errors
///
/// Returns [`Error::Mapper`](crate::Error::Mapper) if deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::mapper(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(
            ContentType::FormUrlEncoded.as_str(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(ContentType::Bittorrent.as_str(), "application/x-bittorrent");
        assert_eq!(ContentType::PlainText.to_string(), "text/plain");
    }

    #[test]
    fn to_form_serialize() {
        #[derive(serde::Serialize)]
        struct Login {
            username: String,
            password: String,
        }

        let login = Login {
            username: "admin".to_string(),
            password: "adminadmin".to_string(),
        };

        let bytes = to_form(&login).expect("serialize");
        assert_eq!(bytes.as_ref(), b"username=admin&password=adminadmin");
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Category {
            name: String,
            #[serde(rename = "savePath")]
            save_path: String,
        }

        let bytes = br#"{"name":"tv","savePath":"/downloads/tv"}"#;
        let category: Category = from_json(bytes).expect("deserialize");

        assert_eq!(
            category,
            Category {
                name: "tv".to_string(),
                save_path: "/downloads/tv".to_string(),
            }
        );
    }

    #[test]
    fn from_json_failure_is_a_mapper_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Tracker {
            #[allow(dead_code)]
            url: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Torrent {
            #[allow(dead_code)]
            tracker: Tracker,
        }

        // missing 'url' inside 'tracker'
        let bytes = br#"{"tracker":{}}"#;
        let result: Result<Torrent> = from_json(bytes);

        let err = result.expect_err("should fail");
        let Error::Mapper { path, message } = &err else {
            panic!("expected mapper error, got {err:?}");
        };
        assert!(path.contains("tracker"), "path: {path}");
        assert!(message.contains("url"), "message: {message}");
    }

    #[test]
    fn from_json_syntax_error() {
        let result: Result<Vec<String>> = from_json(b"not json");
        assert!(matches!(result, Err(Error::Mapper { .. })));
    }
}
