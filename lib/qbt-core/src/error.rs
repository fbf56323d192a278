//! Error types for qbt.

use bytes::Bytes;
use derive_more::{Display, Error, From};

use crate::version::ApiVersion;

// ============================================================================
// API Error Payload
// ============================================================================

/// Status, message, and raw body of a rejected API call.
///
/// Carried by every server-originated [`Error`] variant so callers can log
/// or display the server's own diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("HTTP {status}: {message}")]
pub struct ApiError {
    /// HTTP status code (`200` for the login/add special cases).
    pub status: u16,
    /// Error message or HTTP reason phrase.
    pub message: String,
    /// Raw response body, if available.
    #[error(not(source))]
    pub body: Option<Bytes>,
}

impl ApiError {
    /// Creates an error payload without a body.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Attaches the raw response body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for qbt operations.
///
/// Server rejections are keyed by HTTP status ([`Error::BadRequest`] through
/// [`Error::Http`]), with two endpoint quirks special-cased:
/// [`Error::Login`] and [`Error::AddTorrent`] both arrive as HTTP 200 with a
/// failure body. [`Error::Version`] and [`Error::Mapper`] never touch the
/// wire; transport failures ([`Error::Connection`], [`Error::Tls`],
/// [`Error::Timeout`]) come straight from the connection layer so callers
/// can tell a protocol error from a network one.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// HTTP 400 - missing or invalid parameters.
    #[display("bad request: {_0}")]
    #[from(skip)]
    BadRequest(ApiError),

    /// HTTP 403 - authentication missing, expired, or denied.
    #[display("forbidden: {_0}")]
    #[from(skip)]
    Forbidden(ApiError),

    /// HTTP 404 - unknown endpoint or torrent.
    #[display("not found: {_0}")]
    #[from(skip)]
    NotFound(ApiError),

    /// HTTP 409 - request conflicts with server state.
    #[display("conflict: {_0}")]
    #[from(skip)]
    Conflict(ApiError),

    /// HTTP 415 - torrent file rejected as invalid.
    #[display("unsupported media type: {_0}")]
    #[from(skip)]
    UnsupportedMediaType(ApiError),

    /// Any other non-2xx status.
    #[display("{_0}")]
    #[from(skip)]
    Http(ApiError),

    /// `auth/login` rejected the credentials (HTTP 200 with failure body).
    #[display("login failed: {_0}")]
    #[from(skip)]
    Login(ApiError),

    /// `torrents/add` added no new torrents (body other than `Ok.`).
    #[display("no torrents were added: {_0}")]
    #[from(skip)]
    AddTorrent(ApiError),

    /// Local precondition: the server's API version is below the method's
    /// minimum. Raised before any request is sent.
    #[display("API version {required} is required but {current} is found")]
    #[from(skip)]
    Version {
        /// Minimum API version required by the method.
        required: ApiVersion,
        /// Cached API version of the connected server.
        current: ApiVersion,
    },

    /// Response decoding failed (unexpected shape or unknown enum token).
    #[display("mapper error at '{path}': {message}")]
    #[from(skip)]
    Mapper {
        /// JSON path to the offending field (e.g. `torrents.state`).
        path: String,
        /// Decode error message.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The session was used after it was closed.
    #[display("closed client")]
    #[from(skip)]
    Closed,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_html_form::ser::Error),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Maps a non-2xx response onto the status-keyed variant.
    ///
    /// `400`/`403`/`404`/`409`/`415` get their own variants; everything else
    /// falls back to the generic [`Error::Http`].
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>, body: impl Into<Bytes>) -> Self {
        let api = ApiError::new(status, message).with_body(body);

        match status {
            400 => Self::BadRequest(api),
            403 => Self::Forbidden(api),
            404 => Self::NotFound(api),
            409 => Self::Conflict(api),
            415 => Self::UnsupportedMediaType(api),
            _ => Self::Http(api),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a mapper error with path context.
    #[must_use]
    pub fn mapper(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mapper {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the [`ApiError`] payload for server-originated errors.
    #[must_use]
    pub const fn api(&self) -> Option<&ApiError> {
        match self {
            Self::BadRequest(api)
            | Self::Forbidden(api)
            | Self::NotFound(api)
            | Self::Conflict(api)
            | Self::UnsupportedMediaType(api)
            | Self::Http(api)
            | Self::Login(api)
            | Self::AddTorrent(api) => Some(api),
            _ => None,
        }
    }

    /// Returns the HTTP status code for server-originated errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.api() {
            Some(api) => Some(api.status),
            None => None,
        }
    }

    /// Returns the raw response body for server-originated errors.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.api().and_then(|api| api.body.as_ref())
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table() {
        assert!(matches!(
            Error::from_status(400, "Bad Request", ""),
            Error::BadRequest(_)
        ));
        assert!(matches!(
            Error::from_status(403, "Forbidden", ""),
            Error::Forbidden(_)
        ));
        assert!(matches!(
            Error::from_status(404, "Not Found", ""),
            Error::NotFound(_)
        ));
        assert!(matches!(
            Error::from_status(409, "Conflict", ""),
            Error::Conflict(_)
        ));
        assert!(matches!(
            Error::from_status(415, "Unsupported Media Type", ""),
            Error::UnsupportedMediaType(_)
        ));
        assert!(matches!(
            Error::from_status(500, "Internal Server Error", ""),
            Error::Http(_)
        ));
    }

    #[test]
    fn conflict_carries_status_and_body() {
        let err = Error::from_status(409, "Conflict", "Torrent hash not found");

        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.body().map(Bytes::as_ref),
            Some(b"Torrent hash not found".as_ref())
        );
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn display() {
        let err = Error::from_status(404, "Not Found", "");
        assert_eq!(err.to_string(), "not found: HTTP 404: Not Found");

        let err = Error::Version {
            required: ApiVersion::new(2, 3, 0),
            current: ApiVersion::new(2, 2, 0),
        };
        assert_eq!(
            err.to_string(),
            "API version 2.3.0 is required but 2.2.0 is found"
        );

        let err = Error::mapper("torrents.state", "unknown token");
        assert_eq!(
            err.to_string(),
            "mapper error at 'torrents.state': unknown token"
        );

        assert_eq!(Error::Timeout.to_string(), "request timeout");
        assert_eq!(Error::Closed.to_string(), "closed client");
    }

    #[test]
    fn login_is_not_a_status_error() {
        let err = Error::Login(ApiError::new(200, "Fails.").with_body("Fails."));
        assert_eq!(err.status(), Some(200));
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("login failed"));
    }

    #[test]
    fn predicates() {
        assert!(Error::Timeout.is_timeout());
        assert!(Error::connection("refused").is_connection());
        assert!(Error::from_status(404, "Not Found", "").is_not_found());
        assert!(!Error::from_status(400, "Bad Request", "").is_not_found());
        assert!(Error::from_status(502, "Bad Gateway", "").is_server_error());
    }
}
