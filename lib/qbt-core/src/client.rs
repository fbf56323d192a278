//! HTTP transport trait.
//!
//! [`HttpClient`] is the seam between the typed client and the actual
//! network: the hyper-based transport implements it for production, test
//! doubles implement it to observe or fake traffic.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP execution trait.
///
/// Implementations should be async-first and pool connections; the typed
/// client never retries, so every call maps to at most one wire request.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}
