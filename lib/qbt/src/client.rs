//! The client and its authenticated session.
//!
//! One [`Client`] owns one cookie-authenticated session against one
//! server. Clones share the session; concurrent tasks can issue requests
//! independently because the cookie is written at login and read-only
//! afterwards. Repeating a login is harmless - the server hands out a
//! fresh cookie each time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;
use qbt_core::{
    ApiVersion, ClientVersion, Error, Form, HttpClient, Method, Params, Request, RequestBuilder,
    Response, Result, version_check,
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{AppApi, AuthApi, LogApi, RssApi, SearchApi, SyncApi, TorrentsApi, TransferApi};
use crate::config::ClientConfig;
use crate::transport::HyperTransport;

/// A connection to a remote qBittorrent instance.
///
/// Obtained from [`Client::connect`] or [`Client::builder`]. Cloning is
/// cheap and clones share the session. Endpoints are grouped the way the
/// API paths are: [`Client::torrents`], [`Client::transfer`], and so on,
/// with [`Client::request`] as the low-level escape hatch for endpoints
/// without a typed wrapper yet.
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> qbt_core::Result<()> {
/// use qbt::Client;
///
/// let client = Client::connect("http://localhost:8080/api/v2", "admin", "adminadmin").await?;
/// for torrent in client.torrents().info(Default::default()).await? {
///     println!("{}: {:?}", torrent.name, torrent.state);
/// }
/// client.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T = HyperTransport> {
    inner: Arc<ClientInner<T>>,
}

#[derive(Debug)]
struct ClientInner<T> {
    transport: T,
    base_url: Url,
    config: ClientConfig,
    cookie: RwLock<Option<String>>,
    versions: RwLock<Option<(ClientVersion, ApiVersion)>>,
    closed: AtomicBool,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Client<HyperTransport> {
    /// Log in and return a connected client.
    ///
    /// Fetches and caches the server's client and API versions after the
    /// login succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Login`] if the server rejects the credentials, or
    /// a transport error if it cannot be reached.
    pub async fn connect(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .credentials(username, password)
            .connect()
            .await
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

impl<T: HttpClient> Client<T> {
    /// Base URL of the WebUI API, e.g. `http://localhost:8080/api/v2/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Application API methods (`app/*`).
    #[must_use]
    pub fn app(&self) -> AppApi<'_, T> {
        AppApi::new(self)
    }

    /// Authentication API methods (`auth/*`).
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi::new(self)
    }

    /// Log API methods (`log/*`).
    #[must_use]
    pub fn log(&self) -> LogApi<'_, T> {
        LogApi::new(self)
    }

    /// RSS API methods (`rss/*`).
    #[must_use]
    pub fn rss(&self) -> RssApi<'_, T> {
        RssApi::new(self)
    }

    /// Search API methods (`search/*`).
    #[must_use]
    pub fn search(&self) -> SearchApi<'_, T> {
        SearchApi::new(self)
    }

    /// Sync API methods (`sync/*`).
    #[must_use]
    pub fn sync(&self) -> SyncApi<'_, T> {
        SyncApi::new(self)
    }

    /// Torrents API methods (`torrents/*`).
    #[must_use]
    pub fn torrents(&self) -> TorrentsApi<'_, T> {
        TorrentsApi::new(self)
    }

    /// Transfer API methods (`transfer/*`).
    #[must_use]
    pub fn transfer(&self) -> TransferApi<'_, T> {
        TransferApi::new(self)
    }

    /// Cached qBittorrent application version, when known.
    #[must_use]
    pub fn client_version(&self) -> Option<ClientVersion> {
        read_lock(&self.inner.versions).map(|(client, _)| client)
    }

    /// Cached WebUI API version, when known.
    #[must_use]
    pub fn api_version(&self) -> Option<ApiVersion> {
        read_lock(&self.inner.versions).map(|(_, api)| api)
    }

    /// Fails fast with [`Error::Version`] when the cached API version is
    /// below `minimum`. An unknown version passes.
    pub(crate) fn check_api_version(&self, minimum: ApiVersion) -> Result<()> {
        version_check(self.api_version(), minimum)
    }

    /// Fetch `app/version` and `app/webapiVersion` and cache the results
    /// for the lifetime of the session.
    pub async fn refresh_versions(&self) -> Result<()> {
        let client_version = ClientVersion::parse(&self.app().version().await?)?;
        let api_version = ApiVersion::parse(&self.app().webapi_version().await?)?;

        tracing::debug!(%client_version, %api_version, "server versions");
        *write_lock(&self.inner.versions) = Some((client_version, api_version));
        Ok(())
    }

    /// Whether [`Client::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Close the session.
    ///
    /// Logs out first when the configuration asks for it (a `Forbidden`
    /// reply is ignored - the session was already gone). Closing twice is
    /// a no-op; any use after closing fails with [`Error::Closed`]. The
    /// transport's connection pool is released once the last clone drops.
    pub async fn close(&self) -> Result<()> {
        if self.is_closed() {
            return Ok(());
        }

        let result = if self.inner.config.logout_on_close && self.has_cookie() {
            match self.auth().logout().await {
                Ok(()) | Err(Error::Forbidden(_)) => Ok(()),
                Err(other) => Err(other),
            }
        } else {
            Ok(())
        };

        self.inner.closed.store(true, Ordering::SeqCst);
        write_lock(&self.inner.cookie).take();
        result
    }

    /// Send a request to an endpoint and return the raw response.
    ///
    /// `endpoint` is the path below the base URL, e.g. `torrents/info`.
    /// `params` become the query string; `data` a form-encoded body. The
    /// session cookie is attached automatically.
    ///
    /// This is the escape hatch for endpoints without a typed wrapper.
    ///
    /// # Errors
    ///
    /// Returns a status-keyed error for non-2xx responses, [`Error::Closed`]
    /// after [`Client::close`], and transport errors untouched.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<Params>,
        data: Option<Params>,
    ) -> Result<Response<Bytes>> {
        let mut builder = self.prepare(method, endpoint)?;
        if let Some(params) = params {
            builder = builder.query_params(params);
        }
        if let Some(data) = data {
            builder = builder.form_params(data);
        }
        self.dispatch(builder.build()).await
    }

    /// Send a request and decode the UTF-8 response body.
    pub async fn request_text(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<Params>,
        data: Option<Params>,
    ) -> Result<String> {
        self.request(method, endpoint, params, data).await?.text()
    }

    /// Send a request and decode the JSON response body.
    pub async fn request_json<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<Params>,
        data: Option<Params>,
    ) -> Result<R> {
        self.request(method, endpoint, params, data).await?.json()
    }

    /// Send a multipart form to an endpoint (`torrents/add`).
    pub(crate) async fn request_multipart(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<Response<Bytes>> {
        let builder = self.prepare(Method::Post, endpoint)?;
        self.dispatch(builder.multipart(form).build()).await
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<Params>,
    ) -> Result<R> {
        self.request_json(Method::Get, endpoint, params, None).await
    }

    pub(crate) async fn get_text(&self, endpoint: &str, params: Option<Params>) -> Result<String> {
        self.request_text(Method::Get, endpoint, params, None).await
    }

    pub(crate) async fn post_form(&self, endpoint: &str, data: Params) -> Result<String> {
        self.request_text(Method::Post, endpoint, None, Some(data))
            .await
    }

    pub(crate) fn set_cookie(&self, cookie: String) {
        *write_lock(&self.inner.cookie) = Some(cookie);
    }

    fn has_cookie(&self) -> bool {
        read_lock(&self.inner.cookie).is_some()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Closed);
        }
        Ok(())
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.inner
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(Error::InvalidUrl)
    }

    fn prepare(&self, method: Method, endpoint: &str) -> Result<RequestBuilder<Bytes>> {
        self.ensure_open()?;
        let url = self.endpoint_url(endpoint)?;

        let mut builder = Request::builder(method, url);
        if let Some(cookie) = read_lock(&self.inner.cookie).clone() {
            builder = builder.header("Cookie", cookie);
        }
        Ok(builder)
    }

    async fn dispatch(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let method = request.method();
        let endpoint = request.url().path().to_owned();
        tracing::debug!(%method, %endpoint, "sending request");

        // transport failures pass through untouched
        let response = self.inner.transport.execute(request).await?;

        if !response.is_success() {
            let status = response.status();
            tracing::warn!(status, %endpoint, "request failed");

            let body = response.into_body();
            return Err(Error::from_status(status, status_message(status, &body), body));
        }

        Ok(response)
    }
}

/// Message for a failed response: the server's own text when it sent any,
/// the canonical reason phrase otherwise.
fn status_message(status: u16, body: &Bytes) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();

    if text.is_empty() {
        http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("HTTP error")
            .to_owned()
    } else {
        text.to_owned()
    }
}

fn read_lock<V: Clone>(lock: &RwLock<Option<V>>) -> Option<V> {
    lock.read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .cloned()
}

fn write_lock<V>(lock: &RwLock<Option<V>>) -> std::sync::RwLockWriteGuard<'_, Option<V>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Client`].
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> qbt_core::Result<()> {
/// use std::time::Duration;
///
/// use qbt::{Client, ClientConfig};
///
/// let client = Client::builder()
///     .base_url("http://localhost:8080/api/v2")
///     .credentials("admin", "adminadmin")
///     .config(ClientConfig::builder().timeout(Duration::from_secs(10)).build())
///     .connect()
///     .await?;
/// # let _ = client;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    credentials: Option<(String, String)>,
    config: Option<ClientConfig>,
}

impl ClientBuilder {
    /// Set the WebUI API base URL (required), e.g.
    /// `http://localhost:8080/api/v2`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the login credentials.
    ///
    /// Without credentials, no login is attempted; call
    /// `client.auth().login(..)` manually when needed.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Connect using the default hyper transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Login`] for rejected credentials; transport errors
    /// pass through.
    pub async fn connect(self) -> Result<Client<HyperTransport>> {
        let config = self.config.clone().unwrap_or_default();
        let transport = HyperTransport::with_config(config);
        self.connect_with(transport).await
    }

    /// Connect using a custom transport (tests, instrumentation).
    ///
    /// # Errors
    ///
    /// Same as [`ClientBuilder::connect`].
    pub async fn connect_with<T: HttpClient>(self, transport: T) -> Result<Client<T>> {
        let raw = self
            .base_url
            .ok_or_else(|| Error::invalid_request("base_url is required"))?;
        let base_url = normalize_base_url(&raw)?;

        let client = Client {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                config: self.config.unwrap_or_default(),
                cookie: RwLock::new(None),
                versions: RwLock::new(None),
                closed: AtomicBool::new(false),
            }),
        };

        if let Some((username, password)) = self.credentials {
            if let Err(err) = client.auth().login(&username, &password).await {
                client.inner.closed.store(true, Ordering::SeqCst);
                return Err(err);
            }
        }

        // Servers with auth bypass disabled reject these until login; a
        // cookie-less client simply runs with unknown versions.
        match client.refresh_versions().await {
            Ok(()) | Err(Error::Forbidden(_)) => {}
            Err(err) => return Err(err),
        }

        Ok(client)
    }
}

/// Parses the base URL, forcing a trailing slash so endpoint joins append
/// instead of replacing the last path segment.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut text = raw.trim_end_matches('/').to_owned();
    text.push('/');
    Url::parse(&text).map_err(Error::InvalidUrl)
}
