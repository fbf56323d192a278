//! Typed async client for the qBittorrent WebUI API.
//!
//! Endpoint naming, parameter casing, the cookie session, and JSON shapes
//! stay behind typed methods grouped the way the API paths are.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> qbt_core::Result<()> {
//! use qbt::Client;
//! use qbt::api::TorrentInfoQuery;
//!
//! let client = Client::connect("http://localhost:8080/api/v2", "admin", "adminadmin").await?;
//!
//! for torrent in client.torrents().info(TorrentInfoQuery::default()).await? {
//!     println!("{} {:?} {:.1}%", torrent.name, torrent.state, torrent.progress * 100.0);
//! }
//!
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod config;
pub mod model;
mod transport;

pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use transport::HyperTransport;

// Re-export the wire-level types callers interact with directly.
pub use qbt_core::{
    ApiError, ApiVersion, ClientVersion, Error, Form, Hashes, HttpClient, InfoHash, Method,
    Params, Part, Request, Response, Result, Stage,
};
