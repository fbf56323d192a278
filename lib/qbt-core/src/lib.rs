//! Wire-level types for the qbt qBittorrent WebUI API client.
//!
//! This crate provides the building blocks used by `qbt`:
//! - [`Method`], [`Request`], [`RequestBuilder`], [`Response`] - HTTP types
//! - [`Params`] - snake_case to camelCase request parameter mapping
//! - [`InfoHash`] and [`Hashes`] - torrent selectors with the `all` sentinel
//! - [`Form`] and [`Part`] - multipart bodies for `torrents/add`
//! - [`ClientVersion`] and [`ApiVersion`] - version gating values
//! - [`Error`] and [`Result`] - the error taxonomy
//! - [`HttpClient`] - the transport seam

mod body;
mod client;
mod error;
mod hashes;
mod method;
mod multipart;
pub mod params;
mod request;
mod response;
mod version;

pub use body::{ContentType, from_json, to_form};
pub use client::HttpClient;
pub use error::{ApiError, Error, Result};
pub use hashes::{Hashes, InfoHash};
pub use method::Method;
pub use multipart::{Form, Part};
pub use params::Params;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use version::{ApiVersion, ClientVersion, Stage, version_check};
