//! Typed result objects decoded from API responses.
//!
//! Every type here is constructed solely by decoding a response - never by
//! hand. Unknown JSON fields are ignored for forward compatibility; fields
//! absent on older servers take their documented defaults, while
//! structurally required fields (identifying hashes, sync `rid`s) fail the
//! decode when missing.

mod app;
pub(crate) mod convert;
mod log;
mod rss;
mod search;
mod sync;
mod torrent;
mod transfer;

pub use app::{BuildInfo, NetworkInterface, Preferences};
pub use log::{LogMessage, LogPeer, LogSeverity};
pub use rss::{RssArticle, RssFeed, RssFolder, RssItem, RssRule};
pub use search::{
    SearchJobResults, SearchJobStart, SearchJobState, SearchJobStatus, SearchPlugin,
    SearchPluginCategories, SearchPluginCategory, SearchResultEntry,
};
pub use sync::{
    ServerState, SyncCategory, SyncMainData, SyncPeer, SyncTorrentInfo, SyncTorrentPeers,
};
pub use torrent::{
    Category, ContentLayout, FileEntry, FilePriority, InfoFilter, PieceState, RatioLimit,
    SeedingTimeLimit, ShareLimitAction, StopCondition, TorrentInfo, TorrentProperties,
    TorrentState, Tracker, TrackerStatus, WebSeed,
};
pub use transfer::{ConnectionStatus, SpeedLimitsMode, TransferInfo};
