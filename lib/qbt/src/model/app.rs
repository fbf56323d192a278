//! Application-level result objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Build information (`app/buildInfo`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct BuildInfo {
    /// Qt version.
    pub qt: String,
    /// libtorrent version.
    pub libtorrent: String,
    /// Boost version.
    pub boost: String,
    /// OpenSSL version.
    pub openssl: String,
    /// zlib version; undocumented, reported since API 2.5.1.
    #[serde(default)]
    pub zlib: String,
    /// Architecture bitness (32 or 64).
    #[serde(default)]
    pub bitness: i64,
    /// Platform name (`linux`, `macos`, `windows`); API 2.10.3+.
    #[serde(default)]
    pub platform: String,
}

/// One network interface (`app/networkInterfaceList`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct NetworkInterface {
    /// Human-readable interface name.
    pub name: String,
    /// Interface identifier passed back to the server.
    pub value: String,
}

/// Application preferences (`app/preferences` / `app/setPreferences`).
///
/// Preference keys come and go across server versions, so only the
/// commonly used ones are typed; everything else round-trips through
/// [`Preferences::extra`]. Absent keys stay `None` and are not sent back
/// on update, which makes a partial update the natural usage:
///
/// ```
/// use qbt::model::Preferences;
///
/// let prefs = Preferences {
///     dl_limit: Some(1_048_576),
///     ..Preferences::default()
/// };
/// # let _ = prefs;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// UI locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Default save path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_path: Option<String>,
    /// Temporary path enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_path_enabled: Option<bool>,
    /// Temporary path for incomplete downloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_path: Option<String>,
    /// Copy .torrent files to this directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    /// Copy finished .torrent files to this directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir_fin: Option<String>,
    /// Automatic torrent management by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_tmm_enabled: Option<bool>,
    /// Default content layout for new torrents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torrent_content_layout: Option<String>,
    /// Default stop condition for new torrents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torrent_stop_condition: Option<String>,
    /// Add new torrents stopped (API 2.11.0 name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_stopped_enabled: Option<bool>,
    /// Add new torrents paused (pre-2.11.0 name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_paused_enabled: Option<bool>,
    /// Pre-allocate disk space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preallocate_all: Option<bool>,
    /// Append `.!qB` to incomplete files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incomplete_files_ext: Option<bool>,
    /// Listening port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<i64>,
    /// Pick a random listening port on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_port: Option<bool>,
    /// Use UPnP / NAT-PMP port forwarding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upnp: Option<bool>,
    /// Global connection limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connec: Option<i64>,
    /// Per-torrent connection limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connec_per_torrent: Option<i64>,
    /// Global upload slot limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uploads: Option<i64>,
    /// Per-torrent upload slot limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uploads_per_torrent: Option<i64>,
    /// Global download limit, bytes/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dl_limit: Option<i64>,
    /// Global upload limit, bytes/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_limit: Option<i64>,
    /// Alternative download limit, bytes/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_dl_limit: Option<i64>,
    /// Alternative upload limit, bytes/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_up_limit: Option<i64>,
    /// Alternative limits schedule enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_enabled: Option<bool>,
    /// DHT enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dht: Option<bool>,
    /// Peer exchange enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pex: Option<bool>,
    /// Local peer discovery enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lsd: Option<bool>,
    /// Encryption mode (0 prefer, 1 force on, 2 force off).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<i64>,
    /// Anonymous mode enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous_mode: Option<bool>,
    /// Torrent queueing enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queueing_enabled: Option<bool>,
    /// Maximum active downloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_active_downloads: Option<i64>,
    /// Maximum active torrents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_active_torrents: Option<i64>,
    /// Maximum active uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_active_uploads: Option<i64>,
    /// Exclude slow torrents from the queue limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dont_count_slow_torrents: Option<bool>,
    /// Share ratio limiting enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ratio_enabled: Option<bool>,
    /// Global share ratio limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ratio: Option<f64>,
    /// Seeding time limiting enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_seeding_time_enabled: Option<bool>,
    /// Global seeding time limit, minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_seeding_time: Option<i64>,
    /// Action when a share limit is reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ratio_act: Option<i64>,
    /// WebUI listen address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_ui_address: Option<String>,
    /// WebUI listen port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_ui_port: Option<i64>,
    /// WebUI username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_ui_username: Option<String>,
    /// Skip authentication on localhost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass_local_auth: Option<bool>,
    /// RSS feed refresh interval, minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rss_refresh_interval: Option<i64>,
    /// RSS processing enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rss_processing_enabled: Option<bool>,
    /// RSS auto-download rules enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rss_auto_downloading_enabled: Option<bool>,
    /// Network interface bound for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_network_interface: Option<String>,
    /// Address bound on the current interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_interface_address: Option<String>,
    /// Keys not covered by the typed fields, preserved on round-trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
