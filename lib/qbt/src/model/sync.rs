//! Incremental sync payloads (`sync/maindata`, `sync/torrentPeers`).
//!
//! Sync responses are differenced: the first call (or `rid=0`) returns a
//! full snapshot with `full_update: true`; later calls return only what
//! changed, plus `*_removed` lists. The mapper decodes one message at a
//! time - callers hold and merge the running state themselves.

use std::collections::HashMap;

use serde::Deserialize;

use super::torrent::TorrentState;
use super::transfer::ConnectionStatus;

/// Partial torrent record inside [`SyncMainData::torrents`].
///
/// Every field is optional: in a delta, absence means "unchanged". Values
/// stay in wire units (epoch seconds, second/minute counts) since a merge
/// target may want to diff them cheaply.
#[derive(Debug, Clone, Default, Deserialize)]
#[non_exhaustive]
pub struct SyncTorrentInfo {
    /// v1 info hash.
    pub infohash_v1: Option<String>,
    /// v2 info hash.
    pub infohash_v2: Option<String>,
    /// Torrent name.
    pub name: Option<String>,
    /// Selected size in bytes.
    pub size: Option<i64>,
    /// Total size in bytes.
    pub total_size: Option<i64>,
    /// Download progress in `0.0..=1.0`.
    pub progress: Option<f64>,
    /// Download speed, bytes/s.
    pub dlspeed: Option<i64>,
    /// Upload speed, bytes/s.
    pub upspeed: Option<i64>,
    /// Queue priority.
    pub priority: Option<i64>,
    /// Connected seeds.
    pub num_seeds: Option<i64>,
    /// Seeds in the swarm.
    pub num_complete: Option<i64>,
    /// Connected leechers.
    pub num_leechs: Option<i64>,
    /// Leechers in the swarm.
    pub num_incomplete: Option<i64>,
    /// Torrent state.
    pub state: Option<TorrentState>,
    /// Estimated completion time, seconds.
    pub eta: Option<i64>,
    /// Sequential download enabled.
    pub seq_dl: Option<bool>,
    /// First/last piece priority enabled.
    pub f_l_piece_prio: Option<bool>,
    /// Assigned category.
    pub category: Option<String>,
    /// Comma-joined tag list.
    pub tags: Option<String>,
    /// Super seeding enabled.
    pub super_seeding: Option<bool>,
    /// Forced start enabled.
    pub force_start: Option<bool>,
    /// Save path.
    pub save_path: Option<String>,
    /// Incomplete-download path.
    pub download_path: Option<String>,
    /// Absolute content path.
    pub content_path: Option<String>,
    /// Root path.
    pub root_path: Option<String>,
    /// Added timestamp, epoch seconds.
    pub added_on: Option<i64>,
    /// Completion timestamp, epoch seconds.
    pub completion_on: Option<i64>,
    /// First working tracker URL.
    pub tracker: Option<String>,
    /// Number of configured trackers.
    pub trackers_count: Option<i64>,
    /// Download limit, bytes/s.
    pub dl_limit: Option<i64>,
    /// Upload limit, bytes/s.
    pub up_limit: Option<i64>,
    /// All-time downloaded bytes.
    pub downloaded: Option<i64>,
    /// All-time uploaded bytes.
    pub uploaded: Option<i64>,
    /// Bytes downloaded this session.
    pub downloaded_session: Option<i64>,
    /// Bytes uploaded this session.
    pub uploaded_session: Option<i64>,
    /// Bytes left to download.
    pub amount_left: Option<i64>,
    /// Bytes completed.
    pub completed: Option<i64>,
    /// Effective maximum share ratio.
    pub max_ratio: Option<f64>,
    /// Effective maximum seeding time, minutes.
    pub max_seeding_time: Option<i64>,
    /// Effective maximum inactive seeding time, minutes.
    pub max_inactive_seeding_time: Option<i64>,
    /// Current share ratio.
    pub ratio: Option<f64>,
    /// Ratio limit; `-1` unset.
    pub ratio_limit: Option<f64>,
    /// Popularity metric.
    pub popularity: Option<f64>,
    /// Seeding time limit, minutes; `-2` global, `-1` unlimited.
    pub seeding_time_limit: Option<i64>,
    /// Inactive seeding time limit, minutes.
    pub inactive_seeding_time_limit: Option<i64>,
    /// Last seen complete, epoch seconds.
    pub seen_complete: Option<i64>,
    /// Automatic torrent management enabled.
    pub auto_tmm: Option<bool>,
    /// Total active time, seconds.
    pub time_active: Option<i64>,
    /// Total seeding time, seconds.
    pub seeding_time: Option<i64>,
    /// Last activity, epoch seconds.
    pub last_activity: Option<i64>,
    /// Piece availability.
    pub availability: Option<f64>,
    /// Seconds until the next announce.
    pub reannounce: Option<i64>,
    /// Torrent comment.
    pub comment: Option<String>,
    /// Marked private.
    pub private: Option<bool>,
    /// Metadata has been downloaded.
    pub has_metadata: Option<bool>,
}

/// Partial category record inside [`SyncMainData::categories`].
#[derive(Debug, Clone, Default, Deserialize)]
#[non_exhaustive]
pub struct SyncCategory {
    /// Category name.
    pub name: Option<String>,
    /// Save path for the category.
    #[serde(rename = "savePath")]
    pub save_path: Option<String>,
}

/// Partial server statistics inside [`SyncMainData::server_state`].
#[derive(Debug, Clone, Default, Deserialize)]
#[non_exhaustive]
pub struct ServerState {
    /// Global connection status.
    pub connection_status: Option<ConnectionStatus>,
    /// Known DHT nodes.
    pub dht_nodes: Option<i64>,
    /// Session downloaded bytes.
    pub dl_info_data: Option<i64>,
    /// Download speed, bytes/s.
    pub dl_info_speed: Option<i64>,
    /// Download rate limit, bytes/s.
    pub dl_rate_limit: Option<i64>,
    /// Session uploaded bytes.
    pub up_info_data: Option<i64>,
    /// Upload speed, bytes/s.
    pub up_info_speed: Option<i64>,
    /// Upload rate limit, bytes/s.
    pub up_rate_limit: Option<i64>,
    /// All-time downloaded bytes.
    pub alltime_dl: Option<i64>,
    /// All-time uploaded bytes.
    pub alltime_ul: Option<i64>,
    /// Session wasted bytes.
    pub total_wasted_session: Option<i64>,
    /// All-time share ratio, formatted by the server.
    pub global_ratio: Option<String>,
    /// Open peer connections.
    pub total_peer_connections: Option<i64>,
    /// Torrent queueing enabled.
    pub queueing: Option<bool>,
    /// Alternative speed limits active.
    pub use_alt_speed_limits: Option<bool>,
    /// Suggested poll interval, milliseconds.
    pub refresh_interval: Option<i64>,
    /// Free space on the default save path's disk.
    pub free_space_on_disk: Option<i64>,
    /// Subcategories enabled.
    pub use_subcategories: Option<bool>,
    /// Average disk queue time, milliseconds.
    pub average_time_queue: Option<i64>,
    /// Read cache hit ratio, formatted by the server.
    pub read_cache_hits: Option<String>,
    /// Read cache overload ratio.
    pub read_cache_overload: Option<String>,
    /// Write cache overload ratio.
    pub write_cache_overload: Option<String>,
    /// Queued disk jobs.
    pub queued_io_jobs: Option<i64>,
    /// Total disk buffer size.
    pub total_buffers_size: Option<i64>,
    /// Total queued disk job size.
    pub total_queued_size: Option<i64>,
}

/// Main sync payload (`sync/maindata`), full or delta.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct SyncMainData {
    /// Response ID to pass back as `rid` on the next call.
    pub rid: i64,
    /// `true` when this is a full snapshot rather than a delta.
    #[serde(default)]
    pub full_update: bool,
    /// Added or changed torrents, keyed by info hash.
    #[serde(default)]
    pub torrents: HashMap<String, SyncTorrentInfo>,
    /// Info hashes removed since the last response.
    #[serde(default)]
    pub torrents_removed: Vec<String>,
    /// Added or changed categories, keyed by name.
    #[serde(default)]
    pub categories: HashMap<String, SyncCategory>,
    /// Categories removed since the last response.
    #[serde(default)]
    pub categories_removed: Vec<String>,
    /// Tags added since the last response.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Tags removed since the last response.
    #[serde(default)]
    pub tags_removed: Vec<String>,
    /// Tracker URLs mapped to their torrents (qBittorrent 4.6+).
    #[serde(default)]
    pub trackers: HashMap<String, Vec<String>>,
    /// Trackers removed since the last response.
    #[serde(default)]
    pub trackers_removed: Vec<String>,
    /// Changed server statistics.
    #[serde(default)]
    pub server_state: ServerState,
}

/// Partial peer record inside [`SyncTorrentPeers::peers`].
#[derive(Debug, Clone, Default, Deserialize)]
#[non_exhaustive]
pub struct SyncPeer {
    /// Peer IP address.
    pub ip: Option<String>,
    /// Peer port.
    pub port: Option<i64>,
    /// Peer client name.
    pub client: Option<String>,
    /// Peer download progress.
    pub progress: Option<f64>,
    /// Download speed from this peer, bytes/s.
    pub dl_speed: Option<i64>,
    /// Upload speed to this peer, bytes/s.
    pub up_speed: Option<i64>,
    /// Bytes downloaded from this peer.
    pub downloaded: Option<i64>,
    /// Bytes uploaded to this peer.
    pub uploaded: Option<i64>,
    /// Connection type (`BT`, `uTP`, `Web`).
    pub connection: Option<String>,
    /// Peer flags.
    pub flags: Option<String>,
    /// Peer flag descriptions.
    pub flags_desc: Option<String>,
    /// Relevance of the peer's pieces.
    pub relevance: Option<f64>,
    /// Files the peer is downloading.
    pub files: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
}

/// Torrent peers sync payload (`sync/torrentPeers`), full or delta.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct SyncTorrentPeers {
    /// Response ID to pass back as `rid` on the next call.
    pub rid: i64,
    /// `true` when this is a full snapshot rather than a delta.
    #[serde(default)]
    pub full_update: bool,
    /// Whether flags are reported; may be absent in deltas.
    #[serde(default)]
    pub show_flags: Option<bool>,
    /// Added or changed peers, keyed by `ip:port`.
    #[serde(default)]
    pub peers: HashMap<String, SyncPeer>,
    /// Peers removed since the last response.
    #[serde(default)]
    pub peers_removed: Vec<String>,
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn delta_decodes_without_a_prior_full_payload() {
        let data: SyncMainData = serde_json::from_str(
            r#"{
                "rid": 7,
                "torrents": {
                    "8c212779b4abde7c6bc608063a0d008b7e40ce32": {"dlspeed": 1024, "state": "downloading"}
                },
                "torrents_removed": ["fedcba9876543210fedcba9876543210fedcba98"],
                "server_state": {"dl_info_speed": 1024}
            }"#,
        )
        .expect("decode");

        assert_eq!(data.rid, 7);
        check!(!data.full_update);

        let changed = &data.torrents["8c212779b4abde7c6bc608063a0d008b7e40ce32"];
        assert_eq!(changed.dlspeed, Some(1024));
        assert_eq!(changed.state, Some(TorrentState::Downloading));
        check!(changed.name.is_none());

        assert_eq!(
            data.torrents_removed,
            ["fedcba9876543210fedcba9876543210fedcba98"]
        );
        assert_eq!(data.server_state.dl_info_speed, Some(1024));
        check!(data.server_state.connection_status.is_none());
    }

    #[test]
    fn full_update_decodes() {
        let data: SyncMainData = serde_json::from_str(
            r#"{
                "rid": 1,
                "full_update": true,
                "torrents": {},
                "categories": {"tv": {"name": "tv", "savePath": "/downloads/tv"}},
                "tags": ["linux"],
                "server_state": {"connection_status": "firewalled", "queueing": true}
            }"#,
        )
        .expect("decode");

        check!(data.full_update);
        assert_eq!(
            data.categories["tv"].save_path.as_deref(),
            Some("/downloads/tv")
        );
        assert_eq!(data.tags, ["linux"]);
        assert_eq!(
            data.server_state.connection_status,
            Some(ConnectionStatus::Firewalled)
        );
    }

    #[test]
    fn rid_is_required() {
        let result: Result<SyncMainData, _> = serde_json::from_str("{}");
        check!(result.is_err());
    }

    #[test]
    fn torrent_peers_decode() {
        let peers: SyncTorrentPeers = serde_json::from_str(
            r#"{
                "rid": 3,
                "full_update": true,
                "show_flags": true,
                "peers": {
                    "203.0.113.7:6881": {"ip": "203.0.113.7", "port": 6881, "client": "qBittorrent/4.6.3"}
                }
            }"#,
        )
        .expect("decode");

        assert_eq!(peers.rid, 3);
        assert_eq!(peers.show_flags, Some(true));
        assert_eq!(
            peers.peers["203.0.113.7:6881"].client.as_deref(),
            Some("qBittorrent/4.6.3")
        );
    }
}
