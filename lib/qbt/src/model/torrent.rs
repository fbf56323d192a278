//! Torrent-related result objects and enumerations.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::convert::{self, int_enum};

/// Torrent state reported in [`TorrentInfo::state`].
///
/// qBittorrent 5.x renamed the `paused*` states to `stopped*`; both sets
/// decode. Tokens introduced by future servers fall back to
/// [`TorrentState::Unknown`] instead of failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TorrentState {
    /// An error interrupted the torrent.
    Error,
    /// Data files are missing on disk.
    MissingFiles,
    /// Seeding with active peers.
    Uploading,
    /// Finished and stopped.
    StoppedUp,
    /// Finished and queued for seeding.
    QueuedUp,
    /// Finished, no peers to seed to.
    StalledUp,
    /// Finished, verifying data.
    CheckingUp,
    /// Seeding regardless of queue limits.
    ForcedUp,
    /// Preallocating disk space.
    Allocating,
    /// Downloading with active peers.
    Downloading,
    /// Fetching metadata from a magnet link.
    MetaDl,
    /// Stopped before completion.
    StoppedDl,
    /// Queued for download.
    QueuedDl,
    /// Downloading, no peers available.
    StalledDl,
    /// Verifying downloaded data.
    CheckingDl,
    /// Downloading regardless of queue limits.
    ForcedDl,
    /// Checking fast-resume data on startup.
    CheckingResumeData,
    /// Files are being moved to a new location.
    Moving,
    /// Stopped before completion (qBittorrent 4.x name).
    PausedDl,
    /// Finished and stopped (qBittorrent 4.x name).
    PausedUp,
    /// Unrecognized state token.
    #[default]
    Unknown,
}

impl TorrentState {
    /// Reverse lookup from the wire token; unrecognized tokens become
    /// [`TorrentState::Unknown`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "error" => Self::Error,
            "missingFiles" => Self::MissingFiles,
            "uploading" => Self::Uploading,
            "stoppedUP" => Self::StoppedUp,
            "queuedUP" => Self::QueuedUp,
            "stalledUP" => Self::StalledUp,
            "checkingUP" => Self::CheckingUp,
            "forcedUP" => Self::ForcedUp,
            "allocating" => Self::Allocating,
            "downloading" => Self::Downloading,
            "metaDL" => Self::MetaDl,
            "stoppedDL" => Self::StoppedDl,
            "queuedDL" => Self::QueuedDl,
            "stalledDL" => Self::StalledDl,
            "checkingDL" => Self::CheckingDl,
            "forcedDL" => Self::ForcedDl,
            "checkingResumeData" => Self::CheckingResumeData,
            "moving" => Self::Moving,
            "pausedDL" => Self::PausedDl,
            "pausedUP" => Self::PausedUp,
            _ => Self::Unknown,
        }
    }

    /// The wire token for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::MissingFiles => "missingFiles",
            Self::Uploading => "uploading",
            Self::StoppedUp => "stoppedUP",
            Self::QueuedUp => "queuedUP",
            Self::StalledUp => "stalledUP",
            Self::CheckingUp => "checkingUP",
            Self::ForcedUp => "forcedUP",
            Self::Allocating => "allocating",
            Self::Downloading => "downloading",
            Self::MetaDl => "metaDL",
            Self::StoppedDl => "stoppedDL",
            Self::QueuedDl => "queuedDL",
            Self::StalledDl => "stalledDL",
            Self::CheckingDl => "checkingDL",
            Self::ForcedDl => "forcedDL",
            Self::CheckingResumeData => "checkingResumeData",
            Self::Moving => "moving",
            Self::PausedDl => "pausedDL",
            Self::PausedUp => "pausedUP",
            Self::Unknown => "unknown",
        }
    }

    /// Data verification is in progress.
    #[must_use]
    pub const fn is_checking(&self) -> bool {
        matches!(
            self,
            Self::CheckingDl | Self::CheckingUp | Self::CheckingResumeData
        )
    }

    /// The torrent is on the download side of its lifecycle.
    #[must_use]
    pub const fn is_downloading(&self) -> bool {
        matches!(
            self,
            Self::Downloading
                | Self::MetaDl
                | Self::StoppedDl
                | Self::QueuedDl
                | Self::StalledDl
                | Self::CheckingDl
                | Self::ForcedDl
                | Self::PausedDl
        )
    }

    /// The torrent is actively seeding or queued to.
    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        matches!(
            self,
            Self::Uploading | Self::StalledUp | Self::CheckingUp | Self::QueuedUp | Self::ForcedUp
        )
    }

    /// All data has been downloaded.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(
            self,
            Self::Uploading
                | Self::StalledUp
                | Self::CheckingUp
                | Self::StoppedUp
                | Self::QueuedUp
                | Self::ForcedUp
        )
    }

    /// The torrent hit an error condition.
    #[must_use]
    pub const fn is_errored(&self) -> bool {
        matches!(self, Self::Error | Self::MissingFiles)
    }

    /// The torrent is stopped (either naming era).
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(
            self,
            Self::StoppedUp | Self::StoppedDl | Self::PausedUp | Self::PausedDl
        )
    }
}

impl<'de> Deserialize<'de> for TorrentState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

impl Serialize for TorrentState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Torrent list filter for `torrents/info`.
///
/// `Resumed`/`Paused` were replaced by `Running`/`Stopped` in qBittorrent 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoFilter {
    /// No filtering.
    All,
    /// Currently downloading.
    Downloading,
    /// Currently seeding.
    Seeding,
    /// Finished downloading.
    Completed,
    /// Not stopped.
    Running,
    /// Stopped by the user.
    Stopped,
    /// Transferred data recently.
    Active,
    /// No recent transfers.
    Inactive,
    /// Waiting for peers.
    Stalled,
    /// Seeding without peers.
    StalledUploading,
    /// Downloading without peers.
    StalledDownloading,
    /// Verifying data.
    Checking,
    /// Moving files.
    Moving,
    /// In an error state.
    Errored,
    /// Not paused (qBittorrent 4.x name).
    Resumed,
    /// Paused (qBittorrent 4.x name).
    Paused,
}

impl InfoFilter {
    /// The wire token for this filter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Downloading => "downloading",
            Self::Seeding => "seeding",
            Self::Completed => "completed",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Stalled => "stalled",
            Self::StalledUploading => "stalled_uploading",
            Self::StalledDownloading => "stalled_downloading",
            Self::Checking => "checking",
            Self::Moving => "moving",
            Self::Errored => "errored",
            Self::Resumed => "resumed",
            Self::Paused => "paused",
        }
    }
}

int_enum! {
    /// Piece state in `torrents/pieceStates` results.
    pub enum PieceState {
        /// Not yet requested.
        Unavailable = 0,
        /// Currently being downloaded.
        Downloading = 1,
        /// Downloaded and verified.
        Downloaded = 2,
    }
}

int_enum! {
    /// Tracker status in [`Tracker::status`].
    pub enum TrackerStatus {
        /// Tracker use is disabled (DHT/PEX/LSD pseudo-entries).
        Disabled = 0,
        /// Not contacted yet.
        NotContacted = 1,
        /// Announced successfully.
        Working = 2,
        /// Announce in flight.
        Updating = 3,
        /// Announce failed.
        NotWorking = 4,
    }
}

int_enum! {
    /// File priority in `torrents/filePrio` and [`FileEntry::priority`].
    pub enum FilePriority {
        /// Skip the file.
        NoDownload = 0,
        /// Normal priority.
        Normal = 1,
        /// libtorrent default; reported for mixed selections.
        Default = 4,
        /// High priority.
        High = 6,
        /// Maximal priority.
        Maximal = 7,
    }
}

int_enum! {
    /// What the server does when a share limit is reached.
    pub enum ShareLimitAction {
        /// Use the global default action.
        UseGlobal = -1,
        /// Stop the torrent.
        Stop = 0,
        /// Remove the torrent.
        Remove = 1,
        /// Enable super seeding.
        EnableSuperSeeding = 2,
        /// Remove torrent and downloaded content.
        RemoveWithContent = 3,
    }
}

/// Condition under which a freshly added torrent stops itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopCondition {
    /// Never stop automatically.
    #[serde(rename = "None")]
    None,
    /// Stop once metadata arrives (magnet links).
    #[serde(rename = "MetadataReceived")]
    MetadataReceived,
    /// Stop once files are checked.
    #[serde(rename = "FilesChecked")]
    FilesChecked,
}

impl StopCondition {
    /// The wire token for this condition.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::MetadataReceived => "MetadataReceived",
            Self::FilesChecked => "FilesChecked",
        }
    }
}

/// How downloaded files are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentLayout {
    /// Keep the layout from the torrent.
    #[serde(rename = "Original")]
    Original,
    /// Always create a subfolder.
    #[serde(rename = "Subfolder")]
    Subfolder,
    /// Never create a subfolder.
    #[serde(rename = "NoSubfolder")]
    NoSubfolder,
}

impl ContentLayout {
    /// The wire token for this layout.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Subfolder => "Subfolder",
            Self::NoSubfolder => "NoSubfolder",
        }
    }
}

/// Share ratio limit: a number, or unset (`-1` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RatioLimit {
    /// No per-torrent ratio limit.
    #[default]
    Unset,
    /// Stop seeding at this ratio.
    Limited(f64),
}

impl RatioLimit {
    /// The wire value for this limit.
    #[must_use]
    pub fn wire_value(&self) -> f64 {
        match self {
            Self::Unset => -1.0,
            Self::Limited(ratio) => *ratio,
        }
    }
}

impl<'de> Deserialize<'de> for RatioLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if value < 0.0 {
            Ok(Self::Unset)
        } else {
            Ok(Self::Limited(value))
        }
    }
}

impl Serialize for RatioLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.wire_value())
    }
}

/// Seeding time limit: the global default, unlimited, or a duration.
///
/// On the wire: `-2` global, `-1` unlimited, otherwise whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedingTimeLimit {
    /// Follow the global limit.
    #[default]
    Global,
    /// Seed forever.
    Unlimited,
    /// Seed for at most this long.
    Limited(Duration),
}

impl SeedingTimeLimit {
    /// The wire value, in minutes.
    #[must_use]
    pub fn wire_minutes(&self) -> i64 {
        match self {
            Self::Global => -2,
            Self::Unlimited => -1,
            Self::Limited(duration) => i64::try_from(duration.as_secs() / 60).unwrap_or(i64::MAX),
        }
    }
}

impl<'de> Deserialize<'de> for SeedingTimeLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let minutes = i64::deserialize(deserializer)?;
        Ok(match minutes {
            -2 => Self::Global,
            -1 => Self::Unlimited,
            mins => Self::Limited(Duration::from_secs(mins.max(0).unsigned_abs() * 60)),
        })
    }
}

impl Serialize for SeedingTimeLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.wire_minutes())
    }
}

/// One row of the torrent list (`torrents/info`).
///
/// The identifying `hash` is required; every other field defaults when an
/// older server omits it, and unknown fields from newer servers are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct TorrentInfo {
    /// Torrent ID (info hash).
    pub hash: String,
    /// v1 info hash, when the server reports it.
    #[serde(default)]
    pub infohash_v1: String,
    /// v2 info hash, when the server reports it.
    #[serde(default)]
    pub infohash_v2: String,
    /// Torrent name.
    #[serde(default)]
    pub name: String,
    /// Magnet link for the torrent.
    #[serde(default)]
    pub magnet_uri: String,
    /// Selected size in bytes.
    #[serde(default)]
    pub size: i64,
    /// Total size in bytes including unselected files.
    #[serde(default)]
    pub total_size: i64,
    /// Download progress in `0.0..=1.0`.
    #[serde(default)]
    pub progress: f64,
    /// Download speed, bytes/s.
    #[serde(default)]
    pub dlspeed: i64,
    /// Upload speed, bytes/s.
    #[serde(default)]
    pub upspeed: i64,
    /// Queue priority; `0` when queueing is off.
    #[serde(default)]
    pub priority: i64,
    /// Connected seeds.
    #[serde(default)]
    pub num_seeds: i64,
    /// Seeds in the swarm.
    #[serde(default)]
    pub num_complete: i64,
    /// Connected leechers.
    #[serde(default)]
    pub num_leechs: i64,
    /// Leechers in the swarm.
    #[serde(default)]
    pub num_incomplete: i64,
    /// Torrent state.
    #[serde(default)]
    pub state: TorrentState,
    /// Estimated completion time.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub eta: Duration,
    /// Sequential download enabled.
    #[serde(default)]
    pub seq_dl: bool,
    /// First/last piece priority enabled.
    #[serde(default)]
    pub f_l_piece_prio: bool,
    /// Assigned category, empty when none.
    #[serde(default)]
    pub category: String,
    /// Assigned tags.
    #[serde(default, deserialize_with = "convert::comma_list")]
    pub tags: Vec<String>,
    /// Super seeding enabled.
    #[serde(default)]
    pub super_seeding: bool,
    /// Forced start enabled.
    #[serde(default)]
    pub force_start: bool,
    /// Save path.
    #[serde(default)]
    pub save_path: String,
    /// Incomplete-download path, when configured.
    #[serde(default)]
    pub download_path: String,
    /// Absolute path of the torrent content.
    #[serde(default)]
    pub content_path: String,
    /// Root path, when the torrent has a common root folder.
    #[serde(default)]
    pub root_path: String,
    /// When the torrent was added.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub added_on: Option<DateTime<Utc>>,
    /// When the download completed.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub completion_on: Option<DateTime<Utc>>,
    /// First working tracker URL.
    #[serde(default)]
    pub tracker: String,
    /// Number of configured trackers.
    #[serde(default)]
    pub trackers_count: i64,
    /// Download limit, bytes/s; `-1` when unset.
    #[serde(default)]
    pub dl_limit: i64,
    /// Upload limit, bytes/s; `-1` when unset.
    #[serde(default)]
    pub up_limit: i64,
    /// All-time downloaded bytes.
    #[serde(default)]
    pub downloaded: i64,
    /// All-time uploaded bytes.
    #[serde(default)]
    pub uploaded: i64,
    /// Bytes downloaded this session.
    #[serde(default)]
    pub downloaded_session: i64,
    /// Bytes uploaded this session.
    #[serde(default)]
    pub uploaded_session: i64,
    /// Bytes left to download.
    #[serde(default)]
    pub amount_left: i64,
    /// Bytes completed.
    #[serde(default)]
    pub completed: i64,
    /// Effective maximum share ratio.
    #[serde(default)]
    pub max_ratio: f64,
    /// Effective maximum seeding time.
    #[serde(default, deserialize_with = "convert::optional_duration_mins")]
    pub max_seeding_time: Option<Duration>,
    /// Effective maximum inactive seeding time.
    #[serde(default, deserialize_with = "convert::optional_duration_mins")]
    pub max_inactive_seeding_time: Option<Duration>,
    /// Current share ratio.
    #[serde(default)]
    pub ratio: f64,
    /// Per-torrent ratio limit.
    #[serde(default)]
    pub ratio_limit: RatioLimit,
    /// Popularity metric.
    #[serde(default)]
    pub popularity: f64,
    /// Per-torrent seeding time limit.
    #[serde(default)]
    pub seeding_time_limit: SeedingTimeLimit,
    /// Per-torrent inactive seeding time limit.
    #[serde(default)]
    pub inactive_seeding_time_limit: SeedingTimeLimit,
    /// Last time the torrent was seen complete.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub seen_complete: Option<DateTime<Utc>>,
    /// Automatic torrent management enabled.
    #[serde(default)]
    pub auto_tmm: bool,
    /// Total active time.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub time_active: Duration,
    /// Total seeding time.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub seeding_time: Duration,
    /// Last time a transfer happened.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub last_activity: Option<DateTime<Utc>>,
    /// Piece availability across connected peers.
    #[serde(default)]
    pub availability: f64,
    /// Time until the next tracker announce.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub reannounce: Duration,
    /// Torrent comment.
    #[serde(default)]
    pub comment: String,
    /// Marked private (no DHT/PEX).
    #[serde(default)]
    pub private: bool,
    /// Metadata has been downloaded.
    #[serde(default)]
    pub has_metadata: bool,
}

/// Detailed torrent properties (`torrents/properties`).
///
/// `hash`/`name` only appear on API 2.8.19+ servers, so nothing here is
/// structurally required.
#[derive(Debug, Clone, Default, Deserialize)]
#[non_exhaustive]
pub struct TorrentProperties {
    /// Torrent ID, when the server reports it.
    #[serde(default)]
    pub hash: String,
    /// Torrent name, when the server reports it.
    #[serde(default)]
    pub name: String,
    /// v1 info hash.
    #[serde(default)]
    pub infohash_v1: String,
    /// v2 info hash.
    #[serde(default)]
    pub infohash_v2: String,
    /// Time since the torrent was added.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub time_elapsed: Duration,
    /// Total seeding time.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub seeding_time: Duration,
    /// Estimated completion time.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub eta: Duration,
    /// Open peer connections.
    #[serde(default)]
    pub nb_connections: i64,
    /// Connection limit.
    #[serde(default)]
    pub nb_connections_limit: i64,
    /// All-time downloaded bytes.
    #[serde(default)]
    pub total_downloaded: i64,
    /// Bytes downloaded this session.
    #[serde(default)]
    pub total_downloaded_session: i64,
    /// All-time uploaded bytes.
    #[serde(default)]
    pub total_uploaded: i64,
    /// Bytes uploaded this session.
    #[serde(default)]
    pub total_uploaded_session: i64,
    /// Download speed, bytes/s.
    #[serde(default)]
    pub dl_speed: i64,
    /// Average download speed, bytes/s.
    #[serde(default)]
    pub dl_speed_avg: i64,
    /// Upload speed, bytes/s.
    #[serde(default)]
    pub up_speed: i64,
    /// Average upload speed, bytes/s.
    #[serde(default)]
    pub up_speed_avg: i64,
    /// Download limit, bytes/s; `-1` when unset.
    #[serde(default)]
    pub dl_limit: i64,
    /// Upload limit, bytes/s; `-1` when unset.
    #[serde(default)]
    pub up_limit: i64,
    /// Discarded bytes.
    #[serde(default)]
    pub total_wasted: i64,
    /// Connected seeds.
    #[serde(default)]
    pub seeds: i64,
    /// Seeds in the swarm.
    #[serde(default)]
    pub seeds_total: i64,
    /// Connected peers.
    #[serde(default)]
    pub peers: i64,
    /// Peers in the swarm.
    #[serde(default)]
    pub peers_total: i64,
    /// Share ratio.
    #[serde(default)]
    pub share_ratio: f64,
    /// Popularity metric.
    #[serde(default)]
    pub popularity: f64,
    /// Time until the next tracker announce.
    #[serde(default, deserialize_with = "convert::duration_secs")]
    pub reannounce: Duration,
    /// Total size in bytes.
    #[serde(default)]
    pub total_size: i64,
    /// Number of pieces.
    #[serde(default)]
    pub pieces_num: i64,
    /// Piece size in bytes.
    #[serde(default)]
    pub piece_size: i64,
    /// Pieces already downloaded.
    #[serde(default)]
    pub pieces_have: i64,
    /// Client that created the torrent.
    #[serde(default)]
    pub created_by: String,
    /// Marked private (API 2.8.20 name).
    #[serde(default)]
    pub is_private: bool,
    /// Marked private (API 2.11.1 name).
    #[serde(default)]
    pub private: bool,
    /// When the torrent was added.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub addition_date: Option<DateTime<Utc>>,
    /// Last time the torrent was seen complete.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub last_seen: Option<DateTime<Utc>>,
    /// When the download completed.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub completion_date: Option<DateTime<Utc>>,
    /// When the torrent file was created.
    #[serde(default, deserialize_with = "convert::optional_timestamp")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Save path.
    #[serde(default)]
    pub save_path: String,
    /// Incomplete-download path, when configured.
    #[serde(default)]
    pub download_path: String,
    /// Torrent comment.
    #[serde(default)]
    pub comment: String,
    /// Metadata has been downloaded.
    #[serde(default)]
    pub has_metadata: bool,
}

/// One tracker entry (`torrents/trackers`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct Tracker {
    /// Tracker URL, or a `** [DHT] **`-style pseudo-entry.
    pub url: String,
    /// Tracker status.
    #[serde(default = "tracker_status_default")]
    pub status: TrackerStatus,
    /// Tracker tier.
    #[serde(default)]
    pub tier: i64,
    /// Peers reported by the tracker.
    #[serde(default)]
    pub num_peers: i64,
    /// Seeds reported by the tracker.
    #[serde(default)]
    pub num_seeds: i64,
    /// Leechers reported by the tracker.
    #[serde(default)]
    pub num_leeches: i64,
    /// Completed downloads reported by the tracker.
    #[serde(default)]
    pub num_downloaded: i64,
    /// Last tracker message.
    #[serde(default)]
    pub msg: String,
}

const fn tracker_status_default() -> TrackerStatus {
    TrackerStatus::NotContacted
}

impl Tracker {
    /// Whether this is a `** [DHT] **`-style pseudo-entry rather than a
    /// real tracker.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.url.starts_with("** [") && self.url.ends_with("] **")
    }
}

/// One web seed entry (`torrents/webseeds`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct WebSeed {
    /// Web seed URL.
    pub url: String,
}

/// One file inside a torrent (`torrents/files`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct FileEntry {
    /// File path inside the torrent.
    pub name: String,
    /// File size in bytes.
    #[serde(default)]
    pub size: i64,
    /// Download progress in `0.0..=1.0`.
    #[serde(default)]
    pub progress: f64,
    /// File priority.
    #[serde(default = "file_priority_default")]
    pub priority: FilePriority,
    /// First and last piece index of the file.
    #[serde(default)]
    pub piece_range: Vec<i64>,
    /// Only reported on the first entry.
    #[serde(default)]
    pub is_seed: bool,
    /// Piece availability for this file.
    #[serde(default)]
    pub availability: f64,
    /// File index (API 2.8.2+).
    #[serde(default)]
    pub index: i64,
}

const fn file_priority_default() -> FilePriority {
    FilePriority::Normal
}

/// One category (`torrents/categories`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Save path for the category; empty means the default.
    #[serde(default, rename = "savePath")]
    pub save_path: String,
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn state_round_trips_wire_tokens() {
        for (token, state) in [
            ("error", TorrentState::Error),
            ("missingFiles", TorrentState::MissingFiles),
            ("stalledDL", TorrentState::StalledDl),
            ("metaDL", TorrentState::MetaDl),
            ("checkingResumeData", TorrentState::CheckingResumeData),
            ("pausedUP", TorrentState::PausedUp),
            ("stoppedUP", TorrentState::StoppedUp),
        ] {
            let json = format!("\"{token}\"");
            let decoded: TorrentState = serde_json::from_str(&json).expect("decode");
            check!(decoded == state, "{token}");
            check!(decoded.as_str() == token);
            check!(serde_json::to_string(&decoded).expect("encode") == json);
        }
    }

    #[test]
    fn unknown_state_tokens_fall_back() {
        let decoded: TorrentState = serde_json::from_str("\"quantumLeap\"").expect("decode");
        assert_eq!(decoded, TorrentState::Unknown);
    }

    #[test]
    fn state_predicates() {
        check!(TorrentState::StalledDl.is_downloading());
        check!(TorrentState::ForcedUp.is_uploading());
        check!(TorrentState::StoppedUp.is_completed());
        check!(TorrentState::PausedDl.is_stopped());
        check!(TorrentState::MissingFiles.is_errored());
        check!(TorrentState::CheckingResumeData.is_checking());
        check!(!TorrentState::Downloading.is_completed());
    }

    #[test]
    fn int_enums_decode_and_reencode() {
        let status: TrackerStatus = serde_json::from_str("2").expect("decode");
        assert_eq!(status, TrackerStatus::Working);
        assert_eq!(serde_json::to_string(&status).expect("encode"), "2");

        let priority: FilePriority = serde_json::from_str("7").expect("decode");
        assert_eq!(priority, FilePriority::Maximal);

        let action: ShareLimitAction = serde_json::from_str("-1").expect("decode");
        assert_eq!(action, ShareLimitAction::UseGlobal);
    }

    #[test]
    fn int_enums_reject_unknown_values() {
        let result: Result<PieceState, _> = serde_json::from_str("9");
        check!(result.is_err());
    }

    #[test]
    fn share_limits_decode_sentinels() {
        let limit: RatioLimit = serde_json::from_str("-1").expect("decode");
        assert_eq!(limit, RatioLimit::Unset);
        let limit: RatioLimit = serde_json::from_str("1.5").expect("decode");
        assert_eq!(limit, RatioLimit::Limited(1.5));

        let limit: SeedingTimeLimit = serde_json::from_str("-2").expect("decode");
        assert_eq!(limit, SeedingTimeLimit::Global);
        let limit: SeedingTimeLimit = serde_json::from_str("-1").expect("decode");
        assert_eq!(limit, SeedingTimeLimit::Unlimited);
        let limit: SeedingTimeLimit = serde_json::from_str("90").expect("decode");
        assert_eq!(limit, SeedingTimeLimit::Limited(Duration::from_secs(5400)));
        assert_eq!(limit.wire_minutes(), 90);
    }

    #[test]
    fn torrent_info_decodes_a_minimal_object() {
        let info: TorrentInfo = serde_json::from_str(
            r#"{"hash": "8c212779b4abde7c6bc608063a0d008b7e40ce32"}"#,
        )
        .expect("decode");

        assert_eq!(info.hash, "8c212779b4abde7c6bc608063a0d008b7e40ce32");
        assert_eq!(info.state, TorrentState::Unknown);
        assert_eq!(info.eta, Duration::ZERO);
        check!(info.tags.is_empty());
        check!(info.added_on.is_none());
    }

    #[test]
    fn torrent_info_requires_the_hash() {
        let result: Result<TorrentInfo, _> = serde_json::from_str(r#"{"name": "debian"}"#);
        check!(result.is_err());
    }

    #[test]
    fn torrent_info_decodes_semantic_fields() {
        let info: TorrentInfo = serde_json::from_str(
            r#"{
                "hash": "8c212779b4abde7c6bc608063a0d008b7e40ce32",
                "name": "debian-12.4.0-amd64-netinst.iso",
                "state": "stalledUP",
                "eta": 8640000,
                "tags": "linux, iso",
                "added_on": 1666000000,
                "seen_complete": -1,
                "max_seeding_time": 120,
                "seeding_time_limit": -2,
                "ratio_limit": 2.0,
                "unknown_future_field": {"ignored": true}
            }"#,
        )
        .expect("decode");

        assert_eq!(info.state, TorrentState::StalledUp);
        assert_eq!(info.tags, ["linux", "iso"]);
        assert_eq!(
            info.added_on.map(|t| t.timestamp()),
            Some(1_666_000_000)
        );
        check!(info.seen_complete.is_none());
        assert_eq!(info.max_seeding_time, Some(Duration::from_secs(7200)));
        assert_eq!(info.seeding_time_limit, SeedingTimeLimit::Global);
        assert_eq!(info.ratio_limit, RatioLimit::Limited(2.0));
    }

    #[test]
    fn tracker_special_entries() {
        let tracker: Tracker = serde_json::from_str(
            r#"{"url": "** [DHT] **", "status": 2, "msg": ""}"#,
        )
        .expect("decode");
        check!(tracker.is_special());
        assert_eq!(tracker.status, TrackerStatus::Working);

        let tracker: Tracker = serde_json::from_str(
            r#"{"url": "http://tracker.example/announce", "status": 4}"#,
        )
        .expect("decode");
        check!(!tracker.is_special());
    }
}
