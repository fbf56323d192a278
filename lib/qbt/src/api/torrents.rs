//! Torrent management endpoints (`torrents/*`).

use std::collections::HashMap;
use std::path::Path;

use bytes::Bytes;
use qbt_core::{
    ApiError, ApiVersion, Error, Form, Hashes, HttpClient, InfoHash, Params, Part, Result,
    version_check,
};

use super::api_level;
use crate::client::Client;
use crate::model::{
    Category, ContentLayout, FileEntry, FilePriority, InfoFilter, PieceState, RatioLimit,
    SeedingTimeLimit, StopCondition, TorrentInfo, TorrentProperties, Tracker, WebSeed,
};

/// Filters for [`TorrentsApi::info`].
///
/// # Example
///
/// ```
/// use qbt::api::TorrentInfoQuery;
/// use qbt::model::InfoFilter;
///
/// let query = TorrentInfoQuery {
///     filter: Some(InfoFilter::Downloading),
///     category: Some("linux".to_owned()),
///     ..TorrentInfoQuery::default()
/// };
/// # let _ = query;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TorrentInfoQuery {
    /// State filter.
    pub filter: Option<InfoFilter>,
    /// Only torrents of this category.
    pub category: Option<String>,
    /// Sort key (a `TorrentInfo` field name).
    pub sort: Option<String>,
    /// Reverse the sort order.
    pub reverse: Option<bool>,
    /// Maximum number of rows.
    pub limit: Option<i64>,
    /// Offset into the sorted rows; negative counts from the end.
    pub offset: Option<i64>,
    /// Only these torrents.
    pub hashes: Option<Hashes>,
    /// Only torrents with this tag. Requires API 2.8.3.
    pub tag: Option<String>,
}

impl TorrentInfoQuery {
    fn params(&self) -> Params {
        let mut params = match &self.hashes {
            Some(hashes) => Params::with_hashes(hashes),
            None => Params::new(),
        };
        params.optional_str("filter", self.filter.map(|f| f.as_str()));
        params.optional_str("category", self.category.as_deref());
        params.optional_str("sort", self.sort.as_deref());
        params.optional_bool("reverse", self.reverse);
        params.optional_int("limit", self.limit);
        params.optional_int("offset", self.offset);
        params.optional_str("tag", self.tag.as_deref());
        params
    }
}

/// API methods under `torrents`.
#[derive(Debug)]
pub struct TorrentsApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> TorrentsApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Torrent list rows matching the query.
    pub async fn info(&self, query: TorrentInfoQuery) -> Result<Vec<TorrentInfo>> {
        if query.tag.is_some() {
            self.client.check_api_version(api_level::INFO_TAG_FILTER)?;
        }
        self.client.get_json("torrents/info", Some(query.params())).await
    }

    /// Detailed properties of one torrent.
    pub async fn properties(&self, hash: &InfoHash) -> Result<TorrentProperties> {
        self.client
            .get_json("torrents/properties", Some(Params::with_hash(hash)))
            .await
    }

    /// Trackers of one torrent.
    pub async fn trackers(&self, hash: &InfoHash) -> Result<Vec<Tracker>> {
        self.client
            .get_json("torrents/trackers", Some(Params::with_hash(hash)))
            .await
    }

    /// Web seeds of one torrent.
    pub async fn webseeds(&self, hash: &InfoHash) -> Result<Vec<WebSeed>> {
        self.client
            .get_json("torrents/webseeds", Some(Params::with_hash(hash)))
            .await
    }

    /// Files of one torrent, optionally restricted to `indexes`
    /// (requires API 2.8.2).
    pub async fn files(&self, hash: &InfoHash, indexes: Option<&[i64]>) -> Result<Vec<FileEntry>> {
        let mut params = Params::with_hash(hash);

        if let Some(indexes) = indexes {
            self.client.check_api_version(api_level::FILES_INDEXES)?;
            params.required_list("indexes", indexes.iter().map(ToString::to_string), "|");
        }

        self.client.get_json("torrents/files", Some(params)).await
    }

    /// Download state of every piece.
    pub async fn piece_states(&self, hash: &InfoHash) -> Result<Vec<PieceState>> {
        self.client
            .get_json("torrents/pieceStates", Some(Params::with_hash(hash)))
            .await
    }

    /// SHA-1 piece hashes, in order.
    pub async fn piece_hashes(&self, hash: &InfoHash) -> Result<Vec<String>> {
        self.client
            .get_json("torrents/pieceHashes", Some(Params::with_hash(hash)))
            .await
    }

    /// Pause torrents.
    pub async fn pause(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/pause", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Resume torrents.
    pub async fn resume(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/resume", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Delete torrents, optionally with their downloaded data.
    pub async fn delete(&self, hashes: &Hashes, delete_files: bool) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_bool("delete_files", delete_files);

        self.client.post_form("torrents/delete", data).await?;
        Ok(())
    }

    /// Recheck torrent data.
    pub async fn recheck(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/recheck", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Reannounce to trackers.
    pub async fn reannounce(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/reannounce", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Submit an add-torrents form built with [`AddFormBuilder`].
    ///
    /// The server answers 200 with a body other than `Ok.` when nothing
    /// new was added; that surfaces as [`Error::AddTorrent`].
    pub async fn add(&self, form: Form) -> Result<()> {
        let response = self.client.request_multipart("torrents/add", form).await?;

        let status = response.status();
        let body = response.into_body();
        if body.as_ref() != b"Ok." {
            let message = String::from_utf8_lossy(&body).into_owned();
            return Err(Error::AddTorrent(
                ApiError::new(status, message).with_body(body),
            ));
        }
        Ok(())
    }

    /// Add trackers to a torrent.
    pub async fn add_trackers<I>(&self, hash: &InfoHash, urls: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut data = Params::with_hash(hash);
        data.required_list("urls", urls, "\n");

        self.client.post_form("torrents/addTrackers", data).await?;
        Ok(())
    }

    /// Replace a tracker URL. Requires API 2.2.0.
    pub async fn edit_tracker(
        &self,
        hash: &InfoHash,
        orig_url: &str,
        new_url: &str,
    ) -> Result<()> {
        self.client.check_api_version(api_level::EDIT_TRACKER)?;

        let mut data = Params::with_hash(hash);
        data.required_str("orig_url", orig_url);
        data.required_str("new_url", new_url);

        self.client.post_form("torrents/editTracker", data).await?;
        Ok(())
    }

    /// Remove trackers from a torrent.
    pub async fn remove_trackers<I>(&self, hash: &InfoHash, urls: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut data = Params::with_hash(hash);
        data.required_list("urls", urls, "|");

        self.client.post_form("torrents/removeTrackers", data).await?;
        Ok(())
    }

    /// Connect the given peers (`ip:port`) to torrents.
    pub async fn add_peers<I>(&self, hashes: &[InfoHash], peers: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut data = Params::new();
        data.raw("hashes", join_hashes(hashes));
        data.required_list("peers", peers, "|");

        self.client.post_form("torrents/addPeers", data).await?;
        Ok(())
    }

    /// Move torrents to the top of the queue.
    pub async fn top_prio(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/topPrio", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Move torrents to the bottom of the queue.
    pub async fn bottom_prio(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/bottomPrio", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Move torrents up the queue.
    pub async fn increase_prio(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/increasePrio", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Move torrents down the queue.
    pub async fn decrease_prio(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form("torrents/decreasePrio", Params::with_hashes(hashes))
            .await?;
        Ok(())
    }

    /// Set the priority of files by index.
    pub async fn file_prio(
        &self,
        hash: &InfoHash,
        ids: &[i64],
        priority: FilePriority,
    ) -> Result<()> {
        let mut data = Params::with_hash(hash);
        data.required_list("id", ids.iter().map(ToString::to_string), "|");
        data.required_int("priority", priority.as_i64());

        self.client.post_form("torrents/filePrio", data).await?;
        Ok(())
    }

    /// Per-torrent download limits, bytes/s, keyed by hash.
    pub async fn download_limit(&self, hashes: &Hashes) -> Result<HashMap<String, i64>> {
        self.client
            .get_json("torrents/downloadLimit", Some(Params::with_hashes(hashes)))
            .await
    }

    /// Set the download limit for torrents, bytes/s.
    pub async fn set_download_limit(&self, hashes: &Hashes, limit: i64) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_int("limit", limit);

        self.client.post_form("torrents/setDownloadLimit", data).await?;
        Ok(())
    }

    /// Set share limits for torrents. Requires API 2.0.1.
    pub async fn set_share_limits(
        &self,
        hashes: &Hashes,
        ratio_limit: RatioLimit,
        seeding_time_limit: SeedingTimeLimit,
    ) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_float("ratio_limit", ratio_limit.wire_value());
        data.required_int("seeding_time_limit", seeding_time_limit.wire_minutes());

        self.client.post_form("torrents/setShareLimits", data).await?;
        Ok(())
    }

    /// Per-torrent upload limits, bytes/s, keyed by hash.
    pub async fn upload_limit(&self, hashes: &Hashes) -> Result<HashMap<String, i64>> {
        self.client
            .get_json("torrents/uploadLimit", Some(Params::with_hashes(hashes)))
            .await
    }

    /// Set the upload limit for torrents, bytes/s.
    pub async fn set_upload_limit(&self, hashes: &Hashes, limit: i64) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_int("limit", limit);

        self.client.post_form("torrents/setUploadLimit", data).await?;
        Ok(())
    }

    /// Move torrent data to a new location.
    pub async fn set_location(&self, hashes: &Hashes, location: impl AsRef<Path>) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_path("location", location);

        self.client.post_form("torrents/setLocation", data).await?;
        Ok(())
    }

    /// Rename a torrent.
    pub async fn rename(&self, hash: &InfoHash, name: &str) -> Result<()> {
        let mut data = Params::with_hash(hash);
        data.required_str("name", name);

        self.client.post_form("torrents/rename", data).await?;
        Ok(())
    }

    /// Assign torrents to a category; the empty string clears it.
    pub async fn set_category(&self, hashes: &Hashes, category: &str) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_str("category", category);

        self.client.post_form("torrents/setCategory", data).await?;
        Ok(())
    }

    /// All categories, keyed by name. Requires API 2.1.1.
    pub async fn categories(&self) -> Result<HashMap<String, Category>> {
        self.client.get_json("torrents/categories", None).await
    }

    /// Create a category; an empty `save_path` means the default path.
    pub async fn create_category(
        &self,
        category: &str,
        save_path: impl AsRef<Path>,
    ) -> Result<()> {
        let mut data = Params::new();
        data.required_str("category", category);
        data.required_path("save_path", save_path);

        self.client.post_form("torrents/createCategory", data).await?;
        Ok(())
    }

    /// Change a category's save path.
    pub async fn edit_category(&self, category: &str, save_path: impl AsRef<Path>) -> Result<()> {
        let mut data = Params::new();
        data.required_str("category", category);
        data.required_path("save_path", save_path);

        self.client.post_form("torrents/editCategory", data).await?;
        Ok(())
    }

    /// Remove categories; member torrents keep their data.
    pub async fn remove_categories<I>(&self, categories: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut data = Params::new();
        data.required_list("categories", categories, "\n");

        self.client.post_form("torrents/removeCategories", data).await?;
        Ok(())
    }

    /// Add tags to torrents. Requires API 2.3.0.
    pub async fn add_tags<I>(&self, hashes: &Hashes, tags: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.client.check_api_version(api_level::TORRENT_TAGS)?;

        let mut data = Params::with_hashes(hashes);
        data.required_list("tags", tags, ",");

        self.client.post_form("torrents/addTags", data).await?;
        Ok(())
    }

    /// Remove tags from torrents. Requires API 2.3.0.
    pub async fn remove_tags<I>(&self, hashes: &Hashes, tags: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.client.check_api_version(api_level::TORRENT_TAGS)?;

        let mut data = Params::with_hashes(hashes);
        data.required_list("tags", tags, ",");

        self.client.post_form("torrents/removeTags", data).await?;
        Ok(())
    }

    /// All defined tags. Requires API 2.3.0.
    pub async fn tags(&self) -> Result<Vec<String>> {
        self.client.check_api_version(api_level::TORRENT_TAGS)?;
        self.client.get_json("torrents/tags", None).await
    }

    /// Define tags without assigning them. Requires API 2.3.0.
    pub async fn create_tags<I>(&self, tags: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.client.check_api_version(api_level::TORRENT_TAGS)?;

        let mut data = Params::new();
        data.required_list("tags", tags, ",");

        self.client.post_form("torrents/createTags", data).await?;
        Ok(())
    }

    /// Delete tags everywhere. Requires API 2.3.0.
    pub async fn delete_tags<I>(&self, tags: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.client.check_api_version(api_level::TORRENT_TAGS)?;

        let mut data = Params::new();
        data.required_list("tags", tags, ",");

        self.client.post_form("torrents/deleteTags", data).await?;
        Ok(())
    }

    /// Enable or disable automatic torrent management.
    pub async fn set_auto_management(&self, hashes: &Hashes, enable: bool) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_bool("enable", enable);

        self.client.post_form("torrents/setAutoManagement", data).await?;
        Ok(())
    }

    /// Flip the sequential-download flag.
    pub async fn toggle_sequential_download(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form(
                "torrents/toggleSequentialDownload",
                Params::with_hashes(hashes),
            )
            .await?;
        Ok(())
    }

    /// Set `seq_dl` to a known value.
    ///
    /// No endpoint sets the flag directly; the torrents whose flag differs
    /// are filtered out and toggled in one extra call.
    pub async fn set_sequential_download(&self, hashes: &Hashes, value: bool) -> Result<()> {
        let torrents = self
            .info(TorrentInfoQuery {
                hashes: Some(hashes.clone()),
                ..TorrentInfoQuery::default()
            })
            .await?;

        let targets: Vec<InfoHash> = torrents
            .into_iter()
            .filter(|t| t.seq_dl != value)
            .filter_map(|t| InfoHash::parse(t.hash).ok())
            .collect();

        if !targets.is_empty() {
            self.toggle_sequential_download(&Hashes::Some(targets)).await?;
        }
        Ok(())
    }

    /// Flip the first/last-piece-priority flag.
    pub async fn toggle_first_last_piece_prio(&self, hashes: &Hashes) -> Result<()> {
        self.client
            .post_form(
                "torrents/toggleFirstLastPiecePrio",
                Params::with_hashes(hashes),
            )
            .await?;
        Ok(())
    }

    /// Set `f_l_piece_prio` to a known value (filter + toggle, like
    /// [`TorrentsApi::set_sequential_download`]).
    pub async fn set_first_last_piece_prio(&self, hashes: &Hashes, value: bool) -> Result<()> {
        let torrents = self
            .info(TorrentInfoQuery {
                hashes: Some(hashes.clone()),
                ..TorrentInfoQuery::default()
            })
            .await?;

        let targets: Vec<InfoHash> = torrents
            .into_iter()
            .filter(|t| t.f_l_piece_prio != value)
            .filter_map(|t| InfoHash::parse(t.hash).ok())
            .collect();

        if !targets.is_empty() {
            self.toggle_first_last_piece_prio(&Hashes::Some(targets))
                .await?;
        }
        Ok(())
    }

    /// Enable or disable forced start.
    pub async fn set_force_start(&self, hashes: &Hashes, force: bool) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_bool("value", force);

        self.client.post_form("torrents/setForceStart", data).await?;
        Ok(())
    }

    /// Enable or disable super seeding.
    pub async fn set_super_seeding(&self, hashes: &Hashes, value: bool) -> Result<()> {
        let mut data = Params::with_hashes(hashes);
        data.required_bool("value", value);

        self.client.post_form("torrents/setSuperSeeding", data).await?;
        Ok(())
    }

    /// Rename a file by path. Requires API 2.8.0.
    pub async fn rename_file(
        &self,
        hash: &InfoHash,
        old_path: &str,
        new_path: &str,
    ) -> Result<()> {
        self.client.check_api_version(api_level::RENAME_FILE_PATHS)?;

        let mut data = Params::with_hash(hash);
        data.required_str("old_path", old_path);
        data.required_str("new_path", new_path);

        self.client.post_form("torrents/renameFile", data).await?;
        Ok(())
    }

    /// Rename a file by its index in [`TorrentsApi::files`].
    ///
    /// This is the pre-2.8.0 signature of the endpoint; requires API 2.4.0.
    pub async fn rename_file_by_id(&self, hash: &InfoHash, id: i64, name: &str) -> Result<()> {
        self.client.check_api_version(api_level::RENAME_FILE)?;

        let mut data = Params::with_hash(hash);
        data.required_int("id", id);
        data.required_str("name", name);

        self.client.post_form("torrents/renameFile", data).await?;
        Ok(())
    }

    /// Rename a folder. Requires API 2.8.0.
    pub async fn rename_folder(
        &self,
        hash: &InfoHash,
        old_path: &str,
        new_path: &str,
    ) -> Result<()> {
        self.client.check_api_version(api_level::RENAME_FOLDER)?;

        let mut data = Params::with_hash(hash);
        data.required_path("old_path", old_path);
        data.required_path("new_path", new_path);

        self.client.post_form("torrents/renameFolder", data).await?;
        Ok(())
    }
}

fn join_hashes(hashes: &[InfoHash]) -> String {
    let parts: Vec<&str> = hashes.iter().map(InfoHash::as_str).collect();
    parts.join(",")
}

// ============================================================================
// Add Form Builder
// ============================================================================

/// Builder for the `torrents/add` multipart form.
///
/// Accumulates torrent sources - raw file content or URL/magnet/hash
/// strings - plus option fields, then [`AddFormBuilder::build`]s the
/// multipart payload for [`TorrentsApi::add`]. Obtain it through
/// [`AddFormBuilder::for_client`] so version-gated options see the cached
/// API version.
///
/// # Example
///
/// ```no_run
/// # async fn demo(client: qbt::Client) -> qbt_core::Result<()> {
/// use qbt::api::AddFormBuilder;
///
/// let form = AddFormBuilder::for_client(&client)
///     .url("magnet:?xt=urn:btih:8c212779b4abde7c6bc608063a0d008b7e40ce32")
///     .category("linux")
///     .paused(true)
///     .build();
///
/// client.torrents().add(form).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddFormBuilder {
    api_version: Option<ApiVersion>,
    urls: Vec<String>,
    files: Vec<(String, Bytes)>,
    savepath: Option<String>,
    cookie: Option<String>,
    category: Option<String>,
    tags: Option<String>,
    skip_checking: Option<bool>,
    paused: Option<bool>,
    root_folder: Option<bool>,
    rename: Option<String>,
    up_limit: Option<i64>,
    dl_limit: Option<i64>,
    ratio_limit: Option<f64>,
    seeding_time_limit: Option<i64>,
    auto_tmm: Option<bool>,
    sequential_download: Option<bool>,
    first_last_piece_prio: Option<bool>,
    stop_condition: Option<StopCondition>,
    content_layout: Option<ContentLayout>,
}

impl AddFormBuilder {
    /// A builder without version gates (unknown version passes them all).
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder gated by the client's cached API version.
    pub fn for_client<T: HttpClient>(client: &Client<T>) -> Self {
        Self {
            api_version: client.api_version(),
            ..Self::default()
        }
    }

    /// Add a URL, magnet link, or bare info hash.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }

    /// Add a torrent file's raw content.
    pub fn file(mut self, data: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        self.files.push((filename.into(), data.into()));
        self
    }

    /// Set the download folder (`savepath`).
    pub fn savepath(mut self, savepath: impl AsRef<Path>) -> Self {
        let path = savepath.as_ref().to_string_lossy().replace('\\', "/");
        self.savepath = Some(path);
        self
    }

    /// Set the cookie sent when fetching the torrent from a URL.
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the tags. Requires API 2.6.2; tags must not contain commas.
    pub fn tags<I>(mut self, tags: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        version_check(self.api_version, api_level::ADD_TAGS_FIELD)?;

        let mut parts = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if tag.contains(',') {
                return Err(Error::invalid_request(format!(
                    "tag cannot contain a comma: {tag:?}"
                )));
            }
            parts.push(tag);
        }

        self.tags = Some(parts.join(","));
        Ok(self)
    }

    /// Skip hash checking.
    pub fn skip_checking(mut self, skip_checking: bool) -> Self {
        self.skip_checking = Some(skip_checking);
        self
    }

    /// Add the torrents paused.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    /// Create a root folder (legacy layout flag).
    pub fn root_folder(mut self, root_folder: bool) -> Self {
        self.root_folder = Some(root_folder);
        self
    }

    /// Rename the added torrent.
    pub fn rename(mut self, rename: impl Into<String>) -> Self {
        self.rename = Some(rename.into());
        self
    }

    /// Set the upload limit (`upLimit`), bytes/s.
    pub fn up_limit(mut self, up_limit: i64) -> Self {
        self.up_limit = Some(up_limit);
        self
    }

    /// Set the download limit (`dlLimit`), bytes/s.
    pub fn dl_limit(mut self, dl_limit: i64) -> Self {
        self.dl_limit = Some(dl_limit);
        self
    }

    /// Set the ratio limit (`ratioLimit`). Requires API 2.8.1.
    pub fn ratio_limit(mut self, ratio_limit: RatioLimit) -> Result<Self> {
        version_check(self.api_version, api_level::ADD_SHARE_LIMITS)?;
        self.ratio_limit = Some(ratio_limit.wire_value());
        Ok(self)
    }

    /// Set the seeding time limit (`seedingTimeLimit`). Requires API 2.8.1.
    pub fn seeding_time_limit(mut self, limit: SeedingTimeLimit) -> Result<Self> {
        version_check(self.api_version, api_level::ADD_SHARE_LIMITS)?;
        self.seeding_time_limit = Some(limit.wire_minutes());
        Ok(self)
    }

    /// Enable automatic torrent management (`autoTMM`).
    pub fn auto_tmm(mut self, auto_tmm: bool) -> Self {
        self.auto_tmm = Some(auto_tmm);
        self
    }

    /// Enable sequential download (`sequentialDownload`).
    pub fn sequential_download(mut self, sequential_download: bool) -> Self {
        self.sequential_download = Some(sequential_download);
        self
    }

    /// Prioritize first and last pieces (`firstLastPiecePrio`).
    pub fn first_last_piece_prio(mut self, first_last_piece_prio: bool) -> Self {
        self.first_last_piece_prio = Some(first_last_piece_prio);
        self
    }

    /// Set the stop condition (`stopCondition`). Requires API 2.8.15.
    pub fn stop_condition(mut self, stop_condition: StopCondition) -> Result<Self> {
        version_check(self.api_version, api_level::ADD_STOP_CONDITION)?;
        self.stop_condition = Some(stop_condition);
        Ok(self)
    }

    /// Set the content layout (`contentLayout`). Requires API 2.7.0.
    pub fn content_layout(mut self, content_layout: ContentLayout) -> Result<Self> {
        version_check(self.api_version, api_level::ADD_CONTENT_LAYOUT)?;
        self.content_layout = Some(content_layout);
        Ok(self)
    }

    /// Build the multipart form.
    ///
    /// URLs travel newline-joined in one `urls` text part; each file is a
    /// named `torrents` file part; option fields are text parts with the
    /// exact wire names.
    pub fn build(self) -> Form {
        let bool_token = |b: bool| if b { "true" } else { "false" };

        let mut form = Form::new();

        if !self.urls.is_empty() {
            form = form.text("urls", self.urls.join("\n"));
        }

        for (filename, data) in self.files {
            form = form.part(Part::file("torrents", filename, data));
        }

        if let Some(savepath) = self.savepath {
            form = form.text("savepath", savepath);
        }
        if let Some(cookie) = self.cookie {
            form = form.text("cookie", cookie);
        }
        if let Some(category) = self.category {
            form = form.text("category", category);
        }
        if let Some(tags) = self.tags {
            form = form.text("tags", tags);
        }
        if let Some(skip_checking) = self.skip_checking {
            form = form.text("skip_checking", bool_token(skip_checking));
        }
        if let Some(paused) = self.paused {
            form = form.text("paused", bool_token(paused));
        }
        if let Some(root_folder) = self.root_folder {
            form = form.text("root_folder", bool_token(root_folder));
        }
        if let Some(rename) = self.rename {
            form = form.text("rename", rename);
        }
        if let Some(up_limit) = self.up_limit {
            form = form.text("upLimit", up_limit.to_string());
        }
        if let Some(dl_limit) = self.dl_limit {
            form = form.text("dlLimit", dl_limit.to_string());
        }
        if let Some(ratio_limit) = self.ratio_limit {
            form = form.text("ratioLimit", ratio_limit.to_string());
        }
        if let Some(seeding_time_limit) = self.seeding_time_limit {
            form = form.text("seedingTimeLimit", seeding_time_limit.to_string());
        }
        if let Some(auto_tmm) = self.auto_tmm {
            form = form.text("autoTMM", bool_token(auto_tmm));
        }
        if let Some(sequential_download) = self.sequential_download {
            form = form.text("sequentialDownload", bool_token(sequential_download));
        }
        if let Some(first_last_piece_prio) = self.first_last_piece_prio {
            form = form.text("firstLastPiecePrio", bool_token(first_last_piece_prio));
        }
        if let Some(stop_condition) = self.stop_condition {
            form = form.text("stopCondition", stop_condition.as_str());
        }
        if let Some(content_layout) = self.content_layout {
            form = form.text("contentLayout", content_layout.as_str());
        }

        form
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use qbt_core::Error;

    use super::*;

    fn part_text<'f>(form: &'f Form, name: &str) -> Option<&'f str> {
        form.parts()
            .iter()
            .find(|p| p.name() == name && p.filename().is_none())
            .map(|p| std::str::from_utf8(p.data()).expect("utf-8"))
    }

    #[test]
    fn info_query_params() {
        let query = TorrentInfoQuery {
            filter: Some(InfoFilter::StalledUploading),
            category: Some("linux".to_owned()),
            reverse: Some(true),
            limit: Some(10),
            hashes: Some(Hashes::All),
            ..TorrentInfoQuery::default()
        };

        assert_eq!(
            query.params().encode(),
            "hashes=all&filter=stalled_uploading&category=linux&reverse=true&limit=10"
        );
    }

    #[test]
    fn form_joins_urls_into_one_part() {
        let form = AddFormBuilder::new()
            .url("magnet:?xt=urn:btih:aaa")
            .url("https://example.org/b.torrent")
            .build();

        assert_eq!(
            part_text(&form, "urls"),
            Some("magnet:?xt=urn:btih:aaa\nhttps://example.org/b.torrent")
        );
    }

    #[test]
    fn form_files_are_named_parts() {
        let form = AddFormBuilder::new()
            .file(&b"d8:announce0:e"[..], "a.torrent")
            .file(&b"d8:announce0:e"[..], "b.torrent")
            .paused(true)
            .build();

        let files: Vec<&str> = form
            .parts()
            .iter()
            .filter(|p| p.name() == "torrents")
            .filter_map(Part::filename)
            .collect();
        assert_eq!(files, ["a.torrent", "b.torrent"]);
        assert_eq!(part_text(&form, "paused"), Some("true"));
    }

    #[test]
    fn form_option_fields_use_exact_wire_names() {
        let form = AddFormBuilder::new()
            .savepath(r"d:\downloads")
            .up_limit(1024)
            .auto_tmm(false)
            .sequential_download(true)
            .build();

        assert_eq!(part_text(&form, "savepath"), Some("d:/downloads"));
        assert_eq!(part_text(&form, "upLimit"), Some("1024"));
        assert_eq!(part_text(&form, "autoTMM"), Some("false"));
        assert_eq!(part_text(&form, "sequentialDownload"), Some("true"));
    }

    #[test]
    fn gated_options_respect_the_api_version() {
        let old = AddFormBuilder {
            api_version: Some(ApiVersion::new(2, 5, 0)),
            ..AddFormBuilder::default()
        };

        let_assert!(Err(Error::Version { .. }) = old.clone().tags(["linux"]));
        let_assert!(
            Err(Error::Version { .. }) = old.clone().ratio_limit(RatioLimit::Limited(1.0))
        );
        let_assert!(
            Err(Error::Version { .. }) = old.stop_condition(StopCondition::MetadataReceived)
        );

        // unknown version passes every gate
        let form = AddFormBuilder::new()
            .tags(["linux", "iso"])
            .expect("tags")
            .stop_condition(StopCondition::MetadataReceived)
            .expect("stop condition")
            .build();
        assert_eq!(part_text(&form, "tags"), Some("linux,iso"));
        assert_eq!(part_text(&form, "stopCondition"), Some("MetadataReceived"));
    }

    #[test]
    fn tags_reject_commas() {
        let result = AddFormBuilder::new().tags(["a,b"]);
        check!(matches!(result, Err(Error::InvalidRequest(_))));
    }
}
