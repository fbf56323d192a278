//! Search result objects.

use serde::Deserialize;

/// Freshly started search job (`search/start`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct SearchJobStart {
    /// Search job ID.
    pub id: i64,
}

/// Lifecycle state of a search job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SearchJobState {
    /// The job is still querying plugins.
    Running,
    /// The job finished or was stopped.
    Stopped,
}

/// Status of one search job (`search/status`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct SearchJobStatus {
    /// Search job ID.
    pub id: i64,
    /// Job state.
    pub status: SearchJobState,
    /// Results gathered so far.
    #[serde(default)]
    pub total: i64,
}

/// One search result entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchResultEntry {
    /// Result file name.
    #[serde(default)]
    pub file_name: String,
    /// Torrent or magnet URL.
    #[serde(default)]
    pub file_url: String,
    /// File size in bytes; `-1` when unknown.
    #[serde(default)]
    pub file_size: f64,
    /// Number of seeders.
    #[serde(default)]
    pub nb_seeders: i64,
    /// Number of leechers.
    #[serde(default)]
    pub nb_leechers: i64,
    /// Plugin that produced the result (API 2.11.1+).
    #[serde(default)]
    pub engine_name: String,
    /// Site URL of the result.
    #[serde(default)]
    pub site_url: String,
    /// Description page link.
    #[serde(default)]
    pub descr_link: String,
    /// Publication date, epoch seconds (API 2.11.1+).
    #[serde(default)]
    pub pub_date: i64,
}

/// Results of a search job (`search/results`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct SearchJobResults {
    /// Job state at the time of the query.
    pub status: SearchJobState,
    /// Result entries in the requested window.
    #[serde(default)]
    pub results: Vec<SearchResultEntry>,
    /// Total results available.
    #[serde(default)]
    pub total: i64,
}

/// One category supported by a search plugin.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct SearchPluginCategory {
    /// Category identifier.
    pub id: String,
    /// Localized category name; some server versions key this `category`.
    #[serde(default, alias = "category")]
    pub name: String,
}

/// Categories supported by a plugin.
///
/// Servers before API 2.5.2 report plain localized strings; later servers
/// report `{id, name}` objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchPluginCategories {
    /// API 2.5.2+ shape.
    Entries(Vec<SearchPluginCategory>),
    /// Pre-2.5.2 shape: localized names only.
    Names(Vec<String>),
}

impl Default for SearchPluginCategories {
    fn default() -> Self {
        Self::Entries(Vec::new())
    }
}

/// One installed search plugin (`search/plugins`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchPlugin {
    /// Whether the plugin is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Human-readable plugin name.
    #[serde(default)]
    pub full_name: String,
    /// Plugin identifier.
    pub name: String,
    /// Categories the plugin can search.
    #[serde(default)]
    pub supported_categories: SearchPluginCategories,
    /// Plugin site URL.
    #[serde(default)]
    pub url: String,
    /// Plugin version.
    #[serde(default)]
    pub version: String,
}
