//! RSS result objects.
//!
//! `rss/items` returns a tree: folders are plain JSON objects mapping
//! names to children, feeds are objects carrying `uid` and `url`. The
//! [`RssItem`] decoding relies on that distinction.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::convert;

/// One article of an RSS feed.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct RssArticle {
    /// Article ID.
    pub id: String,
    /// Article title.
    #[serde(default)]
    pub title: String,
    /// Article description.
    #[serde(default)]
    pub description: String,
    /// Publication date.
    #[serde(default, deserialize_with = "convert::optional_rfc2822")]
    pub date: Option<DateTime<Utc>>,
    /// Article link.
    #[serde(default)]
    pub link: String,
    /// Torrent URL of the article.
    #[serde(default, rename = "torrentURL")]
    pub torrent_url: String,
}

/// One RSS feed.
///
/// `uid` and `url` are always present; the rest is populated only when
/// `rss/items` is called with `withData=true`.
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct RssFeed {
    /// Feed UID.
    pub uid: String,
    /// Feed URL.
    pub url: String,
    /// Feed title, when data was requested.
    #[serde(default)]
    pub title: String,
    /// Last build date string, when data was requested.
    #[serde(default, rename = "lastBuildDate")]
    pub last_build_date: String,
    /// Whether the feed is currently refreshing.
    #[serde(default, rename = "isLoading")]
    pub is_loading: bool,
    /// Whether the last refresh failed.
    #[serde(default, rename = "hasError")]
    pub has_error: bool,
    /// Feed articles, when data was requested.
    #[serde(default)]
    pub articles: Vec<RssArticle>,
}

/// A node of the RSS tree: a feed, or a folder of further nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RssItem {
    /// A feed (has `uid` and `url`).
    Feed(RssFeed),
    /// A folder mapping names to children.
    Folder(RssFolder),
}

/// A folder in the RSS tree.
///
/// Children are addressed by name; nested paths join segments with a
/// backslash, mirroring the WebUI (`folder.get(r"news\local")`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RssFolder {
    /// Direct children by name.
    pub items: HashMap<String, RssItem>,
}

impl RssFolder {
    /// Looks up a child by name or backslash-joined path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RssItem> {
        let mut segments = path.split('\\');
        let first = segments.next()?;
        let mut current = self.items.get(first)?;

        for segment in segments {
            let RssItem::Folder(folder) = current else {
                return None;
            };
            current = folder.items.get(segment)?;
        }

        Some(current)
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the folder has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One RSS auto-download rule (`rss/rules` / `rss/setRule`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RssRule {
    /// Whether the rule is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Rule priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Interpret the filters as regular expressions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_regex: Option<bool>,
    /// Filter that article titles must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_contain: Option<String>,
    /// Filter that article titles must not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_not_contain: Option<String>,
    /// Episode filter expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_filter: Option<String>,
    /// Feed URLs the rule applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_feeds: Option<Vec<String>>,
    /// Save path for matched torrents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_path: Option<String>,
    /// Category assigned to matched torrents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_category: Option<String>,
    /// Last match date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_match: Option<String>,
    /// Ignore matches for this many days after one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_days: Option<i64>,
    /// Add matched torrents paused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_paused: Option<bool>,
    /// Content layout for matched torrents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torrent_content_layout: Option<String>,
    /// Use the smart episode filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_filter: Option<bool>,
    /// Episodes already matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previously_matched_episodes: Option<Vec<String>>,
    /// Keys not covered by the typed fields, preserved on round-trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn items_tree_decodes_feeds_and_folders() {
        let root: RssFolder = serde_json::from_str(
            r#"{
                "linux": {"uid": "{uid-1}", "url": "https://distrowatch.com/news/torrents.xml"},
                "news": {
                    "local": {"uid": "{uid-2}", "url": "https://example.org/local.xml"}
                }
            }"#,
        )
        .expect("decode");

        assert_eq!(root.len(), 2);

        let_assert!(Some(RssItem::Feed(feed)) = root.get("linux"));
        assert_eq!(feed.url, "https://distrowatch.com/news/torrents.xml");

        let_assert!(Some(RssItem::Folder(folder)) = root.get("news"));
        assert_eq!(folder.len(), 1);

        let_assert!(Some(RssItem::Feed(feed)) = root.get("news\\local"));
        assert_eq!(feed.uid, "{uid-2}");

        check!(root.get("news\\world").is_none());
        check!(root.get("linux\\nested").is_none());
    }

    #[test]
    fn feed_with_data_decodes_articles() {
        let feed: RssFeed = serde_json::from_str(
            r#"{
                "uid": "{uid-1}",
                "url": "https://example.org/feed.xml",
                "title": "Example",
                "isLoading": false,
                "hasError": false,
                "articles": [
                    {
                        "id": "a-1",
                        "title": "debian-12.4.0",
                        "date": "Wed, 07 Dec 2022 01:34:44 +0000",
                        "torrentURL": "https://example.org/debian.torrent"
                    }
                ]
            }"#,
        )
        .expect("decode");

        assert_eq!(feed.title, "Example");
        assert_eq!(feed.articles.len(), 1);
        let article = &feed.articles[0];
        assert_eq!(article.torrent_url, "https://example.org/debian.torrent");
        check!(article.date.is_some());
    }

    #[test]
    fn rule_round_trips_camel_case_keys() {
        let rule: RssRule = serde_json::from_str(
            r#"{"enabled": true, "mustContain": "1080p", "affectedFeeds": ["https://example.org/feed.xml"]}"#,
        )
        .expect("decode");

        assert_eq!(rule.must_contain.as_deref(), Some("1080p"));

        let json = serde_json::to_value(&rule).expect("encode");
        assert_eq!(json["mustContain"], "1080p");
        check!(json.get("mustNotContain").is_none());
    }
}
