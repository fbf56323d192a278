//! RSS endpoints (`rss/*`).
//!
//! Most RSS wire names are camelCase (`itemPath`, `ruleName`), which the
//! parameter mapper produces from the snake_case spellings.

use std::collections::HashMap;

use qbt_core::{HttpClient, Params, Result};

use crate::client::Client;
use crate::model::{RssFolder, RssRule};

/// API methods under `rss`.
#[derive(Debug)]
pub struct RssApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> RssApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Add a folder; nested paths join segments with a backslash.
    pub async fn add_folder(&self, path: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("path", path);

        self.client.post_form("rss/addFolder", data).await?;
        Ok(())
    }

    /// Add a feed under `path`.
    pub async fn add_feed(&self, url: &str, path: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("url", url);
        data.required_str("path", path);

        self.client.post_form("rss/addFeed", data).await?;
        Ok(())
    }

    /// Remove a feed or folder.
    pub async fn remove_item(&self, path: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("path", path);

        self.client.post_form("rss/removeItem", data).await?;
        Ok(())
    }

    /// Move or rename a feed or folder.
    pub async fn move_item(&self, item_path: &str, dest_path: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("item_path", item_path);
        data.required_str("dest_path", dest_path);

        self.client.post_form("rss/moveItem", data).await?;
        Ok(())
    }

    /// The root folder of feeds and sub-folders.
    ///
    /// With `with_data`, feeds also carry their title and articles.
    pub async fn items(&self, with_data: bool) -> Result<RssFolder> {
        let mut params = Params::new();
        params.required_bool("with_data", with_data);

        self.client.get_json("rss/items", Some(params)).await
    }

    /// Mark one article - or with `article_id` `None`, a whole feed - as
    /// read.
    pub async fn mark_as_read(&self, item_path: &str, article_id: Option<&str>) -> Result<()> {
        let mut data = Params::new();
        data.required_str("item_path", item_path);
        data.optional_str("article_id", article_id);

        self.client.post_form("rss/markAsRead", data).await?;
        Ok(())
    }

    /// Refresh a feed or folder.
    pub async fn refresh_item(&self, item_path: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("item_path", item_path);

        self.client.post_form("rss/refreshItem", data).await?;
        Ok(())
    }

    /// Create or update an auto-download rule.
    pub async fn set_rule(&self, rule_name: &str, rule: &RssRule) -> Result<()> {
        let mut data = Params::new();
        data.required_str("rule_name", rule_name);
        data.raw("ruleDef", serde_json::to_string(rule)?);

        self.client.post_form("rss/setRule", data).await?;
        Ok(())
    }

    /// Rename an auto-download rule.
    pub async fn rename_rule(&self, rule_name: &str, new_rule_name: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("rule_name", rule_name);
        data.required_str("new_rule_name", new_rule_name);

        self.client.post_form("rss/renameRule", data).await?;
        Ok(())
    }

    /// Remove an auto-download rule.
    pub async fn remove_rule(&self, rule_name: &str) -> Result<()> {
        let mut data = Params::new();
        data.required_str("rule_name", rule_name);

        self.client.post_form("rss/removeRule", data).await?;
        Ok(())
    }

    /// All auto-download rules, keyed by name.
    pub async fn rules(&self) -> Result<HashMap<String, RssRule>> {
        self.client.get_json("rss/rules", None).await
    }

    /// Article titles matched by a rule, keyed by feed name.
    pub async fn matching_articles(
        &self,
        rule_name: &str,
    ) -> Result<HashMap<String, Vec<String>>> {
        let mut params = Params::new();
        params.required_str("rule_name", rule_name);

        self.client
            .get_json("rss/matchingArticles", Some(params))
            .await
    }
}
