//! Search endpoints (`search/*`).

use qbt_core::{HttpClient, Params, Result};

use crate::client::Client;
use crate::model::{SearchJobResults, SearchJobStart, SearchJobStatus, SearchPlugin};

/// Which plugins a search runs against.
#[derive(Debug, Clone)]
pub enum SearchPluginSelection {
    /// All installed plugins.
    All,
    /// All enabled plugins.
    Enabled,
    /// An explicit plugin list.
    Plugins(Vec<String>),
}

impl SearchPluginSelection {
    fn to_wire(&self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Enabled => "enabled".to_owned(),
            Self::Plugins(names) => names.join("|"),
        }
    }
}

/// API methods under `search`.
#[derive(Debug)]
pub struct SearchApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> SearchApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Start a search job; `category` is a plugin category ID or `all`.
    pub async fn start(
        &self,
        pattern: &str,
        plugins: &SearchPluginSelection,
        category: &str,
    ) -> Result<SearchJobStart> {
        let mut data = Params::new();
        data.required_str("pattern", pattern);
        data.raw("plugins", plugins.to_wire());
        data.required_str("category", category);

        let response = self
            .client
            .request(qbt_core::Method::Post, "search/start", None, Some(data))
            .await?;
        response.json()
    }

    /// Stop a running search job.
    pub async fn stop(&self, id: i64) -> Result<()> {
        let mut data = Params::new();
        data.required_int("id", id);

        self.client.post_form("search/stop", data).await?;
        Ok(())
    }

    /// Status of one job, or of all jobs when `id` is `None`.
    pub async fn status(&self, id: Option<i64>) -> Result<Vec<SearchJobStatus>> {
        let mut params = Params::new();
        params.optional_int("id", id);

        self.client.get_json("search/status", Some(params)).await
    }

    /// Results of a search job, windowed by `limit` and `offset`.
    pub async fn results(
        &self,
        id: i64,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<SearchJobResults> {
        let mut params = Params::new();
        params.required_int("id", id);
        params.optional_int("limit", limit);
        params.optional_int("offset", offset);

        self.client.get_json("search/results", Some(params)).await
    }

    /// Delete a search job and its results.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut data = Params::new();
        data.required_int("id", id);

        self.client.post_form("search/delete", data).await?;
        Ok(())
    }

    /// All installed search plugins.
    pub async fn plugins(&self) -> Result<Vec<SearchPlugin>> {
        self.client.get_json("search/plugins", None).await
    }

    /// Install plugins from URLs or local paths.
    pub async fn install_plugin<I>(&self, sources: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut data = Params::new();
        data.required_list("sources", sources, "|");

        self.client.post_form("search/installPlugin", data).await?;
        Ok(())
    }

    /// Uninstall plugins by name.
    pub async fn uninstall_plugin<I>(&self, names: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut data = Params::new();
        data.required_list("names", names, "|");

        self.client.post_form("search/uninstallPlugin", data).await?;
        Ok(())
    }

    /// Enable or disable plugins by name.
    pub async fn enable_plugin<I>(&self, names: I, enable: bool) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut data = Params::new();
        data.required_list("names", names, "|");
        data.required_bool("enable", enable);

        self.client.post_form("search/enablePlugin", data).await?;
        Ok(())
    }

    /// Update all plugins.
    pub async fn update_plugins(&self) -> Result<()> {
        self.client
            .post_form("search/updatePlugins", Params::new())
            .await?;
        Ok(())
    }
}
