//! Application endpoints (`app/*`).

use qbt_core::{HttpClient, Params, Result};

use super::api_level;
use crate::client::Client;
use crate::model::{BuildInfo, NetworkInterface, Preferences};

/// API methods under `app`.
#[derive(Debug)]
pub struct AppApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> AppApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Application version string, e.g. `v4.6.3`.
    pub async fn version(&self) -> Result<String> {
        self.client.get_text("app/version", None).await
    }

    /// WebUI API version string, e.g. `2.9.3`.
    pub async fn webapi_version(&self) -> Result<String> {
        self.client.get_text("app/webapiVersion", None).await
    }

    /// Build information. Requires API 2.3.0.
    pub async fn build_info(&self) -> Result<BuildInfo> {
        self.client.check_api_version(api_level::BUILD_INFO)?;
        self.client.get_json("app/buildInfo", None).await
    }

    /// Shut the server down.
    pub async fn shutdown(&self) -> Result<()> {
        self.client.post_form("app/shutdown", Params::new()).await?;
        Ok(())
    }

    /// Current application preferences.
    pub async fn preferences(&self) -> Result<Preferences> {
        self.client.get_json("app/preferences", None).await
    }

    /// Update preferences.
    ///
    /// Only the keys set in `prefs` are sent; everything else keeps its
    /// server-side value.
    pub async fn set_preferences(&self, prefs: &Preferences) -> Result<()> {
        let mut data = Params::new();
        data.raw("json", serde_json::to_string(prefs)?);

        self.client.post_form("app/setPreferences", data).await?;
        Ok(())
    }

    /// Default save path of the server.
    pub async fn default_save_path(&self) -> Result<String> {
        self.client.get_text("app/defaultSavePath", None).await
    }

    /// Network interfaces of the server. Requires API 2.3.0.
    pub async fn network_interface_list(&self) -> Result<Vec<NetworkInterface>> {
        self.client.check_api_version(api_level::NETWORK_INTERFACES)?;
        self.client.get_json("app/networkInterfaceList", None).await
    }

    /// Addresses of a network interface; an empty `iface` means all.
    /// Requires API 2.3.0.
    pub async fn network_interface_address_list(&self, iface: &str) -> Result<Vec<String>> {
        self.client.check_api_version(api_level::NETWORK_INTERFACES)?;

        let mut params = Params::new();
        params.required_str("iface", iface);
        self.client
            .get_json("app/networkInterfaceAddressList", Some(params))
            .await
    }
}
