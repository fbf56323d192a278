//! Transfer endpoints (`transfer/*`).

use qbt_core::{Error, HttpClient, Params, Result};

use super::api_level;
use crate::client::Client;
use crate::model::{SpeedLimitsMode, TransferInfo};

/// API methods under `transfer`.
#[derive(Debug)]
pub struct TransferApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> TransferApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Global transfer statistics.
    pub async fn info(&self) -> Result<TransferInfo> {
        self.client.get_json("transfer/info", None).await
    }

    /// Whether the alternative speed limits are active.
    pub async fn speed_limits_mode(&self) -> Result<SpeedLimitsMode> {
        let text = self.client.get_text("transfer/speedLimitsMode", None).await?;

        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| Error::mapper("speed_limits_mode", format!("bad mode: {text:?}")))?;
        SpeedLimitsMode::try_from(value)
            .map_err(|other| Error::mapper("speed_limits_mode", format!("bad mode: {other}")))
    }

    /// Toggle between regular and alternative speed limits.
    pub async fn toggle_speed_limits_mode(&self) -> Result<()> {
        self.client
            .post_form("transfer/toggleSpeedLimitsMode", Params::new())
            .await?;
        Ok(())
    }

    /// Set the speed limits mode.
    ///
    /// The dedicated endpoint exists since API 2.8.14; on older servers
    /// the mode is queried and toggled when it differs.
    pub async fn set_speed_limits_mode(&self, mode: SpeedLimitsMode) -> Result<()> {
        if self.client.check_api_version(api_level::SET_SPEED_LIMITS_MODE).is_err() {
            if self.speed_limits_mode().await? != mode {
                self.toggle_speed_limits_mode().await?;
            }
            return Ok(());
        }

        let mut data = Params::new();
        data.required_int("mode", mode.as_i64());
        self.client
            .post_form("transfer/setSpeedLimitsMode", data)
            .await?;
        Ok(())
    }

    /// Global download limit, bytes/s; `0` means unlimited.
    pub async fn download_limit(&self) -> Result<i64> {
        let text = self.client.get_text("transfer/downloadLimit", None).await?;
        parse_limit(&text)
    }

    /// Set the global download limit, bytes/s. Must be a multiple of 1024.
    pub async fn set_download_limit(&self, limit: i64) -> Result<()> {
        check_1024("limit", limit)?;

        let mut data = Params::new();
        data.required_int("limit", limit);
        self.client
            .post_form("transfer/setDownloadLimit", data)
            .await?;
        Ok(())
    }

    /// Global upload limit, bytes/s; `0` means unlimited.
    pub async fn upload_limit(&self) -> Result<i64> {
        let text = self.client.get_text("transfer/uploadLimit", None).await?;
        parse_limit(&text)
    }

    /// Set the global upload limit, bytes/s. Must be a multiple of 1024.
    pub async fn set_upload_limit(&self, limit: i64) -> Result<()> {
        check_1024("limit", limit)?;

        let mut data = Params::new();
        data.required_int("limit", limit);
        self.client.post_form("transfer/setUploadLimit", data).await?;
        Ok(())
    }

    /// Ban peers by `(address, port)`. Addresses are IPs, not hostnames.
    /// Requires API 2.3.0.
    pub async fn ban_peers<I>(&self, peers: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, u16)>,
    {
        self.client.check_api_version(api_level::BAN_PEERS)?;

        let pairs: Vec<String> = peers
            .into_iter()
            .map(|(host, port)| format!("{host}:{port}"))
            .collect();

        let mut data = Params::new();
        data.required_list("peers", pairs, "|");
        self.client.post_form("transfer/banPeers", data).await?;
        Ok(())
    }
}

fn parse_limit(text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| Error::mapper("limit", format!("bad limit: {text:?}")))
}

fn check_1024(name: &str, value: i64) -> Result<()> {
    if value % 1024 != 0 {
        return Err(Error::invalid_request(format!(
            "{name} must be a multiple of 1024: {value}"
        )));
    }
    Ok(())
}
