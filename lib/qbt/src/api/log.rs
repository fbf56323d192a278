//! Log endpoints (`log/*`).
//!
//! This group's wire names are snake_case already, so every key goes
//! through [`Params::raw`].

use qbt_core::{HttpClient, Params, Result};

use crate::client::Client;
use crate::model::{LogMessage, LogPeer};

/// Filter for [`LogApi::main`].
///
/// Severities default to included; `last_known_id` pages past messages
/// already seen.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    /// Include normal messages.
    pub normal: Option<bool>,
    /// Include informational messages.
    pub info: Option<bool>,
    /// Include warnings.
    pub warning: Option<bool>,
    /// Include critical messages.
    pub critical: Option<bool>,
    /// Exclude messages with IDs up to this value.
    pub last_known_id: Option<i64>,
}

impl LogQuery {
    fn params(&self) -> Params {
        let mut params = Params::new();
        params.optional_bool("normal", self.normal);
        params.optional_bool("info", self.info);
        params.optional_bool("warning", self.warning);
        params.optional_bool("critical", self.critical);
        if let Some(id) = self.last_known_id {
            params.raw("last_known_id", id.to_string());
        }
        params
    }
}

/// API methods under `log`.
#[derive(Debug)]
pub struct LogApi<'a, T: HttpClient> {
    client: &'a Client<T>,
}

impl<'a, T: HttpClient> LogApi<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Main log entries matching the query.
    pub async fn main(&self, query: &LogQuery) -> Result<Vec<LogMessage>> {
        self.client.get_json("log/main", Some(query.params())).await
    }

    /// Peer log entries after `last_known_id`.
    pub async fn peers(&self, last_known_id: Option<i64>) -> Result<Vec<LogPeer>> {
        let mut params = Params::new();
        if let Some(id) = last_known_id {
            params.raw("last_known_id", id.to_string());
        }
        self.client.get_json("log/peers", Some(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_keeps_snake_case_wire_names() {
        let query = LogQuery {
            warning: Some(true),
            last_known_id: Some(12),
            ..LogQuery::default()
        };

        assert_eq!(query.params().encode(), "warning=true&last_known_id=12");
    }
}
