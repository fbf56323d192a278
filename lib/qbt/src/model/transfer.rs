//! Transfer result objects.

use serde::{Deserialize, Serialize};

/// Global connection status in [`TransferInfo::connection_status`].
///
/// The token set is closed; an unrecognized token is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Listening port reachable from outside.
    Connected,
    /// Traffic flows but the listening port is unreachable.
    Firewalled,
    /// No connectivity.
    Disconnected,
}

impl ConnectionStatus {
    /// The wire token for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Firewalled => "firewalled",
            Self::Disconnected => "disconnected",
        }
    }
}

/// Whether the alternative speed limits are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedLimitsMode {
    /// Regular limits apply.
    Normal,
    /// Alternative limits apply.
    Alternative,
}

impl SpeedLimitsMode {
    /// The wire integer for this mode.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Normal => 0,
            Self::Alternative => 1,
        }
    }
}

impl TryFrom<i64> for SpeedLimitsMode {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Alternative),
            other => Err(other),
        }
    }
}

/// Global transfer statistics (`transfer/info`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct TransferInfo {
    /// Download speed, bytes/s.
    #[serde(default)]
    pub dl_info_speed: i64,
    /// Session downloaded bytes.
    #[serde(default)]
    pub dl_info_data: i64,
    /// Upload speed, bytes/s.
    #[serde(default)]
    pub up_info_speed: i64,
    /// Session uploaded bytes.
    #[serde(default)]
    pub up_info_data: i64,
    /// Download rate limit, bytes/s; `0` when unlimited.
    #[serde(default)]
    pub dl_rate_limit: i64,
    /// Upload rate limit, bytes/s; `0` when unlimited.
    #[serde(default)]
    pub up_rate_limit: i64,
    /// Known DHT nodes.
    #[serde(default)]
    pub dht_nodes: i64,
    /// Global connection status.
    pub connection_status: ConnectionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_info_decodes() {
        let info: TransferInfo = serde_json::from_str(
            r#"{
                "connection_status": "connected",
                "dht_nodes": 386,
                "dl_info_data": 979931,
                "dl_info_speed": 1053,
                "dl_rate_limit": 0,
                "up_info_data": 10747,
                "up_info_speed": 0,
                "up_rate_limit": 1048576
            }"#,
        )
        .expect("decode");

        assert_eq!(info.connection_status, ConnectionStatus::Connected);
        assert_eq!(info.dht_nodes, 386);
    }

    #[test]
    fn connection_status_tokens_round_trip() {
        for (token, status) in [
            ("connected", ConnectionStatus::Connected),
            ("firewalled", ConnectionStatus::Firewalled),
            ("disconnected", ConnectionStatus::Disconnected),
        ] {
            let json = format!("\"{token}\"");
            let decoded: ConnectionStatus = serde_json::from_str(&json).expect("decode");
            assert_eq!(decoded, status);
            assert_eq!(decoded.as_str(), token);
            assert_eq!(serde_json::to_string(&decoded).expect("encode"), json);
        }
    }

    #[test]
    fn unknown_connection_status_fails() {
        let result: Result<ConnectionStatus, _> = serde_json::from_str("\"tunneled\"");
        assert!(result.is_err());
    }

    #[test]
    fn speed_limits_mode_from_wire() {
        assert_eq!(SpeedLimitsMode::try_from(0), Ok(SpeedLimitsMode::Normal));
        assert_eq!(
            SpeedLimitsMode::try_from(1),
            Ok(SpeedLimitsMode::Alternative)
        );
        assert_eq!(SpeedLimitsMode::try_from(2), Err(2));
    }
}
