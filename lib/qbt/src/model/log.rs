//! Log result objects.

use serde::Deserialize;

use super::convert::int_enum;

int_enum! {
    /// Severity of a [`LogMessage`].
    pub enum LogSeverity {
        /// Normal operational message.
        Normal = 1,
        /// Informational message.
        Info = 2,
        /// Warning.
        Warning = 4,
        /// Critical failure.
        Critical = 8,
    }
}

/// One main-log entry (`log/main`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct LogMessage {
    /// Monotonic message ID; pass the last seen ID back to page.
    pub id: i64,
    /// Message text.
    #[serde(default)]
    pub message: String,
    /// Epoch seconds of the message.
    #[serde(default)]
    pub timestamp: i64,
    /// Message severity.
    #[serde(rename = "type", default = "severity_default")]
    pub severity: LogSeverity,
}

const fn severity_default() -> LogSeverity {
    LogSeverity::Normal
}

/// One peer-log entry (`log/peers`).
#[derive(Debug, Clone, Deserialize)]
#[non_exhaustive]
pub struct LogPeer {
    /// Monotonic entry ID.
    pub id: i64,
    /// Peer IP address.
    #[serde(default)]
    pub ip: String,
    /// Epoch seconds of the event.
    #[serde(default)]
    pub timestamp: i64,
    /// Whether the peer was blocked.
    #[serde(default)]
    pub blocked: bool,
    /// Block reason, when blocked.
    #[serde(default)]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_message_decodes() {
        let message: LogMessage = serde_json::from_str(
            r#"{"id": 4, "message": "qBittorrent v4.6.3 started", "timestamp": 1666000000, "type": 1}"#,
        )
        .expect("decode");

        assert_eq!(message.id, 4);
        assert_eq!(message.severity, LogSeverity::Normal);
    }

    #[test]
    fn unknown_severity_is_a_decode_error() {
        let result: Result<LogMessage, _> =
            serde_json::from_str(r#"{"id": 1, "message": "", "timestamp": 0, "type": 16}"#);
        assert!(result.is_err());
    }

    #[test]
    fn log_peer_decodes() {
        let peer: LogPeer = serde_json::from_str(
            r#"{"id": 7, "ip": "203.0.113.7", "timestamp": 1666000000, "blocked": true, "reason": "IP filter"}"#,
        )
        .expect("decode");

        assert!(peer.blocked);
        assert_eq!(peer.reason, "IP filter");
    }
}
