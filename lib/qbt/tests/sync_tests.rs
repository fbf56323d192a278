//! Sync API integration tests against a wiremock server.

use assert2::check;
use qbt::Client;
use qbt::model::{ConnectionStatus, TorrentState};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HASH: &str = "8c212779b4abde7c6bc608063a0d008b7e40ce32";

async fn connect(server: &MockServer) -> Client {
    Mock::given(method("GET"))
        .and(path("/api/v2/app/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string("v4.6.3"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/app/webapiVersion"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2.9.3"))
        .mount(server)
        .await;

    Client::builder()
        .base_url(format!("{}/api/v2", server.uri()))
        .connect()
        .await
        .expect("connect")
}

#[tokio::test]
async fn full_snapshot_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/sync/maindata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rid": 1,
            "full_update": true,
            "torrents": {
                HASH: {
                    "name": "debian-12.4.0-amd64-netinst.iso",
                    "state": "stalledUP",
                    "progress": 1.0,
                    "ratio": 2.5
                }
            },
            "categories": {"linux": {"name": "linux", "savePath": "/downloads/linux"}},
            "tags": ["iso"],
            "server_state": {"connection_status": "connected", "dl_info_speed": 0}
        })))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let data = client.sync().maindata(None).await.expect("maindata");

    check!(data.full_update);
    assert_eq!(data.rid, 1);

    let torrent = &data.torrents[HASH];
    assert_eq!(torrent.state, Some(TorrentState::StalledUp));
    assert_eq!(torrent.ratio, Some(2.5));

    assert_eq!(
        data.server_state.connection_status,
        Some(ConnectionStatus::Connected)
    );
}

#[tokio::test]
async fn delta_decodes_removed_and_changed_without_a_prior_full() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/sync/maindata"))
        .and(query_param("rid", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rid": 2,
            "torrents": {
                HASH: {"dlspeed": 2048, "progress": 0.5}
            },
            "torrents_removed": ["fedcba9876543210fedcba9876543210fedcba98"],
            "categories_removed": ["old-category"],
            "server_state": {"use_alt_speed_limits": true}
        })))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let delta = client.sync().maindata(Some(1)).await.expect("maindata");

    check!(!delta.full_update);
    assert_eq!(delta.rid, 2);

    let changed = &delta.torrents[HASH];
    assert_eq!(changed.dlspeed, Some(2048));
    check!(changed.state.is_none(), "unchanged fields stay absent");

    assert_eq!(
        delta.torrents_removed,
        ["fedcba9876543210fedcba9876543210fedcba98"]
    );
    assert_eq!(delta.categories_removed, ["old-category"]);
    assert_eq!(delta.server_state.use_alt_speed_limits, Some(true));
    check!(delta.server_state.connection_status.is_none());
}

#[tokio::test]
async fn torrent_peers_decode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/sync/torrentPeers"))
        .and(query_param("hash", HASH))
        .and(query_param("rid", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rid": 1,
            "full_update": true,
            "show_flags": true,
            "peers": {
                "203.0.113.7:6881": {
                    "ip": "203.0.113.7",
                    "port": 6881,
                    "client": "qBittorrent/4.6.3",
                    "progress": 0.8,
                    "flags": "D X"
                }
            }
        })))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let hash = HASH.parse().expect("hash");
    let peers = client
        .sync()
        .torrent_peers(&hash, Some(0))
        .await
        .expect("peers");

    assert_eq!(peers.rid, 1);
    check!(peers.full_update);

    let peer = &peers.peers["203.0.113.7:6881"];
    assert_eq!(peer.port, Some(6881));
    assert_eq!(peer.flags.as_deref(), Some("D X"));
}
