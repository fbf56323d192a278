//! Client and session integration tests against a wiremock server.

use assert2::{check, let_assert};
use qbt::{Client, ClientConfig, Error};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_url(server: &MockServer) -> String {
    format!("{}/api/v2", server.uri())
}

async fn mount_versions(server: &MockServer, client_version: &str, api_version: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v2/app/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string(client_version))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/app/webapiVersion"))
        .respond_with(ResponseTemplate::new(200).set_body_string(api_version))
        .mount(server)
        .await;
}

async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .and(body_string("username=admin&password=adminadmin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Ok.")
                .insert_header("Set-Cookie", "SID=abc123; HttpOnly; path=/"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_returns_a_usable_client() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_versions(&server, "v4.6.3", "2.9.3").await;

    let client = Client::connect(api_url(&server), "admin", "adminadmin")
        .await
        .expect("connect");

    // versions were fetched and cached at connect time
    assert_eq!(client.client_version().expect("version").to_string(), "4.6.3");
    assert_eq!(client.api_version().expect("version").to_string(), "2.9.3");

    // the mock's version string comes back unchanged
    let version = client.app().version().await.expect("version");
    assert_eq!(version, "v4.6.3");
}

#[tokio::test]
async fn session_cookie_is_attached_to_later_requests() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_versions(&server, "v4.6.3", "2.9.3").await;

    Mock::given(method("GET"))
        .and(path("/api/v2/app/defaultSavePath"))
        .and(header("Cookie", "SID=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("/downloads"))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::connect(api_url(&server), "admin", "adminadmin")
        .await
        .expect("connect");

    let save_path = client.app().default_save_path().await.expect("save path");
    assert_eq!(save_path, "/downloads");
}

#[tokio::test]
async fn rejected_credentials_are_a_login_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Fails."))
        .mount(&server)
        .await;

    let err = Client::connect(api_url(&server), "admin", "wrong")
        .await
        .expect_err("login should fail");

    let_assert!(Error::Login(api) = err);
    assert_eq!(api.status, 200);
    assert_eq!(api.message, "Fails.");
}

#[tokio::test]
async fn status_codes_map_to_typed_errors() {
    let server = MockServer::start().await;
    mount_versions(&server, "v4.6.3", "2.9.3").await;

    Mock::given(method("GET"))
        .and(path("/api/v2/torrents/properties"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Torrent hash not found"))
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(api_url(&server))
        .connect()
        .await
        .expect("connect");

    let hash = "8c212779b4abde7c6bc608063a0d008b7e40ce32"
        .parse()
        .expect("hash");
    let err = client
        .torrents()
        .properties(&hash)
        .await
        .expect_err("conflict");

    let_assert!(Error::Conflict(api) = err);
    assert_eq!(api.status, 409);
    assert_eq!(api.message, "Torrent hash not found");
    assert_eq!(
        api.body.as_deref(),
        Some(b"Torrent hash not found".as_ref())
    );
}

#[tokio::test]
async fn version_gated_methods_fail_fast_without_a_request() {
    let server = MockServer::start().await;
    mount_versions(&server, "v4.1.0", "2.2.0").await;

    // the gated endpoint must never be hit
    Mock::given(method("GET"))
        .and(path("/api/v2/app/buildInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(api_url(&server))
        .connect()
        .await
        .expect("connect");

    let err = client.app().build_info().await.expect_err("gated");
    let_assert!(Error::Version { required, current } = err);
    assert_eq!(required.to_string(), "2.3.0");
    assert_eq!(current.to_string(), "2.2.0");
}

#[tokio::test]
async fn close_is_idempotent_and_blocks_further_use() {
    let server = MockServer::start().await;
    mount_versions(&server, "v4.6.3", "2.9.3").await;

    let client = Client::builder()
        .base_url(api_url(&server))
        .config(ClientConfig::builder().logout_on_close(false).build())
        .connect()
        .await
        .expect("connect");

    client.close().await.expect("close");
    client.close().await.expect("second close is a no-op");
    check!(client.is_closed());

    let err = client.app().version().await.expect_err("closed");
    check!(matches!(err, Error::Closed));
}

#[tokio::test]
async fn close_logs_out_when_configured() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_versions(&server, "v4.6.3", "2.9.3").await;

    Mock::given(method("POST"))
        .and(path("/api/v2/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::connect(api_url(&server), "admin", "adminadmin")
        .await
        .expect("connect");
    client.close().await.expect("close");
}

#[tokio::test]
async fn unknown_versions_pass_gates() {
    let server = MockServer::start().await;

    // no version endpoints mocked: the client runs with unknown versions
    Mock::given(method("GET"))
        .and(path("/api/v2/app/version"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/app/buildInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "qt": "6.4.2",
            "libtorrent": "2.0.9.0",
            "boost": "1.81.0",
            "openssl": "3.0.8"
        })))
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(api_url(&server))
        .connect()
        .await
        .expect("connect tolerates forbidden version endpoints");

    check!(client.api_version().is_none());

    let info = client.app().build_info().await.expect("gate passes");
    assert_eq!(info.qt, "6.4.2");
}

#[tokio::test]
async fn raw_request_reaches_unwrapped_endpoints() {
    let server = MockServer::start().await;
    mount_versions(&server, "v4.6.3", "2.9.3").await;

    Mock::given(method("GET"))
        .and(path("/api/v2/app/customEndpoint"))
        .and(query_param("key", "value"))
        .respond_with(ResponseTemplate::new(200).set_body_string("raw"))
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(api_url(&server))
        .connect()
        .await
        .expect("connect");

    let mut params = qbt::Params::new();
    params.raw("key", "value");
    let body = client
        .request_text(qbt::Method::Get, "app/customEndpoint", Some(params), None)
        .await
        .expect("request");
    assert_eq!(body, "raw");
}
