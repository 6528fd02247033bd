//! Lookup tests against a mock web service.
//!
//! The blocking client runs on `spawn_blocking` so it never touches the
//! async runtime driving the mock server.

use std::time::Duration;

use mbxml::value::DATA_FIELD;
use mbxml::Value;
use mbxml_client::{ClientConfig, ClientError, MusicBrainzClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VARIOUS_ARTISTS: &str = "89ad4ac3-39f7-470e-963a-56509c546377";

fn artist_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#">
  <artist id="{VARIOUS_ARTISTS}" type="Other" type-id="ac897045-5043-3294-969b-187360e45d86">
    <name>Various Artists</name>
    <sort-name>Various Artists</sort-name>
    <disambiguation>add compilations to this artist</disambiguation>
    <alias-list count="2">
      <alias sort-name="Various">Various</alias>
      <alias sort-name="V.A." type="Search hint">V.A.</alias>
    </alias-list>
  </artist>
</metadata>"#
    )
}

fn test_config(server: &MockServer) -> ClientConfig {
    let address = server.address();
    ClientConfig::default()
        .with_scheme("http")
        .with_server(address.ip().to_string(), address.port())
        .with_user_agent("mbxml-test/1.0")
        .with_rate_limit_interval(Duration::ZERO)
}

fn xml_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/xml; charset=utf-8")
        .set_body_string(body)
}

/// Run a lookup on a blocking thread.
async fn lookup(
    config: ClientConfig,
    includes: &'static [&'static str],
) -> Result<Value, ClientError> {
    tokio::task::spawn_blocking(move || {
        let client = MusicBrainzClient::new(config)?;
        client.lookup_artist(VARIOUS_ARTISTS, includes)
    })
    .await
    .expect("lookup thread panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_artist_streams_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/ws/2/artist/{VARIOUS_ARTISTS}")))
        .and(query_param("inc", "aliases"))
        .and(header("user-agent", "mbxml-test/1.0"))
        .respond_with(xml_response(artist_xml()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let artist = lookup(test_config(&mock_server), &["aliases"])
        .await
        .expect("lookup should succeed");

    assert_eq!(artist["id"], VARIOUS_ARTISTS);
    assert_eq!(artist["type"], "Other");
    assert_eq!(artist["name"], "Various Artists");
    assert_eq!(artist["disambiguation"], "add compilations to this artist");

    let aliases = artist["alias-list"][DATA_FIELD].as_list().expect("aliases");
    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases[1].text(), Some("V.A."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bearer_token_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(xml_response(artist_xml()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server).with_access_token("secret");
    let artist = lookup(config, &["user-tags"]).await.expect("lookup");
    assert_eq!(artist["name"], "Various Artists");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_is_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(xml_response(artist_xml()))
        .mount(&mock_server)
        .await;

    let artist = lookup(test_config(&mock_server), &[]).await.expect("lookup");
    assert_eq!(artist["sort-name"], "Various Artists");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_retries_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = lookup(test_config(&mock_server), &[]).await;
    assert!(
        matches!(result, Err(ClientError::RetriesExhausted { attempts: 3, .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = lookup(test_config(&mock_server), &[]).await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_schema_error_in_response() {
    let mock_server = MockServer::start().await;

    let body = r#"<metadata><artist id="x"><bogus-field/></artist></metadata>"#;
    Mock::given(method("GET"))
        .respond_with(xml_response(body.to_string()))
        .mount(&mock_server)
        .await;

    let result = lookup(test_config(&mock_server), &[]).await;
    assert!(matches!(
        result,
        Err(ClientError::Parse(mbxml::MbxmlError::UnexpectedTag { .. }))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_response_without_entity() {
    let mock_server = MockServer::start().await;

    let body = r#"<metadata><label id="l"><name>L</name></label></metadata>"#;
    Mock::given(method("GET"))
        .respond_with(xml_response(body.to_string()))
        .mount(&mock_server)
        .await;

    let result = lookup(test_config(&mock_server), &[]).await;
    assert!(matches!(
        result,
        Err(ClientError::MissingEntity(mbxml::Kind::Artist))
    ));
}
