//
//  teamcity-client
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests of `TeamCityClient` over real HTTP against mockito servers.

use std::collections::BTreeMap;

use mockito::{Matcher, Server, ServerGuard};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::json;
use teamcity_client::api::transport::ReqwestTransport;
use teamcity_client::api::{ApiError, ResponseBody, TeamCityClient};
use teamcity_client::config::ClientConfig;

const BASIC_AUTH: &str = "Basic YWRtaW46c2VjcmV0"; // admin:secret

fn client_for(server: &ServerGuard) -> TeamCityClient {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mockito address has a port");
    let config = ClientConfig::new(host, port.parse().unwrap(), "admin", "secret");
    TeamCityClient::new(config).unwrap()
}

#[tokio::test]
async fn test_build_types_listing_with_basic_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/httpAuth/app/rest/buildTypes")
        .match_header("authorization", BASIC_AUTH)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "count": 2,
                "buildType": [
                    {"id": "A", "name": "Alpha", "projectId": "P"},
                    {"id": "B", "name": "Beta", "projectId": "P"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let raw = client.get_build_types().await.unwrap();
    assert_eq!(raw["count"], 2);
    assert_eq!(raw["buildType"].as_array().unwrap().len(), 2);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_build_type_returns_server_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/httpAuth/app/rest/projects/id:Proj1/buildTypes")
        .match_header("content-type", "application/xml")
        .match_body(Matcher::Exact(
            r#"<newBuildTypeDescription name="Demo" copyAllAssociatedSettings="true" shareVCSRoots="false"/>"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "Proj1_Demo", "name": "Demo", "projectId": "Proj1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let id = client.create_build_type("Demo", "Proj1").await.unwrap();

    assert_eq!(id, "Proj1_Demo");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_parameter_is_rejected_without_put() {
    let mut server = Server::new_async().await;
    let get = server
        .mock("GET", "/httpAuth/app/rest/buildTypes/BT1/parameters")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 1, "property": [{"name": "known.key", "value": "y"}]}"#)
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/httpAuth/app/rest/buildTypes/BT1/parameters")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut params = BTreeMap::new();
    params.insert("unknown.key".to_string(), "x".to_string());

    let err = client
        .update_build_type_parameters("BT1", &params)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UnknownParameters(_)));
    assert!(err.to_string().contains("unknown.key"));
    get.assert_async().await;
    put.assert_async().await;
}

#[tokio::test]
async fn test_parameter_update_puts_whole_collection() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/httpAuth/app/rest/buildTypes/BT1/parameters")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "count": 2,
                "property": [
                    {"name": "game.platform", "value": "iOS"},
                    {"name": "p4.depot", "value": "//Games/Trunk"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/httpAuth/app/rest/buildTypes/BT1/parameters")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "count": 2,
            "property": [
                {"name": "game.platform", "value": "Android"},
                {"name": "p4.depot", "value": "//Games/Trunk"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 2}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut params = BTreeMap::new();
    params.insert("game.platform".to_string(), "Android".to_string());

    client
        .update_build_type_parameters("BT1", &params)
        .await
        .unwrap();
    put.assert_async().await;
}

#[tokio::test]
async fn test_no_content_and_raw_bodies() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/httpAuth/app/rest/buildTypes/BT1/template")
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("GET", "/httpAuth/app/rest/buildTypes/BT1/template")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("Games_Template")
        .create_async()
        .await;

    let client = client_for(&server);

    client.detach_template_from_build_type("BT1").await.unwrap();

    let raw = client
        .send_request(Method::GET, "buildTypes/BT1/template", HeaderMap::new(), None)
        .await
        .unwrap();
    assert_eq!(raw, ResponseBody::Raw(b"Games_Template".to_vec()));
}

#[tokio::test]
async fn test_error_statuses_are_surfaced() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/httpAuth/app/rest/projects")
        .with_status(401)
        .with_body("Incorrect username or password.")
        .create_async()
        .await;
    server
        .mock("POST", "/httpAuth/app/rest/buildQueue")
        .with_status(500)
        .with_body("Internal error")
        .create_async()
        .await;

    let client = client_for(&server);

    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, ApiError::AuthFailed(ref m) if m == "Incorrect username or password."));

    let err = client.run_build_type("BT1").await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::ServerError { status: 500, ref message } if message == "Internal error"
    ));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_run_build_type_posts_queue_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/httpAuth/app/rest/buildQueue")
        .match_header("content-type", "application/xml")
        .match_body(Matcher::Exact(
            r#"<build><buildType id="Games_Flash"/></build>"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 101, "state": "queued", "buildTypeId": "Games_Flash"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.run_build_type("Games_Flash").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_attach_template_sends_plain_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/httpAuth/app/rest/buildTypes/Games_Flash/template")
        .match_header("content-type", "text/plain")
        .match_body("Games_Template")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "Games_Template", "templateFlag": true}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .attach_template_to_build_type("Games_Template", "Games_Flash")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_client_over_caller_supplied_reqwest_client() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/httpAuth/app/rest/projects")
        .match_header("authorization", BASIC_AUTH)
        .match_header("user-agent", "tc-tests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 1, "project": [{"id": "_Root", "name": "<Root project>"}]}"#)
        .create_async()
        .await;

    let config = client_for(&server).config().clone();
    let http = reqwest::Client::builder()
        .user_agent("tc-tests")
        .build()
        .unwrap();
    let client = TeamCityClient::with_transport(config, ReqwestTransport::with_client(http));

    let projects = client.get_projects().await.unwrap();
    assert_eq!(projects["count"], 1);

    mock.assert_async().await;
}
