//
//  teamcity-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the TeamCity REST API
//!
//! [`TeamCityClient`] maps each supported TeamCity operation onto one request
//! against `http://<server>:<port>/httpAuth/app/rest`. Every request goes
//! through [`TeamCityClient::send_request`], which attaches basic-auth
//! credentials and interprets the response:
//!
//! - non-success status: an [`ApiError`] (also logged at `warn`)
//! - `204 No Content`: [`ResponseBody::Empty`]
//! - JSON content type: [`ResponseBody::Json`]
//! - anything else: [`ResponseBody::Raw`]
//!
//! There is no retry or pagination layer; callers see exactly what
//! the server returned for one request.

use std::collections::{BTreeMap, HashSet};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::common::{error_from_status, ApiError, ResponseBody};
use crate::api::models::{BuildTypeDetail, BuildTypeList, BuildTypeRef, ParameterList, ProjectList, QueuedBuild};
use crate::api::payload;
use crate::api::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::config::ClientConfig;

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_XML: &str = "application/xml";
const TEXT_PLAIN: &str = "text/plain";

/// Builds the `Content-Type` + `Accept: application/json` header pair.
fn headers(content_type: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers
}

/// Returns `true` when the MIME essence of a `Content-Type` value is `application/json`.
///
/// Parameters such as `charset` are ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(APPLICATION_JSON))
        .unwrap_or(false)
}

/// The TeamCity REST API client.
///
/// Holds the immutable connection settings and one transport (the HTTP
/// session) reused by every call.
///
/// # Example
///
/// ```rust,no_run
/// use teamcity_client::api::TeamCityClient;
/// use teamcity_client::config::ClientConfig;
///
/// # async fn example() -> Result<(), teamcity_client::api::ApiError> {
/// let client = TeamCityClient::new(ClientConfig::new("127.0.0.1", 8111, "admin", "admin"))?;
///
/// let id = client.create_build_type("My Flash Card Game2", "Projects_Games").await?;
/// client.attach_template_to_build_type("Games_Template", &id).await?;
/// client.run_build_type(&id).await?;
/// # Ok(())
/// # }
/// ```
pub struct TeamCityClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl TeamCityClient {
    /// Creates a client using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if the settings cannot address a
    /// server, or [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport<T: Transport + 'static>(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns `http://<server>:<port>/httpAuth/app/rest`.
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    /// Resolves a path relative to the base URL.
    ///
    /// ```rust
    /// use teamcity_client::api::TeamCityClient;
    /// use teamcity_client::config::ClientConfig;
    ///
    /// let client = TeamCityClient::new(ClientConfig::new("ci", 8111, "admin", "pw")).unwrap();
    /// assert_eq!(client.url("buildQueue"), "http://ci:8111/httpAuth/app/rest/buildQueue");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Sends one authenticated request and interprets the response.
    ///
    /// # Errors
    ///
    /// - Transport failures: [`ApiError::Network`]
    /// - Non-success statuses: the variant chosen by [`error_from_status`]
    /// - A JSON content type with an unparsable body: [`ApiError::Json`]
    pub async fn send_request(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<ResponseBody, ApiError> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let response = self
            .transport
            .execute(HttpRequest {
                method: method.clone(),
                url: url.clone(),
                headers,
                body,
                credentials: self.config.credentials().clone(),
            })
            .await?;

        if !response.status.is_success() {
            let text = response.text();
            warn!("{} {} failed with {}: {}", method, url, response.status, text.trim());
            return Err(error_from_status(response.status, &text));
        }

        if response.status == StatusCode::NO_CONTENT {
            return Ok(ResponseBody::Empty);
        }

        match response.content_type.as_deref() {
            Some(content_type) if is_json_content_type(content_type) => {
                Ok(ResponseBody::Json(serde_json::from_slice(&response.body)?))
            }
            _ => Ok(ResponseBody::Raw(response.body)),
        }
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send_request(Method::GET, path, headers(APPLICATION_JSON), None)
            .await?
            .into_json()
    }

    async fn get_typed<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(serde_json::from_value(self.get(path).await?)?)
    }

    /// Creates an empty project `project_id` named `name` under `parent_project_id`.
    pub async fn create_new_blank_project(
        &self,
        name: &str,
        project_id: &str,
        parent_project_id: &str,
    ) -> Result<(), ApiError> {
        let body = payload::new_project_description(name, project_id, parent_project_id)?;
        self.send_request(Method::POST, "projects", headers(APPLICATION_XML), Some(body))
            .await?;
        Ok(())
    }

    /// Copies `source_build_type_id` into `destination_project_id` as `new_name`.
    ///
    /// All associated settings are copied; VCS roots are not shared.
    pub async fn copy_build_type(
        &self,
        new_name: &str,
        destination_project_id: &str,
        source_build_type_id: &str,
    ) -> Result<(), ApiError> {
        let body = payload::new_build_type_description(new_name, Some(source_build_type_id))?;
        let path = format!("projects/{}/buildTypes", payload::id_locator(destination_project_id));
        self.send_request(Method::POST, &path, headers(APPLICATION_XML), Some(body))
            .await?;
        Ok(())
    }

    /// Attaches `template_id` to a build type, replacing any template already attached.
    pub async fn attach_template_to_build_type(
        &self,
        template_id: &str,
        build_type_id: &str,
    ) -> Result<(), ApiError> {
        let path = format!("buildTypes/{}/template", build_type_id);
        self.send_request(
            Method::PUT,
            &path,
            headers(TEXT_PLAIN),
            Some(template_id.to_string()),
        )
        .await?;
        Ok(())
    }

    /// Removes the template association of a build type.
    pub async fn detach_template_from_build_type(&self, build_type_id: &str) -> Result<(), ApiError> {
        let path = format!("buildTypes/{}/template", build_type_id);
        self.send_request(Method::DELETE, &path, HeaderMap::new(), None)
            .await?;
        Ok(())
    }

    /// Creates a blank build type and returns the id the server assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the response is not JSON
    /// or carries no string `id`.
    pub async fn create_build_type(
        &self,
        name: &str,
        destination_project_id: &str,
    ) -> Result<String, ApiError> {
        let body = payload::new_build_type_description(name, None)?;
        let path = format!("projects/{}/buildTypes", payload::id_locator(destination_project_id));
        let response = self
            .send_request(Method::POST, &path, headers(APPLICATION_XML), Some(body))
            .await?
            .into_json()?;

        response
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::UnexpectedResponse("created build type has no 'id' field".to_string())
            })
    }

    /// Adds a build of `build_type_id` to the build queue.
    pub async fn run_build_type(&self, build_type_id: &str) -> Result<(), ApiError> {
        self.enqueue(build_type_id).await?;
        Ok(())
    }

    /// Like [`run_build_type`](Self::run_build_type), returning the queue entry.
    pub async fn queue_build(&self, build_type_id: &str) -> Result<QueuedBuild, ApiError> {
        let response = self.enqueue(build_type_id).await?.into_json()?;
        Ok(serde_json::from_value(response)?)
    }

    async fn enqueue(&self, build_type_id: &str) -> Result<ResponseBody, ApiError> {
        let body = payload::build_queue_request(build_type_id)?;
        self.send_request(Method::POST, "buildQueue", headers(APPLICATION_XML), Some(body))
            .await
    }

    /// Lists all projects.
    pub async fn get_projects(&self) -> Result<Value, ApiError> {
        self.get("projects").await
    }

    /// Lists all build types.
    pub async fn get_build_types(&self) -> Result<Value, ApiError> {
        self.get("buildTypes").await
    }

    /// Returns the full description of one build type.
    pub async fn get_build_type(&self, build_type_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("buildTypes/{}", build_type_id)).await
    }

    /// Returns `{"count": n, "property": [{"name": .., "value": ..}, ..]}`.
    pub async fn get_build_type_parameters(&self, build_type_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("buildTypes/{}/parameters", build_type_id))
            .await
    }

    /// Sets new values for existing parameters of a build type.
    ///
    /// The current collection is fetched, every name in `params` must already
    /// exist in it, the matching values are replaced and the whole collection
    /// is written back. Nothing guards against a concurrent writer between the
    /// read and the write.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownParameters`] listing every name the server
    /// does not know. No write is attempted in that case.
    pub async fn update_build_type_parameters(
        &self,
        build_type_id: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<(), ApiError> {
        let mut server_params = self.get_build_type_parameters(build_type_id).await?;

        let known: HashSet<&str> = server_params
            .get("property")
            .and_then(Value::as_array)
            .map(|props| {
                props
                    .iter()
                    .filter_map(|p| p.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default();

        let unknown: Vec<String> = params
            .keys()
            .filter(|name| !known.contains(name.as_str()))
            .cloned()
            .collect();

        if !unknown.is_empty() {
            warn!(
                "refusing to update {}: unknown parameters {:?}",
                build_type_id, unknown
            );
            return Err(ApiError::UnknownParameters(unknown));
        }

        if let Some(props) = server_params
            .get_mut("property")
            .and_then(Value::as_array_mut)
        {
            for prop in props.iter_mut() {
                let new_value = prop
                    .get("name")
                    .and_then(Value::as_str)
                    .and_then(|name| params.get(name))
                    .cloned();
                if let (Some(value), Some(obj)) = (new_value, prop.as_object_mut()) {
                    obj.insert("value".to_string(), Value::String(value));
                }
            }
        }

        let body = serde_json::to_string(&server_params)?;
        let path = format!("buildTypes/{}/parameters", build_type_id);
        self.send_request(Method::PUT, &path, headers(APPLICATION_JSON), Some(body))
            .await?;
        Ok(())
    }

    /// Typed form of [`get_projects`](Self::get_projects).
    pub async fn project_list(&self) -> Result<ProjectList, ApiError> {
        self.get_typed("projects").await
    }

    /// Typed form of [`get_build_types`](Self::get_build_types).
    pub async fn build_type_list(&self) -> Result<BuildTypeList, ApiError> {
        self.get_typed("buildTypes").await
    }

    /// Typed form of [`get_build_type`](Self::get_build_type).
    pub async fn build_type_detail(&self, build_type_id: &str) -> Result<BuildTypeDetail, ApiError> {
        self.get_typed(&format!("buildTypes/{}", build_type_id))
            .await
    }

    /// Typed form of [`get_build_type_parameters`](Self::get_build_type_parameters).
    pub async fn parameter_list(&self, build_type_id: &str) -> Result<ParameterList, ApiError> {
        self.get_typed(&format!("buildTypes/{}/parameters", build_type_id))
            .await
    }

    /// Finds the build types that inherit from `template_id`.
    ///
    /// Fetches the detail of every build type, one request at a time.
    pub async fn build_types_using_template(
        &self,
        template_id: &str,
    ) -> Result<Vec<BuildTypeRef>, ApiError> {
        let mut matches = Vec::new();
        for build_type in self.build_type_list().await?.build_type {
            let detail = self.build_type_detail(&build_type.id).await?;
            if detail.uses_template(template_id) {
                matches.push(build_type);
            }
        }
        Ok(matches)
    }

    /// Creates a build type, attaches a template and fills in its parameters.
    ///
    /// TeamCity renames duplicates on its own, so an existing build type with
    /// the same name (ignoring case) in the project is only reported as a
    /// warning. Parameters are updated only when `params` is non-empty and
    /// must be known to the new build type (usually through the template).
    ///
    /// Returns the id of the new build type.
    pub async fn create_build_type_from_template(
        &self,
        name: &str,
        destination_project_id: &str,
        template_id: Option<&str>,
        params: &BTreeMap<String, String>,
    ) -> Result<String, ApiError> {
        let existing = self.build_type_list().await?;
        let duplicate = existing.build_type.iter().any(|bt| {
            bt.project_id.as_deref() == Some(destination_project_id)
                && bt.name.to_lowercase() == name.to_lowercase()
        });
        if duplicate {
            warn!(
                "build type name '{}' is already used in project {}",
                name, destination_project_id
            );
        }

        let id = self.create_build_type(name, destination_project_id).await?;

        if let Some(template_id) = template_id {
            self.attach_template_to_build_type(template_id, &id).await?;
        }

        if !params.is_empty() {
            self.update_build_type_parameters(&id, params).await?;
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::api::transport::HttpResponse;

    #[derive(Clone, Default)]
    struct FakeTransport {
        requests: Arc<Mutex<Vec<HttpRequest>>>,
        responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    }

    impl FakeTransport {
        fn respond(&self, status: u16, content_type: Option<&str>, body: &str) -> &Self {
            self.responses.lock().unwrap().push_back(HttpResponse {
                status: StatusCode::from_u16(status).unwrap(),
                content_type: content_type.map(str::to_string),
                body: body.as_bytes().to_vec(),
            });
            self
        }

        fn json(&self, body: Value) -> &Self {
            self.respond(200, Some("application/json"), &body.to_string())
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no canned response left"))
        }
    }

    fn client(transport: &FakeTransport) -> TeamCityClient {
        TeamCityClient::with_transport(
            ClientConfig::new("127.0.0.1", 8111, "admin", "secret"),
            transport.clone(),
        )
    }

    fn header<'a>(request: &'a HttpRequest, name: reqwest::header::HeaderName) -> Option<&'a str> {
        request.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_send_request_resolves_url_and_attaches_credentials() {
        let transport = FakeTransport::default();
        transport.json(json!({"count": 0}));

        client(&transport).get_projects().await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(
            requests[0].url,
            "http://127.0.0.1:8111/httpAuth/app/rest/projects"
        );
        assert_eq!(requests[0].credentials.username, "admin");
        assert_eq!(requests[0].credentials.password, "secret");
        assert_eq!(header(&requests[0], ACCEPT), Some("application/json"));
    }

    #[tokio::test]
    async fn test_no_content_is_empty_for_every_method() {
        let transport = FakeTransport::default();
        let client = client(&transport);

        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            transport.respond(204, Some("application/json"), "");
            let body = client
                .send_request(method, "buildTypes/X/template", HeaderMap::new(), None)
                .await
                .unwrap();
            assert_eq!(body, ResponseBody::Empty);
            assert!(body.is_empty());
            assert!(body.as_json().is_none());
        }
    }

    #[tokio::test]
    async fn test_json_is_parsed_and_other_content_is_raw() {
        let transport = FakeTransport::default();
        transport
            .respond(200, Some("application/json;charset=UTF-8"), r#"{"id": "A"}"#)
            .respond(200, Some("text/plain"), "Games_Template");
        let client = client(&transport);

        let json = client
            .send_request(Method::GET, "buildTypes/A", HeaderMap::new(), None)
            .await
            .unwrap();
        assert_eq!(json, ResponseBody::Json(json!({"id": "A"})));
        assert_eq!(json.as_json().and_then(|v| v["id"].as_str()), Some("A"));
        assert!(!json.is_empty());

        let raw = client
            .send_request(Method::GET, "buildTypes/A/template", HeaderMap::new(), None)
            .await
            .unwrap();
        assert_eq!(raw, ResponseBody::Raw(b"Games_Template".to_vec()));
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_swallowed() {
        let transport = FakeTransport::default();
        transport.respond(404, Some("text/plain"), "No build type found by id 'Nope'.");

        let err = client(&transport).get_build_type("Nope").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m.contains("Nope")));
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_a_json_error() {
        let transport = FakeTransport::default();
        transport.respond(200, Some("application/json"), "not json");

        let err = client(&transport).get_projects().await.unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_get_on_non_json_response_is_unexpected() {
        let transport = FakeTransport::default();
        transport
            .respond(200, Some("text/plain"), "Projects_Games")
            .respond(204, None, "");
        let client = client(&transport);

        let err = client.get_projects().await.unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedResponse(_)));

        let err = client.get_build_type_parameters("BT1").await.unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_client_keeps_its_connection_settings() {
        let client = client(&FakeTransport::default());
        assert_eq!(client.config().port(), 8111);
        assert_eq!(client.config().username(), "admin");
        assert_eq!(client.base_url(), "http://127.0.0.1:8111/httpAuth/app/rest");
    }

    #[tokio::test]
    async fn test_create_new_blank_project_request() {
        let transport = FakeTransport::default();
        transport.json(json!({"id": "Projects_Games", "name": "Games"}));

        client(&transport)
            .create_new_blank_project("Games", "Projects_Games", "_Root")
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert!(request.url.ends_with("/httpAuth/app/rest/projects"));
        assert_eq!(header(request, CONTENT_TYPE), Some("application/xml"));
        assert_eq!(
            request.body.as_deref(),
            Some(r#"<newProjectDescription name="Games" id="Projects_Games"><parentProject locator="id:_Root"/></newProjectDescription>"#)
        );
    }

    #[tokio::test]
    async fn test_copy_build_type_request() {
        let transport = FakeTransport::default();
        transport.json(json!({"id": "Proj2_Copy"}));

        client(&transport)
            .copy_build_type("Copy", "Proj2", "Proj1_Demo")
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert!(request
            .url
            .ends_with("/httpAuth/app/rest/projects/id:Proj2/buildTypes"));
        let body = request.body.as_deref().unwrap();
        assert!(body.contains(r#"sourceBuildTypeLocator="id:Proj1_Demo""#));
        assert!(body.contains(r#"copyAllAssociatedSettings="true""#));
        assert!(body.contains(r#"shareVCSRoots="false""#));
    }

    #[tokio::test]
    async fn test_attach_and_detach_template_requests() {
        let transport = FakeTransport::default();
        transport
            .respond(200, Some("application/json"), r#"{"id": "Games_Template"}"#)
            .respond(204, None, "");
        let client = client(&transport);

        client
            .attach_template_to_build_type("Games_Template", "Games_Flash")
            .await
            .unwrap();
        client
            .detach_template_from_build_type("Games_Flash")
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert!(requests[0].url.ends_with("buildTypes/Games_Flash/template"));
        assert_eq!(header(&requests[0], CONTENT_TYPE), Some("text/plain"));
        assert_eq!(requests[0].body.as_deref(), Some("Games_Template"));

        assert_eq!(requests[1].method, Method::DELETE);
        assert!(requests[1].url.ends_with("buildTypes/Games_Flash/template"));
        assert!(requests[1].body.is_none());
    }

    #[tokio::test]
    async fn test_create_build_type_returns_id() {
        let transport = FakeTransport::default();
        transport.json(json!({"id": "Proj1_Demo", "name": "Demo", "projectId": "Proj1"}));

        let id = client(&transport)
            .create_build_type("Demo", "Proj1")
            .await
            .unwrap();

        assert_eq!(id, "Proj1_Demo");
        let request = &transport.requests()[0];
        assert!(request.url.ends_with("projects/id:Proj1/buildTypes"));
        assert_eq!(
            request.body.as_deref(),
            Some(r#"<newBuildTypeDescription name="Demo" copyAllAssociatedSettings="true" shareVCSRoots="false"/>"#)
        );
    }

    #[tokio::test]
    async fn test_create_build_type_without_id_fails() {
        let transport = FakeTransport::default();
        transport.json(json!({"name": "Demo"}));

        let err = client(&transport)
            .create_build_type("Demo", "Proj1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_run_build_type_posts_to_queue() {
        let transport = FakeTransport::default();
        transport.json(json!({"id": 42, "state": "queued", "buildTypeId": "Proj1_Demo"}));

        let queued = client(&transport).queue_build("Proj1_Demo").await.unwrap();

        assert_eq!(queued.id, 42);
        assert_eq!(queued.state.as_deref(), Some("queued"));
        let request = &transport.requests()[0];
        assert!(request.url.ends_with("/httpAuth/app/rest/buildQueue"));
        assert_eq!(
            request.body.as_deref(),
            Some(r#"<build><buildType id="Proj1_Demo"/></build>"#)
        );
    }

    #[tokio::test]
    async fn test_build_type_listing() {
        let transport = FakeTransport::default();
        transport.json(json!({
            "count": 2,
            "buildType": [
                {"id": "A", "name": "Alpha", "projectId": "P"},
                {"id": "B", "name": "Beta", "projectId": "P"}
            ]
        }));

        let list = client(&transport).build_type_list().await.unwrap();
        assert_eq!(list.count, 2);
        let names: Vec<&str> = list.build_type.iter().map(|bt| bt.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn test_update_parameters_changes_only_named_values() {
        let transport = FakeTransport::default();
        transport
            .json(json!({
                "count": 3,
                "href": "/app/rest/buildTypes/id:BT1/parameters",
                "property": [
                    {"name": "game.platform", "value": "iOS", "inherited": true},
                    {"name": "game.version", "value": "1.0.0"},
                    {"name": "p4.depot", "value": "//Games/Trunk"}
                ]
            }))
            .json(json!({"count": 3}));

        let mut params = BTreeMap::new();
        params.insert("game.platform".to_string(), "Android".to_string());
        params.insert("game.version".to_string(), "1.0.2044".to_string());

        client(&transport)
            .update_build_type_parameters("BT1", &params)
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, Method::PUT);
        assert!(requests[1].url.ends_with("buildTypes/BT1/parameters"));
        assert_eq!(header(&requests[1], CONTENT_TYPE), Some("application/json"));

        let sent: Value = serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            sent,
            json!({
                "count": 3,
                "href": "/app/rest/buildTypes/id:BT1/parameters",
                "property": [
                    {"name": "game.platform", "value": "Android", "inherited": true},
                    {"name": "game.version", "value": "1.0.2044"},
                    {"name": "p4.depot", "value": "//Games/Trunk"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_update_parameters_rejects_unknown_names_without_put() {
        let transport = FakeTransport::default();
        transport.json(json!({
            "count": 1,
            "property": [{"name": "known.key", "value": "y"}]
        }));

        let mut params = BTreeMap::new();
        params.insert("unknown.key".to_string(), "x".to_string());

        let err = client(&transport)
            .update_build_type_parameters("BT1", &params)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnknownParameters(ref names) if names == &["unknown.key"]));
        assert!(err.to_string().contains("unknown.key"));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
    }

    #[tokio::test]
    async fn test_build_types_using_template() {
        let transport = FakeTransport::default();
        transport
            .json(json!({
                "count": 2,
                "buildType": [{"id": "A", "name": "Alpha"}, {"id": "B", "name": "Beta"}]
            }))
            .json(json!({"id": "A", "name": "Alpha", "templates": {"count": 0}}))
            .json(json!({
                "id": "B",
                "name": "Beta",
                "templates": {"count": 1, "buildType": [{"id": "Games_Template", "name": "T"}]}
            }));

        let using = client(&transport)
            .build_types_using_template("Games_Template")
            .await
            .unwrap();

        assert_eq!(using.len(), 1);
        assert_eq!(using[0].id, "B");
    }

    #[tokio::test]
    async fn test_create_build_type_from_template_flow() {
        let transport = FakeTransport::default();
        transport
            .json(json!({"count": 0, "buildType": []}))
            .json(json!({"id": "Games_FlashCard2", "name": "Flash Card 2"}))
            .json(json!({"id": "Games_Template"}))
            .json(json!({"count": 1, "property": [{"name": "game.platform", "value": "PLACEHOLDER"}]}))
            .json(json!({"count": 1}));

        let mut params = BTreeMap::new();
        params.insert("game.platform".to_string(), "Android".to_string());

        let id = client(&transport)
            .create_build_type_from_template("Flash Card 2", "Games", Some("Games_Template"), &params)
            .await
            .unwrap();

        assert_eq!(id, "Games_FlashCard2");
        let methods: Vec<Method> = transport.requests().into_iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            [Method::GET, Method::POST, Method::PUT, Method::GET, Method::PUT]
        );
    }

    #[tokio::test]
    async fn test_create_build_type_from_template_with_duplicate_name_still_creates() {
        let transport = FakeTransport::default();
        transport
            .json(json!({
                "count": 2,
                "buildType": [
                    {"id": "Games_FlashCard2", "name": "FLASH CARD 2", "projectId": "Games"},
                    {"id": "Other_FlashCard2", "name": "Flash Card 2", "projectId": "Other"}
                ]
            }))
            .json(json!({"id": "Games_FlashCard2_2", "name": "Flash Card 2"}));

        let id = client(&transport)
            .create_build_type_from_template("Flash Card 2", "Games", None, &BTreeMap::new())
            .await
            .unwrap();

        assert_eq!(id, "Games_FlashCard2_2");
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, Method::POST);
        assert!(requests[1].url.ends_with("projects/id:Games/buildTypes"));
    }

    #[test]
    fn test_is_json_content_type() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(!is_json_content_type("application/xml"));
        assert!(!is_json_content_type("text/plain"));
    }
}
