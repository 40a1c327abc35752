//
//  teamcity-client
//  api/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity Entity Views
//!
//! Typed views over the JSON the REST API returns for projects, build types
//! and parameters. Only the fields the client and CLI read are modelled;
//! anything else in the response is ignored on deserialization.
//!
//! These are read-only views. Writes that send a fetched document back to the
//! server (the parameter update) work on the raw `serde_json::Value` so no
//! server-side field is dropped.
//!
//! ## Example
//!
//! ```rust
//! use teamcity_client::api::models::BuildTypeList;
//!
//! let json = r#"{"count": 1, "buildType": [{"id": "Games_Flash", "name": "Flash", "projectId": "Games"}]}"#;
//! let list: BuildTypeList = serde_json::from_str(json).unwrap();
//! assert_eq!(list.count, 1);
//! assert_eq!(list.build_type[0].project_id.as_deref(), Some("Games"));
//! ```

use serde::{Deserialize, Serialize};

/// `GET projects`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub count: u32,

    #[serde(default)]
    pub project: Vec<ProjectRef>,
}

/// A project as it appears in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    /// External id, e.g. `Projects_Games`. The root project is `_Root`.
    pub id: String,

    pub name: String,

    #[serde(default, rename = "parentProjectId")]
    pub parent_project_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "webUrl")]
    pub web_url: Option<String>,
}

/// `GET buildTypes`, also the shape of a build type's `templates` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildTypeList {
    #[serde(default)]
    pub count: u32,

    #[serde(default, rename = "buildType")]
    pub build_type: Vec<BuildTypeRef>,
}

/// A build type (or template) as it appears in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildTypeRef {
    pub id: String,

    pub name: String,

    #[serde(default, rename = "projectId")]
    pub project_id: Option<String>,

    #[serde(default, rename = "projectName")]
    pub project_name: Option<String>,

    #[serde(default, rename = "webUrl")]
    pub web_url: Option<String>,
}

/// `GET buildTypes/<id>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildTypeDetail {
    pub id: String,

    pub name: String,

    #[serde(default, rename = "projectId")]
    pub project_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "webUrl")]
    pub web_url: Option<String>,

    /// Templates the build type inherits from. Absent on servers that
    /// report no templates.
    #[serde(default)]
    pub templates: Option<BuildTypeList>,
}

impl BuildTypeDetail {
    /// Returns `true` if `template_id` is among this build type's templates.
    pub fn uses_template(&self, template_id: &str) -> bool {
        self.templates
            .as_ref()
            .map(|t| t.build_type.iter().any(|bt| bt.id == template_id))
            .unwrap_or(false)
    }
}

/// `GET buildTypes/<id>/parameters`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterList {
    #[serde(default)]
    pub count: u32,

    #[serde(default)]
    pub property: Vec<Parameter>,
}

/// A single build parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Password parameters come back without a value.
    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub inherited: Option<bool>,
}

/// Response of `POST buildQueue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedBuild {
    pub id: u64,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default, rename = "buildTypeId")]
    pub build_type_id: Option<String>,

    #[serde(default, rename = "webUrl")]
    pub web_url: Option<String>,
}
