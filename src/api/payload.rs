//
//  teamcity-client
//  api/payload.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # XML Request Bodies
//!
//! TeamCity's creation endpoints take small XML documents. They are written
//! with `quick-xml` so that names and ids supplied by the caller are escaped
//! as attribute values rather than spliced into markup.
//!
//! ```text
//! POST projects                     <newProjectDescription name=".." id=".."><parentProject locator="id:.."/></newProjectDescription>
//! POST projects/id:<p>/buildTypes   <newBuildTypeDescription name=".." [sourceBuildTypeLocator="id:.."] copyAllAssociatedSettings="true" shareVCSRoots="false"/>
//! POST buildQueue                   <build><buildType id=".."/></build>
//! ```

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::api::common::ApiError;

/// Formats an `id:` locator.
///
/// ```rust
/// use teamcity_client::api::payload::id_locator;
///
/// assert_eq!(id_locator("Games_Template"), "id:Games_Template");
/// ```
pub fn id_locator(id: &str) -> String {
    format!("id:{}", id)
}

struct XmlDocument {
    writer: Writer<Vec<u8>>,
}

impl XmlDocument {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), ApiError> {
        self.writer
            .write_event(event)
            .map_err(|e| ApiError::Payload(e.to_string()))
    }

    fn start(&mut self, element: BytesStart<'_>) -> Result<(), ApiError> {
        self.event(Event::Start(element))
    }

    fn empty(&mut self, element: BytesStart<'_>) -> Result<(), ApiError> {
        self.event(Event::Empty(element))
    }

    fn end(&mut self, name: &str) -> Result<(), ApiError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn finish(self) -> Result<String, ApiError> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| ApiError::Payload(e.to_string()))
    }
}

/// Body for creating a blank project under `parent_project_id`.
pub fn new_project_description(
    name: &str,
    project_id: &str,
    parent_project_id: &str,
) -> Result<String, ApiError> {
    let mut doc = XmlDocument::new();

    let mut root = BytesStart::new("newProjectDescription");
    root.push_attribute(("name", name));
    root.push_attribute(("id", project_id));
    doc.start(root)?;

    let locator = id_locator(parent_project_id);
    let mut parent = BytesStart::new("parentProject");
    parent.push_attribute(("locator", locator.as_str()));
    doc.empty(parent)?;

    doc.end("newProjectDescription")?;
    doc.finish()
}

/// Body for creating a build type, optionally as a copy of `source_build_type_id`.
///
/// All associated settings are copied and VCS roots are never shared.
pub fn new_build_type_description(
    name: &str,
    source_build_type_id: Option<&str>,
) -> Result<String, ApiError> {
    let mut doc = XmlDocument::new();

    let mut element = BytesStart::new("newBuildTypeDescription");
    element.push_attribute(("name", name));
    if let Some(source) = source_build_type_id {
        let locator = id_locator(source);
        element.push_attribute(("sourceBuildTypeLocator", locator.as_str()));
    }
    element.push_attribute(("copyAllAssociatedSettings", "true"));
    element.push_attribute(("shareVCSRoots", "false"));
    doc.empty(element)?;

    doc.finish()
}

/// Body for adding a build of `build_type_id` to the build queue.
pub fn build_queue_request(build_type_id: &str) -> Result<String, ApiError> {
    let mut doc = XmlDocument::new();

    doc.start(BytesStart::new("build"))?;
    let mut build_type = BytesStart::new("buildType");
    build_type.push_attribute(("id", build_type_id));
    doc.empty(build_type)?;
    doc.end("build")?;

    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_description() {
        let xml = new_project_description("Games", "Projects_Games", "_Root").unwrap();
        assert_eq!(
            xml,
            r#"<newProjectDescription name="Games" id="Projects_Games"><parentProject locator="id:_Root"/></newProjectDescription>"#
        );
    }

    #[test]
    fn test_new_build_type_description_blank_and_copy() {
        let blank = new_build_type_description("Demo", None).unwrap();
        assert_eq!(
            blank,
            r#"<newBuildTypeDescription name="Demo" copyAllAssociatedSettings="true" shareVCSRoots="false"/>"#
        );

        let copy = new_build_type_description("Demo Copy", Some("Proj1_Demo")).unwrap();
        assert_eq!(
            copy,
            r#"<newBuildTypeDescription name="Demo Copy" sourceBuildTypeLocator="id:Proj1_Demo" copyAllAssociatedSettings="true" shareVCSRoots="false"/>"#
        );
    }

    #[test]
    fn test_build_queue_request() {
        let xml = build_queue_request("Proj1_Demo").unwrap();
        assert_eq!(xml, r#"<build><buildType id="Proj1_Demo"/></build>"#);
    }

    #[test]
    fn test_markup_in_names_is_escaped() {
        let xml = new_project_description(r#"A "quoted" <b>&</b> name"#, "P'1", "_Root").unwrap();
        assert!(xml.contains("&quot;quoted&quot;"));
        assert!(xml.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(xml.contains("P&apos;1"));
        assert!(!xml.contains("<b>"));
    }
}
