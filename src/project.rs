//! # Projects
//!
//! A [Project] bundles an operation and an entity registry with the text last generated from
//! them, in the shape it's persisted in. Projects are plain values: loading, saving and
//! downloading them is left to the caller, which is handed the generated files as
//! [ExportFile]s.
//!
//! ```
//! use graphql_scaffold::{config::GeneratorConfig, project::Project, schema::*};
//!
//! let mut project = Project::new("Blog");
//! project.types = TypeRegistry::with_starter_entity().into_entities();
//! project.regenerate(&GeneratorConfig::default());
//!
//! let names: Vec<String> = project
//!     .exports(&GeneratorConfig::default())
//!     .into_iter()
//!     .map(|file| file.filename)
//!     .collect();
//! assert_eq!(names, ["schema.graphql", "server.js"]);
//! ```

use crate::config::GeneratorConfig;
use crate::render::{render_operation, render_resolvers, render_sdl};
use crate::schema::EntityDef;
use crate::selection::OperationSpec;
#[cfg(feature = "json")]
use crate::error::Result;
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The title of projects that weren't given one.
pub const DEFAULT_PROJECT_TITLE: &str = "Untitled Project";

/// The filename the schema document is exported under.
pub const SCHEMA_FILENAME: &str = "schema.graphql";

/// The filename the server scaffold is exported under.
pub const SERVER_FILENAME: &str = "server.js";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase", default))]
pub struct Project {
    pub title: String,
    /// The operation last rendered from `parameters`.
    pub generated_query: String,
    pub parameters: OperationSpec,
    pub types: Vec<EntityDef>,
    /// The schema document last rendered from `types`.
    pub schema: String,
    /// The server scaffold last rendered from `types`.
    pub server_code: String,
}

/// A generated file, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
}

impl Project {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Project {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Re-renders the operation, the schema and the server scaffold from the project's
    /// definitions. Outputs that have nothing to render are set to the empty string.
    pub fn regenerate(&mut self, config: &GeneratorConfig) {
        self.generated_query = render_operation(&self.parameters);
        self.schema = render_sdl(&self.types);
        self.server_code = render_resolvers(&self.types, config);
        debug!(
            project = self.title.as_str(),
            query = !self.generated_query.is_empty(),
            schema = !self.schema.is_empty(),
            "Regenerated project"
        );
    }

    /// Renders the files of this project. Outputs that have nothing to render are left out, so
    /// a project without an operation name or without entities yields fewer files.
    pub fn exports(&self, config: &GeneratorConfig) -> Vec<ExportFile> {
        let mut files = Vec::with_capacity(3);

        let query = render_operation(&self.parameters);
        if !query.is_empty() {
            let stem = match self.parameters.operation_name.trim() {
                "" => config.query_file_stem.as_str(),
                name => name,
            };
            files.push(ExportFile {
                filename: format!("{stem}.graphql"),
                content: query,
            });
        }

        let schema = render_sdl(&self.types);
        if !schema.is_empty() {
            files.push(ExportFile {
                filename: SCHEMA_FILENAME.to_string(),
                content: schema,
            });
            files.push(ExportFile {
                filename: SERVER_FILENAME.to_string(),
                content: render_resolvers(&self.types, config),
            });
        }
        files
    }

    /// Reads a project from its JSON document. Missing keys fall back to their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project {
            title: DEFAULT_PROJECT_TITLE.to_string(),
            generated_query: String::new(),
            parameters: OperationSpec::default(),
            types: Vec::new(),
            schema: String::new(),
            server_code: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeRegistry;
    use crate::selection::{ArgumentDef, FieldPath};

    fn blog() -> Project {
        let mut project = Project::new("Blog");
        project.types = TypeRegistry::with_starter_entity().into_entities();
        project.parameters = OperationSpec::new("user");
        project
            .parameters
            .arguments_list
            .push(ArgumentDef::new("id", "ID!"));
        project.parameters.fields.add_field().unwrap();
        project
            .parameters
            .fields
            .update_name(&FieldPath::from([0]), "name")
            .unwrap();
        project
    }

    #[test]
    fn regenerates_outputs() {
        let mut project = blog();
        project.regenerate(&GeneratorConfig::default());
        assert!(project
            .generated_query
            .starts_with("query GeneratedQuery($id: ID!) {"));
        assert!(project.schema.starts_with("type User {"));
        assert!(project.server_code.contains("const typeDefs = gql`"));

        project.types.clear();
        project.regenerate(&GeneratorConfig::default());
        assert_eq!(project.schema, "");
        assert_eq!(project.server_code, "");
    }

    #[test]
    fn exports_renderable_files() {
        let config = GeneratorConfig::default();
        let files = blog().exports(&config);
        let names: Vec<&str> = files.iter().map(|file| file.filename.as_str()).collect();
        assert_eq!(names, ["user.graphql", "schema.graphql", "server.js"]);
        assert_eq!(files[1].content, render_sdl(&blog().types));

        let mut project = blog();
        project.parameters.operation_name.clear();
        project.types.clear();
        assert!(project.exports(&config).is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_round_trip() {
        let mut project = blog();
        project.regenerate(&GeneratorConfig::default());
        let json = project.to_json().unwrap();
        assert!(json.contains("\"generatedQuery\""));
        assert!(json.contains("\"serverCode\""));
        assert_eq!(Project::from_json(&json).unwrap(), project);
    }

    #[cfg(feature = "json")]
    #[test]
    fn reads_sparse_documents() {
        let project = Project::from_json(
            r#"{
                "user": "64b7f0c2e4b0a1a2b3c4d5e6",
                "parameters": { "operationName": "posts", "fields": [{ "name": "title" }] },
                "types": [{
                    "name": "Post",
                    "fields": [{ "name": "id", "type": "ID", "required": true, "isIdField": true }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(project.title, DEFAULT_PROJECT_TITLE);
        assert_eq!(project.parameters.custom_operation_name, "GeneratedQuery");
        assert_eq!(project.types[0].id_field().map(|field| field.name.as_str()), Some("id"));
        assert_eq!(
            render_operation(&project.parameters),
            "query GeneratedQuery {\n  posts {\n    title\n  }\n}"
        );

        let error = Project::from_json("{ \"title\": 4 }").unwrap_err();
        assert_eq!(error.error_type(), crate::error::ErrorType::Serialization);
    }
}
