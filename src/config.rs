//! # Generator Configuration
//!
//! Limits and defaults shared by the selection tree and the renderers. A [GeneratorConfig] is a
//! plain value; callers create one per embedding and pass it by reference.
//!
//! With the `json` feature enabled the configuration may be loaded from JSON, where any missing
//! key falls back to its default:
//!
//! ```
//! # #[cfg(feature = "json")]
//! # {
//! use graphql_scaffold::config::GeneratorConfig;
//!
//! let config: GeneratorConfig = serde_json::from_str(r#"{ "maxDepth": 3 }"#).unwrap();
//! assert_eq!(config.max_depth, 3);
//! assert_eq!(config.server_port, 4000);
//! # }
//! ```

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// The default nesting limit of selection trees.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// The default port the generated server scaffold listens on.
pub const DEFAULT_SERVER_PORT: u16 = 4000;

/// The default file stem of an exported operation when it has no operation name.
pub const DEFAULT_QUERY_FILE_STEM: &str = "generated-query";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase", default))]
pub struct GeneratorConfig {
    /// Selection nodes may only be created at depths strictly below this value. Top-level
    /// fields have a depth of zero.
    pub max_depth: usize,
    /// The port written into the generated server scaffold.
    pub server_port: u16,
    /// File stem used for exported operations that have no operation name.
    pub query_file_stem: String,
}

impl GeneratorConfig {
    /// Returns a default configuration with a different nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        GeneratorConfig {
            max_depth,
            ..Default::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            server_port: DEFAULT_SERVER_PORT,
            query_file_stem: DEFAULT_QUERY_FILE_STEM.to_string(),
        }
    }
}
