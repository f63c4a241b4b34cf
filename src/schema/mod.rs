//! # Entity Definitions
//!
//! The `graphql_scaffold::schema` module contains the type registry: an ordered list of
//! [EntityDef]s, each with a list of [FieldDef]s, and the editing operations that keep its
//! conventions intact (capitalized entity names, a protected identifier field).
//!
//! ```
//! use graphql_scaffold::schema::*;
//!
//! let mut registry = TypeRegistry::new();
//! let post = registry.add_entity("post");
//! registry
//!     .push_field(post, FieldDef::new("tags", ScalarType::String).list().required())
//!     .unwrap();
//! assert_eq!(registry.entities()[post].name, "Post");
//! ```
//!
//! The registry is rendered using [`crate::render::render_sdl`] and
//! [`crate::render::render_resolvers`].

mod definitions;
mod registry;

pub use definitions::*;
pub use registry::*;
