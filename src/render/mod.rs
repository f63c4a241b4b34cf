//! # Text Generation
//!
//! The `graphql_scaffold::render` module turns definition trees into text: a schema document for
//! a list of entities, an executable operation for an [`OperationSpec`], and the source of a
//! server scaffold serving the schema.
//!
//! Renderers lower their input into the document nodes of [`crate::ast`] and print those, so the
//! output of every renderer is deterministic and rendering twice yields the same text. None of
//! them fail: when there's nothing valid to render they return the empty string.
//!
//! ```
//! use graphql_scaffold::{config::GeneratorConfig, render::*, schema::*};
//!
//! let registry = TypeRegistry::with_starter_entity();
//! let schema = render_sdl(registry.entities());
//! assert!(schema.starts_with("type User {\n  id: ID!\n  name: String!\n}"));
//!
//! let server = render_resolvers(registry.entities(), &GeneratorConfig::default());
//! assert!(server.contains("getUser: (_, { id }) => {"));
//! ```
//!
//! [`OperationSpec`]: crate::selection::OperationSpec

mod operation;
mod resolvers;
mod sdl;

pub use operation::{render_operation, ArgumentVerdict, OperationRenderer};
pub use resolvers::{render_resolvers, ResolverRenderer};
pub use sdl::render_sdl;
