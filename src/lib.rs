//! `graphql_scaffold`
//! =========
//!
//! _Deterministic GraphQL text generation from editable definition trees._
//!
//! The **`graphql_scaffold`** library keeps two kinds of definition trees and turns them into
//! text:
//!
//! - A registry of entities and their fields, rendered into a GraphQL schema document with
//!   derived `Query` and `Mutation` types, and into the source of a server scaffold that serves
//!   that schema
//! - Nested field selections with arguments, rendered into a GraphQL operation
//!
//! Both trees are edited through small, validating operations that either apply completely or
//! leave the tree as it was. Selection trees additionally support copy-on-write edits, so that
//! earlier versions held by a caller stay intact.
//!
//! Rendering is pure and byte-deterministic: the same input always yields the same text, and
//! invalid parts of the input are skipped rather than reported. Inputs with nothing valid to
//! render yield the empty string.
//!
//! ```
//! use graphql_scaffold::{render::render_operation, selection::*};
//!
//! let mut spec = OperationSpec::new("user");
//! spec.custom_operation_name = "GetUser".into();
//! spec.arguments_list.push(ArgumentDef::new("id", "ID!"));
//! spec.fields.add_field().unwrap();
//! spec.fields.update_name(&FieldPath::from([0]), "name").unwrap();
//!
//! assert_eq!(
//!     render_operation(&spec),
//!     "query GetUser($id: ID!) {\n  user(id: $id) {\n    name\n  }\n}"
//! );
//! ```
//!
//! [A good place to start learning more about this crate is the `render` module...](render)

pub mod ast;
pub mod config;
pub mod error;
pub mod project;
pub mod render;
pub mod schema;
pub mod selection;

pub use bumpalo;
