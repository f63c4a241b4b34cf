//! # Generated Document AST
//!
//! The `graphql_scaffold::ast` module contains the document nodes that definition trees are
//! lowered into before they're printed: object type definitions for schema documents and
//! operation definitions for executable documents. Nodes are allocated into an arena that lives
//! as long as an [`ASTContext`].
//!
//! Its three main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which type tokens like `[String]!` are parsed into [`Type`]s
//! - [`PrintNode`], a trait using which AST Nodes are printed into source text
//!
//! ```
//! use graphql_scaffold::ast::*;
//!
//! let ctx = ASTContext::new();
//! let of_type = Type::parse(&ctx, "[ID!]").unwrap();
//! assert_eq!(of_type.print(), "[ID!]");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod lexer;
mod parser;
mod printer;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use parser::ParseNode;
pub use printer::PrintNode;
