//! # Selection Trees
//!
//! The `graphql_scaffold::selection` module contains the nested field selections of generated
//! operations and the [OperationSpec] they belong to.
//!
//! A [SelectionTree] is a forest with a bounded nesting depth. Its nodes can be addressed by a
//! stable [NodeId] or by a [FieldPath] of sibling indices, and both kinds of edits check the
//! depth limit before they change anything:
//!
//! ```
//! use graphql_scaffold::selection::*;
//!
//! let tree = SelectionTree::new(2);
//! let tree = tree.apply(SelectionEdit::AddField).unwrap();
//! let tree = tree
//!     .apply(SelectionEdit::AddSubField { path: FieldPath::from([0]) })
//!     .unwrap();
//! assert!(tree
//!     .apply(SelectionEdit::AddSubField { path: FieldPath::from([0, 0]) })
//!     .is_err());
//! ```

mod operation;
mod path;
mod tree;

pub use operation::*;
pub use path::FieldPath;
pub use tree::{NodeId, NodeRef, SelectionEdit, SelectionNode, SelectionTree};
