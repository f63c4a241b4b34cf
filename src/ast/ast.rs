pub use super::ast_conversion::*;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A context for a generated document which holds an arena allocator.
///
/// Rendering a definition tree first lowers it into document nodes that are allocated in one
/// chunk and are then printed. This context represents the lifetime of those nodes. Once the
/// output text has been printed the entire allocation is dropped at once, which is why a context
/// is created per render and never reused across renders.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime, for instance when it's
    /// borrowed from a definition tree that outlives the render only by accident.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// AST Node for a type name.
///
/// Used whenever a document refers to a scalar, an object type, or an operation name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
}

/// AST Node for a type reference.
///
/// Field definitions, input values and variable definitions describe their type including
/// whether they expect lists, non-null values, or a named type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named type, which is the leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list wrapper, indicating a list of the contained type.
    ListType(&'a Type<'a>),
    /// A non-null wrapper, indicating that `null` may not be passed in place of the contained
    /// type.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Wraps this type in a list.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::ListType(ctx.alloc(self))
    }

    /// Wraps this type in a non-null marker.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::NonNullType(ctx.alloc(self))
    }

    /// Composes the list and required modifiers of a field onto a named type: the list wrapper
    /// is applied first, so that a required list prints as `[T]!`.
    #[inline]
    pub fn with_modifiers(
        ctx: &'a ASTContext,
        name: &'a str,
        is_list: bool,
        required: bool,
    ) -> Type<'a> {
        let mut of_type = Type::NamedType(NamedType { name });
        if is_list {
            of_type = of_type.into_list(ctx);
        }
        if required {
            of_type = of_type.into_nonnull(ctx);
        }
        of_type
    }

    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn of_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(of_type) => of_type,
            Type::ListType(inner) | Type::NonNullType(inner) => inner.of_type(),
        }
    }
}

/// AST Node of a variable identifier value, printed with a `$` prefix.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
}

/// AST Node for an Argument binding a field argument to a variable of the operation.
///
/// Generated operations only ever forward variables, so the value of an argument is always a
/// [Variable].
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Variable<'a>,
}

/// AST Node for a list of Arguments passed to a field.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: bumpalo::collections::Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for Selection Sets, which select fields on a parent field.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: bumpalo::collections::Vec<'a, Field<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// AST Node for Fields in a selection.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `name`, which represents a resolver on the parent type.
    pub name: &'a str,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    pub arguments: Arguments<'a>,
    /// A sub-Selection Set. A Field with an empty Selection Set is printed as a leaf.
    pub selection_set: SelectionSet<'a>,
}

impl<'a> Field<'a> {
    /// Creates a new leaf field with the given `name`.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            name,
            arguments: Arguments::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        }
    }
}

/// AST Node for a variable definition of an operation.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's identifier, which is prefixed with a `$` sign in the document.
    pub variable: Variable<'a>,
    /// Annotation of the type of the variable.
    pub of_type: Type<'a>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, VariableDefinition<'a>>,
}

impl<'a> VariableDefinitions<'a> {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// The kind of a generated operation.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "json", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum OperationKind {
    #[default]
    Query,
    Mutation,
}

impl OperationKind {
    /// Returns the keyword this kind is introduced with in a document.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = crate::error::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "query" => Ok(OperationKind::Query),
            "mutation" => Ok(OperationKind::Mutation),
            other => Err(crate::error::Error::new(
                format!("Unknown operation kind {other}"),
                crate::error::ErrorType::InvalidOperationSpec,
            )),
        }
    }
}

/// AST Node for an Operation Definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    /// An optional name. The operation keyword is printed either way.
    pub name: Option<NamedType<'a>>,
    /// A list of variables that the operation defines and accepts during execution.
    pub variable_definitions: VariableDefinitions<'a>,
    /// The root Selection Set of the operation.
    pub selection_set: SelectionSet<'a>,
}

/// AST Node for an input value definition, i.e. an argument of a field definition.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub name: &'a str,
    pub of_type: Type<'a>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ArgumentsDefinition<'a> {
    pub children: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
}

impl<'a> ArgumentsDefinition<'a> {
    /// Checks whether this field definition declares any arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a field definition on an object type.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub name: &'a str,
    pub arguments: ArgumentsDefinition<'a>,
    pub of_type: Type<'a>,
}

impl<'a> FieldDefinition<'a> {
    /// Creates a field definition without arguments.
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str, of_type: Type<'a>) -> Self {
        FieldDefinition {
            name,
            arguments: ArgumentsDefinition::default_in(&ctx.arena),
            of_type,
        }
    }
}

/// AST Node for an object type definition, `type Name { ... }`.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectTypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub name: NamedType<'a>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

impl<'a> ObjectTypeDefinition<'a> {
    /// Creates an object type definition without fields.
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        ObjectTypeDefinition {
            name: NamedType { name },
            fields: bumpalo::collections::Vec::new_in(&ctx.arena),
        }
    }
}

/// AST Root Node for a schema definition language document.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDocument<'a> {
    pub definitions: bumpalo::collections::Vec<'a, ObjectTypeDefinition<'a>>,
    /// A hint on how large the printed document will be, used as the starting capacity of the
    /// output `String`.
    pub size_hint: usize,
}

impl<'a> SchemaDocument<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
