use std::fmt;

/// An enum of identifiers representing the AST nodes a type token is parsed into.
///
/// This enum can be printed using the [`fmt::Display`] trait.
/// When parsing this enum is used to indicate what AST node encountered a parsing error.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: `ListType` on [crate::ast::Type]
    ListType,
    /// Input that continues after a complete type
    TrailingInput,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ASTKind::Type => "Type",
            ASTKind::NamedType => "Named Type",
            ASTKind::ListType => "List Type",
            ASTKind::TrailingInput => "Trailing Input",
        };
        f.write_str(name)
    }
}
