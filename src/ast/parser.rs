use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::Token;
use crate::error::{print_span, Error, ErrorType, Result};
use logos::{Lexer, Logos, Span};

type ParseResult<T> = std::result::Result<T, ASTKind>;

pub(crate) mod private {
    use super::{ASTContext, Lexer, Logos, ParseResult, Span, Token};

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context and a [Lexer].
    pub struct ParserContext<'a> {
        pub(crate) ctx: &'a ASTContext,
        pub(crate) peek: Option<Token<'a>>,
        pub(crate) iter: Lexer<'a, Token<'a>>,
        pub(crate) exhausted: bool,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input
        /// source string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            ParserContext {
                ctx,
                peek: None,
                iter: Token::lexer(source),
                exhausted: false,
            }
        }

        #[inline]
        fn pull(iter: &mut Lexer<'a, Token<'a>>, exhausted: &mut bool) -> Token<'a> {
            match iter.next() {
                Some(token) => token,
                None => {
                    *exhausted = true;
                    Token::End
                }
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            match self.peek.take() {
                Some(token) => token,
                None => Self::pull(&mut self.iter, &mut self.exhausted),
            }
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> &Token<'a> {
            let iter = &mut self.iter;
            let exhausted = &mut self.exhausted;
            self.peek.get_or_insert_with(|| Self::pull(iter, exhausted))
        }

        #[inline]
        pub(crate) fn source(&self) -> &'a str {
            self.iter.source()
        }

        /// The span of the token that was read last, or an empty span past the end of the
        /// source once the input is exhausted.
        #[inline]
        pub(crate) fn span(&self) -> Span {
            if self.exhausted {
                let end = self.source().len();
                end..end
            } else {
                self.iter.span()
            }
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for parsing type tokens into AST Nodes using recursive descent and a lexer.
///
/// The accepted grammar is deliberately small: a name made of letters, digits and underscores,
/// optionally wrapped in a single list `[...]` whose item may be marked non-null, optionally
/// followed by a non-null `!` marker. `Int`, `ID!`, `[String]`, `[String!]!` are all accepted;
/// `[[Int]]`, `Int!!` or `1D` are not.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse a type token into the implementor's AST Node structure and allocate the resulting
    /// AST into the current AST Context's arena. Surrounding whitespace is ignored.
    fn parse<T: AsRef<str>>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_str(source.as_ref().trim());
        let mut parser_ctx = private::ParserContext::new(ctx, source);
        let result = Self::new_with_ctx(&mut parser_ctx).and_then(|value| {
            match parser_ctx.next() {
                Token::End => Ok(value),
                _ => Err(ASTKind::TrailingInput),
            }
        });
        match result {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(kind) => {
                let span = print_span(parser_ctx.source(), parser_ctx.span());
                let message = format!("Invalid {} in `{}`", kind, source);
                Err(Error::new_with_context(
                    message,
                    span,
                    ErrorType::MalformedArgumentType,
                ))
            }
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        match ctx.next() {
            Token::Name(name) => Ok(NamedType { name }),
            _ => Err(ASTKind::NamedType),
        }
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Type<'a>> {
        let of_type = match *ctx.peek() {
            Token::BracketOpen => {
                ctx.next();
                let mut item = Type::NamedType(NamedType::new_with_ctx(ctx)?);
                if let Token::Exclam = *ctx.peek() {
                    ctx.next();
                    item = Type::NonNullType(ctx.ctx.alloc(item));
                }
                match ctx.next() {
                    Token::BracketClose => Type::ListType(ctx.ctx.alloc(item)),
                    _ => return Err(ASTKind::ListType),
                }
            }
            Token::Name(_) => Type::NamedType(NamedType::new_with_ctx(ctx)?),
            _ => {
                ctx.next();
                return Err(ASTKind::Type);
            }
        };
        if let Token::Exclam = *ctx.peek() {
            ctx.next();
            Ok(Type::NonNullType(ctx.ctx.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::ErrorType;

    fn reprint(token: &str) -> Option<String> {
        let ctx = ASTContext::new();
        Type::parse(&ctx, token).ok().map(|of_type| of_type.print())
    }

    #[test]
    fn accepted_tokens() {
        assert_eq!(reprint("String").as_deref(), Some("String"));
        assert_eq!(reprint("ID!").as_deref(), Some("ID!"));
        assert_eq!(reprint("[Int]").as_deref(), Some("[Int]"));
        assert_eq!(reprint("[Int]!").as_deref(), Some("[Int]!"));
        assert_eq!(reprint("[Int!]!").as_deref(), Some("[Int!]!"));
        assert_eq!(reprint("  custom_Type2 ").as_deref(), Some("custom_Type2"));
        assert_eq!(reprint("[ Boolean ] !").as_deref(), Some("[Boolean]!"));
    }

    #[test]
    fn rejected_tokens() {
        let tokens = [
            "", "   ", "!", "Int!!", "[[Int]]", "[Int", "Int]", "1D", "In-t", "[]", "A B",
        ];
        for token in tokens {
            assert_eq!(reprint(token), None, "{token:?} should be rejected");
        }
    }

    #[test]
    fn error_context() {
        let ctx = ASTContext::new();
        let error = Type::parse(&ctx, "[Int").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::MalformedArgumentType);
        assert_eq!(error.message(), "Invalid List Type in `[Int`");
        assert_eq!(
            error.print(true),
            "Malformed Argument Type: Invalid List Type in `[Int`\n | [Int\n |     ^"
        );

        let error = Type::parse(&ctx, "Int!!").unwrap_err();
        assert_eq!(error.message(), "Invalid Trailing Input in `Int!!`");
        assert_eq!(error.print(true).lines().last(), Some(" |     ^"));
    }

    #[test]
    fn named_type() {
        let ctx = ASTContext::new();
        assert_eq!(NamedType::parse(&ctx, "User").unwrap().name, "User");
        assert!(NamedType::parse(&ctx, "User!").is_err());
    }
}
