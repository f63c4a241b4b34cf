use logos::Logos;

/// Tokens of the argument type grammar.
///
/// Type tokens are tiny, single-line inputs like `ID!` or `[String]`, so only names and the
/// list and non-null punctuators are recognised. Anything else lexes as an [Token::Error].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token<'a> {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("!")]
    Exclam,

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[error]
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Error,

    /// Token indicates the end of the input
    End,
}

#[cfg(test)]
mod tests {
    use super::Token;
    use logos::Logos;

    #[test]
    fn tokens() {
        let tokens: Vec<Token> = Token::lexer("[ String! ]!").collect();
        assert_eq!(
            tokens,
            vec![
                Token::BracketOpen,
                Token::Name("String"),
                Token::Exclam,
                Token::BracketClose,
                Token::Exclam
            ]
        );
    }

    #[test]
    fn errors() {
        let tokens: Vec<Token> = Token::lexer("1Int").collect();
        assert_eq!(tokens[0], Token::Error);
        let tokens: Vec<Token> = Token::lexer("In-t").collect();
        assert_eq!(tokens, vec![Token::Name("In"), Token::Error, Token::Name("t")]);
    }
}
