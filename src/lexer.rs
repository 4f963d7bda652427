use logos::Logos;

/// Represents a lexical token of the bracketed prefix notation.
/// A token is either a parenthesis or a whitespace-delimited atom; atoms are
/// classified into operators, literals and identifiers by the builder.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other whitespace-delimited word, such as `+`, `42`, `2/3`, `3.14`
    /// or `x`.
    #[regex(r"[^\s()]+", |lex| lex.slice().to_string())]
    Atom(String),
    /// Spaces, tabs and line breaks between tokens.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Whitespace,
}

impl Token {
    /// Returns an atom token holding the given text.
    #[must_use]
    pub fn atom(text: impl Into<String>) -> Self {
        Self::Atom(text.into())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Atom(text) => write!(f, "{text}"),
            Self::Whitespace => write!(f, " "),
        }
    }
}

/// Splits a source string into its token sequence.
///
/// Parentheses delimit themselves; every other maximal run of
/// non-whitespace, non-parenthesis characters becomes a single atom. Since
/// every codepoint belongs to one of those classes, lexing cannot fail.
///
/// # Parameters
/// - `source`: The textual form of the expression.
///
/// # Returns
/// The token sequence, ready for either builder.
///
/// # Example
/// ```
/// use numstep::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(+ 1 x)");
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::atom("+"),
///                 Token::atom("1"),
///                 Token::atom("x"),
///                 Token::RParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source).filter_map(Result::ok).collect()
}

/// Joins a token sequence back into its canonical textual form.
///
/// Tokens are separated by single spaces, except that nothing follows an
/// opening parenthesis and nothing precedes a closing one, so that
/// `(+ 1 (* 2 3))` renders exactly as written.
///
/// # Parameters
/// - `tokens`: The token sequence to render.
///
/// # Returns
/// The rendered string.
///
/// # Example
/// ```
/// use numstep::lexer::{render, tokenize};
///
/// let tokens = tokenize("(+ 1 (* 2 3))");
/// assert_eq!(render(&tokens), "(+ 1 (* 2 3))");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        if !(out.is_empty() || out.ends_with('(') || matches!(token, Token::RParen)) {
            out.push(' ');
        }

        match token {
            Token::LParen => out.push('('),
            Token::RParen => out.push(')'),
            Token::Atom(text) => out.push_str(text),
            Token::Whitespace => {},
        }
    }

    out
}
