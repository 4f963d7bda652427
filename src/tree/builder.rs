use std::iter::Peekable;

use crate::{
    error::BuildError,
    lexer::Token,
    number::Number,
    tree::{
        node::{ExprNode, Operation, is_valid_identifier},
        operator::Operator,
    },
};

/// Result type used by the builders.
///
/// All construction functions return either a value of type `T` or a
/// `BuildError` describing the failure.
pub type BuildResult<T> = Result<T, BuildError>;

/// Builds an expression tree from a token sequence, recursively.
///
/// Grammar: an expression is a single literal or identifier token, or a
/// fully parenthesized `( operator operand* )` form whose operands follow
/// the same grammar. All validation happens here: operator symbols must be
/// known, operand counts must satisfy the operator's arity class, the
/// parentheses must balance, and nothing may follow the top-level
/// expression. Running out of tokens is detected before any other check at
/// each step.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The root node of the expression tree.
///
/// # Errors
/// Returns a `BuildError` if:
/// - the sequence is empty or ends while a form is still open,
/// - an operator symbol is unknown or an operand count is out of range,
/// - a token is neither a literal nor a legal identifier,
/// - tokens remain after the top-level expression.
///
/// # Example
/// ```
/// use numstep::{lexer::tokenize, tree::builder::build_recursively};
///
/// let tokens = tokenize("(+ 1 (* x 2))");
/// let root = build_recursively(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(root.to_string(), "(+ 1 (* x 2))");
/// ```
pub fn build_recursively<'a, I>(tokens: &mut Peekable<I>) -> BuildResult<ExprNode>
    where I: Iterator<Item = &'a Token>
{
    let Some(first) = tokens.next() else {
        return Err(BuildError::NoExpression);
    };

    let root = if matches!(first, Token::LParen) {
        ExprNode::Operation(build_operation(tokens)?)
    } else {
        operand(first)?
    };

    check_trailing(tokens)?;
    Ok(root)
}

/// Parses the remainder of a parenthesized form, the opening parenthesis
/// already being consumed.
fn build_operation<'a, I>(tokens: &mut Peekable<I>) -> BuildResult<Operation>
    where I: Iterator<Item = &'a Token>
{
    let operator = read_operator(tokens)?;

    let mut operands = Vec::new();
    loop {
        match next_token(tokens)? {
            Token::RParen => break,
            Token::LParen => operands.push(ExprNode::Operation(build_operation(tokens)?)),
            token => operands.push(operand(token)?),
        }
    }

    Operation::new(operator, operands)
}

/// Builds an expression tree from a token sequence, iteratively.
///
/// This form drives an explicit stack of unfinished `(operator, operands)`
/// frames instead of the call stack. It accepts exactly the language of
/// [`build_recursively`], rejects the same malformed inputs, and produces
/// structurally equal trees.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The root node of the expression tree.
///
/// # Errors
/// Returns the same `BuildError`s as [`build_recursively`].
pub fn build_iteratively<'a, I>(tokens: &mut Peekable<I>) -> BuildResult<ExprNode>
    where I: Iterator<Item = &'a Token>
{
    let Some(first) = tokens.next() else {
        return Err(BuildError::NoExpression);
    };

    if !matches!(first, Token::LParen) {
        let node = operand(first)?;
        check_trailing(tokens)?;
        return Ok(node);
    }

    let mut current = (read_operator(tokens)?, Vec::new());
    let mut stack: Vec<(Operator, Vec<ExprNode>)> = Vec::new();

    loop {
        match next_token(tokens)? {
            Token::RParen => {
                let node = ExprNode::Operation(Operation::new(current.0, current.1)?);
                match stack.pop() {
                    Some(parent) => {
                        current = parent;
                        current.1.push(node);
                    },
                    None => {
                        check_trailing(tokens)?;
                        return Ok(node);
                    },
                }
            },
            Token::LParen => {
                stack.push(current);
                current = (read_operator(tokens)?, Vec::new());
            },
            token => current.1.push(operand(token)?),
        }
    }
}

/// Reads and validates an operator symbol. The stream must not end
/// directly after the symbol, and that is checked before the symbol
/// itself, so an unfinished form is always a parenthesis error rather than
/// an operator error.
fn read_operator<'a, I>(tokens: &mut Peekable<I>) -> BuildResult<Operator>
    where I: Iterator<Item = &'a Token>
{
    let symbol = next_token(tokens)?;
    if tokens.peek().is_none() {
        return Err(BuildError::MismatchedParentheses);
    }

    Operator::from_symbol(&symbol.to_string())
        .ok_or_else(|| BuildError::UndefinedOperator { symbol: symbol.to_string() })
}

/// Takes the next token, turning exhaustion inside an open form into a
/// parenthesis error.
fn next_token<'a, I>(tokens: &mut Peekable<I>) -> BuildResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next().ok_or(BuildError::MismatchedParentheses)
}

/// Rejects any token remaining after a complete top-level expression.
fn check_trailing<'a, I>(tokens: &mut Peekable<I>) -> BuildResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) => Err(BuildError::TrailingToken { token: token.to_string() }),
        None => Ok(()),
    }
}

/// Classifies a token in operand position.
fn operand(token: &Token) -> BuildResult<ExprNode> {
    match token {
        Token::Atom(text) => classify_atom(text),
        token => Err(BuildError::IllegalIdentifier { token: token.to_string() }),
    }
}

/// Classifies an atom, attempting the literal grammars first (integer,
/// decimal real, rational) and the identifier grammar last.
fn classify_atom(text: &str) -> BuildResult<ExprNode> {
    if let Ok(value) = text.parse::<Number>() {
        return Ok(ExprNode::Literal(value));
    }
    if is_valid_identifier(text) {
        return Ok(ExprNode::Identifier(text.to_string()));
    }

    Err(BuildError::IllegalIdentifier { token: text.to_string() })
}

/// Reconstructs the token sequence of an expression tree.
///
/// The output is the bracketed canonical form: an operation contributes an
/// opening parenthesis, its operator symbol, its reconstructed operands and
/// a closing parenthesis; literals and identifiers contribute their single
/// token. Building the reconstruction of a tree yields an equal tree.
///
/// # Parameters
/// - `root`: The root node of the tree.
///
/// # Returns
/// The token sequence of the tree.
///
/// # Example
/// ```
/// use numstep::{
///     lexer::tokenize,
///     tree::builder::{build_recursively, reconstruct},
/// };
///
/// let tokens = tokenize("(- 10 x 1/2)");
/// let root = build_recursively(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(reconstruct(&root), tokens);
/// ```
#[must_use]
pub fn reconstruct(root: &ExprNode) -> Vec<Token> {
    let mut tokens = Vec::new();
    push_tokens(&mut tokens, root);
    tokens
}

fn push_tokens(tokens: &mut Vec<Token>, node: &ExprNode) {
    match node {
        ExprNode::Operation(operation) => {
            tokens.push(Token::LParen);
            tokens.push(Token::atom(operation.operator().symbol()));
            for operand in operation.operands() {
                push_tokens(tokens, operand);
            }
            tokens.push(Token::RParen);
        },
        node => tokens.push(Token::atom(node.to_string())),
    }
}
