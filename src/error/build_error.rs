#[derive(Debug)]
/// Represents all errors that can occur while building an expression tree.
pub enum BuildError {
    /// The token sequence was empty.
    NoExpression,
    /// The token sequence ran out while an expression was still open.
    MismatchedParentheses,
    /// Found a symbol that is not a known operator in operator position.
    UndefinedOperator {
        /// The unrecognized symbol.
        symbol: String,
    },
    /// The number of operands does not satisfy the operator's arity class.
    WrongOperandCount {
        /// The number of operands actually found.
        actual: usize,
        /// The smallest accepted operand count.
        min:    usize,
        /// The largest accepted operand count, if the operator has one.
        max:    Option<usize>,
    },
    /// Found a token that is neither a literal nor a legal identifier.
    IllegalIdentifier {
        /// The offending token.
        token: String,
    },
    /// Found extra tokens after a complete top-level expression.
    TrailingToken {
        /// The first unexpected trailing token.
        token: String,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoExpression => write!(f, "No expression to build."),

            Self::MismatchedParentheses => write!(f, "Mismatched parentheses in expression."),

            Self::UndefinedOperator { symbol } => {
                write!(f, "Undefined operator '{symbol}'.")
            },

            Self::WrongOperandCount { actual, min, max } => match max {
                Some(max) => write!(f,
                                    "Wrong number of operands: found {actual}, expected between {min} and {max}."),
                None => write!(f,
                               "Wrong number of operands: found {actual}, expected at least {min}."),
            },

            Self::IllegalIdentifier { token } => {
                write!(f, "Illegal identifier '{token}'.")
            },

            Self::TrailingToken { token } => {
                write!(f, "Unexpected token '{token}' after complete expression.")
            },
        }
    }
}

impl std::error::Error for BuildError {}
