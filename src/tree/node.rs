use crate::{
    error::BuildError,
    number::Number,
    tree::operator::Operator,
};

/// Represents a node of an arithmetic expression tree.
///
/// A tree is built once by a builder and is immutable afterwards; the
/// stepper replaces its owned root wholesale rather than mutating nodes in
/// place. Cloning a node clones the whole subtree, so a clone shares no
/// state with its original.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// A numeric literal.
    Literal(Number),
    /// A variable name, resolved against the binding map at evaluation.
    Identifier(String),
    /// An operator applied to an ordered sequence of operand subtrees.
    Operation(Operation),
}

/// An operator together with its ordered operand subtrees.
///
/// The operand count is checked against the operator's arity class at
/// construction, so every reachable operation node is valid by definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    operator: Operator,
    operands: Vec<ExprNode>,
}

impl Operation {
    /// Constructs an operation node, validating the operand count against
    /// the operator's arity class.
    ///
    /// # Errors
    /// Returns `BuildError::WrongOperandCount` if the count falls outside
    /// the operator's arity class.
    ///
    /// # Example
    /// ```
    /// use numstep::tree::{ExprNode, Operation, Operator};
    ///
    /// let ok = Operation::new(Operator::Ln, vec![ExprNode::Identifier("x".into())]);
    /// assert!(ok.is_ok());
    ///
    /// let too_many = Operation::new(Operator::Ln,
    ///                               vec![ExprNode::Identifier("x".into()),
    ///                                    ExprNode::Identifier("y".into())]);
    /// assert!(too_many.is_err());
    /// ```
    pub fn new(operator: Operator, operands: Vec<ExprNode>) -> Result<Self, BuildError> {
        operator.arity().check(operands.len())?;
        Ok(Self { operator, operands })
    }

    /// Rebuilds an operation whose operand count is already established,
    /// as in substitution and folding passes that preserve the shape.
    pub(crate) fn unchecked(operator: Operator, operands: Vec<ExprNode>) -> Self {
        Self { operator, operands }
    }

    /// Returns the operator of this node.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the operands of this node.
    #[must_use]
    pub fn operands(&self) -> &[ExprNode] {
        &self.operands
    }

    /// Returns `true` if none of the operands is itself an operation, so
    /// that this node can be folded into a single literal.
    #[must_use]
    pub fn is_leaf_operation(&self) -> bool {
        !self.operands.iter().any(ExprNode::is_operation)
    }
}

impl ExprNode {
    /// Returns `true` if this node is an operation.
    #[must_use]
    pub const fn is_operation(&self) -> bool {
        matches!(self, Self::Operation(..))
    }

    /// Returns `true` if this node is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(..))
    }

    /// Returns `true` if this subtree contains an identifier anywhere.
    #[must_use]
    pub fn contains_identifier(&self) -> bool {
        match self {
            Self::Literal(_) => false,
            Self::Identifier(_) => true,
            Self::Operation(operation) => {
                operation.operands().iter().any(Self::contains_identifier)
            },
        }
    }
}

/// Checks a token against the identifier grammar: non-empty, only letters
/// and hyphens, and at least one letter. Letters of any script count,
/// including the umlaut and sharp-s characters.
///
/// # Example
/// ```
/// use numstep::tree::node::is_valid_identifier;
///
/// assert!(is_valid_identifier("straße"));
/// assert!(is_valid_identifier("x-prime"));
/// assert!(!is_valid_identifier("-"));
/// assert!(!is_valid_identifier("x1"));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
    && name.chars().all(|c| c == '-' || c.is_alphabetic())
    && name.chars().any(char::is_alphabetic)
}

impl std::fmt::Display for ExprNode {
    /// Renders the node in the canonical grammar: literals and identifiers
    /// as their single token, operations as
    /// `"(" symbol (" " operand)* ")"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operation(operation) => {
                write!(f, "({}", operation.operator())?;
                for operand in operation.operands() {
                    write!(f, " {operand}")?;
                }
                write!(f, ")")
            },
        }
    }
}
