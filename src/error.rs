/// Construction errors.
///
/// Defines all error types that can occur while building an expression tree
/// from a token sequence. Build errors include missing or trailing tokens,
/// mismatched parentheses, unknown operator symbols, operand counts outside
/// an operator's arity class, and tokens that are neither literals nor legal
/// identifiers.
pub mod build_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating or stepping
/// an expression tree. Evaluation errors include unbound identifiers, the
/// reserved constant names reached through the binding map, and operands
/// violating a domain constraint such as division by zero or a non-positive
/// logarithm argument.
pub mod eval_error;

pub use build_error::BuildError;
pub use eval_error::{Comparison, EvalError};
