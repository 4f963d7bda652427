/// Tree construction from token sequences.
///
/// Provides the two builder forms, recursive descent and an explicit-stack
/// iterative loop, which accept the same language, reject the same
/// malformed inputs and produce structurally equal trees, together with the
/// reconstruction of a tree back into its token sequence.
///
/// # Responsibilities
/// - Classifies atoms into literals and identifiers.
/// - Validates operator symbols, arity and parenthesis balance at build
///   time.
/// - Reconstructs the bracketed token sequence of a tree.
pub mod builder;
/// One-shot tree evaluation.
///
/// Evaluates a tree against a binding map of identifier names to numeric
/// values, folding variadic operators over their operand sequences and
/// dispatching the unary and binary operations of the tower. Also owns the
/// reserved constants.
///
/// # Responsibilities
/// - Resolves identifiers, rejecting the reserved constant names.
/// - Aggregates variadic `+` and `*` and dispatches the remaining
///   operators per their arity.
pub mod evaluator;
/// Expression tree nodes.
///
/// Declares the node variants (literals, identifiers and operations) and
/// enforces the arity and identifier grammar invariants at construction
/// time, so that a built tree is valid by definition.
pub mod node;
/// Operators and their arity classes.
pub mod operator;
/// Stepwise tree reduction.
///
/// Implements the incremental reduction state machine: one substitution
/// pass for identifiers, then one fold of all leaf operations per call,
/// until the tree has collapsed into a single literal.
pub mod stepper;

pub use builder::{build_iteratively, build_recursively, reconstruct};
pub use evaluator::{Constant, evaluate};
pub use node::{ExprNode, Operation};
pub use operator::{Arity, Operator};
pub use stepper::{StepState, Stepper, step};
