use std::collections::HashMap;

use crate::{
    lexer::Token,
    number::Number,
    tree::{
        builder::reconstruct,
        evaluator::{self, EvalResult},
        node::{ExprNode, Operation},
    },
};

/// The phase of an incremental reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// The tree may still contain identifiers; the next step substitutes
    /// them all, if any, before anything is folded.
    NeedsSubstitution,
    /// The tree is identifier-free; each step folds its leaf operations.
    Reducing,
    /// The tree is a single literal; further steps return it unchanged.
    Terminal,
}

/// Performs one bounded reduction of a tree.
///
/// This is the pure transition function of the reduction state machine.
/// From [`StepState::NeedsSubstitution`], a tree containing identifiers has
/// all of them replaced by their bound literals, through the evaluator's
/// lookup rule, in one step, without folding anything; an identifier-free
/// tree proceeds directly to folding. From [`StepState::Reducing`], every
/// leaf operation (an operation none of whose operands is itself an
/// operation) is folded into its computed literal in the same pass, so
/// independent siblings collapse together, but a parent never folds before
/// its operation children have become literals. Once the tree is a single
/// literal the state is [`StepState::Terminal`] and the transition is the
/// identity.
///
/// # Parameters
/// - `state`: The current phase of the reduction.
/// - `tree`: The current tree; it is never mutated.
/// - `bindings`: The map of identifier names to numeric values.
///
/// # Returns
/// The next phase, the new tree, and the new tree's token sequence.
///
/// # Errors
/// Returns an `EvalError` if substitution hits an unbound or reserved
/// identifier, or if folding violates a domain constraint.
pub fn step(state: StepState,
            tree: &ExprNode,
            bindings: &HashMap<String, Number>)
            -> EvalResult<(StepState, ExprNode, Vec<Token>)> {
    match state {
        StepState::Terminal => Ok((StepState::Terminal, tree.clone(), reconstruct(tree))),
        StepState::NeedsSubstitution => {
            if tree.is_literal() {
                return Ok((StepState::Terminal, tree.clone(), reconstruct(tree)));
            }
            if tree.contains_identifier() {
                let substituted = substitute(tree, bindings)?;
                let state = if substituted.is_literal() {
                    StepState::Terminal
                } else {
                    StepState::Reducing
                };
                let tokens = reconstruct(&substituted);
                return Ok((state, substituted, tokens));
            }

            fold(tree, bindings)
        },
        StepState::Reducing => fold(tree, bindings),
    }
}

/// Folds every leaf operation of the tree and classifies the result.
fn fold(tree: &ExprNode,
        bindings: &HashMap<String, Number>)
        -> EvalResult<(StepState, ExprNode, Vec<Token>)> {
    let reduced = fold_leaves(tree, bindings)?;
    let state = if reduced.is_literal() {
        StepState::Terminal
    } else {
        StepState::Reducing
    };
    let tokens = reconstruct(&reduced);

    Ok((state, reduced, tokens))
}

/// Replaces every identifier in the subtree by its bound literal.
fn substitute(node: &ExprNode, bindings: &HashMap<String, Number>) -> EvalResult<ExprNode> {
    match node {
        ExprNode::Identifier(name) => Ok(ExprNode::Literal(evaluator::lookup(name, bindings)?)),
        ExprNode::Operation(operation) => {
            let operands = operation.operands()
                                    .iter()
                                    .map(|operand| substitute(operand, bindings))
                                    .collect::<EvalResult<Vec<_>>>()?;
            Ok(ExprNode::Operation(Operation::unchecked(operation.operator(), operands)))
        },
        literal => Ok(literal.clone()),
    }
}

/// Replaces every leaf operation in the subtree by its computed literal,
/// leaving enclosing operations in place for later steps.
fn fold_leaves(node: &ExprNode, bindings: &HashMap<String, Number>) -> EvalResult<ExprNode> {
    match node {
        ExprNode::Operation(operation) if operation.is_leaf_operation() => {
            Ok(ExprNode::Literal(evaluator::evaluate_operation(operation, bindings)?))
        },
        ExprNode::Operation(operation) => {
            let operands = operation.operands()
                                    .iter()
                                    .map(|operand| fold_leaves(operand, bindings))
                                    .collect::<EvalResult<Vec<_>>>()?;
            Ok(ExprNode::Operation(Operation::unchecked(operation.operator(), operands)))
        },
        node => Ok(node.clone()),
    }
}

/// Drives an incremental reduction to its terminal state.
///
/// A stepper exclusively owns its current tree and replaces it wholesale
/// on every step; the tree handed to the constructor is deep-cloned, so
/// the caller's original is never touched.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use numstep::{lexer::render, number::Number, tree::Stepper};
///
/// let root = numstep::parse("(+ x (* 2 3))").unwrap();
/// let bindings = HashMap::from([("x".to_string(), Number::from(1))]);
/// let mut stepper = Stepper::new(&root, bindings);
///
/// assert_eq!(render(&stepper.next_step().unwrap()), "(+ 1 (* 2 3))");
/// assert_eq!(render(&stepper.next_step().unwrap()), "(+ 1 6)");
/// assert_eq!(render(&stepper.next_step().unwrap()), "7");
/// assert_eq!(render(&stepper.next_step().unwrap()), "7");
/// ```
#[derive(Debug)]
pub struct Stepper {
    root:     ExprNode,
    bindings: HashMap<String, Number>,
    state:    StepState,
}

impl Stepper {
    /// Constructs a stepper over a deep clone of the given tree.
    ///
    /// # Parameters
    /// - `root`: The tree to reduce; the stepper works on its own copy.
    /// - `bindings`: The map of identifier names to numeric values.
    #[must_use]
    pub fn new(root: &ExprNode, bindings: HashMap<String, Number>) -> Self {
        Self { root: root.clone(),
               bindings,
               state: StepState::NeedsSubstitution, }
    }

    /// Performs exactly one reduction and returns the new tree's token
    /// sequence. Once the tree is a single literal, further calls return
    /// its one-token sequence unchanged.
    ///
    /// # Errors
    /// Returns an `EvalError` under the same conditions as [`step`].
    pub fn next_step(&mut self) -> EvalResult<Vec<Token>> {
        let (state, root, tokens) = step(self.state, &self.root, &self.bindings)?;
        self.state = state;
        self.root = root;

        Ok(tokens)
    }

    /// Returns the current phase of the reduction.
    #[must_use]
    pub const fn state(&self) -> StepState {
        self.state
    }

    /// Returns `true` once the tree has collapsed into a single literal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.state, StepState::Terminal)
    }

    /// Returns the current tree.
    #[must_use]
    pub const fn root(&self) -> &ExprNode {
        &self.root
    }

    /// Returns the map of identifier names and their values.
    #[must_use]
    pub const fn bindings(&self) -> &HashMap<String, Number> {
        &self.bindings
    }
}
