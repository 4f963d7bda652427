use std::collections::HashMap;

use crate::{
    error::EvalError,
    number::{Number, Real},
    tree::{
        node::{ExprNode, Operation},
        operator::Operator,
    },
};

/// Result type used by the evaluator and the stepper.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents the predefined constants.
///
/// The constants are reserved identifier names bound to fixed real
/// approximations. They are not variables: resolving one of these names
/// through the binding map is an error, and a presentation layer that wants
/// them must substitute their values as literals before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// The base of the natural logarithm.
    E,
    /// The ratio of a circle's circumference to its diameter.
    Pi,
}

impl Constant {
    /// Returns the reserved name of this constant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::Pi => "pi",
        }
    }

    /// Returns the fixed real approximation of this constant.
    ///
    /// # Example
    /// ```
    /// use numstep::tree::Constant;
    ///
    /// assert_eq!(Constant::Pi.value().to_string(), "3.141592653589793");
    /// ```
    #[must_use]
    pub fn value(self) -> Number {
        match self {
            Self::E => Number::Real(Real::from_f64(std::f64::consts::E)),
            Self::Pi => Number::Real(Real::from_f64(std::f64::consts::PI)),
        }
    }

    /// Returns the constant carrying the given reserved name, if any.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "e" => Some(Self::E),
            "pi" => Some(Self::Pi),
            _ => None,
        }
    }

    /// Replaces every reserved constant name in the tree by its literal
    /// value. Evaluation rejects the reserved names through the binding
    /// map, so a presentation layer applies this before handing a tree
    /// over.
    ///
    /// # Example
    /// ```
    /// use numstep::tree::Constant;
    ///
    /// let root = numstep::parse("(* 2 pi)").unwrap();
    /// let substituted = Constant::substitute(&root);
    /// assert_eq!(substituted.to_string(), "(* 2 3.141592653589793)");
    /// ```
    #[must_use]
    pub fn substitute(node: &ExprNode) -> ExprNode {
        match node {
            ExprNode::Identifier(name) => match Self::from_name(name) {
                Some(constant) => ExprNode::Literal(constant.value()),
                None => node.clone(),
            },
            ExprNode::Operation(operation) => {
                let operands = operation.operands().iter().map(Self::substitute).collect();
                ExprNode::Operation(Operation::unchecked(operation.operator(), operands))
            },
            literal => literal.clone(),
        }
    }
}

/// Evaluates an expression tree against a binding map.
///
/// Operands are evaluated left to right. The variadic operators `+` and
/// `*` fold their operand sequence to the right, with the empty forms
/// yielding their identities `0` and `1`. A single operand under `-` or
/// `/` selects the unary form, negation or reciprocal, while more
/// operands subtract the sum, or divide by the product, of the tail. The
/// remaining operators dispatch to the tower per their arity.
///
/// # Parameters
/// - `node`: The root of the tree to evaluate.
/// - `bindings`: The map of identifier names to numeric values. It is
///   never mutated.
///
/// # Returns
/// The computed numeric value.
///
/// # Errors
/// Returns an `EvalError` if an identifier is absent from the bindings, a
/// reserved constant name is resolved through them, or an operand violates
/// a domain constraint of its operation.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use numstep::{number::Number, tree::evaluator::evaluate};
///
/// let root = numstep::parse("(+ x (* 2 3))").unwrap();
/// let bindings = HashMap::from([("x".to_string(), Number::from(1))]);
///
/// assert_eq!(evaluate(&root, &bindings).unwrap(), Number::from(7));
/// ```
pub fn evaluate(node: &ExprNode, bindings: &HashMap<String, Number>) -> EvalResult<Number> {
    match node {
        ExprNode::Literal(value) => Ok(value.clone()),
        ExprNode::Identifier(name) => lookup(name, bindings),
        ExprNode::Operation(operation) => evaluate_operation(operation, bindings),
    }
}

/// Resolves an identifier through the binding map, rejecting the reserved
/// constant names first.
pub(crate) fn lookup(name: &str, bindings: &HashMap<String, Number>) -> EvalResult<Number> {
    if Constant::from_name(name).is_some() {
        return Err(EvalError::ReservedIdentifier { name: name.to_string() });
    }

    bindings.get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedIdentifier { name: name.to_string() })
}

/// Computes the value of a single operation node. The operand counts are
/// guaranteed by the arity check at construction.
pub(crate) fn evaluate_operation(operation: &Operation,
                                 bindings: &HashMap<String, Number>)
                                 -> EvalResult<Number> {
    let operands = operation.operands();

    match operation.operator() {
        Operator::Add => {
            if operands.is_empty() {
                Ok(Number::zero())
            } else {
                sum(operands, bindings)
            }
        },
        Operator::Mul => {
            if operands.is_empty() {
                Ok(Number::one())
            } else {
                product(operands, bindings)
            }
        },
        Operator::Sub => {
            let first = evaluate(&operands[0], bindings)?;
            if operands.len() == 1 {
                Ok(first.negate())
            } else {
                Ok(first.minus(&sum(&operands[1..], bindings)?))
            }
        },
        Operator::Div => {
            let first = evaluate(&operands[0], bindings)?;
            if operands.len() == 1 {
                first.reciprocal()
            } else {
                first.divide(&product(&operands[1..], bindings)?)
            }
        },
        Operator::Exp => evaluate(&operands[0], bindings)?.exp(),
        Operator::Ln => evaluate(&operands[0], bindings)?.ln(),
        Operator::Sqrt => evaluate(&operands[0], bindings)?.sqrt(),
        Operator::Expt => {
            evaluate(&operands[0], bindings)?.expt(&evaluate(&operands[1], bindings)?)
        },
        Operator::Log => {
            evaluate(&operands[0], bindings)?.log(&evaluate(&operands[1], bindings)?)
        },
    }
}

/// Right-folds a non-empty operand sequence with addition, evaluating each
/// operand before descending into the tail.
fn sum(operands: &[ExprNode], bindings: &HashMap<String, Number>) -> EvalResult<Number> {
    let value = evaluate(&operands[0], bindings)?;
    if operands.len() == 1 {
        Ok(value)
    } else {
        Ok(value.plus(&sum(&operands[1..], bindings)?))
    }
}

/// Right-folds a non-empty operand sequence with multiplication.
fn product(operands: &[ExprNode], bindings: &HashMap<String, Number>) -> EvalResult<Number> {
    let value = evaluate(&operands[0], bindings)?;
    if operands.len() == 1 {
        Ok(value)
    } else {
        Ok(value.times(&product(&operands[1..], bindings)?))
    }
}
