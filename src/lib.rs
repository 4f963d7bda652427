//! # numstep
//!
//! numstep is the computational core of a teaching tool that shows how an
//! arithmetic expression collapses toward its value. It implements a small
//! numeric tower of exact integers, exact rationals and fixed-scale
//! decimals, together with a prefix-notation expression tree that can be
//! parsed, evaluated in one shot, or reduced one bounded step at a time.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::{
    number::Number,
    tree::{builder::build_recursively, node::ExprNode, stepper::Stepper},
};

/// Provides unified error types for construction and evaluation.
///
/// This module defines all errors that can be raised while building an
/// expression tree from tokens or while evaluating and stepping one. It
/// standardizes error reporting and carries detailed information about
/// failures, such as the offending token or operand and the violated
/// constraint.
///
/// # Responsibilities
/// - Defines error enums for the builder and the evaluator/stepper.
/// - Carries the offending token, symbol, operand counts or operands.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Splits expression text into tokens.
///
/// The lexer turns a source string into the token sequence consumed by the
/// builders: parentheses and whitespace-delimited atoms. It also renders a
/// token sequence back into its canonical textual form.
///
/// # Responsibilities
/// - Produces the token sequence of an expression string.
/// - Renders token sequences for display.
pub mod lexer;
/// The numeric tower of the expression language.
///
/// This module defines the three value variants (exact integers, exact
/// rationals and fixed-scale reals) with their promotion rules, arithmetic
/// and manually implemented transcendental operations.
///
/// # Responsibilities
/// - Defines `Number`, `Fraction` and `Real` and their conversions.
/// - Normalizes every arithmetic result to its simplest exact form.
/// - Guards domain constraints such as division by zero.
pub mod number;
/// The expression tree and everything that walks it.
///
/// This module defines the tree nodes and operators, the two builder
/// forms, the one-shot evaluator and the incremental stepper.
///
/// # Responsibilities
/// - Builds validated trees from token sequences.
/// - Evaluates trees against a binding map.
/// - Reduces trees one bounded step at a time.
pub mod tree;
/// General numeric utilities.
///
/// This module provides the arbitrary-precision helpers shared by the
/// numeric tower, such as powers of ten and half-up integer division.
pub mod util;

pub use error::{BuildError, EvalError};

/// Parses an expression string into its tree.
///
/// The string is tokenized and handed to the recursive builder; the
/// iterative builder accepts exactly the same language and produces an
/// equal tree.
///
/// # Errors
/// Returns a `BuildError` if the token sequence is not a well-formed
/// expression.
///
/// # Examples
/// ```
/// use numstep::parse;
///
/// let root = parse("(* (+ 1 2) x)").unwrap();
/// assert_eq!(root.to_string(), "(* (+ 1 2) x)");
///
/// assert!(parse("(ln 1 2)").is_err());
/// ```
pub fn parse(source: &str) -> Result<ExprNode, BuildError> {
    let tokens = lexer::tokenize(source);
    build_recursively(&mut tokens.iter().peekable())
}

/// Returns every intermediate form of an expression's reduction.
///
/// The expression is parsed and stepped to its terminal state; each step's
/// token sequence is rendered into a line. The first line substitutes the
/// identifiers, if any, and the last line is the final value.
///
/// # Errors
/// Returns an error if the expression does not build, if an identifier is
/// unbound or reserved, or if a step violates a domain constraint.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use numstep::{number::Number, reduction_steps};
///
/// let bindings = HashMap::from([("x".to_string(), Number::from(1))]);
/// let steps = reduction_steps("(+ x (* 2 3))", &bindings).unwrap();
///
/// assert_eq!(steps, vec!["(+ 1 (* 2 3))", "(+ 1 6)", "7"]);
/// ```
pub fn reduction_steps(source: &str,
                       bindings: &HashMap<String, Number>)
                       -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let root = parse(source)?;
    let mut stepper = Stepper::new(&root, bindings.clone());

    let mut steps = Vec::new();
    loop {
        let tokens = stepper.next_step()?;
        steps.push(lexer::render(&tokens));
        if stepper.is_terminal() {
            break;
        }
    }

    Ok(steps)
}
