use std::collections::HashMap;

use numstep::{
    error::{BuildError, EvalError},
    lexer::{render, tokenize},
    number::Number,
    tree::{
        Constant, ExprNode, StepState, Stepper,
        builder::{build_iteratively, build_recursively, reconstruct},
        evaluator::evaluate,
    },
};

fn build(source: &str) -> ExprNode {
    let tokens = tokenize(source);
    build_recursively(&mut tokens.iter().peekable())
        .unwrap_or_else(|e| panic!("'{source}' did not build: {e}"))
}

fn build_error(source: &str) -> BuildError {
    let tokens = tokenize(source);
    build_recursively(&mut tokens.iter().peekable())
        .err()
        .unwrap_or_else(|| panic!("'{source}' built but was expected to fail"))
}

fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, Number> {
    pairs.iter()
         .map(|(name, value)| ((*name).to_string(), value.parse().unwrap()))
         .collect()
}

fn eval(source: &str, pairs: &[(&str, &str)]) -> Number {
    evaluate(&build(source), &bindings(pairs))
        .unwrap_or_else(|e| panic!("'{source}' did not evaluate: {e}"))
}

#[test]
fn round_trip_reconstruction_preserves_tokens() {
    for source in ["42",
                   "-7",
                   "2/3",
                   "4.5",
                   "x",
                   "(+)",
                   "(* 2 3)",
                   "(+ 1 (* x 2/3) 4.5)",
                   "(- (/ 10 2) (sqrt 9))",
                   "(expt 2 (log 100 10))"]
    {
        let tokens = tokenize(source);
        let root = build_recursively(&mut tokens.iter().peekable()).unwrap();
        assert_eq!(reconstruct(&root), tokens, "round trip of '{source}'");
        assert_eq!(render(&reconstruct(&root)), source);
    }
}

#[test]
fn both_builders_agree_on_accepted_inputs() {
    for source in ["7",
                   "x-y",
                   "(+)",
                   "(*)",
                   "(- 1)",
                   "(+ 1 2 3 4)",
                   "(+ 1 (* x 2/3) 4.5)",
                   "(expt (+ 1 1) (sqrt (+ 4 5)))",
                   "(log (expt 10 2) 10)"]
    {
        let tokens = tokenize(source);
        let recursive = build_recursively(&mut tokens.iter().peekable()).unwrap();
        let iterative = build_iteratively(&mut tokens.iter().peekable()).unwrap();
        assert_eq!(recursive, iterative, "builders disagree on '{source}'");
    }
}

#[test]
fn both_builders_reject_the_same_inputs() {
    for source in ["",
                   "(+ 1 2 3",
                   "(ln 1 2)",
                   "(foo 1)",
                   "1 2",
                   "(+ 1 2) x",
                   "()",
                   "( +",
                   "( foo",
                   ")",
                   "(+ 1a)",
                   "(expt 2)",
                   "(- )"]
    {
        let tokens = tokenize(source);
        let recursive = build_recursively(&mut tokens.iter().peekable());
        let iterative = build_iteratively(&mut tokens.iter().peekable());
        assert!(recursive.is_err(), "recursive builder accepted '{source}'");
        assert_eq!(format!("{recursive:?}"),
                   format!("{iterative:?}"),
                   "builders disagree on '{source}'");
    }
}

#[test]
fn unbalanced_parentheses_are_detected() {
    assert!(matches!(build_error("(+ 1 2 3"), BuildError::MismatchedParentheses));
    assert!(matches!(build_error("()"), BuildError::MismatchedParentheses));
    assert!(matches!(build_error(""), BuildError::NoExpression));
}

#[test]
fn exhaustion_preempts_operator_validation() {
    assert!(matches!(build_error("( foo"), BuildError::MismatchedParentheses));
    assert!(matches!(build_error("( +"), BuildError::MismatchedParentheses));
}

#[test]
fn unknown_operators_are_rejected() {
    match build_error("(foo 1)") {
        BuildError::UndefinedOperator { symbol } => assert_eq!(symbol, "foo"),
        other => panic!("expected an operator error, got {other:?}"),
    }
    assert!(matches!(build_error("(( + 1 2))"), BuildError::UndefinedOperator { .. }));
}

#[test]
fn arity_violations_carry_the_accepted_range() {
    match build_error("(ln 1 2)") {
        BuildError::WrongOperandCount { actual, min, max } => {
            assert_eq!(actual, 2);
            assert_eq!(min, 1);
            assert_eq!(max, Some(1));
        },
        other => panic!("expected an arity error, got {other:?}"),
    }

    match build_error("(-)") {
        BuildError::WrongOperandCount { actual, min, max } => {
            assert_eq!(actual, 0);
            assert_eq!(min, 1);
            assert_eq!(max, None);
        },
        other => panic!("expected an arity error, got {other:?}"),
    }

    assert!(matches!(build_error("(expt 2)"), BuildError::WrongOperandCount { .. }));
    assert!(matches!(build_error("(sqrt)"), BuildError::WrongOperandCount { .. }));
}

#[test]
fn trailing_tokens_are_rejected() {
    match build_error("(+ 1 2) x") {
        BuildError::TrailingToken { token } => assert_eq!(token, "x"),
        other => panic!("expected a trailing token error, got {other:?}"),
    }
    assert!(matches!(build_error("1 2"), BuildError::TrailingToken { .. }));
}

#[test]
fn identifier_grammar_accepts_letters_and_hyphens_only() {
    assert!(matches!(build("x-y"), ExprNode::Identifier(_)));
    assert!(matches!(build("straße"), ExprNode::Identifier(_)));
    assert!(matches!(build("Übergang"), ExprNode::Identifier(_)));

    match build_error("(+ 1a 1)") {
        BuildError::IllegalIdentifier { token } => assert_eq!(token, "1a"),
        other => panic!("expected an identifier error, got {other:?}"),
    }
    assert!(matches!(build_error("(+ - 1)"), BuildError::IllegalIdentifier { .. }));
    assert!(matches!(build_error("1/0"), BuildError::IllegalIdentifier { .. }));
}

#[test]
fn evaluation_folds_variadic_operators() {
    assert_eq!(eval("(+)", &[]), Number::from(0));
    assert_eq!(eval("(*)", &[]), Number::from(1));
    assert_eq!(eval("(+ 1 2 3 4)", &[]), Number::from(10));
    assert_eq!(eval("(* 2 3 4)", &[]), Number::from(24));
    assert_eq!(eval("(- 10 1 2)", &[]), Number::from(7));
    assert_eq!(eval("(/ 24 2 3)", &[]), Number::from(4));
}

#[test]
fn evaluation_dispatches_unary_forms() {
    assert_eq!(eval("(- 5)", &[]), Number::from(-5));
    assert_eq!(eval("(/ 2)", &[]).to_string(), "1/2");
    assert_eq!(eval("(sqrt 9)", &[]), Number::from(3));
    assert_eq!(eval("(ln 1)", &[]), Number::from(0));
}

#[test]
fn evaluation_resolves_identifiers_through_the_bindings() {
    assert_eq!(eval("(+ x (* 2 3))", &[("x", "1")]), Number::from(7));
    assert_eq!(eval("(* x x)", &[("x", "2/3")]).to_string(), "4/9");

    let undefined = evaluate(&build("(+ x 1)"), &HashMap::new());
    assert!(matches!(undefined, Err(EvalError::UndefinedIdentifier { .. })));
}

#[test]
fn reserved_constants_are_rejected_through_the_bindings() {
    let reserved = evaluate(&build("(+ pi 1)"), &HashMap::new());
    assert!(matches!(reserved, Err(EvalError::ReservedIdentifier { .. })));

    let still_reserved = evaluate(&build("(+ pi 1)"), &bindings(&[("pi", "3")]));
    assert!(matches!(still_reserved, Err(EvalError::ReservedIdentifier { .. })));

    let e_reserved = evaluate(&build("(exp e)"), &bindings(&[("e", "1")]));
    assert!(matches!(e_reserved, Err(EvalError::ReservedIdentifier { .. })));
}

#[test]
fn constants_substitute_as_literals() {
    let root = Constant::substitute(&build("(* 2 pi)"));
    let value = evaluate(&root, &HashMap::new()).unwrap();
    assert_eq!(value.to_string(), "6.283185307179586");
}

#[test]
fn domain_errors_surface_at_evaluation_time() {
    assert!(matches!(evaluate(&build("(/ 1 0)"), &HashMap::new()),
                     Err(EvalError::WrongOperand { .. })));
    assert!(matches!(evaluate(&build("(/ 0)"), &HashMap::new()),
                     Err(EvalError::WrongOperand { .. })));
    assert!(matches!(evaluate(&build("(expt 0 3)"), &HashMap::new()),
                     Err(EvalError::WrongOperand { .. })));
    assert!(matches!(evaluate(&build("(ln 0)"), &HashMap::new()),
                     Err(EvalError::WrongOperand { .. })));
}

#[test]
fn stepper_walks_the_documented_scenario() {
    let mut stepper = Stepper::new(&build("(+ x (* 2 3))"), bindings(&[("x", "1")]));
    assert_eq!(stepper.state(), StepState::NeedsSubstitution);

    assert_eq!(render(&stepper.next_step().unwrap()), "(+ 1 (* 2 3))");
    assert_eq!(stepper.state(), StepState::Reducing);

    assert_eq!(render(&stepper.next_step().unwrap()), "(+ 1 6)");
    assert_eq!(render(&stepper.next_step().unwrap()), "7");
    assert_eq!(stepper.state(), StepState::Terminal);

    assert_eq!(render(&stepper.next_step().unwrap()), "7");
    assert_eq!(stepper.state(), StepState::Terminal);
}

#[test]
fn stepper_folds_independent_leaves_in_one_pass() {
    let mut stepper = Stepper::new(&build("(+ (* 2 3) (* 4 5))"), HashMap::new());

    assert_eq!(render(&stepper.next_step().unwrap()), "(+ 6 20)");
    assert_eq!(render(&stepper.next_step().unwrap()), "26");
    assert!(stepper.is_terminal());
}

#[test]
fn stepper_never_folds_a_parent_before_its_children() {
    let mut stepper = Stepper::new(&build("(+ 1 (* 2 (+ 3 4)))"), HashMap::new());

    assert_eq!(render(&stepper.next_step().unwrap()), "(+ 1 (* 2 7))");
    assert_eq!(render(&stepper.next_step().unwrap()), "(+ 1 14)");
    assert_eq!(render(&stepper.next_step().unwrap()), "15");
}

#[test]
fn stepper_substitution_does_not_fold() {
    let mut stepper = Stepper::new(&build("(* y (+ 1 2))"), bindings(&[("y", "2")]));

    assert_eq!(render(&stepper.next_step().unwrap()), "(* 2 (+ 1 2))");
    assert_eq!(render(&stepper.next_step().unwrap()), "(* 2 3)");
    assert_eq!(render(&stepper.next_step().unwrap()), "6");
}

#[test]
fn stepper_handles_single_token_trees() {
    let mut stepper = Stepper::new(&build("x"), bindings(&[("x", "5")]));
    assert_eq!(render(&stepper.next_step().unwrap()), "5");
    assert!(stepper.is_terminal());
    assert_eq!(render(&stepper.next_step().unwrap()), "5");

    let mut stepper = Stepper::new(&build("7"), HashMap::new());
    assert_eq!(render(&stepper.next_step().unwrap()), "7");
    assert!(stepper.is_terminal());
}

#[test]
fn stepper_leaves_the_callers_tree_untouched() {
    let root = build("(+ 1 2)");
    let mut stepper = Stepper::new(&root, HashMap::new());
    stepper.next_step().unwrap();

    assert_eq!(root.to_string(), "(+ 1 2)");
    assert_eq!(stepper.root().to_string(), "3");
}

#[test]
fn stepper_reports_substitution_failures() {
    let mut stepper = Stepper::new(&build("(+ x 1)"), HashMap::new());
    assert!(matches!(stepper.next_step(),
                     Err(EvalError::UndefinedIdentifier { .. })));
}

#[test]
fn reduction_steps_collects_every_intermediate_form() {
    let steps = numstep::reduction_steps("(+ x (* 2 3))", &bindings(&[("x", "1")])).unwrap();
    assert_eq!(steps, vec!["(+ 1 (* 2 3))", "(+ 1 6)", "7"]);

    let steps = numstep::reduction_steps("(- 8)", &HashMap::new()).unwrap();
    assert_eq!(steps, vec!["-8"]);
}
