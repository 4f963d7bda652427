use num_bigint::BigInt;
use numstep::{
    error::EvalError,
    number::{Fraction, Number, Real},
};

fn number(literal: &str) -> Number {
    literal.parse().unwrap_or_else(|e| panic!("'{literal}' did not parse: {e}"))
}

fn assert_wrong_operand(result: Result<Number, EvalError>) {
    match result {
        Err(EvalError::WrongOperand { .. }) => {},
        other => panic!("expected a domain error, got {other:?}"),
    }
}

#[test]
fn fractions_are_reduced_on_every_construction() {
    let fraction = Fraction::new(BigInt::from(2), BigInt::from(-4)).unwrap();
    assert_eq!(fraction.to_string(), "-1/2");

    let fraction = Fraction::new(BigInt::from(6), BigInt::from(3)).unwrap();
    assert_eq!(fraction.to_string(), "2/1");

    let fraction = Fraction::new(BigInt::from(0), BigInt::from(7)).unwrap();
    assert_eq!(fraction.to_string(), "0/1");

    assert!(Fraction::new(BigInt::from(1), BigInt::from(0)).is_err());
}

#[test]
fn fraction_arithmetic_reduces_results() {
    let half = Fraction::new(BigInt::from(1), BigInt::from(2)).unwrap();
    let third = Fraction::new(BigInt::from(1), BigInt::from(3)).unwrap();

    assert_eq!(half.plus(&third).to_string(), "5/6");
    assert_eq!(half.times(&third).to_string(), "1/6");
    assert_eq!(half.plus_integer(&BigInt::from(2)).to_string(), "5/2");
    assert_eq!(half.times_integer(&BigInt::from(4)).to_string(), "2/1");
    assert_eq!(half.negate().invert().to_string(), "-2/1");
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_eq!(number("2").plus(&number("3")), Number::from(5));
    assert_eq!(number("8").minus(&number("5")), Number::from(3));
    assert_eq!(number("7").times(&number("9")), Number::from(63));
}

#[test]
fn integer_division_demotes_only_when_exact() {
    assert_eq!(number("6").divide(&number("3")).unwrap(), Number::from(2));
    assert_eq!(number("1").divide(&number("3")).unwrap(), number("1/3"));
    assert_eq!(number("1").divide(&number("3")).unwrap().to_string(), "1/3");
}

#[test]
fn mixed_arithmetic_promotes_and_demotes() {
    let sum = number("1").plus(&number("0.5"));
    assert_eq!(sum, number("1.5"));
    assert_eq!(sum.to_string(), "1.5");

    assert_eq!(number("1/2").plus(&number("1/2")), Number::from(1));
    assert_eq!(number("2.5").times(&number("2")), Number::from(5));
    assert_eq!(number("1/2").minus(&number("1/3")).to_string(), "1/6");
    assert_eq!(number("3").minus(&number("1/3")).to_string(), "8/3");
}

#[test]
fn equality_is_variant_sensitive() {
    assert_ne!(number("0.5"), number("1/2"));
    assert_ne!(number("1"), number("1.0"));
    assert_eq!(number("2/4"), number("1/2"));
}

#[test]
fn division_by_zero_fails_in_every_variant() {
    assert_wrong_operand(number("1").divide(&number("0")));
    assert_wrong_operand(number("1").divide(&number("0.0")));
    assert_wrong_operand(number("1").divide(&number("0/5")));
    assert_wrong_operand(number("1.5").divide(&number("0")));
    assert_wrong_operand(number("1/2").divide(&number("0.0")));
    assert_wrong_operand(number("0").reciprocal());
    assert_wrong_operand(number("0.0").reciprocal());
}

#[test]
fn reciprocal_yields_simplest_representation() {
    assert_eq!(number("2").reciprocal().unwrap().to_string(), "1/2");
    assert_eq!(number("-2").reciprocal().unwrap().to_string(), "-1/2");
    assert_eq!(number("1/2").reciprocal().unwrap(), Number::from(2));
    assert_eq!(number("1").reciprocal().unwrap(), Number::from(1));
}

#[test]
fn expt_with_integer_operands_is_exact() {
    let kilo = number("2").expt(&number("10")).unwrap();
    assert_eq!(kilo, Number::from(1024));

    let large = number("10").expt(&number("40")).unwrap();
    assert_eq!(large.to_string(), format!("1{}", "0".repeat(40)));
}

#[test]
fn expt_rejects_non_positive_operands() {
    assert_wrong_operand(number("0").expt(&number("3")));
    assert_wrong_operand(number("-2").expt(&number("3")));
    assert_wrong_operand(number("2").expt(&number("0")));
    assert_wrong_operand(number("2").expt(&number("-1")));
    assert_wrong_operand(number("2").expt(&number("-1/2")));
    assert_wrong_operand(number("2").expt(&number("0.0")));
}

#[test]
fn expt_of_rational_base_computes_at_fixed_scale() {
    let quarter = number("1/2").expt(&number("2")).unwrap();
    assert_eq!(quarter.to_string(), "0.25");
}

#[test]
fn expt_with_fractional_exponent_approximates_the_root() {
    let root = number("2").expt(&number("0.5")).unwrap();
    let Number::Real(value) = root else {
        panic!("expected a real result");
    };
    assert!(value > "1.4142".parse::<Real>().unwrap());
    assert!(value < "1.4143".parse::<Real>().unwrap());
}

#[test]
fn sqrt_demotes_when_exact() {
    assert_eq!(number("9").sqrt().unwrap(), Number::from(3));
    assert_eq!(number("1/4").sqrt().unwrap().to_string(), "0.5");
    assert_eq!(number("2").sqrt().unwrap().to_string(), "1.414213562373095");
}

#[test]
fn sqrt_rejects_negative_radicands() {
    assert_wrong_operand(number("-4").sqrt());
    assert_wrong_operand(number("-0.25").sqrt());
}

#[test]
fn ln_of_one_is_zero() {
    assert_eq!(number("1").ln().unwrap(), Number::from(0));
    assert_wrong_operand(number("0").ln());
    assert_wrong_operand(number("-1").ln());
}

#[test]
fn ln_approximates_the_natural_logarithm() {
    let Number::Real(value) = number("10").ln().unwrap() else {
        panic!("expected a real result");
    };
    assert!(value > "2.302585".parse::<Real>().unwrap());
    assert!(value < "2.302586".parse::<Real>().unwrap());
}

#[test]
fn log_with_matching_powers_is_exact() {
    assert_eq!(number("100").log(&number("10")).unwrap(), Number::from(2));
    assert_wrong_operand(number("100").log(&number("0")));
    assert_wrong_operand(number("0").log(&number("10")));
    assert_wrong_operand(number("100").log(&number("1")));
}

#[test]
fn exp_approximates_eulers_number() {
    let Number::Real(value) = number("1").exp().unwrap() else {
        panic!("expected a real result");
    };
    assert!(value > "2.71828".parse::<Real>().unwrap());
    assert!(value < "2.71829".parse::<Real>().unwrap());

    assert_wrong_operand(number("0").exp());
    assert_wrong_operand(number("-1").exp());
}

#[test]
fn real_literals_render_at_fixed_scale_without_trailing_zeros() {
    assert_eq!(number("2.500").to_string(), "2.5");
    assert_eq!(number("-0.5").to_string(), "-0.5");
    assert_eq!(number("1e5").to_string(), "100000");
    assert_eq!(number("0.000000000000000001").to_string(), "0");
    assert_eq!(number("0.0000000000000005").to_string(), "0.000000000000001");
}

#[test]
fn literal_grammar_covers_the_three_forms() {
    assert!(matches!(number("42"), Number::Integer(_)));
    assert!(matches!(number("-42"), Number::Integer(_)));
    assert!(matches!(number("3.14"), Number::Real(_)));
    assert!(matches!(number("-2/4"), Number::Rational(_)));
    assert_eq!(number("-2/4").to_string(), "-1/2");

    assert!("1/0".parse::<Number>().is_err());
    assert!("1/-2".parse::<Number>().is_err());
    assert!("x".parse::<Number>().is_err());
    assert!("".parse::<Number>().is_err());
}

#[test]
fn conversions_truncate_toward_zero() {
    assert_eq!(number("7/2").to_integer(), BigInt::from(3));
    assert_eq!(number("-7/2").to_integer(), BigInt::from(-3));
    assert_eq!(number("2.9").to_integer(), BigInt::from(2));
    assert_eq!(number("-2.9").to_integer(), BigInt::from(-2));
}
