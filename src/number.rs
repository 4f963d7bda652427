/// The numeric tower itself.
///
/// This module declares the `Number` enum with its three variants (exact
/// integers, exact rationals, fixed-scale reals), the promotion rules for
/// mixed-variant arithmetic, and the manually implemented transcendental
/// operations. Every arithmetic result is normalized down to the simplest
/// exact representation before it is returned.
///
/// # Responsibilities
/// - Defines the `Number` enum and its conversions between variants.
/// - Implements arithmetic with symmetric promotion and integer demotion.
/// - Implements `sqrt`, `expt`, `exp`, `ln` and `log` over the shared
///   digit-shifting logarithm machinery.
pub mod core;
/// Exact rational values.
///
/// Declares the `Fraction` type: an arbitrary-precision numerator over a
/// strictly positive denominator, reduced to lowest terms on every
/// construction including the results of arithmetic.
pub mod fraction;
/// Fixed-scale decimal values.
///
/// Declares the `Real` type: a decimal number stored as an integer count of
/// `10^-15` units. The scale and the half-up rounding mode are process-wide
/// constants shared by every `Real` instance and every conversion into one.
pub mod real;

pub use self::core::{InvalidNumber, Number};
pub use fraction::Fraction;
pub use real::Real;
