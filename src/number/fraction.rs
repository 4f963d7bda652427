use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{
    error::{Comparison, EvalError},
    tree::evaluator::EvalResult,
};

/// Represents a rational number as a fraction in lowest terms.
///
/// The sign lives in the numerator; the denominator is strictly positive.
/// Every constructor and every arithmetic operation reduces its result by
/// the greatest common divisor, so `gcd(|numerator|, denominator) == 1`
/// holds for every value of this type. Fractions are immutable; operations
/// return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator:   BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Constructs a reduced fraction from a numerator and a denominator.
    ///
    /// A negative denominator moves the sign into the numerator before the
    /// pair is reduced.
    ///
    /// # Parameters
    /// - `numerator`: The numerator, carrying the sign.
    /// - `denominator`: The denominator.
    ///
    /// # Errors
    /// Returns `EvalError::WrongOperand` if the denominator is zero.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use numstep::number::Fraction;
    ///
    /// let half = Fraction::new(BigInt::from(2), BigInt::from(-4)).unwrap();
    /// assert_eq!(half.to_string(), "-1/2");
    /// ```
    pub fn new(numerator: BigInt, denominator: BigInt) -> EvalResult<Self> {
        if denominator.is_zero() {
            return Err(EvalError::WrongOperand { operand:    denominator.to_string(),
                                                 comparison: Comparison::DifferentFrom,
                                                 expected:   "0".to_string(), });
        }

        Ok(Self::reduced(numerator, denominator))
    }

    /// Normalizes the sign and reduces the pair by its greatest common
    /// divisor. The denominator must not be zero.
    pub(crate) fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let divisor = numerator.gcd(&denominator);
        if divisor.is_one() {
            Self { numerator,
                   denominator }
        } else {
            Self { numerator:   numerator / &divisor,
                   denominator: denominator / divisor, }
        }
    }

    /// The fraction `0/1`.
    #[must_use]
    pub fn zero() -> Self {
        Self { numerator:   BigInt::zero(),
               denominator: BigInt::one(), }
    }

    /// The fraction `1/1`.
    #[must_use]
    pub fn one() -> Self {
        Self { numerator:   BigInt::one(),
               denominator: BigInt::one(), }
    }

    /// Returns the numerator of this fraction.
    #[must_use]
    pub const fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the denominator of this fraction.
    #[must_use]
    pub const fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns `true` if this fraction is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns a fraction whose value is `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { numerator:   -&self.numerator,
               denominator: self.denominator.clone(), }
    }

    /// Returns the reduced sum of this fraction and another fraction.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self::reduced(&self.numerator * &other.denominator
                      + &self.denominator * &other.numerator,
                      &self.denominator * &other.denominator)
    }

    /// Returns the reduced sum of this fraction and an integer.
    #[must_use]
    pub fn plus_integer(&self, other: &BigInt) -> Self {
        Self::reduced(&self.numerator + &self.denominator * other,
                      self.denominator.clone())
    }

    /// Returns the reduced product of this fraction and another fraction.
    #[must_use]
    pub fn times(&self, other: &Self) -> Self {
        Self::reduced(&self.numerator * &other.numerator,
                      &self.denominator * &other.denominator)
    }

    /// Returns the reduced product of this fraction and an integer.
    #[must_use]
    pub fn times_integer(&self, other: &BigInt) -> Self {
        Self::reduced(&self.numerator * other, self.denominator.clone())
    }

    /// Returns the reciprocal of this fraction, keeping the sign in the
    /// numerator. Callers must not invert zero.
    #[must_use]
    pub fn invert(&self) -> Self {
        if self.numerator.is_negative() {
            Self { numerator:   -&self.denominator,
                   denominator: -&self.numerator, }
        } else {
            Self { numerator:   self.denominator.clone(),
                   denominator: self.numerator.clone(), }
        }
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
