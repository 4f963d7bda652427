use crate::error::BuildError;

/// Represents an operator of the prefix notation.
///
/// Each operator carries its display symbol and an arity class that is
/// enforced when an operation node is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`), variadic from zero operands.
    Add,
    /// Subtraction (`-`), variadic from one operand; unary form negates.
    Sub,
    /// Multiplication (`*`), variadic from zero operands.
    Mul,
    /// Division (`/`), variadic from one operand; unary form reciprocates.
    Div,
    /// Euler's number raised to a power (`exp`), exactly one operand.
    Exp,
    /// Arbitrary power (`expt`), exactly two operands.
    Expt,
    /// Natural logarithm (`ln`), exactly one operand.
    Ln,
    /// Logarithm with explicit base (`log`), exactly two operands.
    Log,
    /// Square root (`sqrt`), exactly one operand.
    Sqrt,
}

/// The operand-count range accepted by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Any operand count of at least the given minimum.
    AtLeast(usize),
    /// Exactly the given operand count.
    Exactly(usize),
}

impl Arity {
    /// Checks an operand count against this arity class.
    ///
    /// # Errors
    /// Returns `BuildError::WrongOperandCount` carrying the actual count
    /// and the accepted range if the count falls outside it.
    pub const fn check(self, actual: usize) -> Result<(), BuildError> {
        match self {
            Self::AtLeast(min) => {
                if actual < min {
                    return Err(BuildError::WrongOperandCount { actual,
                                                               min,
                                                               max: None });
                }
            },
            Self::Exactly(count) => {
                if actual != count {
                    return Err(BuildError::WrongOperandCount { actual,
                                                               min: count,
                                                               max: Some(count) });
                }
            },
        }

        Ok(())
    }
}

impl Operator {
    /// Returns the display symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "exp",
            Self::Expt => "expt",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }

    /// Returns the operator denoted by the given symbol, if any.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "exp" => Some(Self::Exp),
            "expt" => Some(Self::Expt),
            "ln" => Some(Self::Ln),
            "log" => Some(Self::Log),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// Returns the arity class of this operator.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Mul => Arity::AtLeast(0),
            Self::Sub | Self::Div => Arity::AtLeast(1),
            Self::Exp | Self::Ln | Self::Sqrt => Arity::Exactly(1),
            Self::Expt | Self::Log => Arity::Exactly(2),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
