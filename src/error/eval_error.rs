/// The relation an operand was expected to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// The operand must differ from the expected value.
    DifferentFrom,
    /// The operand must be strictly greater than the expected value.
    GreaterThan,
    /// The operand must be greater than or equal to the expected value.
    GreaterOrEqual,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DifferentFrom => write!(f, "different from"),
            Self::GreaterThan => write!(f, "greater than"),
            Self::GreaterOrEqual => write!(f, "greater than or equal to"),
        }
    }
}

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and stepping.
pub enum EvalError {
    /// Tried to resolve an identifier that is absent from the binding map.
    UndefinedIdentifier {
        /// The name of the identifier.
        name: String,
    },
    /// Tried to resolve a reserved constant name through the binding map.
    ReservedIdentifier {
        /// The reserved name.
        name: String,
    },
    /// An operand violated a domain constraint of its operation.
    WrongOperand {
        /// Rendering of the offending operand.
        operand:    String,
        /// The relation the operand was expected to satisfy.
        comparison: Comparison,
        /// Rendering of the expected value.
        expected:   String,
    },
    /// The magnitude of a result is too large to represent.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedIdentifier { name } => {
                write!(f, "Undefined identifier '{name}'.")
            },

            Self::ReservedIdentifier { name } => {
                write!(f, "Identifier '{name}' is reserved and cannot be bound.")
            },

            Self::WrongOperand { operand,
                                 comparison,
                                 expected, } => {
                write!(f, "Operand {operand} must be {comparison} {expected}.")
            },

            Self::Overflow => write!(f, "Result magnitude is too large to represent."),
        }
    }
}

impl std::error::Error for EvalError {}
