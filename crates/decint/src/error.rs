//! Error type and the compile-time validation switch.

/// Precondition violations surfaced by the fallible operations.
///
/// With the default `validate` feature the checks run and these errors
/// are returned; with the feature disabled the checks compile out and a
/// violated precondition yields unspecified (but memory-safe) results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parsing rejected an empty string.
    #[error("cannot parse an integer from an empty string")]
    EmptyInput,

    /// Parsing hit a byte that is not an ASCII digit.
    #[error("invalid digit at byte {0}")]
    InvalidDigit(usize),

    /// A negative scalar cannot become an `Unsigned`.
    #[error("cannot represent a negative value as an unsigned integer")]
    NegativeValue,

    /// A NaN or infinite float cannot become an integer.
    #[error("cannot convert a non-finite floating-point value")]
    NonFinite,

    /// Unsigned subtraction would go below zero.
    #[error("subtrahend exceeds minuend in unsigned subtraction")]
    SubtractionUnderflow,

    /// Zero cannot be decremented.
    #[error("cannot decrement zero")]
    DecrementZero,

    /// Division or modulus by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operand is longer than the transform multiplication cap.
    #[error("operand length {0} limbs exceeds the transform limit")]
    OperandTooLarge(usize),

    /// A negative signed value cannot convert to an unsigned target.
    #[error("cannot convert a negative value to an unsigned target")]
    NegativeToUnsigned,
}

/// Precondition check, compiled out when the `validate` feature is off.
macro_rules! ensure {
    ($condition:expr, $error:expr) => {
        if cfg!(feature = "validate") && !($condition) {
            return Err($error);
        }
    };
}
pub(crate) use ensure;
