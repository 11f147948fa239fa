//! The signed integer type: an unsigned magnitude plus a sign flag.

use std::cmp::Ordering;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, RemAssign, SubAssign};

use crate::error::{ensure, Error};
use crate::macros::forward_binop;
use crate::unsigned::Unsigned;

/// An arbitrary-precision signed integer.
///
/// Zero is never negative, so equality and ordering stay a total order
/// over numeric values. Division truncates toward zero and the remainder
/// takes the sign of the dividend, so `x == (x / y) * y + x % y` holds
/// for every non-zero `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signed {
    magnitude: Unsigned,
    negative: bool,
}

impl Signed {
    /// The value 0.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            magnitude: Unsigned::zero(),
            negative: false,
        }
    }

    fn normalized(magnitude: Unsigned, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self {
            magnitude,
            negative,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    #[must_use]
    pub fn magnitude(&self) -> &Unsigned {
        &self.magnitude
    }

    #[must_use]
    pub fn into_magnitude(self) -> Unsigned {
        self.magnitude
    }

    #[must_use]
    pub fn abs(&self) -> Signed {
        Self {
            magnitude: self.magnitude.clone(),
            negative: false,
        }
    }

    /// Parse a decimal string with an optional leading '-'.
    pub fn from_decimal(text: &str) -> Result<Self, Error> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let magnitude = Unsigned::from_decimal(digits)?;
        Ok(Self::normalized(magnitude, negative))
    }

    /// Decimal representation; '-' appears only for negative non-zero
    /// values.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        if self.negative {
            format!("-{}", self.magnitude.to_decimal())
        } else {
            self.magnitude.to_decimal()
        }
    }

    /// Multiplication that reports a transform-cap overflow instead of
    /// panicking.
    pub fn checked_mul(&self, other: &Signed) -> Result<Signed, Error> {
        let magnitude = self.magnitude.checked_mul(&other.magnitude)?;
        Ok(Self::normalized(magnitude, self.negative ^ other.negative))
    }

    /// Truncating quotient and the dividend-signed remainder, with
    /// `self == q·other + r`.
    pub fn divmod(&self, other: &Signed) -> Result<(Signed, Signed), Error> {
        ensure!(!other.is_zero(), Error::DivisionByZero);
        let (quotient_magnitude, remainder_magnitude) =
            self.magnitude.divmod(&other.magnitude)?;
        let quotient = Self::normalized(quotient_magnitude, self.negative ^ other.negative);
        let remainder = Self::normalized(remainder_magnitude, self.negative);
        Ok((quotient, remainder))
    }

    // --- scalar conversions ------------------------------------------------

    /// Fails for negative values; otherwise wraps like
    /// [`Unsigned::to_u64`].
    pub fn to_u64(&self) -> Result<u64, Error> {
        ensure!(!self.negative, Error::NegativeToUnsigned);
        Ok(self.magnitude.to_u64())
    }

    /// Fails for negative values; otherwise wraps like
    /// [`Unsigned::to_u128`].
    pub fn to_u128(&self) -> Result<u128, Error> {
        ensure!(!self.negative, Error::NegativeToUnsigned);
        Ok(self.magnitude.to_u128())
    }

    /// Wrapping two's-complement conversion.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        let magnitude = self.magnitude.to_u64();
        if self.negative {
            magnitude.wrapping_neg() as i64
        } else {
            magnitude as i64
        }
    }

    /// Wrapping two's-complement conversion.
    #[must_use]
    pub fn to_i128(&self) -> i128 {
        let magnitude = self.magnitude.to_u128();
        if self.negative {
            magnitude.wrapping_neg() as i128
        } else {
            magnitude as i128
        }
    }

    /// Signed Horner evaluation as `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.magnitude.to_f64();
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Default for Signed {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Unsigned> for Signed {
    fn from(magnitude: Unsigned) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }
}

impl TryFrom<Signed> for Unsigned {
    type Error = Error;

    fn try_from(value: Signed) -> Result<Self, Error> {
        ensure!(!value.negative, Error::NegativeValue);
        Ok(value.magnitude)
    }
}

impl TryFrom<&Signed> for Unsigned {
    type Error = Error;

    fn try_from(value: &Signed) -> Result<Self, Error> {
        ensure!(!value.negative, Error::NegativeValue);
        Ok(value.magnitude.clone())
    }
}

macro_rules! impl_from_unsigned_scalar {
    ($($scalar:ty),* $(,)?) => {$(
        impl From<$scalar> for Signed {
            fn from(value: $scalar) -> Self {
                Self {
                    magnitude: Unsigned::from(value),
                    negative: false,
                }
            }
        }
    )*};
}
impl_from_unsigned_scalar!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_signed_scalar {
    ($($scalar:ty),* $(,)?) => {$(
        impl From<$scalar> for Signed {
            fn from(value: $scalar) -> Self {
                Self::normalized(Unsigned::from(value.unsigned_abs()), value < 0)
            }
        }
    )*};
}
impl_from_signed_scalar!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for Signed {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Error> {
        ensure!(value.is_finite(), Error::NonFinite);
        let magnitude = Unsigned::try_from(value.abs())?;
        Ok(Self::normalized(magnitude, value < 0.0))
    }
}

impl TryFrom<f32> for Signed {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Error> {
        Self::try_from(f64::from(value))
    }
}

// --- ordering --------------------------------------------------------------

impl PartialOrd for Signed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Signed {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

// --- operators -------------------------------------------------------------

impl Neg for Signed {
    type Output = Signed;

    fn neg(mut self) -> Signed {
        if !self.magnitude.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &Signed {
    type Output = Signed;

    fn neg(self) -> Signed {
        -self.clone()
    }
}

impl AddAssign<&Signed> for Signed {
    fn add_assign(&mut self, other: &Signed) {
        if self.negative == other.negative {
            self.magnitude += &other.magnitude;
        } else if self.magnitude < other.magnitude {
            self.negative = !self.negative;
            self.magnitude = &other.magnitude - &self.magnitude;
        } else {
            self.magnitude -= &other.magnitude;
        }
        self.negative = self.negative && !self.magnitude.is_zero();
    }
}

impl SubAssign<&Signed> for Signed {
    fn sub_assign(&mut self, other: &Signed) {
        if self.negative != other.negative {
            self.magnitude += &other.magnitude;
        } else if self.magnitude < other.magnitude {
            self.negative = !self.negative;
            self.magnitude = &other.magnitude - &self.magnitude;
        } else {
            self.magnitude -= &other.magnitude;
        }
        self.negative = self.negative && !self.magnitude.is_zero();
    }
}

impl MulAssign<&Signed> for Signed {
    /// Panics when an operand exceeds the transform cap.
    fn mul_assign(&mut self, other: &Signed) {
        self.magnitude *= &other.magnitude;
        self.negative = (self.negative ^ other.negative) && !self.magnitude.is_zero();
    }
}

impl DivAssign<&Signed> for Signed {
    /// Panics on division by zero.
    fn div_assign(&mut self, other: &Signed) {
        self.magnitude /= &other.magnitude;
        self.negative = (self.negative ^ other.negative) && !self.magnitude.is_zero();
    }
}

impl RemAssign<&Signed> for Signed {
    /// Panics on modulus by zero. Defined as `x - (x / y) * y`, so the
    /// result takes the dividend's sign.
    fn rem_assign(&mut self, other: &Signed) {
        let quotient = &*self / other;
        *self -= &(&quotient * other);
    }
}

forward_binop!(Signed, Add::add, AddAssign::add_assign);
forward_binop!(Signed, Sub::sub, SubAssign::sub_assign);
forward_binop!(Signed, Mul::mul, MulAssign::mul_assign);
forward_binop!(Signed, Div::div, DivAssign::div_assign);
forward_binop!(Signed, Rem::rem, RemAssign::rem_assign);
