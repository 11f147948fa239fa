//! The unsigned magnitude type.

use std::cmp::Ordering;
use std::ops::{AddAssign, DivAssign, MulAssign, RemAssign, SubAssign};

use crate::arith;
use crate::constants::BASE;
use crate::div;
use crate::error::{ensure, Error};
use crate::limbs::LimbBuffer;
use crate::macros::forward_binop;
use crate::mul;
use crate::text;

/// An arbitrary-precision non-negative integer stored as base-10^8 limbs.
///
/// The representation is always canonical: a single limb, or a non-zero
/// most-significant limb. Zero is exactly `[0]`.
///
/// Addition, multiplication and comparison never fail. Subtraction
/// requires the minuend to be at least the subtrahend, division requires
/// a non-zero divisor, and multiplication of two operands at or above 64
/// limbs each is subject to the transform length cap; the operator
/// impls panic on those violations while [`Unsigned::checked_sub`],
/// [`Unsigned::checked_mul`] and [`Unsigned::divmod`] surface them as
/// [`Error`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsigned {
    mag: LimbBuffer,
}

impl Unsigned {
    /// The value 0.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            mag: LimbBuffer::zero(),
        }
    }

    /// The value 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from(1u32)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    /// Number of base-10^8 limbs in the canonical representation.
    #[must_use]
    pub fn limb_count(&self) -> usize {
        self.mag.len()
    }

    pub(crate) fn from_buffer(mag: LimbBuffer) -> Self {
        Self { mag }
    }

    /// Parse a decimal string of ASCII digits. Leading zeros are
    /// accepted and normalized away.
    pub fn from_decimal(text: &str) -> Result<Self, Error> {
        text::parse_digits(text).map(Self::from_buffer)
    }

    /// Decimal representation without leading zeros ("0" for zero).
    #[must_use]
    pub fn to_decimal(&self) -> String {
        text::emit_digits(&self.mag)
    }

    /// Add one in place.
    pub fn increment(&mut self) {
        arith::increment(&mut self.mag);
    }

    /// Subtract one in place; zero cannot be decremented.
    pub fn decrement(&mut self) -> Result<(), Error> {
        ensure!(!self.is_zero(), Error::DecrementZero);
        arith::decrement(&mut self.mag);
        Ok(())
    }

    /// Subtraction that reports underflow instead of panicking.
    pub fn checked_sub(&self, other: &Unsigned) -> Result<Unsigned, Error> {
        ensure!(
            arith::compare(&self.mag, &other.mag) != Ordering::Less,
            Error::SubtractionUnderflow
        );
        let mut result = self.clone();
        arith::sub_assign(&mut result.mag, &other.mag);
        Ok(result)
    }

    /// Multiplication that reports a transform-cap overflow instead of
    /// panicking.
    pub fn checked_mul(&self, other: &Unsigned) -> Result<Unsigned, Error> {
        mul::mul(&self.mag, &other.mag).map(Self::from_buffer)
    }

    /// Quotient and remainder. Guarantees `q·other + r == self` and
    /// `r < other`.
    pub fn divmod(&self, other: &Unsigned) -> Result<(Unsigned, Unsigned), Error> {
        ensure!(!other.is_zero(), Error::DivisionByZero);
        let (quotient, remainder) = div::divmod(&self.mag, &other.mag)?;
        Ok((Self::from_buffer(quotient), Self::from_buffer(remainder)))
    }
}

impl Default for Unsigned {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Unsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Unsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        arith::compare(&self.mag, &other.mag)
    }
}

// --- scalar constructors ---------------------------------------------------

macro_rules! impl_from_unsigned_scalar {
    ($($scalar:ty),* $(,)?) => {$(
        impl From<$scalar> for Unsigned {
            #[allow(clippy::cast_lossless)]
            fn from(value: $scalar) -> Self {
                let mut value = value as u128;
                let base = u128::from(BASE);
                let mut limbs = Vec::new();
                loop {
                    limbs.push((value % base) as u32);
                    value /= base;
                    if value == 0 {
                        break;
                    }
                }
                Self {
                    mag: LimbBuffer::from_raw(limbs),
                }
            }
        }
    )*};
}
impl_from_unsigned_scalar!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_from_signed_scalar {
    ($($scalar:ty),* $(,)?) => {$(
        impl TryFrom<$scalar> for Unsigned {
            type Error = Error;

            fn try_from(value: $scalar) -> Result<Self, Error> {
                ensure!(value >= 0, Error::NegativeValue);
                Ok(Self::from(value.unsigned_abs()))
            }
        }
    )*};
}
impl_try_from_signed_scalar!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for Unsigned {
    type Error = Error;

    /// Buckets the integral part of a finite non-negative value; the
    /// fraction is discarded.
    fn try_from(value: f64) -> Result<Self, Error> {
        ensure!(value.is_finite(), Error::NonFinite);
        ensure!(value >= 0.0, Error::NegativeValue);
        let base = f64::from(BASE);
        let mut value = value;
        let mut limbs = Vec::new();
        loop {
            limbs.push((value % base) as u32);
            value = (value / base).floor();
            if value <= 0.0 {
                break;
            }
        }
        Ok(Self {
            mag: LimbBuffer::from_raw(limbs),
        })
    }
}

impl TryFrom<f32> for Unsigned {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Error> {
        Self::try_from(f64::from(value))
    }
}

// --- scalar conversions ----------------------------------------------------

macro_rules! impl_to_unsigned_scalar {
    ($($method:ident -> $scalar:ty),* $(,)?) => {$(
        /// Horner evaluation in target arithmetic; values wider than the
        /// target wrap around.
        #[must_use]
        pub fn $method(&self) -> $scalar {
            self.mag.iter().rev().fold(0, |acc: $scalar, &limb| {
                acc.wrapping_mul(BASE as $scalar).wrapping_add(limb as $scalar)
            })
        }
    )*};
}

impl Unsigned {
    impl_to_unsigned_scalar!(to_u32 -> u32, to_u64 -> u64, to_u128 -> u128);

    /// Wrapping conversion reinterpreted as two's complement.
    #[must_use]
    pub fn to_i32(&self) -> i32 {
        self.to_u32() as i32
    }

    /// Wrapping conversion reinterpreted as two's complement.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        self.to_u64() as i64
    }

    /// Wrapping conversion reinterpreted as two's complement.
    #[must_use]
    pub fn to_i128(&self) -> i128 {
        self.to_u128() as i128
    }

    /// Horner evaluation as `f64`; very large values overflow to
    /// infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.mag
            .iter()
            .rev()
            .fold(0.0, |acc, &limb| acc * f64::from(BASE) + f64::from(limb))
    }
}

// --- operators -------------------------------------------------------------

impl AddAssign<&Unsigned> for Unsigned {
    fn add_assign(&mut self, other: &Unsigned) {
        arith::add_assign(&mut self.mag, &other.mag);
    }
}

impl SubAssign<&Unsigned> for Unsigned {
    /// Panics when `other` exceeds `self`.
    fn sub_assign(&mut self, other: &Unsigned) {
        if cfg!(feature = "validate")
            && arith::compare(&self.mag, &other.mag) == Ordering::Less
        {
            panic!("{}", Error::SubtractionUnderflow);
        }
        arith::sub_assign(&mut self.mag, &other.mag);
    }
}

impl MulAssign<&Unsigned> for Unsigned {
    /// Panics when an operand exceeds the transform cap.
    fn mul_assign(&mut self, other: &Unsigned) {
        match mul::mul(&self.mag, &other.mag) {
            Ok(product) => self.mag = product,
            Err(error) => panic!("{error}"),
        }
    }
}

impl DivAssign<&Unsigned> for Unsigned {
    /// Panics on division by zero.
    fn div_assign(&mut self, other: &Unsigned) {
        match self.divmod(other) {
            Ok((quotient, _)) => *self = quotient,
            Err(error) => panic!("{error}"),
        }
    }
}

impl RemAssign<&Unsigned> for Unsigned {
    /// Panics on modulus by zero.
    fn rem_assign(&mut self, other: &Unsigned) {
        match self.divmod(other) {
            Ok((_, remainder)) => *self = remainder,
            Err(error) => panic!("{error}"),
        }
    }
}

forward_binop!(Unsigned, Add::add, AddAssign::add_assign);
forward_binop!(Unsigned, Sub::sub, SubAssign::sub_assign);
forward_binop!(Unsigned, Mul::mul, MulAssign::mul_assign);
forward_binop!(Unsigned, Div::div, DivAssign::div_assign);
forward_binop!(Unsigned, Rem::rem, RemAssign::rem_assign);

#[cfg(test)]
mod tests {
    use super::*;

    fn u(text: &str) -> Unsigned {
        Unsigned::from_decimal(text).unwrap()
    }

    #[test]
    fn default_is_zero() {
        assert!(Unsigned::default().is_zero());
        assert_eq!(Unsigned::default(), Unsigned::zero());
    }

    #[test]
    fn scalar_constructors_bucket_in_base() {
        assert_eq!(Unsigned::from(0u8).to_decimal(), "0");
        assert_eq!(Unsigned::from(255u8).to_decimal(), "255");
        assert_eq!(
            Unsigned::from(u64::MAX).to_decimal(),
            "18446744073709551615"
        );
        assert_eq!(
            Unsigned::from(u128::MAX).to_decimal(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn negative_scalars_are_rejected() {
        assert_eq!(Unsigned::try_from(-1i32).unwrap_err(), Error::NegativeValue);
        assert_eq!(Unsigned::try_from(i64::MIN).unwrap_err(), Error::NegativeValue);
        assert_eq!(Unsigned::try_from(42i32).unwrap(), Unsigned::from(42u32));
    }

    #[test]
    fn float_constructor_truncates() {
        assert_eq!(Unsigned::try_from(0.0f64).unwrap(), Unsigned::zero());
        assert_eq!(Unsigned::try_from(2.9f64).unwrap(), Unsigned::from(2u32));
        assert_eq!(
            Unsigned::try_from(1e17f64).unwrap().to_decimal(),
            "100000000000000000"
        );
    }

    #[test]
    fn float_constructor_rejects_non_finite() {
        assert_eq!(
            Unsigned::try_from(f64::NAN).unwrap_err(),
            Error::NonFinite
        );
        assert_eq!(
            Unsigned::try_from(f64::INFINITY).unwrap_err(),
            Error::NonFinite
        );
        assert_eq!(Unsigned::try_from(-0.5f64).unwrap_err(), Error::NegativeValue);
    }

    #[test]
    fn wrapping_scalar_conversions() {
        let value = u("18446744073709551617"); // 2^64 + 1
        assert_eq!(value.to_u64(), 1);
        assert_eq!(value.to_u128(), 18_446_744_073_709_551_617);
        assert_eq!(u("4294967295").to_u32(), u32::MAX);
        assert_eq!(u("4294967296").to_u32(), 0);
    }

    #[test]
    fn float_conversion_overflows_to_infinity() {
        assert_eq!(u("12345").to_f64(), 12_345.0);
        let huge = "9".repeat(400);
        assert!(u(&huge).to_f64().is_infinite());
    }

    #[test]
    fn round_trip_through_f64_for_exact_values() {
        let value = u("9007199254740992"); // 2^53
        assert_eq!(value.to_f64(), 9_007_199_254_740_992.0);
        assert_eq!(Unsigned::try_from(value.to_f64()).unwrap(), value);
    }

    #[test]
    fn operators_cover_owned_and_borrowed() {
        let a = u("100000000000000000000");
        let b = u("3");
        assert_eq!(&a + &b, u("100000000000000000003"));
        assert_eq!(a.clone() + b.clone(), u("100000000000000000003"));
        assert_eq!(&a - &b, u("99999999999999999997"));
        assert_eq!(&a * &b, u("300000000000000000000"));
        assert_eq!(&a / &b, u("33333333333333333333"));
        assert_eq!(&a % &b, u("1"));
    }

    #[test]
    fn compound_assignment() {
        let mut value = u("999999999999999999");
        value += &u("1");
        assert_eq!(value, u("1000000000000000000"));
        value *= &u("2");
        assert_eq!(value, u("2000000000000000000"));
        value -= &u("2");
        assert_eq!(value, u("1999999999999999998"));
        value /= &u("3");
        assert_eq!(value, u("666666666666666666"));
        value %= &u("5");
        assert_eq!(value, u("1"));
    }

    #[test]
    #[should_panic(expected = "subtrahend exceeds minuend")]
    fn subtraction_underflow_panics() {
        let _ = u("1") - u("2");
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_by_zero_panics() {
        let _ = u("1") / Unsigned::zero();
    }

    #[test]
    fn checked_sub_reports_underflow() {
        assert_eq!(
            u("1").checked_sub(&u("2")).unwrap_err(),
            Error::SubtractionUnderflow
        );
        assert_eq!(u("5").checked_sub(&u("2")).unwrap(), u("3"));
    }

    #[test]
    fn increment_and_decrement() {
        let mut value = u("99999999");
        value.increment();
        assert_eq!(value, u("100000000"));
        value.decrement().unwrap();
        assert_eq!(value, u("99999999"));

        let mut zero = Unsigned::zero();
        assert_eq!(zero.decrement().unwrap_err(), Error::DecrementZero);
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(u("2") < u("10"));
        assert!(u("100000000") > u("99999999"));
        assert!(u("00042") == u("42"));
        let mut values = vec![u("5"), u("100000000000"), u("0"), u("99999999")];
        values.sort();
        let rendered: Vec<String> = values.iter().map(Unsigned::to_decimal).collect();
        assert_eq!(rendered, ["0", "5", "99999999", "100000000000"]);
    }
}
