//! Division: schoolbook long division below the threshold, Newton
//! reciprocal above it.
//!
//! The Newton path computes a truncated reciprocal of the divisor by
//! recursive precision doubling, derives the quotient with one
//! multiplication, and fixes it up with at most two unit corrections in
//! each direction.

use std::cmp::Ordering;

use tracing::trace;

use crate::arith;
use crate::constants::{BASE, BRUTE_FORCE_THRESHOLD};
use crate::error::Error;
use crate::limbs::LimbBuffer;
use crate::mul;

/// Quotient and remainder of canonical limb sequences. The caller has
/// already rejected a zero divisor.
pub(crate) fn divmod(a: &LimbBuffer, b: &LimbBuffer) -> Result<(LimbBuffer, LimbBuffer), Error> {
    if arith::compare(a, b) == Ordering::Less {
        return Ok((LimbBuffer::zero(), a.clone()));
    }
    if a.len() < BRUTE_FORCE_THRESHOLD || b.len() < BRUTE_FORCE_THRESHOLD {
        return Ok(long_division(a, b));
    }
    newton_division(a, b)
}

/// Schoolbook long division, one quotient limb per pass.
///
/// The trial digit comes from a three-limb estimate of the remainder
/// over a one-limb estimate of the divisor plus one; dividing a lower
/// bound by an upper bound can only undershoot, so the remainder never
/// goes negative and the loop repeats until the estimate reaches zero,
/// with at most one unit correction afterwards.
fn long_division(a: &[u32], b: &[u32]) -> (LimbBuffer, LimbBuffer) {
    if arith::compare(a, b) == Ordering::Less {
        return (LimbBuffer::zero(), LimbBuffer::from_raw(a.to_vec()));
    }
    let divisor_len = b.len();
    let quotient_len = a.len() - divisor_len + 1;
    let mut quotient = vec![0u32; quotient_len];
    let mut remainder = a.to_vec();
    remainder.push(0); // guard limb for the top-position subtraction

    let divisor_estimate = estimate(b, divisor_len - 1) + 1;
    for position in (0..quotient_len).rev() {
        let mut digit = 0u64;
        loop {
            let trial = estimate(&remainder, position + divisor_len - 1) / divisor_estimate;
            if trial == 0 {
                break;
            }
            subtract_scaled(&mut remainder, b, position, trial);
            digit += trial;
        }
        if slice_compare(&remainder[position..position + divisor_len], b) != Ordering::Less {
            subtract_scaled(&mut remainder, b, position, 1);
            digit += 1;
        }
        debug_assert!(digit < u64::from(BASE));
        quotient[position] = digit as u32;
    }
    (
        LimbBuffer::from_raw(quotient),
        LimbBuffer::from_raw(remainder),
    )
}

/// Scaled three-limb estimate of the value around limb `high`: the limb
/// above (when present), the limb itself, and the top digit of the limb
/// below.
fn estimate(digits: &[u32], high: usize) -> u64 {
    let upper = digits.get(high + 1).copied().unwrap_or(0);
    let lower = if high > 0 { digits[high - 1] } else { 0 };
    10 * u64::from(BASE) * u64::from(upper)
        + 10 * u64::from(digits[high])
        + u64::from(lower / (BASE / 10))
}

/// remainder -= factor · divisor · B^position, limb-wise with a signed
/// carry.
fn subtract_scaled(remainder: &mut [u32], divisor: &[u32], position: usize, factor: u64) {
    let base = i64::from(BASE);
    let mut carry = 0i64;
    for (i, &limb) in divisor.iter().enumerate() {
        carry += i64::from(remainder[position + i]) - factor as i64 * i64::from(limb);
        let mut digit = carry % base;
        carry /= base;
        if digit < 0 {
            digit += base;
            carry -= 1;
        }
        remainder[position + i] = digit as u32;
    }
    if carry != 0 {
        let top = i64::from(remainder[position + divisor.len()]) + carry;
        debug_assert!((0..base).contains(&top));
        remainder[position + divisor.len()] = top as u32;
    }
}

fn slice_compare(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter().rev().cmp(b.iter().rev())
}

/// Newton path: build an over-shifted reciprocal of a truncated divisor,
/// multiply once, correct.
fn newton_division(a: &LimbBuffer, b: &LimbBuffer) -> Result<(LimbBuffer, LimbBuffer), Error> {
    trace!(len_a = a.len(), len_b = b.len(), "newton division");
    let precision = a.len() - b.len() + 5;
    let shift_back = if precision > b.len() {
        0
    } else {
        b.len() - precision
    };
    let mut adjusted = shift_down(b, shift_back);
    if shift_back > 0 {
        // Round the truncated divisor up so the reciprocal stays a lower
        // bound of the true quotient.
        arith::increment(&mut adjusted);
    }
    let inverse_precision = precision + adjusted.len();
    let inverse = reciprocal(&adjusted, inverse_precision)?;
    let mut quotient = shift_down(&mul::mul(a, &inverse)?, inverse_precision + shift_back);

    let mut steps = 0;
    while arith::compare(&mul::mul(&quotient, b)?, a) == Ordering::Greater {
        arith::decrement(&mut quotient);
        steps += 1;
        debug_assert!(steps <= 2, "quotient over-estimate beyond the correction bound");
    }
    let mut remainder = a.clone();
    arith::sub_assign(&mut remainder, &mul::mul(&quotient, b)?);
    steps = 0;
    while arith::compare(&remainder, b) != Ordering::Less {
        arith::increment(&mut quotient);
        arith::sub_assign(&mut remainder, b);
        steps += 1;
        debug_assert!(steps <= 2, "quotient under-estimate beyond the correction bound");
    }
    Ok((quotient, remainder))
}

/// Approximate ⌊B^precision / divisor⌋ from below.
///
/// Recursion: truncate the divisor, recurse at half precision, then one
/// Newton step R' = 2R·B^Δ − divisor·R²·B^-Δ' and a final decrement to
/// restore the lower bound. The base case divides B^precision directly.
fn reciprocal(divisor: &LimbBuffer, precision: usize) -> Result<LimbBuffer, Error> {
    if divisor.len() < BRUTE_FORCE_THRESHOLD || precision < divisor.len() + BRUTE_FORCE_THRESHOLD {
        let mut numerator = LimbBuffer::zeroed(precision + 1);
        numerator[precision] = 1;
        return Ok(long_division(&numerator, divisor).0);
    }
    let half_precision = (precision - divisor.len() + 5) >> 1;
    let shift_back = if half_precision > divisor.len() {
        0
    } else {
        divisor.len() - half_precision
    };
    let truncated = shift_down(divisor, shift_back);
    let refined_precision = half_precision + truncated.len();
    let approx = reciprocal(&truncated, refined_precision)?;

    let mut doubled = approx.clone();
    arith::add_assign(&mut doubled, &approx);
    let mut result = shift_up(&doubled, precision - refined_precision - shift_back);
    let square = mul::mul(&mul::mul(divisor, &approx)?, &approx)?;
    let correction = shift_down(&square, 2 * (refined_precision + shift_back) - precision);
    arith::sub_assign(&mut result, &correction);
    arith::decrement(&mut result);
    Ok(result)
}

/// Drop the `count` least-significant limbs (divide by B^count).
fn shift_down(value: &[u32], count: usize) -> LimbBuffer {
    if count >= value.len() {
        return LimbBuffer::zero();
    }
    LimbBuffer::from_raw(value[count..].to_vec())
}

/// Prepend `count` zero limbs (multiply by B^count).
fn shift_up(value: &[u32], count: usize) -> LimbBuffer {
    let mut limbs = vec![0u32; count + value.len()];
    limbs[count..].copy_from_slice(value);
    LimbBuffer::from_raw(limbs)
}
