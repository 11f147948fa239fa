//! Multiplication: schoolbook convolution below the threshold, packed
//! FFT convolution above it.

use decint_fft::{with_context, Complex};
use tracing::trace;

use crate::constants::{BASE, BRUTE_FORCE_THRESHOLD, HALF_BASE, TRANSFORM_LIMIT};
use crate::error::{ensure, Error};
use crate::limbs::LimbBuffer;

/// Multiply two canonical limb sequences.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Result<LimbBuffer, Error> {
    if a.len().min(b.len()) < BRUTE_FORCE_THRESHOLD {
        return Ok(schoolbook(a, b));
    }
    ensure!(a.len() <= TRANSFORM_LIMIT, Error::OperandTooLarge(a.len()));
    ensure!(b.len() <= TRANSFORM_LIMIT, Error::OperandTooLarge(b.len()));
    Ok(transform_mul(a, b))
}

/// O(n·m) convolution with a 64-bit carry accumulator. The accumulator
/// cannot overflow: the shorter operand is under the threshold, so each
/// column sums fewer than 64 products below 10^16.
fn schoolbook(a: &[u32], b: &[u32]) -> LimbBuffer {
    let base = u64::from(BASE);
    let column_count = a.len() + b.len() - 1;
    let mut limbs = Vec::with_capacity(column_count + 1);
    let mut carry = 0u64;
    for i in 0..column_count {
        let low = if i >= a.len() { i - a.len() + 1 } else { 0 };
        let high = i.min(b.len() - 1);
        for j in low..=high {
            carry += u64::from(a[i - j]) * u64::from(b[j]);
        }
        limbs.push((carry % base) as u32);
        carry /= base;
    }
    while carry != 0 {
        limbs.push((carry % base) as u32);
        carry /= base;
    }
    LimbBuffer::from_raw(limbs)
}

/// Pack each limb as two 4-digit halves of one complex sample, convolve
/// through the per-thread transform context, then carry the rounded
/// samples out into base-10^8 limbs.
fn transform_mul(a: &[u32], b: &[u32]) -> LimbBuffer {
    let base = u64::from(BASE);
    let result_len = a.len() + b.len();
    let transform_len = result_len.next_power_of_two();
    trace!(
        len_a = a.len(),
        len_b = b.len(),
        transform_len,
        "transform multiplication"
    );
    with_context(|context| {
        context.reset(transform_len);
        for (sample, &limb) in context.scratch_a.iter_mut().zip(a) {
            *sample = Complex::new(f64::from(limb % HALF_BASE), f64::from(limb / HALF_BASE));
        }
        for (sample, &limb) in context.scratch_b.iter_mut().zip(b) {
            *sample = Complex::new(f64::from(limb % HALF_BASE), f64::from(limb / HALF_BASE));
        }
        context.convolve_packed();

        let mut limbs = Vec::with_capacity(result_len + 1);
        let mut carry = 0u64;
        for sample in &context.scratch_a[..result_len] {
            let low = sample.re.round() as u64;
            let high = sample.im.round() as u64;
            carry += low + high * u64::from(HALF_BASE);
            limbs.push((carry % base) as u32);
            carry /= base;
        }
        while carry != 0 {
            limbs.push((carry % base) as u32);
            carry /= base;
        }
        LimbBuffer::from_raw(limbs)
    })
}
