//! In-place radix-2 transforms over complex doubles.
//!
//! The forward pass is decimation-in-frequency and leaves the spectrum in
//! bit-reversed order; the inverse pass is decimation-in-time, consumes
//! that order and restores natural order. Neither pass normalizes: the
//! 1/N factors are folded into the pointwise product.

use crate::complex::Complex;
use crate::twiddle::TwiddleTable;

/// Forward DIF transform. `data.len()` must be a power of two covered by
/// `twiddle`.
pub fn forward(data: &mut [Complex], twiddle: &TwiddleTable) {
    let n = data.len();
    let mut block = n >> 1;
    let mut step = n;
    while block != 0 {
        for j in 0..block {
            let upper = data[j];
            let lower = data[j + block];
            data[j] = upper + lower;
            data[j + block] = upper - lower;
        }
        let mut start = step;
        let mut index = 1;
        while start != n {
            let factor = twiddle.factor(index);
            for j in start..start + block {
                let upper = data[j];
                let lower = data[j + block] * factor;
                data[j] = upper + lower;
                data[j + block] = upper - lower;
            }
            start += step;
            index += 1;
        }
        step = block;
        block >>= 1;
    }
}

/// Inverse DIT transform with conjugate twiddles. Input must be in the
/// bit-reversed order produced by [`forward`].
pub fn inverse(data: &mut [Complex], twiddle: &TwiddleTable) {
    let n = data.len();
    let mut block = 1;
    let mut step = 2;
    while block != n {
        for j in 0..block {
            let upper = data[j];
            let lower = data[j + block];
            data[j] = upper + lower;
            data[j + block] = upper - lower;
        }
        let mut start = step;
        let mut index = 1;
        while start != n {
            let factor = twiddle.factor(index).conj();
            for j in start..start + block {
                let upper = data[j];
                let lower = data[j + block];
                data[j] = upper + lower;
                data[j + block] = (upper - lower) * factor;
            }
            start += step;
            index += 1;
        }
        block = step;
        step <<= 1;
    }
}
