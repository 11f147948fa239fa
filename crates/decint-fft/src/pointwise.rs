//! Hermitian-symmetric frequency-domain product.
//!
//! Both inputs pack two real sequences into one complex buffer (real part
//! and imaginary part), so a single forward transform per operand covers
//! both. This routine recombines the conjugate-symmetric spectrum pairs,
//! multiplies them, and folds the inverse-transform normalization in, so
//! that the inverse pass yields the real convolution directly.

use crate::complex::Complex;
use crate::twiddle::TwiddleTable;

/// Multiply the spectra in `first` and `second` in place (result in
/// `first`). Both buffers must hold bit-reversed forward transforms of
/// the same power-of-two length, at least 2.
pub fn multiply(first: &mut [Complex], second: &[Complex], twiddle: &TwiddleTable) {
    let n = first.len();
    debug_assert_eq!(n, second.len());
    let norm = 1.0 / n as f64;
    let scale = norm * 0.25;

    // Indices 0 and 1 carry the paired real DC/Nyquist terms.
    first[0] = mul_paired(first[0], second[0]).scale(norm);
    first[1] = (first[1] * second[1]).scale(norm);

    let mut block_start = 2;
    let mut block_end = 3;
    while block_start != n {
        let mut fwd = block_start;
        let mut bwd = fwd + block_start - 1;
        while fwd != block_end {
            let first_even = first[fwd] + first[bwd].conj();
            let first_odd = first[fwd] - first[bwd].conj();
            let second_even = second[fwd] + second[bwd].conj();
            let second_odd = second[fwd] - second[bwd].conj();
            let factor = if fwd & 1 == 1 {
                -twiddle.factor(fwd >> 1)
            } else {
                twiddle.factor(fwd >> 1)
            };
            let product_a = first_even * second_even - first_odd * second_odd * factor;
            let product_b = second_even * first_odd + first_even * second_odd;
            first[fwd] = (product_a + product_b).scale(scale);
            first[bwd] = (product_a - product_b).scale(scale).conj();
            fwd += 1;
            bwd -= 1;
        }
        block_start <<= 1;
        block_end <<= 1;
    }
}

/// Product of two samples that each hold a pair of real values: sums the
/// direct and cross terms instead of the usual complex product.
fn mul_paired(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re * b.re + a.im * b.im, a.re * b.im + a.im * b.re)
}
