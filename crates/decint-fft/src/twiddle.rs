//! Twiddle-factor table, stored in bit-reversed order and grown on demand.

use std::f64::consts::PI;

use tracing::debug;

use crate::complex::Complex;

/// Cached twiddle factors for the radix-2 transforms.
///
/// Entry `i` holds the unit complex number at angle
/// π·Σ bit_j(i)·2^-(j+1), which is the twiddle the butterflies need for
/// block `i` at every stage. The value of an entry does not depend on the
/// transform size in effect when it was built, so the table only ever
/// appends.
pub struct TwiddleTable {
    factors: Vec<Complex>,
}

impl TwiddleTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            factors: vec![Complex::ONE],
        }
    }

    /// Number of cached factors (half the largest transform seen).
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub fn factor(&self, index: usize) -> Complex {
        self.factors[index]
    }

    /// Make the table cover transforms of `transform_len` points.
    ///
    /// New entries are products of two short base tables generated with
    /// angle steps π/H and π/H² (H = 2^(log2(len)/2)), which keeps the
    /// trig evaluations per entry constant and the accumulated rounding
    /// error low.
    pub fn ensure(&mut self, transform_len: usize) {
        debug_assert!(transform_len.is_power_of_two() && transform_len >= 2);
        if transform_len <= self.factors.len() << 1 {
            return;
        }
        let half_log = log2(transform_len) >> 1;
        let half_size = 1usize << half_log;
        let angle_step = PI / half_size as f64;
        let fine_step = angle_step / half_size as f64;

        let mut base = vec![Complex::ZERO; half_size << 1];
        for i in 0..half_size {
            let reversed = bit_reverse(i, half_log) as f64;
            base[i] = Complex::cis(reversed * angle_step);
            base[half_size | i] = Complex::cis(reversed * fine_step);
        }

        let old_len = self.factors.len();
        self.factors.resize(transform_len >> 1, Complex::ZERO);
        for i in old_len..self.factors.len() {
            self.factors[i] = base[i & (half_size - 1)] * base[half_size | (i >> half_log)];
        }
        debug!(entries = self.factors.len(), "twiddle table grown");
    }
}

impl Default for TwiddleTable {
    fn default() -> Self {
        Self::new()
    }
}

fn log2(value: usize) -> u32 {
    debug_assert!(value > 0);
    usize::BITS - 1 - value.leading_zeros()
}

fn bit_reverse(value: usize, bits: u32) -> usize {
    debug_assert!(bits >= 1);
    value.reverse_bits() >> (usize::BITS - bits)
}
