//! Per-thread transform state.
//!
//! The twiddle table and the packing buffers persist across calls so
//! repeated multiplications reuse them, but they are confined to one
//! thread: independent values can be multiplied from different threads
//! concurrently without any coordination.

use std::cell::RefCell;

use crate::complex::Complex;
use crate::pointwise;
use crate::transform;
use crate::twiddle::TwiddleTable;

/// Twiddle cache plus two packing buffers.
pub struct FftContext {
    pub twiddle: TwiddleTable,
    pub scratch_a: Vec<Complex>,
    pub scratch_b: Vec<Complex>,
}

impl FftContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            twiddle: TwiddleTable::new(),
            scratch_a: Vec::new(),
            scratch_b: Vec::new(),
        }
    }

    /// Size both scratch buffers to `transform_len` samples, all zero.
    pub fn reset(&mut self, transform_len: usize) {
        self.scratch_a.clear();
        self.scratch_a.resize(transform_len, Complex::ZERO);
        self.scratch_b.clear();
        self.scratch_b.resize(transform_len, Complex::ZERO);
    }

    /// Forward-transform both buffers, multiply them in the frequency
    /// domain and inverse-transform the first, which afterwards holds the
    /// normalized real convolution of the packed inputs.
    pub fn convolve_packed(&mut self) {
        let transform_len = self.scratch_a.len();
        debug_assert_eq!(transform_len, self.scratch_b.len());
        self.twiddle.ensure(transform_len);
        transform::forward(&mut self.scratch_a, &self.twiddle);
        transform::forward(&mut self.scratch_b, &self.twiddle);
        pointwise::multiply(&mut self.scratch_a, &self.scratch_b, &self.twiddle);
        transform::inverse(&mut self.scratch_a, &self.twiddle);
    }
}

impl Default for FftContext {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static CONTEXT: RefCell<FftContext> = RefCell::new(FftContext::new());
}

/// Run `f` with this thread's transform context.
pub fn with_context<R>(f: impl FnOnce(&mut FftContext) -> R) -> R {
    CONTEXT.with(|context| f(&mut context.borrow_mut()))
}
