//! Owned, canonicalized limb storage.
//!
//! Limbs are little-endian base-10^8 digits. Canonical form holds either
//! a single limb or a non-zero top limb; zero is exactly `[0]`.

use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LimbBuffer {
    limbs: Vec<u32>,
}

impl LimbBuffer {
    /// Canonical zero.
    pub(crate) fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    /// Zero-filled buffer of `len` limbs. Not canonical until the caller
    /// writes the top limb or trims.
    pub(crate) fn zeroed(len: usize) -> Self {
        debug_assert!(len >= 1);
        Self { limbs: vec![0; len] }
    }

    /// Take ownership of raw limbs and trim to canonical form.
    pub(crate) fn from_raw(limbs: Vec<u32>) -> Self {
        debug_assert!(!limbs.is_empty());
        let mut buffer = Self { limbs };
        buffer.canonicalize();
        buffer
    }

    /// Grow or shrink to `new_len`, preserving the low limbs and
    /// zero-filling newly exposed ones.
    pub(crate) fn resize(&mut self, new_len: usize) {
        self.limbs.resize(new_len, 0);
    }

    pub(crate) fn push(&mut self, limb: u32) {
        self.limbs.push(limb);
    }

    /// Trim leading zero limbs down to canonical form.
    pub(crate) fn canonicalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }
}

impl Deref for LimbBuffer {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.limbs
    }
}

impl DerefMut for LimbBuffer {
    fn deref_mut(&mut self) -> &mut [u32] {
        &mut self.limbs
    }
}
