//! Compile-time constants of the limb representation and the algorithm
//! thresholds.

/// The limb base. Each limb stores eight decimal digits.
pub const BASE: u32 = 100_000_000;

/// Split point for packing one limb into two transform samples.
pub const HALF_BASE: u32 = 10_000;

/// Decimal digits per limb.
pub const BASE_DIGITS: usize = 8;

/// Operand length (in limbs) below which schoolbook multiplication and
/// long division are used instead of the transform/Newton paths.
pub const BRUTE_FORCE_THRESHOLD: usize = 64;

/// Hard cap on operand length (in limbs) for transform multiplication.
/// Beyond this the packed pointwise products would leave the exact
/// integer range of an IEEE-754 double.
pub const TRANSFORM_LIMIT: usize = 1 << 22;
