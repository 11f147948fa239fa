//! # decint
//!
//! Arbitrary-precision decimal integer arithmetic.
//!
//! Two value types: [`Unsigned`], a canonicalized base-10^8 magnitude,
//! and [`Signed`], a (magnitude, sign) wrapper over it. Multiplication
//! switches from schoolbook convolution to a packed floating-point FFT
//! at 64 limbs; division derives quotients from a Newton-iteration
//! reciprocal built on that multiplication. All transform state is
//! thread-local, so independent values can be used from independent
//! threads freely.
//!
//! # Example
//! ```
//! use decint::{Signed, Unsigned};
//!
//! let a: Unsigned = "123456789123456789".parse().unwrap();
//! let b = Unsigned::from(42u32);
//! assert_eq!((&a * &b).to_string(), "5185185143185185138");
//!
//! let negative: Signed = "-5".parse().unwrap();
//! assert_eq!((&negative % &Signed::from(3)).to_string(), "-2");
//! ```

mod arith;
mod codec;
pub mod constants;
mod div;
mod error;
mod limbs;
mod macros;
mod mul;
mod signed;
mod text;
mod unsigned;

// Re-exports
pub use error::Error;
pub use signed::Signed;
pub use unsigned::Unsigned;
