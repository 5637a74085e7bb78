//! Deterministic 18-decimal fixed-point arithmetic on 256-bit integers.
//!
//! [`UD60x18`] is unsigned, [`SD59x18`] is signed two's complement. Every
//! fallible operation returns a [`FixedPointResult`] and nothing wraps
//! silently. Results too small to represent become zero.

pub mod error;
pub mod macros;
pub mod integers;
pub mod constants;
mod math;
mod fixed_point;
pub mod ud60x18;
pub mod sd59x18;

pub use error::{FixedPointError, FixedPointResult};
pub use integers::{I256, U256, U512};
pub use sd59x18::SD59x18;
pub use ud60x18::UD60x18;
