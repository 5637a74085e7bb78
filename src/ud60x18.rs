// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{
    constants::{
        E, EXP2_MAX_INPUT, LOG2_10, LOG2_E, MAX_WHOLE_UNSIGNED, PI, SCALE,
    },
    error::{FixedPointError, FixedPointResult},
    fixed_point::fixed_point,
    integers::U256,
    math,
};

fixed_point! {
    /// Unsigned 60.18-decimal fixed-point number
    ///
    /// ## Fields
    ///
    /// * `0` - The real value multiplied by 10^18, stored as a U256
    ///
    /// ## Notes
    ///
    /// * Uses a U512 intermediate for multiplication, division and square root
    /// * Range: [0, 2^256 - 1] raw, about 1.157 * 10^59 with 18 decimals
    /// * Fallible operations return `FixedPointResult`, nothing wraps silently
    pub struct UD60x18(U256, false);
}

#[allow(clippy::should_implement_trait)]
impl UD60x18 {
    pub const ZERO: Self = Self(U256::zero());
    pub const ONE: Self = Self(SCALE);
    pub const MIN: Self = Self(U256::zero());
    pub const MAX: Self = Self(U256::MAX);
    pub const MAX_WHOLE: Self = Self(MAX_WHOLE_UNSIGNED);
    pub const E: Self = Self(E);
    pub const PI: Self = Self(PI);

    #[inline]
    fn sign_and_magnitude(&self) -> (bool, U256) {
        (false, self.0)
    }

    #[inline]
    fn from_sign_and_magnitude(negative: bool, magnitude: U256) -> FixedPointResult<Self> {
        if negative && !magnitude.is_zero() {
            return Err(FixedPointError::overflow("from_str"));
        }
        Ok(Self(magnitude))
    }

    /// Integer part, truncating the fraction
    #[inline]
    pub fn to_int(self) -> U256 {
        self.0 / SCALE
    }

    pub fn add(self, rhs: Self) -> FixedPointResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| FixedPointError::overflow("add"))
    }

    pub fn sub(self, rhs: Self) -> FixedPointResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| FixedPointError::overflow("sub"))
    }

    /// Arithmetic mean, rounded down.
    ///
    /// Halves each operand first so `x + y` is never formed; the lost half
    /// units add back to one only when both operands are odd.
    #[inline]
    pub fn avg(self, rhs: Self) -> Self {
        let both_odd = self.0.bit(0) && rhs.0.bit(0);
        let halves = (self.0 >> 1usize) + (rhs.0 >> 1usize);
        Self(if both_odd { halves + U256::one() } else { halves })
    }

    /// (x * y) / 10^18, rounded half up
    #[inline]
    pub fn mul(self, rhs: Self) -> FixedPointResult<Self> {
        math::mul_fixed(self.0, rhs.0).map(Self)
    }

    /// (x * 10^18) / y, rounded half up
    #[inline]
    pub fn div(self, rhs: Self) -> FixedPointResult<Self> {
        if rhs.0.is_zero() {
            return Err(FixedPointError::division_by_zero("div"));
        }
        math::div_fixed(self.0, rhs.0).map(Self)
    }

    /// 1 / x, rounded half up
    #[inline]
    pub fn inv(self) -> FixedPointResult<Self> {
        Self::ONE.div(self)
    }

    /// Largest whole number not above `x`
    #[inline]
    pub fn floor(self) -> Self {
        Self(self.0 - self.0 % SCALE)
    }

    /// Smallest whole number not below `x`, fails above [`Self::MAX_WHOLE`]
    pub fn ceil(self) -> FixedPointResult<Self> {
        let remainder = self.0 % SCALE;
        if remainder.is_zero() {
            return Ok(self);
        }
        if self.0 > MAX_WHOLE_UNSIGNED {
            return Err(FixedPointError::overflow("ceil"));
        }
        Ok(Self(self.0 - remainder + SCALE))
    }

    /// Fractional part
    #[inline]
    pub fn frac(self) -> Self {
        Self(self.0 % SCALE)
    }

    /// Binary logarithm, defined for `x >= 1.0` (the result cannot be negative).
    pub fn log2(self) -> FixedPointResult<Self> {
        if self.0 < SCALE {
            return Err(FixedPointError::domain("log2"));
        }
        Ok(Self(math::log2_at_least_one(self.0)))
    }

    /// Common logarithm, defined for `x >= 1.0`.
    ///
    /// Exact powers of ten return the exact integer logarithm; every other
    /// input is `log2(x) / log2(10)`.
    pub fn log10(self) -> FixedPointResult<Self> {
        if self.0 < SCALE {
            return Err(FixedPointError::domain("log10"));
        }

        if let Some(exponent) = math::power_of_ten_exponent(self.0) {
            return Ok(Self(U256::from((exponent - 18) as u64) * SCALE));
        }

        self.log2()?.div(Self(LOG2_10))
    }

    /// Natural logarithm, defined for `x >= 1.0`: `log2(x) / log2(e)`
    pub fn ln(self) -> FixedPointResult<Self> {
        self.log2()?.div(Self(LOG2_E))
    }

    /// 2^x, fails with `Overflow` for `x >= 192.0`.
    pub fn exp2(self) -> FixedPointResult<Self> {
        if self.0 >= EXP2_MAX_INPUT {
            return Err(FixedPointError::overflow("exp2"));
        }

        // 192.64 binary fixed point
        let x192x64 = (self.0 << 64usize) / SCALE;
        math::exp2_binary(x192x64).map(Self)
    }

    /// e^x, computed as `exp2(x * log2(e))`
    pub fn exp(self) -> FixedPointResult<Self> {
        self.mul(Self(LOG2_E))?.exp2()
    }

    /// x^y as `exp2(log2(x) * y)`, so `x` must be at least 1.0 unless it is zero.
    /// 0^0 is 1.
    pub fn pow(self, y: Self) -> FixedPointResult<Self> {
        if self.0.is_zero() {
            return Ok(if y.0.is_zero() { Self::ONE } else { Self::ZERO });
        }
        self.log2()?.mul(y)?.exp2()
    }

    /// x^n for an integer exponent, by repeated squaring
    pub fn powu(self, n: u64) -> FixedPointResult<Self> {
        math::powu_fixed(self.0, n).map(Self)
    }

    /// Square root, truncated toward zero
    pub fn sqrt(self) -> FixedPointResult<Self> {
        math::sqrt_fixed(self.0).map(Self)
    }

    /// Geometric mean `sqrt(x * y)`, truncated toward zero
    pub fn gm(self, rhs: Self) -> FixedPointResult<Self> {
        if self.0.is_zero() || rhs.0.is_zero() {
            return Ok(Self::ZERO);
        }
        math::geometric_mean(self.0, rhs.0).map(Self)
    }
}
