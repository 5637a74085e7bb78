// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{
    constants::{
        E, EXP2_MAX_INPUT, EXP2_MIN_INPUT, EXP_MIN_INPUT, LOG2_10, LOG2_E, MAX_WHOLE_SIGNED,
        MIN_WHOLE_SIGNED, PI, SCALE, SCALE_SQUARED,
    },
    error::{FixedPointError, FixedPointResult},
    fixed_point::fixed_point,
    integers::{I256, U256},
    math,
    ud60x18::UD60x18,
};

fixed_point! {
    /// Signed 59.18-decimal fixed-point number
    ///
    /// ## Fields
    ///
    /// * `0` - The real value multiplied by 10^18, stored as an I256
    ///
    /// ## Notes
    ///
    /// * Multiplication, division and roots run on magnitudes in a U512
    ///   intermediate, the sign is applied afterwards
    /// * Range: [-2^255, 2^255 - 1] raw, about ±5.79 * 10^58 with 18 decimals
    /// * `MIN` has no positive counterpart and is rejected wherever the
    ///   algorithm needs its magnitude as a positive value
    pub struct SD59x18(I256, true);
}

const MAX_MAGNITUDE: U256 = I256::MAX.to_unsigned();

#[allow(clippy::should_implement_trait)]
impl SD59x18 {
    pub const ZERO: Self = Self(I256::zero());
    pub const ONE: Self = Self(I256::from_unsigned(SCALE));
    pub const MIN: Self = Self(I256::MIN);
    pub const MAX: Self = Self(I256::MAX);
    pub const MIN_WHOLE: Self = Self(MIN_WHOLE_SIGNED);
    pub const MAX_WHOLE: Self = Self(MAX_WHOLE_SIGNED);
    pub const E: Self = Self(I256::from_unsigned(E));
    pub const PI: Self = Self(I256::from_unsigned(PI));

    #[inline]
    fn sign_and_magnitude(&self) -> (bool, U256) {
        (self.0.is_negative(), self.0.unsigned_abs())
    }

    #[inline]
    fn from_sign_and_magnitude(negative: bool, magnitude: U256) -> FixedPointResult<Self> {
        I256::from_sign_and_magnitude(negative, magnitude)
            .map(Self)
            .ok_or_else(|| FixedPointError::overflow("from_str"))
    }

    /// Applies a sign to a magnitude produced from two non-`MIN` operands.
    /// The magnitude must not exceed `MAX`, so `MIN` is never produced.
    #[inline]
    fn signed_result(op: &'static str, negative: bool, magnitude: U256) -> FixedPointResult<Self> {
        if magnitude > MAX_MAGNITUDE {
            return Err(FixedPointError::overflow(op));
        }
        let raw = I256::from_unsigned(magnitude);
        Ok(Self(if negative { raw.wrapping_neg() } else { raw }))
    }

    #[inline] pub fn is_negative(&self) -> bool { self.0.is_negative() }
    #[inline] pub fn is_positive(&self) -> bool { self.0.is_positive() }

    /// Integer part, truncating toward zero
    pub fn to_int(self) -> I256 {
        let (negative, magnitude) = self.sign_and_magnitude();
        let raw = I256::from_unsigned(magnitude / SCALE);
        if negative { raw.wrapping_neg() } else { raw }
    }

    /// Absolute value, fails for `MIN`
    pub fn abs(self) -> FixedPointResult<Self> {
        if self.0.is_negative() {
            self.0
                .checked_neg()
                .map(Self)
                .ok_or_else(|| FixedPointError::overflow("abs"))
        } else {
            Ok(self)
        }
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

    /// Arithmetic mean, rounded toward negative infinity.
    ///
    /// Arithmetic shifts floor each half; the two lost half units add back
    /// to one only when both bit patterns are odd. Valid over the whole
    /// range, `avg(MIN, MAX)` is `-1e-18`.
    #[inline]
    pub fn avg(self, rhs: Self) -> Self {
        // halves lie in [-2^254, 2^254), their sum cannot overflow
        let halves = (self.0 >> 1usize).wrapping_add(rhs.0 >> 1usize);
        if self.0.is_odd() && rhs.0.is_odd() {
            Self(halves.wrapping_add(I256::one()))
        } else {
            Self(halves)
        }
    }

    /// (x * y) / 10^18, magnitude rounded half up
    pub fn mul(self, rhs: Self) -> FixedPointResult<Self> {
        if self.0 == I256::MIN || rhs.0 == I256::MIN {
            return Err(FixedPointError::overflow("mul"));
        }

        let (x_negative, x) = self.sign_and_magnitude();
        let (y_negative, y) = rhs.sign_and_magnitude();
        let magnitude = math::mul_fixed(x, y)?;

        Self::signed_result("mul", x_negative != y_negative, magnitude)
    }

    /// (x * 10^18) / y, magnitude rounded half up
    pub fn div(self, rhs: Self) -> FixedPointResult<Self> {
        if rhs.0.is_zero() {
            return Err(FixedPointError::division_by_zero("div"));
        }
        if self.0 == I256::MIN || rhs.0 == I256::MIN {
            return Err(FixedPointError::overflow("div"));
        }

        let (x_negative, x) = self.sign_and_magnitude();
        let (y_negative, y) = rhs.sign_and_magnitude();
        let magnitude = math::div_fixed(x, y)?;

        Self::signed_result("div", x_negative != y_negative, magnitude)
    }

    /// 1 / x, magnitude rounded half up
    #[inline]
    pub fn inv(self) -> FixedPointResult<Self> {
        Self::ONE.div(self)
    }

    /// Rounds toward negative infinity, fails below [`Self::MIN_WHOLE`]
    pub fn floor(self) -> FixedPointResult<Self> {
        let (negative, magnitude) = self.sign_and_magnitude();
        let remainder = magnitude % SCALE;
        if remainder.is_zero() {
            return Ok(self);
        }

        if !negative {
            return Ok(Self(I256::from_unsigned(magnitude - remainder)));
        }
        if self.0 < MIN_WHOLE_SIGNED {
            return Err(FixedPointError::overflow("floor"));
        }
        Self::signed_result("floor", true, magnitude - remainder + SCALE)
    }

    /// Rounds toward positive infinity, fails above [`Self::MAX_WHOLE`]
    pub fn ceil(self) -> FixedPointResult<Self> {
        let (negative, magnitude) = self.sign_and_magnitude();
        let remainder = magnitude % SCALE;
        if remainder.is_zero() {
            return Ok(self);
        }

        if negative {
            return Self::signed_result("ceil", true, magnitude - remainder);
        }
        if self.0 > MAX_WHOLE_SIGNED {
            return Err(FixedPointError::overflow("ceil"));
        }
        Self::signed_result("ceil", false, magnitude - remainder + SCALE)
    }

    /// Fractional part, keeping the sign of `x` (`x - trunc(x)`)
    pub fn frac(self) -> Self {
        let (negative, magnitude) = self.sign_and_magnitude();
        let raw = I256::from_unsigned(magnitude % SCALE);
        Self(if negative { raw.wrapping_neg() } else { raw })
    }

    /// Binary logarithm, defined for `x > 0`.
    ///
    /// Inputs below 1.0 go through the reciprocal: `log2(x) = -log2(1 / x)`,
    /// with `1 / x` truncated.
    pub fn log2(self) -> FixedPointResult<Self> {
        if !self.0.is_positive() {
            return Err(FixedPointError::domain("log2"));
        }

        let x = self.0.to_unsigned();
        if x >= SCALE {
            return Self::signed_result("log2", false, math::log2_at_least_one(x));
        }
        Self::signed_result("log2", true, math::log2_at_least_one(SCALE_SQUARED / x))
    }

    /// Common logarithm, defined for `x >= 1.0`.
    ///
    /// Exact powers of ten return the exact integer logarithm; every other
    /// input is `log2(x) / log2(10)`.
    pub fn log10(self) -> FixedPointResult<Self> {
        if self.0 < Self::ONE.0 {
            return Err(FixedPointError::domain("log10"));
        }

        if let Some(exponent) = math::power_of_ten_exponent(self.0.to_unsigned()) {
            return Ok(Self::from(exponent as i128 - 18));
        }

        self.log2()?.div(Self(I256::from_unsigned(LOG2_10)))
    }

    /// Natural logarithm, defined for `x > 0`: `log2(x) / log2(e)`
    pub fn ln(self) -> FixedPointResult<Self> {
        self.log2()?.div(Self(I256::from_unsigned(LOG2_E)))
    }

    /// 2^x. Fails with `Overflow` for `x >= 192.0`; results smaller than
    /// 10^-18 are zero, not an error.
    pub fn exp2(self) -> FixedPointResult<Self> {
        if self.0.is_negative() {
            if self.0 < EXP2_MIN_INPUT {
                return Ok(Self::ZERO);
            }

            // 2^-x = 1 / 2^x, x is far from MIN here
            let positive = Self(self.0.wrapping_neg()).exp2()?;
            return Ok(Self(I256::from_unsigned(SCALE_SQUARED / positive.0.to_unsigned())));
        }

        let x = self.0.to_unsigned();
        if x >= EXP2_MAX_INPUT {
            return Err(FixedPointError::overflow("exp2"));
        }

        // 192.64 binary fixed point
        let x192x64 = (x << 64usize) / SCALE;
        Self::signed_result("exp2", false, math::exp2_binary(x192x64)?)
    }

    /// e^x, computed as `exp2(x * log2(e))`; zero below `ln(10^-18)`
    pub fn exp(self) -> FixedPointResult<Self> {
        if self.0 < EXP_MIN_INPUT {
            return Ok(Self::ZERO);
        }
        self.mul(Self(I256::from_unsigned(LOG2_E)))?.exp2()
    }

    /// x^y as `exp2(log2(x) * y)`, `x` must be positive unless it is zero.
    /// 0^0 is 1.
    pub fn pow(self, y: Self) -> FixedPointResult<Self> {
        if self.0.is_zero() {
            return Ok(if y.0.is_zero() { Self::ONE } else { Self::ZERO });
        }
        self.log2()?.mul(y)?.exp2()
    }

    /// x^n for an integer exponent, by repeated squaring on the magnitude.
    /// Negative bases give negative results for odd `n`.
    pub fn powu(self, n: u64) -> FixedPointResult<Self> {
        if self.0 == I256::MIN {
            return Err(FixedPointError::overflow("powu"));
        }

        let (negative, magnitude) = self.sign_and_magnitude();
        let result = math::powu_fixed(magnitude, n)?;

        Self::signed_result("powu", negative && n & 1 == 1, result)
    }

    /// Square root, truncated toward zero; negative input is a domain error
    pub fn sqrt(self) -> FixedPointResult<Self> {
        if self.0.is_negative() {
            return Err(FixedPointError::domain("sqrt"));
        }
        Self::signed_result("sqrt", false, math::sqrt_fixed(self.0.to_unsigned())?)
    }

    /// Geometric mean `sqrt(x * y)`; a negative product is a domain error
    pub fn gm(self, rhs: Self) -> FixedPointResult<Self> {
        if self.0.is_zero() || rhs.0.is_zero() {
            return Ok(Self::ZERO);
        }

        let (x_negative, x) = self.sign_and_magnitude();
        let (y_negative, y) = rhs.sign_and_magnitude();
        if x_negative != y_negative {
            return Err(FixedPointError::domain("gm"));
        }

        Self::signed_result("gm", false, math::geometric_mean(x, y)?)
    }
}

impl TryFrom<UD60x18> for SD59x18 {
    type Error = FixedPointError;

    #[inline]
    fn try_from(value: UD60x18) -> Result<Self, Self::Error> {
        let raw = value.into_raw();
        if raw > MAX_MAGNITUDE {
            return Err(FixedPointError::IntegerConversionError);
        }
        Ok(SD59x18(I256::from_unsigned(raw)))
    }
}

impl TryFrom<SD59x18> for UD60x18 {
    type Error = FixedPointError;

    #[inline]
    fn try_from(value: SD59x18) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(FixedPointError::IntegerConversionError);
        }
        Ok(UD60x18::new(value.into_raw().to_unsigned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LN_MAX_SIGNED, LOG10_MAX_SIGNED, LOG2_MAX_SIGNED};

    fn sd(s: &str) -> SD59x18 {
        s.parse().unwrap()
    }

    fn raw(s: &str) -> SD59x18 {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, s),
        };
        let magnitude = U256::from_dec_str(digits).unwrap();
        SD59x18(I256::from_sign_and_magnitude(negative, magnitude).unwrap())
    }

    // ---------- consts and conversions ----------

    #[test]
    fn consts_and_conversions() {
        assert_eq!(SD59x18::ONE, SD59x18::from(1i64));
        assert_eq!(SD59x18::from(-3i32).to_int(), I256::from(-3i64));
        assert_eq!(sd("-3.9").to_int(), I256::from(-3i64));
        assert_eq!(SD59x18::from(i128::MIN).to_int(), I256::from(i128::MIN));
        assert_eq!(SD59x18::MIN.to_string(), "-57896044618658097711785492504343953926634992332820282019728.792003956564819968");
        assert_eq!(sd(&SD59x18::MIN.to_string()), SD59x18::MIN);
        assert_eq!(sd(&SD59x18::MAX.to_string()), SD59x18::MAX);
        assert_eq!(
            "57896044618658097711785492504343953926634992332820282019728.792003956564819968".parse::<SD59x18>(),
            Err(FixedPointError::Overflow)
        );
        assert_eq!(sd("-0.5").to_string(), "-0.5");
    }

    #[test]
    fn conversions_between_variants() {
        assert_eq!(UD60x18::try_from(sd("2.5")).unwrap(), "2.5".parse::<UD60x18>().unwrap());
        assert_eq!(
            UD60x18::try_from(sd("-2.5")),
            Err(FixedPointError::IntegerConversionError)
        );
        assert_eq!(SD59x18::try_from(UD60x18::ONE).unwrap(), SD59x18::ONE);
        assert_eq!(
            SD59x18::try_from(UD60x18::MAX),
            Err(FixedPointError::IntegerConversionError)
        );
    }

    #[test]
    fn abs_and_sign() {
        assert_eq!(sd("-2").abs().unwrap(), sd("2"));
        assert_eq!(sd("2").abs().unwrap(), sd("2"));
        assert_eq!(SD59x18::MIN.abs(), Err(FixedPointError::Overflow));
        assert!(sd("-1").is_negative());
        assert!(sd("1").is_positive());
        assert!(!SD59x18::ZERO.is_positive());
    }

    // ---------- avg ----------

    #[test]
    fn avg_zero_operands() {
        assert_eq!(SD59x18::ZERO.avg(SD59x18::ZERO), SD59x18::ZERO);
        assert_eq!(sd("-4").avg(SD59x18::ZERO), sd("-2"));
        assert_eq!(SD59x18::ZERO.avg(sd("-4")), sd("-2"));
        assert_eq!(SD59x18::ZERO.avg(sd("4")), sd("2"));
        assert_eq!(sd("4").avg(SD59x18::ZERO), sd("2"));
    }

    #[test]
    fn avg_mixed_signs() {
        assert_eq!(SD59x18::MIN_WHOLE.avg(SD59x18::MAX_WHOLE), SD59x18::ZERO);
        assert_eq!(sd("-4").avg(sd("4")), SD59x18::ZERO);
        assert_eq!(sd("-2").avg(sd("8")), sd("3"));
        assert_eq!(sd("8").avg(sd("-2")), sd("3"));
        assert_eq!(SD59x18::MIN.avg(SD59x18::MAX), raw("-1"));
        assert_eq!(raw("-1").avg(raw("1")), SD59x18::ZERO);
    }

    #[test]
    fn avg_both_negative() {
        assert_eq!(
            SD59x18::MIN_WHOLE.avg(SD59x18::MIN),
            raw("-57896044618658097711785492504343953926634992332820282019728396001978282409984")
        );
        assert_eq!(raw("-1").avg(raw("-3")), raw("-2"));
        assert_eq!(sd("-100").avg(sd("-200")), sd("-150"));
        assert_eq!(sd("-4").avg(sd("-8")), sd("-6"));
        assert_eq!(sd("-1").avg(sd("-1")), sd("-1"));
        assert_eq!(sd("-1").avg(sd("-2")), sd("-1.5"));
        assert_eq!(SD59x18::MIN.avg(SD59x18::MIN), SD59x18::MIN);
    }

    #[test]
    fn avg_odd_negative_sum_rounds_toward_negative_infinity() {
        assert_eq!(raw("-1").avg(raw("-2")), raw("-2"));
        assert_eq!(raw("-3").avg(SD59x18::ZERO), raw("-2"));
        assert_eq!(raw("1").avg(raw("2")), raw("1"));
    }

    #[test]
    fn avg_both_positive() {
        assert_eq!(raw("1").avg(raw("3")), raw("2"));
        assert_eq!(sd("3").avg(sd("7")), sd("5"));
        assert_eq!(sd("99").avg(sd("199")), sd("149"));
        assert_eq!(
            raw("1000000000000000000000000000000000001").avg(raw("10000000000000000000000000000000000001")),
            raw("5500000000000000000000000000000000001")
        );
        assert_eq!(SD59x18::MAX.avg(SD59x18::MAX), SD59x18::MAX);
        assert_eq!(raw("2").avg(raw("4")), raw("3"));
        assert_eq!(sd("99").avg(sd("200")), sd("149.5"));
        assert_eq!(
            SD59x18::MAX_WHOLE.avg(SD59x18::MAX),
            raw("57896044618658097711785492504343953926634992332820282019728396001978282409983")
        );
    }

    // ---------- mul / div ----------

    #[test]
    fn mul_signs_and_rounding() {
        assert_eq!(sd("-1.5").mul(sd("2")).unwrap(), sd("-3"));
        assert_eq!(sd("-1.5").mul(sd("-2")).unwrap(), sd("3"));
        // magnitude rounds half up, away from zero
        assert_eq!(raw("-1").mul(sd("0.5")).unwrap(), raw("-1"));
        assert_eq!(raw("-1").mul(sd("0.4")).unwrap(), SD59x18::ZERO);
        assert_eq!(SD59x18::MAX.mul(SD59x18::ONE).unwrap(), SD59x18::MAX);
        assert_eq!(SD59x18::MAX.mul(sd("-1")).unwrap(), SD59x18(I256::MIN.wrapping_add(I256::one())));
    }

    #[test]
    fn mul_rejects_min_and_overflow() {
        assert_eq!(SD59x18::MIN.mul(SD59x18::ONE), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::ONE.mul(SD59x18::MIN), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::MAX.mul(sd("2")), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::MAX.mul(sd("-2")), Err(FixedPointError::Overflow));
    }

    #[test]
    fn div_values() {
        assert_eq!(sd("-1").div(sd("3")).unwrap(), raw("-333333333333333333"));
        assert_eq!(sd("2").div(sd("-3")).unwrap(), raw("-666666666666666667"));
        assert_eq!(sd("-7.5").div(sd("-2.5")).unwrap(), sd("3"));
        assert_eq!(sd("1").div(SD59x18::ZERO), Err(FixedPointError::DivisionByZero));
        assert_eq!(SD59x18::MIN.div(SD59x18::ONE), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::MAX.div(sd("0.5")), Err(FixedPointError::Overflow));
        assert_eq!(sd("-4").inv().unwrap(), sd("-0.25"));
    }

    #[test]
    fn add_and_sub_are_checked() {
        assert_eq!(sd("-1.25").add(sd("2.75")).unwrap(), sd("1.5"));
        assert_eq!(SD59x18::MAX.add(raw("1")), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::MIN.sub(raw("1")), Err(FixedPointError::Overflow));
        assert_eq!(sd("1").sub(sd("2")).unwrap(), sd("-1"));
    }

    // ---------- floor / ceil / frac ----------

    #[test]
    fn rounding_to_whole() {
        assert_eq!(sd("3.7").floor().unwrap(), sd("3"));
        assert_eq!(sd("-3.7").floor().unwrap(), sd("-4"));
        assert_eq!(sd("3.7").ceil().unwrap(), sd("4"));
        assert_eq!(sd("-3.7").ceil().unwrap(), sd("-3"));
        assert_eq!(sd("-3").floor().unwrap(), sd("-3"));
        assert_eq!(sd("-3.7").frac(), sd("-0.7"));
        assert_eq!(sd("3.7").frac(), sd("0.7"));
        assert_eq!(SD59x18::MIN.floor(), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::MAX.ceil(), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::MIN.ceil().unwrap(), SD59x18::MIN_WHOLE);
        assert_eq!(SD59x18::MAX.floor().unwrap(), SD59x18::MAX_WHOLE);
    }

    // ---------- logarithms ----------

    #[test]
    fn log2_values() {
        assert_eq!(sd("1").log2().unwrap(), SD59x18::ZERO);
        assert_eq!(sd("8").log2().unwrap(), sd("3"));
        assert_eq!(sd("0.5").log2().unwrap(), sd("-1"));
        assert_eq!(sd("0.25").log2().unwrap(), sd("-2"));
        assert_eq!(raw("1").log2().unwrap(), raw("-59794705707972522245"));
        assert_eq!(SD59x18::MAX.log2().unwrap(), SD59x18(LOG2_MAX_SIGNED));
    }

    #[test]
    fn logs_of_non_positive_are_domain_errors() {
        for x in [SD59x18::ZERO, sd("-1"), SD59x18::MIN] {
            assert_eq!(x.log2(), Err(FixedPointError::DomainError));
            assert_eq!(x.log10(), Err(FixedPointError::DomainError));
            assert_eq!(x.ln(), Err(FixedPointError::DomainError));
        }
    }

    #[test]
    fn log10_powers_of_ten_are_exact() {
        assert_eq!(sd("1").log10().unwrap(), SD59x18::ZERO);
        assert_eq!(sd("1000").log10().unwrap(), sd("3"));
        assert_eq!(SD59x18(I256::from_unsigned(U256::exp10(37))).log10().unwrap(), sd("19"));
        assert_eq!(SD59x18(I256::from_unsigned(U256::exp10(76))).log10().unwrap(), sd("58"));
    }

    #[test]
    fn log10_and_ln_values() {
        assert_eq!(sd("4").log10().unwrap(), raw("602059991327962391"));
        assert_eq!(sd("0.9").log10(), Err(FixedPointError::DomainError));
        assert_eq!(sd("0.1").log10(), Err(FixedPointError::DomainError));
        assert_eq!(SD59x18::MAX.log10().unwrap(), SD59x18(LOG10_MAX_SIGNED));
        assert_eq!(sd("0.5").ln().unwrap(), raw("-693147180559945310"));
        assert_eq!(sd("0.1").ln().unwrap(), raw("-2302585092994045675"));
        assert_eq!(raw("1").ln().unwrap(), raw("-41446531673892822311"));
        assert_eq!(SD59x18::MAX.ln().unwrap(), SD59x18(LN_MAX_SIGNED));
    }

    // ---------- exponentials ----------

    #[test]
    fn exp2_values() {
        assert_eq!(SD59x18::ZERO.exp2().unwrap(), SD59x18::ONE);
        assert_eq!(sd("3").exp2().unwrap(), sd("8"));
        assert_eq!(sd("-1").exp2().unwrap(), sd("0.5"));
        assert_eq!(sd("-0.5").exp2().unwrap(), raw("707106781186547524"));
        assert_eq!(
            raw("191999999999999999999").exp2().unwrap(),
            raw("6277101735386680759401282518710514696272033118492751795945000000000000000000")
        );
    }

    #[test]
    fn exp2_overflow_and_underflow() {
        assert_eq!(sd("192").exp2(), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18::MAX.exp2(), Err(FixedPointError::Overflow));
        assert_eq!(SD59x18(EXP2_MIN_INPUT).exp2().unwrap(), raw("1"));
        assert_eq!(
            SD59x18(EXP2_MIN_INPUT.wrapping_sub(I256::one())).exp2().unwrap(),
            SD59x18::ZERO
        );
        assert_eq!(SD59x18::MIN.exp2().unwrap(), SD59x18::ZERO);
    }

    #[test]
    fn exp_values() {
        assert_eq!(SD59x18::ZERO.exp().unwrap(), SD59x18::ONE);
        assert_eq!(sd("1").exp().unwrap(), raw("2718281828459045234"));
        assert_eq!(sd("-1").exp().unwrap(), raw("367879441171442321"));
        assert_eq!(sd("-2").exp().unwrap(), raw("135335283236612691"));
        assert_eq!(SD59x18(EXP_MIN_INPUT).exp().unwrap(), raw("1"));
        assert_eq!(SD59x18::MIN.exp().unwrap(), SD59x18::ZERO);
        assert_eq!(sd("134").exp(), Err(FixedPointError::Overflow));
    }

    #[test]
    fn pow_values() {
        assert_eq!(SD59x18::ZERO.pow(SD59x18::ZERO).unwrap(), SD59x18::ONE);
        assert_eq!(sd("2").pow(sd("-1")).unwrap(), sd("0.5"));
        assert_eq!(sd("0.5").pow(sd("2")).unwrap(), sd("0.25"));
        assert_eq!(sd("-2").pow(sd("2")), Err(FixedPointError::DomainError));
    }

    #[test]
    fn powu_values() {
        assert_eq!(sd("-2").powu(3).unwrap(), sd("-8"));
        assert_eq!(sd("-2").powu(2).unwrap(), sd("4"));
        assert_eq!(sd("-2").powu(0).unwrap(), SD59x18::ONE);
        assert_eq!(SD59x18::MIN.powu(1), Err(FixedPointError::Overflow));
        assert_eq!(sd("10").powu(59), Err(FixedPointError::Overflow));
    }

    // ---------- square roots ----------

    #[test]
    fn sqrt_values() {
        assert_eq!(sd("16").sqrt().unwrap(), sd("4"));
        assert_eq!(sd("-1").sqrt(), Err(FixedPointError::DomainError));
        assert_eq!(SD59x18::MIN.sqrt(), Err(FixedPointError::DomainError));
        assert_eq!(
            SD59x18::MAX.sqrt().unwrap(),
            raw("240615969168004511545033772477625056927114980741")
        );
    }

    #[test]
    fn gm_values() {
        assert_eq!(sd("-2").gm(sd("-8")).unwrap(), sd("4"));
        assert_eq!(sd("2").gm(SD59x18::ZERO).unwrap(), SD59x18::ZERO);
        assert_eq!(sd("-2").gm(sd("8")), Err(FixedPointError::DomainError));
        assert_eq!(SD59x18::MIN.gm(SD59x18::MIN), Err(FixedPointError::Overflow));
    }
}
