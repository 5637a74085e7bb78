// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{construct_sint, error::FixedPointError};
use ::uint::construct_uint;

// these have scuffed doc comments because the macro codegens the beginning of them
construct_uint! {
    /// with 512-bits of precision, consisting of eight 64-bit words.
    pub struct U512(8);
}

construct_uint! {
    /// with 256-bits of precision, consisting of four 64-bit words.
    pub struct U256(4);
}

impl U256 {
    /// Builds a U256 from a u128, usable in const context.
    #[inline]
    pub const fn from_u128_const(value: u128) -> U256 {
        U256([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl From<U256> for U512 {
    fn from(value: U256) -> U512 {
        let U256(ref arr) = value;

        U512([arr[0], arr[1], arr[2], arr[3], 0, 0, 0, 0])
    }
}

impl TryFrom<U512> for U256 {
    type Error = FixedPointError;

    fn try_from(value: U512) -> Result<U256, Self::Error> {
        let U512(ref arr) = value;
        if arr[4..].iter().any(|&word| word != 0) {
            return Err(FixedPointError::IntegerConversionError);
        }

        Ok(U256([arr[0], arr[1], arr[2], arr[3]]))
    }
}

/* Signed Integers */

construct_sint! {
    /// Signed 256-bit integer in two's complement over [`U256`].
    pub struct I256(U256);
}

impl TryFrom<I256> for u128 {
    type Error = FixedPointError;

    fn try_from(v: I256) -> Result<Self, Self::Error> {
        if v.is_negative() { return Err(FixedPointError::IntegerConversionError); }
        let U256(ref a) = v.to_unsigned();
        if a[2] != 0 || a[3] != 0 { return Err(FixedPointError::IntegerConversionError); }
        Ok(((a[1] as u128) << 64) | (a[0] as u128))
    }
}

impl TryFrom<I256> for i128 {
    type Error = FixedPointError;

    fn try_from(v: I256) -> Result<Self, Self::Error> {
        let neg = v.is_negative();
        let U256(ref a) = v.to_unsigned(); // LE limbs: [lo, mid1, mid2, hi]

        if !neg {
            // non-negative: bits 128..255 clear and bit127 clear
            if a[3] != 0 || a[2] != 0 || (a[1] >> 63) != 0 {
                return Err(FixedPointError::IntegerConversionError);
            }
        } else {
            // negative: bits 128..255 all ones and bit127 set
            if a[3] != u64::MAX || a[2] != u64::MAX || (a[1] >> 63) == 0 {
                return Err(FixedPointError::IntegerConversionError);
            }
        }

        let lo128 = ((a[1] as u128) << 64) | (a[0] as u128);
        Ok(lo128 as i128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i256_bounds() {
        assert!(I256::MIN.is_negative());
        assert!(I256::MAX.is_positive());
        assert_eq!(I256::MAX.to_unsigned(), U256::MAX >> 1usize);
        assert_eq!(I256::MIN.to_unsigned(), U256::one() << 255usize);
        assert_eq!(I256::MIN.unsigned_abs(), U256::one() << 255usize);
        assert_eq!(I256::MIN.checked_neg(), None);
        assert_eq!(I256::minus_one().unsigned_abs(), U256::one());
    }

    #[test]
    fn i256_from_i128_sign_extends() {
        let v = I256::from_i128(-5);
        assert!(v.is_negative());
        assert_eq!(v.unsigned_abs(), U256::from(5u64));
        assert_eq!(i128::try_from(v).unwrap(), -5);
        assert_eq!(i128::try_from(I256::from(i128::MIN)).unwrap(), i128::MIN);
        assert_eq!(u128::try_from(I256::from(42i64)).unwrap(), 42u128);
        assert!(u128::try_from(I256::minus_one()).is_err());
        assert!(i128::try_from(I256::MAX).is_err());
    }

    #[test]
    fn i256_ordering() {
        let a = I256::from(-2i64);
        let b = I256::from(-1i64);
        let c = I256::from(3i64);
        assert!(a < b);
        assert!(b < c);
        assert!(I256::MIN < a);
        assert!(c < I256::MAX);
    }

    #[test]
    fn i256_checked_add_and_sub() {
        assert_eq!(I256::MAX.checked_add(I256::one()), None);
        assert_eq!(I256::MIN.checked_add(I256::MIN), None);
        assert_eq!(I256::MIN.checked_sub(I256::one()), None);
        assert_eq!(I256::MAX.checked_sub(I256::minus_one()), None);
        assert_eq!(
            I256::from(-3i64).checked_add(I256::from(5i64)),
            Some(I256::from(2i64))
        );
        assert_eq!(
            I256::from(-3i64).checked_sub(I256::from(5i64)),
            Some(I256::from(-8i64))
        );
    }

    #[test]
    fn i256_arithmetic_shift_rounds_down() {
        assert_eq!(I256::from(-3i64) >> 1usize, I256::from(-2i64));
        assert_eq!(I256::from(-1i64) >> 1usize, I256::from(-1i64));
        assert_eq!(I256::from(7i64) >> 1usize, I256::from(3i64));
        assert_eq!(I256::MIN >> 255usize, I256::minus_one());
        assert_eq!(I256::MIN >> 1usize, I256::MIN.arithmetic_shr(1));
    }

    #[test]
    fn i256_sign_and_magnitude() {
        let max_mag = I256::MAX.to_unsigned();
        assert_eq!(I256::from_sign_and_magnitude(false, max_mag), Some(I256::MAX));
        assert_eq!(I256::from_sign_and_magnitude(false, max_mag + U256::one()), None);
        assert_eq!(
            I256::from_sign_and_magnitude(true, max_mag + U256::one()),
            Some(I256::MIN)
        );
        assert_eq!(I256::from_sign_and_magnitude(true, U256::MAX), None);
        assert_eq!(
            I256::from_sign_and_magnitude(true, U256::from(7u64)),
            Some(I256::from(-7i64))
        );
    }

    #[test]
    fn i256_display() {
        assert_eq!(I256::from(-42i64).to_string(), "-42");
        assert_eq!(I256::from(42i64).to_string(), "42");
        assert_eq!(
            I256::MIN.to_string(),
            "-57896044618658097711785492504343953926634992332820282019728792003956564819968"
        );
    }

    #[test]
    fn u512_narrowing() {
        let wide = U512::from(U256::MAX);
        assert_eq!(U256::try_from(wide).unwrap(), U256::MAX);
        let too_wide = wide + U512::one();
        assert_eq!(
            U256::try_from(too_wide),
            Err(FixedPointError::IntegerConversionError)
        );
    }

    #[test]
    fn u256_const_from_u128() {
        assert_eq!(U256::from_u128_const(u128::MAX), U256::from(u128::MAX));
        assert_eq!(u128::try_from(U256::from_u128_const(7)).unwrap(), 7);
        assert!(u128::try_from(U256::MAX).is_err());
    }
}
