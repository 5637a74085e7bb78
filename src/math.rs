// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Pure helpers shared by the unsigned and signed types. They work on
//! magnitudes; sign handling lives with the signed type.

use crate::{
    constants::{EXP2_FRACTION_FACTORS, HALF_SCALE_U128, POWERS_OF_TEN, SCALE, SCALE_U128},
    error::{FixedPointError, FixedPointResult},
    integers::{U256, U512},
};

/// round_half_up(x * y / denominator), with the product held in 512 bits.
///
/// A remainder of exactly half the denominator rounds up.
#[inline]
pub(crate) fn mul_div_half_up(x: U256, y: U256, denominator: U256) -> FixedPointResult<U256> {
    if denominator.is_zero() {
        return Err(FixedPointError::division_by_zero("mul_div"));
    }

    let product = U512::from(x) * U512::from(y);
    let den = U512::from(denominator);
    let (mut quotient, remainder) = product.div_mod(den);

    // remainder < den < 2^256, doubling cannot overflow 512 bits
    if remainder << 1usize >= den {
        quotient = quotient + U512::one();
    }

    U256::try_from(quotient).map_err(|_| FixedPointError::overflow("mul_div"))
}

/// (x * y) / 10^18 rounded half up
#[inline]
pub(crate) fn mul_fixed(x: U256, y: U256) -> FixedPointResult<U256> {
    mul_div_half_up(x, y, SCALE)
}

/// (x * 10^18) / y rounded half up
#[inline]
pub(crate) fn div_fixed(x: U256, y: U256) -> FixedPointResult<U256> {
    mul_div_half_up(x, SCALE, y)
}

/// Index of the most significant set bit. `x` must be non-zero.
#[inline]
pub(crate) fn most_significant_bit(x: U256) -> usize {
    debug_assert!(!x.is_zero());
    x.bits() - 1
}

/// Binary logarithm of a scaled value `x >= 1.0`.
///
/// The integer part is the position of the highest bit of `x / 10^18`. The
/// fractional part is extracted one bit at a time: squaring the normalized
/// remainder `y` in [1, 2) doubles its logarithm, so crossing 2 emits a 1 bit.
pub(crate) fn log2_at_least_one(x: U256) -> U256 {
    debug_assert!(x >= SCALE);

    let n = most_significant_bit(x / SCALE);
    let integer = U256::from(n as u64) * SCALE;

    // y in [1, 2) scaled, so y * y < 4e36 fits in u128
    let mut y = (x >> n).low_u128();
    if y == SCALE_U128 {
        return integer;
    }

    let mut fraction = 0u128;
    let mut delta = HALF_SCALE_U128;
    while delta > 0 {
        y = y * y / SCALE_U128;
        if y >= 2 * SCALE_U128 {
            fraction += delta;
            y >>= 1;
        }
        delta >>= 1;
    }

    integer + U256::from(fraction)
}

/// 2^x for `x` in 192.64 binary fixed point with `x < 192 << 64`, returned
/// as a scaled 18-decimal value.
///
/// Starts from 2^191 as the representation of 1.0 and multiplies in
/// 2^(2^-k) for every set fractional bit; the integer part is applied last
/// as a right shift out of the 2^191 headroom.
pub(crate) fn exp2_binary(x: U256) -> FixedPointResult<U256> {
    let integer = x >> 64usize;
    if integer > U256::from(191u64) {
        return Err(FixedPointError::overflow("exp2"));
    }
    let integer = integer.low_u64() as usize;

    let fraction = x.low_u64();
    let mut result = U256::one() << 191usize;
    for (i, &factor) in EXP2_FRACTION_FACTORS.iter().enumerate() {
        if fraction & (1u64 << (63 - i)) != 0 {
            let product = U512::from(result) * U512::from(factor);
            result = U256::try_from(product >> 64usize)
                .map_err(|_| FixedPointError::overflow("exp2"))?;
        }
    }

    let scaled = result
        .checked_mul(SCALE)
        .ok_or_else(|| FixedPointError::overflow("exp2"))?;

    Ok(scaled >> (191 - integer))
}

/// Floor of the square root of `n` by Newton's method.
///
/// The seed is a power of two at or above the true root, so the iterates
/// decrease monotonically and the first non-decreasing step marks the floor.
pub(crate) fn sqrt_floor(n: U512) -> U512 {
    if n.is_zero() {
        return U512::zero();
    }

    let mut guess = U512::one() << ((n.bits() + 1) / 2);
    loop {
        let next = (guess + n / guess) >> 1usize;
        if next >= guess {
            return guess;
        }
        guess = next;
    }
}

/// Scaled square root: floor(sqrt(x * 10^18)), so the root keeps 18 decimals.
pub(crate) fn sqrt_fixed(x: U256) -> FixedPointResult<U256> {
    let widened = U512::from(x)
        .checked_mul(U512::from(SCALE))
        .ok_or_else(|| FixedPointError::overflow("sqrt"))?;

    U256::try_from(sqrt_floor(widened)).map_err(|_| FixedPointError::overflow("sqrt"))
}

/// Geometric mean of two scaled values: floor(sqrt(x * y)).
pub(crate) fn geometric_mean(x: U256, y: U256) -> FixedPointResult<U256> {
    let product = U512::from(x) * U512::from(y);

    U256::try_from(sqrt_floor(product)).map_err(|_| FixedPointError::overflow("gm"))
}

/// Index of `x` among the powers of ten, if it is one.
#[inline]
pub(crate) fn power_of_ten_exponent(x: U256) -> Option<usize> {
    POWERS_OF_TEN.binary_search(&x).ok()
}

/// x^n by squaring, with half-up rounding after each fixed-point multiply.
pub(crate) fn powu_fixed(mut x: U256, mut n: u64) -> FixedPointResult<U256> {
    let mut result = if n & 1 == 1 { x } else { SCALE };

    n >>= 1;
    while n > 0 {
        x = mul_fixed(x, x)?;
        if n & 1 == 1 {
            result = mul_fixed(result, x)?;
        }
        n >>= 1;
    }

    Ok(result)
}
