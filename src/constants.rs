// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Raw constants shared by the unsigned and signed 18-decimal types.
//!
//! Every value is a raw integer, i.e. already multiplied by [`SCALE`].

use crate::integers::{I256, U256};

/// Number of fractional decimal digits
pub const DECIMALS: u32 = 18;

pub(crate) const SCALE_U128: u128 = 1_000_000_000_000_000_000;
pub(crate) const HALF_SCALE_U128: u128 = SCALE_U128 / 2;

/// 10^18, the raw representation of 1.0
pub const SCALE: U256 = U256::from_u128_const(SCALE_U128);
pub const HALF_SCALE: U256 = U256::from_u128_const(HALF_SCALE_U128);
/// 10^36, numerator for reciprocals of scaled values
pub const SCALE_SQUARED: U256 = U256::from_u128_const(SCALE_U128 * SCALE_U128);

/// log2(e)
pub const LOG2_E: U256 = U256::from_u128_const(1_442695040888963407);
/// log2(10)
pub const LOG2_10: U256 = U256::from_u128_const(3_321928094887362347);
/// Euler's number
pub const E: U256 = U256::from_u128_const(2_718281828459045235);
/// Archimedes' constant
pub const PI: U256 = U256::from_u128_const(3_141592653589793238);

/// Largest unsigned value with a zero fractional part
pub const MAX_WHOLE_UNSIGNED: U256 =
    U256([0xf7e52fe5afe40000, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff]);
/// Largest signed value with a zero fractional part
pub const MAX_WHOLE_SIGNED: I256 = I256::from_unsigned(U256([
    0xf5023c9904400000,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x7fffffffffffffff,
]));
/// Smallest signed value with a zero fractional part
pub const MIN_WHOLE_SIGNED: I256 = I256::from_unsigned(U256([
    0x0afdc366fbc00000,
    0x0000000000000000,
    0x0000000000000000,
    0x8000000000000000,
]));

/// exp2 fails for inputs at or above 192.0, since 2^192 does not fit the
/// 192.64 binary format used internally.
pub const EXP2_MAX_INPUT: U256 = U256::from_u128_const(192 * SCALE_U128);
/// Below this, 2^x is smaller than 10^-18 and truncates to zero.
pub const EXP2_MIN_INPUT: I256 = I256::from_i128(-59_794705707972522261);
/// ln(10^-18), below this e^x truncates to zero.
pub const EXP_MIN_INPUT: I256 = I256::from_i128(-41_446531673892822322);

/// log2 of the largest unsigned value
pub const LOG2_MAX_UNSIGNED: U256 = U256::from_u128_const(196_205294292027477728);
/// log10 of the largest unsigned value
pub const LOG10_MAX_UNSIGNED: U256 = U256::from_u128_const(59_063678889979185987);
/// ln of the largest unsigned value
pub const LN_MAX_UNSIGNED: U256 = U256::from_u128_const(135_999146549453176925);
/// log2 of the largest signed value
pub const LOG2_MAX_SIGNED: I256 = I256::from_i128(195_205294292027477728);
/// log10 of the largest signed value
pub const LOG10_MAX_SIGNED: I256 = I256::from_i128(58_762648894315204792);
/// ln of the largest signed value
pub const LN_MAX_SIGNED: I256 = I256::from_i128(135_305999368893231616);

/// 10^0 through 10^77, every power of ten that fits in 256 bits.
pub(crate) static POWERS_OF_TEN: [U256; 78] = powers_of_ten();

const fn powers_of_ten() -> [U256; 78] {
    let mut table = [U256([0; 4]); 78];
    let mut limbs = [1u64, 0, 0, 0];
    let mut k = 0;
    while k < table.len() {
        table[k] = U256(limbs);

        let mut carry = 0u128;
        let mut i = 0;
        while i < limbs.len() {
            let v = limbs[i] as u128 * 10 + carry;
            limbs[i] = v as u64;
            carry = v >> 64;
            i += 1;
        }
        k += 1;
    }
    table
}

/// 2^(2^-k) in 64.64 binary fixed point for k = 1..=64, rounded to nearest.
/// Entry `i` is the factor for fractional bit `63 - i` of the exponent.
pub(crate) const EXP2_FRACTION_FACTORS: [u128; 64] = [
    0x16a09e667f3bcc909,
    0x1306fe0a31b7152df,
    0x1172b83c7d517adce,
    0x10b5586cf9890f62a,
    0x1059b0d31585743ae,
    0x102c9a3e778060ee7,
    0x10163da9fb33356d8,
    0x100b1afa5abcbed61,
    0x10058c86da1c09ea2,
    0x1002c605e2e8cec50,
    0x100162f3904051fa1,
    0x1000b175effdc76ba,
    0x100058ba01fb9f96d,
    0x10002c5cc37da9492,
    0x1000162e525ee0547,
    0x10000b17255775c04,
    0x1000058b91b5bc9ae,
    0x100002c5c89d5ec6d,
    0x10000162e43f4f831,
    0x100000b1721bcfc9a,
    0x10000058b90cf1e6e,
    0x1000002c5c863b73f,
    0x100000162e430e5a2,
    0x1000000b172183551,
    0x100000058b90c0b49,
    0x10000002c5c8601cc,
    0x1000000162e42fff0,
    0x10000000b17217fbb,
    0x1000000058b90bfce,
    0x100000002c5c85fe3,
    0x10000000162e42ff1,
    0x100000000b17217f8,
    0x10000000058b90bfc,
    0x1000000002c5c85fe,
    0x100000000162e42ff,
    0x1000000000b17217f,
    0x100000000058b90c0,
    0x10000000002c5c860,
    0x1000000000162e430,
    0x10000000000b17218,
    0x1000000000058b90c,
    0x100000000002c5c86,
    0x10000000000162e43,
    0x100000000000b1721,
    0x10000000000058b91,
    0x1000000000002c5c8,
    0x100000000000162e4,
    0x1000000000000b172,
    0x100000000000058b9,
    0x10000000000002c5d,
    0x1000000000000162e,
    0x10000000000000b17,
    0x1000000000000058c,
    0x100000000000002c6,
    0x10000000000000163,
    0x100000000000000b1,
    0x10000000000000059,
    0x1000000000000002c,
    0x10000000000000016,
    0x1000000000000000b,
    0x10000000000000006,
    0x10000000000000003,
    0x10000000000000001,
    0x10000000000000001,
];
