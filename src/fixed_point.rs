// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

use crate::{
    constants::{DECIMALS, SCALE},
    error::{FixedPointError, FixedPointResult},
    integers::U256,
};

/// Shared scaffolding for the 18-decimal types.
///
/// Usage:
///
/// fixed_point! {
///     pub struct UD60x18(U256, false);
/// }
///
/// The type must provide `sign_and_magnitude(&self) -> (bool, U256)` and
/// `from_sign_and_magnitude(bool, U256) -> FixedPointResult<Self>`; the
/// decimal text form and serde support are built on those two.
macro_rules! fixed_point {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident ( $storage:ty, $signed:tt );
    ) => {
        #[repr(transparent)]
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Debug, Default)]
        $vis struct $name(pub $storage);

        impl $name {
            /// Number of fractional decimal digits
            pub const DECIMALS: u32 = $crate::constants::DECIMALS;

            #[inline] pub const fn new(value: $storage) -> Self { Self(value) }
            #[inline] pub const fn into_raw(self) -> $storage { self.0 }
            #[inline] pub fn is_zero(&self) -> bool { self.0.is_zero() }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let (negative, magnitude) = self.sign_and_magnitude();
                $crate::fixed_point::write_scaled(f, negative, magnitude)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::FixedPointError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (negative, magnitude) = $crate::fixed_point::parse_scaled(s)?;
                Self::from_sign_and_magnitude(negative, magnitude)
            }
        }

        $crate::fixed_point::__private::__impl_from_base_int!($name, $signed);

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where S: serde::Serializer
            {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use fixed_point;

pub(crate) mod __private {
    macro_rules! __impl_from_base_int {
        // unsigned: n * 10^18 < 2^128 * 2^60, never overflows 256 bits
        ($name:ident, false) => {
            impl core::convert::From<u128> for $name {
                #[inline]
                fn from(v: u128) -> Self {
                    Self($crate::integers::U256::from(v) * $crate::constants::SCALE)
                }
            }

            impl core::convert::From<u64> for $name {
                #[inline]
                fn from(v: u64) -> Self {
                    Self::from(v as u128)
                }
            }

            impl core::convert::From<u32> for $name {
                #[inline]
                fn from(v: u32) -> Self {
                    Self::from(v as u128)
                }
            }
        };
        // signed: |n| * 10^18 <= 2^127 * 2^60, never reaches the sign bit
        ($name:ident, true) => {
            impl core::convert::From<i128> for $name {
                #[inline]
                fn from(v: i128) -> Self {
                    let magnitude = $crate::integers::U256::from(v.unsigned_abs())
                        * $crate::constants::SCALE;
                    let raw = $crate::integers::I256::from_unsigned(magnitude);
                    Self(if v < 0 { raw.wrapping_neg() } else { raw })
                }
            }

            impl core::convert::From<i64> for $name {
                #[inline]
                fn from(v: i64) -> Self {
                    Self::from(v as i128)
                }
            }

            impl core::convert::From<i32> for $name {
                #[inline]
                fn from(v: i32) -> Self {
                    Self::from(v as i128)
                }
            }

            impl core::convert::From<u64> for $name {
                #[inline]
                fn from(v: u64) -> Self {
                    Self::from(v as i128)
                }
            }
        };
        ($name:ident, $other:tt) => {
            compile_error!("$signed must be the literal `true` or `false`");
        };
    }

    pub(crate) use __impl_from_base_int;
}

/// Writes `[-]integer[.fraction]` with trailing fractional zeros trimmed.
pub(crate) fn write_scaled(f: &mut fmt::Formatter<'_>, negative: bool, magnitude: U256) -> fmt::Result {
    let (integer, fraction) = magnitude.div_mod(SCALE);
    let sign = if negative && !magnitude.is_zero() { "-" } else { "" };

    if fraction.is_zero() {
        return write!(f, "{sign}{integer}");
    }

    let digits = format!("{:018}", fraction.low_u64());
    write!(f, "{sign}{integer}.{}", digits.trim_end_matches('0'))
}

/// Parses `[-|+]digits[.digits]` into a sign and a scaled magnitude.
pub(crate) fn parse_scaled(s: &str) -> FixedPointResult<(bool, U256)> {
    let s = s.trim();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty())
        || !all_digits(integer)
        || !all_digits(fraction)
        || fraction.len() > DECIMALS as usize
    {
        return Err(FixedPointError::parse("from_str"));
    }

    let integer = if integer.is_empty() {
        U256::zero()
    } else {
        // only digits at this point, so the one failure left is overflow
        U256::from_dec_str(integer).map_err(|_| FixedPointError::overflow("from_str"))?
    };

    let mut fraction_raw = 0u64;
    for (i, digit) in fraction.bytes().enumerate() {
        fraction_raw += u64::from(digit - b'0') * 10u64.pow(DECIMALS - 1 - i as u32);
    }

    let magnitude = integer
        .checked_mul(SCALE)
        .and_then(|v| v.checked_add(U256::from(fraction_raw)))
        .ok_or_else(|| FixedPointError::overflow("from_str"))?;

    Ok((negative, magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_and_fraction() {
        assert_eq!(parse_scaled("1").unwrap(), (false, SCALE));
        assert_eq!(
            parse_scaled("-1.5").unwrap(),
            (true, U256::from(1_500_000_000_000_000_000u64))
        );
        assert_eq!(parse_scaled("+.25").unwrap(), (false, U256::from(250_000_000_000_000_000u64)));
        assert_eq!(parse_scaled("0.000000000000000001").unwrap(), (false, U256::one()));
        assert_eq!(parse_scaled("  7.  ").unwrap(), (false, U256::from(7u64) * SCALE));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "-", ".", "1.2.3", "abc", "1e18", "0.0000000000000000001", "--1", "1 000"] {
            assert_eq!(parse_scaled(bad), Err(FixedPointError::ParseError), "{bad}");
        }
    }

    #[test]
    fn parse_rejects_out_of_range() {
        let too_big = "115792089237316195423570985008687907853269984665640564039458";
        assert_eq!(parse_scaled(too_big), Err(FixedPointError::Overflow));
    }
}
