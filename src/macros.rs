// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

/// Constructs a two's complement signed integer over an unsigned `uint` type.
///
/// Only the operations the fixed-point layer needs are generated. Every
/// arithmetic helper is either checked (returns `Option`) or explicitly
/// wrapping; nothing panics on overflow.
#[macro_export]
macro_rules! construct_sint {
    ( $(#[$attr:meta])* $visibility:vis struct $sname:ident ( $uname:ident ); ) => {
        #[repr(transparent)]
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        $visibility struct $sname($uname);

        impl $sname {
            /// The number of bits in this signed integer type
            pub const BITS: u32 = (core::mem::size_of::<$uname>() * 8) as u32;
            const SIGN_BIT: usize = Self::BITS as usize - 1;

            /// Maximum positive value (2^(n-1) - 1)
            pub const MAX: $sname = {
                let mut raw = $uname::MAX;
                raw.0[Self::SIGN_BIT / 64] &= !(1u64 << (Self::SIGN_BIT % 64));
                $sname(raw)
            };

            /// Minimum negative value (-2^(n-1)), has no positive counterpart
            pub const MIN: $sname = {
                let mut raw = $uname::zero();
                raw.0[Self::SIGN_BIT / 64] = 1u64 << (Self::SIGN_BIT % 64);
                $sname(raw)
            };

            pub const fn zero() -> Self {
                Self($uname::zero())
            }

            pub const fn one() -> Self {
                Self($uname::one())
            }

            pub const fn minus_one() -> Self {
                Self($uname::MAX)
            }

            /// Sign-extends an `i128`, usable in const context.
            pub const fn from_i128(value: i128) -> Self {
                let mut raw = if value < 0 { $uname::MAX } else { $uname::zero() };
                raw.0[0] = value as u64;
                raw.0[1] = (value >> 64) as u64;
                Self(raw)
            }

            pub const fn is_negative(&self) -> bool {
                self.0.bit(Self::SIGN_BIT)
            }

            pub const fn is_positive(&self) -> bool {
                !self.is_negative() && !self.is_zero()
            }

            pub const fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            /// Low bit of the two's complement pattern
            pub const fn is_odd(&self) -> bool {
                self.0.bit(0)
            }

            /// Magnitude as an unsigned integer. Total, `MIN` maps to 2^(n-1).
            #[inline]
            pub fn unsigned_abs(&self) -> $uname {
                if self.is_negative() {
                    self.wrapping_neg().0
                } else {
                    self.0
                }
            }

            /// Rebuilds a signed value from a sign and a magnitude.
            ///
            /// Returns `None` when the magnitude does not fit, i.e. above `MAX`
            /// for non-negative values and above 2^(n-1) for negative ones.
            #[inline]
            pub fn from_sign_and_magnitude(negative: bool, magnitude: $uname) -> Option<Self> {
                if negative {
                    if magnitude > Self::MIN.0 {
                        return None;
                    }
                    Some(Self(magnitude).wrapping_neg())
                } else {
                    if magnitude > Self::MAX.0 {
                        return None;
                    }
                    Some(Self(magnitude))
                }
            }

            #[inline]
            pub fn wrapping_neg(&self) -> Self {
                Self((!self.0).overflowing_add($uname::one()).0)
            }

            #[inline]
            pub fn checked_neg(self) -> Option<Self> {
                if self == Self::MIN {
                    None
                } else {
                    Some(self.wrapping_neg())
                }
            }

            #[inline]
            pub fn wrapping_add(self, other: Self) -> Self {
                Self(self.0.overflowing_add(other.0).0)
            }

            #[inline]
            pub fn wrapping_sub(self, other: Self) -> Self {
                Self(self.0.overflowing_sub(other.0).0)
            }

            /// Signed overflow happens only when both operands share a sign
            /// and the wrapped result does not.
            #[inline]
            pub fn overflowing_add(self, other: Self) -> (Self, bool) {
                let wrapped = self.wrapping_add(other);
                let overflow = self.is_negative() == other.is_negative()
                    && wrapped.is_negative() != self.is_negative();
                (wrapped, overflow)
            }

            #[inline]
            pub fn overflowing_sub(self, other: Self) -> (Self, bool) {
                let wrapped = self.wrapping_sub(other);
                let overflow = self.is_negative() != other.is_negative()
                    && wrapped.is_negative() != self.is_negative();
                (wrapped, overflow)
            }

            #[inline]
            pub fn checked_add(self, other: Self) -> Option<Self> {
                let (result, overflow) = self.overflowing_add(other);
                if overflow { None } else { Some(result) }
            }

            #[inline]
            pub fn checked_sub(self, other: Self) -> Option<Self> {
                let (result, overflow) = self.overflowing_sub(other);
                if overflow { None } else { Some(result) }
            }

            /// Reinterpret as the underlying unsigned type
            pub const fn to_unsigned(self) -> $uname {
                self.0
            }

            /// Reinterpret an unsigned bit pattern as signed
            pub const fn from_unsigned(value: $uname) -> Self {
                Self(value)
            }

            /// Arithmetic right shift, rounds toward negative infinity.
            #[inline]
            pub fn arithmetic_shr(self, rhs: usize) -> Self {
                if rhs == 0 {
                    return self;
                }
                if rhs >= Self::BITS as usize {
                    return if self.is_negative() { Self::minus_one() } else { Self::zero() };
                }

                let logical = self.0 >> rhs;
                if self.is_negative() {
                    Self(logical | ($uname::MAX << (Self::BITS as usize - rhs)))
                } else {
                    Self(logical)
                }
            }
        }

        impl Default for $sname {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl From<i128> for $sname {
            #[inline]
            fn from(value: i128) -> Self {
                Self::from_i128(value)
            }
        }

        impl From<i64> for $sname {
            #[inline]
            fn from(value: i64) -> Self {
                Self::from_i128(value as i128)
            }
        }

        impl core::ops::Shr<usize> for $sname {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: usize) -> Self { self.arithmetic_shr(rhs) }
        }

        impl PartialOrd for $sname {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $sname {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                use core::cmp::Ordering;

                match (self.is_negative(), other.is_negative()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    // same sign: two's complement order matches unsigned order
                    _ => self.0.cmp(&other.0),
                }
            }
        }

        impl core::fmt::Display for $sname {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                if self.is_negative() {
                    write!(f, "-{}", self.unsigned_abs())
                } else {
                    write!(f, "{}", self.0)
                }
            }
        }

        impl core::fmt::Debug for $sname {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::Display::fmt(self, f)
            }
        }
    };
}
