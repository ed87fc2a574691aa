//! Matrix element type constraints
//!
//! The selection algorithms need more than a comparison: the binary-search
//! selector bisects the value range, and the median averages two entries.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Trait for types that can be stored in a sorted matrix
///
/// Implementations must provide a total order. For floats this is the IEEE
/// total order (`-0.0 < 0.0`, NaNs at the edges); inputs containing NaN are
/// accepted but their ranks follow that order rather than `<`.
pub trait MatrixElement: Copy + PartialOrd + Debug {
    /// Total comparison used by every algorithm in place of `<`
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// A value inside the closed bracket `[lo, hi]`
    ///
    /// Repeated bisection must reach a single value in a bounded number of
    /// steps. Requires `lo <= hi` under [`MatrixElement::total_cmp`].
    fn midpoint(lo: Self, hi: Self) -> Self;

    /// The next representable value, or `None` at the top of the domain
    fn successor(self) -> Option<Self>;

    /// The previous representable value, or `None` at the bottom of the domain
    fn predecessor(self) -> Option<Self>;

    /// Mean of two values, used for the median of an even-sized matrix
    ///
    /// Integers truncate toward zero.
    fn average(a: Self, b: Self) -> Self;

    /// `self < other` under the total order
    fn total_lt(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Less
    }

    /// `self <= other` under the total order
    fn total_le(&self, other: &Self) -> bool {
        self.total_cmp(other) != Ordering::Greater
    }
}

macro_rules! impl_integer_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl MatrixElement for $t {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn midpoint(lo: Self, hi: Self) -> Self {
                    // i128 holds the sum of any two 64-bit values
                    (lo as i128 + hi as i128).div_euclid(2) as $t
                }

                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn predecessor(self) -> Option<Self> {
                    self.checked_sub(1)
                }

                fn average(a: Self, b: Self) -> Self {
                    ((a as i128 + b as i128) / 2) as $t
                }
            }
        )*
    };
}

impl_integer_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Signed integer key whose ordering matches `total_cmp`
macro_rules! float_key {
    ($value:expr, $bits:ty, $signed:ty) => {{
        let raw = $value.to_bits() as $signed;
        raw ^ ((((raw >> (<$bits>::BITS - 1)) as $bits) >> 1) as $signed)
    }};
}

macro_rules! float_from_key {
    ($key:expr, $t:ty, $bits:ty, $signed:ty) => {{
        let key: $signed = $key;
        let raw = key ^ ((((key >> (<$bits>::BITS - 1)) as $bits) >> 1) as $signed);
        <$t>::from_bits(raw as $bits)
    }};
}

macro_rules! impl_float_element {
    ($t:ty, $bits:ty, $signed:ty) => {
        impl MatrixElement for $t {
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            fn midpoint(lo: Self, hi: Self) -> Self {
                // Bisect the total-order keys so every step halves the number
                // of representable values left in the bracket.
                let lo_key = float_key!(lo, $bits, $signed) as i128;
                let hi_key = float_key!(hi, $bits, $signed) as i128;
                let mid = (lo_key + hi_key).div_euclid(2) as $signed;
                float_from_key!(mid, $t, $bits, $signed)
            }

            fn successor(self) -> Option<Self> {
                let key = float_key!(self, $bits, $signed);
                key.checked_add(1)
                    .map(|next| float_from_key!(next, $t, $bits, $signed))
            }

            fn predecessor(self) -> Option<Self> {
                let key = float_key!(self, $bits, $signed);
                key.checked_sub(1)
                    .map(|prev| float_from_key!(prev, $t, $bits, $signed))
            }

            fn average(a: Self, b: Self) -> Self {
                a + (b - a) / 2.0
            }
        }
    };
}

impl_float_element!(f32, u32, i32);
impl_float_element!(f64, u64, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_midpoint_does_not_overflow() {
        assert_eq!(<i32 as MatrixElement>::midpoint(i32::MAX - 1, i32::MAX), i32::MAX - 1);
        assert_eq!(<i64 as MatrixElement>::midpoint(-3, 0), -2);
        assert_eq!(<u64 as MatrixElement>::midpoint(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(<u8 as MatrixElement>::midpoint(0, 255), 127);
    }

    #[test]
    fn test_integer_neighbours_and_average() {
        assert_eq!(MatrixElement::successor(i32::MAX), None);
        assert_eq!(MatrixElement::predecessor(0u32), None);
        assert_eq!(MatrixElement::successor(7i64), Some(8));
        assert_eq!(<i32 as MatrixElement>::average(13, 14), 13);
        assert_eq!(<i32 as MatrixElement>::average(-3, 0), -1);
    }

    #[test]
    fn test_float_neighbours_follow_total_order() {
        let one = 1.0f64;
        let next = MatrixElement::successor(one).unwrap();
        assert!(next > one);
        assert_eq!(MatrixElement::predecessor(next), Some(one));
        assert_eq!(MatrixElement::successor(-0.0f64).map(f64::to_bits), Some(0.0f64.to_bits()));
    }

    #[test]
    fn test_float_midpoint_stays_in_bracket() {
        let cases = [(-10.0f64, 10.0f64), (0.5, 0.75), (-3.0, -1.0), (2.0, 2.0)];
        for (lo, hi) in cases {
            let mid = <f64 as MatrixElement>::midpoint(lo, hi);
            assert!(lo.total_le(&mid) && mid.total_le(&hi), "{mid} outside [{lo}, {hi}]");
        }
        assert_eq!(<f32 as MatrixElement>::average(1.0, 2.0), 1.5);
    }
}
