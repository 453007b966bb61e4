use std::ops::{Add, Mul, Sub};

/// A signed primitive number the arithmetic operations accept, implemented for every signed integer and float type.
///
/// Integer overflow wraps in two's complement in every build profile, floats follow IEEE 754.
pub trait Number:
    Copy
    + PartialEq
    + std::fmt::Debug
    + std::fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// The additive identity, `0` or `0.0`.
    const ZERO: Self;

    /// Widen to an [`f64`], lossy for the 64 and 128 bit integers outside the 53 bit mantissa.
    fn to_f64(self) -> f64;

    /// `self + rhs`, wrapping at the integer bounds.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping at the integer bounds.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping at the integer bounds.
    fn wrapping_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_int {
    ($($typ:ty),* $(,)?) => {
        $(
            impl Number for $typ {
                const ZERO: Self = 0;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$typ>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$typ>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$typ>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
}

// Floats can't overflow into a panic, they saturate to infinity:
macro_rules! impl_float {
    ($($typ:ty),* $(,)?) => {
        $(
            impl Number for $typ {
                const ZERO: Self = 0.0;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, i128, isize);
impl_float!(f32, f64);
