use super::Number;

/// Returns `a * b`, wrapping at the integer bounds.
pub fn multiply<T: Number>(a: T, b: T) -> T {
    a.wrapping_mul(b)
}
