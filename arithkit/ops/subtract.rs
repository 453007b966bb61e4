use super::Number;

/// Returns `a - b`, wrapping at the integer bounds.
pub fn subtract<T: Number>(a: T, b: T) -> T {
    a.wrapping_sub(b)
}
