use super::Number;

/// Returns `a + b`, wrapping at the integer bounds.
pub fn add<T: Number>(a: T, b: T) -> T {
    a.wrapping_add(b)
}
