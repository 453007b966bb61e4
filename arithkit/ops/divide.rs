use super::Number;
use crate::prelude::*;

/// Returns `a / b` as an [`f64`], so uneven integer division stays fractional: `divide(7, 2) == 3.5`.
///
/// Errors with [`InvalidArgument`] when `b` is zero (`0.0` and `-0.0` for floats).
pub fn divide<T: Number>(a: T, b: T) -> RResult<f64, InvalidArgument> {
    if b == T::ZERO {
        debug!(dividend = %a, "Rejected division by zero.");
        return Err(Report::new(InvalidArgument)
            .attach_printable(format!("Cannot divide {} by zero.", a)));
    }
    Ok(a.to_f64() / b.to_f64())
}
