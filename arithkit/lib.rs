#![warn(clippy::disallowed_types)]
#![warn(missing_docs)]

//! arithkit - Elementary arithmetic on any signed primitive number, with error-stack reports for the failure paths.

mod prelude;

/// Error handling utilities.
pub mod errors;
/// The arithmetic operations.
pub mod ops;


pub use ops::{add, divide, multiply, subtract, Number};
