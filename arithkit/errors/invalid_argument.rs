use error_stack::Context;

/// An argument was outside the domain of the operation, e.g. a zero divisor.
///
/// The specifics (which argument, which value) are attached to the [`error_stack::Report`] as printable attachments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument;

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidArgument")
    }
}

impl Context for InvalidArgument {}
