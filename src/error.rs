//! Errors raised by [`Tree`][crate::Tree] operations.
//!
//! There is exactly one kind of failure: an operation that needs a value was
//! handed nothing. Everything else (a value that isn't in the tree, an empty
//! tree) is reported through ordinary return values.

use thiserror::Error;

/// Tree error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// An operation that requires a value received none.
    #[error("`{operation}` requires a value but none was supplied")]
    InvalidArgument {
        /// Name of the operation that was called.
        operation: &'static str,
    },
}

/// Result type used by the checked tree operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn missing(operation: &'static str) -> Self {
        log::trace!("{} called without a value", operation);
        Self::InvalidArgument { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_operation() {
        let err = Error::missing("add");
        assert_eq!(err, Error::InvalidArgument { operation: "add" });
        assert_eq!(
            err.to_string(),
            "`add` requires a value but none was supplied"
        );
    }
}
