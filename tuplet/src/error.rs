use thiserror::Error;

#[allow(unused_imports)] // To link with documentation
use crate::{Entry, Generic, Single};

/// The error returned by fallible tuple operations.
///
/// Every error is reported to the caller as soon as it is detected; no operation retries or
/// partially applies its effect before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TupleError {
    /// A write was attempted through an immutable tuple, e.g. [`Entry::set_value`] on a fixed
    /// [`Pair`](crate::Pair).
    #[error("`{operation}` is not supported by an immutable tuple")]
    UnsupportedOperation {
        /// The name of the rejected operation.
        operation: &'static str,
    },
    /// An index past the end of a [`Generic`] tuple.
    #[error("index {index} is out of bounds for a tuple of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the tuple.
        len: usize,
    },
    /// Two elements at the same position of a pair of [`Generic`] tuples have no ordering relative
    /// to each other.
    #[error("elements at index {index} are not comparable")]
    Incomparable {
        /// The position of the first incomparable pair of elements.
        index: usize,
    },
    /// An operation needed a present value, but found `None`, e.g. [`Single::update`] on an empty
    /// slot.
    #[error("`{argument}` must not be empty")]
    NullArgument {
        /// The name of the missing argument or slot.
        argument: &'static str,
    },
    /// A rendering template could not be applied.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// The error returned when a rendering template is invalid for the tuple it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormatError {
    /// A placeholder refers to a slot the tuple does not have.
    #[error(
        "placeholder at offset {offset} refers to slot {position}, but the tuple has {arity} slots"
    )]
    MissingArgument {
        /// The one-based slot position requested.
        position: usize,
        /// The number of slots available.
        arity: usize,
        /// The byte offset of the placeholder in the template.
        offset: usize,
    },
    /// A placeholder uses a conversion other than `s`, `S`, `n` or `%`.
    #[error("unknown conversion `{conversion}` at offset {offset}")]
    UnknownConversion {
        /// The conversion character.
        conversion: char,
        /// The byte offset of the placeholder in the template.
        offset: usize,
    },
    /// A placeholder is cut off or has an invalid position.
    #[error("malformed placeholder at offset {offset}")]
    Malformed {
        /// The byte offset of the placeholder in the template.
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(TupleError: Copy, Send, Sync, std::error::Error);
    assert_impl_all!(FormatError: Copy, Send, Sync, std::error::Error);

    #[test]
    fn format_errors_are_transparent() {
        let inner = FormatError::Malformed { offset: 2 };
        let outer = TupleError::from(inner);
        let copy = outer;
        assert_eq!(outer.to_string(), inner.to_string());
        assert_eq!(copy, outer);
    }
}
