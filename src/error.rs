use thiserror::Error;

/// Errors reported by the set, its cursors, and its range views.
///
/// Absence of a nearest match (`lower`, `floor`, and friends) is an ordinary `None`, not an
/// error; these variants cover contract violations and exhausted state. All of them are
/// reported synchronously at the point of violation and none are transient.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeError {
    /// `first` or `last` was called on a set or view that contains no elements.
    #[error("collection contains no elements")]
    EmptyCollection,

    /// A cursor was advanced past its final element.
    #[error("traversal already yielded its final element")]
    NoMoreElements,

    /// A cursor was asked to remove before yielding anything, or twice in a row.
    #[error("no yielded element is pending removal")]
    NoPriorElement,

    /// An insertion through a range view named a key outside the view's bounds.
    #[error("key lies outside the bounds of the view")]
    OutOfRange,

    /// Range bounds were inverted, or equal without both sides inclusive.
    #[error("range bounds can never contain a key")]
    InvalidRange,
}

pub(crate) type Result<T> = std::result::Result<T, TreeError>;
