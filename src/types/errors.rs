use thiserror::Error;

/// This indicates some sort of memory allocation error reported by a `ListAllocator`.
///
/// `FlexList` never hands this to callers directly, it is turned into
/// `ListError::AllocFailure` carrying the capacity that was being requested.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("A memory allocation error occurred.")]
pub struct AllocError;

/// A type alias for `Result<T, ListError>`
pub type ListResult<T> = Result<T, ListError>;

/// This is used to indicate an error during a `FlexList` operation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The buffer could not be allocated or grown.
    ///
    /// This also covers capacities whose byte size would not fit in `isize`.
    #[error("Allocation failure: could not reserve room for {requested} elements")]
    AllocFailure {
        /// Number of element slots that were requested
        requested: usize,
    },
    /// An index was outside the range permitted by the operation.
    #[error("Index out of bounds: index {index} is invalid for length {length}")]
    IndexOutOfBounds {
        /// Index that was passed in
        index:  usize,
        /// Length of the list at the time of the call
        length: usize,
    },
}

impl ListError {
    pub(crate) const fn alloc_failure(requested: usize) -> Self {
        return Self::AllocFailure { requested };
    }

    pub(crate) const fn out_of_bounds(index: usize, length: usize) -> Self {
        return Self::IndexOutOfBounds { index, length };
    }

    /// Returns `true` if this error came from the allocator.
    pub const fn is_alloc_failure(&self) -> bool {
        return matches!(self, Self::AllocFailure { .. });
    }
}
