use thiserror::Error;

/// Errors reported by fallible list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested index is outside `[0, len)`. For `insert` this also
    /// covers the append position `len`, which only `push_back` accepts.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
