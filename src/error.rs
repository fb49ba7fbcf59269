//! Errors raised when a generator is handed arguments of the wrong shape.

/// Error returned for invalid generator arguments.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// A node identifier did not hold exactly six bytes.
    #[error("node identifier must have 6 bytes, got {0}")]
    InvalidNodeLength(usize),

    /// A clock sequence did not hold exactly two bytes.
    #[error("clock sequence must have 2 bytes, got {0}")]
    InvalidClockSequenceLength(usize),
}
