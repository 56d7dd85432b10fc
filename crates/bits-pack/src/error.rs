use bits_buffers::BufferError;
use thiserror::Error;

/// Errors produced while decoding a BITS transmission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    /// The bit stream ended before a framing rule was satisfied, or the
    /// input was not valid hex.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// A literal payload carried more than 64 bits of value.
    #[error("literal value does not fit in 64 bits")]
    LiteralOverflow,

    /// A bit-length-framed group's sub-packets consumed more bits than the
    /// group declared.
    #[error("sub-packet group overran its declared length: declared {declared} bits, consumed {consumed}")]
    GroupOvershoot { declared: usize, consumed: usize },
}
