//! Bit reader with cursor tracking.

use crate::BufferError;

/// A bit-level reader over a hex-encoded payload.
///
/// Each hex character contributes exactly 4 bits, most-significant bit first,
/// concatenated in input order. The reader maintains a bit cursor that only
/// moves forward; a read past the declared length fails with
/// [`BufferError::EndOfBuffer`].
///
/// # Example
///
/// ```
/// use bits_buffers::BitReader;
///
/// let mut reader = BitReader::from_hex("D2").unwrap();
/// assert_eq!(reader.uint(3).unwrap(), 0b110);
/// assert_eq!(reader.take_bit().unwrap(), 1);
/// assert_eq!(reader.remaining(), 4);
/// ```
#[derive(Debug)]
pub struct BitReader {
    /// Packed bit data, MSB-first within each byte.
    pub bytes: Vec<u8>,
    /// Current bit position.
    pub x: usize,
    /// Total number of addressable bits (exclusive end).
    pub end: usize,
}

impl BitReader {
    /// Creates a reader from a hexadecimal string (case-insensitive).
    ///
    /// The bit length is always 4 × the number of hex characters; trailing
    /// pad bits are addressable but a well-formed decode never consumes them.
    pub fn from_hex(hex: &str) -> Result<Self, BufferError> {
        let mut bytes = vec![0u8; hex.len().div_ceil(2)];
        for (i, c) in hex.chars().enumerate() {
            let nibble = c.to_digit(16).ok_or(BufferError::InvalidHexDigit(c))? as u8;
            let shift = if i % 2 == 0 { 4 } else { 0 };
            bytes[i / 2] |= nibble << shift;
        }
        Ok(Self {
            bytes,
            x: 0,
            end: hex.len() * 4,
        })
    }

    /// Returns the number of unconsumed bits.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.x
    }

    /// Reads the next bit (0 or 1) and advances the cursor by one.
    #[inline]
    pub fn take_bit(&mut self) -> Result<u8, BufferError> {
        if self.x >= self.end {
            return Err(BufferError::EndOfBuffer);
        }
        let bit = (self.bytes[self.x / 8] >> (7 - self.x % 8)) & 1;
        self.x += 1;
        Ok(bit)
    }

    /// Reads `n` bits as an unsigned integer, most-significant bit first.
    pub fn uint(&mut self, n: usize) -> Result<u64, BufferError> {
        if n > 64 {
            return Err(BufferError::TooManyBits);
        }
        if self.remaining() < n {
            return Err(BufferError::EndOfBuffer);
        }
        let mut value = 0u64;
        for _ in 0..n {
            value = (value << 1) | self.take_bit()? as u64;
        }
        Ok(value)
    }
}
