//! Bit writer producing hex-encoded payloads.

/// A bit-level writer, the mirror of [`crate::BitReader`].
///
/// Bits are appended in write order and rendered as uppercase hex with
/// zero-padding to a whole nibble, which is exactly the padding a reader
/// ignores past the last consumed bit.
///
/// # Example
///
/// ```
/// use bits_buffers::BitWriter;
///
/// let mut writer = BitWriter::new();
/// writer.uint(0b110, 3);
/// writer.uint(0b100, 3);
/// assert_eq!(writer.to_hex(), "D0");
/// ```
#[derive(Default)]
pub struct BitWriter {
    /// Accumulated bits in write order, one per element (0 or 1).
    pub bits: Vec<u8>,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bits written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if no bits have been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Appends a single bit.
    #[inline]
    pub fn push_bit(&mut self, bit: u8) {
        self.bits.push(bit & 1);
    }

    /// Appends the low `n` bits of `value`, most-significant bit first.
    pub fn uint(&mut self, value: u64, n: usize) {
        for i in (0..n).rev() {
            self.push_bit(((value >> i) & 1) as u8);
        }
    }

    /// Renders the written bits as an uppercase hex string, zero-padding the
    /// final nibble.
    pub fn to_hex(&self) -> String {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
        let mut hex = String::with_capacity(self.bits.len().div_ceil(4));
        for chunk in self.bits.chunks(4) {
            let mut nibble = 0u8;
            for (i, &bit) in chunk.iter().enumerate() {
                nibble |= bit << (3 - i);
            }
            hex.push(DIGITS[nibble as usize] as char);
        }
        hex
    }
}
