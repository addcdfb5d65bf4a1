//! Coil bit packing
//!
//! Converts between boolean coil/discrete-input states and the
//! count-prefixed, LSB-first byte layout carried in Modbus read-coil
//! responses and write-multiple-coil requests.
//!
//! ```text
//! bits:   [1, 0, 1, 1, 0, 0, 0, 0,  1, 1]
//! frame:  02  0D  03
//!         |   |   +-- bits 8..10, right-justified, high bits zero
//!         |   +------ bits 0..8, first bit in the LSB
//!         +---------- number of data bytes that follow
//! ```

use thiserror::Error;

/// Largest data byte count the one-byte count field can carry
pub const MAX_PACKED_BYTES: usize = u8::MAX as usize;

/// Bit unpacking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsError {
    /// Frame has zero length, so there is no count byte
    #[error("Packed frame is empty")]
    EmptyInput,

    /// Count byte declares more data than the frame holds
    #[error("Packed frame declares {declared} data bytes but only {available} follow")]
    InputTooShort {
        /// Byte count from the frame header
        declared: usize,
        /// Data bytes actually present after the header
        available: usize,
    },

    /// Caller asked for more bits than the frame carries
    #[error("Requested {requested} bits but frame carries only {available}")]
    BitCountExceedsFrame {
        /// Bits the caller asked for
        requested: usize,
        /// Bits decoded from the frame (including padding)
        available: usize,
    },
}

/// Number of data bytes a sequence of `bit_count` bits packs into
pub fn packed_len(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// Pack bits into a count-prefixed frame.
///
/// The first bit of each group of eight lands in the least-significant
/// bit of its byte. A trailing partial group is right-justified and its
/// unused high bits are zero.
///
/// The count byte covers up to [`MAX_PACKED_BYTES`]; longer sequences
/// still produce every data byte, but the count wraps and the framing
/// layer is expected to reject such requests before they get here.
pub fn pack(bits: &[bool]) -> Vec<u8> {
    let byte_count = packed_len(bits.len());
    if byte_count > MAX_PACKED_BYTES {
        tracing::warn!(
            byte_count,
            "coil data exceeds one-byte count field, count will wrap"
        );
    }

    let mut frame = Vec::with_capacity(byte_count + 1);
    frame.push((byte_count & 0xFF) as u8);

    let mut packed = 0u8;
    let mut filled = 0u8;

    for &bit in bits {
        if bit {
            packed |= 1 << filled;
        }
        filled += 1;

        if filled == 8 {
            frame.push(packed);
            packed = 0;
            filled = 0;
        }
    }

    if filled > 0 {
        frame.push(packed);
    }

    frame
}

/// Unpack a count-prefixed frame into bits.
///
/// Returns all `8 * N` decoded bits together with the byte count `N`.
/// Padding bits from a partially filled last byte are returned as
/// `false`; callers that know the real coil count truncate themselves
/// or use [`unpack_exact`]. Bytes past the declared count are ignored.
pub fn unpack(frame: &[u8]) -> Result<(Vec<bool>, usize), BitsError> {
    let (&count, data) = frame.split_first().ok_or(BitsError::EmptyInput)?;
    let byte_count = usize::from(count);

    if data.len() < byte_count {
        tracing::debug!(
            declared = byte_count,
            available = data.len(),
            "packed frame truncated"
        );
        return Err(BitsError::InputTooShort {
            declared: byte_count,
            available: data.len(),
        });
    }

    let mut bits = Vec::with_capacity(byte_count * 8);
    for &byte in &data[..byte_count] {
        let mut value = byte;
        for _ in 0..8 {
            bits.push(value & 1 == 1);
            value >>= 1;
        }
    }

    Ok((bits, byte_count))
}

/// Unpack a frame and keep only the first `bit_count` bits
pub fn unpack_exact(frame: &[u8], bit_count: usize) -> Result<Vec<bool>, BitsError> {
    let (mut bits, _) = unpack(frame)?;
    if bit_count > bits.len() {
        return Err(BitsError::BitCountExceedsFrame {
            requested: bit_count,
            available: bits.len(),
        });
    }
    bits.truncate(bit_count);
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_empty() {
        assert_eq!(pack(&[]), vec![0x00]);
    }

    #[test]
    fn test_pack_full_byte() {
        let bits = [true, false, true, true, false, false, false, false];
        assert_eq!(pack(&bits), vec![0x01, 0x0D]);
    }

    #[test]
    fn test_pack_partial_byte_is_right_justified() {
        assert_eq!(pack(&[true]), vec![0x01, 0x01]);
        assert_eq!(pack(&[false, true]), vec![0x01, 0x02]);
        assert_eq!(pack(&[true, true, true]), vec![0x01, 0x07]);
    }

    #[test]
    fn test_pack_crosses_byte_boundary() {
        let bits = [
            true, false, true, true, false, false, false, false, // 0x0D
            true, true, // 0x03
        ];
        assert_eq!(pack(&bits), vec![0x02, 0x0D, 0x03]);
    }

    #[test]
    fn test_pack_read_coils_reference() {
        // Coils 20-38 from the Modbus application protocol example: CD 6B 05
        let bytes = [0xCDu8, 0x6B, 0x05];
        let mut bits = Vec::new();
        for byte in bytes {
            for i in 0..8 {
                bits.push(byte >> i & 1 == 1);
            }
        }
        bits.truncate(19);
        assert_eq!(pack(&bits), vec![0x03, 0xCD, 0x6B, 0x05]);
    }

    #[test]
    fn test_pack_count_wraps_past_limit() {
        let bits = vec![true; 256 * 8];
        let frame = pack(&bits);
        assert_eq!(frame.len(), 257);
        assert_eq!(frame[0], 0x00);
        assert!(frame[1..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_unpack_returns_padding() {
        let (bits, count) = unpack(&[0x01, 0x05]).unwrap();
        assert_eq!(count, 1);
        assert_eq!(bits, vec![true, false, true, false, false, false, false, false]);
    }

    #[test]
    fn test_unpack_zero_count() {
        let (bits, count) = unpack(&[0x00]).unwrap();
        assert!(bits.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_unpack_ignores_trailing_bytes() {
        let (bits, count) = unpack(&[0x01, 0xFF, 0xAA, 0xBB]).unwrap();
        assert_eq!(count, 1);
        assert_eq!(bits, vec![true; 8]);
    }

    #[test]
    fn test_unpack_errors() {
        assert_eq!(unpack(&[]), Err(BitsError::EmptyInput));
        assert_eq!(
            unpack(&[0x03, 0x01]),
            Err(BitsError::InputTooShort { declared: 3, available: 1 })
        );
    }

    #[test]
    fn test_unpack_exact() {
        let frame = pack(&[true, false, true]);
        assert_eq!(unpack_exact(&frame, 3).unwrap(), vec![true, false, true]);
        assert_eq!(unpack_exact(&frame, 8).unwrap().len(), 8);
        assert_eq!(
            unpack_exact(&frame, 9),
            Err(BitsError::BitCountExceedsFrame { requested: 9, available: 8 })
        );
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(8), 1);
        assert_eq!(packed_len(9), 2);
        assert_eq!(packed_len(2000), 250);
    }
}
