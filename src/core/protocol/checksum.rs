//! Checksum selection for serial framing
//!
//! RTU frames carry a CRC-16 trailer, ASCII frames an LRC byte. This module
//! maps a [`ChecksumType`] onto the right algorithm and its wire bytes.

use super::{crc16, lrc};
use serde::{Deserialize, Serialize};

/// Checksum algorithm types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumType {
    /// CRC-16/Modbus (polynomial 0x8005 reflected, init 0xFFFF), RTU framing
    Crc16,
    /// Longitudinal Redundancy Check (sum mod 256, negated), ASCII framing
    Lrc,
}

impl ChecksumType {
    /// Get all available checksum types
    pub fn all() -> &'static [ChecksumType] {
        &[ChecksumType::Crc16, ChecksumType::Lrc]
    }

    /// Get name of checksum type
    pub fn name(&self) -> &'static str {
        match self {
            ChecksumType::Crc16 => "CRC-16/Modbus",
            ChecksumType::Lrc => "LRC",
        }
    }

    /// Get output size in bytes
    pub fn size(&self) -> usize {
        match self {
            ChecksumType::Crc16 => 2,
            ChecksumType::Lrc => 1,
        }
    }
}

/// Calculate checksum for data, in wire byte order
pub fn calculate(data: &[u8], algorithm: ChecksumType) -> Vec<u8> {
    match algorithm {
        ChecksumType::Crc16 => crc16::to_wire(crc16::compute(data)).to_vec(),
        ChecksumType::Lrc => vec![lrc::compute(data)],
    }
}

/// Calculate and return checksum as u32
pub fn calculate_u32(data: &[u8], algorithm: ChecksumType) -> u32 {
    match algorithm {
        ChecksumType::Crc16 => u32::from(crc16::compute(data)),
        ChecksumType::Lrc => u32::from(lrc::compute(data)),
    }
}

/// Verify checksum given in wire byte order
pub fn verify(data: &[u8], checksum: &[u8], algorithm: ChecksumType) -> bool {
    match algorithm {
        ChecksumType::Crc16 => match checksum {
            &[lo, hi] => crc16::check(data, u16::from_le_bytes([lo, hi])),
            _ => false,
        },
        ChecksumType::Lrc => match checksum {
            &[value] => lrc::check(data, value),
            _ => false,
        },
    }
}

/// Split a frame into payload and checksum trailer.
///
/// Returns `None` when the frame is shorter than the trailer.
pub fn split_trailer(frame: &[u8], algorithm: ChecksumType) -> Option<(&[u8], &[u8])> {
    let payload_len = frame.len().checked_sub(algorithm.size())?;
    Some(frame.split_at(payload_len))
}
