//! Modbus wire primitives
//!
//! Provides the pieces the RTU and ASCII framing layers build on:
//! - Coil bit packing (count-prefixed, LSB-first)
//! - CRC-16/Modbus for RTU frames
//! - LRC for ASCII frames

pub mod bits;
pub mod checksum;
pub mod crc16;
pub mod lrc;

pub use bits::{pack, packed_len, unpack, unpack_exact, BitsError, MAX_PACKED_BYTES};
pub use checksum::{calculate as calc_checksum, split_trailer, verify as verify_checksum, ChecksumType};
