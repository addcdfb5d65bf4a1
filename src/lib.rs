//! # Fieldbus Wire
//!
//! Wire-level primitives for Modbus-style serial framing:
//! - Coil bit packing (count-prefixed, LSB-first, zero-padded)
//! - CRC-16/Modbus for RTU frames
//! - LRC for ASCII frames
//!
//! Every function is pure. The only shared state is the CRC-16 lookup
//! table, built once on first use and read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use fieldbus_wire::{compute_crc, compute_lrc, pack_bits, unpack_bits};
//!
//! let frame = pack_bits(&[true, false, true]);
//! assert_eq!(frame, vec![0x01, 0x05]);
//!
//! let (bits, byte_count) = unpack_bits(&frame).unwrap();
//! assert_eq!(byte_count, 1);
//! assert_eq!(&bits[..3], &[true, false, true]);
//!
//! let request = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A];
//! assert_eq!(compute_crc(&request), 0xCDC5);
//! assert_eq!(compute_lrc(&request), 0xF2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;

// Re-exports for convenience
pub use crate::config::{OutputFormat, WireConfig};
pub use crate::core::codec::{CodecError, HexCodec, HexFormat};
pub use crate::core::protocol::bits::{
    pack as pack_bits, packed_len, unpack as unpack_bits, unpack_exact as unpack_bits_exact,
    BitsError, MAX_PACKED_BYTES,
};
pub use crate::core::protocol::checksum::ChecksumType;
pub use crate::core::protocol::crc16::{check as check_crc, compute as compute_crc};
pub use crate::core::protocol::lrc::{check as check_lrc, compute as compute_lrc};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
