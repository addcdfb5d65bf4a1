//! Text codecs for wire data
//!
//! Turns operator input into bytes and bits and back:
//! - Hexadecimal byte strings ("01 03 00 0A", "0x01,0x03", "0103000A")
//! - Coil bit strings ("1011 0000 11")

mod bitstring;
mod hex;

pub use self::hex::{HexCodec, HexFormat};
pub use bitstring::{format_bits, parse_bits};

/// Codec errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Invalid input format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Invalid character
    #[error("Invalid character at position {0}: {1}")]
    InvalidCharacter(usize, char),
}
