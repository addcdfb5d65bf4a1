//! Core module containing the wire-level functionality
//!
//! This module provides:
//! - Coil bit packing for read-coil and write-coil payloads
//! - CRC-16/Modbus and LRC checksums
//! - Hex and bit-string codecs for operator input and output

pub mod codec;
pub mod protocol;
