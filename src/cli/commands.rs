//! Command implementations shared by the binary and tests
//!
//! Each command takes operator text, runs one wire primitive and returns a
//! [`Report`]. Rendering and exit codes are decided from the report.

use super::exit_codes::{CliResult, ExitCodes};
use crate::config::OutputFormat;
use crate::core::codec::{format_bits, parse_bits, CodecError, HexCodec};
use crate::core::protocol::{bits, checksum, crc16, lrc, BitsError, ChecksumType};
use serde::{Serialize, Serializer};

/// Command errors
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Operator input could not be decoded
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Packed frame is malformed
    #[error(transparent)]
    Bits(#[from] BitsError),

    /// Expected checksum value is not a number in range
    #[error("Invalid {kind} value: {value}")]
    InvalidValue {
        /// Checksum kind name
        kind: &'static str,
        /// Offending text
        value: String,
    },

    /// Frame cannot hold the checksum trailer
    #[error("Frame of {len} bytes is too short for a {needed}-byte trailer")]
    FrameTooShort {
        /// Frame length
        len: usize,
        /// Trailer size
        needed: usize,
    },

    /// JSON rendering failed
    #[error("Could not render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Codec(_) | Self::InvalidValue { .. } => ExitCodes::INVALID_ARGS,
            Self::Bits(_) | Self::FrameTooShort { .. } => ExitCodes::PROTOCOL_ERROR,
            Self::Json(_) => ExitCodes::INTERNAL_ERROR,
        }
    }
}

impl From<CommandError> for CliResult {
    fn from(err: CommandError) -> Self {
        CliResult::error(err.exit_code(), err.to_string())
    }
}

fn hex_bytes<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode_upper(bytes))
}

/// Outcome of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Report {
    /// Bits packed into a count-prefixed frame
    Pack {
        /// Number of input bits
        bit_count: usize,
        /// Count byte plus data bytes
        #[serde(serialize_with = "hex_bytes")]
        frame: Vec<u8>,
    },
    /// Frame unpacked into bits
    Unpack {
        /// Data byte count from the frame
        byte_count: usize,
        /// Decoded bits, padding included unless truncated
        bits: Vec<bool>,
    },
    /// CRC-16 of a payload
    Crc {
        /// Register value
        value: u16,
        /// Trailer bytes, low byte first
        #[serde(serialize_with = "hex_bytes")]
        wire: Vec<u8>,
    },
    /// LRC of a payload
    Lrc {
        /// Checksum byte
        value: u8,
    },
    /// Payload checked against an expected value, or a framed trailer verified
    Check {
        /// Algorithm used
        kind: ChecksumType,
        /// Value the caller supplied or the frame carried
        expected: u32,
        /// Value computed over the payload
        computed: u32,
        /// Whether they agree
        matched: bool,
    },
    /// Payload with trailer appended
    Append {
        /// Algorithm used
        kind: ChecksumType,
        /// Payload followed by the checksum trailer
        #[serde(serialize_with = "hex_bytes")]
        frame: Vec<u8>,
    },
}

impl Report {
    /// Exit code for this report
    pub fn exit_code(&self) -> u8 {
        match self {
            Report::Check { matched: false, .. } => ExitCodes::VALIDATION_FAILED,
            _ => ExitCodes::SUCCESS,
        }
    }

    /// Render the report for stdout
    pub fn render(&self, format: OutputFormat, codec: &HexCodec) -> Result<String, CommandError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Hex => Ok(self.render_hex(codec)),
            OutputFormat::Text => Ok(self.render_text(codec)),
        }
    }

    fn render_hex(&self, codec: &HexCodec) -> String {
        match self {
            Report::Pack { frame, .. } | Report::Append { frame, .. } => codec.encode(frame),
            Report::Unpack { bits: decoded, .. } => codec.encode(&bits::pack(decoded)[1..]),
            Report::Crc { wire, .. } => codec.encode(wire),
            Report::Lrc { value } => codec.encode(&[*value]),
            Report::Check { matched, .. } => (if *matched { "OK" } else { "MISMATCH" }).to_string(),
        }
    }

    fn render_text(&self, codec: &HexCodec) -> String {
        match self {
            Report::Pack { bit_count, frame } => {
                format!("{} bits -> {}", bit_count, codec.encode(frame))
            }
            Report::Unpack { byte_count, bits: decoded } => {
                format!("{} bytes -> {}", byte_count, format_bits(decoded))
            }
            Report::Crc { value, wire } => {
                format!("CRC-16 0x{:04X} (wire {})", value, codec.encode(wire))
            }
            Report::Lrc { value } => format!("LRC 0x{:02X}", value),
            Report::Check { kind, expected, computed, matched } => {
                let width = kind.size() * 2;
                format!(
                    "{} {}: expected 0x{:0w$X}, computed 0x{:0w$X}",
                    kind.name(),
                    if *matched { "OK" } else { "MISMATCH" },
                    expected,
                    computed,
                    w = width,
                )
            }
            Report::Append { kind, frame } => {
                format!("{} framed: {}", kind.name(), codec.encode(frame))
            }
        }
    }
}

/// Pack a bit string
pub fn pack(bit_text: &str) -> Result<Report, CommandError> {
    let bits = parse_bits(bit_text)?;
    Ok(Report::Pack {
        bit_count: bits.len(),
        frame: bits::pack(&bits),
    })
}

/// Unpack a hex frame, optionally keeping only `count` bits
pub fn unpack(hex_text: &str, count: Option<usize>, codec: &HexCodec) -> Result<Report, CommandError> {
    let frame = codec.decode(hex_text)?;
    let (mut decoded, byte_count) = bits::unpack(&frame)?;
    if let Some(count) = count {
        decoded = bits::unpack_exact(&frame, count)?;
    }
    Ok(Report::Unpack {
        byte_count,
        bits: decoded,
    })
}

/// CRC-16 of a hex payload
pub fn crc(hex_text: &str, codec: &HexCodec) -> Result<Report, CommandError> {
    let data = codec.decode(hex_text)?;
    let value = crc16::compute(&data);
    Ok(Report::Crc {
        value,
        wire: crc16::to_wire(value).to_vec(),
    })
}

/// LRC of a hex payload
pub fn lrc(hex_text: &str, codec: &HexCodec) -> Result<Report, CommandError> {
    let data = codec.decode(hex_text)?;
    Ok(Report::Lrc {
        value: lrc::compute(&data),
    })
}

/// Parse an expected checksum given as a number ("CDC5", "0xCDC5")
pub fn parse_expected(kind: ChecksumType, text: &str) -> Result<u32, CommandError> {
    let digits = text
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    let invalid = || CommandError::InvalidValue {
        kind: kind.name(),
        value: text.to_string(),
    };

    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    if value >> (kind.size() * 8) != 0 {
        return Err(invalid());
    }
    Ok(value)
}

/// Check a payload against an expected checksum value
pub fn check(
    kind: ChecksumType,
    hex_text: &str,
    expected_text: &str,
    codec: &HexCodec,
) -> Result<Report, CommandError> {
    let data = codec.decode(hex_text)?;
    let expected = parse_expected(kind, expected_text)?;

    // parse_expected bounds the value to the checksum width
    let matched = match kind {
        ChecksumType::Crc16 => crc16::check(&data, expected as u16),
        ChecksumType::Lrc => lrc::check(&data, expected as u8),
    };

    Ok(Report::Check {
        kind,
        expected,
        computed: checksum::calculate_u32(&data, kind),
        matched,
    })
}

/// Append a checksum trailer to a payload
pub fn append(kind: ChecksumType, hex_text: &str, codec: &HexCodec) -> Result<Report, CommandError> {
    let mut frame = codec.decode(hex_text)?;
    let trailer = checksum::calculate(&frame, kind);
    frame.extend_from_slice(&trailer);
    Ok(Report::Append { kind, frame })
}

/// Verify the trailer of a complete frame
pub fn verify(kind: ChecksumType, hex_text: &str, codec: &HexCodec) -> Result<Report, CommandError> {
    let frame = codec.decode(hex_text)?;
    let (payload, trailer) =
        checksum::split_trailer(&frame, kind).ok_or(CommandError::FrameTooShort {
            len: frame.len(),
            needed: kind.size(),
        })?;

    let expected = match kind {
        ChecksumType::Crc16 => u32::from(u16::from_le_bytes([trailer[0], trailer[1]])),
        ChecksumType::Lrc => u32::from(trailer[0]),
    };

    Ok(Report::Check {
        kind,
        expected,
        computed: checksum::calculate_u32(payload, kind),
        matched: checksum::verify(payload, trailer, kind),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = "01 03 00 00 00 0A";

    fn codec() -> HexCodec {
        HexCodec::new()
    }

    #[test]
    fn test_pack_report() {
        let report = pack("1011 0000 11").unwrap();
        assert_eq!(report, Report::Pack { bit_count: 10, frame: vec![0x02, 0x0D, 0x03] });
        assert_eq!(report.render(OutputFormat::Hex, &codec()).unwrap(), "02 0D 03");
    }

    #[test]
    fn test_unpack_report_keeps_padding() {
        let report = unpack("01 05", None, &codec()).unwrap();
        match report {
            Report::Unpack { byte_count, bits } => {
                assert_eq!(byte_count, 1);
                assert_eq!(bits.len(), 8);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_unpack_report_with_count() {
        let report = unpack("01 05", Some(3), &codec()).unwrap();
        assert_eq!(report, Report::Unpack { byte_count: 1, bits: vec![true, false, true] });
        assert_eq!(report.render(OutputFormat::Text, &codec()).unwrap(), "1 bytes -> 101");
    }

    #[test]
    fn test_unpack_short_frame_is_protocol_error() {
        let err = unpack("03 01", None, &codec()).unwrap_err();
        assert_eq!(err.exit_code(), ExitCodes::PROTOCOL_ERROR);
        let err = unpack("", None, &codec()).unwrap_err();
        assert!(matches!(err, CommandError::Bits(BitsError::EmptyInput)));
    }

    #[test]
    fn test_crc_report() {
        let report = crc(REQUEST, &codec()).unwrap();
        assert_eq!(
            report.render(OutputFormat::Text, &codec()).unwrap(),
            "CRC-16 0xCDC5 (wire C5 CD)"
        );
        assert_eq!(
            report.render(OutputFormat::Json, &codec()).unwrap(),
            r#"{"command":"crc","value":52677,"wire":"C5CD"}"#
        );
    }

    #[test]
    fn test_lrc_report() {
        let report = lrc(REQUEST, &codec()).unwrap();
        assert_eq!(report, Report::Lrc { value: 0xF2 });
        assert_eq!(report.render(OutputFormat::Text, &codec()).unwrap(), "LRC 0xF2");
    }

    #[test]
    fn test_parse_expected() {
        assert_eq!(parse_expected(ChecksumType::Crc16, "0xCDC5").unwrap(), 0xCDC5);
        assert_eq!(parse_expected(ChecksumType::Lrc, "f2").unwrap(), 0xF2);
        assert!(parse_expected(ChecksumType::Lrc, "1F2").is_err());
        assert!(parse_expected(ChecksumType::Crc16, "zz").is_err());
    }

    #[test]
    fn test_check_exit_codes() {
        let ok = check(ChecksumType::Crc16, REQUEST, "CDC5", &codec()).unwrap();
        assert_eq!(ok.exit_code(), ExitCodes::SUCCESS);

        let bad = check(ChecksumType::Lrc, REQUEST, "F3", &codec()).unwrap();
        assert_eq!(bad.exit_code(), ExitCodes::VALIDATION_FAILED);
        assert_eq!(
            bad.render(OutputFormat::Text, &codec()).unwrap(),
            "LRC MISMATCH: expected 0xF3, computed 0xF2"
        );
    }

    #[test]
    fn test_append_then_verify() {
        for &kind in ChecksumType::all() {
            let appended = append(kind, REQUEST, &codec()).unwrap();
            let framed = appended.render(OutputFormat::Hex, &codec()).unwrap();
            let verified = verify(kind, &framed, &codec()).unwrap();
            assert_eq!(verified.exit_code(), ExitCodes::SUCCESS, "{}", kind.name());
        }
    }

    #[test]
    fn test_verify_detects_bad_trailer() {
        let report = verify(ChecksumType::Crc16, "01 03 00 00 00 0A CD C5", &codec()).unwrap();
        assert_eq!(
            report,
            Report::Check { kind: ChecksumType::Crc16, expected: 0xC5CD, computed: 0xCDC5, matched: false }
        );
    }

    #[test]
    fn test_verify_short_frame() {
        let err = verify(ChecksumType::Crc16, "01", &codec()).unwrap_err();
        assert!(matches!(err, CommandError::FrameTooShort { len: 1, needed: 2 }));
    }
}
