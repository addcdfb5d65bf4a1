//! Hexadecimal codec for frame bytes

use super::CodecError;
use serde::{Deserialize, Serialize};

/// Hex display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexFormat {
    /// Uppercase hex (e.g., "01 03 C5 CD")
    #[default]
    Upper,
    /// Lowercase hex (e.g., "01 03 c5 cd")
    Lower,
    /// No spaces (e.g., "0103C5CD")
    Compact,
    /// C-style (e.g., "0x01, 0x03, 0xC5")
    CStyle,
}

/// Hex codec for frame bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct HexCodec {
    format: HexFormat,
}

impl HexCodec {
    /// Create a new hex codec with the default (uppercase, spaced) format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set format
    #[must_use]
    pub fn format(mut self, format: HexFormat) -> Self {
        self.format = format;
        self
    }

    /// Encode bytes as a hex string
    pub fn encode(&self, data: &[u8]) -> String {
        match self.format {
            HexFormat::Compact => ::hex::encode_upper(data),
            HexFormat::Upper => join(data, " ", |b| format!("{:02X}", b)),
            HexFormat::Lower => join(data, " ", |b| format!("{:02x}", b)),
            HexFormat::CStyle => join(data, ", ", |b| format!("0x{:02X}", b)),
        }
    }

    /// Decode a hex string into bytes.
    ///
    /// Whitespace, commas, colons and `0x` prefixes are ignored.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let mut digits = String::with_capacity(text.len());
        let mut chars = text.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            if c == '0' && matches!(chars.peek(), Some((_, 'x' | 'X'))) {
                chars.next();
                continue;
            }
            if c.is_ascii_hexdigit() {
                digits.push(c);
            } else if !(c.is_whitespace() || c == ',' || c == ':') {
                return Err(CodecError::InvalidCharacter(pos, c));
            }
        }

        if digits.len() % 2 != 0 {
            return Err(CodecError::InvalidFormat(
                "Hex string must have even number of digits".to_string(),
            ));
        }

        ::hex::decode(&digits).map_err(|e| CodecError::InvalidFormat(e.to_string()))
    }
}

fn join(data: &[u8], separator: &str, byte: impl Fn(u8) -> String) -> String {
    data.iter().map(|&b| byte(b)).collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_upper() {
        let codec = HexCodec::new();
        assert_eq!(codec.encode(&[0x01, 0x03, 0xC5, 0xCD]), "01 03 C5 CD");
    }

    #[test]
    fn test_encode_lower() {
        let codec = HexCodec::new().format(HexFormat::Lower);
        assert_eq!(codec.encode(&[0x01, 0x03, 0xC5, 0xCD]), "01 03 c5 cd");
    }

    #[test]
    fn test_encode_compact() {
        let codec = HexCodec::new().format(HexFormat::Compact);
        assert_eq!(codec.encode(&[0x01, 0x03, 0xC5, 0xCD]), "0103C5CD");
    }

    #[test]
    fn test_encode_c_style() {
        let codec = HexCodec::new().format(HexFormat::CStyle);
        assert_eq!(codec.encode(&[0x01, 0xF2]), "0x01, 0xF2");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(HexCodec::new().encode(&[]), "");
    }

    #[test]
    fn test_decode() {
        let codec = HexCodec::new();
        assert_eq!(codec.decode("01 03 00 00 00 0A").unwrap(), vec![0x01, 0x03, 0x00, 0x00, 0x00, 0x0A]);
        assert_eq!(codec.decode("0103000a").unwrap(), vec![0x01, 0x03, 0x00, 0x0A]);
        assert_eq!(codec.decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_with_prefix() {
        let codec = HexCodec::new();
        assert_eq!(codec.decode("0x01, 0x03, 0xC5").unwrap(), vec![0x01, 0x03, 0xC5]);
        assert_eq!(codec.decode("00:0A").unwrap(), vec![0x00, 0x0A]);
    }

    #[test]
    fn test_decode_errors() {
        let codec = HexCodec::new();
        assert!(matches!(codec.decode("010"), Err(CodecError::InvalidFormat(_))));
        assert_eq!(codec.decode("01 0G"), Err(CodecError::InvalidCharacter(4, 'G')));
    }
}
