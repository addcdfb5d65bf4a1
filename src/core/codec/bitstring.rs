//! Coil bit strings

use super::CodecError;

/// Parse a string of `0`/`1` into bits, first character first.
///
/// Whitespace, `_` and `,` may be used as group separators.
pub fn parse_bits(text: &str) -> Result<Vec<bool>, CodecError> {
    let mut bits = Vec::with_capacity(text.len());

    for (pos, c) in text.char_indices() {
        match c {
            '1' => bits.push(true),
            '0' => bits.push(false),
            '_' | ',' => {}
            c if c.is_whitespace() => {}
            c => return Err(CodecError::InvalidCharacter(pos, c)),
        }
    }

    Ok(bits)
}

/// Format bits as `0`/`1`, grouped by byte
pub fn format_bits(bits: &[bool]) -> String {
    bits.chunks(8)
        .map(|group| group.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
