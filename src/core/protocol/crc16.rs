//! CRC-16/Modbus for RTU framing
//!
//! Polynomial: 0x8005 (reflected 0xA001), Init: 0xFFFF, RefIn: true, RefOut: true, XorOut: 0x0000
//!
//! The value is transmitted low byte first, see [`to_wire`].

use std::sync::LazyLock;

/// Reflected form of polynomial 0x8005
pub const POLYNOMIAL: u16 = 0xA001;

/// Initial register value for Modbus (plain CRC-16/ARC starts at zero)
pub const SEED: u16 = 0xFFFF;

static CRC16_TABLE: LazyLock<[u16; 256]> = LazyLock::new(|| {
    tracing::trace!("building CRC-16 lookup table");
    build_table()
});

/// Remainder of every byte value after eight reflected shift steps
pub(crate) fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];

    for (byte, entry) in (0u16..).zip(table.iter_mut()) {
        let mut value = byte;
        let mut crc: u16 = 0x0000;
        for _ in 0..8 {
            if (value ^ crc) & 0x0001 != 0 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            value >>= 1;
        }
        *entry = crc;
    }

    table
}

/// Compute the CRC-16/Modbus of `data`.
///
/// Empty input yields the seed, `0xFFFF`.
pub fn compute(data: &[u8]) -> u16 {
    let table = &*CRC16_TABLE;

    data.iter().fold(SEED, |crc, &byte| {
        let index = usize::from((crc ^ u16::from(byte)) & 0xFF);
        ((crc >> 8) & 0xFF) ^ table[index]
    })
}

/// Check `data` against an expected CRC
pub fn check(data: &[u8], expected: u16) -> bool {
    compute(data) == expected
}

/// Byte order of the CRC trailer in an RTU frame (low, high)
pub fn to_wire(crc: u16) -> [u8; 2] {
    crc.to_le_bytes()
}
