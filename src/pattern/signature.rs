// Fri Oct 16 2026 - Alex

use std::fmt;

/// x86 `push imm32`.
pub const PUSH_IMM32: u8 = 0x68;

pub const SIGNATURE_LEN: usize = 5;

/// Opcode byte followed by a little-endian 32-bit immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatchSignature {
    bytes: [u8; SIGNATURE_LEN],
}

impl PatchSignature {
    pub fn new(opcode: u8, literal: u32) -> Self {
        let imm = literal.to_le_bytes();
        Self {
            bytes: [opcode, imm[0], imm[1], imm[2], imm[3]],
        }
    }

    pub fn push_imm32(literal: u32) -> Self {
        Self::new(PUSH_IMM32, literal)
    }

    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }

    pub fn literal(&self) -> u32 {
        u32::from_le_bytes([self.bytes[1], self.bytes[2], self.bytes[3], self.bytes[4]])
    }

    pub fn bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.bytes
    }

    /// Exact comparison against the first five bytes of `data`.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.len() >= SIGNATURE_LEN && data[..SIGNATURE_LEN] == self.bytes
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes.iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PatchSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

/// Little-endian encoding of an immediate, always four bytes wide.
pub fn encode_immediate(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}
