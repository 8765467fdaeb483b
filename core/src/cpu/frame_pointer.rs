//! Encoding and decoding of the Previous-Frame-Pointer word stored in local
//! register 0 (`PFP`) of every frame but the outermost.

use crate::types::Ordinal;

/// The six `ret` behaviors selected by PFP's low 3 bits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReturnType {
    Local,
    Fault,
    SupervisorClear,
    SupervisorSet,
    Interrupt,
    Reserved(u8),
}

impl ReturnType {
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => ReturnType::Local,
            0b001 => ReturnType::Fault,
            0b010 => ReturnType::SupervisorClear,
            0b011 => ReturnType::SupervisorSet,
            0b111 => ReturnType::Interrupt,
            other => ReturnType::Reserved(other),
        }
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            ReturnType::Local => 0b000,
            ReturnType::Fault => 0b001,
            ReturnType::SupervisorClear => 0b010,
            ReturnType::SupervisorSet => 0b011,
            ReturnType::Interrupt => 0b111,
            ReturnType::Reserved(bits) => bits & 0b111,
        }
    }
}

#[must_use]
pub fn address(pfp_word: Ordinal) -> Ordinal {
    pfp_word & !0b1111
}

#[must_use]
pub fn return_type(pfp_word: Ordinal) -> ReturnType {
    ReturnType::from_bits((pfp_word & 0b111) as u8)
}

#[must_use]
pub fn prereturn_trace_flag(pfp_word: Ordinal) -> bool {
    pfp_word & 0b1000 != 0
}

#[must_use]
pub fn encode(frame_address: Ordinal, return_type: ReturnType, prereturn_trace: bool) -> Ordinal {
    (frame_address & !0b1111) | (return_type.bits() as Ordinal) | ((prereturn_trace as Ordinal) << 3)
}

#[must_use]
pub fn with_return_type(pfp_word: Ordinal, return_type: ReturnType) -> Ordinal {
    encode(pfp_word, return_type, prereturn_trace_flag(pfp_word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_address_and_type() {
        let word = encode(0x0000_1230, ReturnType::SupervisorSet, true);
        assert_eq!(address(word), 0x0000_1230);
        assert_eq!(return_type(word), ReturnType::SupervisorSet);
        assert!(prereturn_trace_flag(word));
    }

    #[test]
    fn local_return_is_zero_bits() {
        assert_eq!(ReturnType::from_bits(0b000), ReturnType::Local);
        assert_eq!(ReturnType::Local.bits(), 0);
    }
}
