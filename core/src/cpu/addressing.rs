//! MEM-format effective-address computation.
//!
//! Each [`MemFormatMode`] variant corresponds to one formula below; the
//! mapping from mode to formula is exactly the reference implementation's
//! address-generation switch, just without the C++ pointer arithmetic.

use i960sim_opcodes::MemFormatMode;

use crate::cpu::decode::MemAddressing;
use crate::types::Address;

/// `abase` resolved to a register value, and `index` (if the addressing
/// mode uses one) resolved to a register value — both read by the caller
/// from whichever register bank the decoded field names, since this module
/// has no opinion on locals vs. globals.
pub struct AddressingInputs {
    pub abase_value: Address,
    pub index_value: Address,
    pub ip: Address,
}

/// Clamp a raw 3-bit scale field to the architecturally legal range;
/// values 5–7 are reserved and emulated as scale 0.
#[must_use]
fn legal_scale(scale: u8) -> u32 {
    if scale <= 4 {
        scale as u32
    } else {
        0
    }
}

#[must_use]
pub fn effective_address(mode: MemFormatMode, addressing: MemAddressing, inputs: &AddressingInputs) -> Address {
    match (mode, addressing) {
        (MemFormatMode::AbsoluteOffset, MemAddressing::Offset(offset)) => offset as Address,
        (MemFormatMode::RegisterIndirectWithOffset, MemAddressing::Offset(offset)) => {
            inputs.abase_value.wrapping_add(offset as Address)
        }
        (MemFormatMode::RegisterIndirect, MemAddressing::None) => inputs.abase_value,
        (MemFormatMode::RegisterIndirectWithIndex, MemAddressing::IndexScale { index: _, scale }) => inputs
            .abase_value
            .wrapping_add(inputs.index_value << legal_scale(scale)),
        // `IP + displacement + 8`: the +8 accounts for the two-word
        // instruction itself, so the displacement is relative to the
        // address immediately following this (double-wide) instruction.
        (MemFormatMode::IpWithDisplacement, MemAddressing::Displacement(disp)) => {
            inputs.ip.wrapping_add(disp as u32).wrapping_add(8)
        }
        (MemFormatMode::AbsoluteDisplacement, MemAddressing::Displacement(disp)) => disp as u32,
        (MemFormatMode::RegisterIndirectWithDisplacement, MemAddressing::IndexScaleDisplacement { displacement, .. }) => {
            inputs.abase_value.wrapping_add(displacement as u32)
        }
        (MemFormatMode::IndexWithDisplacement, MemAddressing::IndexScaleDisplacement { scale, displacement, .. }) => {
            (inputs.index_value << legal_scale(scale)).wrapping_add(displacement as u32)
        }
        (
            MemFormatMode::RegisterIndirectWithIndexAndDisplacement,
            MemAddressing::IndexScaleDisplacement { scale, displacement, .. },
        ) => inputs
            .abase_value
            .wrapping_add(inputs.index_value << legal_scale(scale))
            .wrapping_add(displacement as u32),
        // Reserved mode, or a mismatched (mode, addressing) pairing that
        // can't arise from `decode::decode_mem`: there is no sensible
        // address, so the caller's fault path is the right place to
        // surface this, not a panic here.
        _ => 0,
    }
}
