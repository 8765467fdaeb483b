//! Boot-time configuration and the reset sequence that reads it out of
//! memory.
//!
//! `BootConfig` is the only thing a host configures before calling
//! [`crate::cpu::Core::boot`]; everything else (SAT/PRCB/start-IP) is read
//! out of the 128-bit boot block the reference implementation's `boot0`
//! reads at a fixed base address.

use serde::Deserialize;

use crate::bus::MemoryBus;
use crate::cpu::fault::Fault;
use crate::types::{Address, Ordinal};

/// Host-supplied boot parameters. Deserializable so a test fixture or a CLI
/// front-end can describe a boot configuration as data rather than code.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct BootConfig {
    /// Address of the 128-bit boot block. Defaults to 0.
    pub base_address: Address,
    /// Number of on-chip frame-cache slots. Defaults to 4, matching the
    /// architecture's representative N.
    pub frame_cache_slots: usize,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            base_address: 0,
            frame_cache_slots: 4,
        }
    }
}

/// The fields read out of the boot block and the PRCB/SAT during reset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BootVectors {
    pub sat_base: Address,
    pub prcb_base: Address,
    pub start_ip: Address,
    pub interrupt_stack_pointer: Address,
}

/// Offsets into architectural tables the core reads during boot and while
/// servicing `calls`/IAC messages.
pub const SYSTEM_PROCEDURE_TABLE_OFFSET: Ordinal = 120;
pub const FAULT_PROCEDURE_TABLE_OFFSET: Ordinal = 152;
pub const INTERRUPT_TABLE_OFFSET: Ordinal = 20;
pub const FAULT_TABLE_OFFSET: Ordinal = 40;
pub const PRCB_INTERRUPT_STACK_POINTER_OFFSET: Ordinal = 24;
pub const SUPERVISOR_STACK_POINTER_OFFSET: Ordinal = 12;

/// Read the 128-bit boot block at `config.base_address` and the PRCB's
/// interrupt-stack-pointer field, matching the reference implementation's
/// `boot0(sat, prcb, startIP)` once the entry words are in hand.
pub fn read_boot_vectors(bus: &dyn MemoryBus, config: BootConfig) -> Result<BootVectors, Fault> {
    let words = bus.load_quad(config.base_address)?;
    let sat_base = words[0];
    let prcb_base = words[1];
    // words[2] is the initialization check word; this core does not
    // checksum it.
    let start_ip = words[3];
    let interrupt_stack_pointer = bus.load_word(prcb_base.wrapping_add(PRCB_INTERRUPT_STACK_POINTER_OFFSET))?;
    Ok(BootVectors {
        sat_base,
        prcb_base,
        start_ip,
        interrupt_stack_pointer,
    })
}

#[must_use]
pub fn system_procedure_table_base(sat_base: Address) -> Address {
    sat_base.wrapping_add(SYSTEM_PROCEDURE_TABLE_OFFSET)
}

#[must_use]
pub fn fault_procedure_table_base(sat_base: Address) -> Address {
    sat_base.wrapping_add(FAULT_PROCEDURE_TABLE_OFFSET)
}

#[must_use]
pub fn interrupt_table_base(prcb_base: Address) -> Address {
    prcb_base.wrapping_add(INTERRUPT_TABLE_OFFSET)
}

#[must_use]
pub fn fault_table_base(prcb_base: Address) -> Address {
    prcb_base.wrapping_add(FAULT_TABLE_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatBus;

    #[test]
    fn reads_boot_block_and_interrupt_stack_pointer() {
        let mut bus = FlatBus::new(0x1000);
        bus.store_quad(0, [0x100, 0x200, 0, 0x4000]).unwrap();
        bus.store_word(0x200 + PRCB_INTERRUPT_STACK_POINTER_OFFSET, 0x800).unwrap();

        let vectors = read_boot_vectors(&bus, BootConfig::default()).unwrap();
        assert_eq!(vectors.sat_base, 0x100);
        assert_eq!(vectors.prcb_base, 0x200);
        assert_eq!(vectors.start_ip, 0x4000);
        assert_eq!(vectors.interrupt_stack_pointer, 0x800);
    }
}
