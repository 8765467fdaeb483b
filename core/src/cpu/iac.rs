//! Inter-agent communication (IAC) messages — the 128-bit control-plane
//! packets used to request a reboot, report a checksum failure, post an
//! interrupt, or ask the core to publish its system-address-table/PRCB
//! pointers back out to memory.
//!
//! Field layout and message-type codes are grounded directly in the
//! reference implementation's `IACMessage` class and
//! `Core::processIACMessage` dispatch.

use crate::bus::MemoryBus;
use crate::cpu::boot::{self, BootConfig};
use crate::cpu::fault::Fault;
use crate::cpu::{Core, FRAME_ALIGNMENT};
use crate::types::{Address, Ordinal};

/// The message types this engine acts on. Message types the reference
/// implementation only stubs out (`purge instruction cache`, `set
/// breakpoint register`, `generate interrupt`, `test pending interrupts`)
/// are parsed but otherwise no-ops here too — there is no instruction
/// cache or interrupt controller to act on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IacMessageType {
    PurgeInstructionCache,
    ReinitializeProcessor,
    SetBreakpointRegister,
    StoreSystemBase,
    GenerateSystemInterrupt,
    TestPendingInterrupts,
    Boot,
    ChecksumFail,
    Unknown(u8),
}

impl IacMessageType {
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            0x89 => IacMessageType::PurgeInstructionCache,
            0x93 => IacMessageType::ReinitializeProcessor,
            0x8F => IacMessageType::SetBreakpointRegister,
            0x80 => IacMessageType::StoreSystemBase,
            0x40 => IacMessageType::GenerateSystemInterrupt,
            0x41 => IacMessageType::TestPendingInterrupts,
            0x00 => IacMessageType::Boot,
            0x01 => IacMessageType::ChecksumFail,
            other => IacMessageType::Unknown(other),
        }
    }
}

/// A decoded 128-bit IAC message. `field0` packs `message_type`/`field1`/
/// `field2`; `field3..field5` are plain 32-bit payload words whose meaning
/// depends on `message_type`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IacMessage {
    pub message_type: IacMessageType,
    pub field1: u8,
    pub field2: u16,
    pub field3: Ordinal,
    pub field4: Ordinal,
    pub field5: Ordinal,
}

/// Decode a 128-bit message delivered as four little-endian words.
#[must_use]
pub fn decode(words: [Ordinal; 4]) -> IacMessage {
    let field0 = words[0];
    IacMessage {
        message_type: IacMessageType::from_code((field0 >> 24) as u8),
        field1: ((field0 >> 16) & 0xFF) as u8,
        field2: (field0 & 0xFFFF) as u16,
        field3: words[1],
        field4: words[2],
        field5: words[3],
    }
}

impl<const N: usize> Core<N> {
    /// Act on a decoded IAC message delivered via a `synmovq` to
    /// [`crate::cpu::IAC_WINDOW_BASE`] (§4.7).
    pub(crate) fn handle_iac(&mut self, message: IacMessage, bus: &mut dyn MemoryBus) -> Result<(), Fault> {
        match message.message_type {
            IacMessageType::Boot => {
                let config = BootConfig {
                    base_address: message.field3,
                    ..BootConfig::default()
                };
                self.boot(config, bus)?;
            }
            IacMessageType::ReinitializeProcessor => {
                self.reinitialize(message.field3, message.field4, message.field5, bus)?;
            }
            IacMessageType::ChecksumFail => self.request_halt(),
            IacMessageType::StoreSystemBase => {
                let packed = ((self.prcb_base as u64) << 32) | self.sat_base as u64;
                bus.store_long(message.field3, packed)?;
            }
            IacMessageType::PurgeInstructionCache
            | IacMessageType::SetBreakpointRegister
            | IacMessageType::GenerateSystemInterrupt
            | IacMessageType::TestPendingInterrupts
            | IacMessageType::Unknown(_) => {
                // No instruction cache, breakpoint register, or interrupt
                // controller is modeled; these are acknowledged as no-ops.
            }
        }
        Ok(())
    }

    fn reinitialize(
        &mut self,
        sat_base: Address,
        prcb_base: Address,
        start_ip: Address,
        bus: &mut dyn MemoryBus,
    ) -> Result<(), Fault> {
        self.sat_base = sat_base;
        self.prcb_base = prcb_base;
        let isp = bus.load_word(prcb_base.wrapping_add(boot::PRCB_INTERRUPT_STACK_POINTER_OFFSET))?;
        self.pc = self.pc.with_priority(31).with_state(true);
        self.frames.take_ownership(isp, bus)?;
        self.set_fp(isp);
        self.set_sp(isp.wrapping_add(FRAME_ALIGNMENT));
        self.set_locals_pfp(0);
        self.ip = start_ip;
        self.halted = false;
        Ok(())
    }
}
