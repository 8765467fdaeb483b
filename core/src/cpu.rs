//! The CPU core: register state, control registers, the frame cache, and
//! the fetch-decode-execute cycle loop.

pub mod addressing;
pub mod boot;
pub mod control;
pub mod decode;
mod execute;
pub mod fault;
pub mod frame_cache;
pub mod frame_pointer;
pub mod iac;
pub mod operands;
pub mod registers;

use log::{debug, trace, warn};

use crate::bus::MemoryBus;
use crate::cpu::boot::BootConfig;
use crate::cpu::control::{ArithmeticControls, ProcessControls, TraceControls};
use crate::cpu::fault::Fault;
use crate::cpu::frame_cache::FrameCache;
use crate::cpu::registers::GlobalRegisters;
use crate::types::Address;

/// Default on-chip frame-cache depth, matching the architecture's
/// representative N.
pub const DEFAULT_FRAME_CACHE_SLOTS: usize = 4;

/// Stack-frame alignment: frame pointers are rounded up to a 64-byte
/// boundary (16 locals × 4 bytes), matching `c = frame_alignment - 1` in
/// the call transition.
pub const FRAME_ALIGNMENT: Address = 64;

/// Fixed absolute address of the IAC command window (§4.7).
pub const IAC_WINDOW_BASE: Address = 0xFF00_0010;

/// Address a store to which the cycle loop treats as a halt request. Not
/// part of the architecture proper — a stand-in for whatever a host's bus
/// adapter wires up as "stop".
pub const HALT_ADDRESS: Address = 0xFF00_0100;

/// Local register aliases (§3).
pub const PFP: usize = 0;
pub const SP: usize = 1;
pub const RIP: usize = 2;

/// What happened on the most recent [`Core::step`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// The instruction executed normally; the core is ready to fetch the next one.
    Continued,
    /// A store to [`HALT_ADDRESS`] was observed; the cycle loop should stop calling `step`.
    Halted,
}

/// Whether an instruction body already repointed `ip` (branch/call/ret) or
/// expects the cycle loop to advance it by the instruction's width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ControlFlow {
    Advance(Address),
    Jumped,
}

pub struct Core<const N: usize = DEFAULT_FRAME_CACHE_SLOTS> {
    pub globals: GlobalRegisters,
    pub frames: FrameCache<N>,
    pub ac: ArithmeticControls,
    pub pc: ProcessControls,
    pub tc: TraceControls,
    pub ip: Address,
    pub sat_base: Address,
    pub prcb_base: Address,
    halted: bool,
}

impl<const N: usize> Default for Core<N> {
    fn default() -> Self {
        Self {
            globals: GlobalRegisters::default(),
            frames: FrameCache::new(),
            ac: ArithmeticControls::default(),
            pc: ProcessControls::default(),
            tc: TraceControls::default(),
            ip: 0,
            sat_base: 0,
            prcb_base: 0,
            halted: false,
        }
    }
}

impl<const N: usize> Core<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn halted(&self) -> bool {
        self.halted
    }

    fn locals_pfp(&self) -> Address {
        self.frames.locals().get(PFP)
    }

    fn set_locals_pfp(&mut self, value: Address) {
        self.frames.locals_mut().set(PFP, value);
    }

    #[must_use]
    pub fn sp(&self) -> Address {
        self.frames.locals().get(SP)
    }

    pub fn set_sp(&mut self, value: Address) {
        self.frames.locals_mut().set(SP, value);
    }

    #[must_use]
    pub fn rip(&self) -> Address {
        self.frames.locals().get(RIP)
    }

    pub fn set_rip(&mut self, value: Address) {
        self.frames.locals_mut().set(RIP, value);
    }

    #[must_use]
    pub fn fp(&self) -> Address {
        self.globals.frame_pointer()
    }

    pub fn set_fp(&mut self, value: Address) {
        self.globals.set_frame_pointer(value);
    }

    /// Reset and boot per §6's boot protocol: read the 128-bit boot block,
    /// set the scheduling-priority/state bits, seed FP/SP/PFP from the
    /// PRCB's interrupt-stack pointer, take ownership of the first frame
    /// cache slot, and jump to the start IP.
    pub fn boot(&mut self, config: BootConfig, bus: &mut dyn MemoryBus) -> Result<(), Fault> {
        let vectors = boot::read_boot_vectors(bus, config)?;
        debug!(
            "boot: sat={:#x} prcb={:#x} start_ip={:#x}",
            vectors.sat_base, vectors.prcb_base, vectors.start_ip
        );

        self.sat_base = vectors.sat_base;
        self.prcb_base = vectors.prcb_base;
        self.pc = self.pc.with_priority(31).with_state(true);

        let isp = vectors.interrupt_stack_pointer;
        self.frames.take_ownership(isp, bus)?;
        self.set_fp(isp);
        self.set_sp(isp.wrapping_add(FRAME_ALIGNMENT));
        self.set_locals_pfp(0);
        self.ip = vectors.start_ip;
        self.halted = false;
        Ok(())
    }

    /// Fetch, decode, and execute exactly one instruction.
    pub fn step(&mut self, bus: &mut dyn MemoryBus) -> Result<StepOutcome, Fault> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let first_word = bus.load_word(self.ip)?;
        let second_word = if decode::mem_is_double_wide(first_word) {
            Some(bus.load_word(self.ip.wrapping_add(4))?)
        } else {
            None
        };
        let instruction = decode::decode(first_word, second_word);
        let width: Address = if second_word.is_some() { 8 } else { 4 };

        trace!("step ip={:#x} word={:#010x}", self.ip, first_word);

        match self.execute(instruction, width, bus)? {
            ControlFlow::Advance(w) => self.ip = self.ip.wrapping_add(w),
            ControlFlow::Jumped => {}
        }

        if self.halted {
            Ok(StepOutcome::Halted)
        } else {
            Ok(StepOutcome::Continued)
        }
    }

    pub(crate) fn request_halt(&mut self) {
        warn!("halt requested at ip={:#x}", self.ip);
        self.halted = true;
    }

    /// Stores aren't routed through one chokepoint (`MemoryBus` is the
    /// architectural boundary, not this engine's only writer — the
    /// synchronized/atomic REG family writes memory too), so every store
    /// site calls this directly after a successful write.
    pub(crate) fn maybe_halt(&mut self, addr: Address) {
        if addr == HALT_ADDRESS {
            self.request_halt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatBus;

    #[test]
    fn boot_sets_up_frame_and_jumps_to_start_ip() {
        let mut bus = FlatBus::new(0x1_0000);
        bus.store_quad(0, [0x100, 0x200, 0, 0x8000]).unwrap();
        bus.store_word(0x200 + boot::PRCB_INTERRUPT_STACK_POINTER_OFFSET, 0x400)
            .unwrap();

        let mut core: Core = Core::new();
        core.boot(BootConfig::default(), &mut bus).unwrap();

        assert_eq!(core.ip, 0x8000);
        assert_eq!(core.fp(), 0x400);
        assert_eq!(core.sp(), 0x400 + FRAME_ALIGNMENT);
        assert!(!core.halted());
    }

    #[test]
    fn unconditional_branch_repoints_ip_by_its_displacement() {
        let mut bus = FlatBus::new(0x1_0000);
        bus.store_quad(0, [0, 0, 0, 0x1000]).unwrap();
        let mut core: Core = Core::new();
        core.boot(BootConfig::default(), &mut bus).unwrap();

        // `b +0x40` (CTRL, major 0x08, displacement 0x40).
        bus.store_word(0x1000, (0x08u32 << 24) | 0x40).unwrap();
        core.step(&mut bus).unwrap();
        assert_eq!(core.ip, 0x1040);
    }
}
