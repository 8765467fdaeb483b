//! The call/return protocol: `call`, `callx`, `calls`, and `ret`.
//!
//! All four funnel into [`Core::push_frame`], which does the work common to
//! every call flavor — align the new stack pointer, link `RIP`, take
//! ownership of a frame-cache slot, and chain `PFP` back to the caller —
//! leaving each caller only to work out the target instruction pointer and
//! the `PFP` return-type tag.

use log::trace;

use crate::bus::MemoryBus;
use crate::cpu::boot;
use crate::cpu::decode::{CtrlInstruction, RegInstruction};
use crate::cpu::fault::Fault;
use crate::cpu::frame_pointer::{self, ReturnType};
use crate::cpu::operands;
use crate::cpu::{ControlFlow, Core, FRAME_ALIGNMENT};
use crate::types::Address;

/// `calls`'s target index must name one of the system procedure table's 260
/// entries (§4.6); anything past that is a protection violation, not an
/// out-of-range memory access.
const MAX_SYSTEM_PROCEDURE_INDEX: Address = 259;

impl<const N: usize> Core<N> {
    pub(crate) fn execute_call(
        &mut self,
        instr: CtrlInstruction,
        width: Address,
        bus: &mut dyn MemoryBus,
    ) -> Result<ControlFlow, Fault> {
        let target_ip = self.ip.wrapping_add(instr.displacement as u32);
        let next_ip = self.ip.wrapping_add(width);
        self.push_frame(target_ip, next_ip, ReturnType::Local, bus)
    }

    /// `callx`'s target is a memory-computed address rather than a
    /// displacement; [`super::mem`]'s `CallIndirect` body resolves the
    /// address and hands it here.
    pub(crate) fn execute_callx(
        &mut self,
        target_ip: Address,
        width: Address,
        bus: &mut dyn MemoryBus,
    ) -> Result<ControlFlow, Fault> {
        let next_ip = self.ip.wrapping_add(width);
        self.push_frame(target_ip, next_ip, ReturnType::Local, bus)
    }

    pub(crate) fn execute_calls(&mut self, instr: RegInstruction, bus: &mut dyn MemoryBus) -> Result<ControlFlow, Fault> {
        let target = operands::read(instr.src1, &self.globals, self.frames.locals());
        if target > MAX_SYSTEM_PROCEDURE_INDEX {
            return Err(Fault::ProtectionLength);
        }

        let table_base = boot::system_procedure_table_base(self.sat_base);
        let entry_addr = table_base.wrapping_add(48).wrapping_add(target.wrapping_mul(4));
        let entry_word = bus.load_word(entry_addr)?;
        let call_type = entry_word & 0b11;
        let entry_ip = entry_word & !0b11;

        let entering_supervisor = call_type >= 2 && !self.pc.in_supervisor_mode();
        let return_type = match call_type {
            0 | 1 => ReturnType::Local,
            _ if entering_supervisor => ReturnType::SupervisorSet,
            _ => ReturnType::SupervisorClear,
        };
        if entering_supervisor {
            self.pc = self.pc.with_execution_mode(true);
        }

        let next_ip = self.ip.wrapping_add(4);
        trace!("calls #{target} -> {entry_ip:#x} ({return_type:?})");
        self.push_frame(entry_ip, next_ip, return_type, bus)
    }

    pub(crate) fn execute_ret(&mut self, bus: &mut dyn MemoryBus) -> Result<ControlFlow, Fault> {
        let pfp_word = self.locals_pfp();
        let return_type = frame_pointer::return_type(pfp_word);
        let target_fp = frame_pointer::address(pfp_word);

        match return_type {
            ReturnType::Local => {}
            ReturnType::SupervisorClear => self.pc = self.pc.with_execution_mode(false),
            ReturnType::SupervisorSet => self.pc = self.pc.with_execution_mode(true),
            // A full implementation would additionally restore AC/PC/TC from
            // the fault/interrupt record this engine does not model; treated
            // as a local return otherwise.
            ReturnType::Fault | ReturnType::Interrupt => {}
            ReturnType::Reserved(_) => return Err(Fault::TypeMismatch),
        }

        // RIP lives in the caller's frame, not the one we're returning from —
        // read it only after `restore_ownership` has made that frame active.
        self.frames.restore_ownership(target_fp, bus)?;
        let target_ip = self.rip();
        self.set_fp(target_fp);
        self.ip = target_ip;
        trace!("ret -> {target_ip:#x} fp={target_fp:#x} ({return_type:?})");
        Ok(ControlFlow::Jumped)
    }

    fn push_frame(
        &mut self,
        target_ip: Address,
        next_ip: Address,
        return_type: ReturnType,
        bus: &mut dyn MemoryBus,
    ) -> Result<ControlFlow, Fault> {
        let alignment_mask = FRAME_ALIGNMENT - 1;
        let new_fp = self.sp().wrapping_add(alignment_mask) & !alignment_mask;
        let old_fp = self.fp();

        self.set_rip(next_ip);
        self.frames.take_ownership(new_fp, bus)?;
        self.set_locals_pfp(frame_pointer::encode(old_fp, return_type, false));
        self.set_fp(new_fp);
        self.set_sp(new_fp.wrapping_add(FRAME_ALIGNMENT));
        self.ip = target_ip;
        Ok(ControlFlow::Jumped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatBus;
    use crate::cpu::boot::BootConfig;

    fn booted_core() -> (Core, FlatBus) {
        let mut bus = FlatBus::new(0x1_0000);
        bus.store_quad(0, [0, 0, 0, 0x1000]).unwrap();
        let mut core: Core = Core::new();
        core.boot(BootConfig::default(), &mut bus).unwrap();
        (core, bus)
    }

    #[test]
    fn call_then_ret_round_trips_ip_and_frame_pointer() {
        let (mut core, mut bus) = booted_core();
        let caller_fp = core.fp();
        let caller_ip = core.ip;

        let instr = CtrlInstruction {
            op: i960sim_opcodes::MajorOp::Call,
            mask: 0,
            displacement: 0x200,
        };
        core.execute_call(instr, 4, &mut bus).unwrap();
        assert_eq!(core.ip, caller_ip.wrapping_add(0x200));
        assert_ne!(core.fp(), caller_fp);

        core.execute_ret(&mut bus).unwrap();
        assert_eq!(core.ip, caller_ip.wrapping_add(4));
        assert_eq!(core.fp(), caller_fp);
    }

    #[test]
    fn calls_past_the_table_bound_faults() {
        let (mut core, mut bus) = booted_core();
        // A literal operand tops out at 31, so exercise the 259-entry bound
        // with a register holding a value beyond it instead.
        core.globals.0.set(0, 260);
        let instr = RegInstruction {
            op: i960sim_opcodes::RegOp::CallSystem,
            src1: crate::cpu::decode::Operand::Register(16),
            src2: crate::cpu::decode::Operand::Literal(0),
            src_dest_raw: 0,
            src_dest_is_literal: false,
        };
        assert_eq!(core.execute_calls(instr, &mut bus), Err(Fault::ProtectionLength));
    }
}
