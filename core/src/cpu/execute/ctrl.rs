//! CTRL-format bodies: unconditional/conditional branches, branch-and-link,
//! and the `faultX` family. `call`/`ret` are CTRL-encoded too but their
//! state machine lives in [`super::callret`].

use i960sim_opcodes::MajorOp;
use log::trace;

use crate::bus::MemoryBus;
use crate::cpu::decode::CtrlInstruction;
use crate::cpu::fault::Fault;
use crate::cpu::{ControlFlow, Core};
use crate::types::Address;

impl<const N: usize> Core<N> {
    pub(crate) fn execute_ctrl(
        &mut self,
        instr: CtrlInstruction,
        width: Address,
        bus: &mut dyn MemoryBus,
    ) -> Result<ControlFlow, Fault> {
        trace!("ctrl {:?} mask={:#05b} disp={}", instr.op, instr.mask, instr.displacement);
        match instr.op {
            MajorOp::B => {
                self.ip = self.ip.wrapping_add(instr.displacement as u32);
                Ok(ControlFlow::Jumped)
            }
            MajorOp::Bal => {
                // g14 is the architecture's branch-and-link return register.
                let link = self.ip.wrapping_add(width);
                self.globals.0.set(14, link);
                self.ip = self.ip.wrapping_add(instr.displacement as u32);
                Ok(ControlFlow::Jumped)
            }
            MajorOp::BranchConditional => {
                if self.ac.cc_matches(instr.mask) {
                    self.ip = self.ip.wrapping_add(instr.displacement as u32);
                    Ok(ControlFlow::Jumped)
                } else {
                    Ok(ControlFlow::Advance(width))
                }
            }
            MajorOp::FaultConditional => {
                if self.ac.cc_matches(instr.mask) {
                    Err(Fault::ConstraintRange)
                } else {
                    Ok(ControlFlow::Advance(width))
                }
            }
            MajorOp::Call => self.execute_call(instr, width, bus),
            MajorOp::Ret => self.execute_ret(bus),
            other => unreachable!("{other:?} is not a CTRL opcode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatBus;

    #[test]
    fn bal_links_g14_and_jumps() {
        let mut core: Core = Core::new();
        let mut bus = FlatBus::new(16);
        core.ip = 0x1000;
        let instr = CtrlInstruction {
            op: MajorOp::Bal,
            mask: 0,
            displacement: 0x100,
        };
        let outcome = core.execute_ctrl(instr, 4, &mut bus).unwrap();
        assert_eq!(outcome, ControlFlow::Jumped);
        assert_eq!(core.ip, 0x1100);
        assert_eq!(core.globals.0.get(14), 0x1004);
    }

    #[test]
    fn faultconditional_raises_when_cc_matches() {
        let mut core: Core = Core::new();
        let mut bus = FlatBus::new(16);
        core.ac = core.ac.with_condition_code(0b010);
        let instr = CtrlInstruction {
            op: MajorOp::FaultConditional,
            mask: 0b010,
            displacement: 0,
        };
        assert_eq!(core.execute_ctrl(instr, 4, &mut bus), Err(Fault::ConstraintRange));
    }

    #[test]
    fn branchconditional_falls_through_when_cc_does_not_match() {
        let mut core: Core = Core::new();
        let mut bus = FlatBus::new(16);
        core.ip = 0x2000;
        core.ac = core.ac.with_condition_code(0b001);
        let instr = CtrlInstruction {
            op: MajorOp::BranchConditional,
            mask: 0b010,
            displacement: 0x10,
        };
        let outcome = core.execute_ctrl(instr, 4, &mut bus).unwrap();
        assert_eq!(outcome, ControlFlow::Advance(4));
        assert_eq!(core.ip, 0x2000);
    }
}
