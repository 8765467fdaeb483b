//! COBR-format bodies: compare-and-branch, bit-test-and-branch, and the
//! register/literal `test` family.

use i960sim_opcodes::MajorOp;
use log::trace;

use crate::cpu::decode::CobrInstruction;
use crate::cpu::fault::Fault;
use crate::cpu::operands;
use crate::cpu::{ControlFlow, Core};
use crate::types::{Address, Integer, Ordinal};

impl<const N: usize> Core<N> {
    pub(crate) fn execute_cobr(&mut self, instr: CobrInstruction, width: Address) -> Result<ControlFlow, Fault> {
        trace!("cobr {:?} mask={:#05b}", instr.op, instr.mask);
        let s1 = operands::read(instr.src1, &self.globals, self.frames.locals());
        let s2 = operands::read(
            crate::cpu::decode::Operand::Register(instr.src2),
            &self.globals,
            self.frames.locals(),
        );

        let branch = match instr.op {
            MajorOp::TestConditional => {
                let taken = self.ac.cc_matches(instr.mask);
                operands::write(
                    instr.src2,
                    taken as Ordinal,
                    &mut self.globals,
                    self.frames.locals_mut(),
                );
                false
            }
            MajorOp::BranchBitClear => {
                let bit = 1u32 << (s1 & 31);
                let taken = s2 & bit == 0;
                self.ac = self.ac.with_condition_code(if taken { 0b000 } else { 0b010 });
                taken
            }
            MajorOp::BranchBitSet => {
                let bit = 1u32 << (s1 & 31);
                let taken = s2 & bit != 0;
                self.ac = self.ac.with_condition_code(if taken { 0b010 } else { 0b000 });
                taken
            }
            MajorOp::CompareAndBranchOrdinal => {
                let cc = if s1 < s2 {
                    0b100
                } else if s1 == s2 {
                    0b010
                } else {
                    0b001
                };
                self.ac = self.ac.with_condition_code(cc);
                self.ac.cc_matches(instr.mask)
            }
            MajorOp::CompareAndBranchInteger => {
                let (s1, s2) = (s1 as Integer, s2 as Integer);
                let cc = if s1 < s2 {
                    0b100
                } else if s1 == s2 {
                    0b010
                } else {
                    0b001
                };
                self.ac = self.ac.with_condition_code(cc);
                self.ac.cc_matches(instr.mask)
            }
            other => unreachable!("{other:?} is not a COBR opcode"),
        };

        if branch {
            self.ip = self.ip.wrapping_add(instr.displacement as u32);
            Ok(ControlFlow::Jumped)
        } else {
            Ok(ControlFlow::Advance(width))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatBus;
    use crate::cpu::decode::Operand;

    #[test]
    fn cmpobg_branches_when_greater() {
        let mut core: Core = Core::new();
        let mut bus = FlatBus::new(16);
        core.boot(crate::cpu::boot::BootConfig::default(), &mut bus).ok();
        core.ip = 0x1000;
        core.globals.0.set(0, 10);
        core.globals.0.set(1, 3);
        let instr = CobrInstruction {
            op: MajorOp::CompareAndBranchOrdinal,
            mask: 0b001, // "greater"
            displacement: 0x40,
            src1: Operand::Register(16),
            src2: 17,
        };
        let outcome = core.execute_cobr(instr, 4).unwrap();
        assert_eq!(outcome, ControlFlow::Jumped);
        assert_eq!(core.ip, 0x1040);
    }

    #[test]
    fn test_writes_the_boolean_result_into_src2() {
        let mut core: Core = Core::new();
        core.ac = core.ac.with_condition_code(0b010);
        let instr = CobrInstruction {
            op: MajorOp::TestConditional,
            mask: 0b010,
            displacement: 0,
            src1: Operand::Literal(0),
            src2: 17,
        };
        let outcome = core.execute_cobr(instr, 4).unwrap();
        assert_eq!(outcome, ControlFlow::Advance(4));
        assert_eq!(core.globals.0.get(1), 1);
    }
}
