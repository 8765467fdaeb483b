//! Opcode-indexed instruction bodies, one submodule per instruction
//! format plus a dedicated one for the call/return state machine.

mod callret;
mod cobr;
mod ctrl;
mod mem;
mod reg;

use crate::bus::MemoryBus;
use crate::cpu::decode::Instruction;
use crate::cpu::fault::Fault;
use crate::cpu::{ControlFlow, Core};
use crate::types::Address;

impl<const N: usize> Core<N> {
    pub(crate) fn execute(
        &mut self,
        instruction: Instruction,
        width: Address,
        bus: &mut dyn MemoryBus,
    ) -> Result<ControlFlow, Fault> {
        match instruction {
            Instruction::Reg(i) => self.execute_reg(i, bus),
            Instruction::Cobr(i) => self.execute_cobr(i, width),
            Instruction::Ctrl(i) => self.execute_ctrl(i, width, bus),
            Instruction::Mem(i) => self.execute_mem(i, width, bus),
        }
    }
}
