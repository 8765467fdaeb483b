//! MEM-format bodies: the load/store family, `lda`, and the
//! memory-addressed branch/call trio (`bx`/`balx`/`callx`).

use i960sim_opcodes::MajorOp;
use log::trace;

use crate::bus::MemoryBus;
use crate::cpu::addressing::{effective_address, AddressingInputs};
use crate::cpu::decode::{MemAddressing, MemInstruction, Operand};
use crate::cpu::fault::Fault;
use crate::cpu::operands;
use crate::cpu::{ControlFlow, Core};
use crate::types::{Address, ByteInteger, Ordinal, ShortInteger};

impl<const N: usize> Core<N> {
    pub(crate) fn execute_mem(
        &mut self,
        instr: MemInstruction,
        width: Address,
        bus: &mut dyn MemoryBus,
    ) -> Result<ControlFlow, Fault> {
        let abase_value = operands::read(Operand::Register(instr.abase), &self.globals, self.frames.locals());
        let index_value = match instr.addressing {
            MemAddressing::IndexScale { index, .. } | MemAddressing::IndexScaleDisplacement { index, .. } => {
                operands::read(Operand::Register(index), &self.globals, self.frames.locals())
            }
            _ => 0,
        };
        let addr = effective_address(
            instr.mode,
            instr.addressing,
            &AddressingInputs {
                abase_value,
                index_value,
                ip: self.ip,
            },
        );
        trace!("mem {:?} addr={:#x}", instr.op, addr);

        match instr.op {
            MajorOp::LoadByteOrdinal => {
                let value = bus.load_byte(addr)? as Ordinal;
                self.write_reg(instr.src_dest, value);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::LoadByteInteger => {
                let value = (bus.load_byte(addr)? as ByteInteger) as i32 as Ordinal;
                self.write_reg(instr.src_dest, value);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::StoreByteOrdinal | MajorOp::StoreByteInteger => {
                let value = self.read_reg(instr.src_dest);
                bus.store_byte(addr, value as u8)?;
                self.maybe_halt(addr);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::LoadShortOrdinal => {
                let value = bus.load_short(addr)? as Ordinal;
                self.write_reg(instr.src_dest, value);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::LoadShortInteger => {
                let value = (bus.load_short(addr)? as ShortInteger) as i32 as Ordinal;
                self.write_reg(instr.src_dest, value);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::StoreShortOrdinal | MajorOp::StoreShortInteger => {
                let value = self.read_reg(instr.src_dest);
                bus.store_short(addr, value as u16)?;
                self.maybe_halt(addr);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::LoadAddress => {
                self.write_reg(instr.src_dest, addr);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::Load => {
                let value = bus.load_word(addr)?;
                self.write_reg(instr.src_dest, value);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::Store => {
                let value = self.read_reg(instr.src_dest);
                bus.store_word(addr, value)?;
                self.maybe_halt(addr);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::LoadLong => {
                let value = bus.load_long(addr)?;
                operands::write_double(instr.src_dest, value, &mut self.globals, self.frames.locals_mut());
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::StoreLong => {
                let value = operands::read_double(
                    Operand::Register(instr.src_dest),
                    &self.globals,
                    self.frames.locals(),
                );
                bus.store_long(addr, value)?;
                self.maybe_halt(addr);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::LoadTriple => {
                let value = bus.load_triple(addr)?;
                operands::write_triple(instr.src_dest, value, &mut self.globals, self.frames.locals_mut());
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::StoreTriple => {
                let value = operands::read_triple(
                    Operand::Register(instr.src_dest),
                    &self.globals,
                    self.frames.locals(),
                );
                bus.store_triple(addr, value)?;
                self.maybe_halt(addr);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::LoadQuad => {
                let value = bus.load_quad(addr)?;
                operands::write_quad(instr.src_dest, value, &mut self.globals, self.frames.locals_mut());
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::StoreQuad => {
                let value = operands::read_quad(
                    Operand::Register(instr.src_dest),
                    &self.globals,
                    self.frames.locals(),
                );
                bus.store_quad(addr, value)?;
                self.maybe_halt(addr);
                Ok(ControlFlow::Advance(width))
            }
            MajorOp::BranchIndirect => {
                self.ip = addr;
                Ok(ControlFlow::Jumped)
            }
            MajorOp::BranchAndLinkIndirect => {
                let link = self.ip.wrapping_add(width);
                self.write_reg(instr.src_dest, link);
                self.ip = addr;
                Ok(ControlFlow::Jumped)
            }
            MajorOp::CallIndirect => self.execute_callx(addr, width, bus),
            other => unreachable!("{other:?} is not a MEM opcode"),
        }
    }

    fn read_reg(&self, register: u8) -> Ordinal {
        operands::read(Operand::Register(register), &self.globals, self.frames.locals())
    }

    fn write_reg(&mut self, register: u8, value: Ordinal) {
        operands::write(register, value, &mut self.globals, self.frames.locals_mut());
    }
}
