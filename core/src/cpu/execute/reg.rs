//! REG-format instruction bodies: arithmetic, logic, shift/rotate,
//! compare, scan/swap, moves, control-register access, and the
//! synchronized/atomic memory family (all of which take register, not
//! addressing-unit, operands).

use i960sim_opcodes::RegOp;
use log::trace;

use crate::bus::MemoryBus;
use crate::cpu::decode::RegInstruction;
use crate::cpu::fault::Fault;
use crate::cpu::iac;
use crate::cpu::operands;
use crate::cpu::{ControlFlow, Core, IAC_WINDOW_BASE};
use crate::types::{rotate, Integer, LongOrdinal, Ordinal};

impl<const N: usize> Core<N> {
    pub(crate) fn execute_reg(
        &mut self,
        instr: RegInstruction,
        bus: &mut dyn MemoryBus,
    ) -> Result<ControlFlow, Fault> {
        trace!("reg {:?}", instr.op);
        let s1 = operands::read(instr.src1, &self.globals, self.frames.locals());
        let s2 = operands::read(instr.src2, &self.globals, self.frames.locals());

        match instr.op {
            RegOp::IllegalOpcode => return Err(Fault::InvalidOpcode),

            // --- logic family: dst = f(src2, src1) -----------------------
            RegOp::LogicalAnd => self.write_dest(instr, s2 & s1)?,
            RegOp::LogicalOr => self.write_dest(instr, s2 | s1)?,
            RegOp::LogicalXor => self.write_dest(instr, s2 ^ s1)?,
            RegOp::LogicalXnor => self.write_dest(instr, !(s2 ^ s1))?,
            RegOp::LogicalNor => self.write_dest(instr, !(s2 | s1))?,
            RegOp::LogicalNand => self.write_dest(instr, !(s2 & s1))?,
            RegOp::LogicalNot => self.write_dest(instr, !s1)?,
            RegOp::AndNot => self.write_dest(instr, s2 & !s1)?,
            RegOp::NotAnd => self.write_dest(instr, !s2 & s1)?,
            RegOp::OrNot => self.write_dest(instr, s2 | !s1)?,
            RegOp::NotOr => self.write_dest(instr, !s2 | s1)?,
            RegOp::SetBit => self.write_dest(instr, s2 | bit(s1))?,
            RegOp::ClrBit => self.write_dest(instr, s2 & !bit(s1))?,
            RegOp::NotBit => self.write_dest(instr, s2 ^ bit(s1))?,
            RegOp::ChkBit => {
                self.ac = self.ac.with_condition_code(if s2 & bit(s1) == 0 { 0b000 } else { 0b010 });
            }
            RegOp::AlterBit => {
                let value = if self.ac.condition_code() & 0b010 != 0 {
                    s2 | bit(s1)
                } else {
                    s2 & !bit(s1)
                };
                self.write_dest(instr, value)?;
            }

            // --- arithmetic -----------------------------------------------
            RegOp::AddOrdinal => self.write_dest(instr, s2.wrapping_add(s1))?,
            RegOp::SubOrdinal => self.write_dest(instr, s2.wrapping_sub(s1))?,
            RegOp::MulOrdinal => self.write_dest(instr, s2.wrapping_mul(s1))?,
            RegOp::AddInteger => {
                let (result, overflow) = (s2 as Integer).overflowing_add(s1 as Integer);
                self.check_integer_overflow(overflow)?;
                self.write_dest(instr, result as Ordinal)?;
            }
            RegOp::SubInteger => {
                let (result, overflow) = (s2 as Integer).overflowing_sub(s1 as Integer);
                self.check_integer_overflow(overflow)?;
                self.write_dest(instr, result as Ordinal)?;
            }
            RegOp::MulInteger => {
                let (result, overflow) = (s2 as Integer).overflowing_mul(s1 as Integer);
                self.check_integer_overflow(overflow)?;
                self.write_dest(instr, result as Ordinal)?;
            }
            RegOp::DivOrdinal => {
                if s1 == 0 {
                    return Err(Fault::ZeroDivide);
                }
                self.write_dest(instr, s2 / s1)?;
            }
            RegOp::DivInteger => {
                if s1 == 0 {
                    return Err(Fault::ZeroDivide);
                }
                self.write_dest(instr, ((s2 as Integer) / (s1 as Integer)) as Ordinal)?;
            }
            RegOp::RemOrdinal => {
                if s1 == 0 {
                    return Err(Fault::ZeroDivide);
                }
                self.write_dest(instr, s2 % s1)?;
            }
            RegOp::RemInteger => {
                if s1 == 0 {
                    return Err(Fault::ZeroDivide);
                }
                self.write_dest(instr, ((s2 as Integer) % (s1 as Integer)) as Ordinal)?;
            }
            RegOp::ModInteger => {
                if s1 == 0 {
                    return Err(Fault::ZeroDivide);
                }
                let (num, den) = (s2 as Integer, s1 as Integer);
                let mut result = num % den;
                if (num as i64 * den as i64) < 0 && result != 0 {
                    result += den;
                }
                self.write_dest(instr, result as Ordinal)?;
            }
            RegOp::ExtendedMul => {
                let product = (s2 as LongOrdinal).wrapping_mul(s1 as LongOrdinal);
                self.write_dest_double(instr, product)?;
            }
            RegOp::ExtendedDiv => {
                if s1 == 0 {
                    return Err(Fault::ZeroDivide);
                }
                let numerator = operands::read_double(instr.src2, &self.globals, self.frames.locals());
                let denominator = s1 as LongOrdinal;
                let quotient = (numerator / denominator) as Ordinal;
                let remainder = (numerator % denominator) as Ordinal;
                self.write_dest_double(instr, ((quotient as LongOrdinal) << 32) | remainder as LongOrdinal)?;
            }
            RegOp::AddWithCarry => self.add_with_carry(instr, s1, s2)?,
            RegOp::SubWithCarry => self.sub_with_carry(instr, s1, s2)?,

            // --- shift / rotate --------------------------------------------
            RegOp::ShiftLeftOrdinal => {
                let value = if s1 >= 32 { 0 } else { s2 << s1 };
                self.write_dest(instr, value)?;
            }
            RegOp::ShiftRightOrdinal => {
                let value = if s1 >= 32 { 0 } else { s2 >> s1 };
                self.write_dest(instr, value)?;
            }
            RegOp::ShiftLeftInteger => {
                let value = if s1 >= 32 { 0 } else { ((s2 as Integer) << s1) as Ordinal };
                self.write_dest(instr, value)?;
            }
            RegOp::ShiftRightInteger => {
                // Floor division by a power of two: rounds toward negative
                // infinity, unlike `shrdi` below.
                let src = s2 as Integer as i64;
                let value = if s1 >= 32 {
                    if src < 0 {
                        -1i32 as Ordinal
                    } else {
                        0
                    }
                } else {
                    let divisor = 1i64 << s1;
                    let quotient = if src >= 0 {
                        src / divisor
                    } else {
                        (src - divisor + 1) / divisor
                    };
                    quotient as Ordinal
                };
                self.write_dest(instr, value)?;
            }
            RegOp::ShiftRightDivideInteger => {
                // Truncating division by a power of two: rounds toward
                // zero, matching ordinary signed division.
                let value = if s1 >= 32 {
                    0
                } else {
                    ((s2 as Integer as i64) / (1i64 << s1)) as Ordinal
                };
                self.write_dest(instr, value)?;
            }
            RegOp::Rotate => self.write_dest(instr, rotate(s2, s1))?,

            // --- compare family --------------------------------------------
            RegOp::CompareOrdinal => self.compare_ordinal(s1, s2),
            RegOp::CompareInteger => self.compare_integer(s1, s2),
            RegOp::CompareDecrementOrdinal => {
                self.compare_ordinal(s1, s2);
                self.write_dest(instr, s2.wrapping_sub(1))?;
            }
            RegOp::CompareDecrementInteger => {
                self.compare_integer(s1, s2);
                self.write_dest(instr, s2.wrapping_sub(1))?;
            }
            RegOp::CompareIncrementOrdinal => {
                self.compare_ordinal(s1, s2);
                self.write_dest(instr, s2.wrapping_add(1))?;
            }
            RegOp::CompareIncrementInteger => {
                self.compare_integer(s1, s2);
                self.write_dest(instr, s2.wrapping_add(1))?;
            }
            // Both variants compare unconditionally as ordinals: the
            // ordinal/integer distinction that matters for `cmpo`/`cmpi`
            // doesn't carry over to `concmp` (see DESIGN.md).
            RegOp::ConditionalCompareOrdinal | RegOp::ConditionalCompareInteger => {
                if self.ac.condition_code() & 0b100 == 0 {
                    self.ac = self.ac.with_condition_code(if s1 <= s2 { 0b010 } else { 0b001 });
                }
            }

            // --- scan / byteswap --------------------------------------------
            RegOp::ScanBit => self.scan(instr, s1, true)?,
            RegOp::SpanBit => self.scan(instr, s1, false)?,
            RegOp::ScanByte => {
                let a = s1.to_le_bytes();
                let b = s2.to_le_bytes();
                let matched = a.iter().zip(b.iter()).any(|(x, y)| x == y);
                self.ac = self.ac.with_condition_code(if matched { 0b010 } else { 0b000 });
            }
            RegOp::ByteSwap => self.write_dest(instr, s1.swap_bytes())?,

            // --- moves --------------------------------------------------------
            RegOp::Move => self.write_dest(instr, s1)?,
            RegOp::MoveLong => {
                let value = operands::read_double(instr.src1, &self.globals, self.frames.locals());
                self.write_dest_double(instr, value)?;
            }
            RegOp::MoveTriple => {
                let value = operands::read_triple(instr.src1, &self.globals, self.frames.locals());
                self.write_dest_triple(instr, value)?;
            }
            RegOp::MoveQuad => {
                let value = operands::read_quad(instr.src1, &self.globals, self.frames.locals());
                self.write_dest_quad(instr, value)?;
            }

            // --- extract / modify -----------------------------------------
            RegOp::Extract => {
                let dest = instr.dest_register();
                let current = operands::read(
                    crate::cpu::decode::Operand::Register(dest),
                    &self.globals,
                    self.frames.locals(),
                );
                let len = s2;
                let mask = if len >= 32 { Ordinal::MAX } else { !(Ordinal::MAX << len) };
                let shifted = if s1 >= 32 { 0 } else { current >> s1 };
                self.write_dest(instr, shifted & mask)?;
            }
            RegOp::Modify => {
                let dest = instr.dest_register();
                let current = operands::read(
                    crate::cpu::decode::Operand::Register(dest),
                    &self.globals,
                    self.frames.locals(),
                );
                self.write_dest(instr, crate::types::modify(s1, s2, current))?;
            }

            // --- control-register access -------------------------------------
            RegOp::ModifyAC => {
                self.ac = self.ac.modify(s1, s2);
            }
            RegOp::ModifyPC => {
                if s1 != 0 && !self.pc.in_supervisor_mode() {
                    return Err(Fault::TypeMismatch);
                }
                let prior_priority = self.pc.priority();
                self.pc = self.pc.modify(s1, s2);
                if self.pc.priority() > prior_priority {
                    // A real core would now check the pending-interrupt
                    // table; this engine has no interrupt source, so
                    // raising priority is observable only through `pc`.
                }
            }
            RegOp::ModifyTC => {
                self.tc = self.tc.modify(s1, s2);
            }

            // --- misc control flow -------------------------------------------
            RegOp::FlushReg => self.frames.flush(bus)?,
            RegOp::SyncFault => {
                // No outstanding imprecise faults exist in this engine;
                // `syncf` is a pure synchronization point.
            }
            RegOp::Mark => {
                if self.pc.trace_enable() && self.tc.breakpoint_trace_mode() {
                    return Err(Fault::Trace {
                        subtype: Fault::TRACE_BREAKPOINT,
                    });
                }
            }
            RegOp::ForceMark => {
                if self.pc.trace_enable() {
                    return Err(Fault::Trace {
                        subtype: Fault::TRACE_BREAKPOINT,
                    });
                }
            }
            RegOp::CallSystem => return self.execute_calls(instr, bus),

            // --- synchronized / atomic memory --------------------------------
            RegOp::SyncLoad => {
                let addr = s1 & !0b11;
                let value = bus.load_word(addr)?;
                self.write_dest(instr, value)?;
                self.ac = self.ac.with_condition_code(0b010);
            }
            RegOp::SyncMove => {
                let addr = s1 & !0b11;
                bus.store_word(addr, s2)?;
                self.maybe_halt(addr);
                self.ac = self.ac.with_condition_code(0b010);
            }
            RegOp::SyncMoveLong => {
                let addr = s1 & !0b111;
                let value = operands::read_double(instr.src2, &self.globals, self.frames.locals());
                bus.store_long(addr, value)?;
                self.maybe_halt(addr);
                self.ac = self.ac.with_condition_code(0b010);
            }
            RegOp::SyncMoveQuad => {
                let addr = s1 & !0b1111;
                let value = operands::read_quad(instr.src2, &self.globals, self.frames.locals());
                if addr == IAC_WINDOW_BASE {
                    self.handle_iac(iac::decode(value), bus)?;
                } else {
                    bus.store_quad(addr, value)?;
                    self.maybe_halt(addr);
                }
                self.ac = self.ac.with_condition_code(0b010);
            }
            RegOp::AtomicAdd => {
                let addr = s1 & !0b11;
                let prior = bus.load_word(addr)?;
                bus.store_word(addr, prior.wrapping_add(s2))?;
                self.maybe_halt(addr);
                self.write_dest(instr, prior)?;
            }
            RegOp::AtomicModify => {
                let addr = s1 & !0b11;
                let dest = instr.dest_register();
                let current = operands::read(
                    crate::cpu::decode::Operand::Register(dest),
                    &self.globals,
                    self.frames.locals(),
                );
                let prior = bus.load_word(addr)?;
                bus.store_word(addr, crate::types::modify(s2, current, prior))?;
                self.maybe_halt(addr);
                self.write_dest(instr, prior)?;
            }
        }

        Ok(ControlFlow::Advance(4))
    }

    fn write_dest(&mut self, instr: RegInstruction, value: Ordinal) -> Result<(), Fault> {
        let dest = operands::dest_register_or_fault(instr.src_dest_is_literal, instr.src_dest_raw)?;
        operands::write(dest, value, &mut self.globals, self.frames.locals_mut());
        Ok(())
    }

    fn write_dest_double(&mut self, instr: RegInstruction, value: LongOrdinal) -> Result<(), Fault> {
        let dest = operands::dest_register_or_fault(instr.src_dest_is_literal, instr.src_dest_raw)?;
        operands::write_double(dest, value, &mut self.globals, self.frames.locals_mut());
        Ok(())
    }

    fn write_dest_triple(&mut self, instr: RegInstruction, value: [Ordinal; 3]) -> Result<(), Fault> {
        let dest = operands::dest_register_or_fault(instr.src_dest_is_literal, instr.src_dest_raw)?;
        operands::write_triple(dest, value, &mut self.globals, self.frames.locals_mut());
        Ok(())
    }

    fn write_dest_quad(&mut self, instr: RegInstruction, value: [Ordinal; 4]) -> Result<(), Fault> {
        let dest = operands::dest_register_or_fault(instr.src_dest_is_literal, instr.src_dest_raw)?;
        operands::write_quad(dest, value, &mut self.globals, self.frames.locals_mut());
        Ok(())
    }

    fn check_integer_overflow(&mut self, overflowed: bool) -> Result<(), Fault> {
        self.ac = self.ac.with_integer_overflow_flag(overflowed);
        if overflowed && self.ac.integer_overflow_mask() {
            return Err(Fault::IntegerOverflow);
        }
        Ok(())
    }

    fn add_with_carry(&mut self, instr: RegInstruction, s1: Ordinal, s2: Ordinal) -> Result<(), Fault> {
        let carry_in: u64 = if self.ac.condition_code() & 0b010 != 0 { 1 } else { 0 };
        let wide = s2 as u64 + s1 as u64 + carry_in;
        let result = wide as u32;
        let carry_out = wide > u32::MAX as u64;
        let overflow = (s2 as i32 < 0) == (s1 as i32 < 0) && (s2 as i32 < 0) != (result as i32 < 0);
        self.ac = self.ac.with_condition_code((overflow as u8) | ((carry_out as u8) << 1));
        self.write_dest(instr, result)
    }

    /// `subc` follows the same add-the-complement scheme as `addc`: the
    /// carry flag means "no borrow occurred", symmetric with `addc`'s carry.
    fn sub_with_carry(&mut self, instr: RegInstruction, s1: Ordinal, s2: Ordinal) -> Result<(), Fault> {
        let carry_in: u64 = if self.ac.condition_code() & 0b010 != 0 { 1 } else { 0 };
        let wide = s2 as u64 + !s1 as u64 + carry_in;
        let result = wide as u32;
        let carry_out = wide > u32::MAX as u64;
        let overflow = (s2 as i32 < 0) != (s1 as i32 < 0) && (s2 as i32 < 0) != (result as i32 < 0);
        self.ac = self.ac.with_condition_code((overflow as u8) | ((carry_out as u8) << 1));
        self.write_dest(instr, result)
    }

    fn compare_ordinal(&mut self, s1: Ordinal, s2: Ordinal) {
        let cc = if s1 < s2 {
            0b100
        } else if s1 == s2 {
            0b010
        } else {
            0b001
        };
        self.ac = self.ac.with_condition_code(cc);
    }

    fn compare_integer(&mut self, s1: Ordinal, s2: Ordinal) {
        let (s1, s2) = (s1 as Integer, s2 as Integer);
        let cc = if s1 < s2 {
            0b100
        } else if s1 == s2 {
            0b010
        } else {
            0b001
        };
        self.ac = self.ac.with_condition_code(cc);
    }

    fn scan(&mut self, instr: RegInstruction, s1: Ordinal, for_set_bit: bool) -> Result<(), Fault> {
        for i in (0..32u32).rev() {
            let bit_set = s1 & (1u32 << i) != 0;
            if bit_set == for_set_bit {
                self.ac = self.ac.with_condition_code(0b010);
                return self.write_dest(instr, i);
            }
        }
        self.ac = self.ac.with_condition_code(0b000);
        self.write_dest(instr, 0xFFFF_FFFF)
    }
}

fn bit(shift_amount: Ordinal) -> Ordinal {
    1u32 << (shift_amount & 31)
}
