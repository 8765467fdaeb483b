//! Resolves a decoded [`Operand`] against the register file.
//!
//! Indices 0–15 name the current frame's locals, 16–31 name the globals,
//! and a literal-flagged field is read-only and never touches either bank.

use crate::cpu::decode::Operand;
use crate::cpu::fault::Fault;
use crate::cpu::registers::{GlobalRegisters, RegisterBank};
use crate::types::{LongOrdinal, Ordinal};

/// Split a raw 0–31 register index into which bank it names and the index
/// within that bank.
enum Bank {
    Local(usize),
    Global(usize),
}

fn bank_of(register: u8) -> Bank {
    let register = register as usize & 0b1_1111;
    if register < 16 {
        Bank::Local(register)
    } else {
        Bank::Global(register - 16)
    }
}

#[must_use]
pub fn read(op: Operand, globals: &GlobalRegisters, locals: &RegisterBank) -> Ordinal {
    match op {
        Operand::Literal(value) => value as Ordinal,
        Operand::Register(register) => match bank_of(register) {
            Bank::Local(i) => locals.get(i),
            Bank::Global(i) => globals.0.get(i),
        },
    }
}

/// Wide reads of a literal operand return the literal's value in the low
/// word and zero elsewhere — there is no register pair to align against.
#[must_use]
pub fn read_double(op: Operand, globals: &GlobalRegisters, locals: &RegisterBank) -> LongOrdinal {
    match op {
        Operand::Literal(value) => value as LongOrdinal,
        Operand::Register(register) => match bank_of(register) {
            Bank::Local(i) => locals.get_double(i),
            Bank::Global(i) => globals.0.get_double(i),
        },
    }
}

#[must_use]
pub fn read_triple(op: Operand, globals: &GlobalRegisters, locals: &RegisterBank) -> [Ordinal; 3] {
    match op {
        Operand::Literal(value) => [value as Ordinal, 0, 0],
        Operand::Register(register) => match bank_of(register) {
            Bank::Local(i) => locals.get_triple(i),
            Bank::Global(i) => globals.0.get_triple(i),
        },
    }
}

#[must_use]
pub fn read_quad(op: Operand, globals: &GlobalRegisters, locals: &RegisterBank) -> [Ordinal; 4] {
    match op {
        Operand::Literal(value) => [value as Ordinal, 0, 0, 0],
        Operand::Register(register) => match bank_of(register) {
            Bank::Local(i) => locals.get_quad(i),
            Bank::Global(i) => globals.0.get_quad(i),
        },
    }
}

/// Resolve a destination register index (never a literal — the decoder's
/// `src_dest_as_destination` path never reaches here with a literal flag
/// set, since [`crate::cpu::decode::RegInstruction::dest_register`] already
/// discards it; this exists for the few non-REG formats whose `src_dest`
/// field has no literal flag at all).
pub fn write(register: u8, value: Ordinal, globals: &mut GlobalRegisters, locals: &mut RegisterBank) {
    match bank_of(register) {
        Bank::Local(i) => locals.set(i, value),
        Bank::Global(i) => globals.0.set(i, value),
    }
}

pub fn write_double(register: u8, value: LongOrdinal, globals: &mut GlobalRegisters, locals: &mut RegisterBank) {
    match bank_of(register) {
        Bank::Local(i) => locals.set_double(i, value),
        Bank::Global(i) => globals.0.set_double(i, value),
    }
}

pub fn write_triple(register: u8, value: [Ordinal; 3], globals: &mut GlobalRegisters, locals: &mut RegisterBank) {
    match bank_of(register) {
        Bank::Local(i) => locals.set_triple(i, value),
        Bank::Global(i) => globals.0.set_triple(i, value),
    }
}

pub fn write_quad(register: u8, value: [Ordinal; 4], globals: &mut GlobalRegisters, locals: &mut RegisterBank) {
    match bank_of(register) {
        Bank::Local(i) => locals.set_quad(i, value),
        Bank::Global(i) => globals.0.set_quad(i, value),
    }
}

/// A REG-format `src_dest` read "as destination": a literal flag there is
/// illegal since a later write would have nowhere to go.
pub fn dest_register_or_fault(is_literal: bool, register: u8) -> Result<u8, Fault> {
    if is_literal {
        Err(Fault::InvalidOperand)
    } else {
        Ok(register & 0b1_1111)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_reads_return_their_value() {
        let g = GlobalRegisters::default();
        let l = RegisterBank::default();
        assert_eq!(read(Operand::Literal(17), &g, &l), 17);
        assert_eq!(read_double(Operand::Literal(17), &g, &l), 17);
    }

    #[test]
    fn register_reads_route_to_the_right_bank() {
        let mut g = GlobalRegisters::default();
        let mut l = RegisterBank::default();
        write(3, 111, &mut g, &mut l);
        write(20, 222, &mut g, &mut l);
        assert_eq!(read(Operand::Register(3), &g, &l), 111);
        assert_eq!(read(Operand::Register(20), &g, &l), 222);
    }

    #[test]
    fn literal_dest_register_faults() {
        assert_eq!(dest_register_or_fault(true, 4), Err(Fault::InvalidOperand));
        assert_eq!(dest_register_or_fault(false, 4), Ok(4));
    }
}
