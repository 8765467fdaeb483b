//! Arithmetic, process, and trace control registers.
//!
//! Each is a single [`Ordinal`] with named bitfields, following the same
//! `proc_bitfield::bitfield!` layout the register file elsewhere in this
//! crate uses for overlapping views onto one backing integer. Bit positions
//! match the architecture's own control-register layout so a `modify`
//! against a raw mask value behaves the same way a real program's `modac`/
//! `modpc`/`modtc` would.

use proc_bitfield::bitfield;

use crate::types::{modify, Ordinal};

bitfield! {
    /// Condition code, integer-overflow flag/mask, and the imprecise-fault
    /// suppression bit.
    #[derive(Clone, Copy, Eq, PartialEq)]
    pub struct ArithmeticControls(pub Ordinal): Debug, FromRaw, IntoRaw, DerefRaw {
        /// 3-bit condition code left by the most recent compare, test, or
        /// arithmetic instruction.
        pub condition_code: u8 @ 0..=2,
        /// Set when the most recent integer arithmetic instruction overflowed.
        pub integer_overflow_flag: bool @ 8,
        /// When set, an integer-overflow condition raises a fault immediately
        /// rather than only setting the flag.
        pub integer_overflow_mask: bool @ 12,
        /// When set, faults that can be delivered imprecisely are suppressed.
        pub no_imprecise_faults: bool @ 15,
    }
}

impl ArithmeticControls {
    /// `(mask & src) | (~mask & self)`, the control-register `modify` primitive.
    #[must_use]
    pub fn modify(self, mask: Ordinal, src: Ordinal) -> Self {
        Self(modify(mask, src, self.0))
    }

    /// `cc & mask != 0` for a nonzero mask, `cc & mask == 0` for a zero mask —
    /// the `cc_matches` predicate every `bX`/`cmpobX`/`cmpibX`/`test`
    /// condition check reduces to.
    #[must_use]
    pub fn cc_matches(self, mask: u8) -> bool {
        let cc = self.condition_code() & 0b111;
        let mask = mask & 0b111;
        if mask == 0 {
            cc == 0
        } else {
            cc & mask != 0
        }
    }
}

bitfield! {
    /// Execution mode, trace-enable, and scheduling state.
    #[derive(Clone, Copy, Eq, PartialEq)]
    pub struct ProcessControls(pub Ordinal): Debug, FromRaw, IntoRaw, DerefRaw {
        pub trace_enable: bool @ 0,
        pub execution_mode: bool @ 1,
        pub resume: bool @ 9,
        pub trace_fault_pending: bool @ 10,
        pub state: bool @ 13,
        pub priority: u8 @ 16..=20,
    }
}

impl ProcessControls {
    #[must_use]
    pub fn modify(self, mask: Ordinal, src: Ordinal) -> Self {
        Self(modify(mask, src, self.0))
    }

    #[must_use]
    pub fn in_supervisor_mode(self) -> bool {
        self.execution_mode()
    }
}

bitfield! {
    /// Per-subkind trace-event enable bits. Bit `n+1` is the "mode" bit that
    /// arms a subkind; bit `n+17` is the "event" bit the core sets when that
    /// subkind actually fires, mirroring the architecture's split between
    /// configuring and observing trace events.
    #[derive(Clone, Copy, Eq, PartialEq)]
    pub struct TraceControls(pub Ordinal): Debug, FromRaw, IntoRaw, DerefRaw {
        pub instruction_trace_mode: bool @ 1,
        pub branch_trace_mode: bool @ 2,
        pub call_trace_mode: bool @ 3,
        pub return_trace_mode: bool @ 4,
        pub prereturn_trace_mode: bool @ 5,
        pub supervisor_trace_mode: bool @ 6,
        pub breakpoint_trace_mode: bool @ 7,
        pub instruction_trace_event: bool @ 17,
        pub branch_trace_event: bool @ 18,
        pub call_trace_event: bool @ 19,
        pub return_trace_event: bool @ 20,
        pub prereturn_trace_event: bool @ 21,
        pub supervisor_trace_event: bool @ 22,
        pub breakpoint_trace_event: bool @ 23,
    }
}

impl TraceControls {
    #[must_use]
    pub fn modify(self, mask: Ordinal, src: Ordinal) -> Self {
        Self(modify(mask, src, self.0))
    }
}

impl Default for ArithmeticControls {
    fn default() -> Self {
        Self(0)
    }
}

impl Default for ProcessControls {
    fn default() -> Self {
        Self(0)
    }
}

impl Default for TraceControls {
    fn default() -> Self {
        Self(0)
    }
}
