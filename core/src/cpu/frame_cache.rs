//! The on-chip cache of local-register frames.
//!
//! `call`/`calls`/`callx` push a new frame ([`FrameCache::take_ownership`]);
//! `ret` returns to the caller's frame ([`FrameCache::restore_ownership`]),
//! which is a plain index move — no memory traffic at all — when the
//! target frame is still one of the `N` slots on chip, and a spill-then-fill
//! otherwise. `flushreg` forces every valid slot back out to memory without
//! changing which frame is active, for debuggers and context switches that
//! need memory to be the single source of truth.
//!
//! This mirrors the reference implementation's `LocalRegisterPack` ring
//! (`Core::NumRegisterFrames` slots) and its
//! `takeOwnership`/`restoreOwnership`/`relinquishOwnership` discipline.

use crate::bus::MemoryBus;
use crate::cpu::fault::Fault;
use crate::cpu::registers::RegisterBank;
use crate::types::Address;

#[derive(Clone, Copy, Debug, Default)]
struct FrameSlot {
    locals: RegisterBank,
    frame_pointer: Address,
    valid: bool,
}

/// `N` on-chip local-register frames arranged as a ring; `active` names
/// which slot backs `r0..r15` right now.
pub struct FrameCache<const N: usize> {
    slots: [FrameSlot; N],
    active: usize,
}

impl<const N: usize> FrameCache<N> {
    #[must_use]
    pub fn new() -> Self {
        assert!(N > 0, "a frame cache needs at least one slot");
        Self {
            slots: [FrameSlot::default(); N],
            active: 0,
        }
    }

    #[must_use]
    pub fn locals(&self) -> &RegisterBank {
        &self.slots[self.active].locals
    }

    pub fn locals_mut(&mut self) -> &mut RegisterBank {
        &mut self.slots[self.active].locals
    }

    #[must_use]
    pub fn frame_pointer(&self) -> Address {
        self.slots[self.active].frame_pointer
    }

    fn spill(slot: &FrameSlot, bus: &mut dyn MemoryBus) -> Result<(), Fault> {
        for i in 0..16 {
            bus.store_word(slot.frame_pointer.wrapping_add((i * 4) as u32), slot.locals.get(i))?;
        }
        Ok(())
    }

    fn fill(slot: &mut FrameSlot, bus: &dyn MemoryBus) -> Result<(), Fault> {
        for i in 0..16 {
            let value = bus.load_word(slot.frame_pointer.wrapping_add((i * 4) as u32))?;
            slot.locals.set(i, value);
        }
        Ok(())
    }

    /// Push a fresh frame at `new_fp`. Whatever was in the next ring slot is
    /// spilled to memory first if it held a valid frame. The new slot's
    /// locals are left exactly as they were from whichever frame last
    /// occupied that ring position — the reference implementation does not
    /// clear them either, and relies on `call`/`calls` only ever reading a
    /// local after the instruction sequence that's supposed to write it.
    pub fn take_ownership(&mut self, new_fp: Address, bus: &mut dyn MemoryBus) -> Result<(), Fault> {
        self.active = (self.active + 1) % N;
        if self.slots[self.active].valid {
            Self::spill(&self.slots[self.active], bus)?;
        }
        self.slots[self.active].valid = true;
        self.slots[self.active].frame_pointer = new_fp;
        Ok(())
    }

    /// Return to the frame at `target_fp`. A cache hit — the immediately
    /// prior ring slot already holds that exact frame pointer — is a pure
    /// index move. A miss spills the current frame (if valid) and fills the
    /// reused slot from memory.
    pub fn restore_ownership(&mut self, target_fp: Address, bus: &mut dyn MemoryBus) -> Result<(), Fault> {
        let candidate = (self.active + N - 1) % N;
        if self.slots[candidate].valid && self.slots[candidate].frame_pointer == target_fp {
            self.active = candidate;
            return Ok(());
        }
        if self.slots[self.active].valid {
            Self::spill(&self.slots[self.active], bus)?;
        }
        self.active = candidate;
        self.slots[self.active].frame_pointer = target_fp;
        Self::fill(&mut self.slots[self.active], bus)?;
        self.slots[self.active].valid = true;
        Ok(())
    }

    /// Invalidate the active slot without writing it back. Used when a
    /// frame is known to be dead (e.g. after the outermost `ret`) and
    /// spilling it would just be wasted bus traffic.
    pub fn relinquish_ownership(&mut self) {
        self.slots[self.active].valid = false;
        self.slots[self.active].frame_pointer = 0;
    }

    /// Force every valid slot back to memory, leaving `active` unchanged.
    pub fn flush(&mut self, bus: &mut dyn MemoryBus) -> Result<(), Fault> {
        for slot in &self.slots {
            if slot.valid {
                Self::spill(slot, bus)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> Default for FrameCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatBus;

    #[test]
    fn returning_to_a_cached_frame_avoids_memory_traffic() {
        let mut bus = FlatBus::new(0x1000);
        let mut cache: FrameCache<4> = FrameCache::new();

        cache.take_ownership(0x100, &mut bus).unwrap();
        cache.locals_mut().set(0, 111);
        cache.take_ownership(0x200, &mut bus).unwrap();
        cache.locals_mut().set(0, 222);

        // poison memory at 0x100 so a spurious reload would be observable
        bus.store_word(0x100, 0xDEAD_BEEF).unwrap();

        cache.restore_ownership(0x100, &mut bus).unwrap();
        assert_eq!(cache.locals().get(0), 111);
    }

    #[test]
    fn returning_past_the_ring_reloads_from_memory() {
        let mut bus = FlatBus::new(0x1000);
        let mut cache: FrameCache<2> = FrameCache::new();

        cache.take_ownership(0x100, &mut bus).unwrap();
        cache.locals_mut().set(0, 111);
        cache.take_ownership(0x200, &mut bus).unwrap();
        cache.locals_mut().set(0, 222);
        cache.take_ownership(0x300, &mut bus).unwrap();
        cache.locals_mut().set(0, 333);

        // 0x100's frame was spilled out when the 2-slot ring wrapped.
        cache.restore_ownership(0x100, &mut bus).unwrap();
        assert_eq!(cache.locals().get(0), 111);
    }

    #[test]
    fn flush_writes_back_without_changing_active_frame() {
        let mut bus = FlatBus::new(0x1000);
        let mut cache: FrameCache<4> = FrameCache::new();
        cache.take_ownership(0x100, &mut bus).unwrap();
        cache.locals_mut().set(3, 0xABCD);
        cache.flush(&mut bus).unwrap();
        assert_eq!(bus.load_word(0x100 + 3 * 4).unwrap(), 0xABCD);
        assert_eq!(cache.locals().get(3), 0xABCD);
    }
}
