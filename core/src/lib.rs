pub mod bus;
pub mod cpu;
pub mod types;

pub use bus::{FlatBus, MemoryBus};
pub use cpu::boot::BootConfig;
pub use cpu::fault::Fault;
pub use cpu::{Core, StepOutcome};
