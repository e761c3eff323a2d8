pub mod cpu;
pub mod machine;

pub use cpu::{
    fault::CpuFault, BootState, Bus, Context, Cpu, CpuConfig, Flag, HaltState, InterruptController,
    InterruptFlags, InterruptMaster, Register, RegisterFile,
};
pub use machine::{CartridgeError, CartridgeHeader, CartridgeType, Machine, Memory, Timer};

/// Base clock of the DMG in T-cycles per second.
pub const CLOCK_HZ: u32 = 4_194_304;
