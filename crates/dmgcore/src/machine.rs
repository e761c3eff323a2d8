mod cartridge;
mod gameboy;
mod memory;
mod serial;
mod timer;

pub use cartridge::{CartridgeError, CartridgeHeader, CartridgeType};
pub use gameboy::Machine;
pub use memory::Memory;
pub use timer::Timer;

/// Total addressable memory for the Game Boy (64 KiB).
const MEMORY_SIZE: usize = 0x10000;
