use crate::cpu::{Context, Cpu, CpuConfig, InterruptMaster};

use super::{CartridgeError, CartridgeHeader, Memory};

/// A CPU wired to the flat reference bus and a plain IME latch.
///
/// This is the entry point used by the `dmg_run` binary.
#[derive(Debug)]
pub struct Machine {
    pub cpu: Cpu,
    pub memory: Memory,
    pub interrupts: InterruptMaster,
    header: Option<CartridgeHeader>,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(CpuConfig::default())
    }
}

impl Machine {
    pub fn new(config: CpuConfig) -> Self {
        Self {
            cpu: Cpu::new(config),
            memory: Memory::new(),
            interrupts: InterruptMaster::new(config.ime),
            header: None,
        }
    }

    /// Validate the cartridge header and load the image into a machine with
    /// the default DMG start-up state.
    ///
    /// Unknown cartridge types are rejected here, before any instruction
    /// runs.
    pub fn from_rom(rom: &[u8]) -> Result<Machine, CartridgeError> {
        Self::from_rom_with(CpuConfig::default(), rom)
    }

    /// Like [`Machine::from_rom`], with an explicit initial IME and boot
    /// state.
    pub fn from_rom_with(config: CpuConfig, rom: &[u8]) -> Result<Machine, CartridgeError> {
        let header = CartridgeHeader::parse(rom)?;
        log::info!(
            "GB cartridge: title={:?} type={:?} rom={} KiB ram={} KiB",
            header.title,
            header.kind,
            header.rom_size() / 1024,
            header.ram_size() / 1024,
        );

        let mut machine = Machine::new(config);
        machine.memory.load_rom(rom);
        machine.header = Some(header);
        Ok(machine)
    }

    pub fn header(&self) -> Option<&CartridgeHeader> {
        self.header.as_ref()
    }

    /// Reset the CPU and IME. Memory, including the loaded ROM, is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.interrupts = InterruptMaster::new(self.cpu.config().ime);
    }

    /// Execute one CPU step and return the T-cycles it took (0 once the CPU
    /// has locked up).
    pub fn step(&mut self) -> u32 {
        let mut cx = Context::new(&mut self.memory, &mut self.interrupts);
        self.cpu.step(&mut cx)
    }

    /// Run up to `steps` steps, stopping early if the CPU locks up. Returns
    /// the total T-cycles executed.
    pub fn run(&mut self, steps: u64) -> u64 {
        let mut total = 0u64;
        for _ in 0..steps {
            let taken = self.step();
            if taken == 0 {
                break;
            }
            total += taken as u64;
        }
        total
    }

    /// Bytes the program has written over the serial port.
    pub fn serial_output(&self) -> &[u8] {
        self.memory.serial_output()
    }
}
