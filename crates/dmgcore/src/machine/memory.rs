use crate::cpu::{request_interrupt, Bus, InterruptFlags, DIV, IE, IF};

use super::{serial::Serial, MEMORY_SIZE};

const SB: u16 = 0xFF01;
const SC: u16 = 0xFF02;

/// Flat 64 KiB reference bus.
///
/// ROM (`0000..=7FFF`) is loaded once and read-only afterwards; there is no
/// bank switching. Echo RAM mirrors WRAM. Of the IO page only the registers
/// the CPU core interacts with carry hardware meaning:
/// - `FF01`/`FF02` serial, captured into [`Memory::serial_output`],
/// - `FF04` DIV, reset by any CPU write,
/// - `FF0F` IF, upper three bits read as 1,
/// - `FFFF` IE.
#[derive(Clone)]
pub struct Memory {
    memory: Box<[u8; MEMORY_SIZE]>,
    serial: Serial,
    /// Set by a write to DIV until the CPU picks it up.
    div_written: bool,
}

impl Default for Memory {
    fn default() -> Self {
        let mut mem = Self {
            memory: Box::new([0; MEMORY_SIZE]),
            serial: Serial::default(),
            div_written: false,
        };
        mem.apply_dmg_initial_io_state();
        mem
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("if", &self.memory[IF as usize])
            .field("ie", &self.memory[IE as usize])
            .field("serial", &self.serial)
            .finish_non_exhaustive()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// IO register values left behind by the DMG boot ROM.
    fn apply_dmg_initial_io_state(&mut self) {
        // Joypad.
        self.memory[0xFF00] = 0xCF;

        // Serial.
        self.serial.sb = 0x00;
        self.serial.sc = 0x7E;

        // Divider / timer.
        self.memory[0xFF04] = 0xAB;
        self.memory[0xFF05] = 0x00;
        self.memory[0xFF06] = 0x00;
        self.memory[0xFF07] = 0xF8;

        // IF has the VBlank request pending at PC=0x0100.
        self.memory[IF as usize] = 0x01;
        self.memory[IE as usize] = 0x00;

        // LCD.
        self.memory[0xFF40] = 0x91;
        self.memory[0xFF41] = 0x85;
        self.memory[0xFF46] = 0xFF;
        self.memory[0xFF47] = 0xFC;
    }

    /// Copy a ROM image into the cartridge area. Anything beyond the first
    /// 32 KiB would need a mapper and is not visible.
    pub fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(0x8000);
        self.memory[..len].copy_from_slice(&rom[..len]);
        if rom.len() > len {
            log::warn!(
                "GB ROM image is {} bytes; only the first 32 KiB are mapped",
                rom.len()
            );
        }
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial.output
    }
}

impl Bus for Memory {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            0xE000..=0xFDFF => self.memory[(addr - 0x2000) as usize],
            SB => self.serial.sb,
            SC => self.serial.read_sc(),
            IF => self.memory[IF as usize] | 0xE0,
            _ => self.memory[addr as usize],
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            // No MBC: CPU writes to ROM have no effect.
            0x0000..=0x7FFF => {}
            0xE000..=0xFDFF => self.memory[(addr - 0x2000) as usize] = value,
            SB => self.serial.write_sb(value),
            SC => {
                if self.serial.write_sc(value) {
                    request_interrupt(self, InterruptFlags::SERIAL_ID);
                }
            }
            DIV => {
                self.memory[DIV as usize] = 0;
                self.div_written = true;
            }
            IF => self.memory[IF as usize] = value & 0x1F,
            _ => self.memory[addr as usize] = value,
        }
    }

    fn set_divider(&mut self, value: u8) {
        self.memory[DIV as usize] = value;
    }

    fn take_divider_reset(&mut self) -> bool {
        std::mem::take(&mut self.div_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_is_read_only_after_load() {
        let mut mem = Memory::new();
        mem.load_rom(&[0x3E, 0x42]);
        mem.write8(0x0000, 0xFF);
        assert_eq!(mem.read8(0x0000), 0x3E);
        assert_eq!(mem.read8(0x0001), 0x42);
    }

    #[test]
    fn div_write_resets_but_direct_set_does_not() {
        let mut mem = Memory::new();
        mem.set_divider(0x12);
        assert_eq!(mem.read8(DIV), 0x12);
        assert!(!mem.take_divider_reset());
        mem.write8(DIV, 0x99);
        assert_eq!(mem.read8(DIV), 0x00);
        assert!(mem.take_divider_reset());
        assert!(!mem.take_divider_reset());
    }

    #[test]
    fn if_upper_bits_read_as_one() {
        let mut mem = Memory::new();
        mem.write8(IF, 0xFF);
        assert_eq!(mem.read8(IF), 0xFF);
        mem.write8(IF, 0x04);
        assert_eq!(mem.read8(IF), 0xE4);
        assert_eq!(InterruptFlags::from_bits_truncate(mem.read8(IF)), InterruptFlags::TIMER);
    }

    #[test]
    fn echo_ram_mirrors_wram() {
        let mut mem = Memory::new();
        mem.write8(0xC123, 0x5A);
        assert_eq!(mem.read8(0xE123), 0x5A);
        mem.write8(0xE200, 0xA5);
        assert_eq!(mem.read8(0xC200), 0xA5);
    }

    #[test]
    fn serial_transfer_captures_and_requests_interrupt() {
        let mut mem = Memory::new();
        mem.write8(IF, 0x00);
        mem.write8(SB, b'!');
        mem.write8(SC, 0x81);
        assert_eq!(mem.serial_output(), b"!");
        assert_eq!(mem.read8(IF) & 0x08, 0x08);
    }
}
