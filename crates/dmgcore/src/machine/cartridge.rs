use thiserror::Error;

/// Errors produced while inspecting a cartridge image, before any
/// emulation starts.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CartridgeError {
    #[error("unknown cartridge type 0x{0:02X}")]
    UnknownType(u8),
    #[error("image of {0} bytes is too short to hold a cartridge header")]
    TooShort(usize),
}

/// Cartridge hardware named by the header byte at `0x0147`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CartridgeType {
    RomOnly,
    Mbc1,
    Mbc1Ram,
    Mbc1RamBattery,
    Mbc2,
    Mbc2Battery,
    RomRam,
    RomRamBattery,
    Mmm01,
    Mmm01Ram,
    Mmm01RamBattery,
    Mbc3TimerBattery,
    Mbc3TimerRamBattery,
    Mbc3,
    Mbc3Ram,
    Mbc3RamBattery,
    Mbc4,
    Mbc4Ram,
    Mbc4RamBattery,
    Mbc5,
    Mbc5Ram,
    Mbc5RamBattery,
    Mbc5Rumble,
    Mbc5RumbleRam,
    Mbc5RumbleRamBattery,
    PocketCamera,
    BandaiTama5,
    HuC3,
    HuC1RamBattery,
}

impl CartridgeType {
    pub fn from_byte(byte: u8) -> Result<CartridgeType, CartridgeError> {
        use CartridgeType::*;

        let kind = match byte {
            0x00 => RomOnly,
            0x01 => Mbc1,
            0x02 => Mbc1Ram,
            0x03 => Mbc1RamBattery,
            0x05 => Mbc2,
            0x06 => Mbc2Battery,
            0x08 => RomRam,
            0x09 => RomRamBattery,
            0x0B => Mmm01,
            0x0C => Mmm01Ram,
            0x0D => Mmm01RamBattery,
            0x0F => Mbc3TimerBattery,
            0x10 => Mbc3TimerRamBattery,
            0x11 => Mbc3,
            0x12 => Mbc3Ram,
            0x13 => Mbc3RamBattery,
            0x15 => Mbc4,
            0x16 => Mbc4Ram,
            0x17 => Mbc4RamBattery,
            0x19 => Mbc5,
            0x1A => Mbc5Ram,
            0x1B => Mbc5RamBattery,
            0x1C => Mbc5Rumble,
            0x1D => Mbc5RumbleRam,
            0x1E => Mbc5RumbleRamBattery,
            0xFC => PocketCamera,
            0xFD => BandaiTama5,
            0xFE => HuC3,
            0xFF => HuC1RamBattery,
            other => return Err(CartridgeError::UnknownType(other)),
        };
        Ok(kind)
    }

    /// Header byte for this cartridge type.
    pub fn code(self) -> u8 {
        use CartridgeType::*;

        match self {
            RomOnly => 0x00,
            Mbc1 => 0x01,
            Mbc1Ram => 0x02,
            Mbc1RamBattery => 0x03,
            Mbc2 => 0x05,
            Mbc2Battery => 0x06,
            RomRam => 0x08,
            RomRamBattery => 0x09,
            Mmm01 => 0x0B,
            Mmm01Ram => 0x0C,
            Mmm01RamBattery => 0x0D,
            Mbc3TimerBattery => 0x0F,
            Mbc3TimerRamBattery => 0x10,
            Mbc3 => 0x11,
            Mbc3Ram => 0x12,
            Mbc3RamBattery => 0x13,
            Mbc4 => 0x15,
            Mbc4Ram => 0x16,
            Mbc4RamBattery => 0x17,
            Mbc5 => 0x19,
            Mbc5Ram => 0x1A,
            Mbc5RamBattery => 0x1B,
            Mbc5Rumble => 0x1C,
            Mbc5RumbleRam => 0x1D,
            Mbc5RumbleRamBattery => 0x1E,
            PocketCamera => 0xFC,
            BandaiTama5 => 0xFD,
            HuC3 => 0xFE,
            HuC1RamBattery => 0xFF,
        }
    }
}

const TITLE: std::ops::RangeInclusive<usize> = 0x0134..=0x0143;
const TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const RAM_SIZE: usize = 0x0149;
const HEADER_END: usize = 0x0150;

/// The parts of the cartridge header the driver cares about.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CartridgeHeader {
    pub title: String,
    pub kind: CartridgeType,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<CartridgeHeader, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooShort(rom.len()));
        }

        let title = String::from_utf8_lossy(&rom[TITLE])
            .trim_end_matches('\0')
            .to_string();

        Ok(CartridgeHeader {
            title,
            kind: CartridgeType::from_byte(rom[TYPE])?,
            rom_size_code: rom[ROM_SIZE],
            ram_size_code: rom[RAM_SIZE],
        })
    }

    /// ROM size in bytes (32 KiB shifted by the size code).
    pub fn rom_size(&self) -> usize {
        0x8000usize.checked_shl(self.rom_size_code as u32).unwrap_or(0)
    }

    /// External RAM size in bytes.
    pub fn ram_size(&self) -> usize {
        match self.ram_size_code {
            0x02 => 8 * 1024,
            0x03 => 32 * 1024,
            0x04 => 128 * 1024,
            0x05 => 64 * 1024,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [u8; 29] = [
        0x00, 0x01, 0x02, 0x03, 0x05, 0x06, 0x08, 0x09, 0x0B, 0x0C, 0x0D, 0x0F, 0x10, 0x11, 0x12,
        0x13, 0x15, 0x16, 0x17, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0xFC, 0xFD, 0xFE, 0xFF,
    ];

    fn image(kind: u8) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0134..0x0134 + 8].copy_from_slice(b"CPU_INST");
        rom[TYPE] = kind;
        rom[ROM_SIZE] = 0x01;
        rom[RAM_SIZE] = 0x03;
        rom
    }

    #[test]
    fn lookup_accepts_exactly_the_table() {
        for byte in 0..=u8::MAX {
            let result = CartridgeType::from_byte(byte);
            if KNOWN.contains(&byte) {
                let kind = result.expect("known cartridge byte");
                assert_eq!(kind.code(), byte);
            } else {
                assert_eq!(result, Err(CartridgeError::UnknownType(byte)));
            }
        }
    }

    #[test]
    fn named_entries() {
        assert_eq!(CartridgeType::from_byte(0x00), Ok(CartridgeType::RomOnly));
        assert_eq!(CartridgeType::from_byte(0x13), Ok(CartridgeType::Mbc3RamBattery));
        assert_eq!(CartridgeType::from_byte(0xFF), Ok(CartridgeType::HuC1RamBattery));
        assert_eq!(
            CartridgeType::from_byte(0x04),
            Err(CartridgeError::UnknownType(0x04))
        );
    }

    #[test]
    fn header_fields() {
        let header = CartridgeHeader::parse(&image(0x01)).expect("valid header");
        assert_eq!(header.title, "CPU_INST");
        assert_eq!(header.kind, CartridgeType::Mbc1);
        assert_eq!(header.rom_size(), 64 * 1024);
        assert_eq!(header.ram_size(), 32 * 1024);
    }

    #[test]
    fn header_rejects_short_and_unknown() {
        assert_eq!(
            CartridgeHeader::parse(&[0u8; 0x100]),
            Err(CartridgeError::TooShort(0x100))
        );
        assert_eq!(
            CartridgeHeader::parse(&image(0x20)),
            Err(CartridgeError::UnknownType(0x20))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CartridgeError::UnknownType(0x20).to_string(),
            "unknown cartridge type 0x20"
        );
    }
}
