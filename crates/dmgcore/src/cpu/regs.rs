use super::fault::{self, CpuFault};

/// A 16-bit register cell that can also be addressed as two 8-bit halves.
///
/// `high` is the most significant byte (A in AF, B in BC, ...). Half writes
/// leave the other half untouched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Register(u16);

impl Register {
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[inline]
    pub fn get(&self) -> u16 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: u16) {
        self.0 = value;
    }

    #[inline]
    pub fn high(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn low(&self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn set_high(&mut self, value: u8) {
        self.0 = (self.0 & 0x00FF) | ((value as u16) << 8);
    }

    #[inline]
    pub fn set_low(&mut self, value: u8) {
        self.0 = (self.0 & 0xFF00) | value as u16;
    }
}

/// Flag bits in the low half of AF.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Look up a flag by its single-letter mnemonic.
    ///
    /// Anything other than `Z`, `N`, `H` or `C` is a logic error in the
    /// caller and raises a [`CpuFault`].
    pub fn from_mnemonic(name: &str) -> Flag {
        match name {
            "Z" | "z" => Flag::Z,
            "N" | "n" => Flag::N,
            "H" | "h" => Flag::H,
            "C" | "c" => Flag::C,
            other => fault::raise(CpuFault::UnknownFlag(other.to_string())),
        }
    }
}

/// Register pair selector used by operand descriptors and the 2-bit `rp`
/// opcode fields.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pair {
    Af,
    Bc,
    De,
    Hl,
    Sp,
    Pc,
}

/// Architectural register state of the CPU.
///
/// AF carries the flags; SP and PC are stored as ordinary register cells so
/// that instructions such as `LD (a16),SP` can address their halves. `ime`
/// mirrors the interrupt controller's master enable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RegisterFile {
    pub af: Register,
    pub bc: Register,
    pub de: Register,
    pub hl: Register,
    pub sp: Register,
    pub pc: Register,
    pub ime: bool,
    pub halted: bool,
}

impl RegisterFile {
    /// Register values the DMG boot ROM leaves behind when it jumps to the
    /// cartridge entry point at 0x0100.
    pub fn dmg_boot() -> Self {
        Self {
            af: Register::new(0x01B0),
            bc: Register::new(0x0013),
            de: Register::new(0x00D8),
            hl: Register::new(0x014D),
            sp: Register::new(0xFFFE),
            pc: Register::new(0x0100),
            ime: false,
            halted: false,
        }
    }

    #[inline]
    pub fn pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::Af => self.af.get(),
            Pair::Bc => self.bc.get(),
            Pair::De => self.de.get(),
            Pair::Hl => self.hl.get(),
            Pair::Sp => self.sp.get(),
            Pair::Pc => self.pc.get(),
        }
    }

    #[inline]
    pub fn set_pair(&mut self, pair: Pair, value: u16) {
        match pair {
            // Lower 4 bits of F are always zero.
            Pair::Af => self.af.set(value & 0xFFF0),
            Pair::Bc => self.bc.set(value),
            Pair::De => self.de.set(value),
            Pair::Hl => self.hl.set(value),
            Pair::Sp => self.sp.set(value),
            Pair::Pc => self.pc.set(value),
        }
    }

    #[inline]
    pub fn register_mut(&mut self, pair: Pair) -> &mut Register {
        match pair {
            Pair::Af => &mut self.af,
            Pair::Bc => &mut self.bc,
            Pair::De => &mut self.de,
            Pair::Hl => &mut self.hl,
            Pair::Sp => &mut self.sp,
            Pair::Pc => &mut self.pc,
        }
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.af.high()
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af.set_high(value);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.af.low()
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc.get()
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.sp.get()
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.af.low() & flag.mask()) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag) {
        self.af.set_low(self.af.low() | flag.mask());
    }

    #[inline]
    pub fn clear_flag(&mut self, flag: Flag) {
        self.af.set_low(self.af.low() & !flag.mask());
    }

    #[inline]
    pub fn assign_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.set_flag(flag);
        } else {
            self.clear_flag(flag);
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.af.set_low(0);
    }
}
