use bitflags::bitflags;

/// Divider register (DIV).
pub const DIV: u16 = 0xFF04;
/// Timer counter (TIMA).
pub const TIMA: u16 = 0xFF05;
/// Timer modulo (TMA).
pub const TMA: u16 = 0xFF06;
/// Timer control (TAC).
pub const TAC: u16 = 0xFF07;
/// Interrupt request register (IF).
pub const IF: u16 = 0xFF0F;
/// Interrupt enable register (IE).
pub const IE: u16 = 0xFFFF;

/// Abstraction over the Game Boy bus (memory and IO).
///
/// The CPU core only needs byte reads and writes. The timer additionally
/// needs a way to bump DIV without going through the CPU-visible write path,
/// which resets the register on real hardware.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Set DIV directly.
    ///
    /// Buses that model the "any write resets DIV" behaviour of `FF04`
    /// must override this; the default is a plain write.
    fn set_divider(&mut self, value: u8) {
        self.write8(DIV, value);
    }

    /// Report, once, that the CPU wrote to `FF04` since the last call.
    ///
    /// The CPU checks this after every step and clears the timer's divider
    /// accumulator along with DIV. Buses that never reset DIV can keep the
    /// default.
    fn take_divider_reset(&mut self) -> bool {
        false
    }
}

/// Owner of the interrupt master enable (IME).
///
/// The core reads IME only from here, for both dispatch and the HALT bug
/// check. The register file keeps a mirror of this flag; DI/EI/RETI and
/// interrupt dispatch update both.
pub trait InterruptController {
    fn set_master_interrupt(&mut self, enabled: bool);
    fn is_master_interrupt_enabled(&self) -> bool;
}

/// Plain IME latch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InterruptMaster {
    enabled: bool,
}

impl InterruptMaster {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl InterruptController for InterruptMaster {
    fn set_master_interrupt(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_master_interrupt_enabled(&self) -> bool {
        self.enabled
    }
}

bitflags! {
    /// The five interrupt lines as laid out in IF/IE. Lower bits have
    /// higher priority.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl InterruptFlags {
    /// Interrupt id (bit index) of the timer overflow interrupt.
    pub const TIMER_ID: u8 = 2;
    /// Interrupt id of the serial transfer-complete interrupt.
    pub const SERIAL_ID: u8 = 3;

    /// Lines that are both requested and enabled.
    pub fn pending<B: Bus + ?Sized>(bus: &mut B) -> Self {
        let ie = Self::from_bits_truncate(bus.read8(IE));
        let iflags = Self::from_bits_truncate(bus.read8(IF));
        ie & iflags
    }

    /// Highest-priority line in the set, as a bit index.
    pub fn highest_priority(self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.bits().trailing_zeros() as u8)
        }
    }

    /// Handler address for interrupt `index`.
    #[inline]
    pub fn vector(index: u8) -> u16 {
        0x0040 + (index as u16) * 8
    }
}

/// Set bit `id` of IF. This only requests the interrupt; dispatch happens
/// in the CPU's next interrupt check.
pub fn request_interrupt<B: Bus + ?Sized>(bus: &mut B, id: u8) {
    let iflags = bus.read8(IF);
    bus.write8(IF, iflags | (1 << id));
}

/// Execution context handed to every instruction handler.
///
/// The CPU owns its registers, timer and halt-bug latch; the memory bus and
/// interrupt controller are borrowed for the duration of a step.
pub struct Context<'a> {
    pub bus: &'a mut dyn Bus,
    pub interrupts: &'a mut dyn InterruptController,
}

impl<'a> Context<'a> {
    pub fn new(bus: &'a mut dyn Bus, interrupts: &'a mut dyn InterruptController) -> Self {
        Self { bus, interrupts }
    }

    #[inline]
    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    #[inline]
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value)
    }
}
