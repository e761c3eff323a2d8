use crate::cpu::{request_interrupt, Bus, InterruptFlags, DIV, TAC, TIMA, TMA};

/// T-cycles between DIV increments (16384 Hz).
const DIVIDER_PERIOD: i32 = 256;

/// T-cycles per TIMA increment for TAC[1:0].
const FREQUENCIES: [i32; 4] = [1024, 16, 64, 256];

/// Timer / divider unit.
///
/// Time advances through [`Timer::update`], called by the CPU after every
/// step with the T-cycles that step consumed. The unit keeps its own
/// accumulators and reads TAC/TIMA/TMA through the bus on each update, so
/// software writes to those registers take effect on the next step.
#[derive(Clone, Debug)]
pub struct Timer {
    /// Cycles accumulated towards the next DIV increment.
    divider: i32,
    /// Cycles left until the next TIMA increment.
    countdown: i32,
    /// TAC[1:0] the countdown was last loaded for.
    frequency: u8,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            divider: 0,
            countdown: FREQUENCIES[0],
            frequency: 0,
        }
    }

    #[inline]
    pub fn countdown(&self) -> i32 {
        self.countdown
    }

    /// Preload the countdown; the next TIMA increment happens after
    /// `cycles` more enabled cycles.
    #[inline]
    pub fn set_countdown(&mut self, cycles: i32) {
        self.countdown = cycles;
    }

    #[inline]
    pub fn divider(&self) -> i32 {
        self.divider
    }

    /// Cycles per TIMA increment for a TAC value.
    #[inline]
    pub fn frequency_cycles(tac: u8) -> i32 {
        FREQUENCIES[(tac & 0x03) as usize]
    }

    #[inline]
    pub fn is_enabled(tac: u8) -> bool {
        tac & 0x04 != 0
    }

    /// Clear DIV and the accumulator behind it (STOP, or a CPU write to
    /// `FF04` reported by [`Bus::take_divider_reset`]).
    pub fn reset_divider<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.divider = 0;
        bus.set_divider(0);
    }

    /// Advance the divider and, when enabled, the TIMA countdown by
    /// `cycles` T-cycles.
    pub fn update<B: Bus + ?Sized>(&mut self, cycles: u32, bus: &mut B) {
        let cycles = cycles as i32;
        self.update_divider(cycles, bus);

        let tac = bus.read8(TAC);
        let frequency = tac & 0x03;
        if frequency != self.frequency {
            self.frequency = frequency;
            self.countdown = Self::frequency_cycles(tac);
        }

        if !Self::is_enabled(tac) {
            return;
        }

        self.countdown -= cycles;
        while self.countdown <= 0 {
            self.countdown += Self::frequency_cycles(tac);
            self.increment_tima(bus);
        }
    }

    fn update_divider<B: Bus + ?Sized>(&mut self, cycles: i32, bus: &mut B) {
        self.divider += cycles;
        while self.divider >= DIVIDER_PERIOD {
            self.divider -= DIVIDER_PERIOD;
            let div = bus.read8(DIV);
            bus.set_divider(div.wrapping_add(1));
        }
    }

    fn increment_tima<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let tima = bus.read8(TIMA);
        if tima == 0xFF {
            let tma = bus.read8(TMA);
            bus.write8(TIMA, tma);
            log::debug!("GB timer overflow: TIMA reloaded with TMA=0x{tma:02X}");
            self.request_interrupt(bus);
        } else {
            bus.write8(TIMA, tima + 1);
        }
    }

    /// Raise the timer line in IF. Dispatch is left to the CPU.
    pub fn request_interrupt<B: Bus + ?Sized>(&self, bus: &mut B) {
        request_interrupt(bus, InterruptFlags::TIMER_ID);
    }
}
