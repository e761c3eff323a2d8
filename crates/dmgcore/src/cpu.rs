mod alu;
mod bus;
mod cb;
mod exec;
pub mod fault;
mod helpers;
mod interrupts;
mod operand;
mod regs;
mod step;

pub use bus::{
    request_interrupt, Bus, Context, InterruptController, InterruptFlags, InterruptMaster, DIV,
    IE, IF, TAC, TIMA, TMA,
};
pub use operand::Operand;
pub use regs::{Flag, Pair, Register, RegisterFile};

use typed_builder::TypedBuilder;

use crate::machine::Timer;

/// Register state the CPU starts from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BootState {
    /// Values left behind by the DMG boot ROM (PC=0x0100).
    #[default]
    Dmg,
    /// Every register zero. Convenient for unit tests that place code at
    /// address 0.
    Zeroed,
}

/// Construction parameters for [`Cpu`].
#[derive(Clone, Copy, Debug, TypedBuilder)]
pub struct CpuConfig {
    /// Initial interrupt master enable. Cartridge code starts with IME
    /// clear on DMG hardware.
    #[builder(default = false)]
    pub ime: bool,
    #[builder(default)]
    pub boot: BootState,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Observable low-power state of the CPU.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HaltState {
    Running,
    Halted,
    /// HALT was executed with IME clear while an interrupt was already
    /// pending. The next opcode fetch will not advance PC.
    HaltBugPending,
}

/// Game Boy CPU core (SM83).
///
/// Owns the register file, the timer and the HALT-bug latch. The memory bus
/// and interrupt controller are passed into every step through a
/// [`Context`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: RegisterFile,
    pub timer: Timer,
    halt_bug: bool,
    /// When true, the CPU has executed an invalid opcode that hard-locks
    /// the machine on real hardware. `step()` returns 0 cycles until reset.
    locked: bool,
    config: CpuConfig,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(CpuConfig::default())
    }
}

impl Cpu {
    pub fn new(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: RegisterFile::default(),
            timer: Timer::new(),
            halt_bug: false,
            locked: false,
            config,
        };
        cpu.reset();
        cpu
    }

    /// CPU with all registers zeroed and IME clear.
    pub fn zeroed() -> Self {
        Self::new(CpuConfig::builder().boot(BootState::Zeroed).build())
    }

    /// Reset to the configured power-on state.
    pub fn reset(&mut self) {
        self.regs = match self.config.boot {
            BootState::Dmg => RegisterFile::dmg_boot(),
            BootState::Zeroed => RegisterFile::default(),
        };
        self.regs.ime = self.config.ime;
        self.timer = Timer::new();
        self.halt_bug = false;
        self.locked = false;
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.regs.halted
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn halt_bug(&self) -> bool {
        self.halt_bug
    }

    pub fn halt_state(&self) -> HaltState {
        if self.regs.halted {
            HaltState::Halted
        } else if self.halt_bug {
            HaltState::HaltBugPending
        } else {
            HaltState::Running
        }
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.get_flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.assign_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.clear_flags();
    }

    /// Set IME in both the register-file mirror and the controller.
    #[inline]
    pub(crate) fn set_ime(&mut self, cx: &mut Context<'_>, enabled: bool) {
        self.regs.ime = enabled;
        cx.interrupts.set_master_interrupt(enabled);
    }
}
