use super::{Context, Cpu, InterruptFlags, IE, IF};

impl Cpu {
    /// Check IE & IF and service the highest-priority pending interrupt.
    ///
    /// Any pending, enabled line wakes the CPU from HALT/STOP even when IME
    /// is clear; dispatch itself only happens with IME set. Returns
    /// `Some(cycles)` if an interrupt was taken.
    pub(super) fn handle_interrupts(&mut self, cx: &mut Context<'_>) -> Option<u32> {
        let index = InterruptFlags::pending(&mut *cx.bus).highest_priority()?;

        self.regs.halted = false;

        if !cx.interrupts.is_master_interrupt_enabled() {
            return None;
        }

        self.set_ime(cx, false);

        let pc = self.regs.pc();
        self.push_u16(cx, pc);

        let iflags = cx.read8(IF);
        cx.write8(IF, iflags & !(1 << index));

        let vector = InterruptFlags::vector(index);
        log::debug!(
            "GB CPU interrupt: idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            index,
            vector,
            pc,
            self.regs.sp(),
            iflags & 0x1F,
            cx.read8(IE),
        );
        self.regs.pc.set(vector);

        Some(20)
    }
}
