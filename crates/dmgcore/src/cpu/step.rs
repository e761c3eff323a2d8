use super::{Context, Cpu};

impl Cpu {
    /// Run one step: an interrupt dispatch, one halted no-op, or a single
    /// instruction. The timer is then advanced by the cycles consumed, and
    /// restarted from zero if the step wrote to DIV.
    ///
    /// Returns the number of T-cycles, or 0 once the CPU has locked up on an
    /// invalid opcode.
    pub fn step(&mut self, cx: &mut Context<'_>) -> u32 {
        if self.locked {
            return 0;
        }

        let cycles = if let Some(cycles) = self.handle_interrupts(cx) {
            cycles
        } else if self.regs.halted {
            4
        } else {
            let pc = self.regs.pc();
            let opcode = self.fetch8(cx);
            log::trace!(
                "GB CPU exec: pc=0x{pc:04X} op=0x{opcode:02X} af=0x{:04X} sp=0x{:04X}",
                self.regs.af.get(),
                self.regs.sp(),
            );
            self.exec_opcode(cx, opcode)
        };

        self.timer.update(cycles, &mut *cx.bus);
        if cx.bus.take_divider_reset() {
            self.timer.reset_divider(&mut *cx.bus);
        }
        cycles
    }
}
