use crate::cpu::{Context, Cpu, InterruptFlags};

impl Cpu {
    pub(super) fn exec_halt(&mut self, cx: &mut Context<'_>) -> u32 {
        let pending = !InterruptFlags::pending(&mut *cx.bus).is_empty();
        if !cx.interrupts.is_master_interrupt_enabled() && pending {
            // HALT bug: the CPU does not halt and the byte after HALT is
            // fetched twice.
            self.halt_bug = true;
        } else {
            self.regs.halted = true;
        }
        4
    }

    pub(super) fn exec_stop(&mut self, cx: &mut Context<'_>) -> u32 {
        // STOP is two bytes; the second one is padding.
        let _padding = self.fetch8(cx);
        self.timer.reset_divider(&mut *cx.bus);
        self.regs.halted = true;
        4
    }

    pub(super) fn exec_di(&mut self, cx: &mut Context<'_>) -> u32 {
        self.set_ime(cx, false);
        4
    }

    pub(super) fn exec_ei(&mut self, cx: &mut Context<'_>) -> u32 {
        self.set_ime(cx, true);
        4
    }
}
