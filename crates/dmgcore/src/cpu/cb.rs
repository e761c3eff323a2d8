use super::{Context, Cpu, Flag, Operand};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    pub(super) fn step_cb(&mut self, cx: &mut Context<'_>) -> u32 {
        let cb = self.fetch8(cx);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let op = Operand::from_index(cb & 0x07);

        match x {
            0 => {
                // RLC RRC RL RR SLA SRA SWAP SRL
                self.modify_operand(cx, op, |cpu, value| cpu.alu_shift(y, value));
                if op.is_memory() { 16 } else { 8 }
            }
            1 => {
                // BIT b: C preserved, H set, N cleared.
                let value = self.read_operand(cx, op);
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
                if op.is_memory() { 12 } else { 8 }
            }
            2 => {
                // RES b
                self.modify_operand(cx, op, |_, value| value & !(1 << y));
                if op.is_memory() { 16 } else { 8 }
            }
            _ => {
                // SET b
                self.modify_operand(cx, op, |_, value| value | (1 << y));
                if op.is_memory() { 16 } else { 8 }
            }
        }
    }
}
