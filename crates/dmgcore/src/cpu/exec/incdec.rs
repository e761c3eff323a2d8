use crate::cpu::{Context, Cpu, Operand, Pair};

impl Cpu {
    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let pair = Pair::from_rp((opcode >> 4) & 0x03);
        let value = self.regs.pair(pair).wrapping_add(1);
        self.regs.set_pair(pair, value);
        8
    }

    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let pair = Pair::from_rp((opcode >> 4) & 0x03);
        let value = self.regs.pair(pair).wrapping_sub(1);
        self.regs.set_pair(pair, value);
        8
    }

    pub(super) fn exec_inc8_reg(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C
        ));

        let op = Operand::from_index((opcode >> 3) & 0x07);
        self.modify_operand(cx, op, Cpu::alu_inc8);
        if op.is_memory() { 12 } else { 4 }
    }

    pub(super) fn exec_dec8_reg(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D
        ));

        let op = Operand::from_index((opcode >> 3) & 0x07);
        self.modify_operand(cx, op, Cpu::alu_dec8);
        if op.is_memory() { 12 } else { 4 }
    }
}
