use crate::cpu::{Context, Cpu, Flag, Operand, Pair};

impl Cpu {
    /// Dispatch one of the eight accumulator operations selected by bits
    /// 3..=5 of the opcode.
    fn alu_dispatch(&mut self, op: u8, value: u8) {
        match op {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    pub(super) fn exec_alu_reg_group(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let src = Operand::from_index(opcode & 0x07);
        let value = self.read_operand(cx, src);
        self.alu_dispatch((opcode >> 3) & 0x07, value);

        if src.is_memory() { 8 } else { 4 }
    }

    pub(super) fn exec_alu_imm(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let value = self.read_operand(cx, Operand::Immediate);
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        8
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.pair(Pair::from_rp((opcode >> 4) & 0x03));
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_r8(&mut self, cx: &mut Context<'_>) -> u32 {
        let imm = self.fetch8(cx);
        let value = self.alu_add16_signed(self.regs.sp(), imm);
        self.regs.sp.set(value);
        16
    }

    /// RLCA / RRCA / RLA / RRA. Same as the CB forms except Z is always
    /// cleared.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let result = self.alu_shift((opcode >> 3) & 0x03, self.regs.a());
        self.regs.set_a(result);
        self.set_flag(Flag::Z, false);
        4
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        let a = self.regs.a();
        self.regs.set_a(!a);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        4
    }
}
