use crate::cpu::{Context, Cpu, Operand, Pair};

impl Cpu {
    pub(super) fn exec_ld_rr_d16(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16(cx);
        let pair = Pair::from_rp((opcode >> 4) & 0x03);
        self.regs.set_pair(pair, value);
        12
    }

    pub(super) fn exec_ld_r_d8(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let dst = Operand::from_index((opcode >> 3) & 0x07);
        let value = self.read_operand(cx, Operand::Immediate);
        self.write_operand(cx, dst, value);

        if dst.is_memory() { 12 } else { 8 }
    }

    pub(super) fn exec_ld_rr_or_halt(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode));

        if opcode == 0x76 {
            return self.exec_halt(cx);
        }

        let dst = Operand::from_index((opcode >> 3) & 0x07);
        let src = Operand::from_index(opcode & 0x07);
        let value = self.read_operand(cx, src);
        self.write_operand(cx, dst, value);

        if dst.is_memory() || src.is_memory() { 8 } else { 4 }
    }

    /// Address used by `LD (rr),A` / `LD A,(rr)`; the HL forms post-adjust HL.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc.get(),
            1 => self.regs.de.get(),
            2 => {
                let hl = self.regs.hl.get();
                self.regs.hl.set(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl.get();
                self.regs.hl.set(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_addr(opcode);
        cx.write8(addr, self.regs.a());
        8
    }

    pub(super) fn exec_ld_a_indirect(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_addr(opcode);
        let value = cx.read8(addr);
        self.regs.set_a(value);
        8
    }

    pub(super) fn exec_ld_a16_sp(&mut self, cx: &mut Context<'_>) -> u32 {
        let addr = self.fetch16(cx);
        let sp = self.regs.sp;
        cx.write8(addr, sp.low());
        cx.write8(addr.wrapping_add(1), sp.high());
        20
    }

    pub(super) fn exec_ldh_a8(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let offset = self.fetch8(cx) as u16;
        let addr = 0xFF00 | offset;
        if opcode == 0xE0 {
            cx.write8(addr, self.regs.a());
        } else {
            let value = cx.read8(addr);
            self.regs.set_a(value);
        }
        12
    }

    pub(super) fn exec_ldh_c(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00 | self.regs.bc.low() as u16;
        if opcode == 0xE2 {
            cx.write8(addr, self.regs.a());
        } else {
            let value = cx.read8(addr);
            self.regs.set_a(value);
        }
        8
    }

    pub(super) fn exec_ld_a16_a(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.fetch16(cx);
        if opcode == 0xEA {
            cx.write8(addr, self.regs.a());
        } else {
            let value = cx.read8(addr);
            self.regs.set_a(value);
        }
        16
    }

    pub(super) fn exec_ld_hl_sp_r8(&mut self, cx: &mut Context<'_>) -> u32 {
        let imm = self.fetch8(cx);
        let value = self.alu_add16_signed(self.regs.sp(), imm);
        self.regs.hl.set(value);
        12
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        let hl = self.regs.hl.get();
        self.regs.sp.set(hl);
        8
    }
}
