use crate::cpu::{Context, Cpu, Pair};

impl Cpu {
    pub(super) fn exec_push_rr(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = self.regs.pair(Pair::from_rp2((opcode >> 4) & 0x03));
        self.push_u16(cx, value);
        16
    }

    pub(super) fn exec_pop_rr(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(cx);
        // POP AF drops the low nibble of F.
        self.regs.set_pair(Pair::from_rp2((opcode >> 4) & 0x03), value);
        12
    }

    pub(super) fn exec_rst(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));

        let ret = self.regs.pc();
        self.push_u16(cx, ret);
        self.regs.pc.set((opcode & 0x38) as u16);
        16
    }

    pub(super) fn exec_call_a16(&mut self, cx: &mut Context<'_>) -> u32 {
        self.call_cond(cx, true)
    }

    pub(super) fn exec_ret(&mut self, cx: &mut Context<'_>) -> u32 {
        let addr = self.pop_u16(cx);
        self.regs.pc.set(addr);
        16
    }

    pub(super) fn exec_reti(&mut self, cx: &mut Context<'_>) -> u32 {
        let addr = self.pop_u16(cx);
        self.regs.pc.set(addr);
        self.set_ime(cx, true);
        16
    }
}
