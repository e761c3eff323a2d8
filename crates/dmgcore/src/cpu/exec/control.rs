use crate::cpu::{Context, Cpu};

impl Cpu {
    pub(super) fn exec_jr_cc(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cc = (opcode >> 3) & 0x03;
        self.jr(cx, self.condition(cc))
    }

    pub(super) fn exec_jp_cc(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cc = (opcode >> 3) & 0x03;
        self.jp_cond(cx, self.condition(cc))
    }

    pub(super) fn exec_jp_a16(&mut self, cx: &mut Context<'_>) -> u32 {
        self.jp_cond(cx, true)
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        let addr = self.regs.hl.get();
        self.regs.pc.set(addr);
        4
    }

    pub(super) fn exec_call_cc(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cc = (opcode >> 3) & 0x03;
        self.call_cond(cx, self.condition(cc))
    }

    pub(super) fn exec_ret_cc(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cc = (opcode >> 3) & 0x03;
        self.ret_cond(cx, self.condition(cc))
    }
}
