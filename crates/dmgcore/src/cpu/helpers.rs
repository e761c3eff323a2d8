use super::fault::{self, CpuFault};
use super::{Context, Cpu, Flag};

impl Cpu {
    #[inline]
    pub(super) fn fetch8(&mut self, cx: &mut Context<'_>) -> u8 {
        let pc = self.regs.pc();
        let value = cx.read8(pc);
        if self.halt_bug {
            // HALT bug: the first fetch after the bug does not increment PC.
            self.halt_bug = false;
        } else {
            self.regs.pc.set(pc.wrapping_add(1));
        }
        value
    }

    #[inline]
    pub(super) fn fetch16(&mut self, cx: &mut Context<'_>) -> u16 {
        let lo = self.fetch8(cx);
        let hi = self.fetch8(cx);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn push_u16(&mut self, cx: &mut Context<'_>, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        // Stack grows downward: high byte lands at SP-1, low byte at SP-2.
        let sp = self.regs.sp().wrapping_sub(1);
        cx.write8(sp, hi);
        let sp = sp.wrapping_sub(1);
        cx.write8(sp, lo);
        self.regs.sp.set(sp);
    }

    #[inline]
    pub(super) fn pop_u16(&mut self, cx: &mut Context<'_>) -> u16 {
        let sp = self.regs.sp();
        let lo = cx.read8(sp);
        let hi = cx.read8(sp.wrapping_add(1));
        self.regs.sp.set(sp.wrapping_add(2));
        u16::from_le_bytes([lo, hi])
    }

    /// Evaluate the 2-bit `cc` field: NZ, Z, NC, C.
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            3 => self.get_flag(Flag::C),
            other => fault::raise(CpuFault::InvalidCondition(other)),
        }
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand.
    pub(super) fn jr(&mut self, cx: &mut Context<'_>, cond: bool) -> u32 {
        let offset = self.fetch8(cx) as i8;
        if cond {
            let pc = self.regs.pc().wrapping_add_signed(offset as i16);
            self.regs.pc.set(pc);
            12
        } else {
            8
        }
    }

    /// Absolute jump helper used by JP a16 and JP cc,a16.
    pub(super) fn jp_cond(&mut self, cx: &mut Context<'_>, cond: bool) -> u32 {
        let addr = self.fetch16(cx);
        if cond {
            self.regs.pc.set(addr);
            16
        } else {
            12
        }
    }

    /// Call helper used by CALL a16 and CALL cc,a16.
    pub(super) fn call_cond(&mut self, cx: &mut Context<'_>, cond: bool) -> u32 {
        let addr = self.fetch16(cx);
        if cond {
            let ret = self.regs.pc();
            self.push_u16(cx, ret);
            self.regs.pc.set(addr);
            24
        } else {
            12
        }
    }

    /// Conditional return helper used by RET cc.
    pub(super) fn ret_cond(&mut self, cx: &mut Context<'_>, cond: bool) -> u32 {
        if cond {
            let addr = self.pop_u16(cx);
            self.regs.pc.set(addr);
            20
        } else {
            8
        }
    }
}
