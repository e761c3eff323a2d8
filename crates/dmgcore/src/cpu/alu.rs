use super::{Cpu, Flag};

/// Carry out of bit 3 when adding `b` (and `carry`) to `a`.
#[inline]
pub(crate) fn half_carry_add(a: u8, b: u8, carry: bool) -> bool {
    (a & 0x0F) + (b & 0x0F) + carry as u8 > 0x0F
}

/// Borrow from bit 4 when subtracting `b` (and `carry`) from `a`.
#[inline]
pub(crate) fn half_carry_sub(a: u8, b: u8, carry: bool) -> bool {
    (a & 0x0F) < (b & 0x0F) + carry as u8
}

/// Carry out of bit 7 when adding `b` (and `carry`) to `a`.
#[inline]
pub(crate) fn carry_add(a: u8, b: u8, carry: bool) -> bool {
    a as u16 + b as u16 + carry as u16 > 0xFF
}

/// Borrow when subtracting `b` (and `carry`) from `a`, i.e. the subtrahend
/// exceeds the minuend as unsigned values.
#[inline]
pub(crate) fn carry_sub(a: u8, b: u8, carry: bool) -> bool {
    (a as u16) < b as u16 + carry as u16
}

/// Carry out of bit 11 for 16-bit adds.
#[inline]
pub(crate) fn half_carry_add16(a: u16, b: u16) -> bool {
    (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF
}

/// Carry out of bit 15 for 16-bit adds.
#[inline]
pub(crate) fn carry_add16(a: u16, b: u16) -> bool {
    a as u32 + b as u32 > 0xFFFF
}

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = use_carry && self.get_flag(Flag::C);
        let result = a.wrapping_add(value).wrapping_add(carry_in as u8);

        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, half_carry_add(a, value, carry_in));
        self.set_flag(Flag::C, carry_add(a, value, carry_in));
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = use_carry && self.get_flag(Flag::C);
        let result = a.wrapping_sub(value).wrapping_sub(carry_in as u8);

        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half_carry_sub(a, value, carry_in));
        self.set_flag(Flag::C, carry_sub(a, value, carry_in));
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a() & value;
        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a() | value;
        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a() ^ value;
        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a();

        self.clear_flags();
        self.set_flag(Flag::Z, a == value);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half_carry_sub(a, value, false));
        self.set_flag(Flag::C, carry_sub(a, value, false));
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// - Uses C, H, N, and A to compute a correction value.
    /// - Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a();
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::N) {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            // After a subtraction.
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.set_a(a);
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, half_carry_add(value, 1, false));
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half_carry_sub(value, 1, false));
        result
    }

    /// `ADD HL,rr`: Z is unaffected, N is cleared, H and C come from bits
    /// 11 and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl.get();

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, half_carry_add16(hl, value));
        self.set_flag(Flag::C, carry_add16(hl, value));

        self.regs.hl.set(hl.wrapping_add(value));
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C are computed from the low byte.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let low = base as u8;
        self.clear_flags();
        self.set_flag(Flag::H, half_carry_add(low, imm8, false));
        self.set_flag(Flag::C, carry_add(low, imm8, false));
        base.wrapping_add_signed(imm8 as i8 as i16)
    }

    /// Shared body of the CB rotate/shift group and the accumulator
    /// rotates. Returns the shifted value and sets C from the bit that fell
    /// out; Z is computed from the result.
    pub(super) fn alu_shift(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry) = match op {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry);
        result
    }
}
