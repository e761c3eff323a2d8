mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Context, Cpu};

impl Cpu {
    /// Decode and execute a single opcode and return the number of T-cycles.
    ///
    /// `opcode` has already been fetched (PC points past it).
    pub(super) fn exec_opcode(&mut self, cx: &mut Context<'_>, opcode: u8) -> u32 {
        match opcode {
            0x00 => 4,

            0xCB => self.step_cb(cx),

            // LD rr,d16
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(cx, opcode),

            // RLCA / RRCA / RLA / RRA
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16_rr(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16_rr(opcode),

            // LD r,d8 (and LD (HL),d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.exec_ld_r_d8(cx, opcode)
            }

            // LD r,r' (0x76 in the middle of the block is HALT)
            0x40..=0x7F => self.exec_ld_rr_or_halt(cx, opcode),

            // LD (BC/DE/HL+/HL-),A
            0x02 | 0x12 | 0x22 | 0x32 => self.exec_ld_indirect_a(cx, opcode),

            // LD A,(BC/DE/HL+/HL-)
            0x0A | 0x1A | 0x2A | 0x3A => self.exec_ld_a_indirect(cx, opcode),

            0x08 => self.exec_ld_a16_sp(cx),
            0x10 => self.exec_stop(cx),

            0xE0 | 0xF0 => self.exec_ldh_a8(cx, opcode),
            0xE2 | 0xF2 => self.exec_ldh_c(cx, opcode),
            0xEA | 0xFA => self.exec_ld_a16_a(cx, opcode),

            0xE8 => self.exec_add_sp_r8(cx),
            0xF8 => self.exec_ld_hl_sp_r8(cx),
            0xF9 => self.exec_ld_sp_hl(),

            0x18 => self.jr(cx, true),
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(cx, opcode),
            0xC2 | 0xCA | 0xD2 | 0xDA => self.exec_jp_cc(cx, opcode),

            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            0x27 => self.exec_daa(),
            0x2F => self.exec_cpl(),
            0x37 => self.exec_scf(),
            0x3F => self.exec_ccf(),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r
            0x80..=0xBF => self.exec_alu_reg_group(cx, opcode),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                self.exec_alu_imm(cx, opcode)
            }

            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                self.exec_inc8_reg(cx, opcode)
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                self.exec_dec8_reg(cx, opcode)
            }

            0xF3 => self.exec_di(cx),
            0xFB => self.exec_ei(cx),

            0xC3 => self.exec_jp_a16(cx),
            0xE9 => self.exec_jp_hl(),
            0xCD => self.exec_call_a16(cx),
            0xC4 | 0xCC | 0xD4 | 0xDC => self.exec_call_cc(cx, opcode),

            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push_rr(cx, opcode),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop_rr(cx, opcode),

            0xC9 => self.exec_ret(cx),
            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.exec_ret_cc(cx, opcode),
            0xD9 => self.exec_reti(cx),

            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                self.exec_rst(cx, opcode)
            }

            // D3 DB DD E3 E4 EB EC ED F4 FC FD hard-lock the CPU until
            // power-off.
            _ => self.lock_up(opcode),
        }
    }

    fn lock_up(&mut self, opcode: u8) -> u32 {
        if !self.locked {
            let opcode_addr = self.regs.pc().wrapping_sub(1);
            log::error!(
                "GB CPU locked: invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                pc = opcode_addr,
                sp = self.regs.sp(),
                af = self.regs.af.get(),
                bc = self.regs.bc.get(),
                de = self.regs.de.get(),
                hl = self.regs.hl.get(),
            );
        }
        self.locked = true;
        0
    }
}
