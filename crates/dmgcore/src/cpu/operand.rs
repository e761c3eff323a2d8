use super::fault::{self, CpuFault};
use super::regs::Pair;
use super::{Context, Cpu};

/// Where an 8-bit operand lives.
///
/// Arithmetic, logic and CB instructions decode their 3-bit register field
/// into one of these once and then share a single read / write-back path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand {
    /// The byte following the opcode.
    Immediate,
    High(Pair),
    Low(Pair),
    /// The memory cell addressed by a register pair.
    Indirect(Pair),
}

/// Opcode register field order: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
const R8_TABLE: [Operand; 8] = [
    Operand::High(Pair::Bc),
    Operand::Low(Pair::Bc),
    Operand::High(Pair::De),
    Operand::Low(Pair::De),
    Operand::High(Pair::Hl),
    Operand::Low(Pair::Hl),
    Operand::Indirect(Pair::Hl),
    Operand::High(Pair::Af),
];

impl Operand {
    /// Decode a 3-bit register field.
    pub fn from_index(index: u8) -> Operand {
        match R8_TABLE.get(index as usize) {
            Some(op) => *op,
            None => fault::raise(CpuFault::InvalidRegister(index)),
        }
    }

    #[inline]
    pub fn is_memory(self) -> bool {
        matches!(self, Operand::Indirect(_))
    }
}

impl Pair {
    /// Decode the `rp` field used by LD rr,d16 / INC rr / DEC rr / ADD HL,rr.
    pub fn from_rp(index: u8) -> Pair {
        match index {
            0 => Pair::Bc,
            1 => Pair::De,
            2 => Pair::Hl,
            3 => Pair::Sp,
            other => fault::raise(CpuFault::InvalidPair(other)),
        }
    }

    /// Decode the `rp2` field used by PUSH / POP, where slot 3 is AF.
    pub fn from_rp2(index: u8) -> Pair {
        match index {
            0 => Pair::Bc,
            1 => Pair::De,
            2 => Pair::Hl,
            3 => Pair::Af,
            other => fault::raise(CpuFault::InvalidPair(other)),
        }
    }
}

impl Cpu {
    pub(super) fn read_operand(&mut self, cx: &mut Context<'_>, op: Operand) -> u8 {
        match op {
            Operand::Immediate => self.fetch8(cx),
            Operand::High(pair) => (self.regs.pair(pair) >> 8) as u8,
            Operand::Low(pair) => self.regs.pair(pair) as u8,
            Operand::Indirect(pair) => cx.read8(self.regs.pair(pair)),
        }
    }

    pub(super) fn write_operand(&mut self, cx: &mut Context<'_>, op: Operand, value: u8) {
        match op {
            Operand::Immediate => fault::raise(CpuFault::ImmediateWriteback),
            Operand::High(pair) => self.regs.register_mut(pair).set_high(value),
            Operand::Low(Pair::Af) => self.regs.af.set_low(value & 0xF0),
            Operand::Low(pair) => self.regs.register_mut(pair).set_low(value),
            Operand::Indirect(pair) => {
                let addr = self.regs.pair(pair);
                cx.write8(addr, value);
            }
        }
    }

    /// Read-modify-write helper shared by INC/DEC r and the CB group.
    pub(super) fn modify_operand<F>(&mut self, cx: &mut Context<'_>, op: Operand, f: F)
    where
        F: FnOnce(&mut Cpu, u8) -> u8,
    {
        let value = self.read_operand(cx, op);
        let result = f(self, value);
        self.write_operand(cx, op, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::fault::catch_fault;

    #[test]
    fn register_field_table() {
        assert_eq!(Operand::from_index(0), Operand::High(Pair::Bc));
        assert_eq!(Operand::from_index(5), Operand::Low(Pair::Hl));
        assert_eq!(Operand::from_index(6), Operand::Indirect(Pair::Hl));
        assert_eq!(Operand::from_index(7), Operand::High(Pair::Af));
        assert!(Operand::from_index(6).is_memory());
    }

    #[test]
    fn out_of_range_selectors_fault() {
        assert_eq!(
            catch_fault(|| {
                Operand::from_index(8);
            }),
            CpuFault::InvalidRegister(8)
        );
        assert_eq!(
            catch_fault(|| {
                Pair::from_rp(4);
            }),
            CpuFault::InvalidPair(4)
        );
        assert_eq!(
            catch_fault(|| {
                Pair::from_rp2(7);
            }),
            CpuFault::InvalidPair(7)
        );
    }

    #[test]
    fn immediate_writeback_faults() {
        use crate::cpu::tests::TestBus;
        use crate::cpu::InterruptMaster;

        let fault = catch_fault(|| {
            let mut cpu = Cpu::zeroed();
            let mut bus = TestBus::default();
            let mut ime = InterruptMaster::default();
            let mut cx = Context::new(&mut bus, &mut ime);
            cpu.write_operand(&mut cx, Operand::Immediate, 1);
        });
        assert_eq!(fault, CpuFault::ImmediateWriteback);
    }
}
