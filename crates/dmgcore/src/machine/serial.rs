/// Serial port as seen through SB/SC.
///
/// Only the internal-clock transfer used by test ROMs to print text is
/// modelled: starting a transfer (SC bits 7 and 0 both set) appends SB to
/// `output` and completes immediately.
#[derive(Clone, Debug, Default)]
pub(crate) struct Serial {
    pub(crate) sb: u8,
    pub(crate) sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Serial {
    pub(super) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    /// Returns true when a transfer completed and the serial interrupt
    /// should be requested.
    pub(super) fn write_sc(&mut self, value: u8) -> bool {
        self.sc = value;
        if self.sc & 0x81 != 0x81 {
            return false;
        }
        self.output.push(self.sb);
        self.sc &= !0x80;
        true
    }

    /// SC reads back with the unused bits set.
    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }
}
