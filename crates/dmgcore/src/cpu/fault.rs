use thiserror::Error;

/// Unrecoverable CPU core fault.
///
/// These indicate a logic defect in the decode table or in a caller of the
/// register API, never bad input data. They are raised as a panic carrying
/// the `CpuFault` itself so tests can catch and inspect them; release builds
/// abort on panic.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CpuFault {
    #[error("unknown flag mnemonic {0:?}")]
    UnknownFlag(String),
    #[error("8-bit register selector {0} out of range")]
    InvalidRegister(u8),
    #[error("register pair selector {0} out of range")]
    InvalidPair(u8),
    #[error("condition selector {0} out of range")]
    InvalidCondition(u8),
    #[error("write-back to an immediate operand")]
    ImmediateWriteback,
}

/// Report `fault` and unwind with it as the panic payload.
#[cold]
#[track_caller]
pub fn raise(fault: CpuFault) -> ! {
    log::error!("GB CPU fault: {fault}");
    std::panic::panic_any(fault)
}

/// Run `f`, expecting it to fault, and return the fault.
#[cfg(test)]
pub(crate) fn catch_fault<F: FnOnce() + std::panic::UnwindSafe>(f: F) -> CpuFault {
    let payload = std::panic::catch_unwind(f).expect_err("expected a CPU fault");
    payload
        .downcast::<CpuFault>()
        .map(|b| *b)
        .expect("panic payload was not a CpuFault")
}
