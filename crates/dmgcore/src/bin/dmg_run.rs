use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dmgcore::{Machine, CLOCK_HZ};

const USAGE: &str = "Usage: dmg_run <rom_path> [steps]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let steps: u64 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid step count {arg:?}; {USAGE}"))?,
        None => 10_000_000,
    };

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let mut machine = Machine::from_rom(&rom)
        .with_context(|| format!("cannot run '{}'", rom_path.display()))?;

    let cycles = machine.run(steps);
    log::info!(
        "ran {} T-cycles ({:.2}s emulated){}",
        cycles,
        cycles as f64 / CLOCK_HZ as f64,
        if machine.cpu.is_locked() { ", CPU locked" } else { "" },
    );

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(machine.serial_output())
        .context("failed to write serial output")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
