use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info};
use lrboy_core::{cartridge::Cartridge, gameboy::GameBoy};

/// Machine cycles in one 154-line frame.
const CYCLES_PER_FRAME: u64 = 456 * 154;

#[derive(Parser)]
#[command(version, about = "Headless LR35902 runner")]
struct Args {
    /// Path to ROM file
    rom: PathBuf,

    /// Number of instructions to execute
    #[arg(long)]
    steps: Option<u64>,

    /// Number of CPU cycles to run (defaults to one frame)
    #[arg(long)]
    cycles: Option<u64>,

    /// Print CPU state after every instruction
    #[arg(long)]
    trace: bool,

    /// Joypad bitmask held for the whole run, 1 = pressed
    /// (Right, Left, Up, Down, A, B, Select, Start from bit 0)
    #[arg(long, value_parser = parse_mask, default_value = "0")]
    input: u8,
}

fn parse_mask(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid input mask '{s}': {e}"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    info!("Starting emulator");

    let cart = match Cartridge::from_file(&args.rom) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load ROM: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut gb = GameBoy::new(cart);
    gb.set_input(args.input);

    let cycle_budget = match (args.steps, args.cycles) {
        (Some(_), None) => u64::MAX,
        (_, Some(c)) => c,
        (None, None) => CYCLES_PER_FRAME,
    };
    let step_budget = args.steps.unwrap_or(u64::MAX);

    let mut steps = 0u64;
    while steps < step_budget && gb.cycles() < cycle_budget {
        if let Err(e) = gb.step() {
            error!("Emulation stopped after {steps} instructions: {e}");
            eprintln!("{}", gb.cpu.debug_state());
            return ExitCode::FAILURE;
        }
        steps += 1;
        if args.trace {
            println!("{}", gb.cpu.debug_state());
        }
    }

    info!("Ran {steps} instructions in {} cycles", gb.cycles());
    println!("{}", gb.cpu.debug_state());
    ExitCode::SUCCESS
}
