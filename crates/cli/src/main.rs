//! MIPS pipeline simulator CLI.
//!
//! This binary provides the command-line front end for the simulator. It performs:
//! 1. **Run:** Load a hex program image, run it to the exit SYSCALL (bounded),
//!    and print the final machine state and statistics.
//! 2. **Disassemble:** Print address, word, and mnemonic for every word of an image.
//!
//! Logging goes to stderr through `tracing`; `-v` raises the level and
//! `RUST_LOG` overrides it entirely.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use mipsim_core::common::constants::{MEM_DATA_BEGIN, MEM_TEXT_BEGIN, WORD_BYTES};
use mipsim_core::config::Config;
use mipsim_core::core::pipeline::latches::LatchSnapshot;
use mipsim_core::isa::disasm;
use mipsim_core::sim::{Simulator, loader};

/// Exit status when the cycle bound is reached before the program halts.
const EXIT_BOUND_REACHED: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-accurate 5-stage MIPS pipeline simulator",
    long_about = "Run or disassemble MIPS32 programs stored as hex text (one word per line).\n\nExamples:\n  mipsim run prog.hex --forwarding --regs\n  mipsim run prog.hex --pipeline --mem 0x10010000 0x1001001c\n  mipsim disasm prog.hex"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv per-cycle trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until the exit SYSCALL or the cycle bound.
    Run {
        /// Hex program image.
        program: PathBuf,

        /// Enable the EX/MEM and MEM/WB forwarding paths.
        #[arg(long)]
        forwarding: bool,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Cycle bound (overrides the configuration).
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Print the register file.
        #[arg(long)]
        regs: bool,

        /// Print the final pipeline latch contents.
        #[arg(long)]
        pipeline: bool,

        /// Dump memory words in `[START, END]` (hex accepted).
        #[arg(long, num_args = 2, value_names = ["START", "END"], value_parser = parse_addr)]
        mem: Option<Vec<u32>>,
    },

    /// Disassemble a program image.
    Disasm {
        /// Hex program image.
        program: PathBuf,

        /// Use ABI register names instead of `$n`.
        #[arg(long)]
        abi: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            program,
            forwarding,
            config,
            max_cycles,
            regs,
            pipeline,
            mem,
        } => cmd_run(&RunArgs {
            program,
            forwarding,
            config,
            max_cycles,
            regs,
            pipeline,
            mem,
        }),
        Commands::Disasm { program, abi } => cmd_disasm(&program, abi),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr `tracing` subscriber.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_addr(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

struct RunArgs {
    program: PathBuf,
    forwarding: bool,
    config: Option<PathBuf>,
    max_cycles: Option<u64>,
    regs: bool,
    pipeline: bool,
    mem: Option<Vec<u32>>,
}

type CliResult = Result<ExitCode, Box<dyn std::error::Error>>;

/// Loads the program, runs it bounded, and prints the final state.
fn cmd_run(args: &RunArgs) -> CliResult {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.forwarding {
        config.general.forwarding = true;
    }
    if let Some(max) = args.max_cycles {
        config.general.max_cycles = max;
    }

    println!("[*] Program: {}", args.program.display());
    println!(
        "    Forwarding: {}  Max cycles: {}  Text base: {:#010x}",
        if config.general.forwarding { "on" } else { "off" },
        config.general.max_cycles,
        MEM_TEXT_BEGIN
    );

    let mut sim = Simulator::new(config);
    sim.load_program_file(&args.program)?;
    let summary = sim.run_to_completion()?;

    for diag in &summary.diagnostics {
        println!("[!] {diag}");
    }

    let state = sim.state();
    if summary.halted {
        println!("\n[*] Halted after {} cycles", sim.cycle());
    } else {
        println!(
            "\n[!] Cycle bound reached after {} cycles (PC {:#010x})",
            sim.cycle(),
            state.pc
        );
    }

    if args.regs {
        println!("\nREGISTERS");
        print!("{}", state.regs);
        println!("HI = {:#010x}   LO = {:#010x}", state.hi, state.lo);
    }

    if args.pipeline {
        print_latches(&sim.latches());
    }

    if let Some(range) = &args.mem {
        let (start, end) = match range.as_slice() {
            [start, end] => (*start, *end),
            _ => (MEM_DATA_BEGIN, MEM_DATA_BEGIN + 7 * WORD_BYTES),
        };
        println!("\nMEMORY [{start:#010x}, {end:#010x}]");
        for (addr, word) in sim.memory().dump(start & !3, end) {
            println!("  {addr:#010x}: {word:#010x}");
        }
    }

    sim.stats().print();

    Ok(if summary.halted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_BOUND_REACHED)
    })
}

fn print_latches(latches: &LatchSnapshot) {
    fn row(name: &str, entry: Option<(u32, String)>) {
        match entry {
            Some((pc, text)) => println!("  {name:<6} {pc:#010x}  {text}"),
            None => println!("  {name:<6} (bubble)"),
        }
    }
    println!("\nPIPELINE");
    row(
        "IF/ID",
        latches
            .if_id
            .entry
            .map(|e| (e.pc, disasm::disassemble(e.word))),
    );
    row(
        "ID/EX",
        latches.id_ex.entry.map(|e| (e.pc, e.inst.to_string())),
    );
    row(
        "EX/MEM",
        latches.ex_mem.entry.map(|e| (e.pc, e.inst.to_string())),
    );
    row(
        "MEM/WB",
        latches.mem_wb.entry.map(|e| (e.pc, e.inst.to_string())),
    );
}

/// Prints one line per word: address, raw word, disassembly.
fn cmd_disasm(program: &Path, abi: bool) -> CliResult {
    let words = loader::load_program_file(program)?;
    let mut addr = MEM_TEXT_BEGIN;
    for word in words {
        let text = if abi {
            disasm::disassemble_abi(word)
        } else {
            disasm::disassemble(word)
        };
        println!("{addr:#010x}:  {word:08x}  {text}");
        addr = addr.wrapping_add(WORD_BYTES);
    }
    Ok(ExitCode::SUCCESS)
}
