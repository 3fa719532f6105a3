use mipsim_core::common::constants::{MEM_TEXT_BEGIN, WORD_BYTES};
use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::soc::System;

/// Installs a test-writer `tracing` subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A bare CPU for driving individual stages or a few cycles by hand.
pub struct TestContext {
    pub cpu: Cpu,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        let system = System::new(&config.memory);
        Self {
            cpu: Cpu::new(system, config),
        }
    }

    pub fn forwarding(mut self, enabled: bool) -> Self {
        self.cpu.forwarding = enabled;
        self
    }

    /// Load a sequence of instruction words at the text base.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        self.cpu.bus.load_words(MEM_TEXT_BEGIN, instructions);
        self
    }

    /// Address of the `n`th instruction of the program.
    pub fn pc_of(n: u32) -> u32 {
        MEM_TEXT_BEGIN + n * WORD_BYTES
    }

    /// Set a general-purpose register in committed and next state.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.cpu.current.regs.write(reg, val);
        self.cpu.next.regs.write(reg, val);
    }

    /// Read a committed general-purpose register.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.cpu.current.regs.read(reg)
    }

    /// Run the CPU for up to `cycles` cycles, stopping on halt.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            if self.cpu.halted {
                break;
            }
            self.cpu.tick();
        }
    }

    /// Run until halt, panicking if `limit` cycles pass first.
    pub fn run_to_halt(&mut self, limit: u64) {
        self.run(limit);
        assert!(self.cpu.halted, "program did not halt within {limit} cycles");
    }
}
