//! Simulator: owns the CPU, the program, and the execution cursor side-by-side.
//!
//! A [`Simulation`] is one interactive session. The front end edits the program through it,
//! asks it to step or run, and reads back register snapshots. Editing the program always
//! invalidates prior execution: the cursor returns to the first instruction and every
//! register is zeroed.

use serde::Serialize;

use crate::common::error::DecodeError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::gpr::RegisterFile;
use crate::core::arch::snapshot::RegisterSnapshot;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::sim::program::Program;
use crate::stats::SimStats;

/// Position of the execution cursor relative to the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExecutionState {
    /// Nothing executed since the last reset.
    Idle,
    /// Some, but not all, instructions executed.
    Running,
    /// The last instruction has executed.
    Completed,
}

/// Outcome of one executed instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// Index of the instruction that ran.
    pub executed_index: usize,
    /// The instruction that ran.
    pub instruction: Instruction,
    /// `true` if the result was clamped to 0 or 255.
    pub saturated: bool,
    /// Register state after the instruction.
    pub register_snapshot: RegisterSnapshot,
}

/// One simulation session.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    cpu: Cpu,
    program: Program,
    cursor: usize,
    stats: SimStats,
}

impl Simulation {
    /// Creates a session with an empty program and zeroed registers.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            program: Program::new(),
            cursor: 0,
            stats: SimStats::default(),
        }
    }

    /// Creates a session preloaded with `program`.
    pub fn with_program(config: &Config, program: Program) -> Self {
        let mut sim = Self::new(config);
        sim.program = program;
        sim
    }

    /// Appends a decoded instruction and resets execution.
    pub fn append_instruction(&mut self, inst: Instruction) {
        self.program.push(inst);
        tracing::debug!(instruction = %inst, len = self.program.len(), "appended");
        self.reset();
    }

    /// Decodes `line` and appends it.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] for a malformed line; the program and registers are
    /// left untouched in that case.
    pub fn append_line(&mut self, line: &str) -> Result<(), DecodeError> {
        let inst = decode(line)?;
        self.append_instruction(inst);
        Ok(())
    }

    /// Removes the last instruction and resets execution.
    ///
    /// # Returns
    ///
    /// `false` if the program was already empty.
    pub fn remove_last_instruction(&mut self) -> bool {
        let Some(inst) = self.program.pop() else {
            return false;
        };
        tracing::debug!(instruction = %inst, len = self.program.len(), "removed");
        self.reset();
        true
    }

    /// Replaces the whole program and resets execution.
    pub fn load_program(&mut self, program: Program) {
        tracing::debug!(len = program.len(), "program loaded");
        self.program = program;
        self.reset();
    }

    /// Empties the program and resets execution.
    pub fn clear_program(&mut self) {
        self.program.clear();
        self.reset();
    }

    /// Zeroes every register and rewinds the cursor to the first instruction.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cursor = 0;
    }

    /// Executes the instruction under the cursor and advances it.
    ///
    /// Stepping a completed program first resets the registers and starts over, then runs
    /// the first instruction in the same call.
    ///
    /// # Returns
    ///
    /// `None` if the program is empty.
    pub fn step(&mut self) -> Option<StepResult> {
        if self.program.is_empty() {
            return None;
        }
        if self.cursor == self.program.len() {
            tracing::debug!("stepped past the end; restarting");
            self.stats.restarts += 1;
            self.reset();
        }

        let executed_index = self.cursor;
        let instruction = self.program[executed_index];
        let result = self.cpu.execute(&instruction);
        self.stats.record(instruction.op, result.saturated);
        self.cursor += 1;

        if self.cursor == self.program.len() {
            self.stats.runs_completed += 1;
        }
        tracing::debug!(index = executed_index, instruction = %instruction, "step");

        Some(StepResult {
            executed_index,
            instruction,
            saturated: result.saturated,
            register_snapshot: self.snapshot(),
        })
    }

    /// Resets once, then executes every instruction in order.
    ///
    /// # Returns
    ///
    /// One result per executed instruction; empty for an empty program.
    pub fn run_to_completion(&mut self) -> Vec<StepResult> {
        self.reset();
        let mut results = Vec::with_capacity(self.program.len());
        while self.cursor < self.program.len() {
            let Some(result) = self.step() else {
                break;
            };
            results.push(result);
        }
        results
    }

    /// Rendered copy of the current register state.
    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot::capture(&self.cpu.regs)
    }

    /// Where the cursor stands relative to the program.
    pub fn state(&self) -> ExecutionState {
        if self.cursor == 0 {
            ExecutionState::Idle
        } else if self.cursor == self.program.len() {
            ExecutionState::Completed
        } else {
            ExecutionState::Running
        }
    }

    /// Index of the next instruction to execute.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.cpu.regs
    }

    /// Execution statistics for this session.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}
