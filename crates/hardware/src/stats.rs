//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for a simulation session. It provides:
//! 1. **Instruction counts:** Total executed and a per-operation mix.
//! 2. **Saturation:** How many `ADD`/`SUB` results had to be clamped.
//! 3. **Runs:** Completed runs and automatic restarts after stepping past the end.

use serde::Serialize;

use crate::isa::instruction::Operation;

/// Execution statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions executed.
    pub instructions_executed: u64,
    /// Count of `MOV` instructions executed.
    pub inst_mov: u64,
    /// Count of `ADD` instructions executed.
    pub inst_add: u64,
    /// Count of `SUB` instructions executed.
    pub inst_sub: u64,
    /// Results clamped to 0 or 255.
    pub saturations: u64,
    /// Times the program ran through its last instruction.
    pub runs_completed: u64,
    /// Times a step past the end reset the registers and started over.
    pub restarts: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix"];

impl SimStats {
    /// Records one executed instruction.
    pub const fn record(&mut self, op: Operation, saturated: bool) {
        self.instructions_executed += 1;
        match op {
            Operation::Mov => self.inst_mov += 1,
            Operation::Add => self.inst_add += 1,
            Operation::Sub => self.inst_sub += 1,
        }
        if saturated {
            self.saturations += 1;
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an empty slice to
    /// print everything.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions_executed.max(1);
        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;

        if want("summary") {
            println!("\n==========================================================");
            println!("REGISTER SIMULATION STATISTICS");
            println!("==========================================================");
            println!("sim_insts                {}", self.instructions_executed);
            println!("sim_runs                 {}", self.runs_completed);
            println!("sim_restarts             {}", self.restarts);
            println!(
                "sim_saturations          {} ({:.2}%)",
                self.saturations,
                pct(self.saturations)
            );
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            println!("  op.mov                 {} ({:.2}%)", self.inst_mov, pct(self.inst_mov));
            println!("  op.add                 {} ({:.2}%)", self.inst_add, pct(self.inst_add));
            println!("  op.sub                 {} ({:.2}%)", self.inst_sub, pct(self.inst_sub));
            println!("==========================================================");
        }
    }

    /// Prints every section.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
