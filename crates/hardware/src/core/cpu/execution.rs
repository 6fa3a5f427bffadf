//! Instruction Execution.
//!
//! This module applies one decoded instruction to the register file. It performs the following:
//! 1. **Operand Fetch:** Reads the destination and resolves the source to a byte value.
//! 2. **ALU Dispatch:** Computes the result with saturating arithmetic.
//! 3. **Write Back:** Stores the result in the destination byte register.
//! 4. **Observability:** Traces the change, including the owning wide register.
//!
//! Execution cannot fail: every check happened when the instruction was decoded.

use super::Cpu;
use crate::core::units::alu::{Alu, AluResult};
use crate::isa::instruction::{Instruction, Operand};

impl Cpu {
    /// Resolves a source operand to its current byte value.
    #[inline]
    pub const fn operand_value(&self, src: Operand) -> u8 {
        match src {
            Operand::Register(reg) => self.regs.read_byte(reg),
            Operand::Literal(val) => val,
        }
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The ALU result that was written to the destination register.
    pub fn execute(&mut self, inst: &Instruction) -> AluResult {
        let old = self.regs.read_byte(inst.dest);
        let operand = self.operand_value(inst.src);
        let result = Alu::execute(inst.op, old, operand);
        self.regs.write_byte(inst.dest, result.value);

        let wide = inst.dest.owner();
        if self.trace {
            tracing::info!(
                "{inst} ; {}:{old:#x}->{:#x} {wide}:{:#x}{}",
                inst.dest,
                result.value,
                self.regs.read_wide(wide),
                if result.saturated { " (clamped)" } else { "" }
            );
        } else {
            tracing::trace!(
                instruction = %inst,
                old,
                new = result.value,
                wide = self.regs.read_wide(wide),
                saturated = result.saturated,
                "executed"
            );
        }
        result
    }
}
