//! Program storage.
//!
//! A [`Program`] is an ordered list of decoded instructions that only grows at the end and
//! only shrinks from the end.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::isa::instruction::Instruction;

/// An ordered, stack-like sequence of instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Creates an empty program.
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Appends an instruction at the end.
    pub fn push(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    /// Removes and returns the last instruction.
    pub fn pop(&mut self) -> Option<Instruction> {
        self.instructions.pop()
    }

    /// Removes every instruction.
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<&Instruction> {
        self.instructions.get(idx)
    }

    /// Iterates over the instructions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Renders the program as text, one canonical line per instruction, joined with `\n`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, idx: usize) -> &Instruction {
        &self.instructions[idx]
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, inst) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{inst}")?;
        }
        Ok(())
    }
}
