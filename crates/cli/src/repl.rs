//! Interactive program editor.
//!
//! A line-oriented stand-in for a graphical editor. Each input line is one command:
//!
//! ```text
//! add OP DEST, SRC   append an instruction
//! del                delete the last instruction
//! list               show the program, marking the next instruction
//! step               execute one instruction
//! run                reset and run to completion
//! regs               show all registers
//! clear              delete every instruction
//! load PATH          replace the program with a file
//! save PATH          write the program to a file
//! stats              show execution statistics
//! help               show this list
//! quit               leave the editor
//! ```

use std::io::{self, BufRead, Write};

use regsim_core::Simulation;
use regsim_core::common::RegisterName;
use regsim_core::sim::StepResult;
use regsim_core::sim::loader;

const HELP: &str = "\
commands:
  add OP DEST, SRC   append an instruction (e.g. `add ADD AL, 10`)
  del                delete the last instruction
  list               show the program
  step               execute one instruction
  run                reset and run to completion
  regs               show all registers
  clear              delete every instruction
  load PATH          replace the program with a file
  save PATH          write the program to a file
  stats              show execution statistics
  help               show this list
  quit               leave the editor";

/// Runs the editor until `quit` or end of input.
///
/// Command errors are reported on `out` and do not end the session.
pub fn run(sim: &mut Simulation, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "regsim editor; `help` lists commands")?;
    for line in input.lines() {
        let line = line?;
        let (cmd, arg) = match line.trim().split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line.trim(), ""),
        };
        tracing::debug!(cmd, arg, "editor command");

        match cmd.to_ascii_lowercase().as_str() {
            "" => {}
            "add" => match sim.append_line(arg) {
                Ok(()) => {
                    let len = sim.program().len();
                    writeln!(out, "{len:>3} {}", sim.program()[len - 1])?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "del" => {
                if !sim.remove_last_instruction() {
                    writeln!(out, "program is empty")?;
                }
            }
            "list" => write_listing(sim, &mut out)?,
            "step" => match sim.step() {
                Some(result) => {
                    writeln!(out, "[{:>3}] {}", result.executed_index + 1, result.instruction)?;
                    write!(out, "{}", format_changed(&result))?;
                }
                None => writeln!(out, "program is empty")?,
            },
            "run" => {
                let executed = sim.run_to_completion().len();
                writeln!(out, "executed {executed} instructions")?;
                write!(out, "{}", sim.snapshot())?;
            }
            "regs" => write!(out, "{}", sim.snapshot())?,
            "clear" => sim.clear_program(),
            "load" => match loader::load_program(arg) {
                Ok(program) => {
                    sim.load_program(program);
                    writeln!(out, "loaded {} instructions", sim.program().len())?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "save" => match loader::save_program(arg, sim.program()) {
                Ok(()) => writeln!(out, "saved {} instructions", sim.program().len())?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "stats" => writeln!(out, "{}", serde_json::to_string_pretty(sim.stats())?)?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command `{other}`; try `help`")?,
        }
    }
    out.flush()
}

fn write_listing(sim: &Simulation, out: &mut impl Write) -> io::Result<()> {
    for (idx, inst) in sim.program().iter().enumerate() {
        let marker = if idx == sim.cursor() { '>' } else { ' ' };
        writeln!(out, "{marker}{:>3} {inst}", idx + 1)?;
    }
    Ok(())
}

/// Formats the destination register of a step and its owning wide register.
pub fn format_changed(result: &StepResult) -> String {
    let dest = result.instruction.dest;
    [RegisterName::from(dest), RegisterName::from(dest.owner())]
        .into_iter()
        .filter_map(|name| result.register_snapshot.get(name))
        .map(|v| format!("      {:<3}{:>18} {:>6} {:>7}\n", v.name, v.bin, v.dec, v.hex))
        .collect()
}
