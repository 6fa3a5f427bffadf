//! Register snapshots for rendering.
//!
//! A [`RegisterSnapshot`] is a detached copy of the register file formatted the way a
//! front end displays it: binary, decimal, and hexadecimal for each of the twelve names.

use std::fmt;

use serde::Serialize;

use super::gpr::RegisterFile;
use crate::common::reg::RegisterName;

/// One rendered register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterView {
    /// Register name.
    pub name: RegisterName,
    /// Zero-padded binary, 8 digits for byte registers and 16 for wide registers.
    pub bin: String,
    /// Decimal value.
    pub dec: u16,
    /// Lower-case hexadecimal with a `0x` prefix and no padding.
    pub hex: String,
}

impl RegisterView {
    fn new(name: RegisterName, value: u16) -> Self {
        let width = name.bits() as usize;
        Self {
            name,
            bin: format!("{value:0width$b}"),
            dec: value,
            hex: format!("{value:#x}"),
        }
    }
}

/// Rendered state of all twelve registers, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegisterSnapshot {
    views: Vec<RegisterView>,
}

impl RegisterSnapshot {
    /// Captures the current contents of `regs`.
    pub fn capture(regs: &RegisterFile) -> Self {
        Self {
            views: RegisterName::ALL
                .into_iter()
                .map(|name| RegisterView::new(name, regs.read(name)))
                .collect(),
        }
    }

    /// Looks up one register.
    pub fn get(&self, name: impl Into<RegisterName>) -> Option<&RegisterView> {
        let name = name.into();
        self.views.iter().find(|v| v.name == name)
    }

    /// Iterates over all registers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisterView> {
        self.views.iter()
    }
}

impl fmt::Display for RegisterSnapshot {
    /// Renders a table with byte registers indented under their wide register.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10}{:<20}{:<8}HEX", "REGISTER", "BIN", "DEC")?;
        for view in &self.views {
            let label = match view.name {
                RegisterName::Wide(_) => view.name.to_string(),
                RegisterName::Byte(_) => format!("  {}", view.name),
            };
            writeln!(f, "{:<10}{:<20}{:<8}{}", label, view.bin, view.dec, view.hex)?;
        }
        Ok(())
    }
}
