//! Console text: welcome line, control panel, inventory listing and the
//! collapse alarm.  Everything writes to a caller-supplied [`Write`] so the
//! session can be driven against an in-memory buffer.

use colored::Colorize;
use std::io::{self, Write};

const ALARM_RULE: &str = "**************************************";

pub fn welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Welcome to the Omega Sector Quantum Data Vault...".bold().cyan()
    )
}

/// The five-option control panel followed by the choice prompt.
pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- QUANTUM VAULT CONTROL PANEL ---".bold())?;
    writeln!(out, "1. Add New Object")?;
    writeln!(out, "2. List Full Inventory")?;
    writeln!(out, "3. Analyze Object")?;
    writeln!(out, "4. Emergency Cooldown")?;
    writeln!(out, "5. Exit")?;
    prompt(out, "Your choice: ")
}

pub fn prompt(out: &mut impl Write, msg: &str) -> io::Result<()> {
    write!(out, "{}", msg.cyan())?;
    out.flush()
}

pub fn inventory(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- INVENTORY STATUS ---".bold())?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Format a stability value the way every screen shows it: `%85.00`.
pub fn stability(value: f64) -> String {
    format!("%{value:.2}")
}

/// Framed, uppercased failure banner.
pub fn alarm(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", ALARM_RULE.red().bold())?;
    writeln!(out, "{}", message.to_uppercase().red().bold())?;
    writeln!(out, "{}", ALARM_RULE.red().bold())?;
    out.flush()
}
