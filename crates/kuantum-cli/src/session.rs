//! Session – the vault's interactive control loop.
//!
//! Each iteration prints the control panel, reads one menu choice and
//! dispatches it against the [`Vault`]:
//!
//!   1  add a random object        4  emergency cooldown (prompts for an ID)
//!   2  list the inventory         5  exit
//!   3  analyze (prompts for an ID)
//!
//! Anything else is ignored and the panel is shown again.  The loop ends on
//! exit, on a stability collapse, when input runs out, or when the shutdown
//! flag is raised.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use kuantum_kernel::Vault;
use kuantum_types::{ItemId, VaultError};

use crate::fault_guard::FaultGuard;
use crate::render;

const DEFAULT_FAULT_THRESHOLD: usize = 3;

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The user chose Exit or pressed Ctrl-C.
    UserExit,
    /// An item's stability collapsed.
    SystemFailure { id: ItemId },
    /// Input ended, or the console kept failing.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Analyze,
    Cooldown,
    Exit,
}

impl MenuChoice {
    /// Map a menu line to a choice.  Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Analyze),
            "4" => Some(MenuChoice::Cooldown),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Unexpected console faults.  These are reported and the loop continues.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

enum Step {
    Continue,
    Exit(ExitReason),
}

enum Line {
    Text(String),
    Ended(ExitReason),
}

pub struct Session<R, W> {
    vault: Vault,
    input: R,
    output: W,
    guard: FaultGuard,
    shutdown: Arc<AtomicBool>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(vault: Vault, input: R, output: W) -> Self {
        Self {
            vault,
            input,
            output,
            guard: FaultGuard::new(DEFAULT_FAULT_THRESHOLD),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Number of consecutive unexpected faults tolerated before giving up.
    pub fn with_fault_threshold(mut self, threshold: usize) -> Self {
        self.guard = FaultGuard::new(threshold);
        self
    }

    /// Flag polled at the top of every iteration and after every line read;
    /// when set the session ends as if the user had chosen Exit.
    pub fn with_shutdown(mut self, shutdown: Arc<AtomicBool>) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive the loop until it terminates.
    pub fn run(&mut self) -> ExitReason {
        if let Err(e) = render::welcome(&mut self.output) {
            self.report_fault(&e.into());
        }

        loop {
            if self.shutdown.load(Ordering::SeqCst) {
                info!("shutdown requested");
                return ExitReason::UserExit;
            }

            match self.step() {
                Ok(Step::Continue) => self.guard.reset(),
                Ok(Step::Exit(reason)) => {
                    info!(?reason, items = self.vault.inventory().len(), "session ended");
                    return reason;
                }
                Err(e) => {
                    self.report_fault(&e);
                    if self.guard.record_fault() {
                        error!("too many consecutive console faults; closing session");
                        return ExitReason::InputClosed;
                    }
                }
            }
        }
    }

    fn step(&mut self) -> Result<Step, SessionError> {
        render::menu(&mut self.output)?;
        let line = match self.read_line()? {
            Line::Text(line) => line,
            Line::Ended(reason) => return Ok(Step::Exit(reason)),
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            debug!(input = %line, "ignoring unrecognized menu input");
            return Ok(Step::Continue);
        };

        match choice {
            MenuChoice::Add => self.cmd_add(),
            MenuChoice::List => self.cmd_list(),
            MenuChoice::Analyze => self.cmd_analyze(),
            MenuChoice::Cooldown => self.cmd_cooldown(),
            MenuChoice::Exit => {
                writeln!(self.output, "{}", "Exiting...".green())?;
                self.output.flush()?;
                Ok(Step::Exit(ExitReason::UserExit))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Command handlers
    // ─────────────────────────────────────────────────────────────────────

    fn cmd_add(&mut self) -> Result<Step, SessionError> {
        let item = self.vault.add_random();
        let (kind, id) = (item.kind(), item.id());
        writeln!(
            self.output,
            "{} added: {}",
            kind.to_string().bold(),
            id.to_string().yellow()
        )?;
        Ok(Step::Continue)
    }

    fn cmd_list(&mut self) -> Result<Step, SessionError> {
        render::inventory(&mut self.output, &self.vault.list())?;
        Ok(Step::Continue)
    }

    fn cmd_analyze(&mut self) -> Result<Step, SessionError> {
        render::prompt(&mut self.output, "ID to analyze: ")?;
        let id = match self.read_line()? {
            Line::Text(id) => id,
            Line::Ended(reason) => return Ok(Step::Exit(reason)),
        };

        match self.vault.analyze(&id) {
            Ok(analysis) => {
                if let Some(note) = analysis.note {
                    writeln!(self.output, "{}", note.italic())?;
                }
                writeln!(
                    self.output,
                    "Current stability: {}",
                    render::stability(analysis.stability).yellow()
                )?;
                Ok(Step::Continue)
            }
            Err(e) => self.handle_vault_error(e),
        }
    }

    fn cmd_cooldown(&mut self) -> Result<Step, SessionError> {
        render::prompt(&mut self.output, "ID to cool down: ")?;
        let id = match self.read_line()? {
            Line::Text(id) => id,
            Line::Ended(reason) => return Ok(Step::Exit(reason)),
        };

        match self.vault.cooldown(&id) {
            Ok(cooldown) => {
                writeln!(self.output, "{}", cooldown.message.green())?;
                Ok(Step::Continue)
            }
            Err(e) => self.handle_vault_error(e),
        }
    }

    /// User mistakes become plain messages; a collapse ends the session.
    fn handle_vault_error(&mut self, err: VaultError) -> Result<Step, SessionError> {
        match &err {
            &VaultError::Collapse { id } => {
                if let Err(e) = render::alarm(&mut self.output, &err.to_string()) {
                    warn!(error = %e, "failed to print collapse alarm");
                }
                Ok(Step::Exit(ExitReason::SystemFailure { id }))
            }
            VaultError::NotFound { .. } => {
                writeln!(self.output, "{}", "Object not found!".red())?;
                Ok(Step::Continue)
            }
            VaultError::NotCoolable { .. } => {
                writeln!(self.output, "{}", "This object cannot be cooled!".yellow())?;
                Ok(Step::Continue)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    /// Read one line, trimmed.  Ends the session on end of input, or when
    /// shutdown was requested while the read was blocked.
    fn read_line(&mut self) -> Result<Line, SessionError> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if self.shutdown.load(Ordering::SeqCst) {
            info!("shutdown requested during input; line discarded");
            return Ok(Line::Ended(ExitReason::UserExit));
        }
        if n == 0 {
            return Ok(Line::Ended(ExitReason::InputClosed));
        }
        Ok(Line::Text(line.trim().to_string()))
    }

    fn report_fault(&self, err: &SessionError) {
        error!(error = %err, "unexpected console fault");
        eprintln!("{} {}", "Unexpected error:".red(), err);
    }
}
