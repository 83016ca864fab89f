//! `kuantum` – Omega Sector quantum data vault
//!
//! 1. Parses flags, installs logging and resolves configuration
//!    (file → `KUANTUM_*` environment → flags).
//! 2. Installs a Ctrl-C handler that asks the session to stop.
//! 3. Runs the interactive [`Session`] on stdin/stdout until the user exits
//!    or an object's stability collapses.

use colored::Colorize;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use kuantum_cli::cli::Cli;
use kuantum_cli::{Session, logging};
use kuantum_kernel::{KindSource, RandomKinds, Vault};

fn main() -> ExitCode {
    let args = Cli::parse_args();
    logging::init_tracing();

    let cfg = args.resolve_config();
    if !cfg.color {
        colored::control::set_override(false);
    }

    // ── Ctrl-C handler ────────────────────────────────────────────────────
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        println!();
        println!("{}", "⚠  Ctrl-C received – press Enter to leave the vault.".yellow().bold());
        shutdown_clone.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %e, "Failed to install Ctrl-C handler");
    }

    let kinds: Box<dyn KindSource> = match cfg.seed {
        Some(seed) => {
            info!(seed, "using seeded object generator");
            Box::new(RandomKinds::seeded(seed))
        }
        None => Box::new(RandomKinds::from_entropy()),
    };

    let stdin = io::stdin();
    let mut session = Session::new(Vault::new(kinds), stdin.lock(), io::stdout())
        .with_fault_threshold(cfg.max_consecutive_faults)
        .with_shutdown(shutdown);

    let reason = session.run();
    debug!(?reason, "exiting");
    ExitCode::SUCCESS
}
