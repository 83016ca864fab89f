//! `kuantum-cli` – the `kuantum` terminal front end.
//!
//! - [`session`] – [`Session`][session::Session]: the menu-driven control loop
//!   over a [`Vault`][kuantum_kernel::Vault].
//! - [`render`] – console text (panel, listing, collapse alarm).
//! - [`fault_guard`] – [`FaultGuard`][fault_guard::FaultGuard]: bounds how many
//!   unexpected console faults in a row the loop tolerates.
//! - [`config`] – optional `~/.kuantum/config.toml` plus `KUANTUM_*` overrides.
//! - [`cli`] – command-line flags.
//! - [`logging`] – `tracing-subscriber` setup.

pub mod cli;
pub mod config;
pub mod fault_guard;
pub mod logging;
pub mod render;
pub mod session;

pub use session::{ExitReason, MenuChoice, Session, SessionError};
