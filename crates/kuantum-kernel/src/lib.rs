//! `kuantum-kernel` – Vault state and rules
//!
//! Everything the control loop mutates lives here. The kernel never touches
//! the console; it returns values and [`VaultError`][kuantum_types::VaultError]s
//! and leaves rendering to the caller.
//!
//! # Modules
//!
//! - [`stability`] – [`Stability`][stability::Stability]: the clamped
//!   `[0, 100]` health value whose setter reports a collapse instead of ever
//!   going non-positive.
//! - [`capability`] – the fixed capability table per
//!   [`ItemKind`][kuantum_types::ItemKind], and the check that gates cooldowns.
//! - [`item`] – [`Item`][item::Item]: one tagged inventory entry with its
//!   analyze and cooldown rules.
//! - [`inventory`] – [`Inventory`][inventory::Inventory] and
//!   [`IdGenerator`][inventory::IdGenerator].
//! - [`kind_source`] – [`KindSource`][kind_source::KindSource]: the injectable
//!   randomness used when a new object is added.
//! - [`vault`] – [`Vault`][vault::Vault]: the single context object a session
//!   owns, tying the pieces above together.

pub mod capability;
pub mod inventory;
pub mod item;
pub mod kind_source;
pub mod stability;
pub mod vault;

pub use capability::supports_cooldown;
pub use inventory::{IdGenerator, Inventory};
pub use item::{Analysis, Cooldown, Item};
pub use kind_source::{KindSource, RandomKinds, ScriptedKinds};
pub use stability::Stability;
pub use vault::Vault;
