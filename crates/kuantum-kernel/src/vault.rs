//! [`Vault`] – the session's single piece of mutable state.
//!
//! Bundles the [`Inventory`], the [`IdGenerator`] and a [`KindSource`] so the
//! control loop owns exactly one value and nothing lives in globals.

use kuantum_types::{ItemId, VaultError};
use tracing::{error, info};

use crate::inventory::{IdGenerator, Inventory};
use crate::item::{Analysis, Cooldown, Item};
use crate::kind_source::KindSource;

/// # Example
///
/// ```
/// use kuantum_kernel::{ScriptedKinds, Vault};
/// use kuantum_types::ItemKind;
///
/// let mut vault = Vault::new(Box::new(ScriptedKinds::always(ItemKind::DarkMatter)));
/// let id = vault.add_random().id();
///
/// assert_eq!(vault.analyze("NESNE-1").unwrap().stability, 85.0);
/// assert_eq!(vault.cooldown(&id.to_string()).unwrap().stability, 100.0);
/// assert!(vault.analyze("NESNE-2").is_err());
/// ```
pub struct Vault {
    inventory: Inventory,
    ids: IdGenerator,
    kinds: Box<dyn KindSource>,
}

impl Vault {
    /// An empty vault whose first item will be `NESNE-1`.
    pub fn new(kinds: Box<dyn KindSource>) -> Self {
        Self {
            inventory: Inventory::new(),
            ids: IdGenerator::new(),
            kinds,
        }
    }

    /// Draw a kind, mint an identifier and store the new item.
    pub fn add_random(&mut self) -> &Item {
        let kind = self.kinds.next_kind();
        let id = self.ids.next_id();
        info!(item = %id, %kind, "object added");
        self.inventory.add(Item::new(id, kind))
    }

    pub fn list(&self) -> Vec<String> {
        self.inventory.list()
    }

    /// Resolve a user-typed identifier.
    pub fn find(&self, raw_id: &str) -> Option<&Item> {
        let id = raw_id.parse::<ItemId>().ok()?;
        self.inventory.find(id)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Analyze the item named by `raw_id`.
    ///
    /// # Errors
    ///
    /// - [`VaultError::NotFound`] – no such item; nothing changes.
    /// - [`VaultError::Collapse`] – the item's stability ran out.
    pub fn analyze(&mut self, raw_id: &str) -> Result<Analysis, VaultError> {
        let item = self.lookup_mut(raw_id)?;
        let id = item.id();
        item.analyze().inspect_err(|e| {
            if e.is_fatal() {
                error!(item = %id, "stability collapse");
            }
        })
    }

    /// Cool down the item named by `raw_id`.
    ///
    /// # Errors
    ///
    /// - [`VaultError::NotFound`] – no such item.
    /// - [`VaultError::NotCoolable`] – the item's kind lacks the critical
    ///   capability; nothing changes.
    pub fn cooldown(&mut self, raw_id: &str) -> Result<Cooldown, VaultError> {
        self.lookup_mut(raw_id)?.cooldown()
    }

    fn lookup_mut(&mut self, raw_id: &str) -> Result<&mut Item, VaultError> {
        let not_found = || VaultError::NotFound {
            id: raw_id.to_string(),
        };
        let id = raw_id.parse::<ItemId>().map_err(|_| not_found())?;
        self.inventory.find_mut(id).ok_or_else(not_found)
    }
}
