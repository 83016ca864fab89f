//! Fixed capability table per [`ItemKind`].
//!
//! Unlike a runtime grant registry the table is static: a kind either holds a
//! [`Capability`] for the whole session or never does.  Callers consult
//! [`check`] before invoking a capability-gated operation and get a typed
//! rejection instead of attempting it.

use kuantum_types::{Capability, ItemId, ItemKind, VaultError};

/// Capabilities held by `kind`.
pub fn capabilities_of(kind: ItemKind) -> &'static [Capability] {
    match kind {
        ItemKind::PassiveData => &[],
        ItemKind::DarkMatter | ItemKind::AntiMatter => &[Capability::Critical],
    }
}

pub fn has_capability(kind: ItemKind, cap: Capability) -> bool {
    capabilities_of(kind).contains(&cap)
}

/// `true` when `kind` may be restored through an emergency cooldown.
pub fn supports_cooldown(kind: ItemKind) -> bool {
    has_capability(kind, Capability::Critical)
}

/// Return `Ok(())` when item `id` of `kind` holds `cap`, or the rejection
/// that matches the missing capability otherwise.
pub fn check(kind: ItemKind, cap: Capability, id: ItemId) -> Result<(), VaultError> {
    match cap {
        Capability::Critical if supports_cooldown(kind) => Ok(()),
        Capability::Critical => Err(VaultError::NotCoolable { id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passive_data_has_no_capabilities() {
        assert!(capabilities_of(ItemKind::PassiveData).is_empty());
        assert!(!supports_cooldown(ItemKind::PassiveData));
    }

    #[test]
    fn matter_kinds_are_critical() {
        assert!(supports_cooldown(ItemKind::DarkMatter));
        assert!(supports_cooldown(ItemKind::AntiMatter));
    }

    #[test]
    fn check_rejects_with_not_coolable() {
        let id = ItemId::new(4);
        assert_eq!(
            check(ItemKind::PassiveData, Capability::Critical, id),
            Err(VaultError::NotCoolable { id })
        );
        assert!(check(ItemKind::AntiMatter, Capability::Critical, id).is_ok());
    }
}
