use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Prefix shared by every identifier handed out by the vault.
pub const ID_PREFIX: &str = "NESNE-";

/// Identifier of a single inventory item, rendered as `NESNE-{n}`.
///
/// Parsing is strict: the prefix must match exactly and the number must be a
/// positive decimal without sign or leading zeros, so `"NESNE-03"` does not
/// resolve to `NESNE-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(n: u64) -> Self {
        Self(n)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_found = || VaultError::NotFound { id: s.to_string() };
        let digits = s.strip_prefix(ID_PREFIX).ok_or_else(not_found)?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(not_found());
        }
        digits.parse::<u64>().map(ItemId).map_err(|_| not_found())
    }
}

/// The three object kinds the vault can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    PassiveData,
    DarkMatter,
    AntiMatter,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [
        ItemKind::PassiveData,
        ItemKind::DarkMatter,
        ItemKind::AntiMatter,
    ];

    /// Display-only severity tag.
    pub fn danger_level(self) -> u8 {
        match self {
            ItemKind::PassiveData => 1,
            ItemKind::DarkMatter => 5,
            ItemKind::AntiMatter => 10,
        }
    }

    /// Stability change applied by a single analysis.
    pub fn analyze_delta(self) -> f64 {
        match self {
            ItemKind::PassiveData => -5.0,
            ItemKind::DarkMatter => -15.0,
            ItemKind::AntiMatter => -25.0,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::PassiveData => write!(f, "PassiveData"),
            ItemKind::DarkMatter => write!(f, "DarkMatter"),
            ItemKind::AntiMatter => write!(f, "AntiMatter"),
        }
    }
}

/// Operations an item kind may opt into beyond the common analyze/describe set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The kind can be restored through an emergency cooldown.
    Critical,
}

/// Every failure the vault can report.
///
/// Only [`VaultError::Collapse`] is fatal to a session; the other variants are
/// expected user mistakes and are reported as plain messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VaultError {
    #[error("SYSTEM CRASHED! INITIATING EVACUATION... (exploded object ID: {id})")]
    Collapse { id: ItemId },

    #[error("Object not found: {id}")]
    NotFound { id: String },

    #[error("Object {id} cannot be cooled")]
    NotCoolable { id: ItemId },
}

impl VaultError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, VaultError::Collapse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_display_uses_prefix() {
        assert_eq!(ItemId::new(1).to_string(), "NESNE-1");
        assert_eq!(ItemId::new(42).to_string(), "NESNE-42");
    }

    #[test]
    fn item_id_parses_canonical_form() {
        assert_eq!("NESNE-7".parse::<ItemId>(), Ok(ItemId::new(7)));
        assert_eq!("NESNE-120".parse::<ItemId>(), Ok(ItemId::new(120)));
    }

    #[test]
    fn item_id_rejects_non_canonical_forms() {
        for raw in ["", "NESNE-", "NESNE-0", "NESNE-03", "NESNE-+3", "nesne-3", "NESNE-3a", "3"] {
            assert!(
                matches!(raw.parse::<ItemId>(), Err(VaultError::NotFound { .. })),
                "{raw:?} must not parse"
            );
        }
    }

    #[test]
    fn kind_table_matches_danger_and_deltas() {
        assert_eq!(ItemKind::PassiveData.danger_level(), 1);
        assert_eq!(ItemKind::DarkMatter.danger_level(), 5);
        assert_eq!(ItemKind::AntiMatter.danger_level(), 10);

        assert_eq!(ItemKind::PassiveData.analyze_delta(), -5.0);
        assert_eq!(ItemKind::DarkMatter.analyze_delta(), -15.0);
        assert_eq!(ItemKind::AntiMatter.analyze_delta(), -25.0);
    }

    #[test]
    fn collapse_message_names_the_item() {
        let err = VaultError::Collapse { id: ItemId::new(3) };
        let msg = err.to_string();
        assert!(msg.contains("SYSTEM CRASHED! INITIATING EVACUATION..."));
        assert!(msg.contains("NESNE-3"));
        assert!(err.is_fatal());
    }

    #[test]
    fn user_errors_are_not_fatal() {
        assert!(!VaultError::NotFound { id: "x".into() }.is_fatal());
        assert!(!VaultError::NotCoolable { id: ItemId::new(1) }.is_fatal());
    }
}
