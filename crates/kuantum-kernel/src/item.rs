//! [`Item`] – one inventory entry, tagged by [`ItemKind`].
//!
//! The per-kind rules (analysis delta, cooldown message, flavour notes) are
//! dispatched on the tag.  Whether a cooldown is allowed is decided by the
//! [`capability`](crate::capability) table, never by inspecting the value.

use kuantum_types::{Capability, ItemId, ItemKind, VaultError};
use tracing::{debug, warn};

use crate::capability;
use crate::stability::Stability;

/// Stability restored by one emergency cooldown.
pub const COOLDOWN_DELTA: f64 = 50.0;

/// Result of a successful [`Item::analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub stability: f64,
    /// Flavour line some kinds print when they are read.
    pub note: Option<&'static str>,
}

/// Result of a successful [`Item::cooldown`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cooldown {
    pub stability: f64,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    kind: ItemKind,
    stability: Stability,
}

impl Item {
    /// A fresh item at full stability.
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            stability: Stability::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn danger_level(&self) -> u8 {
        self.kind.danger_level()
    }

    pub fn stability(&self) -> f64 {
        self.stability.get()
    }

    /// One-line status: id, stability to two decimals, danger level.
    pub fn describe(&self) -> String {
        format!(
            "ID: {} | Stability: %{:.2} | Danger: {}",
            self.id,
            self.stability.get(),
            self.danger_level()
        )
    }

    /// Apply the kind's analysis delta.
    ///
    /// # Errors
    ///
    /// [`VaultError::Collapse`] when the analysis drains the item.
    pub fn analyze(&mut self) -> Result<Analysis, VaultError> {
        let stability = self.stability.adjust(self.kind.analyze_delta(), self.id)?;
        debug!(item = %self.id, kind = %self.kind, stability, "analyzed");
        Ok(Analysis {
            stability,
            note: analysis_note(self.kind),
        })
    }

    /// Restore [`COOLDOWN_DELTA`] stability on a critical kind.
    ///
    /// # Errors
    ///
    /// - [`VaultError::NotCoolable`] – the kind lacks [`Capability::Critical`];
    ///   the item is left untouched.
    /// - [`VaultError::Collapse`] – unreachable from a valid stability, kept
    ///   because the write goes through the same setter.
    pub fn cooldown(&mut self) -> Result<Cooldown, VaultError> {
        if let Err(e) = capability::check(self.kind, Capability::Critical, self.id) {
            warn!(item = %self.id, kind = %self.kind, "cooldown rejected");
            return Err(e);
        }
        let Some(message) = cooldown_message(self.kind, self.id) else {
            return Err(VaultError::NotCoolable { id: self.id });
        };
        let stability = self.stability.adjust(COOLDOWN_DELTA, self.id)?;
        debug!(item = %self.id, kind = %self.kind, stability, "cooled down");
        Ok(Cooldown { stability, message })
    }
}

fn analysis_note(kind: ItemKind) -> Option<&'static str> {
    match kind {
        ItemKind::PassiveData => Some("Data contents read."),
        ItemKind::DarkMatter => None,
        ItemKind::AntiMatter => Some("The fabric of the universe trembles..."),
    }
}

fn cooldown_message(kind: ItemKind, id: ItemId) -> Option<String> {
    match kind {
        ItemKind::PassiveData => None,
        ItemKind::DarkMatter => Some(format!("{id} cooled down. Stability restored.")),
        ItemKind::AntiMatter => Some(format!("Critical cooldown performed on {id}!")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ItemKind) -> Item {
        Item::new(ItemId::new(1), kind)
    }

    #[test]
    fn new_item_is_full_and_describes_itself() {
        let it = item(ItemKind::AntiMatter);
        assert_eq!(it.stability(), 100.0);
        assert_eq!(it.describe(), "ID: NESNE-1 | Stability: %100.00 | Danger: 10");
    }

    #[test]
    fn analyze_applies_same_delta_every_call() {
        for kind in ItemKind::ALL {
            let mut it = item(kind);
            let first = it.analyze().unwrap().stability;
            let second = it.analyze().unwrap().stability;
            assert_eq!(100.0 - first, -kind.analyze_delta());
            assert_eq!(first - second, -kind.analyze_delta());
            assert!(second < first);
        }
    }

    #[test]
    fn analyze_notes_follow_kind() {
        assert_eq!(item(ItemKind::PassiveData).analyze().unwrap().note, Some("Data contents read."));
        assert_eq!(item(ItemKind::DarkMatter).analyze().unwrap().note, None);
        assert_eq!(
            item(ItemKind::AntiMatter).analyze().unwrap().note,
            Some("The fabric of the universe trembles...")
        );
    }

    #[test]
    fn passive_data_collapses_on_twentieth_analysis() {
        let mut it = item(ItemKind::PassiveData);
        for _ in 0..19 {
            it.analyze().unwrap();
        }
        assert_eq!(it.stability(), 5.0);
        assert_eq!(format!("{:.2}", it.stability()), "5.00");

        let err = it.analyze().unwrap_err();
        assert_eq!(err, VaultError::Collapse { id: ItemId::new(1) });
        assert_eq!(it.stability(), 0.0);
    }

    #[test]
    fn anti_matter_collapses_on_fourth_analysis() {
        let mut it = item(ItemKind::AntiMatter);
        for expected in [75.0, 50.0, 25.0] {
            assert_eq!(it.analyze().unwrap().stability, expected);
        }
        assert!(it.analyze().unwrap_err().is_fatal());
    }

    #[test]
    fn dark_matter_analyze_then_cooldown_clamps() {
        let mut it = item(ItemKind::DarkMatter);
        assert_eq!(it.analyze().unwrap().stability, 85.0);
        let cooled = it.cooldown().unwrap();
        assert_eq!(cooled.stability, 100.0);
        assert_eq!(cooled.message, "NESNE-1 cooled down. Stability restored.");
        assert!(it.describe().contains("%100.00"));
    }

    #[test]
    fn anti_matter_cooldown_at_full_clamps_to_max() {
        let mut it = item(ItemKind::AntiMatter);
        let cooled = it.cooldown().unwrap();
        assert_eq!(cooled.stability, 100.0);
        assert_eq!(cooled.message, "Critical cooldown performed on NESNE-1!");
    }

    #[test]
    fn cooldown_restores_partially_drained_item() {
        let mut it = item(ItemKind::AntiMatter);
        it.analyze().unwrap();
        it.analyze().unwrap();
        it.analyze().unwrap();
        assert_eq!(it.cooldown().unwrap().stability, 75.0);
    }

    #[test]
    fn passive_data_cooldown_is_rejected_without_mutation() {
        let mut it = item(ItemKind::PassiveData);
        it.analyze().unwrap();
        let before = it.stability();
        assert_eq!(
            it.cooldown(),
            Err(VaultError::NotCoolable { id: ItemId::new(1) })
        );
        assert_eq!(it.stability(), before);
    }

    #[test]
    fn only_critical_kinds_have_a_cooldown_message() {
        let id = ItemId::new(9);
        for kind in ItemKind::ALL {
            assert_eq!(
                cooldown_message(kind, id).is_some(),
                capability::supports_cooldown(kind),
                "{kind}"
            );
        }
    }
}
