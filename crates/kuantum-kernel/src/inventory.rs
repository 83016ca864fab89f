//! [`Inventory`] – insertion-ordered item list, plus the [`IdGenerator`] that
//! mints the identifiers it is keyed by.
//!
//! Lookups are linear scans.  The list grows one item per human keystroke, so
//! there is no index to keep in sync.

use kuantum_types::ItemId;

use crate::item::Item;

/// Hands out `NESNE-1`, `NESNE-2`, … in strictly increasing order.
///
/// # Example
///
/// ```
/// use kuantum_kernel::IdGenerator;
///
/// let mut ids = IdGenerator::new();
/// assert_eq!(ids.next_id().to_string(), "NESNE-1");
/// assert_eq!(ids.next_id().to_string(), "NESNE-2");
/// ```
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh identifier.  Never returns the same value twice.
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next);
        self.next += 1;
        id
    }
}

/// Ordered collection of [`Item`]s.  Items are never removed.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item`.  Uniqueness is the generator's job, not checked here.
    pub fn add(&mut self, item: Item) -> &Item {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// `describe()` of every item, in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.items.iter().map(Item::describe).collect()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuantum_types::ItemKind;

    #[test]
    fn ids_are_strictly_increasing_from_one() {
        let mut ids = IdGenerator::new();
        let minted: Vec<ItemId> = (0..50).map(|_| ids.next_id()).collect();
        assert_eq!(minted[0], ItemId::new(1));
        assert!(minted.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.next_id(), ItemId::new(51));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut inv = Inventory::new();
        inv.add(Item::new(ItemId::new(2), ItemKind::DarkMatter));
        inv.add(Item::new(ItemId::new(1), ItemKind::PassiveData));

        let lines = inv.list();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID: NESNE-2 "));
        assert!(lines[1].starts_with("ID: NESNE-1 "));
    }

    #[test]
    fn list_is_non_destructive() {
        let mut inv = Inventory::new();
        inv.add(Item::new(ItemId::new(1), ItemKind::AntiMatter));
        assert_eq!(inv.list(), inv.list());
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn find_returns_first_match_or_none() {
        let mut inv = Inventory::new();
        assert!(inv.is_empty());
        inv.add(Item::new(ItemId::new(1), ItemKind::AntiMatter));
        inv.add(Item::new(ItemId::new(2), ItemKind::PassiveData));

        assert_eq!(inv.find(ItemId::new(2)).map(Item::kind), Some(ItemKind::PassiveData));
        assert!(inv.find(ItemId::new(3)).is_none());
    }

    #[test]
    fn find_mut_mutates_in_place() {
        let mut inv = Inventory::new();
        inv.add(Item::new(ItemId::new(1), ItemKind::DarkMatter));
        inv.find_mut(ItemId::new(1)).unwrap().analyze().unwrap();
        assert_eq!(inv.find(ItemId::new(1)).unwrap().stability(), 85.0);
    }
}
