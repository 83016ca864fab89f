//! [`KindSource`] – where the kind of a newly added object comes from.
//!
//! Production sessions draw uniformly at random through [`RandomKinds`];
//! tests and replays use [`ScriptedKinds`] to get a fixed sequence.

use kuantum_types::ItemKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait KindSource {
    /// Kind of the next object to add.
    fn next_kind(&mut self) -> ItemKind;
}

/// Uniform draw over [`ItemKind::ALL`].
pub struct RandomKinds {
    rng: StdRng,
}

impl RandomKinds {
    /// Seeded from the operating system; different on every run.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl KindSource for RandomKinds {
    fn next_kind(&mut self) -> ItemKind {
        ItemKind::ALL[self.rng.random_range(0..ItemKind::ALL.len())]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end.
///
/// # Example
///
/// ```
/// use kuantum_kernel::{KindSource, ScriptedKinds};
/// use kuantum_types::ItemKind;
///
/// let mut kinds = ScriptedKinds::new(vec![ItemKind::DarkMatter, ItemKind::PassiveData]);
/// assert_eq!(kinds.next_kind(), ItemKind::DarkMatter);
/// assert_eq!(kinds.next_kind(), ItemKind::PassiveData);
/// assert_eq!(kinds.next_kind(), ItemKind::DarkMatter);
/// ```
pub struct ScriptedKinds {
    kinds: Vec<ItemKind>,
    cursor: usize,
}

impl ScriptedKinds {
    /// An empty script falls back to [`ItemKind::PassiveData`].
    pub fn new(kinds: Vec<ItemKind>) -> Self {
        Self { kinds, cursor: 0 }
    }

    pub fn always(kind: ItemKind) -> Self {
        Self::new(vec![kind])
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> ItemKind {
        if self.kinds.is_empty() {
            return ItemKind::PassiveData;
        }
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor += 1;
        kind
    }
}
