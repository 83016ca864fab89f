//! [`Stability`] – bounded health value with a terminal failure transition.
//!
//! Every write goes through [`Stability::set`], which clamps to
//! `[MIN, MAX]`.  A write that would land at or below zero pins the value to
//! zero and returns [`VaultError::Collapse`] for the owning item, so callers
//! never observe a non-positive stability without also receiving the error.

use kuantum_types::{ItemId, VaultError};
use tracing::debug;

/// Upper bound of the stability range.
pub const MAX: f64 = 100.0;
/// Lower bound of the stability range; reaching it is a collapse.
pub const MIN: f64 = 0.0;

/// Clamped stability value, starting at [`MAX`].
///
/// # Example
///
/// ```
/// use kuantum_kernel::Stability;
/// use kuantum_types::{ItemId, VaultError};
///
/// let id = ItemId::new(1);
/// let mut s = Stability::default();
///
/// assert_eq!(s.set(140.0, id), Ok(100.0));
/// assert_eq!(s.set(12.5, id), Ok(12.5));
/// assert_eq!(s.set(-3.0, id), Err(VaultError::Collapse { id }));
/// assert_eq!(s.get(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stability {
    value: f64,
}

impl Default for Stability {
    fn default() -> Self {
        Self { value: MAX }
    }
}

impl Stability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, always within `[MIN, MAX]`.
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Store `value`, clamped to the valid range.
    ///
    /// Returns the stored value, or [`VaultError::Collapse`] carrying `owner`
    /// when `value <= 0`.  NaN is not above zero and therefore collapses.
    pub fn set(&mut self, value: f64, owner: ItemId) -> Result<f64, VaultError> {
        if value.is_nan() || value <= MIN {
            self.value = MIN;
            debug!(item = %owner, requested = value, "stability depleted");
            return Err(VaultError::Collapse { id: owner });
        }
        self.value = value.min(MAX);
        debug!(item = %owner, requested = value, stored = self.value, "stability set");
        Ok(self.value)
    }

    /// Shift the current value by `delta` through [`Stability::set`].
    pub fn adjust(&mut self, delta: f64, owner: ItemId) -> Result<f64, VaultError> {
        self.set(self.value + delta, owner)
    }
}
