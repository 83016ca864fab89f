//! [`FaultGuard`] – stops the session from spinning on a broken console.
//!
//! Unexpected faults (a failed read or write on the terminal) are reported
//! and the loop carries on.  If the same console keeps failing, every
//! iteration would fail again, so the guard counts consecutive faults and
//! trips once `threshold` is reached.  Any healthy iteration clears it.
//!
//! ```text
//! fault → fault → ok → fault → fault → fault   (threshold 3)
//!   1       2     0     1       2       3 → tripped
//! ```

pub struct FaultGuard {
    threshold: usize,
    consecutive: usize,
}

impl FaultGuard {
    /// `threshold` of 0 is treated as 1: the first fault trips the guard.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
            consecutive: 0,
        }
    }

    /// Record one fault.  Returns `true` when the guard has tripped.
    pub fn record_fault(&mut self) -> bool {
        self.consecutive += 1;
        self.is_tripped()
    }

    /// Record a healthy iteration.
    pub fn reset(&mut self) {
        self.consecutive = 0;
    }

    pub fn is_tripped(&self) -> bool {
        self.consecutive >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_at_threshold() {
        let mut guard = FaultGuard::new(3);
        assert!(!guard.record_fault());
        assert!(!guard.record_fault());
        assert!(guard.record_fault());
    }

    #[test]
    fn healthy_iteration_resets() {
        let mut guard = FaultGuard::new(2);
        assert!(!guard.record_fault());
        guard.reset();
        assert!(!guard.record_fault());
        assert!(guard.record_fault());
    }

    #[test]
    fn zero_threshold_trips_on_first_fault() {
        let mut guard = FaultGuard::new(0);
        assert!(!guard.is_tripped());
        assert!(guard.record_fault());
    }
}
