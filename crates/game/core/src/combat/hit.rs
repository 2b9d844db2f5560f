//! Percentage roll checks.
//!
//! Rolls are uniform in `[0, 100)`.

/// A crit lands when the roll is below the crit stat.
pub fn is_critical(roll: f64, crit: u32) -> bool {
    roll < crit as f64
}

/// An ability misses when the roll exceeds its accuracy.
pub fn is_miss(roll: f64, accuracy: u32) -> bool {
    roll > accuracy as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_crit_never_crits() {
        assert!(!is_critical(0.0, 0));
        assert!(is_critical(0.0, 1));
        assert!(!is_critical(99.99, 99));
    }

    #[test]
    fn full_accuracy_never_misses() {
        assert!(!is_miss(99.99, 100));
        assert!(is_miss(90.5, 90));
        assert!(!is_miss(90.0, 90));
    }
}
