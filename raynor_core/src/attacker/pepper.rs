//! PepperCounter - Every 4th attack is a bonus attack

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attacks per bonus cycle
pub const PEPPER_CYCLE: u8 = 4;

/// Counter value outside `0..PEPPER_CYCLE`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pepper counter must be below 4, got {0}")]
pub struct InvalidPepperCounter(pub u8);

/// Cyclic counter in `0..PEPPER_CYCLE`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PepperCounter(u8);

impl PepperCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Step the counter, returning true when it wraps back to 0
    pub fn advance(&mut self) -> bool {
        self.0 = (self.0 % PEPPER_CYCLE + 1) % PEPPER_CYCLE;
        self.0 == 0
    }
}

impl TryFrom<u8> for PepperCounter {
    type Error = InvalidPepperCounter;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < PEPPER_CYCLE {
            Ok(PepperCounter(value))
        } else {
            Err(InvalidPepperCounter(value))
        }
    }
}

impl From<PepperCounter> for u8 {
    fn from(counter: PepperCounter) -> u8 {
        counter.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        let mut counter = PepperCounter::new();
        let fired: Vec<bool> = (0..8).map(|_| counter.advance()).collect();

        assert_eq!(
            fired,
            vec![false, false, false, true, false, false, false, true]
        );
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut counter = PepperCounter::new();
        for _ in 0..100 {
            counter.advance();
            assert!(counter.value() < PEPPER_CYCLE);
        }
    }

    #[test]
    fn test_try_from_range() {
        assert_eq!(PepperCounter::try_from(3).unwrap().value(), 3);
        assert_eq!(PepperCounter::try_from(4), Err(InvalidPepperCounter(4)));
        assert_eq!(PepperCounter::try_from(255), Err(InvalidPepperCounter(255)));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let counter: PepperCounter = serde_json::from_str("2").unwrap();
        assert_eq!(counter.value(), 2);
        assert_eq!(serde_json::to_string(&counter).unwrap(), "2");

        assert!(serde_json::from_str::<PepperCounter>("7").is_err());
        assert!(serde_json::from_str::<PepperCounter>("255").is_err());
    }
}
