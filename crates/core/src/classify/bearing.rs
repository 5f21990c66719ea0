//! Bearing condition from overall acceleration.

use serde::{Deserialize, Serialize};

use crate::units::Gravity;

pub const WARNING_G: Gravity = 1.0;
pub const DAMAGED_G: Gravity = 2.0;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BearingStatus {
    #[default]
    Good,
    Warning,
    Damaged,
}

pub fn classify(accel_g: Gravity) -> BearingStatus {
    if accel_g > DAMAGED_G {
        BearingStatus::Damaged
    } else if accel_g > WARNING_G {
        BearingStatus::Warning
    } else {
        BearingStatus::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(classify(0.0), BearingStatus::Good);
        assert_eq!(classify(1.0), BearingStatus::Good);
        assert_eq!(classify(1.01), BearingStatus::Warning);
        assert_eq!(classify(2.0), BearingStatus::Warning);
        assert_eq!(classify(2.01), BearingStatus::Damaged);
    }

    #[test]
    fn negative_input_is_good() {
        assert_eq!(classify(-0.5), BearingStatus::Good);
    }
}
