//! Bearing housing temperature state.

use serde::{Deserialize, Serialize};

use crate::units::Celsius;

pub const WARM_C: Celsius = 60.0;
pub const OVERHEAT_C: Celsius = 80.0;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThermalStatus {
    #[default]
    Normal,
    Warm,
    Overheat,
}

pub fn classify(temp_c: Celsius) -> ThermalStatus {
    if temp_c > OVERHEAT_C {
        ThermalStatus::Overheat
    } else if temp_c > WARM_C {
        ThermalStatus::Warm
    } else {
        ThermalStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        assert_eq!(classify(-20.0), ThermalStatus::Normal);
        assert_eq!(classify(60.0), ThermalStatus::Normal);
        assert_eq!(classify(60.5), ThermalStatus::Warm);
        assert_eq!(classify(80.0), ThermalStatus::Warm);
        assert_eq!(classify(80.5), ThermalStatus::Overheat);
    }
}
