//! Vibration severity against a simplified ISO 10816-3 class table.

use serde::{Deserialize, Serialize};

use crate::measurement::FoundationClass;
use crate::units::MmPerSec;

/// Machines below this rating use the small-machine limit on any foundation.
pub const SMALL_MACHINE_MAX_KW: f64 = 15.0;
/// Upper bound (inclusive) of the medium-machine band.
pub const MEDIUM_MACHINE_MAX_KW: f64 = 300.0;

/// Fraction of the limit above which a reading is a warning.
pub const WARNING_FRACTION: f64 = 0.60;

const LIMIT_LOW: MmPerSec = 4.50;
const LIMIT_MID: MmPerSec = 7.10;
const LIMIT_HIGH: MmPerSec = 11.0;

/// Severity zone of a velocity reading.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VibrationSeverity {
    #[default]
    Good,
    Warning,
    Danger,
}

/// The limit and warning threshold that apply to one machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeverityBand {
    pub power_kw: f64,
    pub foundation: FoundationClass,
    pub limit_mm_s: MmPerSec,
    pub warning_mm_s: MmPerSec,
}

/// Velocity limit (mm/s) for a machine of the given power and foundation.
///
/// Each band is inclusive on its lower bound:
/// - `< 15 kW`: 4.50 on any foundation
/// - `15..=300 kW`: 7.10 flexible, 4.50 rigid
/// - `> 300 kW`: 11.0 flexible, 7.10 rigid
pub fn severity_limit(power_kw: f64, foundation: FoundationClass) -> MmPerSec {
    let flexible = foundation.is_flexible();
    if power_kw < SMALL_MACHINE_MAX_KW {
        LIMIT_LOW
    } else if power_kw <= MEDIUM_MACHINE_MAX_KW {
        if flexible {
            LIMIT_MID
        } else {
            LIMIT_LOW
        }
    } else if flexible {
        LIMIT_HIGH
    } else {
        LIMIT_MID
    }
}

/// Velocity above which a reading is classified as a warning.
pub fn warning_threshold(limit: MmPerSec) -> MmPerSec {
    limit * WARNING_FRACTION
}

pub fn severity_band(power_kw: f64, foundation: FoundationClass) -> SeverityBand {
    let limit = severity_limit(power_kw, foundation);
    SeverityBand {
        power_kw,
        foundation,
        limit_mm_s: limit,
        warning_mm_s: warning_threshold(limit),
    }
}

/// Classify a velocity reading against a limit.
///
/// A zero limit classifies every positive reading as danger.
pub fn classify(value: MmPerSec, limit: MmPerSec) -> VibrationSeverity {
    if value > limit {
        VibrationSeverity::Danger
    } else if value > warning_threshold(limit) {
        VibrationSeverity::Warning
    } else {
        VibrationSeverity::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::measurement::FoundationClass::{Flexible, Rigid};

    // -- severity_limit -------------------------------------------------------

    #[test]
    fn small_machine_ignores_foundation() {
        for p in [0.0, 5.5, 14.99] {
            assert_eq!(severity_limit(p, Rigid), 4.50);
            assert_eq!(severity_limit(p, Flexible), 4.50);
        }
    }

    #[test]
    fn medium_band_is_inclusive_on_both_ends() {
        assert_eq!(severity_limit(15.0, Rigid), 4.50);
        assert_eq!(severity_limit(15.0, Flexible), 7.10);
        assert_eq!(severity_limit(300.0, Rigid), 4.50);
        assert_eq!(severity_limit(300.0, Flexible), 7.10);
    }

    #[test]
    fn large_machine_limits() {
        assert_eq!(severity_limit(300.1, Rigid), 7.10);
        assert_eq!(severity_limit(300.1, Flexible), 11.0);
        assert_eq!(severity_limit(2500.0, Flexible), 11.0);
    }

    #[test]
    fn band_carries_warning_threshold() {
        let band = severity_band(400.0, Rigid);
        assert_eq!(band.limit_mm_s, 7.10);
        assert_eq!(band.warning_mm_s, warning_threshold(7.10));
        assert_eq!(band.foundation, Rigid);
    }

    // -- classify -------------------------------------------------------------

    #[test]
    fn at_warning_threshold_is_good() {
        let limit = 4.5;
        assert_eq!(classify(warning_threshold(limit), limit), VibrationSeverity::Good);
    }

    #[test]
    fn just_above_warning_threshold_is_warning() {
        assert_eq!(classify(2.8, 4.5), VibrationSeverity::Warning);
    }

    #[test]
    fn at_limit_is_warning_not_danger() {
        assert_eq!(classify(7.1, 7.1), VibrationSeverity::Warning);
    }

    #[test]
    fn above_limit_is_danger() {
        assert_eq!(classify(7.11, 7.1), VibrationSeverity::Danger);
    }

    #[test]
    fn zero_limit_degenerates_to_danger() {
        assert_eq!(classify(0.1, 0.0), VibrationSeverity::Danger);
        assert_eq!(classify(0.0, 0.0), VibrationSeverity::Good);
    }
}
