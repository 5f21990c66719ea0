//! Root-cause inference from dominant spectrum peaks.
//!
//! Every peak is expressed as an order of running speed and matched against
//! fixed order bands. Bands do not overlap, so a peak maps to at most one
//! fault; faults from several peaks are merged into a set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::measurement::SpectrumPeak;
use crate::units::Hertz;

/// Inclusive order bands for synchronous faults.
const UNBALANCE_BAND: (f64, f64) = (0.8, 1.2);
const MISALIGNMENT_BAND: (f64, f64) = (1.8, 2.2);
const LOOSENESS_BAND: (f64, f64) = (2.8, 3.2);

/// Orders strictly above this are treated as non-synchronous bearing energy.
pub const BEARING_MIN_ORDER: f64 = 3.5;

/// Spectral fault code. Declaration order is the set iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpectralFault {
    Unbalance,
    Misalignment,
    Looseness,
    BearingFreq,
}

/// One peak with its computed order and the fault it points at, if any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakFinding {
    pub frequency_hz: Hertz,
    pub amplitude: f64,
    pub order: f64,
    pub fault: Option<SpectralFault>,
}

/// Shaft running frequency, or `None` when the shaft is not turning.
pub fn running_frequency_hz(rpm: f64) -> Option<Hertz> {
    (rpm > 0.0).then(|| rpm / 60.0)
}

fn in_band(order: f64, (lo, hi): (f64, f64)) -> bool {
    (lo..=hi).contains(&order)
}

/// Map a single order to the fault it indicates.
pub fn classify_order(order: f64) -> Option<SpectralFault> {
    if in_band(order, UNBALANCE_BAND) {
        Some(SpectralFault::Unbalance)
    } else if in_band(order, MISALIGNMENT_BAND) {
        Some(SpectralFault::Misalignment)
    } else if in_band(order, LOOSENESS_BAND) {
        Some(SpectralFault::Looseness)
    } else if order > BEARING_MIN_ORDER {
        Some(SpectralFault::BearingFreq)
    } else {
        None
    }
}

/// Per-peak findings. Empty when the shaft is stopped.
pub fn analyze_peaks(rpm: f64, peaks: &[SpectrumPeak]) -> Vec<PeakFinding> {
    let Some(run_hz) = running_frequency_hz(rpm) else {
        return Vec::new();
    };

    peaks
        .iter()
        .map(|p| {
            let order = p.frequency_hz / run_hz;
            PeakFinding {
                frequency_hz: p.frequency_hz,
                amplitude: p.amplitude,
                order,
                fault: classify_order(order),
            }
        })
        .collect()
}

/// Deduplicated fault set for the given peaks.
pub fn classify(rpm: f64, peaks: &[SpectrumPeak]) -> BTreeSet<SpectralFault> {
    analyze_peaks(rpm, peaks)
        .into_iter()
        .filter_map(|f| f.fault)
        .collect()
}
