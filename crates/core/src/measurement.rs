//! Measurement record supplied by the data-entry layer, plus its validation.
//!
//! The classifiers assume validated numeric input. [`validate_record`] is the
//! gate the input layer runs before handing a record to the engine: field
//! ranges come from the `validator` derives, finiteness and duplicate point
//! locations are checked by hand.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::units::{
    Bar, Celsius, CubicMetresPerHour, Gravity, Hertz, Metre, Micrometre, MmPerSec,
};

/// Maximum number of spectrum peaks accepted per record.
pub const MAX_SPECTRUM_PEAKS: u64 = 16;

/// Maximum number of measurement points per record (motor DE/NDE, pump DE/NDE).
pub const MAX_MEASUREMENT_POINTS: u64 = 4;

/// Lowest physically meaningful temperature.
pub const ABSOLUTE_ZERO_C: Celsius = -273.15;

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// Foundation stiffness class used to select the vibration-severity limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoundationClass {
    #[default]
    Rigid,
    Flexible,
}

impl FoundationClass {
    pub fn is_flexible(self) -> bool {
        matches!(self, FoundationClass::Flexible)
    }
}

/// Nameplate and design data for the motor + pump train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EquipmentSpec {
    /// Rated motor power in kW.
    #[validate(range(min = 0.0))]
    pub rated_power_kw: f64,
    /// Rated shaft speed in RPM. Zero disables the spectral check.
    #[validate(range(min = 0.0))]
    pub rated_speed_rpm: f64,
    pub foundation: FoundationClass,
    /// Pump design head in metres. Zero disables the head check.
    #[validate(range(min = 0.0))]
    pub design_head_m: Metre,
    /// Pump design (BEP) flow. Zero disables the flow check.
    #[validate(range(min = 0.0))]
    pub design_flow_m3h: CubicMetresPerHour,
}

/// Process conditions at the time of measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProcessReading {
    pub suction_bar: Bar,
    pub discharge_bar: Bar,
    #[validate(range(min = 0.0))]
    pub actual_flow_m3h: CubicMetresPerHour,
}

// ---------------------------------------------------------------------------
// Measurement points
// ---------------------------------------------------------------------------

/// Physical measurement location on the train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointLocation {
    MotorDe,
    MotorNde,
    PumpDe,
    PumpNde,
}

impl fmt::Display for PointLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PointLocation::MotorDe => "Motor DE",
            PointLocation::MotorNde => "Motor NDE",
            PointLocation::PumpDe => "Pump DE",
            PointLocation::PumpNde => "Pump NDE",
        };
        f.write_str(label)
    }
}

/// Velocity readings on the three measurement axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct VelocityTriplet {
    #[validate(range(min = 0.0))]
    pub horizontal: MmPerSec,
    #[validate(range(min = 0.0))]
    pub vertical: MmPerSec,
    #[validate(range(min = 0.0))]
    pub axial: MmPerSec,
}

impl VelocityTriplet {
    /// Highest of the three axes; this is the value compared against the limit.
    pub fn peak(&self) -> MmPerSec {
        self.horizontal.max(self.vertical).max(self.axial)
    }
}

/// All readings taken at one physical point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MeasurementPoint {
    pub location: PointLocation,
    #[validate(nested)]
    pub velocity: VelocityTriplet,
    #[validate(range(min = 0.0))]
    pub acceleration_g: Gravity,
    #[validate(range(min = 0.0))]
    pub displacement_um: Micrometre,
    #[validate(range(min = ABSOLUTE_ZERO_C))]
    pub temperature_c: Celsius,
}

/// A dominant peak from the vibration spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct SpectrumPeak {
    pub frequency_hz: Hertz,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_amplitude() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One complete diagnosis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MeasurementRecord {
    #[validate(nested)]
    pub equipment: EquipmentSpec,
    #[validate(nested)]
    pub process: ProcessReading,
    #[validate(length(min = 1, max = MAX_MEASUREMENT_POINTS), nested)]
    pub points: Vec<MeasurementPoint>,
    #[serde(default)]
    #[validate(length(max = MAX_SPECTRUM_PEAKS), nested)]
    pub peaks: Vec<SpectrumPeak>,
}

/// Validate a record before diagnosis.
///
/// Rejects out-of-range fields, non-finite numbers, and repeated point
/// locations. Peaks with a non-positive frequency are not an error; they are
/// dropped later by [`usable_peaks`].
pub fn validate_record(record: &MeasurementRecord) -> Result<(), CoreError> {
    let equipment = &record.equipment;
    ensure_finite(equipment.rated_power_kw, "equipment.rated_power_kw")?;
    ensure_finite(equipment.rated_speed_rpm, "equipment.rated_speed_rpm")?;
    ensure_finite(equipment.design_head_m, "equipment.design_head_m")?;
    ensure_finite(equipment.design_flow_m3h, "equipment.design_flow_m3h")?;

    let process = &record.process;
    ensure_finite(process.suction_bar, "process.suction_bar")?;
    ensure_finite(process.discharge_bar, "process.discharge_bar")?;
    ensure_finite(process.actual_flow_m3h, "process.actual_flow_m3h")?;

    let mut seen = BTreeSet::new();
    for point in &record.points {
        let loc = point.location;
        ensure_finite(point.velocity.horizontal, &format!("{loc} velocity.horizontal"))?;
        ensure_finite(point.velocity.vertical, &format!("{loc} velocity.vertical"))?;
        ensure_finite(point.velocity.axial, &format!("{loc} velocity.axial"))?;
        ensure_finite(point.acceleration_g, &format!("{loc} acceleration_g"))?;
        ensure_finite(point.displacement_um, &format!("{loc} displacement_um"))?;
        ensure_finite(point.temperature_c, &format!("{loc} temperature_c"))?;

        if !seen.insert(loc) {
            return Err(CoreError::Validation(format!(
                "Duplicate measurement point: {loc}"
            )));
        }
    }

    for (i, peak) in record.peaks.iter().enumerate() {
        ensure_finite(peak.frequency_hz, &format!("peaks[{i}].frequency_hz"))?;
        ensure_finite(peak.amplitude, &format!("peaks[{i}].amplitude"))?;
    }

    record.validate()?;
    Ok(())
}

/// Validate a standalone rated-power value (e.g. from a query string).
pub fn validate_rated_power(power_kw: f64) -> Result<(), CoreError> {
    ensure_finite(power_kw, "power_kw")?;
    if power_kw < 0.0 {
        return Err(CoreError::Validation(format!(
            "power_kw must be non-negative, got {power_kw}"
        )));
    }
    Ok(())
}

/// Peaks with a strictly positive frequency, in their original order.
pub fn usable_peaks(peaks: &[SpectrumPeak]) -> Vec<SpectrumPeak> {
    peaks
        .iter()
        .filter(|p| p.frequency_hz > 0.0)
        .copied()
        .collect()
}

fn ensure_finite(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
