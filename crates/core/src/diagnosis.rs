//! End-to-end diagnosis of a measurement record.
//!
//! Validates the record, reduces the measurement points to a worst-case
//! overall reading, runs the six classifiers, and hands the assembled
//! [`DiagnosticContext`] to the decision engine. Each point is also
//! classified on its own for the per-point scorecard.

use serde::Serialize;

use crate::classify::bearing::{self, BearingStatus};
use crate::classify::hydraulic::{self, HydraulicAssessment};
use crate::classify::spectral::{self, PeakFinding};
use crate::classify::structural::{self, StructuralStatus};
use crate::classify::thermal::{self, ThermalStatus};
use crate::classify::vibration::{self, VibrationSeverity};
use crate::context::DiagnosticContext;
use crate::decision::generate_recommendations;
use crate::error::CoreError;
use crate::measurement::{
    usable_peaks, validate_record, MeasurementPoint, MeasurementRecord, PointLocation,
};
use crate::recommendation::{Recommendation, RecommendationKind};
use crate::units::{Celsius, Gravity, Micrometre, MmPerSec};

/// Worst-case values across every measurement point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallReading {
    pub velocity_mm_s: MmPerSec,
    pub acceleration_g: Gravity,
    pub displacement_um: Micrometre,
    pub temperature_c: Celsius,
}

impl OverallReading {
    /// Maxima over the given points. `None` if there are no points.
    pub fn from_points(points: &[MeasurementPoint]) -> Option<Self> {
        let first = points.first()?;
        let seed = Self {
            velocity_mm_s: first.velocity.peak(),
            acceleration_g: first.acceleration_g,
            displacement_um: first.displacement_um,
            temperature_c: first.temperature_c,
        };
        Some(points.iter().skip(1).fold(seed, |acc, p| Self {
            velocity_mm_s: acc.velocity_mm_s.max(p.velocity.peak()),
            acceleration_g: acc.acceleration_g.max(p.acceleration_g),
            displacement_um: acc.displacement_um.max(p.displacement_um),
            temperature_c: acc.temperature_c.max(p.temperature_c),
        }))
    }
}

/// Scorecard row for a single measurement point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointAssessment {
    pub location: PointLocation,
    pub peak_velocity_mm_s: MmPerSec,
    pub vibration: VibrationSeverity,
    pub bearing: BearingStatus,
    pub structural: StructuralStatus,
    pub thermal: ThermalStatus,
}

/// Everything the rendering layer needs for one diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisReport {
    pub vibration_limit_mm_s: MmPerSec,
    pub overall: OverallReading,
    pub context: DiagnosticContext,
    pub points: Vec<PointAssessment>,
    pub hydraulic: HydraulicAssessment,
    pub spectrum: Vec<PeakFinding>,
    pub recommendations: Vec<Recommendation>,
}

impl DiagnosisReport {
    /// `true` when the only recommendation is the healthy one.
    pub fn is_healthy(&self) -> bool {
        matches!(
            self.recommendations.as_slice(),
            [only] if only.kind == RecommendationKind::Healthy
        )
    }
}

fn assess_point(point: &MeasurementPoint, limit: MmPerSec) -> PointAssessment {
    let velocity = point.velocity.peak();
    PointAssessment {
        location: point.location,
        peak_velocity_mm_s: velocity,
        vibration: vibration::classify(velocity, limit),
        bearing: bearing::classify(point.acceleration_g),
        structural: structural::classify(point.displacement_um, velocity, limit),
        thermal: thermal::classify(point.temperature_c),
    }
}

/// Run the full diagnosis for a record.
pub fn diagnose(record: &MeasurementRecord) -> Result<DiagnosisReport, CoreError> {
    validate_record(record)?;

    let equipment = &record.equipment;
    let limit = vibration::severity_limit(equipment.rated_power_kw, equipment.foundation);

    let overall = OverallReading::from_points(&record.points).ok_or_else(|| {
        CoreError::Validation("At least one measurement point is required".into())
    })?;

    let hydraulic = hydraulic::assess(&record.process, equipment);
    let peaks = usable_peaks(&record.peaks);
    let spectrum = spectral::analyze_peaks(equipment.rated_speed_rpm, &peaks);

    let context = DiagnosticContext {
        vibration: vibration::classify(overall.velocity_mm_s, limit),
        bearing: bearing::classify(overall.acceleration_g),
        structural: structural::classify(overall.displacement_um, overall.velocity_mm_s, limit),
        thermal: thermal::classify(overall.temperature_c),
        hydraulic: hydraulic.issues.clone(),
        spectral: spectral::classify(equipment.rated_speed_rpm, &peaks),
    };

    let recommendations = generate_recommendations(&context);
    let points = record
        .points
        .iter()
        .map(|p| assess_point(p, limit))
        .collect();

    Ok(DiagnosisReport {
        vibration_limit_mm_s: limit,
        overall,
        context,
        points,
        hydraulic,
        spectrum,
        recommendations,
    })
}

/// Run the decision engine alone on an already-classified context.
pub fn diagnose_context(ctx: &DiagnosticContext) -> Vec<Recommendation> {
    generate_recommendations(ctx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
