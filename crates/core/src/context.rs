//! The six classification results, assembled once per diagnosis.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classify::bearing::BearingStatus;
use crate::classify::hydraulic::HydraulicIssue;
use crate::classify::spectral::SpectralFault;
use crate::classify::structural::StructuralStatus;
use crate::classify::thermal::ThermalStatus;
use crate::classify::vibration::VibrationSeverity;

/// Input to the decision engine.
///
/// Missing fields deserialize to the status that fires no rule, so a caller
/// that only knows some of the statuses still gets a well-defined result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticContext {
    pub vibration: VibrationSeverity,
    pub bearing: BearingStatus,
    pub structural: StructuralStatus,
    pub thermal: ThermalStatus,
    pub hydraulic: BTreeSet<HydraulicIssue>,
    pub spectral: BTreeSet<SpectralFault>,
}
