//! Decision engine: cross-references classifier statuses into guidance.
//!
//! A fixed cascade evaluated top to bottom. Each rule appends at most one
//! recommendation, and the output keeps rule order as priority order:
//!
//! 1. Bearing damaged (suppresses the lubrication rule)
//! 2. Overheat with a good bearing -> lubrication
//! 3. Foundation looseness or structural damage
//! 4. Spectral unbalance, then misalignment
//! 5. Hydraulic low flow, high flow, low head
//! 6. Vibration danger, only if rules 1-5 were silent
//! 7. Healthy, only if nothing fired at all
//!
//! Spectral looseness, bearing-frequency energy and high head are classified
//! but have no guidance of their own.

use crate::classify::bearing::BearingStatus;
use crate::classify::hydraulic::HydraulicIssue;
use crate::classify::spectral::SpectralFault;
use crate::classify::structural::StructuralStatus;
use crate::classify::thermal::ThermalStatus;
use crate::classify::vibration::VibrationSeverity;
use crate::context::DiagnosticContext;
use crate::recommendation::{Recommendation, RecommendationKind};

/// Hydraulic issues that produce guidance, in emission order.
const HYDRAULIC_RULES: &[(HydraulicIssue, RecommendationKind)] = &[
    (HydraulicIssue::LowFlow, RecommendationKind::LowFlow),
    (HydraulicIssue::HighFlow, RecommendationKind::HighFlow),
    (HydraulicIssue::LowHead, RecommendationKind::PumpWear),
];

/// Spectral faults that produce guidance, in emission order.
const SPECTRAL_RULES: &[(SpectralFault, RecommendationKind)] = &[
    (SpectralFault::Unbalance, RecommendationKind::Unbalance),
    (SpectralFault::Misalignment, RecommendationKind::Misalignment),
];

/// Produce the ordered recommendation list for a context.
///
/// Never empty: a context where no rule fires yields the single healthy
/// recommendation.
pub fn generate_recommendations(ctx: &DiagnosticContext) -> Vec<Recommendation> {
    let mut kinds = Vec::new();

    if ctx.bearing == BearingStatus::Damaged {
        kinds.push(RecommendationKind::BearingCritical);
    } else if ctx.thermal == ThermalStatus::Overheat && ctx.bearing == BearingStatus::Good {
        // Heat without bearing vibration means lubrication, not a mechanical fault.
        kinds.push(RecommendationKind::Lubrication);
    }

    match ctx.structural {
        StructuralStatus::LoosenessOnly => kinds.push(RecommendationKind::FoundationLooseness),
        StructuralStatus::StructuralDamage => kinds.push(RecommendationKind::StructuralDanger),
        StructuralStatus::Rigid => {}
    }

    kinds.extend(
        SPECTRAL_RULES
            .iter()
            .filter(|(fault, _)| ctx.spectral.contains(fault))
            .map(|&(_, kind)| kind),
    );

    kinds.extend(
        HYDRAULIC_RULES
            .iter()
            .filter(|(issue, _)| ctx.hydraulic.contains(issue))
            .map(|&(_, kind)| kind),
    );

    if kinds.is_empty() && ctx.vibration == VibrationSeverity::Danger {
        kinds.push(RecommendationKind::HighVibration);
    }

    if kinds.is_empty() {
        kinds.push(RecommendationKind::Healthy);
    }

    kinds.into_iter().map(Recommendation::from).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
