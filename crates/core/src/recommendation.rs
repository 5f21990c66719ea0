//! Maintenance recommendations emitted by the decision engine.
//!
//! Every recommendation carries an explicit [`RecommendationKind`] and
//! [`Tone`]; renderers pick their visual treatment from those fields.

use serde::{Deserialize, Serialize};

/// What a recommendation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    BearingCritical,
    Lubrication,
    FoundationLooseness,
    StructuralDanger,
    Unbalance,
    Misalignment,
    LowFlow,
    HighFlow,
    PumpWear,
    HighVibration,
    Healthy,
}

/// Visual treatment hint for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
}

impl RecommendationKind {
    pub fn tone(self) -> Tone {
        match self {
            RecommendationKind::Healthy => Tone::Positive,
            _ => Tone::Caution,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RecommendationKind::BearingCritical => "Bearing critical",
            RecommendationKind::Lubrication => "Lubrication",
            RecommendationKind::FoundationLooseness => "Foundation issue",
            RecommendationKind::StructuralDanger => "Structural danger",
            RecommendationKind::Unbalance => "Unbalance",
            RecommendationKind::Misalignment => "Misalignment",
            RecommendationKind::LowFlow => "Low flow",
            RecommendationKind::HighFlow => "High flow",
            RecommendationKind::PumpWear => "Pump wear",
            RecommendationKind::HighVibration => "High vibration",
            RecommendationKind::Healthy => "Healthy",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            RecommendationKind::BearingCritical => {
                "Acceleration above 2.0 g indicates physical bearing damage. \
                 Stop the unit and replace the bearing."
            }
            RecommendationKind::Lubrication => {
                "High temperature with low bearing vibration points to dry grease. \
                 Regrease the bearing."
            }
            RecommendationKind::FoundationLooseness => {
                "High displacement with normal velocity. \
                 Check tightness of anchor bolts and frame."
            }
            RecommendationKind::StructuralDanger => {
                "Machine vibration is shaking the foundation structure. \
                 Correct the vibration source immediately."
            }
            RecommendationKind::Unbalance => {
                "Dominant 1x running speed. Clean the impeller and perform in-situ balancing."
            }
            RecommendationKind::Misalignment => {
                "Dominant 2x running speed. Check for soft foot and laser-align the shafts."
            }
            RecommendationKind::LowFlow => {
                "Operating below 60% of BEP. Open the discharge valve gradually \
                 to prevent recirculation."
            }
            RecommendationKind::HighFlow => {
                "Run-out operation above 120% of BEP. Throttle the discharge valve \
                 to prevent cavitation."
            }
            RecommendationKind::PumpWear => {
                "Actual head has dropped sharply. Check wear ring and impeller clearances."
            }
            RecommendationKind::HighVibration => {
                "Vibration exceeds the ISO trip limit. \
                 Inspect bolts and alignment thoroughly."
            }
            RecommendationKind::Healthy => "Unit is healthy (normal operation).",
        }
    }
}

/// A single recommendation as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub tone: Tone,
    pub title: &'static str,
    pub message: &'static str,
}

impl From<RecommendationKind> for Recommendation {
    fn from(kind: RecommendationKind) -> Self {
        Self {
            kind,
            tone: kind.tone(),
            title: kind.title(),
            message: kind.guidance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_healthy_is_positive() {
        assert_eq!(RecommendationKind::Healthy.tone(), Tone::Positive);
        assert_eq!(RecommendationKind::PumpWear.tone(), Tone::Caution);
        assert_eq!(RecommendationKind::HighVibration.tone(), Tone::Caution);
    }

    #[test]
    fn serializes_with_explicit_category() {
        let rec = Recommendation::from(RecommendationKind::LowFlow);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["kind"], "low_flow");
        assert_eq!(json["tone"], "caution");
        assert_eq!(json["title"], "Low flow");
    }
}
