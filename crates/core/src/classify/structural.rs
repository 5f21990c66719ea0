//! Foundation and frame integrity from displacement vs. velocity.
//!
//! High displacement with velocity still under the limit points at pure
//! mechanical looseness (anchor bolts, frame). When velocity is at or over the
//! limit as well, vibration energy has reached the structure itself.

use serde::{Deserialize, Serialize};

use crate::units::{Micrometre, MmPerSec};

/// Displacement above which the structure is no longer considered rigid.
pub const DISPLACEMENT_LIMIT_UM: Micrometre = 100.0;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StructuralStatus {
    #[default]
    Rigid,
    LoosenessOnly,
    StructuralDamage,
}

pub fn classify(
    displacement_um: Micrometre,
    velocity: MmPerSec,
    velocity_limit: MmPerSec,
) -> StructuralStatus {
    if displacement_um <= DISPLACEMENT_LIMIT_UM {
        return StructuralStatus::Rigid;
    }
    if velocity < velocity_limit {
        StructuralStatus::LoosenessOnly
    } else {
        StructuralStatus::StructuralDamage
    }
}
