use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SCALAR;

/// Per-call options for hotspot mapping.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HotspotSettings {
    /// Base multiplier combined with the atlas's own scalar
    pub scalar: f32,
    /// Randomly mirror fitted UVs inside their hotspot
    pub mirror: bool,
    /// Seed for rotation and mirroring. `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for HotspotSettings {
    fn default() -> Self {
        Self {
            scalar: DEFAULT_SCALAR,
            mirror: true,
            seed: None,
        }
    }
}

impl HotspotSettings {
    pub fn with_scalar(mut self, scalar: f32) -> Self {
        self.scalar = scalar;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for one mapping call.
    pub fn rng(&self) -> fastrand::Rng {
        if let Some(s) = self.seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        }
    }
}
