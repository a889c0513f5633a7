use serde::{Deserialize, Serialize};

/// Knobs for density-adaptive insertion.
///
/// When the destination leaf holds more than `density_threshold` entries
/// per unit of boundary area, the effective split threshold for that
/// insertion becomes `capacity * capacity_multiplier`, letting crowded
/// leaves grow instead of subdividing into ever-smaller quadrants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityPolicy {
    pub density_threshold: f32,
    pub capacity_multiplier: usize,
}

impl Default for DensityPolicy {
    fn default() -> Self {
        DensityPolicy {
            density_threshold: 1.0,
            capacity_multiplier: 4,
        }
    }
}

impl DensityPolicy {
    /// Effective split threshold for a leaf with `len` entries over
    /// `area` square units.
    pub(crate) fn effective_capacity(&self, capacity: usize, len: usize, area: f32) -> usize {
        if area > 0.0 && len as f32 / area > self.density_threshold {
            capacity.saturating_mul(self.capacity_multiplier).max(capacity)
        } else {
            capacity
        }
    }
}
