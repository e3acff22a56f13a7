//! Point light source.

use crate::Vec3;

/// A point light with a scalar intensity.
///
/// Intensity is a plain multiplier, not a color: every channel of a
/// surface's base color is scaled by the same amount.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
