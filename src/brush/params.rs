//! Brush parameters

use serde::{Deserialize, Serialize};

use crate::volume::Volume;

/// Brush shape: a circle in the slice plane or a full 3D sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushShape {
    #[default]
    Circle,
    Sphere,
}

/// All user-facing paint parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushParameters {
    /// Brush radius in world units
    pub radius: f32,
    /// Lower radius bound
    pub min_radius: f32,
    /// Upper radius bound
    pub max_radius: f32,
    /// Circle or sphere
    pub shape: BrushShape,
    /// Paint exactly the voxel under the cursor, ignoring radius, threshold
    /// and paint-over
    pub pixel_mode: bool,
    /// Allow overwriting voxels labeled by another segment
    pub paint_over: bool,
    /// Gate writes on the master volume intensity
    pub threshold_enabled: bool,
    /// Lower threshold bound (inclusive)
    pub threshold_min: f32,
    /// Upper threshold bound (inclusive)
    pub threshold_max: f32,
    /// Erase instead of paint
    pub erase: bool,
    /// Value written when painting
    pub fill_value: f32,
    /// Value written when erasing (the background value)
    pub erase_value: f32,
    /// Auto-select the label under the brush. Accepted for persistence but
    /// not implemented; painting ignores it.
    pub smudge: bool,
}

impl Default for BrushParameters {
    fn default() -> Self {
        Self {
            radius: 0.5,
            min_radius: 0.01,
            max_radius: 100.0,
            shape: BrushShape::Circle,
            pixel_mode: false,
            paint_over: true,
            threshold_enabled: false,
            threshold_min: 0.0,
            threshold_max: 1000.0,
            erase: false,
            fill_value: 1.0,
            erase_value: 0.0,
            smudge: false,
        }
    }
}

impl BrushParameters {
    /// Value the current stroke writes
    pub fn target_value(&self) -> f32 {
        if self.erase { self.erase_value } else { self.fill_value }
    }

    /// Set the radius, clamped into [min_radius, max_radius]
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.clamp(self.min_radius, self.max_radius);
    }

    /// Multiply the radius by a factor, clamped into bounds
    pub fn scale_radius(&mut self, factor: f32) {
        self.set_radius(self.radius * factor);
    }

    /// Set the radius as a count of label voxels (count * smallest spacing)
    pub fn set_radius_in_voxels(&mut self, count: f32, label: &Volume) {
        self.set_radius(count * label.min_spacing());
    }

    /// Derive radius bounds and a starting radius from the label volume:
    /// half the finest spacing up to half the largest physical extent.
    pub fn fit_to_volume(&mut self, label: &Volume) {
        self.min_radius = 0.5 * label.min_spacing();
        self.max_radius = 0.5 * label.world_extent().max_element();
        self.set_radius((50.0 * self.min_radius).min(0.5 * self.max_radius));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;

    #[test]
    fn test_target_value() {
        let mut params = BrushParameters::default();
        assert_eq!(params.target_value(), 1.0);
        params.erase = true;
        assert_eq!(params.target_value(), 0.0);
    }

    #[test]
    fn test_radius_clamped() {
        let mut params = BrushParameters::default();
        params.set_radius(1000.0);
        assert_eq!(params.radius, params.max_radius);
        params.set_radius(0.0);
        assert_eq!(params.radius, params.min_radius);
    }

    #[test]
    fn test_scale_radius() {
        let mut params = BrushParameters::default();
        params.set_radius(10.0);
        params.scale_radius(1.2);
        assert!((params.radius - 12.0).abs() < 1e-5);
        params.scale_radius(0.8);
        assert!((params.radius - 9.6).abs() < 1e-5);
    }

    #[test]
    fn test_scale_radius_stays_in_bounds() {
        let mut params = BrushParameters::default();
        params.set_radius(90.0);
        params.scale_radius(1.2);
        assert_eq!(params.radius, 100.0);
    }

    #[test]
    fn test_fit_to_volume() {
        let label = Volume::new([100, 100, 50], Vec3::new(0.5, 0.5, 2.0), Vec3::ZERO).unwrap();
        let mut params = BrushParameters::default();
        params.fit_to_volume(&label);

        assert_eq!(params.min_radius, 0.25);
        // Largest extent is 100 * 2.0 = 100 along z
        assert_eq!(params.max_radius, 50.0);
        // 50 * min_radius = 12.5, below half the max bound
        assert_eq!(params.radius, 12.5);
    }

    #[test]
    fn test_radius_in_voxels() {
        let label = Volume::new([10, 10, 10], Vec3::new(0.5, 1.0, 2.0), Vec3::ZERO).unwrap();
        let mut params = BrushParameters::default();
        params.set_radius_in_voxels(4.0, &label);
        assert_eq!(params.radius, 2.0);
    }
}
