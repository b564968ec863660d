//! Screen-space brush footprint
//!
//! Converts a world-unit radius into the on-screen outline the rasterizer
//! bounds its work by. The slice plane may be oblique, so the radius is
//! pushed along the world axis that contributes most to the screen x-axis and
//! measured after projection back to screen space.

use std::f32::consts::TAU;

use crate::core::types::{Result, Vec2, Vec4};
use crate::math::bounds::ScreenBounds;
use crate::math::matrix::dominant_row_axis;
use crate::brush::params::BrushParameters;
use crate::slice::geometry::SliceGeometry;

/// Number of polygon sides approximating the circle outline
pub const FOOTPRINT_SIDES: usize = 16;

/// Fixed sub-voxel footprint radius used in pixel mode, independent of zoom
pub const PIXEL_MODE_RADIUS: f32 = 0.01;

/// Brush outline in screen space, centered at the origin
#[derive(Debug, Clone, PartialEq)]
pub struct BrushFootprint {
    screen_radius: f32,
    points: Vec<Vec2>,
    bounds: ScreenBounds,
}

impl BrushFootprint {
    /// Build the footprint for the current parameters in the given view.
    /// Fails with `InvalidTransform` if the slice matrix cannot be inverted
    /// (pixel mode never needs the inverse and never fails).
    pub fn build(params: &BrushParameters, slice: &SliceGeometry) -> Result<Self> {
        let screen_radius = if params.pixel_mode {
            PIXEL_MODE_RADIUS
        } else {
            let world_to_xy = slice.world_to_xy_matrix()?;
            let axis = dominant_row_axis(&world_to_xy, 0);
            let mut world_vector = Vec4::ZERO;
            world_vector[axis] = params.radius;
            let screen_vector = world_to_xy * world_vector;
            screen_vector.truncate().length()
        };

        let points: Vec<Vec2> = (0..FOOTPRINT_SIDES)
            .map(|side| {
                let angle = TAU * side as f32 / FOOTPRINT_SIDES as f32;
                Vec2::new(screen_radius * angle.cos(), screen_radius * angle.sin())
            })
            .collect();
        let bounds = ScreenBounds::from_points(&points);

        Ok(Self { screen_radius, points, bounds })
    }

    /// Effective on-screen radius
    pub fn screen_radius(&self) -> f32 {
        self.screen_radius
    }

    /// Polygon outline vertices, centered at the origin
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Bounding rectangle of the outline
    pub fn bounds(&self) -> ScreenBounds {
        self.bounds
    }
}
