//! Per-view slice geometry
//!
//! A slice view maps 2D screen coordinates onto an arbitrary (possibly
//! oblique) plane through the world. The mapping is a single 4x4 matrix whose
//! third column steps out of the plane: screen (x, y, offset) -> world, where
//! `offset` is a virtual slice index rather than a pixel coordinate.

use crate::core::types::{Mat4, Result, Vec2, Vec3, Vec4};
use crate::math::matrix::checked_inverse;

/// Identity of the view owning a slice geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u32);

/// Screen-to-world mapping for one slice view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    view: ViewId,
    xy_to_world: Mat4,
}

impl SliceGeometry {
    /// Wrap a raw screen-to-world matrix
    pub fn new(view: ViewId, xy_to_world: Mat4) -> Self {
        Self { view, xy_to_world }
    }

    /// Axial view: screen x/y along world x/y, slice offset along world z.
    /// `scale` is world units per screen pixel, `origin` the world position of
    /// screen (0,0) at offset 0.
    pub fn axial(view: ViewId, scale: f32, origin: Vec3) -> Self {
        Self::oriented(view, scale, origin, Vec3::X, Vec3::Y, Vec3::Z)
    }

    /// Sagittal view: screen x/y along world y/z, slice offset along world x
    pub fn sagittal(view: ViewId, scale: f32, origin: Vec3) -> Self {
        Self::oriented(view, scale, origin, Vec3::Y, Vec3::Z, Vec3::X)
    }

    /// Coronal view: screen x/y along world x/z, slice offset along world y
    pub fn coronal(view: ViewId, scale: f32, origin: Vec3) -> Self {
        Self::oriented(view, scale, origin, Vec3::X, Vec3::Z, Vec3::Y)
    }

    /// Build a geometry from in-plane axes and a slice-step direction.
    /// The step column is not scaled by `scale`: one virtual offset unit
    /// advances one world unit along `step`.
    pub fn oriented(view: ViewId, scale: f32, origin: Vec3, x_axis: Vec3, y_axis: Vec3, step: Vec3) -> Self {
        let xy_to_world = Mat4::from_cols(
            (x_axis * scale).extend(0.0),
            (y_axis * scale).extend(0.0),
            step.extend(0.0),
            Vec4::new(origin.x, origin.y, origin.z, 1.0),
        );
        Self { view, xy_to_world }
    }

    /// Owning view
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// The raw screen-to-world matrix
    pub fn xy_to_world_matrix(&self) -> Mat4 {
        self.xy_to_world
    }

    /// Map an in-plane screen point to world coordinates
    pub fn xy_to_world(&self, xy: Vec2) -> Vec3 {
        self.xy_to_world.transform_point3(xy.extend(0.0))
    }

    /// Map a screen point with an out-of-plane virtual offset to world
    pub fn xyz_to_world(&self, xyz: Vec3) -> Vec3 {
        self.xy_to_world.transform_point3(xyz)
    }

    /// Inverted mapping, world to screen. Fails if the view matrix is singular.
    pub fn world_to_xy_matrix(&self) -> Result<Mat4> {
        checked_inverse(&self.xy_to_world, "slice XY-to-world")
    }
}
