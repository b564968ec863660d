//! Spherical brush extrusion across neighboring slices
//!
//! A sphere is approximated by stamping shrinking circles on the slices it
//! spans. The per-slice world spacing along the view normal is not known
//! directly; it is calibrated by sampling the same screen point at two
//! virtual offsets and measuring the world distance between them.

use crate::core::types::{Vec2, Vec3};
use crate::math::bounds::IjkBox;
use crate::brush::params::BrushParameters;
use crate::brush::raster::{self, PaintStats, ScreenRect};
use crate::slice::geometry::SliceGeometry;
use crate::volume::Volume;

/// Virtual offset used to probe the slice stack spacing
const CALIBRATION_OFFSET: f32 = 100.0;

/// Paint the off-plane cross-sections of a spherical brush. The caller paints
/// the origin slice afterwards at full radius, so the slice the user is
/// looking at is updated last.
pub(crate) fn extrude(
    center_xy: Vec2,
    rect: &ScreenRect,
    slice: &SliceGeometry,
    master: &Volume,
    label: &mut Volume,
    params: &BrushParameters,
    stats: &mut PaintStats,
) {
    let spacing = slice_spacing(center_xy, slice);
    let slices_per_side = ((params.radius / spacing) as i32 - 1).max(0);

    for slice_number in 1..=slices_per_side {
        for direction in [-1, 1] {
            let offset = (slice_number * direction) as f32;
            let Some(radius) = cross_section_radius(params.radius, offset, spacing) else {
                continue;
            };

            let center_world = slice.xyz_to_world(Vec3::new(center_xy.x, center_xy.y, offset));
            let corners = raster::corner_indices(rect, offset, slice, label);
            let region = IjkBox::from_corners(&corners);
            raster::scan(region, center_world, radius, master, label, params, stats);
        }
    }
}

/// Estimate the world distance covered by one virtual slice offset.
/// A degenerate stack (zero sampled distance) falls back to 1.0 so sphere
/// painting stays usable.
pub(crate) fn slice_spacing(center_xy: Vec2, slice: &SliceGeometry) -> f32 {
    let near = slice.xyz_to_world(Vec3::new(center_xy.x, center_xy.y, 0.0));
    let far = slice.xyz_to_world(Vec3::new(center_xy.x, center_xy.y, CALIBRATION_OFFSET));
    let spanned = near.distance(far);
    if spanned > 0.0 {
        spanned / CALIBRATION_OFFSET
    } else {
        1.0
    }
}

/// Radius of the sphere's cross-section `offset` slices from center, or
/// `None` when the slice lies outside the sphere.
pub(crate) fn cross_section_radius(radius: f32, offset: f32, spacing: f32) -> Option<f32> {
    let z = offset * spacing;
    let squared = radius * radius - z * z;
    if squared < 0.0 {
        return None;
    }
    Some(squared.sqrt())
}
