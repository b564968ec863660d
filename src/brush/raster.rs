//! Brush rasterization into the label volume
//!
//! A brush stamp turns a screen-space footprint into gated voxel writes:
//! integer screen bounds around the stamp center, bounding corners carried
//! into clamped voxel indices, a degenerate-region collapse so tiny brushes
//! still leave a mark, then a bounding-box scan masking by world-space
//! distance, master-intensity threshold and paint-over policy. Every write is
//! idempotent per voxel, so scan order never affects the final state.

use crate::core::error::Error;
use crate::core::types::{IVec3, Result, Vec2, Vec3};
use crate::math::bounds::IjkBox;
use crate::brush::footprint::BrushFootprint;
use crate::brush::params::{BrushParameters, BrushShape};
use crate::brush::sphere;
use crate::slice::geometry::SliceGeometry;
use crate::slice::transform;
use crate::volume::Volume;

/// Outcome of one or more paint operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Number of voxel writes performed
    pub voxels_written: usize,
    /// Bounding box of all written voxels, if any were written
    pub modified: Option<IjkBox>,
}

impl PaintStats {
    pub(crate) fn record(&mut self, ijk: IVec3) {
        self.voxels_written += 1;
        self.modified = Some(match self.modified {
            Some(mut region) => {
                region.expand(ijk);
                region
            }
            None => IjkBox::point(ijk),
        });
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: &PaintStats) {
        self.voxels_written += other.voxels_written;
        self.modified = match (self.modified, other.modified) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, None) => a,
            (None, b) => b,
        };
    }
}

/// Integer screen-space bounding rectangle of one brush stamp
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScreenRect {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

/// Stamp the brush at a screen position.
///
/// Circle brushes paint the viewed slice; sphere brushes paint the spanned
/// neighbor slices first and the viewed slice last, so the slice under the
/// cursor is always the one visibly updated. Fails fast (no writes) on a
/// non-positive radius.
pub fn paint_brush(
    center_xy: Vec2,
    footprint: &BrushFootprint,
    slice: &SliceGeometry,
    master: &Volume,
    label: &mut Volume,
    params: &BrushParameters,
) -> Result<PaintStats> {
    if !params.radius.is_finite() || params.radius <= 0.0 {
        return Err(Error::Precondition(format!(
            "brush radius must be positive, got {}",
            params.radius
        )));
    }

    let mut stats = PaintStats::default();

    // Footprint bounds around the center, rounded to whole pixels
    // (nearest integer, ties away from zero)
    let bounds = footprint.bounds();
    let rect = ScreenRect {
        left: (center_xy.x + bounds.min.x).round() as i32,
        right: (center_xy.x + bounds.max.x).round() as i32,
        bottom: (center_xy.y + bounds.min.y).round() as i32,
        top: (center_xy.y + bounds.max.y).round() as i32,
    };

    let corners = corner_indices(&rect, 0.0, slice, label);

    // A footprint spanning at most one voxel collapses to a single write at
    // the click point, so every click leaves visible feedback
    if is_degenerate(&corners) {
        paint_point(center_xy, slice, label, params, &mut stats);
        return Ok(stats);
    }

    if params.shape == BrushShape::Sphere {
        sphere::extrude(center_xy, &rect, slice, master, label, params, &mut stats);
    }

    let center_world = slice.xy_to_world(center_xy);
    let region = IjkBox::from_corners(&corners);
    scan(region, center_world, params.radius, master, label, params, &mut stats);

    Ok(stats)
}

/// Write exactly the voxels under the given screen points, skipping any that
/// fall outside the label volume. Radius, threshold and paint-over do not
/// apply; the erase flag does.
pub fn paint_pixels(
    points: &[Vec2],
    slice: &SliceGeometry,
    label: &mut Volume,
    params: &BrushParameters,
) -> PaintStats {
    let mut stats = PaintStats::default();
    for &xy in points {
        paint_point(xy, slice, label, params, &mut stats);
    }
    stats
}

/// Bounding rectangle corners at a virtual slice offset, as voxel indices
/// clamped per axis into the label grid.
pub(crate) fn corner_indices(
    rect: &ScreenRect,
    offset: f32,
    slice: &SliceGeometry,
    label: &Volume,
) -> [IVec3; 4] {
    let max_index = label.dims() - IVec3::ONE;
    let corner = |x: i32, y: i32| {
        let screen = Vec3::new(x as f32, y as f32, offset);
        transform::screen_xyz_to_voxel(screen, slice, label).clamp(IVec3::ZERO, max_index)
    };
    [
        corner(rect.left, rect.top),
        corner(rect.right, rect.top),
        corner(rect.left, rect.bottom),
        corner(rect.right, rect.bottom),
    ]
}

/// True when the clamped corner region spans at most one voxel along either
/// bounding axis. Corner order: [top-left, top-right, bottom-left,
/// bottom-right].
fn is_degenerate(corners: &[IVec3; 4]) -> bool {
    let [top_left, top_right, bottom_left, bottom_right] = *corners;
    let max_column_delta = (top_right - top_left)
        .abs()
        .max((bottom_right - bottom_left).abs())
        .max_element();
    let max_row_delta = (bottom_left - top_left)
        .abs()
        .max((bottom_right - top_right).abs())
        .max_element();
    max_row_delta <= 1 || max_column_delta <= 1
}

/// Single-voxel write at the voxel under a screen point
fn paint_point(
    xy: Vec2,
    slice: &SliceGeometry,
    label: &mut Volume,
    params: &BrushParameters,
    stats: &mut PaintStats,
) {
    let ijk = transform::screen_to_voxel(xy, slice, label);
    if label.set_voxel(ijk, params.target_value()) {
        stats.record(ijk);
    }
}

/// Scan a clamped voxel region and write every voxel surviving the masks:
/// within `radius` of the world-space brush center, inside the threshold
/// range of the master volume (when enabled), and permitted by the
/// paint-over policy.
pub(crate) fn scan(
    region: IjkBox,
    brush_center: Vec3,
    radius: f32,
    master: &Volume,
    label: &mut Volume,
    params: &BrushParameters,
    stats: &mut PaintStats,
) {
    let target = params.target_value();
    for k in region.min.z..=region.max.z {
        for j in region.min.y..=region.max.y {
            for i in region.min.x..=region.max.x {
                let ijk = IVec3::new(i, j, k);
                let Some(current) = label.voxel(ijk) else {
                    continue;
                };

                let world = label.voxel_to_world(ijk);
                if world.distance(brush_center) > radius {
                    continue;
                }

                if params.threshold_enabled {
                    let master_ijk = master.world_to_voxel(world);
                    match master.voxel(master_ijk) {
                        Some(value)
                            if value >= params.threshold_min
                                && value <= params.threshold_max => {}
                        _ => continue,
                    }
                }

                // Paint-over off: voxels labeled by another segment stay put
                if !params.paint_over
                    && current != params.erase_value
                    && current != params.fill_value
                {
                    continue;
                }

                label.set_voxel(ijk, target);
                stats.record(ijk);
            }
        }
    }
}
