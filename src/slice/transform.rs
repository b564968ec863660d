//! Screen/world/voxel coordinate conversions
//!
//! Pure functions; no state. Voxel indices use nearest-integer rounding so
//! repeated conversions carry no systematic bias toward one grid corner.
//! Singular transforms are rejected where the matrices enter the system
//! (`Volume` construction, `SliceGeometry::world_to_xy_matrix`), so these
//! conversions are total over constructed values.

use crate::core::types::{IVec3, Vec2, Vec3};
use crate::slice::geometry::SliceGeometry;
use crate::volume::Volume;

/// Screen point (with out-of-plane virtual offset) to world coordinates
pub fn screen_to_world(screen: Vec3, slice: &SliceGeometry) -> Vec3 {
    slice.xyz_to_world(screen)
}

/// In-plane screen point to the nearest voxel index of `volume`
pub fn screen_to_voxel(screen: Vec2, slice: &SliceGeometry, volume: &Volume) -> IVec3 {
    screen_xyz_to_voxel(screen.extend(0.0), slice, volume)
}

/// Screen point with virtual slice offset to the nearest voxel index
pub fn screen_xyz_to_voxel(screen: Vec3, slice: &SliceGeometry, volume: &Volume) -> IVec3 {
    let world = slice.xyz_to_world(screen);
    volume.world_to_voxel(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::geometry::ViewId;

    fn volume() -> Volume {
        Volume::new([10, 10, 10], Vec3::ONE, Vec3::ZERO).unwrap()
    }

    #[test]
    fn test_screen_to_voxel_axial() {
        let slice = SliceGeometry::axial(ViewId(0), 1.0, Vec3::new(0.0, 0.0, 5.0));
        let ijk = screen_to_voxel(Vec2::new(5.0, 5.0), &slice, &volume());
        assert_eq!(ijk, IVec3::new(5, 5, 5));
    }

    #[test]
    fn test_screen_to_voxel_rounds_to_nearest() {
        let slice = SliceGeometry::axial(ViewId(0), 1.0, Vec3::ZERO);
        assert_eq!(
            screen_to_voxel(Vec2::new(2.6, 3.4), &slice, &volume()),
            IVec3::new(3, 3, 0)
        );
        // Ties round away from zero, not toward a corner
        assert_eq!(
            screen_to_voxel(Vec2::new(2.5, 2.5), &slice, &volume()),
            IVec3::new(3, 3, 0)
        );
    }

    #[test]
    fn test_screen_to_voxel_oblique() {
        // Sagittal view: screen x -> world y, screen y -> world z, offset -> world x
        let slice = SliceGeometry::sagittal(ViewId(0), 1.0, Vec3::new(4.0, 0.0, 0.0));
        let ijk = screen_xyz_to_voxel(Vec3::new(2.0, 7.0, 3.0), &slice, &volume());
        assert_eq!(ijk, IVec3::new(7, 2, 7));
    }

    #[test]
    fn test_out_of_volume_indices_returned_unclamped() {
        let slice = SliceGeometry::axial(ViewId(0), 1.0, Vec3::ZERO);
        let ijk = screen_to_voxel(Vec2::new(-40.0, 400.0), &slice, &volume());
        assert_eq!(ijk, IVec3::new(-40, 400, 0));
    }

    #[test]
    fn test_screen_to_world_offset() {
        let slice = SliceGeometry::axial(ViewId(0), 1.0, Vec3::ZERO);
        let w = screen_to_world(Vec3::new(1.0, 2.0, 100.0), &slice);
        assert_eq!(w, Vec3::new(1.0, 2.0, 100.0));
    }
}
