//! Slice-view geometry and screen/world/voxel conversions

pub mod geometry;
pub mod transform;

pub use geometry::{SliceGeometry, ViewId};
