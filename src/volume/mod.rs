//! Dense scalar volumes with voxel-to-world transforms

pub mod volume;

pub use volume::Volume;
