//! Dense 3D scalar grid with an IJK-to-world transform
//!
//! One type serves both roles in the paint pipeline: the read-only master
//! (grayscale reference for threshold gating) and the mutable label volume.

use crate::core::error::Error;
use crate::core::types::{IVec3, Mat4, Result, Vec3};
use crate::math::matrix::checked_inverse;

/// Dense scalar volume addressed by integer IJK indices
#[derive(Debug, Clone)]
pub struct Volume {
    dims: IVec3,
    spacing: Vec3,
    ijk_to_world: Mat4,
    world_to_ijk: Mat4,
    data: Vec<f32>,
}

impl Volume {
    /// Create an axis-aligned volume from dimensions, spacing (world units per
    /// voxel along each axis) and the world position of voxel (0,0,0).
    ///
    /// Fails if any dimension is zero or any spacing component is not a
    /// positive finite number.
    pub fn new(dims: [u32; 3], spacing: Vec3, origin: Vec3) -> Result<Self> {
        if dims.iter().any(|&d| d == 0) {
            return Err(Error::Volume(format!("zero dimension: {:?}", dims)));
        }
        if spacing.cmple(Vec3::ZERO).any() || !spacing.is_finite() {
            return Err(Error::Volume(format!("invalid spacing: {:?}", spacing)));
        }
        let ijk_to_world = Mat4::from_translation(origin) * Mat4::from_scale(spacing);
        Self::with_transform(dims, spacing, ijk_to_world)
    }

    /// Create a volume with an arbitrary (possibly oblique) IJK-to-world
    /// transform. Fails with `InvalidTransform` if the matrix is singular.
    pub fn with_transform(dims: [u32; 3], spacing: Vec3, ijk_to_world: Mat4) -> Result<Self> {
        if dims.iter().any(|&d| d == 0) {
            return Err(Error::Volume(format!("zero dimension: {:?}", dims)));
        }
        let world_to_ijk = checked_inverse(&ijk_to_world, "volume IJK-to-world")?;
        let len = dims[0] as usize * dims[1] as usize * dims[2] as usize;
        Ok(Self {
            dims: IVec3::new(dims[0] as i32, dims[1] as i32, dims[2] as i32),
            spacing,
            ijk_to_world,
            world_to_ijk,
            data: vec![0.0; len],
        })
    }

    /// Grid dimensions [nx, ny, nz]
    pub fn dims(&self) -> IVec3 {
        self.dims
    }

    /// Voxel spacing in world units
    pub fn spacing(&self) -> Vec3 {
        self.spacing
    }

    /// Smallest spacing component
    pub fn min_spacing(&self) -> f32 {
        self.spacing.min_element()
    }

    /// Physical extent of the grid along each axis (dims * spacing)
    pub fn world_extent(&self) -> Vec3 {
        self.dims.as_vec3() * self.spacing
    }

    /// IJK-to-world transform
    pub fn ijk_to_world(&self) -> Mat4 {
        self.ijk_to_world
    }

    /// World-to-IJK transform (inverted once at construction)
    pub fn world_to_ijk(&self) -> Mat4 {
        self.world_to_ijk
    }

    /// Check if an index lies inside the grid
    pub fn contains(&self, ijk: IVec3) -> bool {
        ijk.cmpge(IVec3::ZERO).all() && ijk.cmplt(self.dims).all()
    }

    /// World position of a voxel center
    pub fn voxel_to_world(&self, ijk: IVec3) -> Vec3 {
        self.ijk_to_world.transform_point3(ijk.as_vec3())
    }

    /// Nearest voxel index for a world position (may be out of bounds)
    pub fn world_to_voxel(&self, world: Vec3) -> IVec3 {
        let continuous = self.world_to_ijk.transform_point3(world);
        continuous.round().as_ivec3()
    }

    /// Read a voxel; `None` if the index is outside the grid
    pub fn voxel(&self, ijk: IVec3) -> Option<f32> {
        self.index(ijk).map(|i| self.data[i])
    }

    /// Write a voxel; returns false (and writes nothing) if out of bounds
    pub fn set_voxel(&mut self, ijk: IVec3, value: f32) -> bool {
        match self.index(ijk) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Fill the whole grid with one value
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Flat scalar data in x-fastest order
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Raw bytes of the scalar data, for interop with external buffers
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Number of voxels holding exactly `value`
    pub fn count_value(&self, value: f32) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    fn index(&self, ijk: IVec3) -> Option<usize> {
        if !self.contains(ijk) {
            return None;
        }
        let (nx, ny) = (self.dims.x as usize, self.dims.y as usize);
        Some((ijk.z as usize * ny + ijk.y as usize) * nx + ijk.x as usize)
    }
}
