//! Screen-space rectangles and integer voxel boxes

use crate::core::types::{IVec3, Vec2};

/// 2D bounding rectangle in screen coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenBounds {
    /// Create bounds from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Tight bounds of a point set; empty input yields a degenerate rect at origin
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self::default();
        };
        let mut bounds = Self::new(first, first);
        for &p in rest {
            bounds.expand(p);
        }
        bounds
    }

    /// Expand to include a point
    pub fn expand(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Width (max.x - min.x)
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height (max.y - min.y)
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Inclusive integer box in voxel index (IJK) space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IjkBox {
    pub min: IVec3,
    pub max: IVec3,
}

impl IjkBox {
    /// Create a box from min and max corners (both inclusive)
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Single-voxel box
    pub fn point(ijk: IVec3) -> Self {
        Self { min: ijk, max: ijk }
    }

    /// Componentwise bounds of a corner set
    pub fn from_corners(corners: &[IVec3]) -> Self {
        let mut min = corners[0];
        let mut max = corners[0];
        for &c in &corners[1..] {
            min = min.min(c);
            max = max.max(c);
        }
        Self { min, max }
    }

    /// Expand to include an index
    pub fn expand(&mut self, ijk: IVec3) {
        self.min = self.min.min(ijk);
        self.max = self.max.max(ijk);
    }

    /// Smallest box containing both
    pub fn union(&self, other: &IjkBox) -> IjkBox {
        IjkBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Check if an index lies inside the box
    pub fn contains(&self, ijk: IVec3) -> bool {
        ijk.cmpge(self.min).all() && ijk.cmple(self.max).all()
    }

    /// Number of voxels covered
    pub fn voxel_count(&self) -> usize {
        let size = self.max - self.min + IVec3::ONE;
        if size.cmple(IVec3::ZERO).any() {
            return 0;
        }
        size.x as usize * size.y as usize * size.z as usize
    }
}
