//! Checked matrix inversion and row-axis selection

use crate::core::error::Error;
use crate::core::types::{Mat4, Result};

/// Determinants below this magnitude are treated as singular
const SINGULAR_EPSILON: f32 = 1e-12;

/// Invert a matrix, failing instead of producing a garbage inverse.
///
/// `context` names the transform in the error message.
pub fn checked_inverse(m: &Mat4, context: &str) -> Result<Mat4> {
    let det = m.determinant();
    if det.abs() < SINGULAR_EPSILON || !det.is_finite() {
        return Err(Error::InvalidTransform(context.to_string()));
    }
    Ok(m.inverse())
}

/// Index of the column (0..3) with the largest magnitude in row `row`.
///
/// Identifies the world axis contributing most to one screen axis of an
/// oblique view transform.
pub fn dominant_row_axis(m: &Mat4, row: usize) -> usize {
    let r = m.row(row);
    let coefficients = [r.x.abs(), r.y.abs(), r.z.abs()];
    let mut max_index = 0;
    let mut maximum = 0.0;
    for (index, &c) in coefficients.iter().enumerate() {
        if c > maximum {
            maximum = c;
            max_index = index;
        }
    }
    max_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Vec3, Vec4};

    #[test]
    fn test_checked_inverse_identity() {
        let inv = checked_inverse(&Mat4::IDENTITY, "test").unwrap();
        assert_eq!(inv, Mat4::IDENTITY);
    }

    #[test]
    fn test_checked_inverse_singular() {
        let singular = Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0));
        assert!(checked_inverse(&singular, "test").is_err());
    }

    #[test]
    fn test_checked_inverse_small_scale() {
        // Sub-millimeter spacing must not be mistaken for singularity
        let m = Mat4::from_scale(Vec3::splat(0.001));
        let inv = checked_inverse(&m, "test").unwrap();
        let p = inv.transform_point3(Vec3::new(0.001, 0.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_dominant_row_axis() {
        assert_eq!(dominant_row_axis(&Mat4::IDENTITY, 0), 0);
        assert_eq!(dominant_row_axis(&Mat4::IDENTITY, 1), 1);

        // Row 0 dominated by world z (e.g. a sagittal view)
        let m = Mat4::from_cols(
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(dominant_row_axis(&m, 0), 2);
    }
}
