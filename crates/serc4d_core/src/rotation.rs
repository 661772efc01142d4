//! Composite coordinate-plane rotations
//!
//! Rotation is confined to the three planes through the first coordinate
//! axis: (0,1), (0,2) and (0,3), called xy, xz and xw. The composite
//! operator is `R = Rxy * Rxz * Rxw` acting on column vectors, so the xw
//! factor reaches each point first and the xy factor last. The three
//! planes share axis 0 and do not commute; the order is part of the
//! contract.

use serc4d_math::{mat4, Mat4, Vec4};
use serde::{Serialize, Deserialize};

/// The three rotation angles, in radians
///
/// The interactive shell keeps these inside [-pi, pi]; the operations
/// here accept any finite value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationAngles {
    /// Angle in the (0,1) plane
    pub xy: f32,
    /// Angle in the (0,2) plane
    pub xz: f32,
    /// Angle in the (0,3) plane
    pub xw: f32,
}

impl RotationAngles {
    /// No rotation
    pub const ZERO: Self = Self { xy: 0.0, xz: 0.0, xw: 0.0 };

    /// Create a new angle triple
    #[inline]
    pub const fn new(xy: f32, xz: f32, xw: f32) -> Self {
        Self { xy, xz, xw }
    }

    /// Build the composite rotation matrix
    ///
    /// Starts from the identity and right-multiplies the xy, xz and xw
    /// factors in that order. A factor whose angle is exactly 0.0 is an
    /// identity contribution and is skipped.
    pub fn matrix(&self) -> Mat4 {
        let mut r = mat4::IDENTITY;
        if self.xy != 0.0 {
            r = mat4::mul(r, mat4::plane_rotation(self.xy, 0, 1));
        }
        if self.xz != 0.0 {
            r = mat4::mul(r, mat4::plane_rotation(self.xz, 0, 2));
        }
        if self.xw != 0.0 {
            r = mat4::mul(r, mat4::plane_rotation(self.xw, 0, 3));
        }
        r
    }

    /// Rotate a single point: `v' = R * v`
    #[inline]
    pub fn rotate_point(&self, v: Vec4) -> Vec4 {
        mat4::transform(self.matrix(), v)
    }

    /// Rotate a sequence of points, producing a new sequence of the same
    /// length and order
    pub fn rotate(&self, points: &[Vec4]) -> Vec<Vec4> {
        let r = self.matrix();
        points.iter().map(|&p| mat4::transform(r, p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    fn sample_points() -> Vec<Vec4> {
        vec![
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.3, -0.7, 1.2, 0.5),
            Vec4::new(-2.0, 1.5, 0.25, -1.0),
            Vec4::new(0.0, 0.0, 0.0, 2.0),
        ]
    }

    #[test]
    fn test_zero_angles_are_identity() {
        let points = sample_points();
        let rotated = RotationAngles::ZERO.rotate(&points);
        assert_eq!(rotated, points);
    }

    #[test]
    fn test_zero_matrix_is_identity() {
        assert_eq!(RotationAngles::ZERO.matrix(), mat4::IDENTITY);
    }

    #[test]
    fn test_single_plane_quarter_turns() {
        use std::f32::consts::FRAC_PI_2;

        let xy = RotationAngles::new(FRAC_PI_2, 0.0, 0.0);
        assert!(vec_approx_eq(xy.rotate_point(Vec4::X), Vec4::Y));
        assert!(vec_approx_eq(xy.rotate_point(Vec4::Y), -Vec4::X));
        assert!(vec_approx_eq(xy.rotate_point(Vec4::Z), Vec4::Z));

        let xz = RotationAngles::new(0.0, FRAC_PI_2, 0.0);
        assert!(vec_approx_eq(xz.rotate_point(Vec4::X), Vec4::Z));

        let xw = RotationAngles::new(0.0, 0.0, FRAC_PI_2);
        assert!(vec_approx_eq(xw.rotate_point(Vec4::X), Vec4::W));
        assert!(vec_approx_eq(xw.rotate_point(Vec4::W), -Vec4::X));
    }

    #[test]
    fn test_composite_equals_staged_application() {
        // R = Rxy * Rxz * Rxw on column vectors: xw reaches the point
        // first, xy last
        let points = sample_points();
        let composite = RotationAngles::new(0.8, -0.5, 1.1).rotate(&points);

        let after_xw = RotationAngles::new(0.0, 0.0, 1.1).rotate(&points);
        let after_xz = RotationAngles::new(0.0, -0.5, 0.0).rotate(&after_xw);
        let staged = RotationAngles::new(0.8, 0.0, 0.0).rotate(&after_xz);

        for (a, b) in composite.iter().zip(staged.iter()) {
            assert!(vec_approx_eq(*a, *b), "composite {:?} != staged {:?}", a, b);
        }
    }

    #[test]
    fn test_rotation_preserves_distances() {
        let points = sample_points();
        let rotated = RotationAngles::new(1.23, -0.7, 2.5).rotate(&points);

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let before = points[i].distance(points[j]);
                let after = rotated[i].distance(rotated[j]);
                assert!(
                    (before - after).abs() < EPSILON,
                    "pair ({}, {}): {} became {}",
                    i,
                    j,
                    before,
                    after
                );
            }
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let angles = RotationAngles::new(-2.9, 0.4, 1.7);
        for p in sample_points() {
            let rotated = angles.rotate_point(p);
            assert!((rotated.length() - p.length()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_rotate_preserves_order_and_count() {
        let points = sample_points();
        let rotated = RotationAngles::new(0.1, 0.2, 0.3).rotate(&points);
        assert_eq!(rotated.len(), points.len());

        // First sample point is the x basis vector; its image determines
        // the first output slot
        let first = RotationAngles::new(0.1, 0.2, 0.3).rotate_point(points[0]);
        assert_eq!(rotated[0], first);
    }

    #[test]
    fn test_angles_beyond_pi_accepted() {
        use std::f32::consts::TAU;

        // A full turn lands back where it started (within float noise)
        let full = RotationAngles::new(TAU, 0.0, 0.0);
        let p = Vec4::new(0.6, -0.2, 0.9, 0.1);
        assert!(vec_approx_eq(full.rotate_point(p), p));
    }
}
