//! The 4SERC metric tensor
//!
//! The model's own inner product, distinct from the Euclidean one used
//! for rendering: each axis has unit affinity with itself and a -1/4
//! affinity with every other axis. The matrix is symmetric, so the
//! column-major storage reads the same either way.

use serc4d_math::{mat4, Mat4, Vec4};

/// Metric matrix g: 1 on the diagonal, -1/4 off it
pub const METRIC: Mat4 = [
    [1.0, -0.25, -0.25, -0.25],
    [-0.25, 1.0, -0.25, -0.25],
    [-0.25, -0.25, 1.0, -0.25],
    [-0.25, -0.25, -0.25, 1.0],
];

/// Bilinear form `a . g . b` under the model metric
pub fn inner(a: Vec4, b: Vec4) -> f32 {
    a.dot(mat4::transform(METRIC, b))
}

/// Quadratic form `v . g . v`
pub fn quadratic(v: Vec4) -> f32 {
    inner(v, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_metric_is_symmetric() {
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(METRIC[i][j], METRIC[j][i]);
            }
        }
    }

    #[test]
    fn test_basis_self_affinity_is_one() {
        for axis in [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W] {
            assert_eq!(quadratic(axis), 1.0);
        }
    }

    #[test]
    fn test_distinct_axes_anticorrelate() {
        let basis = [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W];
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert_eq!(inner(basis[i], basis[j]), -0.25);
                }
            }
        }
    }

    #[test]
    fn test_inner_is_symmetric() {
        let a = Vec4::new(1.0, -2.0, 0.5, 3.0);
        let b = Vec4::new(-0.25, 1.5, 2.0, -1.0);
        assert!((inner(a, b) - inner(b, a)).abs() < EPSILON);
    }

    #[test]
    fn test_inner_is_bilinear() {
        let a = Vec4::new(0.5, 1.0, -1.0, 2.0);
        let b = Vec4::new(1.0, 0.0, 3.0, -0.5);
        let c = Vec4::new(-2.0, 1.0, 0.25, 1.0);

        let lhs = inner(a + b, c);
        let rhs = inner(a, c) + inner(b, c);
        assert!((lhs - rhs).abs() < EPSILON);

        let lhs = inner(a * 3.0, b);
        let rhs = 3.0 * inner(a, b);
        assert!((lhs - rhs).abs() < EPSILON);
    }

    #[test]
    fn test_all_axes_sum_has_small_norm() {
        // The axes pull against each other: the uniform mix (1,1,1,1) has
        // quadratic form 4 * 1 + 12 * (-1/4) = 1
        let uniform = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((quadratic(uniform) - 1.0).abs() < EPSILON);
    }
}
