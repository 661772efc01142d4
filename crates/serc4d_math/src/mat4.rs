//! 4x4 Matrix utilities for 4D rotations
//!
//! Convention: matrices are stored column-major (`m[col][row]`) and points
//! are column vectors, so [`transform`] computes `M * v` and
//! `mul(a, b)` composes `a * b` (apply `b` first, then `a`). Composite
//! rotations are therefore built by right-multiplying factors in the order
//! they should be named, and applied to each point in one step.

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a coordinate plane of 4D space.
///
/// A positive angle turns axis `p1` toward axis `p2`; the two axes not
/// named are left fixed.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=x, 1=y, 2=z, 3=w)
///
/// # Example
/// ```
/// use serc4d_math::mat4::plane_rotation;
/// // Quarter turn in the xy plane
/// let m = plane_rotation(std::f32::consts::FRAC_PI_2, 0, 1);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    // Rotation in plane p1-p2
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for (col, out_col) in result.iter_mut().enumerate() {
        for (row, out) in out_col.iter_mut().enumerate() {
            let mut acc = 0.0;
            for k in 0..4 {
                acc += a[k][row] * b[col][k];
            }
            *out = acc;
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}
