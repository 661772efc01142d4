//! Perspective-style 4D to 3D projection
//!
//! A depth-cue heuristic rather than a physical projection: the first
//! three coordinates are scaled by `2 / (2 + w)`, so points with larger w
//! shrink toward the origin. The w coordinate itself is discarded. At and
//! below `w = -2` the formula diverges, so the scale is pinned to a small
//! constant there instead.

use serc4d_math::{Vec3, Vec4};

/// Viewer distance in the scale formula `VIEW_DISTANCE / (VIEW_DISTANCE + w)`
pub const VIEW_DISTANCE: f32 = 2.0;

/// Scale applied at and below `w = -VIEW_DISTANCE`, where the formula
/// blows up
pub const FALLBACK_SCALE: f32 = 0.1;

/// Project a single 4D point to 3D
#[inline]
pub fn project_point(p: Vec4) -> Vec3 {
    let scale = if p.w > -VIEW_DISTANCE {
        VIEW_DISTANCE / (VIEW_DISTANCE + p.w)
    } else {
        FALLBACK_SCALE
    };
    p.xyz() * scale
}

/// Project a sequence of 4D points, producing one 3D point per input in
/// the same order
pub fn project(points: &[Vec4]) -> Vec<Vec3> {
    points.iter().map(|&p| project_point(p)).collect()
}
