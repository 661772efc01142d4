//! Tetrahelix scene composition
//!
//! Stacks rotated copies of the base simplex into a helix: copy i is
//! rotated by `(i * TWIST_XY, i * TWIST_XZ, 0)` and lifted by `i * RISE`
//! along the third coordinate (the R axis), all in 4D space before any
//! projection. Blocks are concatenated in increasing i order, so copy i
//! occupies point indices `4*i .. 4*i+4`.

use crate::error::GeometryError;
use crate::rotation::RotationAngles;
use crate::scene::Scene;
use crate::simplex::Simplex4D;

/// Default number of simplex copies in a helix
pub const DEFAULT_COPIES: usize = 5;

/// Per-copy rotation increment in the xy plane, in radians
pub const TWIST_XY: f32 = 0.5;

/// Per-copy rotation increment in the xz plane, in radians
pub const TWIST_XZ: f32 = 0.3;

/// Per-copy lift along the R axis
pub const RISE: f32 = 0.5;

/// Build a helix of `copies` transformed simplices
///
/// Copy 0 is the base simplex untouched; each later copy adds another
/// twist and rise increment.
///
/// # Errors
/// Returns [`GeometryError::InvalidParameter`] when `copies` is 0; an
/// empty helix has nothing to render and is always a caller bug.
pub fn build_helix(base: &Simplex4D, copies: usize) -> Result<Scene, GeometryError> {
    if copies == 0 {
        return Err(GeometryError::InvalidParameter(
            "copies must be at least 1, got 0".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(copies * 4);
    for i in 0..copies {
        let step = i as f32;
        let angles = RotationAngles::new(step * TWIST_XY, step * TWIST_XZ, 0.0);
        let rise = step * RISE;

        for mut p in angles.rotate(base.vertices()) {
            p.z += rise;
            points.push(p);
        }
    }

    Ok(Scene::from_points(points))
}
