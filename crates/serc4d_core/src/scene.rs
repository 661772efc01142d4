//! Renderable 4D point sets
//!
//! A [`Scene`] is the concatenation of one or more transformed simplex
//! copies, treated downstream as a single flat point sequence. Only its
//! length is structurally meaningful: a scene of exactly 4 points is
//! rendering-equivalent to a single simplex and gets edges and labels
//! attached when framed.

use serc4d_math::Vec4;

use crate::simplex::Simplex4D;

/// An ordered collection of 4D points, 4 per simplex copy
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    points: Vec<Vec4>,
}

impl Scene {
    /// Wrap an existing point sequence
    ///
    /// Points come in whole simplex blocks: `4 * k` of them, k >= 1, in
    /// composition order. Checked in debug builds only.
    pub fn from_points(points: Vec<Vec4>) -> Self {
        debug_assert!(
            !points.is_empty() && points.len() % 4 == 0,
            "scene points must form whole blocks of 4"
        );
        Self { points }
    }

    /// The points, in composition order
    #[inline]
    pub fn points(&self) -> &[Vec4] {
        &self.points
    }

    /// Number of points in the scene
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// True when the scene is a single simplex (exactly 4 points)
    #[inline]
    pub fn is_single_simplex(&self) -> bool {
        self.points.len() == 4
    }
}

impl From<Simplex4D> for Scene {
    fn from(simplex: Simplex4D) -> Self {
        Self {
            points: simplex.vertices().to_vec(),
        }
    }
}
