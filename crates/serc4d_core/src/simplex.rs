//! Regular 4-vertex simplex geometry
//!
//! The base shape of the modeler: one vertex per model axis, vertex i
//! placed at distance s along coordinate axis i with
//! `s = sqrt(edge_length / 2.5)`. All six vertex pairs are then
//! equidistant at `s * sqrt(2)`, so the shape is a regular simplex even
//! though the realized edge differs from the `edge_length` parameter
//! (see [`Simplex4D::realized_edge_length`]).

use serc4d_math::Vec4;

use crate::error::GeometryError;

/// Default edge-length parameter for the base simplex
pub const DEFAULT_EDGE_LENGTH: f32 = 1.0;

/// Divisor in the vertex placement formula `s = sqrt(edge_length / 2.5)`
const EDGE_DIVISOR: f32 = 2.5;

/// The four model axes, in vertex order
///
/// S, E and R ride on the 3D x, y, z axes after projection; C rides on
/// the w coordinate and shows up only through the projection scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    S,
    E,
    R,
    C,
}

impl Axis {
    /// All axes in vertex order
    pub const ALL: [Axis; 4] = [Axis::S, Axis::E, Axis::R, Axis::C];

    /// Vertex (and coordinate) index of this axis
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::S => 0,
            Axis::E => 1,
            Axis::R => 2,
            Axis::C => 3,
        }
    }

    /// Single-letter label for annotated vertex rendering
    pub fn label(self) -> &'static str {
        match self {
            Axis::S => "S",
            Axis::E => "E",
            Axis::R => "R",
            Axis::C => "C",
        }
    }

    /// Display color (RGBA) for this axis' vertex
    pub fn color(self) -> [f32; 4] {
        match self {
            Axis::S => [1.0, 0.0, 0.0, 1.0], // red
            Axis::E => [0.0, 1.0, 0.0, 1.0], // green
            Axis::R => [0.0, 0.0, 1.0, 1.0], // blue
            Axis::C => [0.5, 0.0, 0.5, 1.0], // purple
        }
    }
}

/// A regular 4-vertex simplex in 4D space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simplex4D {
    /// The edge-length parameter the simplex was built from
    edge_length: f32,
    /// One vertex per model axis, in S, E, R, C order
    vertices: [Vec4; 4],
}

impl Simplex4D {
    /// Create a simplex from its edge-length parameter
    ///
    /// # Arguments
    /// * `edge_length` - Scale parameter; must be a positive finite number
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidParameter`] for zero, negative or
    /// non-finite edge lengths, which would collapse the shape to a point
    /// or worse.
    pub fn new(edge_length: f32) -> Result<Self, GeometryError> {
        if !edge_length.is_finite() || edge_length <= 0.0 {
            return Err(GeometryError::InvalidParameter(format!(
                "edge_length must be a positive finite number, got {}",
                edge_length
            )));
        }

        let s = (edge_length / EDGE_DIVISOR).sqrt();
        let vertices = [
            Vec4::new(s, 0.0, 0.0, 0.0), // S
            Vec4::new(0.0, s, 0.0, 0.0), // E
            Vec4::new(0.0, 0.0, s, 0.0), // R
            Vec4::new(0.0, 0.0, 0.0, s), // C
        ];

        Ok(Self {
            edge_length,
            vertices,
        })
    }

    /// The edge-length parameter this simplex was built from
    #[inline]
    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    /// The pairwise vertex distance actually realized:
    /// `sqrt(2 * edge_length / 2.5)`
    ///
    /// The placement formula makes this differ from the `edge_length`
    /// parameter; renderers that size annotations off the geometry should
    /// use this value.
    #[inline]
    pub fn realized_edge_length(&self) -> f32 {
        (2.0 * self.edge_length / EDGE_DIVISOR).sqrt()
    }

    /// All four vertices, in axis order
    #[inline]
    pub fn vertices(&self) -> &[Vec4; 4] {
        &self.vertices
    }

    /// The vertex carrying a given model axis
    #[inline]
    pub fn vertex(&self, axis: Axis) -> Vec4 {
        self.vertices[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_vertices_on_coordinate_axes() {
        let simplex = Simplex4D::new(1.0).unwrap();
        let s = (1.0f32 / 2.5).sqrt();

        assert_eq!(simplex.vertex(Axis::S), Vec4::new(s, 0.0, 0.0, 0.0));
        assert_eq!(simplex.vertex(Axis::E), Vec4::new(0.0, s, 0.0, 0.0));
        assert_eq!(simplex.vertex(Axis::R), Vec4::new(0.0, 0.0, s, 0.0));
        assert_eq!(simplex.vertex(Axis::C), Vec4::new(0.0, 0.0, 0.0, s));
    }

    #[test]
    fn test_all_pairs_equidistant() {
        for edge_length in [0.5f32, 1.0, 2.0, 10.0] {
            let simplex = Simplex4D::new(edge_length).unwrap();
            let expected = (2.0 * edge_length / 2.5).sqrt();

            let verts = simplex.vertices();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    let d = verts[i].distance(verts[j]);
                    assert!(
                        (d - expected).abs() < EPSILON,
                        "pair ({}, {}) at distance {}, expected {}",
                        i,
                        j,
                        d,
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_realized_edge_length_matches_geometry() {
        let simplex = Simplex4D::new(3.0).unwrap();
        let d = simplex.vertex(Axis::S).distance(simplex.vertex(Axis::C));
        assert!((simplex.realized_edge_length() - d).abs() < EPSILON);
    }

    #[test]
    fn test_edge_length_accessor() {
        let simplex = Simplex4D::new(2.5).unwrap();
        assert_eq!(simplex.edge_length(), 2.5);
    }

    #[test]
    fn test_rejects_zero_edge_length() {
        assert!(matches!(
            Simplex4D::new(0.0),
            Err(GeometryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_negative_edge_length() {
        assert!(matches!(
            Simplex4D::new(-1.0),
            Err(GeometryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_edge_length() {
        assert!(Simplex4D::new(f32::NAN).is_err());
        assert!(Simplex4D::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_axis_order_and_labels() {
        assert_eq!(Axis::ALL.len(), 4);
        let labels: Vec<&str> = Axis::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["S", "E", "R", "C"]);
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_axis_colors_distinct() {
        let colors: Vec<[f32; 4]> = Axis::ALL.iter().map(|a| a.color()).collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }
}
