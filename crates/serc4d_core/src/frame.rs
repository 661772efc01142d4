//! Render hand-off frame
//!
//! The projected 3D points plus the annotations a rendering collaborator
//! draws from. A frame of exactly 4 points is a single simplex and gets
//! the fixed edge list and the S/E/R/C vertex labels; any other length is
//! rendered as bare points. Vertex colors cycle through the four axis
//! colors in either case.

use serc4d_math::Vec3;

use crate::simplex::Axis;

/// The 6 edges of a 4-vertex simplex, as vertex index pairs
pub const SIMPLEX_EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

/// A projected frame ready for rendering
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    /// Projected vertex positions, in scene order
    pub points: Vec<Vec3>,
}

impl RenderFrame {
    /// Wrap projected points into a frame
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Number of vertices in the frame
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// True when the frame should be drawn with edges and labels
    #[inline]
    pub fn is_single_simplex(&self) -> bool {
        self.points.len() == 4
    }

    /// Edge list, present only for single-simplex frames
    pub fn edges(&self) -> Option<&'static [[usize; 2]; 6]> {
        self.is_single_simplex().then_some(&SIMPLEX_EDGES)
    }

    /// Label for a vertex: the axis letter on single-simplex frames,
    /// nothing otherwise
    pub fn label(&self, index: usize) -> Option<&'static str> {
        if self.is_single_simplex() && index < 4 {
            Some(Axis::ALL[index].label())
        } else {
            None
        }
    }

    /// Display color for a vertex, cycling through the axis colors
    pub fn vertex_color(&self, index: usize) -> [f32; 4] {
        Axis::ALL[index % 4].color()
    }
}
