//! 4D Mathematics Library
//!
//! This crate provides the vector and matrix types the 4SERC modeler is
//! built on.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector, the target space of projection
//! - [`Mat4`] - 4x4 matrix for plane rotations (see [`mat4`] for the
//!   column-vector convention)

mod vec3;
mod vec4;
pub mod mat4;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat4::Mat4;
