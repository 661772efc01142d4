//! Geometry core for the 4SERC modeler
//!
//! Everything needed to turn the labeled 4D simplex into drawable 3D
//! points:
//!
//! - [`Simplex4D`] and [`Axis`] - the base shape and its S/E/R/C labels
//! - [`RotationAngles`] - composite rotations in the xy, xz and xw planes
//! - [`project`] / [`project_point`] - perspective-style 4D to 3D reduction
//! - [`Scene`] and [`build_helix`] - multi-copy arrangements
//! - [`RenderFrame`] - the annotated hand-off to a rendering collaborator
//! - [`metric`] - the model's own inner product
//!
//! Every operation is a pure function over immutable inputs. A parameter
//! change means re-running the chain simplex -> rotate -> project from
//! scratch; there is no incremental state to keep consistent, and
//! concurrent recomputations need no locking.

mod error;
mod frame;
mod helix;
pub mod metric;
mod projection;
mod rotation;
mod scene;
mod simplex;

pub use error::GeometryError;
pub use frame::{RenderFrame, SIMPLEX_EDGES};
pub use helix::{build_helix, DEFAULT_COPIES, RISE, TWIST_XY, TWIST_XZ};
pub use projection::{project, project_point, FALLBACK_SCALE, VIEW_DISTANCE};
pub use rotation::RotationAngles;
pub use scene::Scene;
pub use simplex::{Axis, Simplex4D, DEFAULT_EDGE_LENGTH};

// Re-export the math types so shells only need this crate
pub use serc4d_math::{Mat4, Vec3, Vec4};
