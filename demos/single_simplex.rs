//! Single simplex walkthrough
//!
//! The simplest 4SERC example: build the labeled base simplex, rotate it
//! in all three coordinate planes and print the projected 3D frame.
//!
//! This example demonstrates:
//! - Creating a Simplex4D and reading its realized edge length
//! - Composing a rotation from xy, xz and xw angles
//! - Projecting 4D points to 3D
//! - Reading labels and edges off the RenderFrame
//!
//! Run with: `cargo run --example single_simplex`

use serc4d_core::{project, RenderFrame, RotationAngles, Simplex4D};

fn main() {
    env_logger::init();

    // Build the base shape
    let simplex = Simplex4D::new(1.0).expect("edge length is positive");
    println!("edge parameter:  {}", simplex.edge_length());
    println!("realized edge:   {:.4}", simplex.realized_edge_length());

    // Turn it in all three planes and project
    let angles = RotationAngles::new(0.8, -0.4, 1.2);
    let rotated = angles.rotate(simplex.vertices());
    let frame = RenderFrame::new(project(&rotated));

    println!("\nprojected vertices (angles {:?}):", angles);
    for (i, p) in frame.points.iter().enumerate() {
        let label = frame.label(i).unwrap_or("?");
        let [r, g, b, _] = frame.vertex_color(i);
        println!(
            "  {}  ({:+.4}, {:+.4}, {:+.4})  color ({:.1}, {:.1}, {:.1})",
            label, p.x, p.y, p.z, r, g, b
        );
    }

    if let Some(edges) = frame.edges() {
        let pairs: Vec<String> = edges.iter().map(|e| format!("{}-{}", e[0], e[1])).collect();
        println!("\nedges: {}", pairs.join(" "));
    }
}
