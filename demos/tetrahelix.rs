//! Tetrahelix composition
//!
//! Stacks rotated copies of the base simplex into a helix and projects
//! the whole arrangement at once.
//!
//! This example demonstrates:
//! - Building a multi-copy Scene with build_helix
//! - How the per-copy twist and rise show up in the projected points
//! - That multi-block frames carry no edges or labels, only cycling colors
//!
//! Run with: `cargo run --example tetrahelix`

use serc4d_core::{build_helix, project, RenderFrame, RotationAngles, Simplex4D, DEFAULT_COPIES};

fn main() {
    env_logger::init();

    let base = Simplex4D::new(1.0).expect("edge length is positive");
    let scene = build_helix(&base, DEFAULT_COPIES).expect("copy count is positive");
    println!(
        "helix of {} copies, {} points",
        DEFAULT_COPIES,
        scene.vertex_count()
    );

    // A gentle overall turn on top of the per-copy twists
    let angles = RotationAngles::new(0.3, 0.0, 0.6);
    let rotated = angles.rotate(scene.points());
    let frame = RenderFrame::new(project(&rotated));

    assert!(frame.edges().is_none(), "helix frames are bare points");

    for (block, points) in frame.points.chunks(4).enumerate() {
        println!("copy {}:", block);
        for (j, p) in points.iter().enumerate() {
            let [r, g, b, _] = frame.vertex_color(block * 4 + j);
            println!(
                "  ({:+.4}, {:+.4}, {:+.4})  color ({:.1}, {:.1}, {:.1})",
                p.x, p.y, p.z, r, g, b
            );
        }
    }
}
