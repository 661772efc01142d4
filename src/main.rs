//! 4SERC Modeler - headless driver
//!
//! Builds the labeled 4D simplex (or the tetrahelix), applies the
//! configured rotation, projects to 3D and prints the frame a rendering
//! collaborator would receive.

use serc4d::config::{AppConfig, ShapeMode};
use serc4d::state::ViewState;

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting 4SERC modeler");

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Build the view from config
    let mut state = ViewState::new(config.simplex.edge_length)
        .unwrap_or_else(|e| panic!("Failed to build base simplex: {}", e));

    match config.view.mode {
        ShapeMode::Single => state.show_single(),
        ShapeMode::Helix => state
            .show_helix(config.helix.copies)
            .unwrap_or_else(|e| panic!("Failed to build helix: {}", e)),
    }
    state.set_angles(config.view.angles);

    log::info!(
        "Mode {:?}, edge length {}, angles {:?}",
        config.view.mode,
        config.simplex.edge_length,
        state.angles()
    );

    // Recompute and print the frame
    let frame = state.render_frame();
    println!("{} projected vertices", frame.vertex_count());
    for (i, p) in frame.points.iter().enumerate() {
        match frame.label(i) {
            Some(label) => println!("  {}  ({:+.4}, {:+.4}, {:+.4})", label, p.x, p.y, p.z),
            None => println!("  {:>2} ({:+.4}, {:+.4}, {:+.4})", i, p.x, p.y, p.z),
        }
    }

    if let Some(edges) = frame.edges() {
        let pairs: Vec<String> = edges.iter().map(|e| format!("{}-{}", e[0], e[1])).collect();
        println!("edges: {}", pairs.join(" "));
    }
}
