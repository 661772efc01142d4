//! Shell view state
//!
//! The mutable state an interactive session owns: which shape is selected
//! and the current rotation angles. The geometry core underneath is
//! stateless; every change here is answered by recomputing the frame
//! wholesale through [`ViewState::render_frame`], and when changes arrive
//! faster than frames are drawn, only the latest state matters.

use serc4d_core::{
    build_helix, project, GeometryError, RenderFrame, RotationAngles, Scene, Simplex4D,
};
use std::f32::consts::PI;

/// View state for one modeler session
pub struct ViewState {
    /// The base shape, built once at startup
    base: Simplex4D,
    /// The currently selected point set (single simplex or helix)
    current: Scene,
    /// Rotation applied on every recomputation
    angles: RotationAngles,
}

impl ViewState {
    /// Create a view showing the unrotated base simplex
    ///
    /// # Errors
    /// Propagates [`GeometryError::InvalidParameter`] from simplex
    /// construction for a non-positive edge length.
    pub fn new(edge_length: f32) -> Result<Self, GeometryError> {
        let base = Simplex4D::new(edge_length)?;
        Ok(Self {
            base,
            current: Scene::from(base),
            angles: RotationAngles::ZERO,
        })
    }

    /// Select the single base simplex
    pub fn show_single(&mut self) {
        self.current = Scene::from(self.base);
        log::debug!("selected single simplex");
    }

    /// Select a helix of `copies` transformed simplices
    ///
    /// On error the previous selection stays in place.
    pub fn show_helix(&mut self, copies: usize) -> Result<(), GeometryError> {
        self.current = build_helix(&self.base, copies)?;
        log::debug!("selected helix with {} copies", copies);
        Ok(())
    }

    /// Set the xy angle, clamped to the slider range [-pi, pi]
    pub fn set_xy(&mut self, angle: f32) {
        self.angles.xy = angle.clamp(-PI, PI);
    }

    /// Set the xz angle, clamped to the slider range [-pi, pi]
    pub fn set_xz(&mut self, angle: f32) {
        self.angles.xz = angle.clamp(-PI, PI);
    }

    /// Set the xw angle, clamped to the slider range [-pi, pi]
    pub fn set_xw(&mut self, angle: f32) {
        self.angles.xw = angle.clamp(-PI, PI);
    }

    /// Set all three angles at once, each clamped to the slider range
    pub fn set_angles(&mut self, angles: RotationAngles) {
        self.set_xy(angles.xy);
        self.set_xz(angles.xz);
        self.set_xw(angles.xw);
    }

    /// Current rotation angles
    #[inline]
    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    /// The base simplex the view was created with
    #[inline]
    pub fn base(&self) -> &Simplex4D {
        &self.base
    }

    /// Reset to the startup view: zero angles, single base simplex
    pub fn reset(&mut self) {
        self.angles = RotationAngles::ZERO;
        self.current = Scene::from(self.base);
        log::debug!("view reset");
    }

    /// Recompute the drawable frame from the current selection and angles
    ///
    /// Runs the full chain: rotate the selected 4D point set, project to
    /// 3D, wrap in a frame.
    pub fn render_frame(&self) -> RenderFrame {
        let rotated = self.angles.rotate(self.current.points());
        RenderFrame::new(project(&rotated))
    }
}
