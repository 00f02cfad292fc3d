//! View angles and the orthographic projection box.

use glam::{Mat4, Vec2, Vec3};

/// Degrees added or removed per arrow key press.
pub const ANGLE_STEP: i32 = 5;
/// Default half-extent of the orthographic box.
pub const DEFAULT_EXTENT: f64 = 55.0;

/// Camera state: azimuth and elevation in whole degrees plus the box size.
///
/// Angles are reduced with a truncating remainder after every change, so
/// they always lie strictly inside `(-360, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Rotation about the y axis.
    pub azimuth: i32,
    /// Rotation about the x axis.
    pub elevation: i32,
    /// Half-extent of the orthographic box.
    pub extent: f64,
}

impl ViewState {
    pub fn new(extent: f64) -> Self {
        Self {
            azimuth: 0,
            elevation: 0,
            extent,
        }
    }

    /// Add to the angles, keeping each within (-360, 360).
    pub fn rotate(&mut self, d_azimuth: i32, d_elevation: i32) {
        self.azimuth = (self.azimuth + d_azimuth) % 360;
        self.elevation = (self.elevation + d_elevation) % 360;
    }

    /// Zero the angles and restore the box size.
    pub fn reset(&mut self, extent: f64) {
        *self = Self::new(extent);
    }

    /// Elevation about x, applied after azimuth about y.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x((self.elevation as f32).to_radians())
            * Mat4::from_rotation_y((self.azimuth as f32).to_radians())
    }

    /// Orthographic box widened by the window's aspect ratio.
    ///
    /// The extent is used as given: a negative one mirrors the box and zero
    /// gives a non-finite matrix, so nothing is drawn.
    pub fn projection(&self, width: u32, height: u32) -> Mat4 {
        let aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        let e = self.extent as f32;
        Mat4::orthographic_rh(-e * aspect, e * aspect, -e, e, -e, e)
    }

    pub fn view_proj(&self, width: u32, height: u32) -> Mat4 {
        self.projection(width, height) * self.model_matrix()
    }
}

/// Window position of a world point, origin at the top-left corner.
///
/// Returns `None` when the point falls outside the view volume, so labels
/// behind or beyond the box are not drawn. A zero-sized box has no volume
/// and projects nothing.
pub fn project_to_screen(view_proj: Mat4, point: Vec3, size: Vec2) -> Option<Vec2> {
    let clip = view_proj * point.extend(1.0);
    if !clip.is_finite() || clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * size.x,
        (1.0 - ndc.y) * 0.5 * size.y,
    ))
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENT)
    }
}
