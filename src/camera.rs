use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use crate::core::viewport::Viewport;
use glam::{Mat4, Vec3};

/// Combined projection * view for the fixed scene camera.
///
/// The camera sits on +Z at `CAMERA_Z` looking at the origin; only the aspect
/// ratio changes with the viewport.
#[inline]
pub fn view_projection(viewport: &Viewport) -> Mat4 {
    projection(viewport.aspect()) * view()
}

#[inline]
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR)
}

#[inline]
pub fn view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y)
}

/// World-space edge length of a particle quad that matches a point sprite of
/// `size` under a perspective camera with vertical FOV `CAMERA_FOV_DEG`.
#[inline]
pub fn sprite_world_size(size: f32) -> f32 {
    size * (CAMERA_FOV_DEG.to_radians() * 0.5).tan()
}
