use std::f32::consts::PI;

#[inline]
#[must_use]
pub const fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

#[inline]
#[must_use]
pub const fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}
