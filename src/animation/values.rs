use glam::{Quat, Vec3};

/// Values that can be blended between two keyframes.
///
/// `t` is the normalized factor in `[0, 1]`; `t = 0` yields `start` and
/// `t = 1` yields `end`.
pub trait Interpolatable: Clone {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start * (1.0 - t) + end * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        // Weighted form so both endpoints are reproduced exactly.
        *start * (1.0 - t) + *end * t
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        slerp_shortest(*start, *end, t)
    }
}

/// Spherical interpolation along the shorter of the two arcs.
///
/// `q` and `-q` encode the same rotation; when the inputs lie in opposite
/// hemispheres `end` is negated so the blend never sweeps more than 180°.
#[inline]
#[must_use]
pub fn slerp_shortest(start: Quat, end: Quat, t: f32) -> Quat {
    let end = if start.dot(end) < 0.0 { -end } else { end };
    start.slerp(end, t)
}
