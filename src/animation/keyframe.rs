use crate::animation::pose::Pose;

/// An authored pose anchored at a time on its animation's local clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub pose: Pose,
    /// Seconds from the start of the animation.
    pub time: f32,
}

impl Keyframe {
    #[must_use]
    pub fn new(pose: Pose, time: f32) -> Self {
        Self { pose, time }
    }
}
