use crate::animation::keyframe::Keyframe;
use crate::animation::pose::Pose;
use crate::errors::{MarionetteError, Result};

/// Keyframe spans shorter than this are treated as instantaneous.
const MIN_KEYFRAME_SPAN: f32 = 1e-6;

/// An ordered set of keyframes forming one playable motion.
///
/// Keyframes are appended in time order at setup time and the animation is
/// read-only during playback. The duration is the time of the last keyframe.
///
/// Every keyframe is checked on insertion:
/// - its time must be finite and non-negative,
/// - it must not be earlier than the previous keyframe,
/// - its pose must have the shape of the first keyframe's pose.
#[derive(Debug, Clone)]
pub struct Animation {
    pub name: String,
    keyframes: Vec<Keyframe>,
}

impl Animation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyframes: Vec::new(),
        }
    }

    /// Builds an animation from keyframes already in time order.
    pub fn from_keyframes(
        name: impl Into<String>,
        keyframes: impl IntoIterator<Item = Keyframe>,
    ) -> Result<Self> {
        let mut animation = Self::new(name);
        for keyframe in keyframes {
            animation.push_keyframe(keyframe)?;
        }
        Ok(animation)
    }

    /// Appends a keyframe after validating its time and pose shape.
    pub fn push_keyframe(&mut self, keyframe: Keyframe) -> Result<()> {
        let index = self.keyframes.len();

        if !keyframe.time.is_finite() || keyframe.time < 0.0 {
            return Err(MarionetteError::InvalidKeyframeTime {
                index,
                time: keyframe.time,
            });
        }

        if let Some(last) = self.keyframes.last()
            && keyframe.time < last.time
        {
            return Err(MarionetteError::KeyframeOutOfOrder {
                index,
                time: keyframe.time,
                previous: last.time,
            });
        }

        if let Some(reference) = self.shape()
            && let Some(path) = reference.shape_mismatch(&keyframe.pose)
        {
            return Err(MarionetteError::ShapeMismatch {
                keyframe: index,
                path,
            });
        }

        self.keyframes.push(keyframe);
        Ok(())
    }

    /// Builder-style [`push_keyframe`](Self::push_keyframe).
    pub fn with_keyframe(mut self, pose: Pose, time: f32) -> Result<Self> {
        self.push_keyframe(Keyframe::new(pose, time))?;
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Time of the last keyframe, or `0.0` for an empty animation.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    /// The reference pose every keyframe must match in shape.
    #[must_use]
    pub fn shape(&self) -> Option<&Pose> {
        self.keyframes.first().map(|k| &k.pose)
    }

    /// Samples the pose at `time` on the animation's local clock.
    ///
    /// Times before the first keyframe return the first pose and times after
    /// the last keyframe return the last pose; there is no extrapolation.
    /// When keyframes share a time, sampling at exactly that instant returns
    /// the later keyframe's pose.
    /// Returns `None` only when the animation has no keyframes.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<Pose> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;

        if time.is_nan() || time <= first.time {
            return Some(first.pose.clone());
        }
        if time >= last.time {
            return Some(last.pose.clone());
        }

        // first.time < time < last.time, so 1 <= next < len.
        let next = self.keyframes.partition_point(|k| k.time <= time);
        let k0 = &self.keyframes[next - 1];
        let k1 = &self.keyframes[next];

        let t = segment_factor(k0.time, k1.time, time);
        Some(Pose::interpolate(&k0.pose, &k1.pose, t))
    }
}

/// Normalized position of `time` between `t0` and `t1`, clamped to `[0, 1]`.
fn segment_factor(t0: f32, t1: f32, time: f32) -> f32 {
    let span = t1 - t0;
    if span > MIN_KEYFRAME_SPAN {
        ((time - t0) / span).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
