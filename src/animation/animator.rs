use crate::animation::clip::Animation;
use crate::animation::pose::Pose;
use crate::errors::{MarionetteError, Result};
use crate::scene::skeleton::Skeleton;

/// Index of an animation registered on an [`Animator`].
pub type AnimationIndex = usize;

/// Playback state derived from the animator's play and loop flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    /// Plays to the end and holds the last frame.
    PlayingOnce,
    /// Wraps back to the start at the end of the animation.
    PlayingLooping,
}

/// Drives one animation at a time and writes its pose onto a skeleton.
///
/// The animator never owns the skeleton: the render layer keeps it and lends
/// it mutably to [`update`](Self::update) once per frame. Bones are mutated
/// in place, so bone handles held elsewhere stay valid across frames.
///
/// # Timing
///
/// `update` receives an absolute clock value. The first update after playback
/// starts captures it as the start time, and later updates play the active
/// animation from `query_time - start_time`. Looping wraps that elapsed time
/// by the duration; one-shot playback clamps it and holds the last frame.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    animations: Vec<Animation>,
    active: Option<AnimationIndex>,
    playing: bool,
    looping: bool,

    start_time: Option<f32>,
    local_time: Option<f32>,

    /// Pose captured from the bound skeleton; every animation must match its shape.
    bind_shape: Option<Pose>,
    warned_empty: bool,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an animator that only accepts animations shaped like `skeleton`.
    #[must_use]
    pub fn for_skeleton(skeleton: &Skeleton) -> Self {
        Self {
            bind_shape: Some(skeleton.capture_pose()),
            ..Self::default()
        }
    }

    /// Registers an animation. The first one registered becomes active.
    pub fn add_animation(&mut self, animation: Animation) -> Result<AnimationIndex> {
        if let Some(shape) = animation.shape()
            && let Some(reference) = self.reference_shape()
            && let Some(path) = reference.shape_mismatch(shape)
        {
            return Err(MarionetteError::ShapeMismatch { keyframe: 0, path });
        }

        let index = self.animations.len();
        log::info!(
            "Registered animation '{}' ({} keyframes, {:.2}s) at index {index}",
            animation.name,
            animation.len(),
            animation.duration()
        );
        self.animations.push(animation);

        if self.active.is_none() {
            self.active = Some(index);
        }
        Ok(index)
    }

    /// Makes another animation active. Playback restarts from its beginning.
    pub fn select(&mut self, index: AnimationIndex) -> Result<()> {
        let Some(animation) = self.animations.get(index) else {
            return Err(MarionetteError::AnimationIndexOutOfBounds {
                index,
                len: self.animations.len(),
            });
        };

        log::info!("Selected animation '{}'", animation.name);
        self.active = Some(index);
        self.warned_empty = false;
        self.restart();
        Ok(())
    }

    pub fn play(&mut self) {
        self.set_playing(true);
    }

    /// Stops playback. The skeleton keeps the last pose written to it.
    pub fn stop(&mut self) {
        self.set_playing(false);
    }

    /// Entering the playing state re-captures the start time on the next update.
    pub fn set_playing(&mut self, playing: bool) {
        if playing && !self.playing {
            log::debug!("Animator: play");
            self.start_time = None;
        } else if !playing && self.playing {
            log::debug!("Animator: stop");
        }
        self.playing = playing;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Forgets the captured start time; the next update plays from time zero.
    pub fn restart(&mut self) {
        self.start_time = None;
        self.local_time = None;
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        match (self.playing, self.looping) {
            (false, _) => PlaybackState::Stopped,
            (true, false) => PlaybackState::PlayingOnce,
            (true, true) => PlaybackState::PlayingLooping,
        }
    }

    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<AnimationIndex> {
        self.active
    }

    #[must_use]
    pub fn active_animation(&self) -> Option<&Animation> {
        self.active.and_then(|index| self.animations.get(index))
    }

    #[inline]
    #[must_use]
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Start time captured by the first update of the current run.
    #[inline]
    #[must_use]
    pub fn start_time(&self) -> Option<f32> {
        self.start_time
    }

    /// Local animation time used by the most recent sampling update.
    #[inline]
    #[must_use]
    pub fn local_time(&self) -> Option<f32> {
        self.local_time
    }

    /// Advances playback to `query_time` and writes the pose onto `skeleton`.
    ///
    /// Does nothing when stopped, when no animation is active, or when the
    /// active animation has no keyframes.
    pub fn update(&mut self, query_time: f32, skeleton: &mut Skeleton) {
        if let Some(pose) = self.advance(query_time) {
            skeleton.apply_pose(&pose);
        }
    }

    /// The sampling half of [`update`](Self::update): maps `query_time` onto
    /// the active animation and returns the pose without applying it.
    pub fn advance(&mut self, query_time: f32) -> Option<Pose> {
        if !self.playing {
            return None;
        }

        let animation = self.active.and_then(|index| self.animations.get(index))?;
        if animation.is_empty() {
            if !self.warned_empty {
                log::warn!("Animation '{}' has no keyframes, skipping playback", animation.name);
                self.warned_empty = true;
            }
            return None;
        }

        let start = *self.start_time.get_or_insert_with(|| {
            log::debug!("Animator: start time captured at {query_time:.3}s");
            query_time
        });

        let local = map_local_time(query_time - start, animation.duration(), self.looping);
        self.local_time = Some(local);
        animation.sample(local)
    }

    fn reference_shape(&self) -> Option<&Pose> {
        self.bind_shape
            .as_ref()
            .or_else(|| self.animations.iter().find_map(Animation::shape))
    }
}

/// Maps elapsed playback time into `[0, duration]`.
fn map_local_time(elapsed: f32, duration: f32, looping: bool) -> f32 {
    // f32::max discards NaN, so a bad clock reads as time zero.
    let elapsed = elapsed.max(0.0);
    if duration <= 0.0 {
        return 0.0;
    }

    if looping {
        elapsed.rem_euclid(duration)
    } else {
        elapsed.min(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_local_time_wraps_when_looping() {
        assert!((map_local_time(4.5, 4.0, true) - 0.5).abs() < 1e-6);
        assert!((map_local_time(8.0, 4.0, true)).abs() < 1e-6);
    }

    #[test]
    fn map_local_time_clamps_once() {
        assert_eq!(map_local_time(10.0, 3.0, false), 3.0);
        assert_eq!(map_local_time(1.25, 3.0, false), 1.25);
    }

    #[test]
    fn map_local_time_guards_degenerate_inputs() {
        assert_eq!(map_local_time(-2.0, 3.0, true), 0.0);
        assert_eq!(map_local_time(f32::NAN, 3.0, false), 0.0);
        assert_eq!(map_local_time(5.0, 0.0, true), 0.0);
    }
}
