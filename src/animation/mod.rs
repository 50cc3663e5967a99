//! Keyframe Animation
//!
//! - [`Pose`]: hierarchical snapshot of local bone transforms
//! - [`Keyframe`]: a pose at a point on the animation clock
//! - [`Animation`]: ordered keyframes with bracketing lookup and sampling
//! - [`Animator`]: playback state machine writing poses onto a [`Skeleton`](crate::scene::Skeleton)

pub mod animator;
pub mod clip;
pub mod keyframe;
pub mod pose;
pub mod values;

pub use animator::{AnimationIndex, Animator, PlaybackState};
pub use clip::Animation;
pub use keyframe::Keyframe;
pub use pose::Pose;
pub use values::{Interpolatable, slerp_shortest};
