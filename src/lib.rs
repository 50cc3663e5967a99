#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod utils;
pub mod viewer;

pub use animation::{Animation, AnimationIndex, Animator, Interpolatable, Keyframe, PlaybackState, Pose};
pub use app::input::{ButtonState, Input, Key, MouseButton};
pub use errors::{MarionetteError, Result};
pub use scene::{Bone, BoneHandle, Camera, Ground, Skeleton, Transform};
pub use settings::ViewerSettings;
pub use utils::orbit_control::OrbitControls;
pub use viewer::ViewerState;
