//! Scene Module
//!
//! The render-side collaborators of the animation core:
//! - [`Skeleton`]: live bone hierarchy written by the animator
//! - [`Bone`]: one joint with its [`Transform`]
//! - [`humanoid`]: procedural humanoid rig and its dance
//! - [`Ground`]: static ground geometry
//! - [`Camera`]: perspective camera

pub mod bone;
pub mod camera;
pub mod ground;
pub mod humanoid;
pub mod skeleton;
pub mod transform;

pub use bone::Bone;
pub use camera::Camera;
pub use ground::Ground;
pub use skeleton::Skeleton;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle of a bone inside its [`Skeleton`].
    pub struct BoneHandle;
}
