//! Procedural humanoid rig
//!
//! Builds a small robot-like skeleton and the looping dance played by the
//! viewer. Bone order under the torso is fixed: head, right arm, left arm,
//! right leg, left leg. Each arm is an upper-arm → forearm → hand chain.
//!
//! Units are "model units" (the full figure is about 17 units tall); the
//! viewer scales the root bone down to scene size.

use glam::{Quat, Vec3};

use crate::animation::{Animation, Keyframe};
use crate::errors::Result;
use crate::scene::skeleton::Skeleton;
use crate::scene::transform::Transform;

/// Child-index paths of the named bones, usable with
/// [`Pose::at_path_mut`](crate::animation::Pose::at_path_mut) and
/// [`Skeleton::bone_at_path`].
pub mod paths {
    pub const ROOT: &[usize] = &[];
    pub const TORSO: &[usize] = &[0];
    pub const HEAD: &[usize] = &[0, 0];
    pub const RIGHT_UPPER_ARM: &[usize] = &[0, 1];
    pub const RIGHT_FOREARM: &[usize] = &[0, 1, 0];
    pub const RIGHT_HAND: &[usize] = &[0, 1, 0, 0];
    pub const LEFT_UPPER_ARM: &[usize] = &[0, 2];
    pub const LEFT_FOREARM: &[usize] = &[0, 2, 0];
    pub const LEFT_HAND: &[usize] = &[0, 2, 0, 0];
    pub const RIGHT_LEG: &[usize] = &[0, 3];
    pub const LEFT_LEG: &[usize] = &[0, 4];
}

/// Number of bones in [`build_humanoid`]'s rig.
pub const HUMANOID_BONE_COUNT: usize = 11;

/// Builds the humanoid rig in its rest pose (all rotations identity).
pub fn build_humanoid() -> Result<Skeleton> {
    let mut skeleton = Skeleton::new("robot", Transform::new());
    let root = skeleton.root();

    let torso = skeleton.add_bone(root, "torso", Transform::from_position(Vec3::new(0.0, 8.0, 0.0)))?;
    skeleton.add_bone(torso, "head", Transform::from_position(Vec3::new(0.0, 5.0, 0.0)))?;

    for (side, x) in [("right", -2.5_f32), ("left", 2.5)] {
        let upper = skeleton.add_bone(
            torso,
            &format!("{side}_upper_arm"),
            Transform::from_position(Vec3::new(x, 4.0, 0.0)),
        )?;
        let fore = skeleton.add_bone(
            upper,
            &format!("{side}_forearm"),
            Transform::from_position(Vec3::new(0.0, -3.0, 0.0)),
        )?;
        skeleton.add_bone(
            fore,
            &format!("{side}_hand"),
            Transform::from_position(Vec3::new(0.0, -3.0, 0.0)),
        )?;
    }

    skeleton.add_bone(torso, "right_leg", Transform::from_position(Vec3::new(-1.0, -1.0, 0.0)))?;
    skeleton.add_bone(torso, "left_leg", Transform::from_position(Vec3::new(1.0, -1.0, 0.0)))?;

    Ok(skeleton)
}

/// The viewer's 5.5 second dance for a rig shaped like [`build_humanoid`].
///
/// - 0–3 s: one full spin about -Z in 120° steps
/// - 3–5 s: rise by 10 units, raising both arms and bending the hands
/// - 5–5.5 s: drop back to the rest pose
pub fn robot_dance(skeleton: &Skeleton) -> Result<Animation> {
    let spin = |degrees: f32| Quat::from_axis_angle(Vec3::NEG_Z, degrees.to_radians());

    let mut state = skeleton.capture_pose();
    let rest = state.clone();
    let mut animation = Animation::new("robot_dance");

    animation.push_keyframe(Keyframe::new(state.clone(), 0.0))?;
    state.rotation = spin(120.0);
    animation.push_keyframe(Keyframe::new(state.clone(), 1.0))?;
    state.rotation = spin(240.0);
    animation.push_keyframe(Keyframe::new(state.clone(), 2.0))?;
    state.rotation = Quat::IDENTITY;
    animation.push_keyframe(Keyframe::new(state.clone(), 3.0))?;

    state.translation = rest.translation + Vec3::new(0.0, 10.0, 0.0);
    state.set_rotation_at(paths::RIGHT_UPPER_ARM, spin(175.0))?;
    state.set_rotation_at(paths::RIGHT_HAND, spin(30.0))?;
    state.set_rotation_at(paths::LEFT_UPPER_ARM, spin(-175.0))?;
    state.set_rotation_at(paths::LEFT_HAND, spin(-30.0))?;
    animation.push_keyframe(Keyframe::new(state, 5.0))?;

    animation.push_keyframe(Keyframe::new(rest, 5.5))?;

    Ok(animation)
}
