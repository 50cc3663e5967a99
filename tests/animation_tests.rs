//! Animation Tests
//!
//! Tests for:
//! - Keyframe validation (time order, invalid times, pose shape)
//! - Animation sampling (clamping, bracketing, degenerate spans)
//! - Animator playback (start-time capture, looping, one-shot hold, stop)
//! - Animator registration and selection
//! - The end-to-end spin scenario on a two-bone skeleton

use glam::{Quat, Vec3};

use marionette::animation::{Animation, Animator, Keyframe, PlaybackState, Pose};
use marionette::errors::MarionetteError;
use marionette::scene::{Skeleton, Transform};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - EPSILON
}

fn pose_approx(a: &Pose, b: &Pose) -> bool {
    vec3_approx(a.translation, b.translation)
        && quat_approx(a.rotation, b.rotation)
        && a.children.len() == b.children.len()
        && a.children.iter().zip(&b.children).all(|(x, y)| pose_approx(x, y))
}

// ============================================================================
// Fixtures
// ============================================================================

/// Root bone with a single "arm" child one unit above it.
fn two_bone_skeleton() -> Skeleton {
    let mut skeleton = Skeleton::new("root", Transform::new());
    let root = skeleton.root();
    skeleton
        .add_bone(root, "arm", Transform::from_position(Vec3::Y))
        .unwrap();
    skeleton
}

/// Two-node pose with the root moved along X.
fn pose_x(x: f32) -> Pose {
    Pose::new(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY).with_child(Pose::new(Vec3::Y, Quat::IDENTITY))
}

fn spin(degrees: f32) -> Quat {
    Quat::from_axis_angle(Vec3::Z, degrees.to_radians())
}

/// Keyframes at 0, 1, 2, 3 with root rotations 0°, 120°, 240°, 0° about +Z.
fn spin_animation(skeleton: &Skeleton) -> Animation {
    let rest = skeleton.capture_pose();
    let mut animation = Animation::new("spin");
    for (time, degrees) in [(0.0, 0.0), (1.0, 120.0), (2.0, 240.0), (3.0, 0.0)] {
        let mut pose = rest.clone();
        pose.rotation = spin(degrees);
        animation.push_keyframe(Keyframe::new(pose, time)).unwrap();
    }
    animation
}

/// Root translation 0 → 10 → 20 → 30 → 40 along X at 0, 1, 2, 3, 4.
fn ramp_animation() -> Animation {
    Animation::from_keyframes("ramp", (0..=4).map(|i| Keyframe::new(pose_x(i as f32 * 10.0), i as f32))).unwrap()
}

fn root_translation(skeleton: &Skeleton) -> Vec3 {
    skeleton.bone(skeleton.root()).unwrap().transform.position
}

fn root_rotation(skeleton: &Skeleton) -> Quat {
    skeleton.bone(skeleton.root()).unwrap().transform.rotation
}

// ============================================================================
// Keyframe validation
// ============================================================================

#[test]
fn rejects_decreasing_keyframe_time() {
    let mut animation = Animation::new("bad");
    animation.push_keyframe(Keyframe::new(pose_x(0.0), 2.0)).unwrap();
    let err = animation.push_keyframe(Keyframe::new(pose_x(1.0), 1.0)).unwrap_err();

    assert!(matches!(
        err,
        MarionetteError::KeyframeOutOfOrder { index: 1, .. }
    ));
    assert_eq!(animation.len(), 1);
}

#[test]
fn accepts_equal_keyframe_times() {
    let animation = Animation::new("hold")
        .with_keyframe(pose_x(0.0), 0.0)
        .and_then(|a| a.with_keyframe(pose_x(1.0), 1.0))
        .and_then(|a| a.with_keyframe(pose_x(2.0), 1.0))
        .unwrap();
    assert_eq!(animation.len(), 3);
    assert_eq!(animation.duration(), 1.0);
}

#[test]
fn rejects_negative_and_non_finite_times() {
    let mut animation = Animation::new("bad");
    for time in [-0.5, f32::NAN, f32::INFINITY] {
        let err = animation.push_keyframe(Keyframe::new(pose_x(0.0), time)).unwrap_err();
        assert!(matches!(err, MarionetteError::InvalidKeyframeTime { index: 0, .. }));
    }
    assert!(animation.is_empty());
}

#[test]
fn rejects_keyframe_with_different_shape() {
    let mut animation = Animation::new("bad");
    animation.push_keyframe(Keyframe::new(pose_x(0.0), 0.0)).unwrap();

    let leaf = Pose::new(Vec3::ZERO, Quat::IDENTITY);
    let err = animation.push_keyframe(Keyframe::new(leaf, 1.0)).unwrap_err();
    match err {
        MarionetteError::ShapeMismatch { keyframe, path } => {
            assert_eq!(keyframe, 1);
            assert!(path.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn empty_animation_samples_nothing() {
    let animation = Animation::new("empty");
    assert!(animation.sample(0.0).is_none());
    assert_eq!(animation.duration(), 0.0);
}

#[test]
fn sampling_clamps_outside_the_timeline() {
    let animation = ramp_animation();
    assert_eq!(animation.sample(-1.0), animation.sample(0.0));
    assert_eq!(animation.sample(10.0), animation.sample(4.0));
    assert_eq!(animation.sample(10.0).unwrap().translation.x, 40.0);
}

#[test]
fn sampling_between_keyframes_is_strictly_between() {
    let animation = ramp_animation();
    let x = animation.sample(0.5).unwrap().translation.x;
    assert!(x > 0.0 && x < 10.0);
    assert!(approx(x, 5.0));

    assert!(approx(animation.sample(2.25).unwrap().translation.x, 22.5));
}

#[test]
fn sampling_on_a_keyframe_returns_its_pose() {
    let animation = ramp_animation();
    for i in 0..=4 {
        let pose = animation.sample(i as f32).unwrap();
        assert!(approx(pose.translation.x, i as f32 * 10.0));
    }
}

#[test]
fn single_keyframe_is_stable_for_any_time() {
    let pose = pose_x(7.0);
    let animation = Animation::new("still").with_keyframe(pose.clone(), 0.0).unwrap();
    for time in [-3.0, 0.0, 0.5, 100.0, f32::NAN] {
        assert_eq!(animation.sample(time), Some(pose.clone()));
    }
}

#[test]
fn coincident_keyframes_do_not_produce_nan() {
    let animation = Animation::from_keyframes(
        "jump",
        [
            Keyframe::new(pose_x(0.0), 0.0),
            Keyframe::new(pose_x(10.0), 1.0),
            Keyframe::new(pose_x(50.0), 1.0),
            Keyframe::new(pose_x(60.0), 2.0),
        ],
    )
    .unwrap();

    let at_jump = animation.sample(1.0).unwrap();
    assert!(at_jump.translation.is_finite());
    assert_eq!(at_jump.translation.x, 50.0);

    let before = animation.sample(0.999).unwrap();
    assert!(before.translation.x < 10.0 && before.translation.x > 9.9);

    assert!(approx(animation.sample(1.5).unwrap().translation.x, 55.0));
}

// ============================================================================
// Animator: registration & selection
// ============================================================================

#[test]
fn first_registered_animation_becomes_active() {
    let mut animator = Animator::new();
    assert!(animator.active().is_none());

    let first = animator.add_animation(ramp_animation()).unwrap();
    let second = animator.add_animation(ramp_animation()).unwrap();

    assert_eq!((first, second), (0, 1));
    assert_eq!(animator.active(), Some(0));
    assert_eq!(animator.animations().len(), 2);
}

#[test]
fn select_out_of_bounds_fails() {
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();

    let err = animator.select(3).unwrap_err();
    assert!(matches!(
        err,
        MarionetteError::AnimationIndexOutOfBounds { index: 3, len: 1 }
    ));
    assert_eq!(animator.active(), Some(0));
}

#[test]
fn bound_animator_rejects_foreign_shapes() {
    let skeleton = two_bone_skeleton();
    let mut animator = Animator::for_skeleton(&skeleton);

    let leaf_only = Animation::new("leaf")
        .with_keyframe(Pose::default(), 0.0)
        .unwrap();
    assert!(matches!(
        animator.add_animation(leaf_only),
        Err(MarionetteError::ShapeMismatch { .. })
    ));

    assert!(animator.add_animation(spin_animation(&skeleton)).is_ok());
}

#[test]
fn unbound_animator_checks_against_first_animation() {
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();

    let leaf_only = Animation::new("leaf")
        .with_keyframe(Pose::default(), 0.0)
        .unwrap();
    assert!(animator.add_animation(leaf_only).is_err());

    // Empty animations have no shape yet and are accepted.
    assert!(animator.add_animation(Animation::new("empty")).is_ok());
}

#[test]
fn select_restarts_playback() {
    let mut skeleton = two_bone_skeleton();
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();
    animator.add_animation(ramp_animation()).unwrap();
    animator.play();

    animator.update(5.0, &mut skeleton);
    animator.update(6.0, &mut skeleton);
    assert_eq!(animator.start_time(), Some(5.0));

    animator.select(1).unwrap();
    assert_eq!(animator.active(), Some(1));
    assert!(animator.start_time().is_none());

    animator.update(9.0, &mut skeleton);
    assert_eq!(animator.start_time(), Some(9.0));
    assert_eq!(animator.local_time(), Some(0.0));
}

// ============================================================================
// Animator: playback
// ============================================================================

#[test]
fn playback_state_follows_flags() {
    let mut animator = Animator::new();
    assert_eq!(animator.state(), PlaybackState::Stopped);

    animator.play();
    assert_eq!(animator.state(), PlaybackState::PlayingOnce);

    animator.set_looping(true);
    assert_eq!(animator.state(), PlaybackState::PlayingLooping);

    animator.stop();
    assert_eq!(animator.state(), PlaybackState::Stopped);
    assert!(animator.is_looping());
}

#[test]
fn first_update_captures_start_time() {
    let mut skeleton = two_bone_skeleton();
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();
    animator.play();

    animator.update(100.0, &mut skeleton);
    assert_eq!(animator.start_time(), Some(100.0));
    assert_eq!(animator.local_time(), Some(0.0));
    assert!(vec3_approx(root_translation(&skeleton), Vec3::ZERO));

    animator.update(101.5, &mut skeleton);
    assert!(approx(animator.local_time().unwrap(), 1.5));
    assert!(vec3_approx(root_translation(&skeleton), Vec3::new(15.0, 0.0, 0.0)));
}

#[test]
fn looping_wraps_by_duration() {
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();
    animator.set_looping(true);
    animator.play();

    let mut a = two_bone_skeleton();
    let mut b = two_bone_skeleton();

    animator.update(0.0, &mut a);
    for t in [0.5, 1.25, 2.0, 3.75] {
        animator.update(t, &mut a);
        animator.update(t + 4.0, &mut b);
        assert!(
            pose_approx(&a.capture_pose(), &b.capture_pose()),
            "t = {t} and t + 4 differ"
        );
    }
}

#[test]
fn once_holds_last_pose() {
    let mut skeleton = two_bone_skeleton();
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();
    animator.set_looping(false);
    animator.play();

    animator.update(0.0, &mut skeleton);
    animator.update(250.0, &mut skeleton);

    assert_eq!(animator.local_time(), Some(4.0));
    assert!(vec3_approx(root_translation(&skeleton), Vec3::new(40.0, 0.0, 0.0)));
    assert!(animator.is_playing());
}

#[test]
fn stopped_animator_leaves_skeleton_untouched() {
    let mut skeleton = two_bone_skeleton();
    let before = skeleton.capture_pose();

    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();
    animator.update(2.5, &mut skeleton);

    assert_eq!(skeleton.capture_pose(), before);
    assert!(animator.start_time().is_none());
    assert!(animator.local_time().is_none());
}

#[test]
fn stop_keeps_last_pose_and_play_recaptures_start() {
    let mut skeleton = two_bone_skeleton();
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();
    animator.play();

    animator.update(0.0, &mut skeleton);
    animator.update(2.0, &mut skeleton);
    animator.stop();
    animator.update(3.0, &mut skeleton);
    assert!(vec3_approx(root_translation(&skeleton), Vec3::new(20.0, 0.0, 0.0)));

    animator.play();
    animator.update(50.0, &mut skeleton);
    assert_eq!(animator.start_time(), Some(50.0));
    assert!(vec3_approx(root_translation(&skeleton), Vec3::ZERO));
}

#[test]
fn play_while_playing_keeps_start_time() {
    let mut skeleton = two_bone_skeleton();
    let mut animator = Animator::new();
    animator.add_animation(ramp_animation()).unwrap();
    animator.play();
    animator.update(1.0, &mut skeleton);

    animator.play();
    animator.update(2.0, &mut skeleton);
    assert_eq!(animator.start_time(), Some(1.0));
    assert!(approx(animator.local_time().unwrap(), 1.0));
}

#[test]
fn empty_animation_is_a_no_op() {
    let mut skeleton = two_bone_skeleton();
    let before = skeleton.capture_pose();

    let mut animator = Animator::new();
    animator.add_animation(Animation::new("empty")).unwrap();
    animator.play();
    animator.update(1.0, &mut skeleton);
    animator.update(2.0, &mut skeleton);

    assert_eq!(skeleton.capture_pose(), before);
    assert!(animator.local_time().is_none());
}

#[test]
fn no_active_animation_is_a_no_op() {
    let mut skeleton = two_bone_skeleton();
    let before = skeleton.capture_pose();

    let mut animator = Animator::new();
    animator.play();
    assert!(animator.advance(1.0).is_none());
    animator.update(1.0, &mut skeleton);

    assert_eq!(skeleton.capture_pose(), before);
}

#[test]
fn update_mutates_bones_in_place() {
    let mut skeleton = two_bone_skeleton();
    let handles: Vec<_> = skeleton.bones().map(|(handle, _)| handle).collect();

    let mut animator = Animator::for_skeleton(&skeleton);
    animator.add_animation(spin_animation(&skeleton)).unwrap();
    animator.play();
    animator.update(0.0, &mut skeleton);
    animator.update(0.7, &mut skeleton);

    assert_eq!(skeleton.bone_count(), 2);
    for handle in handles {
        assert!(skeleton.bone(handle).is_some());
    }
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn spin_scenario_interpolates_root_rotation() {
    let mut skeleton = two_bone_skeleton();
    let arm = skeleton.bone_by_name("arm").unwrap();

    let mut animator = Animator::for_skeleton(&skeleton);
    animator.add_animation(spin_animation(&skeleton)).unwrap();
    animator.play();

    // The clock is already running when playback starts.
    let offset = 42.0;
    for (local, degrees) in [(0.0, 0.0), (0.5, 60.0), (1.0, 120.0), (1.5, 180.0)] {
        animator.update(offset + local, &mut skeleton);

        let rotation = root_rotation(&skeleton);
        assert!(
            quat_approx(rotation, spin(degrees)),
            "at local time {local}: expected {degrees}°, got {rotation:?}"
        );

        let arm_bone = skeleton.bone(arm).unwrap();
        assert_eq!(arm_bone.transform.rotation, Quat::IDENTITY);
        assert_eq!(arm_bone.transform.position, Vec3::Y);
    }
}

#[test]
fn spin_scenario_returns_forward_to_start() {
    let skeleton = two_bone_skeleton();
    let animation = spin_animation(&skeleton);

    // 240° → 0° continues forward through 300° instead of unwinding.
    let pose = animation.sample(2.5).unwrap();
    assert!(quat_approx(pose.rotation, spin(300.0)));
}
