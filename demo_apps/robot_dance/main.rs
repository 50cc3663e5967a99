use std::sync::Arc;

use marionette::app::FrameState;
use marionette::app::winit::{App, AppHandler, Window};
use marionette::scene::humanoid::{build_humanoid, paths, robot_dance};
use marionette::utils::FpsCounter;
use marionette::{Animator, Ground, Input, Key, Skeleton, ViewerSettings, ViewerState};

/// Robot dance viewer
///
/// Plays the looping humanoid dance while the camera orbits with the mouse.
/// Space toggles playback; see `ViewerState` for the remaining key bindings.
struct RobotDance {
    skeleton: Skeleton,
    animator: Animator,
    viewer: ViewerState,
    ground: Ground,
    fps_counter: FpsCounter,
}

impl AppHandler for RobotDance {
    fn init(settings: &ViewerSettings, _window: &Arc<Window>) -> marionette::Result<Self> {
        let mut skeleton = build_humanoid()?;
        let dance = robot_dance(&skeleton)?;
        log::info!(
            "Built '{}' with {} keyframes over {:.2}s",
            dance.name,
            dance.len(),
            dance.duration()
        );

        let mut animator = Animator::for_skeleton(&skeleton);
        animator.add_animation(dance)?;
        animator.set_looping(settings.playback.looping);
        animator.set_playing(settings.playback.autoplay);

        let viewer = ViewerState::new(settings);
        let mut ground = Ground::default();
        viewer.apply_model(&mut skeleton);
        viewer.sync_ground(&mut ground);
        skeleton.update_world_matrices();

        Ok(Self {
            skeleton,
            animator,
            viewer,
            ground,
            fps_counter: FpsCounter::new(),
        })
    }

    fn resized(&mut self, width: u32, height: u32) {
        self.viewer.handle_resize(width, height);
    }

    fn update(&mut self, window: &Arc<Window>, input: &Input, frame: &FrameState) {
        self.viewer.update(input);

        if input.get_key_down(Key::Space) {
            let playing = !self.animator.is_playing();
            self.animator.set_playing(playing);
        }

        self.animator.update(frame.time, &mut self.skeleton);
        self.viewer.apply_model(&mut self.skeleton);
        self.skeleton.update_world_matrices();
        self.viewer.sync_ground(&mut self.ground);

        if let Some(title) = self.viewer.status_title() {
            window.set_title(&title);
        }

        if let Some(fps) = self.fps_counter.update() {
            let hand = self
                .skeleton
                .bone_at_path(paths::RIGHT_HAND)
                .and_then(|handle| self.skeleton.world_matrix(handle))
                .map(|m| m.translation);
            log::info!(
                "{fps:.1} fps ({:.3} ms) | {:?} | local time {:?} | right hand {:?}",
                self.fps_counter.frame_time_ms(),
                self.animator.state(),
                self.animator.local_time(),
                hand
            );
        }
    }

    fn should_exit(&self) -> bool {
        self.viewer.quit_requested()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => ViewerSettings::from_json_file(path)?,
        None => ViewerSettings::default(),
    };

    App::new().with_settings(settings).run::<RobotDance>()?;
    Ok(())
}
