//! Viewer State
//!
//! [`ViewerState`] owns everything the interactive viewer mutates in response
//! to input: the camera and its orbit controller, the model's color, position
//! and scale, and the quit request. Window-system callbacks receive it by
//! `&mut` instead of reaching for globals.
//!
//! Key bindings:
//!
//! | Key          | Action                          |
//! |--------------|---------------------------------|
//! | `Escape`     | request quit                    |
//! | `R`          | reset the model position        |
//! | `Enter`      | randomize the model color       |
//! | `↑` / `↓`    | grow / shrink the model         |
//! | `←` / `→`    | move the model along X          |

use glam::{Vec2, Vec3, Vec4};

use crate::app::input::{ButtonState, Input, Key, MouseButton};
use crate::scene::{Camera, Ground, Skeleton};
use crate::settings::ViewerSettings;
use crate::utils::orbit_control::OrbitControls;

pub const MIN_MODEL_SCALE: f32 = 0.1;
pub const MAX_MODEL_SCALE: f32 = 0.3;
/// Each model position component stays within `±MODEL_POSITION_LIMIT`.
pub const MODEL_POSITION_LIMIT: f32 = 10.0;

const SCALE_STEP: f32 = 0.02;
const POSITION_STEP: f32 = 0.5;

/// Keys the viewer reacts to on press.
const BOUND_KEYS: [Key; 7] = [
    Key::Escape,
    Key::R,
    Key::Enter,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
];

#[derive(Debug, Clone)]
pub struct ViewerState {
    pub camera: Camera,
    pub orbit: OrbitControls,
    pub clear_color: Vec4,

    model_color: Vec3,
    model_position: Vec3,
    model_scale: f32,

    cursor: Vec2,
    dragging: bool,
    quit_requested: bool,
}

impl ViewerState {
    #[must_use]
    pub fn new(settings: &ViewerSettings) -> Self {
        let cam = &settings.camera;
        let mut camera = Camera::new_perspective(cam.fov, settings.aspect(), cam.near, cam.far);
        let mut orbit = OrbitControls::new(cam.target, cam.distance);
        orbit.enable_keys = cam.keyboard_pan;
        camera.look_at(orbit.eye(), orbit.target);

        Self {
            camera,
            orbit,
            clear_color: settings.clear_color,
            model_color: settings.model_color,
            model_position: Vec3::ZERO,
            model_scale: settings.model_scale.clamp(MIN_MODEL_SCALE, MAX_MODEL_SCALE),
            cursor: Vec2::ZERO,
            dragging: false,
            quit_requested: false,
        }
    }

    // ========== Event handling ==========

    /// Reacts to a key transition. Returns `true` if the key is bound.
    pub fn handle_key(&mut self, key: Key, state: ButtonState) -> bool {
        if state != ButtonState::Pressed {
            return false;
        }
        match key {
            Key::Escape => {
                log::info!("Quit requested");
                self.quit_requested = true;
            }
            Key::R => self.reset_position(),
            Key::Enter => self.randomize_color(),
            Key::ArrowUp => self.set_model_scale(self.model_scale + SCALE_STEP),
            Key::ArrowDown => self.set_model_scale(self.model_scale - SCALE_STEP),
            Key::ArrowLeft => self.set_model_position(self.model_position - Vec3::X * POSITION_STEP),
            Key::ArrowRight => self.set_model_position(self.model_position + Vec3::X * POSITION_STEP),
            _ => return false,
        }
        true
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        if button == MouseButton::Left {
            self.dragging = state == ButtonState::Pressed;
        }
    }

    /// Tracks the cursor; while dragging, the movement since the previous
    /// position orbits the camera.
    pub fn handle_cursor(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        let delta = position - self.cursor;
        if self.dragging && delta != Vec2::ZERO {
            self.orbit.rotate(delta.x, delta.y);
            self.camera.look_at(self.orbit.eye(), self.orbit.target);
        }
        self.cursor = position;
    }

    pub fn handle_scroll(&mut self, dy: f32) {
        self.orbit.zoom(dy);
        self.camera.look_at(self.orbit.eye(), self.orbit.target);
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Per-frame entry point: replays this frame's input through the
    /// `handle_*` methods.
    pub fn update(&mut self, input: &Input) {
        for key in BOUND_KEYS {
            if input.get_key_down(key) {
                self.handle_key(key, ButtonState::Pressed);
            }
        }

        if input.get_mouse_button_down(MouseButton::Left) {
            self.handle_mouse_button(MouseButton::Left, ButtonState::Pressed);
        }
        if input.get_mouse_button_up(MouseButton::Left) {
            self.handle_mouse_button(MouseButton::Left, ButtonState::Released);
        }

        let cursor = input.mouse_position();
        self.handle_cursor(cursor.x, cursor.y);

        let scroll = input.scroll_delta().y;
        if scroll != 0.0 {
            self.handle_scroll(scroll);
        }

        if self.orbit.enable_keys {
            self.orbit.pan_keys(input);
            self.camera.look_at(self.orbit.eye(), self.orbit.target);
        }
    }

    // ========== Model controls ==========

    pub fn reset_position(&mut self) {
        self.model_position = Vec3::ZERO;
    }

    pub fn randomize_color(&mut self) {
        self.model_color = Vec3::new(rand::random::<f32>(), rand::random::<f32>(), rand::random::<f32>());
        log::debug!("Model color set to {:?}", self.model_color);
    }

    pub fn set_model_scale(&mut self, scale: f32) {
        self.model_scale = scale.clamp(MIN_MODEL_SCALE, MAX_MODEL_SCALE);
    }

    pub fn set_model_position(&mut self, position: Vec3) {
        self.model_position = position.clamp(Vec3::splat(-MODEL_POSITION_LIMIT), Vec3::splat(MODEL_POSITION_LIMIT));
    }

    /// Pushes the model scale onto the skeleton's root bone.
    pub fn apply_model(&self, skeleton: &mut Skeleton) {
        skeleton.set_scale(self.model_scale);
    }

    pub fn sync_ground(&self, ground: &mut Ground) {
        ground.position = self.model_position;
    }

    // ========== Queries ==========

    #[inline]
    #[must_use]
    pub fn model_color(&self) -> Vec3 {
        self.model_color
    }

    #[inline]
    #[must_use]
    pub fn model_position(&self) -> Vec3 {
        self.model_position
    }

    #[inline]
    #[must_use]
    pub fn model_scale(&self) -> f32 {
        self.model_scale
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Cursor position and camera angles, e.g.
    /// `(12.000000, 34.000000) angle (0.000000, 5.739170)`.
    #[must_use]
    pub fn window_title(&self) -> String {
        format!(
            "({:.6}, {:.6}) angle ({:.6}, {:.6})",
            self.cursor.x,
            self.cursor.y,
            self.orbit.horizontal_angle(),
            self.orbit.vertical_angle()
        )
    }

    /// The window title to show this frame; `None` while dragging, so the
    /// title freezes during a camera drag.
    #[must_use]
    pub fn status_title(&self) -> Option<String> {
        (!self.dragging).then(|| self.window_title())
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(&ViewerSettings::default())
    }
}
