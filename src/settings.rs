//! Viewer Configuration
//!
//! [`ViewerSettings`] gathers the window, camera, model and playback knobs of
//! the viewer. Every field has a default, so a settings file only needs to
//! name what it changes:
//!
//! ```json
//! {
//!     "title": "Dance floor",
//!     "camera": { "distance": 5.0 },
//!     "playback": { "looping": false }
//! }
//! ```
//!
//! ```rust,ignore
//! let settings = ViewerSettings::from_json_file("viewer.json")?;
//! App::new().with_settings(settings).run::<MyViewer>()?;
//! ```

use std::path::Path;

use glam::{Vec3, Vec4};
use serde::Deserialize;

use crate::errors::Result;

// ---------------------------------------------------------------------------
// CameraSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Initial orbit distance.
    pub distance: f32,
    pub target: Vec3,
    /// Enables W/A/S/D eye panning.
    pub keyboard_pan: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            distance: 3.0,
            target: Vec3::new(0.0, 0.4, 0.0),
            keyboard_pan: false,
        }
    }
}

// ---------------------------------------------------------------------------
// PlaybackSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Start playing as soon as the first animation is registered.
    pub autoplay: bool,
    pub looping: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            looping: true,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewerSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Linear RGBA clear color.
    pub clear_color: Vec4,
    /// Linear RGB model color.
    pub model_color: Vec3,
    /// Uniform model scale, clamped to the viewer's slider range on use.
    pub model_scale: f32,
    pub camera: CameraSettings,
    pub playback: PlaybackSettings,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            title: "Marionette".into(),
            width: 1920,
            height: 1080,
            clear_color: Vec4::new(1.0, 1.0, 0.6, 1.0),
            model_color: Vec3::new(105.0, 72.0, 40.0) / 255.0,
            model_scale: 0.1,
            camera: CameraSettings::default(),
            playback: PlaybackSettings::default(),
        }
    }
}

impl ViewerSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        log::debug!("Loaded viewer settings: {settings:?}");
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Reading viewer settings from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Width over height, falling back to 1 for a zero height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
