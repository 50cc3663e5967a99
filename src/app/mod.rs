//! Application Layer
//!
//! - [`input`]: platform-agnostic input state
//! - [`winit`]: window, event loop and input adapter (feature `winit`)

pub mod input;

#[cfg(feature = "winit")]
pub mod winit;

pub use input::{ButtonState, Input, Key, MouseButton};

/// Timing of the frame being updated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    /// Seconds since the window opened; the animator's query time.
    pub time: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    pub frame_count: u64,
}
