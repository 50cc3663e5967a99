//! Utility Module
//!
//! - [`OrbitControls`]: mouse-driven orbit camera
//! - [`FpsCounter`]: frame rate measurement
//! - [`Timer`]: wall-clock frame timer feeding the animator

pub mod fps_counter;
pub mod orbit_control;
pub mod time;

pub use fps_counter::FpsCounter;
pub use orbit_control::OrbitControls;
pub use time::Timer;
