//! Winit-based Application Framework
//!
//! - [`App`]: builder for configuring and launching the viewer
//! - [`AppHandler`]: trait the viewer implements
//! - `AppRunner`: internal `ApplicationHandler` driving the event loop
//!
//! # Example
//!
//! ```rust,ignore
//! use marionette::app::winit::{App, AppHandler, Window};
//! use marionette::app::FrameState;
//!
//! struct Viewer;
//!
//! impl AppHandler for Viewer {
//!     fn init(settings: &ViewerSettings, window: &Arc<Window>) -> Result<Self> {
//!         Ok(Viewer)
//!     }
//!
//!     fn update(&mut self, window: &Arc<Window>, input: &Input, frame: &FrameState) {
//!         // advance animations with frame.time
//!     }
//! }
//!
//! fn main() -> marionette::Result<()> {
//!     App::new().with_title("Viewer").run::<Viewer>()
//! }
//! ```

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::app::FrameState;
use crate::app::input::Input;
use crate::errors::{MarionetteError, Result};
use crate::settings::ViewerSettings;
use crate::utils::time::Timer;

pub mod input_adapter;

/// Application behavior plugged into the event loop.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) once the window exists
/// 2. [`on_event`](Self::on_event) for every window event
/// 3. [`update`](Self::update) once per redraw
/// 4. [`should_exit`](Self::should_exit) after every update
pub trait AppHandler: Sized + 'static {
    fn init(settings: &ViewerSettings, window: &Arc<Window>) -> Result<Self>;

    /// Called before default handling. Return `true` to consume the event;
    /// redraw requests are never consumed.
    #[allow(unused_variables)]
    fn on_event(&mut self, window: &Arc<Window>, event: &WindowEvent) -> bool {
        false
    }

    #[allow(unused_variables)]
    fn resized(&mut self, width: u32, height: u32) {}

    fn update(&mut self, window: &Arc<Window>, input: &Input, frame: &FrameState);

    fn should_exit(&self) -> bool {
        false
    }
}

/// Application builder.
pub struct App {
    settings: ViewerSettings,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: ViewerSettings::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = title.into();
        self
    }

    /// Replaces all settings, including the title.
    #[must_use]
    pub fn with_settings(mut self, settings: ViewerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs the event loop until the window closes or the handler asks to
    /// exit. Errors raised while creating the window or the handler are
    /// returned once the loop has stopped.
    pub fn run<H: AppHandler>(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::<H>::new(self.settings);
        event_loop.run_app(&mut runner)?;

        match runner.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

struct AppRunner<H: AppHandler> {
    settings: ViewerSettings,
    window: Option<Arc<Window>>,
    user_state: Option<H>,
    input: Input,
    timer: Timer,
    error: Option<MarionetteError>,
}

impl<H: AppHandler> AppRunner<H> {
    fn new(settings: ViewerSettings) -> Self {
        Self {
            settings,
            window: None,
            user_state: None,
            input: Input::new(),
            timer: Timer::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: MarionetteError) {
        log::error!("Fatal error: {err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attributes = Window::default_attributes()
            .with_title(&self.settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.settings.width),
                f64::from(self.settings.height),
            ));
        Ok(Arc::new(event_loop.create_window(attributes)?))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(user_state)) = (&self.window, &mut self.user_state) else {
            return;
        };

        self.timer.tick();
        let frame = FrameState {
            time: self.timer.elapsed_seconds(),
            dt: self.timer.dt_seconds(),
            frame_count: self.timer.frame_count,
        };

        user_state.update(window, &self.input, &frame);
        self.input.start_frame();

        if user_state.should_exit() {
            log::info!("Handler requested exit after {} frames", frame.frame_count);
            event_loop.exit();
        }
    }
}

impl<H: AppHandler> ApplicationHandler for AppRunner<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(err) => return self.fail(event_loop, err),
        };

        let size = window.inner_size();
        self.input.inject_resize(size.width, size.height);

        match H::init(&self.settings, &window) {
            Ok(mut state) => {
                state.resized(size.width, size.height);
                self.user_state = Some(state);
            }
            Err(err) => return self.fail(event_loop, err),
        }

        log::info!("Window created ({}x{})", size.width, size.height);
        self.window = Some(window);
        self.timer.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let (Some(window), Some(user_state)) = (&self.window, &mut self.user_state) else {
            return;
        };

        let consumed = user_state.on_event(window, &event);
        if consumed && !matches!(event, WindowEvent::RedrawRequested) {
            return;
        }

        input_adapter::process_window_event(&mut self.input, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => user_state.resized(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.user_state.is_some()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }
}
