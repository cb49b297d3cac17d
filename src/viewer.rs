//! Standalone visualization window backed by winit.
//!
//! ```no_run
//! # use foldscope::Viewer;
//! Viewer::builder()
//!     .with_title("Helix")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::FoldingEngine,
    error::FoldError,
    gpu::render_context::RenderContext,
    input::{self, InputEvent},
    options::{KeyAction, Options},
    renderer::SceneRenderer,
    util::frame_timing::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the "foldscope" title.
    fn new() -> Self {
        Self {
            options: None,
            title: "foldscope".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the initial window title. The title switches to the HUD once
    /// the session starts.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that plays the folding animation.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`FoldError::Viewer`] when the event loop or window cannot be
    /// created, [`FoldError::Gpu`] when no usable surface/device exists, and
    /// [`FoldError::InvalidOptions`] for bad options.
    pub fn run(self) -> Result<(), FoldError> {
        self.options.validate()?;

        let event_loop =
            EventLoop::new().map_err(|e| FoldError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            session: None,
            options: Some(self.options),
            title: self.title,
            shown_title: String::new(),
            timing: FrameTiming::new(),
            cursor: (0.0, 0.0),
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FoldError::Viewer(e.to_string()))?;

        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Everything that exists once the window has a GPU surface.
struct Session {
    context: RenderContext,
    renderer: SceneRenderer,
    engine: FoldingEngine,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    session: Option<Session>,
    options: Option<Options>,
    title: String,
    shown_title: String,
    timing: FrameTiming,
    cursor: (f32, f32),
    /// Fatal initialization error, returned from `Viewer::run`.
    init_error: Option<FoldError>,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn init_session(
        &mut self,
        window: &Arc<Window>,
    ) -> Result<Session, FoldError> {
        let options = self.options.take().unwrap_or_default();
        let size = viewport_size(window.inner_size());

        let context =
            pollster::block_on(RenderContext::new(Arc::clone(window), size))?;
        let renderer = SceneRenderer::new(&context, &options);
        let engine = FoldingEngine::new(options, size)?;

        Ok(Session {
            context,
            renderer,
            engine,
        })
    }

    fn redraw(&mut self) {
        let dt = self.timing.tick();
        let Some(session) = &mut self.session else {
            return;
        };
        let Session {
            context,
            renderer,
            engine,
        } = session;

        engine.update(dt);
        if engine.scene().is_dirty() {
            renderer.upload_scene(context, engine.scene());
            engine.scene_mut().mark_rendered();
        }
        renderer.update_camera(&context.queue, engine.camera());

        match renderer.render(context) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::debug!("surface lost, reconfiguring");
                context.reconfigure();
            }
            Err(e) => log::error!("render error: {e:?}"),
        }

        let title = engine.hud().to_string();
        if title != self.shown_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            log::trace!("{title} ({:.0} fps)", self.timing.fps());
            self.shown_title = title;
        }
    }

    fn key_pressed(&mut self, code: winit::keyboard::KeyCode, repeat: bool) {
        let Some(session) = &mut self.session else {
            return;
        };
        let name = input::key_name(code);
        let Some(action) = session.engine.options().keybindings.lookup(&name)
        else {
            return;
        };
        // Only the speed keys auto-repeat.
        if repeat && !matches!(action, KeyAction::SpeedUp | KeyAction::SpeedDown)
        {
            return;
        }
        session.engine.execute(action.to_command());
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.init_error = Some(FoldError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        match self.init_session(&window) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                log::error!("failed to initialize viewer: {e}");
                self.init_error = Some(e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(session) = &mut self.session {
                    if session.context.resize(vp_w, vp_h) {
                        session.renderer.resize(&session.context);
                        session.engine.resize(vp_w, vp_h);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                let (x, y) = self.cursor;
                let event = if state == ElementState::Pressed {
                    InputEvent::PointerDown { x, y }
                } else {
                    InputEvent::PointerUp
                };
                if let Some(session) = &mut self.session {
                    session.engine.handle_input(event);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                let (x, y) = self.cursor;
                if let Some(session) = &mut self.session {
                    session.engine.handle_input(InputEvent::PointerMove { x, y });
                }
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(session) = &mut self.session {
                    session.engine.handle_input(InputEvent::PointerUp);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(session) = &mut self.session {
                    session.engine.handle_input(InputEvent::Wheel {
                        delta_y: input::wheel_delta_y(delta),
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key_pressed(code, event.repeat);
                }
            }

            _ => {}
        }
    }
}
