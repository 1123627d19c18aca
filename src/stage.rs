//! Window plumbing and the frame loop.
//!
//! A [`Stage`] opens a winit window, brings up the [`Renderer`], and drives
//! a [`Scene`] until the window closes: events fold into [`Input`], every
//! redraw ticks the [`FrameClock`], updates the scene, and draws whatever it
//! queued. Scenes stay scheduler-agnostic — they only ever see `update` and
//! `draw` calls, never the event loop.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::StageError;
use crate::input::Input;
use crate::render::{DrawList, Renderer};
use crate::time::FrameClock;

/// Everything a scene sees during one update.
pub struct FrameContext<'a> {
    /// Pointer and key state for this frame.
    pub input: &'a Input,
    /// Seconds since the stage started.
    pub elapsed: f32,
    /// Seconds covered by this frame.
    pub delta: f32,
    /// Current surface size in physical pixels.
    pub bounds: Vec2,
}

/// A frame-driven scene hosted by a [`Stage`].
pub trait Scene {
    /// Advance simulation state for one frame.
    fn update(&mut self, ctx: &FrameContext<'_>);

    /// Queue this frame's sprites, back to front.
    fn draw(&mut self, frame: &mut DrawList);

    /// The surface changed size. Also called once before the first update.
    fn resized(&mut self, _bounds: Vec2) {}
}

/// Window + renderer host for a single scene.
pub struct Stage {
    title: String,
    size: (u32, u32),
}

impl Stage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: (1280, 720),
        }
    }

    /// Set the initial logical window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Open the window and block until it closes.
    pub fn run<S: Scene>(self, scene: S) -> Result<(), StageError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = StageApp {
            title: self.title,
            size: self.size,
            window: None,
            renderer: None,
            input: Input::new(),
            clock: FrameClock::new(),
            frame: DrawList::new(),
            scene,
            init_error: None,
        };
        event_loop.run_app(&mut app)?;

        match app.init_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

struct StageApp<S: Scene> {
    title: String,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: Input,
    clock: FrameClock,
    frame: DrawList,
    scene: S,
    init_error: Option<StageError>,
}

impl<S: Scene> ApplicationHandler for StageApp<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                log::error!("window creation failed: {error}");
                self.init_error = Some(StageError::Window(error));
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(Renderer::new(window.clone())) {
            Ok(renderer) => {
                let (width, height) = renderer.size();
                self.scene
                    .resized(Vec2::new(width as f32, height as f32));
                self.renderer = Some(renderer);
                self.window = Some(window);
            }
            Err(error) => {
                log::error!("renderer init failed: {error}");
                self.init_error = Some(error.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.scene
                    .resized(Vec2::new(size.width as f32, size.height as f32));
            }
            WindowEvent::RedrawRequested => {
                let Some(renderer) = &mut self.renderer else {
                    return;
                };

                let (elapsed, delta) = self.clock.tick();
                let (width, height) = renderer.size();
                let ctx = FrameContext {
                    input: &self.input,
                    elapsed,
                    delta,
                    bounds: Vec2::new(width as f32, height as f32),
                };
                self.scene.update(&ctx);

                self.frame.clear();
                self.scene.draw(&mut self.frame);

                match renderer.render(&self.frame, elapsed) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("surface lost, reconfiguring");
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory, shutting down");
                        event_loop.exit();
                    }
                    Err(error) => log::warn!("render error: {error:?}"),
                }

                self.input.begin_frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
