use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::FreeLookCamera;
use crate::config::DemoConfig;
use crate::core::clock::{Clock, FpsCounter, FrameInfo};
use crate::core::controller::{movement_intents, Button, Controller};
use crate::core::input_adapter::WinitController;
use crate::renderer::SceneRenderer;

const FPS_REPORT_INTERVAL: f32 = 1.0;

/// Everything the event loop owns: camera, input state, timing and GPU side.
/// Input handlers and the render step borrow it; nothing lives in globals.
pub struct DemoApp {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: FreeLookCamera,
    controller: WinitController,
    /// Cursor is grabbed and hidden; look input comes from raw mouse motion
    cursor_captured: bool,
    clock: Clock,
    fps: FpsCounter,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            camera: config.camera.build(),
            config,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            cursor_captured: false,
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_REPORT_INTERVAL),
        }
    }

    pub fn camera(&self) -> &FreeLookCamera {
        &self.camera
    }

    pub fn cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Route one window event into the input layer and camera.
    /// Returns false when the app should exit.
    pub fn handle_input(&mut self, event: &WindowEvent) -> bool {
        self.controller.process_event(event);
        if self.controller.is_down(Button::Escape) {
            return false;
        }

        match event {
            WindowEvent::CursorMoved { .. } => {
                let (xoffset, yoffset) = self.controller.take_pointer_delta();
                // A captured cursor is pinned or clamped to the window
                if !self.cursor_captured {
                    self.camera.process_mouse_movement_constrained(xoffset, yoffset);
                }
            }
            WindowEvent::MouseWheel { .. } => {
                let scroll = self.controller.take_scroll_delta();
                self.camera.process_mouse_scroll(scroll);
            }
            WindowEvent::Focused(false) => self.cursor_captured = false,
            _ => {}
        }
        true
    }

    /// Relative mouse motion in device units, y pointing down
    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.cursor_captured {
            self.camera.process_mouse_movement_constrained(dx as f32, -dy as f32);
        }
    }

    /// Apply every held movement key for this frame
    pub fn update(&mut self, frame: &FrameInfo) {
        for direction in movement_intents(&self.controller) {
            self.camera.process_keyboard(direction, frame.delta);
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Arc<Window>> {
        let attributes = Window::default_attributes()
            .with_title("Free-look Demo")
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.width, self.config.height));
        Ok(Arc::new(event_loop.create_window(attributes)?))
    }

    fn grab_cursor(&mut self, window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.cursor_captured = true;
            }
            Err(e) => {
                log::warn!("Cursor capture unavailable, falling back to cursor position: {}", e);
                self.cursor_captured = false;
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        self.update(&frame);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match renderer.render(&self.camera, &frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            &self.camera,
            &self.config.assets,
            self.config.clear_color,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        if self.config.grab_cursor {
            self.grab_cursor(&window);
        }

        self.clock.reset();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(true) => {
                if let (true, Some(window)) = (self.config.grab_cursor, self.window.clone()) {
                    self.grab_cursor(&window);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if !self.handle_input(&other) {
                    event_loop.exit();
                }
            }
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.handle_mouse_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
