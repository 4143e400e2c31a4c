use std::collections::HashSet;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixels per scroll "line" when the platform reports pixel deltas
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Converts absolute cursor positions into camera offsets.
///
/// The first sample after creation or `reset` only records the position, so
/// capturing the cursor does not produce a large synthetic jump.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last: (f32, f32),
    has_received_first_sample: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute position, returns `(xoffset, yoffset)` with y pointing up
    pub fn sample(&mut self, x: f32, y: f32) -> (f32, f32) {
        if !self.has_received_first_sample {
            self.last = (x, y);
            self.has_received_first_sample = true;
        }

        let offset = (x - self.last.0, self.last.1 - y);
        self.last = (x, y);
        offset
    }

    /// Skip the next sample again (e.g. after focus loss or cursor regrab)
    pub fn reset(&mut self) {
        self.has_received_first_sample = false;
    }

    pub fn has_received_first_sample(&self) -> bool {
        self.has_received_first_sample
    }
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    pressed_keys: HashSet<Button>,
    pressed_vec: Vec<Button>,
    pointer: PointerTracker,
    pointer_delta: (f32, f32),
    scroll_delta: f32,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (dx, dy) = self.pointer.sample(position.x as f32, position.y as f32);
                self.pointer_delta.0 += dx;
                self.pointer_delta.1 += dy;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += Self::scroll_lines(*delta);
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Take accumulated pointer offset, leaving zero behind
    pub fn take_pointer_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.pointer_delta)
    }

    /// Take accumulated scroll in lines, leaving zero behind
    pub fn take_scroll_delta(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }

    /// Drop all held keys and re-arm first-sample skipping
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
        self.pointer_delta = (0.0, 0.0);
        self.pointer.reset();
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub(crate) fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    fn scroll_lines(delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::Space => Some(Button::Space),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;

    // KeyEvent has platform-private fields, so key state is driven through set_button

    #[test]
    fn test_first_sample_is_skipped() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.has_received_first_sample());
        assert_eq!(tracker.sample(400.0, 300.0), (0.0, 0.0));
        assert!(tracker.has_received_first_sample());
    }

    #[test]
    fn test_y_offset_is_inverted() {
        let mut tracker = PointerTracker::new();
        tracker.sample(400.0, 300.0);
        assert_eq!(tracker.sample(410.0, 290.0), (10.0, 10.0));
    }

    #[test]
    fn test_reset_skips_next_sample() {
        let mut tracker = PointerTracker::new();
        tracker.sample(0.0, 0.0);
        tracker.reset();
        assert_eq!(tracker.sample(500.0, 500.0), (0.0, 0.0));
        assert_eq!(tracker.sample(501.0, 500.0), (1.0, 0.0));
    }

    #[test]
    fn test_press_release_keeps_order() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyW, ElementState::Pressed);
        controller.set_button(Button::KeyD, ElementState::Pressed);
        controller.set_button(Button::KeyW, ElementState::Pressed);
        assert_eq!(controller.get_down_keys(), &[Button::KeyW, Button::KeyD]);

        controller.set_button(Button::KeyW, ElementState::Released);
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys(), &[Button::KeyD]);
    }

    #[test]
    fn test_scroll_units() {
        assert_eq!(WinitController::scroll_lines(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -80.0));
        assert_eq!(WinitController::scroll_lines(pixels), -2.0);
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut controller = WinitController::new();
        controller.set_button(Button::Space, ElementState::Pressed);
        controller.pointer.sample(10.0, 10.0);
        controller.process_event(&WindowEvent::Focused(false));
        assert!(controller.get_down_keys().is_empty());
        assert!(!controller.pointer().has_received_first_sample());
    }

    #[test]
    fn test_cursor_moved_accumulates_offsets() {
        let mut controller = WinitController::new();
        for (x, y) in [(100.0, 100.0), (104.0, 98.0), (110.0, 95.0)] {
            controller.process_event(&WindowEvent::CursorMoved {
                device_id: unsafe { DeviceId::dummy() },
                position: PhysicalPosition::new(x, y),
            });
        }
        assert_eq!(controller.take_pointer_delta(), (10.0, 5.0));
    }

    #[test]
    fn test_deltas_are_taken_once() {
        let mut controller = WinitController::new();
        controller.pointer_delta = (3.0, -1.0);
        controller.scroll_delta = 1.5;
        assert_eq!(controller.take_pointer_delta(), (3.0, -1.0));
        assert_eq!(controller.take_pointer_delta(), (0.0, 0.0));
        assert_eq!(controller.take_scroll_delta(), 1.5);
        assert_eq!(controller.take_scroll_delta(), 0.0);
    }
}
