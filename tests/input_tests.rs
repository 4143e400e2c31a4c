use freelook_demo::camera::{CameraMovement, FreeLookCamera, DEFAULT_SENSITIVITY, DEFAULT_YAW};
use freelook_demo::core::{movement_intents, Button, Controller, PointerTracker};
use glam::Vec3;

struct HeldKeys(Vec<Button>);

impl Controller for HeldKeys {
    fn is_down(&self, button: Button) -> bool {
        self.0.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.0
    }
}

fn apply_frame(camera: &mut FreeLookCamera, keys: &HeldKeys, delta: f32) {
    for direction in movement_intents(keys) {
        camera.process_keyboard(direction, delta);
    }
}

#[cfg(test)]
mod pointer_tests {
    use super::*;

    #[test]
    fn test_capture_jump_is_ignored() {
        let mut camera = FreeLookCamera::default();
        let mut pointer = PointerTracker::new();

        // Cursor warps far from the window centre on capture
        let (x, y) = pointer.sample(1500.0, -200.0);
        camera.process_mouse_movement_constrained(x, y);

        assert_eq!(camera.yaw(), DEFAULT_YAW);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn test_moving_pointer_up_raises_pitch() {
        let mut camera = FreeLookCamera::default();
        let mut pointer = PointerTracker::new();
        pointer.sample(400.0, 300.0);

        let (x, y) = pointer.sample(400.0, 250.0);
        camera.process_mouse_movement_constrained(x, y);

        assert!((camera.pitch() - 50.0 * DEFAULT_SENSITIVITY).abs() < 1e-4);
        assert!(camera.front().y > 0.0);
    }

    #[test]
    fn test_moving_pointer_right_turns_right() {
        let mut camera = FreeLookCamera::default();
        let mut pointer = PointerTracker::new();
        pointer.sample(400.0, 300.0);

        let (x, y) = pointer.sample(500.0, 300.0);
        camera.process_mouse_movement_constrained(x, y);

        assert!(camera.yaw() > DEFAULT_YAW);
        assert!(camera.front().x > 0.0);
    }
}

#[cfg(test)]
mod keyboard_tests {
    use super::*;

    #[test]
    fn test_held_keys_compose_in_one_frame() {
        let mut camera = FreeLookCamera::new(Vec3::ZERO);
        let keys = HeldKeys(vec![Button::KeyW, Button::KeyD, Button::Space]);

        apply_frame(&mut camera, &keys, 1.0);

        assert!(camera.position().abs_diff_eq(Vec3::new(2.5, 2.5, -2.5), 1e-5));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut camera = FreeLookCamera::new(Vec3::ZERO);
        let keys = HeldKeys(vec![Button::KeyA, Button::KeyD, Button::Space, Button::KeyC]);

        apply_frame(&mut camera, &keys, 0.75);

        assert!(camera.position().abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn test_escape_is_not_a_movement() {
        let keys = HeldKeys(vec![Button::Escape, Button::KeyS]);
        assert_eq!(movement_intents(&keys), vec![CameraMovement::Backward]);
    }
}
