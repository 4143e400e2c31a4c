use freelook_demo::camera::{CameraMovement, FreeLookCamera, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT};
use glam::{Mat4, Vec3};

const EPS: f32 = 1e-5;

fn assert_vec_eq(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn assert_orthonormal(camera: &FreeLookCamera) {
    let (f, r, u) = (camera.front(), camera.right(), camera.up());
    for v in [f, r, u] {
        assert!((v.length() - 1.0).abs() < 1e-4, "{:?} is not unit length", v);
    }
    assert!(f.dot(r).abs() < 1e-4, "front/right not orthogonal");
    assert!(f.dot(u).abs() < 1e-4, "front/up not orthogonal");
    assert!(r.dot(u).abs() < 1e-4, "right/up not orthogonal");
    // right-handed: up = right x front
    assert!(r.cross(f).abs_diff_eq(u, 1e-4), "basis is not right-handed");
}

#[cfg(test)]
mod basis_tests {
    use super::*;

    #[test]
    fn test_basis_orthonormal_across_orientations() {
        for yaw in (-360..=360).step_by(15) {
            for pitch in (-89..=89).step_by(8) {
                let camera = FreeLookCamera::with_orientation(Vec3::ZERO, Vec3::Y, yaw as f32, pitch as f32);
                assert_orthonormal(&camera);
            }
        }
    }

    #[test]
    fn test_basis_orthonormal_after_many_mouse_moves() {
        let mut camera = FreeLookCamera::default();
        for i in 0..10_000 {
            let x = ((i * 37) % 23) as f32 - 11.0;
            let y = ((i * 53) % 19) as f32 - 9.0;
            camera.process_mouse_movement(x, y, true);
        }
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_basis_is_current_right_after_mouse_move() {
        let mut camera = FreeLookCamera::default();
        camera.process_mouse_movement(900.0, 0.0, true);
        // yaw -90 + 90 = 0 degrees: looking down +X
        assert_vec_eq(camera.front(), Vec3::X);
        assert_vec_eq(camera.right(), Vec3::Z);
    }

    #[test]
    fn test_world_up_never_changes() {
        let mut camera = FreeLookCamera::default();
        camera.process_mouse_movement(123.0, 456.0, true);
        camera.process_keyboard(CameraMovement::Up, 1.0);
        camera.process_mouse_scroll(7.0);
        assert_eq!(camera.world_up(), Vec3::Y);
    }
}

#[cfg(test)]
mod view_matrix_tests {
    use super::*;

    #[test]
    fn test_default_view_matches_look_at() {
        let camera = FreeLookCamera::new(Vec3::new(0.0, 0.0, 3.0));
        let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 2.0), Vec3::Y);
        assert!(camera.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_view_matrix_is_idempotent() {
        let mut camera = FreeLookCamera::default();
        camera.process_mouse_movement(31.0, -12.0, true);
        assert_eq!(camera.view_matrix(), camera.view_matrix());
    }

    #[test]
    fn test_view_maps_position_to_origin() {
        let mut camera = FreeLookCamera::new(Vec3::new(4.0, -2.0, 7.0));
        camera.process_mouse_movement(-250.0, 130.0, true);
        let eye = camera.view_matrix().transform_point3(camera.position());
        assert_vec_eq(eye, Vec3::ZERO);
    }

    #[test]
    fn test_view_puts_front_on_negative_z() {
        let mut camera = FreeLookCamera::default();
        camera.process_mouse_movement(400.0, 200.0, true);
        let ahead = camera.position() + camera.front();
        let in_view = camera.view_matrix().transform_point3(ahead);
        assert_vec_eq(in_view, Vec3::NEG_Z);
    }
}

#[cfg(test)]
mod clamp_tests {
    use super::*;

    #[test]
    fn test_pitch_saturates_below_ninety() {
        let mut camera = FreeLookCamera::default();
        for _ in 0..10 {
            camera.process_mouse_movement(0.0, 1e6, true);
            assert!(camera.pitch() < 90.0);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn test_pitch_saturates_looking_down() {
        let mut camera = FreeLookCamera::default();
        camera.process_mouse_movement(0.0, -1e6, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert!(camera.front().y < 0.0);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut camera = FreeLookCamera::default();
        camera.process_mouse_movement(36_000.0, 0.0, true);
        assert!(camera.yaw() > 3000.0);
        // 3600 degrees of extra yaw is ten full turns
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn test_zoom_saturates_both_ends() {
        let mut camera = FreeLookCamera::default();
        camera.process_mouse_scroll(1000.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
        camera.process_mouse_scroll(-1000.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_zoom_small_steps_stay_in_range() {
        let mut camera = FreeLookCamera::default();
        for step in [3.0, 10.0, -2.0, 40.0, -1.5, -100.0, 0.25] {
            camera.process_mouse_scroll(step);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&camera.zoom()));
        }
    }
}

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn test_forward_then_right_composes() {
        let mut camera = FreeLookCamera::new(Vec3::ZERO);
        assert_vec_eq(camera.front(), Vec3::NEG_Z);
        assert_vec_eq(camera.right(), Vec3::X);
        assert_eq!(camera.movement_speed(), 2.5);

        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert_vec_eq(camera.position(), Vec3::new(0.0, 0.0, -2.5));

        camera.process_keyboard(CameraMovement::Right, 1.0);
        assert_vec_eq(camera.position(), Vec3::new(2.5, 0.0, -2.5));
    }

    #[test]
    fn test_each_direction() {
        let cases = [
            (CameraMovement::Forward, Vec3::new(0.0, 0.0, -1.0)),
            (CameraMovement::Backward, Vec3::new(0.0, 0.0, 1.0)),
            (CameraMovement::Left, Vec3::new(-1.0, 0.0, 0.0)),
            (CameraMovement::Right, Vec3::new(1.0, 0.0, 0.0)),
            (CameraMovement::Up, Vec3::new(0.0, 1.0, 0.0)),
            (CameraMovement::Down, Vec3::new(0.0, -1.0, 0.0)),
        ];
        for (direction, expected) in cases {
            let mut camera = FreeLookCamera::new(Vec3::ZERO).with_movement_speed(1.0);
            camera.process_keyboard(direction, 1.0);
            assert_vec_eq(camera.position(), expected);
        }
    }

    #[test]
    fn test_movement_scales_with_delta_time() {
        let mut camera = FreeLookCamera::new(Vec3::ZERO).with_movement_speed(4.0);
        camera.process_keyboard(CameraMovement::Backward, 0.25);
        assert_vec_eq(camera.position(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_forward_follows_pitch() {
        let mut camera = FreeLookCamera::new(Vec3::ZERO).with_movement_speed(1.0);
        camera.process_mouse_movement(0.0, 450.0, true);
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        let expected = Vec3::new(0.0, 45f32.to_radians().sin(), -45f32.to_radians().cos());
        assert_vec_eq(camera.position(), expected);
    }

    #[test]
    fn test_position_is_never_clamped() {
        let mut camera = FreeLookCamera::new(Vec3::ZERO).with_movement_speed(1000.0);
        camera.process_keyboard(CameraMovement::Down, 100.0);
        assert_eq!(camera.position().y, -100_000.0);
    }
}

#[cfg(test)]
mod inverse_tests {
    use super::*;

    #[test]
    fn test_opposite_offsets_cancel() {
        let mut camera = FreeLookCamera::default();
        let (yaw, pitch) = (camera.yaw(), camera.pitch());

        camera.process_mouse_movement(137.0, -42.5, false);
        camera.process_mouse_movement(-137.0, 42.5, false);

        assert!((camera.yaw() - yaw).abs() < 1e-3);
        assert!((camera.pitch() - pitch).abs() < 1e-3);
        assert_vec_eq(camera.front(), Vec3::NEG_Z);
    }
}
