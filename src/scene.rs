use glam::{Mat4, Vec3};

use crate::types::{InstanceRaw, Vertex};

pub const CLEAR_COLOR: [f32; 3] = [0.2, 0.3, 0.3];
pub const LAMP_SCALE: f32 = 0.2;

/// World positions of the ten textured cubes
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Point light positions; a lamp marker is drawn at each
pub const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

const fn v(p: [f32; 3], uv: [f32; 2], n: [f32; 3]) -> Vertex {
    Vertex::new(p, uv, n)
}

/// Unit cube as 12 triangles, one normal per face
#[rustfmt::skip]
pub const CUBE_VERTICES: [Vertex; 36] = [
    // -Z
    v([-0.5, -0.5, -0.5], [0.0, 0.0], [0.0, 0.0, -1.0]),
    v([ 0.5,  0.5, -0.5], [1.0, 1.0], [0.0, 0.0, -1.0]),
    v([ 0.5, -0.5, -0.5], [1.0, 0.0], [0.0, 0.0, -1.0]),
    v([ 0.5,  0.5, -0.5], [1.0, 1.0], [0.0, 0.0, -1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0], [0.0, 0.0, -1.0]),
    v([-0.5,  0.5, -0.5], [0.0, 1.0], [0.0, 0.0, -1.0]),
    // +Z
    v([-0.5, -0.5,  0.5], [0.0, 0.0], [0.0, 0.0, 1.0]),
    v([ 0.5, -0.5,  0.5], [1.0, 0.0], [0.0, 0.0, 1.0]),
    v([ 0.5,  0.5,  0.5], [1.0, 1.0], [0.0, 0.0, 1.0]),
    v([ 0.5,  0.5,  0.5], [1.0, 1.0], [0.0, 0.0, 1.0]),
    v([-0.5,  0.5,  0.5], [0.0, 1.0], [0.0, 0.0, 1.0]),
    v([-0.5, -0.5,  0.5], [0.0, 0.0], [0.0, 0.0, 1.0]),
    // -X
    v([-0.5,  0.5,  0.5], [1.0, 0.0], [-1.0, 0.0, 0.0]),
    v([-0.5,  0.5, -0.5], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5,  0.5], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([-0.5,  0.5,  0.5], [1.0, 0.0], [-1.0, 0.0, 0.0]),
    // +X
    v([ 0.5,  0.5,  0.5], [1.0, 0.0], [1.0, 0.0, 0.0]),
    v([ 0.5, -0.5, -0.5], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([ 0.5,  0.5, -0.5], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([ 0.5, -0.5, -0.5], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([ 0.5,  0.5,  0.5], [1.0, 0.0], [1.0, 0.0, 0.0]),
    v([ 0.5, -0.5,  0.5], [0.0, 0.0], [1.0, 0.0, 0.0]),
    // -Y
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [0.0, -1.0, 0.0]),
    v([ 0.5, -0.5, -0.5], [1.0, 1.0], [0.0, -1.0, 0.0]),
    v([ 0.5, -0.5,  0.5], [1.0, 0.0], [0.0, -1.0, 0.0]),
    v([ 0.5, -0.5,  0.5], [1.0, 0.0], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5,  0.5], [0.0, 0.0], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [0.0, -1.0, 0.0]),
    // +Y
    v([-0.5,  0.5, -0.5], [0.0, 1.0], [0.0, 1.0, 0.0]),
    v([ 0.5,  0.5,  0.5], [1.0, 0.0], [0.0, 1.0, 0.0]),
    v([ 0.5,  0.5, -0.5], [1.0, 1.0], [0.0, 1.0, 0.0]),
    v([ 0.5,  0.5,  0.5], [1.0, 0.0], [0.0, 1.0, 0.0]),
    v([-0.5,  0.5, -0.5], [0.0, 1.0], [0.0, 1.0, 0.0]),
    v([-0.5,  0.5,  0.5], [0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Cube `index` spins about a fixed tilted axis at `index` rad/s
pub fn cube_model(index: usize, time: f32) -> Mat4 {
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(CUBE_POSITIONS[index])
        * Mat4::from_axis_angle(axis, time * index as f32)
}

pub fn lamp_model(index: usize) -> Mat4 {
    Mat4::from_translation(POINT_LIGHT_POSITIONS[index]) * Mat4::from_scale(Vec3::splat(LAMP_SCALE))
}

pub fn cube_instances(time: f32) -> Vec<InstanceRaw> {
    (0..CUBE_POSITIONS.len())
        .map(|i| InstanceRaw::from_model(cube_model(i, time)))
        .collect()
}

pub fn lamp_instances() -> Vec<InstanceRaw> {
    (0..POINT_LIGHT_POSITIONS.len())
        .map(|i| InstanceRaw::from_model(lamp_model(i)))
        .collect()
}
