//! Phong light setup shared by the lit pipeline.
//!
//! All structs mirror the WGSL uniform layout in `shaders/lit.wgsl`: every
//! `vec3` starts on a 16-byte boundary and the trailing scalar fills its tail.

use glam::Vec3;

use crate::camera::FreeLookCamera;
use crate::scene::POINT_LIGHT_POSITIONS;

pub const NUM_POINT_LIGHTS: usize = POINT_LIGHT_POSITIONS.len();
pub const MATERIAL_SHININESS: f32 = 32.0;

/// Flashlight cone, degrees
pub const SPOT_INNER_CUTOFF_DEG: f32 = 12.5;
pub const SPOT_OUTER_CUTOFF_DEG: f32 = 15.0;

/// Distance the point lights and the flashlight are expected to reach
pub const LIGHT_RANGE: f32 = 50.0;

/// Distance falloff `1 / (constant + linear*d + quadratic*d^2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// (covered distance, linear, quadratic); constant is always 1
const ATTENUATION_TABLE: [(f32, f32, f32); 12] = [
    (7.0, 0.7, 1.8),
    (13.0, 0.35, 0.44),
    (20.0, 0.22, 0.20),
    (32.0, 0.14, 0.07),
    (50.0, 0.09, 0.032),
    (65.0, 0.07, 0.017),
    (100.0, 0.045, 0.0075),
    (160.0, 0.027, 0.0028),
    (200.0, 0.022, 0.0019),
    (325.0, 0.014, 0.0007),
    (600.0, 0.007, 0.0002),
    (3250.0, 0.0014, 0.000007),
];

impl Attenuation {
    pub const fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Smallest tabulated falloff that still reaches `distance`.
    /// Anything past the last row gets the last row.
    pub fn for_range(distance: f32) -> Self {
        let (_, linear, quadratic) = ATTENUATION_TABLE
            .iter()
            .copied()
            .find(|(range, _, _)| distance <= *range)
            .unwrap_or(ATTENUATION_TABLE[ATTENUATION_TABLE.len() - 1]);
        Self::new(1.0, linear, quadratic)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLight {
    pub direction: [f32; 3],
    pub _pad0: f32,
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    pub specular: [f32; 3],
    pub _pad3: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            direction: direction.to_array(),
            _pad0: 0.0,
            ambient: ambient.to_array(),
            _pad1: 0.0,
            diffuse: diffuse.to_array(),
            _pad2: 0.0,
            specular: specular.to_array(),
            _pad3: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLight {
    pub position: [f32; 3],
    pub constant: f32,
    pub ambient: [f32; 3],
    pub linear: f32,
    pub diffuse: [f32; 3],
    pub quadratic: f32,
    pub specular: [f32; 3],
    pub _pad: f32,
}

impl PointLight {
    pub fn new(position: Vec3, attenuation: Attenuation) -> Self {
        Self {
            position: position.to_array(),
            constant: attenuation.constant,
            ambient: [0.05; 3],
            linear: attenuation.linear,
            diffuse: [0.8; 3],
            quadratic: attenuation.quadratic,
            specular: [1.0; 3],
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLight {
    pub position: [f32; 3],
    /// Cosine of the inner cone angle
    pub cut_off: f32,
    pub direction: [f32; 3],
    /// Cosine of the outer cone angle
    pub outer_cut_off: f32,
    pub ambient: [f32; 3],
    pub constant: f32,
    pub diffuse: [f32; 3],
    pub linear: f32,
    pub specular: [f32; 3],
    pub quadratic: f32,
}

impl SpotLight {
    /// Flashlight held at the camera, pointing where it looks
    pub fn flashlight(camera: &FreeLookCamera) -> Self {
        let attenuation = Attenuation::for_range(LIGHT_RANGE);
        Self {
            position: camera.position().to_array(),
            cut_off: SPOT_INNER_CUTOFF_DEG.to_radians().cos(),
            direction: camera.front().to_array(),
            outer_cut_off: SPOT_OUTER_CUTOFF_DEG.to_radians().cos(),
            ambient: [0.0; 3],
            constant: attenuation.constant,
            diffuse: [1.0; 3],
            linear: attenuation.linear,
            specular: [1.0; 3],
            quadratic: attenuation.quadratic,
        }
    }
}

/// Everything the lit shader needs besides the camera
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub directional: DirectionalLight,
    pub points: [PointLight; NUM_POINT_LIGHTS],
    pub spot: SpotLight,
    pub shininess: f32,
    pub _pad: [f32; 3],
}

impl LightingUniform {
    pub fn new(camera: &FreeLookCamera) -> Self {
        Self {
            directional: DirectionalLight::new(
                Vec3::new(-0.2, -1.0, -0.3),
                Vec3::splat(0.05),
                Vec3::splat(0.4),
                Vec3::splat(0.5),
            ),
            points: POINT_LIGHT_POSITIONS.map(|p| PointLight::new(p, Attenuation::for_range(LIGHT_RANGE))),
            spot: SpotLight::flashlight(camera),
            shininess: MATERIAL_SHININESS,
            _pad: [0.0; 3],
        }
    }

    /// Re-aim the flashlight after the camera moved
    pub fn follow_camera(&mut self, camera: &FreeLookCamera) {
        self.spot.position = camera.position().to_array();
        self.spot.direction = camera.front().to_array();
    }
}
