use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use crate::traits::CameraController;

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 1.0;
pub const FAR: f32 = 20000.0;
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, -6.0, 12.0);

/// Share of the pending motion applied per frame
pub const DAMPING_FACTOR: f32 = 0.05;
/// Scale applied to the orbit radius per wheel notch
pub const ZOOM_STEP: f32 = 0.95;

const MIN_DISTANCE: f32 = 0.1;
const MAX_DISTANCE: f32 = 10000.0;
const POLE_EPSILON: f32 = 1e-6;

/// Orbit around a target in spherical coordinates (y up)
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +y
    phi: f32,
    /// Azimuth around y, measured from +z
    theta: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self { radius, phi: 0.0, theta: 0.0 };
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Perspective camera with damped orbit, pan and zoom
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    spherical: Spherical,
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
    aspect: f32,
    viewport_height: f32,
}

impl OrbitCamera {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            spherical: Spherical::from_offset(INITIAL_POSITION),
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
            aspect: 1.0,
            viewport_height: 1.0,
        };
        camera.set_aspect(width, height);
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn distance(&self) -> f32 {
        self.spherical.radius
    }

    /// Queue an orbit from a cursor drag in physical pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.delta_theta -= TAU * dx / self.viewport_height;
        self.delta_phi -= TAU * dy / self.viewport_height;
    }

    /// Queue a pan from a cursor drag in physical pixels
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let (right, up) = self.screen_axes();
        // world units per pixel at the target distance
        let extent = self.spherical.radius * (FOV_Y_DEGREES.to_radians() * 0.5).tan();
        let per_pixel = 2.0 * extent / self.viewport_height;

        self.pan_offset += -right * dx * per_pixel + up * dy * per_pixel;
    }

    /// Zoom in for positive notches, out for negative
    pub fn zoom(&mut self, notches: f32) {
        self.scale *= ZOOM_STEP.powf(notches);
    }

    fn screen_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, NEAR, FAR)
    }

    fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }
}

impl CameraController for OrbitCamera {
    fn update(&mut self) {
        self.spherical.theta += self.delta_theta * DAMPING_FACTOR;
        self.spherical.phi = (self.spherical.phi + self.delta_phi * DAMPING_FACTOR)
            .clamp(POLE_EPSILON, PI - POLE_EPSILON);
        self.spherical.radius = (self.spherical.radius * self.scale).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.target += self.pan_offset * DAMPING_FACTOR;

        self.delta_theta *= 1.0 - DAMPING_FACTOR;
        self.delta_phi *= 1.0 - DAMPING_FACTOR;
        self.pan_offset *= 1.0 - DAMPING_FACTOR;
        self.scale = 1.0;
    }

    fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    fn position(&self) -> Vec3 {
        self.target + self.spherical.to_offset()
    }

    fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.viewport_height = height as f32;
    }
}
