//! Floating heart decoration: instance motion, camera, lights and the extruded
//! heart mesh. Platform-free so the renderer only uploads what this produces.

use crate::color::Rgb;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

// Instance layout
pub const HEART_BASE_POSITIONS: [[f32; 3]; 7] = [
    [-3.0, 2.0, 0.0],
    [3.0, -1.0, -2.0],
    [0.0, -3.0, -1.0],
    [-2.0, -2.0, -3.0],
    [2.0, 3.0, -2.0],
    [4.0, 1.0, -1.0],
    [-4.0, -1.0, -2.0],
];
pub const HEART_SCALE: f32 = 0.5;

// Motion
pub const BOB_AMPLITUDE: f32 = 0.3;
pub const SPIN_RATE: f32 = 0.3; // rad/sec about y
pub const FLOAT_SPEED: f32 = 2.0;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.5;
pub const FLOAT_INTENSITY: f32 = 1.0;

// Mesh
pub const EXTRUDE_DEPTH: f32 = 0.4;
pub const CURVE_SEGMENTS: usize = 12;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 8.0);
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Material
pub const HEART_COLOR: Rgb = Rgb::from_u32(0xdc2626);
pub const HEART_EMISSIVE: f32 = 0.3;
pub const HEART_METALNESS: f32 = 0.4;
pub const HEART_ROUGHNESS: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub lights: [PointLight; 3],
}

pub const LIGHTING: Lighting = Lighting {
    ambient: 0.6,
    lights: [
        PointLight {
            position: Vec3::new(10.0, 10.0, 10.0),
            color: Rgb::from_u32(0xff6b6b),
            intensity: 1.2,
        },
        PointLight {
            position: Vec3::new(-10.0, -10.0, 5.0),
            color: Rgb::from_u32(0xff8787),
            intensity: 0.8,
        },
        PointLight {
            position: Vec3::new(0.0, 10.0, 0.0),
            color: Rgb::from_u32(0xdc2626),
            intensity: 0.5,
        },
    ],
};

/// Combined projection * view for the fixed scene camera.
pub fn view_projection(aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(
        CAMERA_FOV_DEG.to_radians(),
        aspect.max(1e-3),
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    );
    let view = Mat4::look_at_rh(CAMERA_EYE, Vec3::ZERO, Vec3::Y);
    proj * view
}

#[inline]
pub fn bob_offset(elapsed: f32, base_x: f32) -> f32 {
    (elapsed + base_x).sin() * BOB_AMPLITUDE
}

#[inline]
pub fn spin_angle(elapsed: f32) -> f32 {
    elapsed * SPIN_RATE
}

#[derive(Clone, Copy, Debug)]
pub struct HeartInstance {
    pub base: Vec3,
    /// Per-instance offset into the float wobble so hearts drift out of step.
    pub float_phase: f32,
}

impl HeartInstance {
    pub fn model(&self, elapsed: f32) -> Mat4 {
        let ft = elapsed * FLOAT_SPEED / 4.0 + self.float_phase;
        let wobble = Quat::from_euler(
            EulerRot::XYZ,
            ft.cos() / 8.0 * FLOAT_ROTATION_INTENSITY,
            ft.sin() / 8.0 * FLOAT_ROTATION_INTENSITY,
            ft.sin() / 20.0 * FLOAT_ROTATION_INTENSITY,
        );
        let float_lift = Mat4::from_translation(Vec3::new(0.0, ft.sin() / 10.0 * FLOAT_INTENSITY, 0.0));

        let pos = Vec3::new(
            self.base.x,
            self.base.y + bob_offset(elapsed, self.base.x),
            self.base.z,
        );
        let local = Mat4::from_scale_rotation_translation(
            Vec3::splat(HEART_SCALE),
            Quat::from_rotation_y(spin_angle(elapsed)),
            pos,
        );
        float_lift * Mat4::from_quat(wobble) * local
    }
}

pub struct HeartField {
    pub hearts: Vec<HeartInstance>,
}

impl HeartField {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(&mut StdRng::from_entropy())
    }

    fn with_rng(rng: &mut StdRng) -> Self {
        let hearts = HEART_BASE_POSITIONS
            .iter()
            .map(|p| HeartInstance {
                base: Vec3::from_array(*p),
                float_phase: rng.gen::<f32>() * TAU,
            })
            .collect();
        Self { hearts }
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    pub fn models(&self, elapsed: f32) -> Vec<Mat4> {
        self.hearts.iter().map(|h| h.model(elapsed)).collect()
    }
}

// ---------------- Heart mesh ----------------

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Closed heart outline (no repeated end point), notch at the top once flipped.
pub fn heart_outline(segments: usize) -> Vec<Vec2> {
    let v = Vec2::new;
    // (control 1, control 2, end); each curve starts where the previous ended
    let start = v(0.5, 0.5);
    let curves = [
        (v(0.5, 0.5), v(0.4, 0.0), v(0.0, 0.0)),
        (v(-0.6, 0.0), v(-0.6, 0.7), v(-0.6, 0.7)),
        (v(-0.6, 1.1), v(-0.3, 1.54), v(0.5, 1.9)),
        (v(1.2, 1.54), v(1.6, 1.1), v(1.6, 0.7)),
        (v(1.6, 0.7), v(1.6, 0.0), v(1.0, 0.0)),
        (v(0.7, 0.0), v(0.5, 0.5), v(0.5, 0.5)),
    ];
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(curves.len() * segments);
    let mut from = start;
    for (c1, c2, to) in curves {
        for s in 0..segments {
            let p = cubic(from, c1, c2, to, s as f32 / segments as f32);
            if points.last().map_or(true, |last: &Vec2| last.distance(p) > 1e-5) {
                points.push(p);
            }
        }
        from = to;
    }
    points
}

/// Extrude the heart outline into a closed solid centred on the origin and
/// flipped half a turn about z so the tip points down.
pub fn heart_mesh(segments: usize, depth: f32) -> Mesh {
    let outline = heart_outline(segments);
    let center = Vec2::new(0.5, 0.95);
    let flip = |p: Vec2| -(p - center);
    let ring: Vec<Vec2> = outline.iter().map(|p| flip(*p)).collect();
    let n = ring.len();
    let half = depth * 0.5;

    let mut vertices = Vec::with_capacity(2 * (n + 1) + 4 * n);
    let mut indices = Vec::with_capacity(6 * n + 6 * n);

    // Caps: a fan around the centre works because the outline is star-shaped
    // about it.
    for (z, nz) in [(half, 1.0_f32), (-half, -1.0)] {
        let hub = vertices.len() as u16;
        vertices.push(MeshVertex {
            position: [0.0, 0.0, z],
            normal: [0.0, 0.0, nz],
        });
        for p in &ring {
            vertices.push(MeshVertex {
                position: [p.x, p.y, z],
                normal: [0.0, 0.0, nz],
            });
        }
        for i in 0..n {
            let a = hub + 1 + i as u16;
            let b = hub + 1 + ((i + 1) % n) as u16;
            indices.extend_from_slice(&[hub, a, b]);
        }
    }

    // Side walls, flat shaded per edge
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let edge = b - a;
        let mut normal = Vec2::new(edge.y, -edge.x).normalize_or_zero();
        if normal.dot((a + b) * 0.5) < 0.0 {
            normal = -normal;
        }
        let base = vertices.len() as u16;
        for (p, z) in [(a, half), (b, half), (b, -half), (a, -half)] {
            vertices.push(MeshVertex {
                position: [p.x, p.y, z],
                normal: [normal.x, normal.y, 0.0],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}
