//! Particle store, burst generator and per-frame animator.
//!
//! The animator owns every live particle plus the "frame scheduled" flag the
//! host uses to avoid running two animation loops at once. Drawing goes through
//! [`ParticleSurface`] so the same tick runs against a browser canvas or a test
//! recorder.

use crate::color::Rgb;
use crate::constants::*;
use glam::DVec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f64::consts::TAU;

pub const HEART_PALETTE: [Rgb; 5] = [
    Rgb::from_u32(0xff6b9d),
    Rgb::from_u32(0xff8fab),
    Rgb::from_u32(0xffa5ba),
    Rgb::from_u32(0xff4d7d),
    Rgb::from_u32(0xff9eb5),
];

pub const FLOWER_PALETTE: [Rgb; 4] = [
    Rgb::from_u32(0xdda5ff),
    Rgb::from_u32(0xc77dff),
    Rgb::from_u32(0xe0aaff),
    Rgb::from_u32(0xff99d7),
];

pub const STAR_PALETTE: [Rgb; 4] = [
    Rgb::from_u32(0xffd93d),
    Rgb::from_u32(0xffb703),
    Rgb::from_u32(0xfb8500),
    Rgb::from_u32(0xffea00),
];

/// Palette assembled for one burst. Mega is the union of all three themes.
pub type Palette = SmallVec<[Rgb; 16]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BurstKind {
    Heart,
    Flower,
    Star,
    Mega,
}

impl BurstKind {
    pub const ALL: [BurstKind; 4] = [
        BurstKind::Heart,
        BurstKind::Flower,
        BurstKind::Star,
        BurstKind::Mega,
    ];

    pub fn particle_count(self) -> usize {
        match self {
            BurstKind::Mega => MEGA_BURST_PARTICLES,
            _ => BURST_PARTICLES,
        }
    }

    pub fn palette(self) -> Palette {
        let mut colors = Palette::new();
        if matches!(self, BurstKind::Heart | BurstKind::Mega) {
            colors.extend_from_slice(&HEART_PALETTE);
        }
        if matches!(self, BurstKind::Flower | BurstKind::Mega) {
            colors.extend_from_slice(&FLOWER_PALETTE);
        }
        if matches!(self, BurstKind::Star | BurstKind::Mega) {
            colors.extend_from_slice(&STAR_PALETTE);
        }
        colors
    }

    /// Mega bursts also shake the page.
    pub fn shakes(self) -> bool {
        matches!(self, BurstKind::Mega)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Accumulated every tick. A disc looks the same at any angle, so this only
    /// matters if the sprite ever stops being round.
    pub rotation: f64,
    pub rotation_speed: f64,
    pub size: f64,
    pub color: Rgb,
    pub life: f64,
    pub opacity: f64,
}

impl Particle {
    /// Advance one tick. Returns `false` once the particle should be dropped.
    pub fn step(&mut self, surface_height: f64) -> bool {
        self.velocity.y += GRAVITY;
        self.position += self.velocity;
        self.rotation += self.rotation_speed;
        self.velocity.x *= HORIZONTAL_DRAG;
        self.life -= LIFE_DECAY;
        self.opacity = self.life;
        self.is_alive(surface_height)
    }

    pub fn is_alive(&self, surface_height: f64) -> bool {
        self.life > 0.0 && self.position.y <= surface_height + OFFSCREEN_MARGIN
    }
}

/// Where the animator paints. Implementations own their own clipping.
pub trait ParticleSurface {
    /// Current drawable size in pixels (width, height).
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    /// Soft radial disc at the particle's position, rotated by its rotation,
    /// alpha = opacity, fading from `color` to transparent at `size`.
    fn draw_particle(&mut self, particle: &Particle);
}

pub struct Animator {
    particles: Vec<Particle>,
    rng: StdRng,
    frame_scheduled: bool,
}

impl Animator {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
            frame_scheduled: false,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn is_frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    /// Burst with the kind's default particle count.
    pub fn burst(&mut self, kind: BurstKind, origin: DVec2) -> bool {
        self.spawn_burst(kind, kind.particle_count(), origin)
    }

    /// Append `count` particles fanning out from `origin`.
    ///
    /// Returns `true` when the caller has to schedule a frame: no loop was
    /// running and there is now something to animate.
    pub fn spawn_burst(&mut self, kind: BurstKind, count: usize, origin: DVec2) -> bool {
        let palette = kind.palette();
        self.particles.reserve(count);
        for i in 0..count {
            let angle = TAU * i as f64 / count as f64 + self.rng.gen::<f64>() * ANGLE_JITTER_RAD;
            let speed = self.rng.gen_range(SPEED_MIN..SPEED_MAX);
            let color = palette
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(HEART_PALETTE[0]);
            self.particles.push(Particle {
                position: origin,
                velocity: DVec2::new(angle.cos() * speed, angle.sin() * speed - UPWARD_KICK),
                rotation: self.rng.gen::<f64>() * TAU,
                rotation_speed: self.rng.gen_range(-ROTATION_SPEED_MAX..ROTATION_SPEED_MAX),
                size: self.rng.gen_range(SIZE_MIN..SIZE_MAX),
                color,
                life: 1.0,
                opacity: 1.0,
            });
        }
        log::debug!(
            "[burst] {:?} +{} particles (live={})",
            kind,
            count,
            self.particles.len()
        );
        self.claim_frame()
    }

    /// The host failed to schedule the frame it claimed; the next burst may
    /// claim again.
    pub fn cancel_frame(&mut self) {
        self.frame_scheduled = false;
    }

    fn claim_frame(&mut self) -> bool {
        if self.frame_scheduled || self.particles.is_empty() {
            return false;
        }
        self.frame_scheduled = true;
        true
    }

    /// One update + draw pass. Returns whether another frame is needed.
    pub fn tick(&mut self, surface: &mut impl ParticleSurface) -> bool {
        let (_, height) = surface.size();
        surface.clear();
        self.particles.retain_mut(|p| {
            if !p.step(height) {
                return false;
            }
            surface.draw_particle(p);
            true
        });
        let more = !self.particles.is_empty();
        if !more {
            self.frame_scheduled = false;
        }
        more
    }
}
