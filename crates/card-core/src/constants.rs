use std::time::Duration;

// Particle tuning shared by the burst generator and the animator.
// Units are canvas pixels and animation ticks (one tick per display frame).

// Burst sizes
pub const BURST_PARTICLES: usize = 60;
pub const MEGA_BURST_PARTICLES: usize = 200;

// Emission
pub const ANGLE_JITTER_RAD: f64 = 0.5; // ~28 degrees on top of the even spacing
pub const SPEED_MIN: f64 = 4.0;
pub const SPEED_MAX: f64 = 10.0;
pub const UPWARD_KICK: f64 = 3.0; // subtracted from initial vy so bursts arc up first
pub const SIZE_MIN: f64 = 15.0;
pub const SIZE_MAX: f64 = 40.0;
pub const ROTATION_SPEED_MAX: f64 = 0.15; // rad/tick, drawn from +/- this

// Per-tick integration
pub const GRAVITY: f64 = 0.4;
pub const HORIZONTAL_DRAG: f64 = 0.98;
pub const LIFE_DECAY: f64 = 0.008; // full fade in ~125 ticks
pub const OFFSCREEN_MARGIN: f64 = 100.0; // below the surface before a particle is culled

// Timing
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);
pub const TRACK_SETTLE_DELAY: Duration = Duration::from_millis(100);
