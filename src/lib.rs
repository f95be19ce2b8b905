//! Demon Circle - bouncing balls hunted by a demon
//!
//! Core modules:
//! - `app`: Frame loop driver (input queue, tick, render)
//! - `sim`: Deterministic simulation (entities, collisions, frame tick)
//! - `renderer`: 2D drawing surface abstraction and frame rendering
//! - `platform`: Keyboard input mapping
//! - `settings`: Tunable constants loaded from JSON

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Number of balls spawned at startup
    pub const BALL_COUNT: usize = 20;
    pub const BALL_RADIUS: f32 = 10.0;
    /// Pixels per frame along each unit of direction
    pub const BALL_SPEED: f32 = 2.0;

    pub const DEMON_RADIUS: f32 = 20.0;
    /// Pixels per frame, for both the chase step and a key nudge
    pub const DEMON_SPEED: f32 = 5.0;
    pub const DEMON_COLOR: &str = "black";

    /// Remaining-ball counter
    pub const COUNTER_FONT: &str = "20px Arial";
    pub const COUNTER_COLOR: &str = "black";
    pub const COUNTER_X: f32 = 10.0;
    pub const COUNTER_Y: f32 = 30.0;
}

/// Euclidean distance between two positions
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Angle from `from` toward `to` (radians, atan2 convention)
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
