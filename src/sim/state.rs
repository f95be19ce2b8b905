//! Simulation state and entity types
//!
//! Everything one frame tick reads or writes lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::color::random_color;
use super::shape::Shape;
use super::tick::Direction;
use crate::consts::*;
use crate::settings::Settings;
use crate::{distance, heading, polar_to_cartesian};

/// Common view of anything drawn as a filled circle
pub trait Entity {
    fn shape(&self) -> &Shape;
    fn radius(&self) -> f32;
    fn color(&self) -> &str;

    #[inline]
    fn pos(&self) -> Vec2 {
        self.shape().pos
    }

    /// Circles overlap (strictly closer than the sum of radii)
    fn touches(&self, other: &impl Entity) -> bool {
        distance(self.pos(), other.pos()) < self.radius() + other.radius()
    }
}

/// A bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub shape: Shape,
    /// `#RRGGBB`
    pub color: String,
    pub radius: f32,
    pub speed: f32,
    /// Per-axis heading, each component in [-1, 1); not normalized
    pub direction: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, color: impl Into<String>, direction: Vec2) -> Self {
        Self {
            shape: Shape::new(pos.x, pos.y),
            color: color.into(),
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            direction,
        }
    }

    /// Random position inside `bounds`, random color, random direction
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let pos = Vec2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y);
        let color = random_color(rng);
        let direction = Vec2::new(
            rng.random::<f32>() * 2.0 - 1.0,
            rng.random::<f32>() * 2.0 - 1.0,
        );
        Self::new(pos, color, direction)
    }

    /// Advance one frame and bounce off the canvas edges
    ///
    /// Each axis flips independently once the edge is past the boundary, so
    /// a ball can spend a frame outside before heading back in.
    pub fn update(&mut self, bounds: Vec2) {
        let step = self.direction * self.speed;
        self.shape.move_by(step.x, step.y);

        let Vec2 { x, y } = self.shape.pos;
        if x - self.radius < 0.0 || x + self.radius > bounds.x {
            self.direction.x = -self.direction.x;
        }
        if y - self.radius < 0.0 || y + self.radius > bounds.y {
            self.direction.y = -self.direction.y;
        }
    }

    /// Recolor `self` if it overlaps `other`. `other` is never modified.
    ///
    /// Returns whether the two overlapped.
    pub fn check_collision<R: Rng + ?Sized>(&mut self, other: &Ball, rng: &mut R) -> bool {
        if self.touches(other) {
            self.color = random_color(rng);
            true
        } else {
            false
        }
    }
}

impl Entity for Ball {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn color(&self) -> &str {
        &self.color
    }
}

/// The predator. Idle until the first arrow key, then chases forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemonCircle {
    pub shape: Shape,
    pub color: String,
    pub radius: f32,
    pub speed: f32,
    /// Latched by the first key nudge; never cleared
    pub is_moving: bool,
}

impl DemonCircle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            shape: Shape::new(pos.x, pos.y),
            color: DEMON_COLOR.to_string(),
            radius: DEMON_RADIUS,
            speed: DEMON_SPEED,
            is_moving: false,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        Self::new(Vec2::new(
            rng.random::<f32>() * bounds.x,
            rng.random::<f32>() * bounds.y,
        ))
    }

    /// Index of the closest ball; ties go to the earliest one
    pub fn nearest(&self, balls: &[Ball]) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, ball) in balls.iter().enumerate() {
            let d = self.shape.distance_to(&ball.shape);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Step toward the nearest ball. Returns false when idle or nothing is left to chase.
    pub fn update(&mut self, balls: &[Ball]) -> bool {
        if !self.is_moving {
            return false;
        }
        let Some(target) = self.nearest(balls) else {
            return false;
        };

        let angle = heading(self.shape.pos, balls[target].shape.pos);
        let step = polar_to_cartesian(self.speed, angle);
        self.shape.move_by(step.x, step.y);
        true
    }

    /// Manual arrow-key push. Applied on top of the chase step.
    pub fn nudge(&mut self, direction: Direction) {
        if !self.is_moving {
            log::debug!("Demon released at ({:.1}, {:.1})", self.shape.x(), self.shape.y());
        }
        self.is_moving = true;
        let delta = direction.unit() * self.speed;
        self.shape.move_by(delta.x, delta.y);
    }
}

impl Entity for DemonCircle {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn color(&self) -> &str {
        &self.color
    }
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Canvas width/height, fixed at startup
    pub bounds: Vec2,
    /// Live balls in spawn order
    pub balls: Vec<Ball>,
    pub demon: DemonCircle,
    /// Frames ticked so far
    pub frame: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Spawn the default population inside `bounds`
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        Self::with_settings(bounds, seed, &Settings::default())
    }

    pub fn with_settings(bounds: Vec2, seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let balls = (0..settings.ball_count)
            .map(|_| {
                let mut ball = Ball::spawn(&mut rng, bounds);
                ball.radius = settings.ball_radius;
                ball.speed = settings.ball_speed;
                ball
            })
            .collect();

        let mut demon = DemonCircle::spawn(&mut rng, bounds);
        demon.radius = settings.demon_radius;
        demon.speed = settings.demon_speed;

        Self {
            seed,
            bounds,
            balls,
            demon,
            frame: 0,
            rng,
        }
    }

    /// Hand-placed entities (scenarios, tests)
    pub fn from_parts(bounds: Vec2, seed: u64, balls: Vec<Ball>, demon: DemonCircle) -> Self {
        Self {
            seed,
            bounds,
            balls,
            demon,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Number of balls still alive
    pub fn remaining(&self) -> usize {
        self.balls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::is_hex_color;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), "#112233", Vec2::new(0.5, -0.5))
    }

    #[test]
    fn test_new_state_population() {
        let state = SimState::new(BOUNDS, 42);
        assert_eq!(state.remaining(), BALL_COUNT);
        assert!(!state.demon.is_moving);
        assert_eq!(state.demon.color, "black");
        assert_eq!(state.demon.radius, 20.0);
        for ball in &state.balls {
            assert!(is_hex_color(&ball.color));
            assert_eq!(ball.radius, 10.0);
            assert_eq!(ball.speed, 2.0);
            assert!((-1.0..1.0).contains(&ball.direction.x));
            assert!((-1.0..1.0).contains(&ball.direction.y));
            assert!((0.0..BOUNDS.x).contains(&ball.shape.x()));
            assert!((0.0..BOUNDS.y).contains(&ball.shape.y()));
        }
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = SimState::new(BOUNDS, 1234);
        let b = SimState::new(BOUNDS, 1234);
        assert_eq!(a.balls, b.balls);
        assert_eq!(a.demon, b.demon);
    }

    #[test]
    fn test_settings_override_spawn() {
        let settings = Settings {
            ball_count: 3,
            ball_radius: 4.0,
            demon_speed: 9.0,
            ..Default::default()
        };
        let state = SimState::with_settings(BOUNDS, 5, &settings);
        assert_eq!(state.remaining(), 3);
        assert!(state.balls.iter().all(|b| b.radius == 4.0));
        assert_eq!(state.demon.speed, 9.0);
    }

    #[test]
    fn test_ball_moves_by_direction_times_speed() {
        let mut ball = ball_at(100.0, 100.0);
        ball.update(BOUNDS);
        assert_eq!(ball.shape.pos, Vec2::new(101.0, 99.0));
        assert_eq!(ball.direction, Vec2::new(0.5, -0.5));
    }

    #[test]
    fn test_ball_bounces_off_right_edge() {
        let mut ball = Ball::new(Vec2::new(789.5, 300.0), "#000000", Vec2::new(0.5, 0.0));
        ball.update(BOUNDS);
        // 790.5 + 10 > 800
        assert_eq!(ball.direction.x, -0.5);
        ball.update(BOUNDS);
        assert_eq!(ball.shape.x(), 789.5);
        assert_eq!(ball.direction.x, -0.5);
    }

    #[test]
    fn test_ball_corner_flips_both_axes() {
        let mut ball = Ball::new(Vec2::new(10.5, 10.5), "#000000", Vec2::new(-0.5, -0.5));
        ball.update(BOUNDS);
        assert_eq!(ball.direction, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_zero_direction_ball_stays_put() {
        let mut ball = Ball::new(Vec2::new(50.0, 50.0), "#000000", Vec2::ZERO);
        for _ in 0..100 {
            ball.update(BOUNDS);
        }
        assert_eq!(ball.shape.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_collision_is_asymmetric() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut first = ball_at(100.0, 100.0);
        let second = ball_at(115.0, 100.0);
        let before = second.clone();

        assert!(first.check_collision(&second, &mut rng));
        assert!(is_hex_color(&first.color));
        assert_eq!(second, before);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut first = ball_at(100.0, 100.0);
        let second = ball_at(120.0, 100.0);
        assert!(!first.check_collision(&second, &mut rng));
        assert_eq!(first.color, "#112233");
    }

    #[test]
    fn test_idle_demon_never_moves() {
        let mut demon = DemonCircle::new(Vec2::new(400.0, 300.0));
        let balls = vec![ball_at(10.0, 10.0), ball_at(700.0, 500.0)];
        for _ in 0..50 {
            assert!(!demon.update(&balls));
        }
        assert_eq!(demon.shape.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_demon_chases_nearest() {
        let mut demon = DemonCircle::new(Vec2::new(100.0, 100.0));
        demon.is_moving = true;
        let balls = vec![ball_at(500.0, 100.0), ball_at(100.0, 150.0)];

        assert_eq!(demon.nearest(&balls), Some(1));
        assert!(demon.update(&balls));
        assert!((demon.shape.x() - 100.0).abs() < 1e-4);
        assert!((demon.shape.y() - 105.0).abs() < 1e-4);
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        let demon = DemonCircle::new(Vec2::new(100.0, 100.0));
        let balls = vec![ball_at(130.0, 100.0), ball_at(70.0, 100.0), ball_at(100.0, 130.0)];
        assert_eq!(demon.nearest(&balls), Some(0));
    }

    #[test]
    fn test_demon_with_no_balls_is_noop() {
        let mut demon = DemonCircle::new(Vec2::new(100.0, 100.0));
        demon.is_moving = true;
        assert_eq!(demon.nearest(&[]), None);
        assert!(!demon.update(&[]));
        assert_eq!(demon.shape.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_nudge_latches_and_moves() {
        let mut demon = DemonCircle::new(Vec2::new(100.0, 100.0));
        demon.nudge(Direction::Left);
        assert!(demon.is_moving);
        assert_eq!(demon.shape.pos, Vec2::new(95.0, 100.0));
        demon.nudge(Direction::Down);
        assert_eq!(demon.shape.pos, Vec2::new(95.0, 105.0));
        assert!(demon.is_moving);
    }

    proptest! {
        #[test]
        fn ball_never_escapes_bounds(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            dx in -1.0f32..1.0,
            dy in -1.0f32..1.0,
            frames in 1usize..2000,
        ) {
            let mut ball = Ball::new(Vec2::new(x, y), "#ABCDEF", Vec2::new(dx, dy));
            for _ in 0..frames {
                ball.update(BOUNDS);
                let p = ball.shape.pos;
                prop_assert!(p.x >= -ball.radius && p.x <= BOUNDS.x + ball.radius);
                prop_assert!(p.y >= -ball.radius && p.y <= BOUNDS.y + ball.radius);
            }
        }
    }
}
