//! Per-frame simulation tick
//!
//! One call advances the world exactly one display frame. Rendering is not
//! done here; `App::frame` draws between `advance` and `remove_eaten`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Entity, SimState};

/// Arrow-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Unit step in canvas coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// Key presses received since the previous frame, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub nudges: Vec<Direction>,
}

impl TickInput {
    pub fn press(&mut self, direction: Direction) {
        self.nudges.push(direction);
    }

    /// Drop consumed presses after a tick
    pub fn clear(&mut self) {
        self.nudges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nudges.is_empty()
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Overlapping (i, j) pairs found this frame
    pub collisions: usize,
    /// Balls removed by the demon this frame
    pub eaten: usize,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput) -> TickReport {
    let collisions = advance(state, input);
    let eaten = remove_eaten(state);
    TickReport { collisions, eaten }
}

/// Everything up to and including the demon's move; eaten balls are still
/// in the list afterwards so the frame can draw them once more.
///
/// Returns the number of colliding pairs.
pub fn advance(state: &mut SimState, input: &TickInput) -> usize {
    // Key handlers run between frames, so their nudges land first
    for &direction in &input.nudges {
        state.demon.nudge(direction);
    }

    let collisions = recolor_colliding(&mut state.balls, &mut state.rng);

    for ball in &mut state.balls {
        ball.update(state.bounds);
    }

    state.demon.update(&state.balls);
    state.frame += 1;

    collisions
}

/// Drop every ball overlapping the demon, keeping survivor order
pub fn remove_eaten(state: &mut SimState) -> usize {
    let before = state.balls.len();
    let demon = &state.demon;
    state.balls.retain(|ball| !ball.touches(demon));
    let eaten = before - state.balls.len();

    if eaten > 0 {
        log::info!(
            "Frame {}: demon ate {} ball(s), {} left",
            state.frame,
            eaten,
            state.balls.len()
        );
        if state.balls.is_empty() {
            log::info!("All balls eaten after {} frames", state.frame);
        }
    }

    eaten
}

/// For every pair i < j, let `balls[i]` react to `balls[j]`
fn recolor_colliding<R: Rng + ?Sized>(balls: &mut [Ball], rng: &mut R) -> usize {
    let mut hits = 0;
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let ball = &mut head[i];
        for other in tail.iter() {
            if ball.check_collision(other, rng) {
                hits += 1;
            }
        }
    }
    hits
}
