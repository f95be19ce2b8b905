//! Platform input handling
//!
//! Maps browser key names onto demon nudges, plus a keyboard "autopilot"
//! that presses the arrow a player would press to reach the nearest ball.

use crate::sim::{Direction, Entity, SimState};

/// `KeyboardEvent.key` value for an arrow key, or None for anything else
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowUp" => Some(Direction::Up),
        "ArrowRight" => Some(Direction::Right),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

pub fn key_for_direction(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "ArrowLeft",
        Direction::Up => "ArrowUp",
        Direction::Right => "ArrowRight",
        Direction::Down => "ArrowDown",
    }
}

/// Arrow key steering the demon along the dominant axis toward the nearest ball
pub fn autopilot_key(state: &SimState) -> Option<&'static str> {
    let target = state.demon.nearest(&state.balls)?;
    let delta = state.balls[target].pos() - state.demon.pos();

    let direction = if delta.x.abs() >= delta.y.abs() {
        if delta.x < 0.0 { Direction::Left } else { Direction::Right }
    } else if delta.y < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    Some(key_for_direction(direction))
}
