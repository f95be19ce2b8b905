//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order of the ball list)
//! - No rendering or platform dependencies

pub mod color;
pub mod shape;
pub mod state;
pub mod tick;

pub use color::{is_hex_color, random_color};
pub use shape::Shape;
pub use state::{Ball, DemonCircle, Entity, SimState};
pub use tick::{Direction, TickInput, TickReport, advance, remove_eaten, tick};
