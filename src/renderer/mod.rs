//! 2D rendering
//!
//! The simulation is drawn through the small [`Surface`] trait: clear a
//! rectangle, fill a circle, fill some text. The browser build backs it with
//! a canvas 2D context; tests and the native runner record into a [`DrawList`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Entity, SimState};

/// Minimal immediate-mode drawing target
pub trait Surface {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// Counter text shown in the top-left corner
pub fn counter_text(remaining: usize) -> String {
    format!("Balls left: {remaining}")
}

pub fn draw_entity<S: Surface + ?Sized>(surface: &mut S, entity: &impl Entity) {
    surface.fill_circle(entity.pos(), entity.radius(), entity.color());
}

/// Draw one full frame: clear, balls, demon, counter
pub fn render<S: Surface + ?Sized>(state: &SimState, surface: &mut S) {
    render_scene(state, surface);
    render_counter(state.remaining(), surface);
}

/// Clear the surface and draw every ball in list order, then the demon
pub fn render_scene<S: Surface + ?Sized>(state: &SimState, surface: &mut S) {
    surface.clear_rect(Vec2::ZERO, state.bounds);

    for ball in &state.balls {
        draw_entity(surface, ball);
    }
    draw_entity(surface, &state.demon);
}

pub fn render_counter<S: Surface + ?Sized>(remaining: usize, surface: &mut S) {
    surface.fill_text(
        &counter_text(remaining),
        Vec2::new(COUNTER_X, COUNTER_Y),
        COUNTER_FONT,
        COUNTER_COLOR,
    );
}
