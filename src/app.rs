//! Frame loop driver
//!
//! Owns the simulation, the pending key presses and the drawing surface.
//! The host calls [`App::key_down`] from its key handler and [`App::frame`]
//! once per display refresh; both must run on the same thread.

use crate::platform::direction_for_key;
use crate::renderer::{Surface, render_counter, render_scene};
use crate::sim::{SimState, TickInput, TickReport, advance, remove_eaten};

pub struct App<S: Surface> {
    pub state: SimState,
    input: TickInput,
    surface: S,
}

impl<S: Surface> App<S> {
    pub fn new(state: SimState, surface: S) -> Self {
        Self {
            state,
            input: TickInput::default(),
            surface,
        }
    }

    /// Queue an arrow key for the next frame. Returns false for other keys.
    pub fn key_down(&mut self, key: &str) -> bool {
        match direction_for_key(key) {
            Some(direction) => {
                self.input.press(direction);
                true
            }
            None => false,
        }
    }

    /// Advance and draw one frame
    ///
    /// Balls the demon catches this frame are drawn one last time before
    /// they are removed; the counter shows the count after removal.
    pub fn frame(&mut self) -> TickReport {
        let collisions = advance(&mut self.state, &self.input);
        self.input.clear();
        render_scene(&self.state, &mut self.surface);

        let eaten = remove_eaten(&mut self.state);
        render_counter(self.state.remaining(), &mut self.surface);

        TickReport { collisions, eaten }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
