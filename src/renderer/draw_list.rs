//! Recording surface for tests and headless runs

use glam::Vec2;

use super::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        origin: Vec2,
        size: Vec2,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        color: String,
    },
}

/// Holds the commands of the most recent frame
///
/// A full-surface clear starts a new frame, so earlier commands are dropped.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, &str)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, color.as_str())),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.clear();
        self.commands.push(DrawCommand::ClearRect { origin, size });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::ONE, 3.0, "red");
        list.fill_text("hi", Vec2::ZERO, "10px Arial", "black");
        assert_eq!(list.commands().len(), 2);

        list.clear_rect(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert_eq!(list.commands().len(), 1);
        assert_eq!(list.circles().count(), 0);
        assert_eq!(list.texts().count(), 0);
    }
}
