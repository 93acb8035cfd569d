//! Renderer collaborator contract and a recording implementation.
//!
//! Widgets draw through the [`Renderer`] trait and size themselves with its
//! text-measurement contract. [`CommandRenderer`] records everything as
//! [`RenderCommand`] values so a backend can batch and submit them however it
//! likes; it also serves as the test double for widget evaluation.

use vitrine_shared::Vec2;

use crate::layout::Rect;
use crate::style::{Color, FontId};

/// Drawing and measurement contract supplied by the host.
pub trait Renderer {
    /// Returns the rendered size of `text` with the given font parameters.
    fn measure_text(&self, text: &str, font: FontId, size: f32, spacing: f32) -> Vec2;

    /// Fills a rectangle.
    fn draw_rect(&mut self, bounds: Rect, color: Color);

    /// Strokes a rectangle outline.
    fn draw_rect_outline(&mut self, bounds: Rect, color: Color);

    /// Draws text with its top-left corner at `position`.
    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        font: FontId,
        size: f32,
        spacing: f32,
        color: Color,
    );

    /// Fills a circle.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
    },
    /// Text run.
    Text {
        /// Text content.
        text: String,
        /// Top-left corner.
        position: Vec2,
        /// Font reference.
        font: FontId,
        /// Font size.
        size: f32,
        /// Letter spacing.
        spacing: f32,
        /// Text color.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Center point.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
}

/// Renderer that records commands for later submission.
///
/// Text metrics use a fixed per-codepoint advance (monospace model): width is
/// `codepoints * (size * 0.5 + spacing)`, height is `size`. Backends with
/// real font metrics implement [`Renderer`] themselves.
#[derive(Debug, Default)]
pub struct CommandRenderer {
    commands: Vec<RenderCommand>,
}

impl CommandRenderer {
    /// Glyph width as a fraction of the font size.
    const GLYPH_ASPECT: f32 = 0.5;

    /// Creates a new empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Begins a new frame, dropping last frame's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// The commands recorded so far this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Takes ownership of the recorded commands, leaving the renderer empty.
    #[must_use]
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of commands recorded so far.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Renderer for CommandRenderer {
    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &str, _font: FontId, size: f32, spacing: f32) -> Vec2 {
        let count = text.chars().count() as f32;
        Vec2::new(count * (size * Self::GLYPH_ASPECT + spacing), size)
    }

    fn draw_rect(&mut self, bounds: Rect, color: Color) {
        self.commands.push(RenderCommand::Rect { bounds, color });
    }

    fn draw_rect_outline(&mut self, bounds: Rect, color: Color) {
        self.commands.push(RenderCommand::RectOutline { bounds, color });
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        font: FontId,
        size: f32,
        spacing: f32,
        color: Color,
    ) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            position,
            font,
            size,
            spacing,
            color,
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(RenderCommand::Circle { center, radius, color });
    }
}
