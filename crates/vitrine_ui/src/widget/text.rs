//! Plain text label.

use crate::context::UiContext;
use crate::render::Renderer;

impl UiContext {
    /// Draws a pre-formatted text label at the next layout position.
    ///
    /// Non-interactive: allocates no id and never touches highlight, active,
    /// or focus. The label's measured size is reported to the enclosing
    /// layout like any widget's.
    #[track_caller]
    pub fn text(&mut self, renderer: &mut impl Renderer, text: &str) {
        let position = self.layout.next_position();
        let size = renderer.measure_text(
            text,
            self.style.font,
            self.style.font_size,
            self.style.letter_spacing,
        );

        renderer.draw_text(
            text,
            position,
            self.style.font,
            self.style.font_size,
            self.style.letter_spacing,
            self.style.text,
        );

        self.layout.expand(size);
    }
}
