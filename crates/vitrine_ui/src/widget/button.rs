//! Push button.

use vitrine_shared::Vec2;

use crate::context::UiContext;
use crate::input::InputSource;
use crate::layout::Rect;
use crate::render::Renderer;

impl UiContext {
    /// Evaluates a push button with a centered label.
    ///
    /// Returns true exactly on the frame the press gesture completes with
    /// the pointer still inside the button.
    #[track_caller]
    pub fn button(
        &mut self,
        input: &impl InputSource,
        renderer: &mut impl Renderer,
        label: &str,
    ) -> bool {
        let id = self.next_id();
        let position = self.layout.next_position();

        let label_size = renderer.measure_text(
            label,
            self.style.font,
            self.style.font_size,
            self.style.letter_spacing,
        );
        let size = Vec2::new(
            label_size.x + self.style.padding * 2.0,
            label_size.y + self.style.padding * 2.0,
        );
        let rect = Rect::from_pos_size(position, size);

        let interaction = self.interact(id, rect, input);

        let background = if self.highlight == id {
            self.style.accent
        } else {
            self.style.background
        };
        renderer.draw_rect(rect.expand(self.style.border_width), self.style.border);
        renderer.draw_rect(rect, background);
        renderer.draw_text(
            label,
            Vec2::new(
                rect.x + (rect.width - label_size.x) * 0.5,
                rect.y + (rect.height - label_size.y) * 0.5,
            ),
            self.style.font,
            self.style.font_size,
            self.style.letter_spacing,
            self.style.text,
        );

        self.layout.expand(size);

        interaction.clicked
    }
}

#[cfg(test)]
mod tests {
    use crate::context::UiContext;
    use crate::input::{InputState, PointerButton};
    use crate::layout::Axis;
    use crate::render::CommandRenderer;
    use vitrine_shared::Vec2;

    fn run_frame(ui: &mut UiContext, input: &InputState, label: &str) -> bool {
        let mut renderer = CommandRenderer::new();
        ui.begin_frame();
        ui.begin_layout(Axis::Vertical, Vec2::new(0.0, 0.0), 0.0);
        let clicked = ui.button(input, &mut renderer, label);
        ui.end_layout();
        ui.end_frame(input);
        clicked
    }

    #[test]
    fn test_click_fires_on_release_inside() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();

        input.set_pointer_position(Vec2::new(5.0, 5.0));
        assert!(!run_frame(&mut ui, &input, "ok"));

        input.begin_frame();
        input.button_down(PointerButton::Left);
        assert!(!run_frame(&mut ui, &input, "ok"));

        input.begin_frame();
        input.button_up(PointerButton::Left);
        assert!(run_frame(&mut ui, &input, "ok"));

        // nothing happens on the quiet frame after
        input.begin_frame();
        assert!(!run_frame(&mut ui, &input, "ok"));
    }

    #[test]
    fn test_drag_off_and_release_does_not_click() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();

        input.set_pointer_position(Vec2::new(5.0, 5.0));
        input.button_down(PointerButton::Left);
        assert!(!run_frame(&mut ui, &input, "ok"));

        input.begin_frame();
        input.set_pointer_position(Vec2::new(400.0, 400.0));
        input.button_up(PointerButton::Left);
        assert!(!run_frame(&mut ui, &input, "ok"));
    }
}
