//! Horizontal slider over the range [0, 1].

use vitrine_shared::Vec2;

use crate::context::UiContext;
use crate::input::InputSource;
use crate::layout::Rect;
use crate::render::Renderer;

impl UiContext {
    /// Evaluates a horizontal slider of the given track width.
    ///
    /// While the slider owns the pointer gesture, the value is recomputed
    /// every frame from the ball position plus the frame's pointer delta,
    /// clamped to [0, 1], and `true` is returned on each of those frames
    /// (not only on release).
    #[track_caller]
    pub fn slider(
        &mut self,
        input: &impl InputSource,
        renderer: &mut impl Renderer,
        width: f32,
        value: &mut f32,
    ) -> bool {
        let id = self.next_id();
        let position = self.layout.next_position();

        let radius = self.style.font_size * 0.5;
        let size = Vec2::new(width, radius * 2.0);
        let rect = Rect::from_pos_size(position, size);

        self.interact(id, rect, input);

        let mut changed = false;
        if self.active == id {
            let ball_x = rect.x + *value * width;
            *value = ((ball_x - rect.x + input.pointer_delta().x) / width).clamp(0.0, 1.0);
            changed = true;
        }

        let track = Rect::new(
            rect.x,
            rect.y + radius - self.style.border_width,
            width,
            self.style.border_width * 2.0,
        );
        renderer.draw_rect(track, self.style.border);

        let ball_color = if self.active == id || self.highlight == id {
            self.style.accent
        } else {
            self.style.text
        };
        renderer.draw_circle(
            Vec2::new(rect.x + *value * width, rect.y + radius),
            radius,
            ball_color,
        );

        self.layout.expand(size);

        changed
    }
}
