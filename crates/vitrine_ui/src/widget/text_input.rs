//! Single-line text input over a caller-owned codepoint buffer.

use vitrine_shared::Vec2;

use crate::context::UiContext;
use crate::input::{InputSource, Key, PointerButton};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::widget::WidgetId;

/// Growable codepoint buffer owned by the host, one per text-input instance.
///
/// Storage grows geometrically: the first allocation reserves
/// [`InputBuffer::BASE_CAPACITY`] codepoints, every later overflow doubles.
/// Capacity is tracked explicitly so growth behavior is observable and does
/// not depend on `Vec`'s internal policy.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    chars: Vec<char>,
    capacity: usize,
    reallocations: u32,
}

impl InputBuffer {
    /// Codepoints reserved by the first allocation.
    pub const BASE_CAPACITY: usize = 16;

    /// Creates an empty buffer with no storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a codepoint, growing the storage if it is full.
    pub fn push(&mut self, c: char) {
        if self.chars.len() == self.capacity {
            let new_capacity = if self.capacity == 0 {
                Self::BASE_CAPACITY
            } else {
                self.reallocations += 1;
                self.capacity * 2
            };
            self.chars.reserve_exact(new_capacity - self.chars.len());
            self.capacity = new_capacity;
        }
        self.chars.push(c);
    }

    /// Removes and returns the trailing codepoint.
    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    /// Number of codepoints in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the buffer holds no codepoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Codepoints the storage can hold before the next growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of times the storage has grown after its first allocation.
    #[must_use]
    pub fn reallocations(&self) -> u32 {
        self.reallocations
    }

    /// Removes all codepoints, keeping the storage.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// The buffered codepoints in order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Collects the buffer into an owned string.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl From<&str> for InputBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = Self::new();
        for c in text.chars() {
            buffer.push(c);
        }
        buffer
    }
}

impl UiContext {
    /// Evaluates a single-line text input of fixed `width`.
    ///
    /// Clicking the field takes keyboard focus; a release outside it gives
    /// focus up. While focused, pending printable characters are appended to
    /// `buffer` and backspace (auto-repeat included) removes the trailing
    /// codepoint. Returns true on any frame the buffer changed.
    ///
    /// The visible window is recomputed from scratch every frame: leading
    /// codepoints are trimmed until the measured remainder fits the field.
    /// Quadratic in the worst case, but there is no cached scroll state to
    /// get stale.
    #[track_caller]
    pub fn text_input(
        &mut self,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
        width: f32,
        buffer: &mut InputBuffer,
    ) -> bool {
        let id = self.next_id();
        let position = self.layout.next_position();

        let size = Vec2::new(width, self.style.font_size + self.style.padding * 2.0);
        let rect = Rect::from_pos_size(position, size);

        let interaction = self.interact(id, rect, input);
        if interaction.clicked {
            self.focus = id;
        } else if self.focus == id
            && !interaction.hovered
            && input.button_released_edge(PointerButton::Left)
        {
            self.focus = WidgetId::NONE;
        }

        let mut changed = false;
        if self.focus == id {
            while let Some(c) = input.next_char_input() {
                if !c.is_control() {
                    buffer.push(c);
                    changed = true;
                }
            }
            if input.key_pressed_edge(Key::Backspace, true) && buffer.pop().is_some() {
                changed = true;
            }
        }

        // trim leading codepoints until the remainder fits the field
        let inner_width = width - self.style.padding * 2.0;
        let chars = buffer.as_slice();
        let mut start = 0;
        let mut visible: String = chars.iter().collect();
        while start < chars.len()
            && renderer
                .measure_text(
                    &visible,
                    self.style.font,
                    self.style.font_size,
                    self.style.letter_spacing,
                )
                .x
                > inner_width
        {
            start += 1;
            visible = chars[start..].iter().collect();
        }

        renderer.draw_rect(rect, self.style.background);
        let outline = if self.focus == id {
            self.style.accent
        } else {
            self.style.border
        };
        renderer.draw_rect_outline(rect, outline);

        let text_pos = Vec2::new(rect.x + self.style.padding, rect.y + self.style.padding);
        renderer.draw_text(
            &visible,
            text_pos,
            self.style.font,
            self.style.font_size,
            self.style.letter_spacing,
            self.style.text,
        );

        if self.focus == id {
            let caret_x = text_pos.x
                + renderer
                    .measure_text(
                        &visible,
                        self.style.font,
                        self.style.font_size,
                        self.style.letter_spacing,
                    )
                    .x;
            renderer.draw_rect(
                Rect::new(caret_x, text_pos.y, 2.0, self.style.font_size),
                self.style.text,
            );
        }

        self.layout.expand(size);

        changed
    }
}
