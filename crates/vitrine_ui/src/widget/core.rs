//! Widget identity and the shared interaction step.
//!
//! Every interactive widget runs [`UiContext::interact`] with its id and hit
//! rectangle; the highlight/active transitions live here so each widget only
//! adds its own semantics on top.

use tracing::trace;

use crate::context::UiContext;
use crate::input::{InputSource, PointerButton};
use crate::layout::Rect;

/// Unique identifier for a widget within one frame.
///
/// Allocated in evaluation order; `NONE` means "no widget".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// No widget.
    pub const NONE: Self = Self(0);

    /// Sentinel installed while a press that started outside every widget is
    /// in progress; it occupies gesture ownership so no widget can claim it.
    pub const BLOCKED: Self = Self(u64::MAX);

    /// Creates a widget ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns true if this is the "no widget" id.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Outcome of one widget's interaction step.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetInteraction {
    /// The pointer is inside the widget's rectangle this frame.
    pub hovered: bool,
    /// The gesture completed on this widget: pressed inside earlier, released
    /// inside now.
    pub clicked: bool,
    /// The widget owns the gesture after this step.
    pub held: bool,
}

impl UiContext {
    /// Runs the interaction state machine for one widget.
    ///
    /// In order: the widget becomes the highlight if the pointer is inside
    /// its rectangle (later widgets win on overlap, there is no z-order);
    /// it acquires gesture ownership if nothing owns it and the press edge
    /// lands inside (the earliest-evaluated widget wins); on the release
    /// edge while it owns the gesture, it reports a click only if the
    /// pointer is still inside, and ownership is cleared either way.
    ///
    /// Custom widgets can call this directly to get button-like behavior and
    /// layer their own semantics on the returned [`WidgetInteraction`].
    pub fn interact(
        &mut self,
        id: WidgetId,
        rect: Rect,
        input: &impl InputSource,
    ) -> WidgetInteraction {
        let hovered = rect.contains(input.pointer_position());

        if hovered {
            self.highlight = id;
        }

        if hovered && self.active.is_none() && input.button_pressed_edge(PointerButton::Left) {
            self.active = id;
            trace!(id = id.raw(), "gesture acquired");
        }

        let mut clicked = false;
        if self.active == id && input.button_released_edge(PointerButton::Left) {
            clicked = hovered;
            self.active = WidgetId::NONE;
            trace!(id = id.raw(), clicked, "gesture released");
        }

        WidgetInteraction {
            hovered,
            clicked,
            held: self.active == id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use vitrine_shared::Vec2;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 20.0);

    #[test]
    fn test_press_then_release_inside_clicks_once() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();
        let id = WidgetId::new(1);

        input.set_pointer_position(Vec2::new(10.0, 10.0));
        input.button_down(PointerButton::Left);
        let press = ui.interact(id, RECT, &input);
        assert!(!press.clicked);
        assert!(press.held);

        input.begin_frame();
        input.button_up(PointerButton::Left);
        let release = ui.interact(id, RECT, &input);
        assert!(release.clicked);
        assert!(!release.held);
        assert_eq!(ui.active(), WidgetId::NONE);
    }

    #[test]
    fn test_release_outside_clears_ownership_without_click() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();
        let id = WidgetId::new(1);

        input.set_pointer_position(Vec2::new(10.0, 10.0));
        input.button_down(PointerButton::Left);
        ui.interact(id, RECT, &input);

        input.begin_frame();
        input.set_pointer_position(Vec2::new(500.0, 500.0));
        input.button_up(PointerButton::Left);
        let release = ui.interact(id, RECT, &input);

        assert!(!release.clicked);
        assert_eq!(ui.active(), WidgetId::NONE);
    }

    #[test]
    fn test_first_evaluated_widget_wins_ownership() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();

        input.set_pointer_position(Vec2::new(10.0, 10.0));
        input.button_down(PointerButton::Left);

        // two widgets with the same rectangle, evaluated in order
        let first = ui.interact(WidgetId::new(1), RECT, &input);
        let second = ui.interact(WidgetId::new(2), RECT, &input);

        assert!(first.held);
        assert!(!second.held);
        assert_eq!(ui.active(), WidgetId::new(1));
        // highlight has no depth ordering: the later widget took it
        assert_eq!(ui.highlight(), WidgetId::new(2));
    }

    #[test]
    fn test_blocked_sentinel_prevents_acquisition() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();

        // press started outside every widget on an earlier frame
        input.button_down(PointerButton::Left);
        ui.begin_frame();
        ui.end_frame(&input);
        assert_eq!(ui.active(), WidgetId::BLOCKED);

        input.begin_frame();
        input.set_pointer_position(Vec2::new(10.0, 10.0));
        let step = ui.interact(WidgetId::new(1), RECT, &input);
        assert!(!step.held);
        assert_eq!(ui.active(), WidgetId::BLOCKED);
    }
}
