//! Dropdown selector: an anchor that toggles focus plus an item overlay.

use vitrine_shared::Vec2;

use crate::context::UiContext;
use crate::input::{InputSource, PointerButton};
use crate::layout::Rect;
use crate::render::Renderer;
use crate::widget::WidgetId;

/// Placeholder shown while no item is selected.
const PLACEHOLDER: &str = "Select...";

impl UiContext {
    /// Evaluates a dropdown over `labels`, with `selection` as the bound
    /// index (negative means "nothing selected yet").
    ///
    /// Clicking the anchor toggles focus; while focused, the items are
    /// evaluated as sibling rectangles stacked below the anchor, each with
    /// its own id and independent hit-testing. Clicking an item writes its
    /// index, returns `true` exactly once, and closes the list. A release
    /// outside the union of anchor and items closes the list without
    /// changing the selection. Only the anchor occupies layout space; the
    /// open list is an overlay drawn in call order.
    #[track_caller]
    pub fn dropdown(
        &mut self,
        input: &impl InputSource,
        renderer: &mut impl Renderer,
        labels: &[&str],
        selection: &mut i32,
    ) -> bool {
        let id = self.next_id();
        let position = self.layout.next_position();

        // size the anchor to the widest entry so it does not jitter as the
        // selection changes
        let mut content = renderer.measure_text(
            PLACEHOLDER,
            self.style.font,
            self.style.font_size,
            self.style.letter_spacing,
        );
        for label in labels {
            content = content.max(renderer.measure_text(
                label,
                self.style.font,
                self.style.font_size,
                self.style.letter_spacing,
            ));
        }
        let item_size = Vec2::new(
            content.x + self.style.padding * 2.0,
            content.y + self.style.padding * 2.0,
        );
        let anchor = Rect::from_pos_size(position, item_size);

        let interaction = self.interact(id, anchor, input);
        if interaction.clicked {
            self.focus = if self.focus == id { WidgetId::NONE } else { id };
        }

        let current = usize::try_from(*selection)
            .ok()
            .and_then(|index| labels.get(index).copied())
            .unwrap_or(PLACEHOLDER);
        let anchor_bg = if self.highlight == id {
            self.style.accent
        } else {
            self.style.background
        };
        renderer.draw_rect(anchor.expand(self.style.border_width), self.style.border);
        renderer.draw_rect(anchor, anchor_bg);
        renderer.draw_text(
            current,
            Vec2::new(anchor.x + self.style.padding, anchor.y + self.style.padding),
            self.style.font,
            self.style.font_size,
            self.style.letter_spacing,
            self.style.text,
        );

        let mut changed = false;
        if self.focus == id {
            let pointer_in_union = {
                let mut inside = anchor.contains(input.pointer_position());
                let mut item_top = anchor.bottom();

                for (index, label) in labels.iter().enumerate() {
                    let item_id = self.next_id();
                    let item_rect =
                        Rect::from_pos_size(Vec2::new(anchor.x, item_top), item_size);
                    inside |= item_rect.contains(input.pointer_position());

                    let item = self.interact(item_id, item_rect, input);
                    if item.clicked {
                        *selection = i32::try_from(index).unwrap_or(i32::MAX);
                        changed = true;
                        self.focus = WidgetId::NONE;
                    }

                    let item_bg = if self.highlight == item_id {
                        self.style.accent
                    } else {
                        self.style.background
                    };
                    renderer.draw_rect(item_rect, item_bg);
                    renderer.draw_rect_outline(item_rect, self.style.border);
                    renderer.draw_text(
                        label,
                        Vec2::new(
                            item_rect.x + self.style.padding,
                            item_rect.y + self.style.padding,
                        ),
                        self.style.font,
                        self.style.font_size,
                        self.style.letter_spacing,
                        self.style.text,
                    );

                    item_top += item_size.y;
                }
                inside
            };

            if self.focus == id
                && input.button_released_edge(PointerButton::Left)
                && !pointer_in_union
            {
                self.focus = WidgetId::NONE;
            }
        }

        self.layout.expand(item_size);

        changed
    }
}

#[cfg(test)]
mod tests {
    use crate::context::UiContext;
    use crate::input::{InputState, PointerButton};
    use crate::layout::Axis;
    use crate::render::CommandRenderer;
    use crate::widget::WidgetId;
    use vitrine_shared::Vec2;

    const LABELS: [&str; 3] = ["One", "Two", "Three"];

    fn run_frame(ui: &mut UiContext, input: &InputState, selection: &mut i32) -> bool {
        let mut renderer = CommandRenderer::new();
        ui.begin_frame();
        ui.begin_layout(Axis::Vertical, Vec2::new(0.0, 0.0), 0.0);
        let changed = ui.dropdown(input, &mut renderer, &LABELS, selection);
        ui.end_layout();
        ui.end_frame(input);
        changed
    }

    fn click(input: &mut InputState, ui: &mut UiContext, at: Vec2, selection: &mut i32) -> bool {
        input.begin_frame();
        input.set_pointer_position(at);
        input.button_down(PointerButton::Left);
        let mut changed = run_frame(ui, input, selection);
        input.begin_frame();
        input.button_up(PointerButton::Left);
        changed |= run_frame(ui, input, selection);
        changed
    }

    // anchor is sized by "Select..." (9 codepoints) at the default style:
    // 9 * (20 * 0.5 + 1) + 12 = 111 wide, 32 tall; items stack below.
    const ANCHOR_MID: Vec2 = Vec2::new(10.0, 16.0);
    const ITEM2_MID: Vec2 = Vec2::new(10.0, 32.0 + 32.0 * 2.0 + 16.0);

    #[test]
    fn test_open_then_select_third_item() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();
        let mut selection = -1;

        assert!(!click(&mut input, &mut ui, ANCHOR_MID, &mut selection));
        assert_eq!(selection, -1);

        assert!(click(&mut input, &mut ui, ITEM2_MID, &mut selection));
        assert_eq!(selection, 2);
        assert_eq!(ui.focus(), WidgetId::NONE);

        // a quiet frame afterwards changes nothing
        input.begin_frame();
        assert!(!run_frame(&mut ui, &input, &mut selection));
        assert_eq!(selection, 2);
    }

    #[test]
    fn test_release_outside_closes_without_selecting() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();
        let mut selection = -1;

        click(&mut input, &mut ui, ANCHOR_MID, &mut selection);
        assert_eq!(ui.focus(), WidgetId::new(1));

        assert!(!click(
            &mut input,
            &mut ui,
            Vec2::new(500.0, 500.0),
            &mut selection
        ));
        assert_eq!(ui.focus(), WidgetId::NONE);
        assert_eq!(selection, -1);
    }

    #[test]
    fn test_anchor_click_toggles_closed() {
        let mut ui = UiContext::new();
        let mut input = InputState::new();
        let mut selection = -1;

        click(&mut input, &mut ui, ANCHOR_MID, &mut selection);
        assert_eq!(ui.focus(), WidgetId::new(1));

        click(&mut input, &mut ui, ANCHOR_MID, &mut selection);
        assert_eq!(ui.focus(), WidgetId::NONE);
        assert_eq!(selection, -1);
    }
}
