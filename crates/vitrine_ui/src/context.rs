//! The UI context: interaction state machine, identity allocator, frame
//! boundary guard, and the layout stack that widgets place themselves with.
//!
//! One [`UiContext`] is one independent UI instance. Nothing here is global,
//! so a host can run several contexts without cross-talk, as long as each
//! frame is evaluated on a single thread from begin to end.

use tracing::trace;
use vitrine_shared::Vec2;

use crate::error::{fatal, ContractViolation};
use crate::input::{InputSource, PointerButton};
use crate::layout::{Axis, LayoutStack, DEFAULT_MAX_DEPTH};
use crate::style::Style;
use crate::widget::WidgetId;

/// Long-lived state for one UI instance.
///
/// The host owns this for the application lifetime and drives it once per
/// frame: `begin_frame`, a well-nested run of layout begin/end pairs with
/// widget calls in between, then `end_frame`. Violations of that ordering
/// are fatal (see [`ContractViolation`]).
#[derive(Debug)]
pub struct UiContext {
    /// Widget owning the in-progress pointer-press gesture.
    pub(crate) active: WidgetId,
    /// Widget owning persistent keyboard/selection state.
    pub(crate) focus: WidgetId,
    /// Widget under the pointer during this frame's evaluation.
    pub(crate) highlight: WidgetId,
    id_counter: u64,
    frame_open: bool,
    pub(crate) layout: LayoutStack,
    /// Style read by widgets this frame; reset to the base style at
    /// `begin_frame`, overridable afterwards.
    pub style: Style,
    base_style: Style,
}

impl UiContext {
    /// Creates a context with the default layout depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_layout_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a context with an explicit layout depth limit.
    #[must_use]
    pub fn with_max_layout_depth(max_depth: usize) -> Self {
        Self {
            active: WidgetId::NONE,
            focus: WidgetId::NONE,
            highlight: WidgetId::NONE,
            id_counter: 0,
            frame_open: false,
            layout: LayoutStack::new(max_depth),
            style: Style::default(),
            base_style: Style::default(),
        }
    }

    /// Sets the style every frame starts from.
    pub fn set_base_style(&mut self, style: Style) {
        self.base_style = style;
    }

    /// Widget currently owning the pointer gesture.
    #[must_use]
    pub fn active(&self) -> WidgetId {
        self.active
    }

    /// Widget currently owning keyboard focus.
    #[must_use]
    pub fn focus(&self) -> WidgetId {
        self.focus
    }

    /// Widget under the pointer this frame.
    #[must_use]
    pub fn highlight(&self) -> WidgetId {
        self.highlight
    }

    /// Current layout nesting depth.
    #[must_use]
    pub fn layout_depth(&self) -> usize {
        self.layout.depth()
    }

    /// Issues the next widget identity for this frame.
    ///
    /// Ids are allocated in evaluation order starting at 1 and never reused
    /// within a frame. Stability across frames requires the widget call
    /// sequence itself to be stable; the core does not guarantee it.
    pub fn next_id(&mut self) -> WidgetId {
        self.id_counter += 1;
        WidgetId::new(self.id_counter)
    }

    /// Opens a frame: resets highlight, the identity counter, and the style.
    ///
    /// Fatal if a frame is already open.
    #[track_caller]
    pub fn begin_frame(&mut self) {
        if self.frame_open {
            fatal(ContractViolation::FrameAlreadyOpen);
        }
        self.frame_open = true;
        self.highlight = WidgetId::NONE;
        self.id_counter = 0;
        self.style = self.base_style.clone();
        trace!("frame begin");
    }

    /// Closes the frame and settles gesture ownership.
    ///
    /// Ownership clearing is level-based: if the primary button is not held
    /// at all, `active` is forced to none; if it is held but nothing owns the
    /// gesture, the blocked sentinel is installed so a press that started
    /// outside every widget cannot be claimed mid-drag. Level-based (rather
    /// than press-edge-based) clearing is what lets a slider keep its gesture
    /// across frames.
    ///
    /// Fatal if no frame is open or if any layout is still open; in the
    /// latter case every unclosed layout's call site and origin is reported.
    #[track_caller]
    pub fn end_frame(&mut self, input: &impl InputSource) {
        if !self.frame_open {
            fatal(ContractViolation::FrameNotOpen);
        }
        if !self.layout.is_empty() {
            let unclosed = self
                .layout
                .open_frames()
                .iter()
                .map(|frame| {
                    format!(
                        "{} (origin {}, {})",
                        frame.opened_at, frame.origin.x, frame.origin.y
                    )
                })
                .collect::<Vec<_>>()
                .join("; ");
            fatal(ContractViolation::UnbalancedLayouts { unclosed });
        }

        if !input.button_held(PointerButton::Left) {
            self.active = WidgetId::NONE;
        } else if self.active == WidgetId::NONE {
            self.active = WidgetId::BLOCKED;
        }

        self.frame_open = false;
        trace!("frame end");
    }

    /// Opens a layout at an explicit position.
    #[track_caller]
    pub fn begin_layout(&mut self, axis: Axis, origin: Vec2, padding: f32) {
        self.layout.begin(axis, origin, padding);
    }

    /// Opens a layout placed like a widget inside the current one.
    #[track_caller]
    pub fn begin_sublayout(&mut self, axis: Axis, padding: f32) {
        self.layout.begin_nested(axis, padding);
    }

    /// Closes the innermost layout, folding its size into the parent.
    #[track_caller]
    pub fn end_layout(&mut self) {
        self.layout.end();
    }

    /// Candidate top-left corner for the next widget.
    #[track_caller]
    #[must_use]
    pub fn next_widget_position(&self) -> Vec2 {
        self.layout.next_position()
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}
