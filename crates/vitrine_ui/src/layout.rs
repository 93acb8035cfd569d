//! Layout stack for widget positioning.
//!
//! Layouts are a bounded stack of frames. Each frame stacks children along
//! its main axis and accumulates the space they occupy; when a frame closes,
//! its bounding box is folded into the parent as if it were a single widget.
//! Sizes are therefore exact the moment each child closes, with no second
//! measure pass and O(1) amortized placement per widget.

use std::panic::Location;

use vitrine_shared::Vec2;

use crate::error::{fatal, ContractViolation};

/// Default maximum layout nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from position and size.
    #[must_use]
    pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Expands the rectangle by the given amount on all sides.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }
}

/// The direction along which a layout stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Children advance left to right; height is the cross axis.
    #[default]
    Horizontal,
    /// Children advance top to bottom; width is the cross axis.
    Vertical,
}

/// One open layout: an accumulator of widget placement along a main axis.
#[derive(Debug, Clone, Copy)]
pub struct LayoutFrame {
    /// Stacking direction.
    pub axis: Axis,
    /// Top-left corner of the layout.
    pub origin: Vec2,
    /// Space occupied so far: main-axis extent of all children plus padding,
    /// maximum child extent on the cross axis.
    pub size: Vec2,
    /// Gap added after each child on the main axis.
    pub padding: f32,
    /// Where the layout was opened, for unbalanced-frame diagnostics.
    pub opened_at: &'static Location<'static>,
}

impl LayoutFrame {
    /// Returns the candidate top-left corner for the next child: the origin
    /// offset along the main axis by the accumulated extent.
    #[must_use]
    pub fn next_position(&self) -> Vec2 {
        let mut pos = self.origin;
        match self.axis {
            Axis::Horizontal => pos.x += self.size.x,
            Axis::Vertical => pos.y += self.size.y,
        }
        pos
    }

    /// Folds a child's final size into the accumulator.
    fn grow(&mut self, child: Vec2) {
        match self.axis {
            Axis::Horizontal => {
                self.size.x += child.x + self.padding;
                self.size.y = self.size.y.max(child.y);
            }
            Axis::Vertical => {
                self.size.y += child.y + self.padding;
                self.size.x = self.size.x.max(child.x);
            }
        }
    }
}

/// Bounded stack of layout frames; the top is the innermost active layout.
///
/// All operations that require an open layout are fatal on an empty stack,
/// and pushing past the configured depth is fatal as well: both indicate a
/// bug in the host's begin/end sequence.
#[derive(Debug)]
pub struct LayoutStack {
    frames: Vec<LayoutFrame>,
    max_depth: usize,
}

impl LayoutStack {
    /// Creates an empty stack with the given maximum depth.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::with_capacity(max_depth.min(DEFAULT_MAX_DEPTH)),
            max_depth,
        }
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no layout is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The configured depth limit.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The innermost open layout, if any.
    #[must_use]
    pub fn current(&self) -> Option<&LayoutFrame> {
        self.frames.last()
    }

    /// All open frames, outermost first.
    pub(crate) fn open_frames(&self) -> &[LayoutFrame] {
        &self.frames
    }

    /// Opens a layout at an explicit position.
    #[track_caller]
    pub fn begin(&mut self, axis: Axis, origin: Vec2, padding: f32) {
        if self.frames.len() >= self.max_depth {
            fatal(ContractViolation::LayoutOverflow {
                max_depth: self.max_depth,
            });
        }
        self.frames.push(LayoutFrame {
            axis,
            origin,
            size: Vec2::ZERO,
            padding,
            opened_at: Location::caller(),
        });
    }

    /// Opens a layout placed like a widget: its origin is the enclosing
    /// layout's next widget position.
    #[track_caller]
    pub fn begin_nested(&mut self, axis: Axis, padding: f32) {
        let origin = self.top("begin_sublayout").next_position();
        if self.frames.len() >= self.max_depth {
            fatal(ContractViolation::LayoutOverflow {
                max_depth: self.max_depth,
            });
        }
        self.frames.push(LayoutFrame {
            axis,
            origin,
            size: Vec2::ZERO,
            padding,
            opened_at: Location::caller(),
        });
    }

    /// Candidate top-left corner for the next widget in the innermost layout.
    #[track_caller]
    #[must_use]
    pub fn next_position(&self) -> Vec2 {
        self.top("next_widget_position").next_position()
    }

    /// Registers a widget's final size with the innermost layout: main-axis
    /// extent plus padding is appended, cross-axis extent is maxed.
    #[track_caller]
    pub fn expand(&mut self, size: Vec2) {
        self.top_mut("expand").grow(size);
    }

    /// Closes the innermost layout and reports its bounding box to the parent
    /// as if it were a single widget.
    #[track_caller]
    pub fn end(&mut self) {
        let Some(closed) = self.frames.pop() else {
            fatal(ContractViolation::LayoutUnderflow {
                operation: "end_layout",
            });
        };
        if let Some(parent) = self.frames.last_mut() {
            parent.grow(closed.size);
        }
    }

    #[track_caller]
    fn top(&self, operation: &'static str) -> &LayoutFrame {
        match self.frames.last() {
            Some(frame) => frame,
            None => fatal(ContractViolation::LayoutUnderflow { operation }),
        }
    }

    #[track_caller]
    fn top_mut(&mut self, operation: &'static str) -> &mut LayoutFrame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => fatal(ContractViolation::LayoutUnderflow { operation }),
        }
    }
}

impl Default for LayoutStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 80.0)));
        // right/bottom edges are exclusive
        assert!(!rect.contains(Vec2::new(110.0, 30.0)));
    }

    #[test]
    fn test_expand_accumulates_main_axis_and_maxes_cross_axis() {
        let mut stack = LayoutStack::default();
        stack.begin(Axis::Horizontal, Vec2::new(5.0, 7.0), 2.0);

        stack.expand(Vec2::new(30.0, 10.0));
        stack.expand(Vec2::new(40.0, 25.0));
        stack.expand(Vec2::new(10.0, 5.0));

        let frame = stack.current().unwrap();
        // main axis: 30 + 40 + 10 + 3 * padding
        assert_eq!(frame.size, Vec2::new(86.0, 25.0));
    }

    #[test]
    fn test_next_position_advances_along_main_axis_only() {
        let mut stack = LayoutStack::default();
        stack.begin(Axis::Vertical, Vec2::new(10.0, 10.0), 5.0);

        assert_eq!(stack.next_position(), Vec2::new(10.0, 10.0));
        stack.expand(Vec2::new(80.0, 20.0));
        assert_eq!(stack.next_position(), Vec2::new(10.0, 35.0));
    }

    #[test]
    fn test_sublayout_starts_at_next_widget_position() {
        let mut stack = LayoutStack::default();
        stack.begin(Axis::Vertical, Vec2::new(0.0, 0.0), 4.0);
        stack.expand(Vec2::new(50.0, 16.0));

        stack.begin_nested(Axis::Horizontal, 0.0);
        assert_eq!(stack.current().unwrap().origin, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn test_closed_layout_reports_itself_as_one_widget() {
        let mut stack = LayoutStack::default();
        stack.begin(Axis::Vertical, Vec2::ZERO, 3.0);

        stack.begin_nested(Axis::Horizontal, 1.0);
        stack.expand(Vec2::new(20.0, 12.0));
        stack.expand(Vec2::new(20.0, 8.0));
        stack.end();

        // child box was 42x12; the parent adds its own padding after it
        let parent = stack.current().unwrap();
        assert_eq!(parent.size, Vec2::new(42.0, 15.0));
    }

    #[test]
    fn test_depth_is_balanced() {
        let mut stack = LayoutStack::default();
        assert_eq!(stack.depth(), 0);

        stack.begin(Axis::Horizontal, Vec2::ZERO, 0.0);
        stack.begin_nested(Axis::Vertical, 0.0);
        stack.begin_nested(Axis::Horizontal, 0.0);
        assert_eq!(stack.depth(), 3);

        stack.end();
        stack.end();
        stack.end();
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "layout stack overflow")]
    fn test_push_past_capacity_is_fatal() {
        let mut stack = LayoutStack::new(4);
        for _ in 0..4 {
            stack.begin(Axis::Horizontal, Vec2::ZERO, 0.0);
        }
        stack.begin(Axis::Horizontal, Vec2::ZERO, 0.0);
    }

    #[test]
    #[should_panic(expected = "layout stack underflow")]
    fn test_pop_on_empty_stack_is_fatal() {
        let mut stack = LayoutStack::default();
        stack.end();
    }

    #[test]
    #[should_panic(expected = "layout stack underflow")]
    fn test_query_on_empty_stack_is_fatal() {
        let stack = LayoutStack::default();
        let _ = stack.next_position();
    }
}
