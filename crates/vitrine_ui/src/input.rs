//! Input collaborator contract and a poll-style implementation.
//!
//! The core only ever *reads* input, through [`InputSource`]. [`InputState`]
//! is the supplied implementation: the host feeds it window events, calls
//! [`InputState::begin_frame`] once per frame, and the edge queries fall out
//! of the before/after bookkeeping.

use std::collections::VecDeque;

use vitrine_shared::Vec2;

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button; the one that drives widget gestures.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
}

/// Keyboard key relevant to widget evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Tab key.
    Tab,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// What the core needs to know about user input, polled during evaluation.
///
/// Edge queries answer "did this happen this frame"; level queries answer
/// "is this true right now". `next_char_input` drains the frame's printable
/// character queue one codepoint at a time.
pub trait InputSource {
    /// Current pointer position in screen coordinates.
    fn pointer_position(&self) -> Vec2;

    /// Pointer movement since the previous frame.
    fn pointer_delta(&self) -> Vec2;

    /// True if the button transitioned to pressed this frame.
    fn button_pressed_edge(&self, button: PointerButton) -> bool;

    /// True if the button transitioned to released this frame.
    fn button_released_edge(&self, button: PointerButton) -> bool;

    /// True if the button is currently held.
    fn button_held(&self, button: PointerButton) -> bool;

    /// True if the key was pressed this frame; with `repeat`, auto-repeat
    /// events count as presses too.
    fn key_pressed_edge(&self, key: Key, repeat: bool) -> bool;

    /// Takes the next pending printable codepoint, if any.
    fn next_char_input(&mut self) -> Option<char>;
}

/// Event-fed input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Vec2,
    prev_pointer: Vec2,
    /// Buttons pressed this frame (bit per button).
    buttons_pressed: u8,
    /// Buttons released this frame.
    buttons_released: u8,
    /// Buttons currently held.
    buttons_down: u8,
    keys_pressed: Vec<Key>,
    keys_repeated: Vec<Key>,
    keys_down: Vec<Key>,
    chars: VecDeque<char>,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame state.
    ///
    /// Held buttons and keys persist; edges and pending characters do not.
    pub fn begin_frame(&mut self) {
        self.prev_pointer = self.pointer;
        self.buttons_pressed = 0;
        self.buttons_released = 0;
        self.keys_pressed.clear();
        self.keys_repeated.clear();
        self.chars.clear();
    }

    /// Updates the pointer position.
    pub fn set_pointer_position(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Records a pointer button press.
    pub fn button_down(&mut self, button: PointerButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a pointer button release.
    pub fn button_up(&mut self, button: PointerButton) {
        let mask = Self::button_mask(button);
        self.buttons_released |= mask;
        self.buttons_down &= !mask;
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_pressed.push(key);
            self.keys_down.push(key);
        }
    }

    /// Records an auto-repeat event for a held key.
    pub fn key_repeat(&mut self, key: Key) {
        self.keys_repeated.push(key);
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        self.keys_down.retain(|&k| k != key);
    }

    /// Queues a printable character for this frame.
    pub fn push_char(&mut self, c: char) {
        self.chars.push_back(c);
    }

    const fn button_mask(button: PointerButton) -> u8 {
        match button {
            PointerButton::Left => 1,
            PointerButton::Right => 2,
            PointerButton::Middle => 4,
        }
    }
}

impl InputSource for InputState {
    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn pointer_delta(&self) -> Vec2 {
        self.pointer - self.prev_pointer
    }

    fn button_pressed_edge(&self, button: PointerButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    fn button_released_edge(&self, button: PointerButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    fn button_held(&self, button: PointerButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    fn key_pressed_edge(&self, key: Key, repeat: bool) -> bool {
        self.keys_pressed.contains(&key) || (repeat && self.keys_repeated.contains(&key))
    }

    fn next_char_input(&mut self) -> Option<char> {
        self.chars.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges() {
        let mut input = InputState::new();

        input.button_down(PointerButton::Left);
        assert!(input.button_pressed_edge(PointerButton::Left));
        assert!(input.button_held(PointerButton::Left));

        input.begin_frame();
        assert!(!input.button_pressed_edge(PointerButton::Left));
        assert!(input.button_held(PointerButton::Left));

        input.button_up(PointerButton::Left);
        assert!(input.button_released_edge(PointerButton::Left));
        assert!(!input.button_held(PointerButton::Left));
    }

    #[test]
    fn test_pointer_delta_spans_one_frame() {
        let mut input = InputState::new();
        input.set_pointer_position(Vec2::new(10.0, 10.0));
        input.begin_frame();
        input.set_pointer_position(Vec2::new(15.0, 8.0));

        assert_eq!(input.pointer_delta(), Vec2::new(5.0, -2.0));
    }

    #[test]
    fn test_key_repeat_counts_only_when_asked() {
        let mut input = InputState::new();
        input.key_down(Key::Backspace);

        input.begin_frame();
        input.key_repeat(Key::Backspace);

        assert!(!input.key_pressed_edge(Key::Backspace, false));
        assert!(input.key_pressed_edge(Key::Backspace, true));
    }

    #[test]
    fn test_char_queue_drains_in_order() {
        let mut input = InputState::new();
        input.push_char('h');
        input.push_char('i');

        assert_eq!(input.next_char_input(), Some('h'));
        assert_eq!(input.next_char_input(), Some('i'));
        assert_eq!(input.next_char_input(), None);
    }
}
