//! # Vitrine UI Core
//!
//! Immediate-mode UI: the host re-declares its whole widget tree every frame
//! by calling stateless-looking widget functions; the core infers layout,
//! tracks interaction state, and reports input results. No widget objects
//! survive between frames.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      ONE HOST FRAME                       │
//! ├───────────────────────────────────────────────────────────┤
//! │ begin_frame → layout begin/end + widget calls → end_frame │
//! │      ↓               ↓                ↓            ↓      │
//! │  reset ids      placement via    hit-test +     settle    │
//! │  + highlight    layout stack     state machine  gesture   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering ([`Renderer`]) and input ([`InputSource`]) are collaborators
//! the host supplies; the core never owns a window or an event loop.
//!
//! ## Contract
//!
//! Calls must be strictly ordered: one `begin_frame`, a well-nested sequence
//! of layout begin/end pairs with widget calls between matching pairs, one
//! `end_frame`. Breaking that ordering is a bug in the host and is fatal
//! (see [`ContractViolation`]), not a runtime condition to recover from.
//!
//! ## Example
//!
//! ```
//! use vitrine_ui::{Axis, CommandRenderer, InputState, UiContext, Vec2};
//!
//! let mut ui = UiContext::new();
//! let mut renderer = CommandRenderer::new();
//! let mut input = InputState::new();
//!
//! // per frame:
//! input.begin_frame();
//! renderer.begin_frame();
//! ui.begin_frame();
//! ui.begin_layout(Axis::Vertical, Vec2::new(10.0, 10.0), 5.0);
//! ui.text(&mut renderer, "Hello, World!");
//! if ui.button(&input, &mut renderer, "Click me!") {
//!     // fired on the frame the click completes
//! }
//! ui.end_layout();
//! ui.end_frame(&input);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use context::UiContext;
pub use error::{ContractViolation, StyleConfigError};
pub use input::{InputSource, InputState, Key, PointerButton};
pub use layout::{Axis, LayoutFrame, LayoutStack, Rect, DEFAULT_MAX_DEPTH};
pub use render::{CommandRenderer, RenderCommand, Renderer};
pub use style::{Color, FontId, Style};
pub use vitrine_shared::Vec2;
pub use widget::{InputBuffer, WidgetId, WidgetInteraction};
