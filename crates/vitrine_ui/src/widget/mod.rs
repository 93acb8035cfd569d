//! Widgets: stateless-looking functions the host calls every frame.
//!
//! Each interactive widget follows the same evaluation pattern (see
//! [`self::core`]): allocate an id, fetch placement, measure, hit-test, run the
//! interaction state machine, draw, report its footprint, return a result.

pub mod core;

mod button;
mod dropdown;
mod slider;
mod text;
mod text_input;

pub use self::core::{WidgetId, WidgetInteraction};
pub use text_input::InputBuffer;
