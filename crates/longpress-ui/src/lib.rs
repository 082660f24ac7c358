//! The long-press button control.
//!
//! [`LongPressButton`] wires a [`PressDetector`](longpress_foundation::PressDetector)
//! to a [`ProgressAnimator`](longpress_animation::ProgressAnimator) and resolves
//! the title, colors and scale a renderer should draw for the current phase.

mod button;
mod config;
mod control_event;
mod state_table;

pub use button::{ButtonRenderState, LongPressButton};
pub use config::LongPressButtonConfig;
pub use control_event::ControlEvent;
pub use state_table::{ControlState, StateTable};

pub use longpress_ui_graphics::{Color, FontWeight, TextAttributes};
