//! Player controller: the per-widget playback state machine.
//!
//! A widget is either `Paused` or `Playing`. Controls and media notifications
//! arrive as `WidgetEvent`s; the reducer updates the widget and returns the
//! `Effect`s the host must apply to its media primitives. Page-wide rules live
//! in `crate::coordinator`.

mod controller;
mod display;
mod error;
mod event;
mod model;

pub use controller::wrap_index;
pub use display::{file_name, format_time_marker, progress_percent, title_from_source};
pub use error::WidgetError;
pub use event::{Effect, TrackEnd, WidgetEvent};
pub use model::*;

#[cfg(test)]
mod tests;
