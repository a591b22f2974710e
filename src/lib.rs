//! Playback model for audio player widgets embedded in a page.
//!
//! `player` holds the per-widget state machine, `coordinator` the page-wide
//! rules (one widget playing at a time, handing playback on when a widget
//! finishes). `page` discovers widgets; `runtime` and `ui` host a page in the
//! terminal.

pub mod config;
pub mod coordinator;
pub mod page;
pub mod player;
pub mod runtime;
pub mod ui;
