//! Page loading: discovers the player widgets once, at load time.
//!
//! A page comes either from a TOML manifest listing its widgets or from a
//! directory tree, where every directory holding audio files becomes a widget.

mod manifest;
mod scan;

use std::path::PathBuf;

use crate::player::{Widget, WidgetError};

pub use scan::scan;

/// The widgets found on a page, in page order.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: Option<String>,
    pub widgets: Vec<Widget>,
}

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("no player widgets found on the page")]
    Empty,
}
