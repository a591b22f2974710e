use std::path::Path;

use log::warn;

use crate::config;
use crate::coordinator::Coordinator;
use crate::page::{self, Page, PageError};

use super::transport::Transport;

/// Load the page at `target`: a manifest file, or a directory to scan.
pub fn load_page(target: &Path, settings: &config::Settings) -> Result<Page, PageError> {
    if target.is_dir() {
        page::scan(target, &settings.library, &settings.player)
    } else {
        Page::load_manifest(target, &settings.player)
    }
}

/// Deliver the initial metadata notifications, as a page does once its media
/// elements have loaded.
pub fn load_metadata(coordinator: &mut Coordinator, transport: &mut Transport) {
    for (id, event) in transport.load_metadata(coordinator) {
        match coordinator.dispatch(id, event) {
            Ok(fx) => transport.apply(fx),
            Err(e) => warn!("{e}"),
        }
    }
}
