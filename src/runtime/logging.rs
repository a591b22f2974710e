use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::config::LogSettings;

/// Initialise `env_logger`. `RUST_LOG` wins over the configured level.
///
/// The terminal belongs to the UI, so without a log file the default filter is `off`.
/// A log file that cannot be opened leaves the default stderr target in place.
pub fn init(settings: &LogSettings) {
    let file = settings.file.as_deref().and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("pageplayer: cannot open log file {}: {e}", path.display());
            None
        }
    });

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(settings, file.is_some())),
    );
    if let Some(file) = file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (tests, embedding); keep that one.
    let _ = builder.try_init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(settings: &LogSettings, has_file: bool) -> &str {
    if has_file { settings.level.as_str() } else { "off" }
}
