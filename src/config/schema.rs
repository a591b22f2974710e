use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/pageplayer/config.toml` or `~/.config/pageplayer/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PAGEPLAYER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub transport: TransportSettings,
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Continuous mode for widgets whose page entry does not say otherwise.
    pub continuous: bool,
    /// Whether play starts are reported to the analytics hook.
    pub analytics: bool,
    /// Event name attached to analytics reports.
    pub analytics_event: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            continuous: false,
            analytics: true,
            analytics_event: "embedded_play".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// How often the simulated playhead advances (milliseconds).
    pub tick_ms: u64,
    /// Duration assumed for tracks whose metadata carries none (seconds).
    pub default_duration_secs: f64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            default_duration_secs: 30.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box. The page title wins when present.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ now on the page ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub level: String,
    /// Log file. Without one, logging stays off unless `RUST_LOG` asks for it,
    /// since the terminal belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "pageplayer=info".to_string(),
            file: None,
        }
    }
}
