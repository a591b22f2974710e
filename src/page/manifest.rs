use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::config::PlayerSettings;
use crate::player::{Track, Widget};

use super::{Page, PageError};

/// Page manifest file format.
///
/// ```toml
/// title = "Side A"
///
/// [[widget]]
/// name = "Opening"
/// continuous = true
/// tracks = ["https://example.com/01.mp3", { source = "02.mp3", duration = 184.0 }]
/// ```
#[derive(Debug, Deserialize)]
struct Manifest {
    title: Option<String>,
    #[serde(default, rename = "widget")]
    widgets: Vec<WidgetEntry>,
}

#[derive(Debug, Deserialize)]
struct WidgetEntry {
    name: Option<String>,
    continuous: Option<bool>,
    #[serde(default)]
    tracks: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrackEntry {
    Source(String),
    Detailed {
        source: String,
        duration: Option<f64>,
    },
}

impl From<TrackEntry> for Track {
    fn from(entry: TrackEntry) -> Self {
        match entry {
            TrackEntry::Source(source) => Track::new(source),
            TrackEntry::Detailed {
                source,
                duration: Some(d),
            } => Track::new(source).with_duration(d),
            TrackEntry::Detailed {
                source,
                duration: None,
            } => Track::new(source),
        }
    }
}

impl Page {
    /// Parse a page manifest. Widgets without `continuous` take the default from `player`.
    pub fn from_manifest_str(text: &str, player: &PlayerSettings) -> Result<Self, PageError> {
        let manifest: Manifest = toml::from_str(text)?;

        let widgets = manifest
            .widgets
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let name = entry.name.unwrap_or_else(|| format!("Player {}", i + 1));
                let tracks = entry.tracks.into_iter().map(Track::from).collect();
                Widget::new(name, tracks, entry.continuous.unwrap_or(player.continuous))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if widgets.is_empty() {
            return Err(PageError::Empty);
        }

        Ok(Self {
            title: manifest.title,
            widgets,
        })
    }

    /// Read and parse the manifest at `path`.
    pub fn load_manifest(path: &Path, player: &PlayerSettings) -> Result<Self, PageError> {
        let text = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let page = Self::from_manifest_str(&text, player)?;
        info!(
            "loaded {} widget(s) from {}",
            page.widgets.len(),
            path.display()
        );
        Ok(page)
    }
}
