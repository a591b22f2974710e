use std::collections::BTreeMap;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use lofty::file::AudioFile;
use log::{debug, info};
use walkdir::WalkDir;

use crate::config::{LibrarySettings, PlayerSettings};
use crate::player::{Track, Widget};

use super::{Page, PageError};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Length from the file's audio properties; `None` when it cannot be read.
fn probe_duration(path: &Path) -> Option<f64> {
    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let secs = tagged.properties().duration().as_secs_f64();
            (secs > 0.0).then_some(secs)
        }
        Err(e) => {
            debug!("no duration for {}: {e}", path.display());
            None
        }
    }
}

/// Sort key shared by directories and files: the lowercased path text.
fn sort_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

/// Track source for a file, with `/` separators so titles split the same way
/// they do for URLs.
fn track_source(path: &Path) -> String {
    path.to_string_lossy().replace(MAIN_SEPARATOR, "/")
}

fn widget_name(dir: &Path, root: &Path) -> String {
    dir.file_name()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| root.display().to_string())
}

/// Build a page from the audio files under `dir`: one widget per directory,
/// widgets ordered by directory path and tracks by file name, both case-insensitive.
pub fn scan(
    dir: &Path,
    library: &LibrarySettings,
    player: &PlayerSettings,
) -> Result<Page, PageError> {
    let mut walker = WalkDir::new(dir).follow_links(library.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if library.recursive {
        library.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| library.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (library.include_hidden || !is_hidden(path))
            && is_audio_file(path, library)
        {
            let parent = path.parent().unwrap_or(dir).to_path_buf();
            groups.entry(parent).or_default().push(path.to_path_buf());
        }
    }

    let mut groups: Vec<(PathBuf, Vec<PathBuf>)> = groups.into_iter().collect();
    groups.sort_by_cached_key(|(folder, _)| sort_key(folder));

    let mut widgets = Vec::with_capacity(groups.len());
    for (folder, mut files) in groups {
        files.sort_by_cached_key(|p| p.file_name().map(|n| sort_key(Path::new(n))).unwrap_or_default());

        let tracks = files
            .iter()
            .map(|p| {
                let track = Track::new(track_source(p));
                match probe_duration(p) {
                    Some(d) => track.with_duration(d),
                    None => track,
                }
            })
            .collect();

        widgets.push(Widget::new(
            widget_name(&folder, dir),
            tracks,
            player.continuous,
        )?);
    }

    if widgets.is_empty() {
        return Err(PageError::Empty);
    }

    info!("found {} widget(s) under {}", widgets.len(), dir.display());
    Ok(Page {
        title: Some(widget_name(dir, dir)),
        widgets,
    })
}
