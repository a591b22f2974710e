//! Widget model types: `Widget`, `Track`, `PlaybackState` and `Readout`.
//!
//! A `Widget` is one player instance on the page. It owns its tracks and the
//! small amount of state the controller mutates (current track, playing flag)
//! plus the displayed readout.

use std::fmt;

use super::display;
use super::error::WidgetError;

/// Position of a widget in the page's ordered widget list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WidgetId(pub usize);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The playback state of a widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Paused
    }
}

/// One playable source within a widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// URL or path of the audio source.
    pub source: String,
    /// Length in seconds, known once metadata has loaded.
    pub duration: Option<f64>,
    /// Playhead in seconds.
    pub current_time: f64,
}

impl Track {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            duration: None,
            current_time: 0.0,
        }
    }

    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration = display::sanitize_duration(secs);
        self
    }

    /// Last path segment of the source, used as the analytics label.
    pub fn file_name(&self) -> &str {
        display::file_name(&self.source)
    }

    /// Whether the playhead sits at the end of a track of known length.
    pub fn has_ended(&self) -> bool {
        matches!(self.duration, Some(d) if d > 0.0 && self.current_time >= d)
    }

    /// Human title derived from the source.
    pub fn title(&self) -> String {
        display::title_from_source(&self.source)
    }
}

/// What the widget currently shows next to its controls.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Readout {
    /// Width of the progress bar, always within `[0, 100]`.
    pub progress_percent: f64,
    /// Seconds shown in the time marker; `None` while unknown.
    pub time_marker: Option<f64>,
}

impl Readout {
    pub fn time_label(&self) -> String {
        display::format_time_marker(self.time_marker)
    }
}

/// One player instance on the page.
#[derive(Clone, Debug)]
pub struct Widget {
    pub(crate) id: WidgetId,
    pub name: String,
    pub continuous: bool,
    pub(crate) tracks: Vec<Track>,
    pub(crate) current: usize,
    pub(crate) playback: PlaybackState,
    pub(crate) readout: Readout,
}

impl Widget {
    /// Create a paused widget positioned on its first track.
    ///
    /// A widget needs at least one track.
    pub fn new(
        name: impl Into<String>,
        tracks: Vec<Track>,
        continuous: bool,
    ) -> Result<Self, WidgetError> {
        let name = name.into();
        if tracks.is_empty() {
            return Err(WidgetError::NoTracks { name });
        }

        let readout = Readout {
            progress_percent: 0.0,
            time_marker: tracks[0].duration,
        };

        Ok(Self {
            id: WidgetId::default(),
            name,
            continuous,
            tracks,
            current: 0,
            playback: PlaybackState::Paused,
            readout,
        })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    /// Index of the current track, always below `track_count()`.
    pub fn current_track(&self) -> usize {
        self.current
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn current(&self) -> &Track {
        &self.tracks[self.current]
    }

    pub fn readout(&self) -> Readout {
        self.readout
    }

    /// Prev/next controls are only live on widgets holding several tracks.
    pub fn has_navigation(&self) -> bool {
        self.tracks.len() > 1
    }

    pub fn is_last_track(&self) -> bool {
        self.current + 1 >= self.tracks.len()
    }
}
