//! Events consumed by the widget reducer and effects it hands back to the host.

use super::model::WidgetId;

/// Something that happened to a widget: a control was used or its media reported progress.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// Play button.
    TogglePlayPause,
    /// Start playback unless already playing.
    Play,
    /// Stop playback unless already paused.
    Pause,
    /// Previous-track button.
    Previous,
    /// Next-track button.
    Next,
    /// Click on the progress bar, as a fraction of its width.
    Seek(f64),
    /// Metadata for `track` arrived with its length in seconds.
    MetadataLoaded { track: usize, duration: f64 },
    /// The current track's playhead moved to the given second.
    TimeUpdate(f64),
    /// The current track played to its end.
    TrackEnded,
}

/// Instruction for the host's media primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start the given track.
    Play { widget: WidgetId, track: usize },
    /// Pause the given track.
    Pause { widget: WidgetId, track: usize },
    /// Move the given track's playhead.
    SetTime {
        widget: WidgetId,
        track: usize,
        seconds: f64,
    },
    /// Report a play start; `label` is the played file name.
    Analytics { label: String },
}

/// How a widget reacted to the end of its current track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackEnd {
    /// Not continuous: the widget stays paused where it is.
    Stopped,
    /// Continuous with more tracks left: the widget moved to its next track.
    NextTrack,
    /// Continuous on its last track: playback moves on to the next widget.
    Handoff,
}
