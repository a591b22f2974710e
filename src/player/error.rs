use super::model::WidgetId;

/// Reasons a widget operation cannot be carried out.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// The page has no widget at this position.
    #[error("no widget {0} on the page")]
    UnknownWidget(WidgetId),

    /// The widget has no track at this index.
    #[error("widget {widget} has no track {track}")]
    UnknownTrack { widget: WidgetId, track: usize },

    /// Seeking needs the track length, which arrives with its metadata.
    #[error("duration of the current track of widget {0} is not known yet")]
    DurationUnknown(WidgetId),

    /// Click fractions must be finite numbers.
    #[error("invalid seek fraction {0}")]
    InvalidFraction(f64),

    /// A widget was declared without any track.
    #[error("widget \"{name}\" has no tracks")]
    NoTracks { name: String },
}
