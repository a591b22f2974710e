//! Simulated media transport.
//!
//! Stands in for the media primitives a page would provide: it applies the
//! coordinator's effects, advances the playhead of the rolling track on each
//! tick and reports progress and track ends back as widget events. No audio is
//! decoded.

use std::time::Duration;

use log::{debug, info};

use crate::config::Settings;
use crate::coordinator::Coordinator;
use crate::player::{Effect, WidgetEvent, WidgetId};

pub struct Transport {
    rolling: Option<(WidgetId, usize)>,
    fallback_duration: f64,
    analytics_event: Option<String>,
}

impl Transport {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rolling: None,
            fallback_duration: settings.transport.default_duration_secs,
            analytics_event: settings
                .player
                .analytics
                .then(|| settings.player.analytics_event.clone()),
        }
    }

    /// The track currently rolling, if any.
    pub fn rolling(&self) -> Option<(WidgetId, usize)> {
        self.rolling
    }

    /// Metadata notifications for every track on the page. Tracks without a
    /// known length get the configured fallback.
    pub fn load_metadata(&self, coordinator: &Coordinator) -> Vec<(WidgetId, WidgetEvent)> {
        let mut events = Vec::new();
        for widget in coordinator.widgets() {
            for (track, t) in widget.tracks().iter().enumerate() {
                events.push((
                    widget.id(),
                    WidgetEvent::MetadataLoaded {
                        track,
                        duration: t.duration.unwrap_or(self.fallback_duration),
                    },
                ));
            }
        }
        events
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Play { widget, track } => {
                    self.rolling = Some((widget, track));
                }
                Effect::Pause { widget, track } => {
                    if self.rolling == Some((widget, track)) {
                        self.rolling = None;
                    }
                }
                Effect::SetTime {
                    widget,
                    track,
                    seconds,
                } => {
                    debug!("widget {widget} track {track} playhead -> {seconds:.2}s");
                }
                Effect::Analytics { label } => {
                    if let Some(event) = &self.analytics_event {
                        info!(target: "pageplayer::analytics", "{event} label={label}");
                    }
                }
            }
        }
    }

    /// Advance the rolling track by `elapsed` and report what happened.
    pub fn tick(&self, coordinator: &Coordinator, elapsed: Duration) -> Vec<(WidgetId, WidgetEvent)> {
        let Some((id, index)) = self.rolling else {
            return Vec::new();
        };
        let Ok(widget) = coordinator.widget(id) else {
            return Vec::new();
        };
        if widget.current_track() != index {
            return Vec::new();
        }

        let track = widget.current();
        let now = track.current_time + elapsed.as_secs_f64();
        match track.duration {
            Some(d) if now >= d => vec![
                (id, WidgetEvent::TimeUpdate(d)),
                (id, WidgetEvent::TrackEnded),
            ],
            _ => vec![(id, WidgetEvent::TimeUpdate(now))],
        }
    }
}
