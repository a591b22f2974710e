//! Per-widget controller operations.
//!
//! These mutate a single widget and push the media effects the host has to
//! apply. Anything that has to look at other widgets (mutual exclusion,
//! handing playback to the next widget) is left to the coordinator.

use log::debug;

use super::display::{self, progress_percent};
use super::error::WidgetError;
use super::event::{Effect, TrackEnd};
use super::model::{PlaybackState, Widget};

/// Index reached by moving `step` tracks from `index`, wrapping at both ends.
pub fn wrap_index(index: usize, step: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index as isize + step).rem_euclid(count as isize) as usize
}

impl Widget {
    /// Pause the current track. Pausing a paused widget emits nothing.
    pub(crate) fn pause(&mut self, fx: &mut Vec<Effect>) {
        if self.playback == PlaybackState::Playing {
            fx.push(Effect::Pause {
                widget: self.id,
                track: self.current,
            });
        }
        self.playback = PlaybackState::Paused;
    }

    /// Play the current track. Callers make sure nothing else on the page plays.
    ///
    /// A track that already played to its end starts over from zero.
    pub(crate) fn play(&mut self, fx: &mut Vec<Effect>) {
        if self.current().has_ended() {
            self.set_player_time(0.0, fx);
            self.refresh_readout();
        }
        self.playback = PlaybackState::Playing;
        fx.push(Effect::Analytics {
            label: self.current().file_name().to_string(),
        });
        fx.push(Effect::Play {
            widget: self.id,
            track: self.current,
        });
        debug!("widget {} playing track {}", self.id, self.current);
    }

    /// Move `step` tracks with wrap-around, keeping the playing flag.
    ///
    /// Widgets with a single track have no navigation controls, so this is a no-op for them.
    pub(crate) fn navigate(&mut self, step: isize, fx: &mut Vec<Effect>) {
        if !self.has_navigation() {
            return;
        }
        let target = wrap_index(self.current, step, self.tracks.len());
        self.jump_to(target, fx);
    }

    /// Make `index` the current track with its playhead at zero.
    ///
    /// Playback is paused around the switch and resumed if it was running.
    pub(crate) fn jump_to(&mut self, index: usize, fx: &mut Vec<Effect>) {
        let was_playing = self.is_playing();
        if was_playing {
            self.pause(fx);
        }

        self.current = index.min(self.tracks.len() - 1);
        self.readout.progress_percent = 0.0;
        self.set_player_time(0.0, fx);
        self.readout.time_marker = self.tracks[self.current].duration;

        if was_playing {
            self.play(fx);
        }
    }

    /// Jump to `fraction` of the current track, clamped to the track bounds.
    pub(crate) fn seek(&mut self, fraction: f64, fx: &mut Vec<Effect>) -> Result<(), WidgetError> {
        if !fraction.is_finite() {
            return Err(WidgetError::InvalidFraction(fraction));
        }
        let duration = self
            .current()
            .duration
            .ok_or(WidgetError::DurationUnknown(self.id))?;

        self.set_player_time(fraction.clamp(0.0, 1.0) * duration, fx);
        self.refresh_readout();
        Ok(())
    }

    /// Record a track's length. For the current track the readout resets to
    /// an empty bar showing the full duration.
    pub(crate) fn metadata_loaded(&mut self, track: usize, duration: f64) -> Result<(), WidgetError> {
        let id = self.id;
        let entry = self
            .tracks
            .get_mut(track)
            .ok_or(WidgetError::UnknownTrack { widget: id, track })?;
        entry.duration = display::sanitize_duration(duration);

        if track == self.current {
            self.readout.progress_percent = 0.0;
            self.readout.time_marker = self.current().duration;
        }
        Ok(())
    }

    /// Record the current track's playhead. The readout only follows while playing.
    pub(crate) fn time_update(&mut self, seconds: f64) {
        if seconds.is_finite() {
            let current = self.current;
            self.tracks[current].current_time = seconds.max(0.0);
        }
        if self.is_playing() {
            self.refresh_readout();
        }
    }

    /// Pause, then in continuous mode either step to the next track or ask for a handoff.
    ///
    /// On `NextTrack` the widget is left paused on its new track; starting it is
    /// up to the caller so that page-wide exclusion can be applied first.
    pub(crate) fn track_ended(&mut self, fx: &mut Vec<Effect>) -> TrackEnd {
        self.pause(fx);

        if !self.continuous {
            return TrackEnd::Stopped;
        }
        if self.is_last_track() {
            return TrackEnd::Handoff;
        }

        let next = self.current + 1;
        self.jump_to(next, fx);
        TrackEnd::NextTrack
    }

    /// Set the playhead, never past the end of a track of known length.
    fn set_player_time(&mut self, seconds: f64, fx: &mut Vec<Effect>) {
        let current = self.current;
        let track = &mut self.tracks[current];
        let seconds = match track.duration {
            Some(d) if seconds >= d => d,
            _ => seconds.max(0.0),
        };
        track.current_time = seconds;

        fx.push(Effect::SetTime {
            widget: self.id,
            track: current,
            seconds,
        });
    }

    fn refresh_readout(&mut self) {
        let (current_time, duration) = {
            let track = self.current();
            (track.current_time, track.duration)
        };
        self.readout.progress_percent = progress_percent(current_time, duration);
        self.readout.time_marker = Some(current_time);
    }
}
