//! Page-level coordination of player widgets.
//!
//! The `Coordinator` owns the ordered list of widgets found on the page. It is
//! the single entry point for widget events and keeps the page invariant that
//! at most one widget is playing at any time, by pausing everything before a
//! widget starts.

use log::{debug, info};

use crate::player::{Effect, TrackEnd, Widget, WidgetError, WidgetEvent, WidgetId};

pub struct Coordinator {
    widgets: Vec<Widget>,
}

impl Coordinator {
    /// Take ownership of the page's widgets, numbering them in page order.
    pub fn new(mut widgets: Vec<Widget>) -> Self {
        for (i, w) in widgets.iter_mut().enumerate() {
            w.id = WidgetId(i);
        }
        Self { widgets }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widget(&self, id: WidgetId) -> Result<&Widget, WidgetError> {
        self.widgets.get(id.0).ok_or(WidgetError::UnknownWidget(id))
    }

    fn widget_mut(&mut self, id: WidgetId) -> Result<&mut Widget, WidgetError> {
        self.widgets
            .get_mut(id.0)
            .ok_or(WidgetError::UnknownWidget(id))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The widget currently playing, if any.
    pub fn playing(&self) -> Option<WidgetId> {
        self.widgets.iter().find(|w| w.is_playing()).map(Widget::id)
    }

    /// Route `event` to widget `id` and return the media effects to apply, in order.
    pub fn dispatch(&mut self, id: WidgetId, event: WidgetEvent) -> Result<Vec<Effect>, WidgetError> {
        debug!("widget {id}: {event:?}");
        match event {
            WidgetEvent::TogglePlayPause => self.toggle_play_pause(id),
            WidgetEvent::Play => self.play(id),
            WidgetEvent::Pause => {
                let mut fx = Vec::new();
                self.widget_mut(id)?.pause(&mut fx);
                Ok(fx)
            }
            WidgetEvent::Previous => self.navigate_track(id, -1),
            WidgetEvent::Next => self.navigate_track(id, 1),
            WidgetEvent::Seek(fraction) => self.seek(id, fraction),
            WidgetEvent::MetadataLoaded { track, duration } => {
                self.widget_mut(id)?.metadata_loaded(track, duration)?;
                Ok(Vec::new())
            }
            WidgetEvent::TimeUpdate(seconds) => {
                self.widget_mut(id)?.time_update(seconds);
                Ok(Vec::new())
            }
            WidgetEvent::TrackEnded => self.on_track_ended(id),
        }
    }

    /// Pause a playing widget, or pause everything else and start this one.
    pub fn toggle_play_pause(&mut self, id: WidgetId) -> Result<Vec<Effect>, WidgetError> {
        if self.widget(id)?.is_playing() {
            let mut fx = Vec::new();
            self.widget_mut(id)?.pause(&mut fx);
            Ok(fx)
        } else {
            self.play(id)
        }
    }

    /// Start widget `id` on its current track unless it already plays.
    pub fn play(&mut self, id: WidgetId) -> Result<Vec<Effect>, WidgetError> {
        let mut fx = Vec::new();
        if self.widget(id)?.is_playing() {
            return Ok(fx);
        }
        self.pause_all_into(&mut fx);
        self.widget_mut(id)?.play(&mut fx);
        Ok(fx)
    }

    /// Move `step` tracks within widget `id`, wrapping at both ends.
    pub fn navigate_track(&mut self, id: WidgetId, step: isize) -> Result<Vec<Effect>, WidgetError> {
        let mut fx = Vec::new();
        self.widget_mut(id)?.navigate(step, &mut fx);
        Ok(fx)
    }

    /// Jump to `fraction` of widget `id`'s current track.
    pub fn seek(&mut self, id: WidgetId, fraction: f64) -> Result<Vec<Effect>, WidgetError> {
        let mut fx = Vec::new();
        self.widget_mut(id)?.seek(fraction, &mut fx)?;
        Ok(fx)
    }

    /// Handle the end of widget `id`'s current track.
    pub fn on_track_ended(&mut self, id: WidgetId) -> Result<Vec<Effect>, WidgetError> {
        let mut fx = Vec::new();
        match self.widget_mut(id)?.track_ended(&mut fx) {
            TrackEnd::Stopped => {}
            TrackEnd::NextTrack => {
                self.pause_all_into(&mut fx);
                self.widget_mut(id)?.play(&mut fx);
            }
            TrackEnd::Handoff => {
                fx.extend(self.advance_to_adjacent_widget(id, 1)?);
            }
        }
        Ok(fx)
    }

    /// Pause every widget on the page.
    pub fn pause_all(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        self.pause_all_into(&mut fx);
        fx
    }

    /// Page unload: nothing keeps playing.
    pub fn unload(&mut self) -> Vec<Effect> {
        info!("page unload, pausing {} widget(s)", self.widgets.len());
        self.pause_all()
    }

    /// Pause everything and start the widget `step` positions away from `id`.
    ///
    /// Moving forward starts the target on its first track, moving backward on
    /// its last one. Past either end of the page everything stays paused.
    pub fn advance_to_adjacent_widget(
        &mut self,
        id: WidgetId,
        step: isize,
    ) -> Result<Vec<Effect>, WidgetError> {
        let position = self
            .widgets
            .iter()
            .position(|w| w.id == id)
            .ok_or(WidgetError::UnknownWidget(id))?;

        let mut fx = Vec::new();
        self.pause_all_into(&mut fx);

        let target = position as isize + step;
        if target < 0 || target >= self.widgets.len() as isize {
            debug!("widget {id}: no widget {step:+} positions away, page stays paused");
            return Ok(fx);
        }

        let next = &mut self.widgets[target as usize];
        let track = if step < 0 { next.track_count() - 1 } else { 0 };
        info!("handing playback from widget {id} to widget {}", next.id);
        next.jump_to(track, &mut fx);
        next.play(&mut fx);
        Ok(fx)
    }

    fn pause_all_into(&mut self, fx: &mut Vec<Effect>) {
        for w in &mut self.widgets {
            w.pause(fx);
        }
    }
}
