use super::*;

fn widget(durations: &[f64], continuous: bool) -> Widget {
    let tracks = durations
        .iter()
        .enumerate()
        .map(|(i, &d)| Track::new(format!("https://example.com/audio/track-{i}.mp3")).with_duration(d))
        .collect();
    Widget::new("test", tracks, continuous).unwrap()
}

#[test]
fn wrap_index_wraps_both_ways() {
    assert_eq!(wrap_index(0, -1, 3), 2);
    assert_eq!(wrap_index(2, 1, 3), 0);
    assert_eq!(wrap_index(1, 1, 3), 2);
    assert_eq!(wrap_index(0, -4, 3), 2);
    assert_eq!(wrap_index(0, 1, 1), 0);
}

#[test]
fn new_widget_is_paused_on_first_track() {
    let w = widget(&[200.0, 100.0], false);
    assert_eq!(w.playback(), PlaybackState::Paused);
    assert_eq!(w.current_track(), 0);
    assert_eq!(w.track_count(), 2);
    assert!(w.has_navigation());
    assert_eq!(w.readout().progress_percent, 0.0);
    assert_eq!(w.readout().time_label(), "03:20");
}

#[test]
fn widget_without_tracks_is_rejected() {
    let err = Widget::new("empty", Vec::new(), false).unwrap_err();
    assert_eq!(
        err,
        WidgetError::NoTracks {
            name: "empty".into()
        }
    );
}

#[test]
fn navigate_wraps_and_resets_playhead() {
    let mut w = widget(&[10.0, 20.0, 30.0], false);
    let mut fx = Vec::new();

    w.navigate(-1, &mut fx);
    assert_eq!(w.current_track(), 2);
    assert_eq!(w.current().current_time, 0.0);
    assert_eq!(w.readout().time_marker, Some(30.0));
    assert_eq!(
        fx,
        vec![Effect::SetTime {
            widget: WidgetId(0),
            track: 2,
            seconds: 0.0
        }]
    );

    w.navigate(1, &mut fx);
    assert_eq!(w.current_track(), 0);
    assert!(!w.is_playing());
}

#[test]
fn navigate_while_playing_resumes_on_new_track() {
    let mut w = widget(&[10.0, 20.0], false);
    let mut fx = Vec::new();
    w.play(&mut fx);
    fx.clear();

    w.navigate(1, &mut fx);
    assert!(w.is_playing());
    assert_eq!(w.current_track(), 1);
    assert_eq!(
        fx.first(),
        Some(&Effect::Pause {
            widget: WidgetId(0),
            track: 0
        })
    );
    assert_eq!(
        fx.last(),
        Some(&Effect::Play {
            widget: WidgetId(0),
            track: 1
        })
    );
}

#[test]
fn navigate_is_ignored_on_single_track_widget() {
    let mut w = widget(&[10.0], false);
    w.tracks[0].current_time = 4.0;
    let mut fx = Vec::new();

    w.navigate(1, &mut fx);
    assert!(fx.is_empty());
    assert_eq!(w.current().current_time, 4.0);
}

#[test]
fn seek_sets_playhead_from_fraction() {
    let mut w = widget(&[200.0], false);
    let mut fx = Vec::new();

    w.seek(0.5, &mut fx).unwrap();
    assert_eq!(w.current().current_time, 100.0);
    assert_eq!(w.readout().progress_percent, 50.0);
    assert_eq!(w.readout().time_label(), "01:40");
}

#[test]
fn seek_clamps_to_track_bounds() {
    let mut w = widget(&[200.0], false);
    let mut fx = Vec::new();

    w.seek(1.7, &mut fx).unwrap();
    assert_eq!(w.current().current_time, 200.0);
    assert_eq!(w.readout().progress_percent, 100.0);

    w.seek(-0.3, &mut fx).unwrap();
    assert_eq!(w.current().current_time, 0.0);
}

#[test]
fn seek_needs_finite_fraction_and_known_duration() {
    let mut fx = Vec::new();

    let mut w = widget(&[200.0], false);
    assert_eq!(
        w.seek(f64::NAN, &mut fx).unwrap_err().to_string(),
        "invalid seek fraction NaN"
    );

    let mut w = Widget::new("stream", vec![Track::new("live.mp3")], false).unwrap();
    assert_eq!(
        w.seek(0.5, &mut fx),
        Err(WidgetError::DurationUnknown(WidgetId(0)))
    );
    assert!(fx.is_empty());
}

#[test]
fn metadata_loaded_initializes_readout_for_current_track() {
    let mut w = Widget::new("w", vec![Track::new("a.mp3"), Track::new("b.mp3")], false).unwrap();
    assert_eq!(w.readout().time_label(), "--:--");

    w.metadata_loaded(1, 42.0).unwrap();
    assert_eq!(w.track(1).unwrap().duration, Some(42.0));
    assert_eq!(w.readout().time_marker, None);

    w.metadata_loaded(0, 65.9).unwrap();
    assert_eq!(w.readout().time_label(), "01:05");
    assert_eq!(w.readout().progress_percent, 0.0);

    assert_eq!(
        w.metadata_loaded(5, 1.0),
        Err(WidgetError::UnknownTrack {
            widget: WidgetId(0),
            track: 5
        })
    );
}

#[test]
fn metadata_with_infinite_duration_stays_unknown() {
    let mut w = Widget::new("w", vec![Track::new("radio")], false).unwrap();
    w.metadata_loaded(0, f64::INFINITY).unwrap();
    assert_eq!(w.current().duration, None);
}

#[test]
fn time_update_refreshes_readout_only_while_playing() {
    let mut w = widget(&[100.0], false);
    let mut fx = Vec::new();

    w.time_update(30.0);
    assert_eq!(w.current().current_time, 30.0);
    assert_eq!(w.readout().progress_percent, 0.0);
    assert_eq!(w.readout().time_marker, Some(100.0));

    w.play(&mut fx);
    w.time_update(40.0);
    assert_eq!(w.readout().progress_percent, 40.0);
    assert_eq!(w.readout().time_label(), "00:40");
}

#[test]
fn progress_is_clamped_when_playhead_drifts_past_duration() {
    let mut w = widget(&[100.0], false);
    let mut fx = Vec::new();
    w.play(&mut fx);

    w.time_update(100.0000001);
    assert_eq!(w.readout().progress_percent, 100.0);

    assert_eq!(progress_percent(250.0, Some(200.0)), 100.0);
    assert_eq!(progress_percent(-1.0, Some(200.0)), 0.0);
    assert_eq!(progress_percent(10.0, None), 0.0);
    assert_eq!(progress_percent(10.0, Some(0.0)), 0.0);
}

#[test]
fn track_ended_without_continuous_stops_in_place() {
    let mut w = widget(&[10.0, 20.0], false);
    let mut fx = Vec::new();
    w.play(&mut fx);

    assert_eq!(w.track_ended(&mut fx), TrackEnd::Stopped);
    assert_eq!(w.playback(), PlaybackState::Paused);
    assert_eq!(w.current_track(), 0);
}

#[test]
fn track_ended_with_continuous_moves_to_next_track_or_hands_off() {
    let mut w = widget(&[10.0, 20.0], true);
    let mut fx = Vec::new();
    w.play(&mut fx);

    assert_eq!(w.track_ended(&mut fx), TrackEnd::NextTrack);
    assert_eq!(w.current_track(), 1);
    assert!(!w.is_playing());

    assert_eq!(w.track_ended(&mut fx), TrackEnd::Handoff);
    assert_eq!(w.current_track(), 1);
}

#[test]
fn play_reports_file_name_to_analytics() {
    let mut w = widget(&[10.0], false);
    let mut fx = Vec::new();
    w.play(&mut fx);

    assert_eq!(
        fx,
        vec![
            Effect::Analytics {
                label: "track-0.mp3".into()
            },
            Effect::Play {
                widget: WidgetId(0),
                track: 0
            },
        ]
    );
}

#[test]
fn time_marker_formats_minutes_and_seconds() {
    assert_eq!(format_time_marker(Some(0.0)), "00:00");
    assert_eq!(format_time_marker(Some(59.99)), "00:59");
    assert_eq!(format_time_marker(Some(61.0)), "01:01");
    assert_eq!(format_time_marker(Some(7527.0)), "125:27");
    assert_eq!(format_time_marker(None), "--:--");
    assert_eq!(format_time_marker(Some(f64::NAN)), "--:--");
}

#[test]
fn title_strips_extension_and_decodes() {
    assert_eq!(
        title_from_source("https://example.com/media/My%20Song.final.mp3"),
        "My Song.final"
    );
    assert_eq!(title_from_source("/music/Intro"), "Intro");
    assert_eq!(file_name("https://example.com/a/b.mp3"), "b.mp3");
}

#[test]
fn title_splits_on_forward_slash_only() {
    let source = "https://example.com/media/left\\right.mp3";
    assert_eq!(title_from_source(source), "left\\right");
    assert_eq!(file_name(source), "right.mp3");
    assert_eq!(title_from_source("https://example.com/a%5Cb.mp3"), "a\\b");
}

#[test]
fn play_restarts_a_track_that_reached_its_end() {
    let mut w = widget(&[10.0], false);
    let mut fx = Vec::new();
    w.play(&mut fx);
    w.time_update(10.0);
    w.track_ended(&mut fx);
    assert!(w.current().has_ended());

    fx.clear();
    w.play(&mut fx);
    assert_eq!(
        fx[0],
        Effect::SetTime {
            widget: WidgetId(0),
            track: 0,
            seconds: 0.0
        }
    );
    assert_eq!(w.current().current_time, 0.0);
    assert_eq!(w.readout().progress_percent, 0.0);
}
