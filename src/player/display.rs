//! Derived display values: progress percentage, time marker and title.

/// Progress bar width for `current_time` within `duration`, clamped to `[0, 100]`.
///
/// An unknown or zero duration shows an empty bar.
pub fn progress_percent(current_time: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d > 0.0 => {
            let percent = current_time / d * 100.0;
            if percent.is_nan() {
                0.0
            } else {
                percent.clamp(0.0, 100.0)
            }
        }
        _ => 0.0,
    }
}

/// Format seconds as `MM:SS`. Minutes are not capped; unknown renders `--:--`.
pub fn format_time_marker(secs: Option<f64>) -> String {
    match secs {
        Some(s) if s.is_finite() => {
            let whole = s.max(0.0).floor() as u64;
            format!("{:02}:{:02}", whole / 60, whole % 60)
        }
        _ => "--:--".to_string(),
    }
}

/// Last segment of a URL or path, split on either slash kind.
pub fn file_name(source: &str) -> &str {
    source.rsplit(['/', '\\']).next().unwrap_or(source)
}

/// Title shown for a source: last URL segment without its extension, percent-decoded.
///
/// Only `/` separates segments here; a backslash is part of the name.
pub fn title_from_source(source: &str) -> String {
    let name = source.rsplit('/').next().unwrap_or(source);
    let stem = match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    };

    match urlencoding::decode(stem) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => stem.to_string(),
    }
}

/// Keep only durations a playhead can be measured against.
pub(crate) fn sanitize_duration(secs: f64) -> Option<f64> {
    (secs.is_finite() && secs >= 0.0).then_some(secs)
}
