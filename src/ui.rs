//! UI rendering helpers for the terminal host.
//!
//! Each widget on the page is drawn as a bordered box holding a status line
//! (play state, title, track position) and a progress bar labelled with the
//! time marker.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::coordinator::Coordinator;
use crate::player::{PlaybackState, Widget, WidgetId};

/// Rows taken by one widget box, borders included.
const WIDGET_HEIGHT: u16 = 4;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "select player");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next track");
    map.insert("0-9", "seek 0-90%");
    map.insert("click", "seek on bar");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["j/k", "space/p", "h/l", "0-9", "click", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Screen areas of a drawn widget, kept for mouse hit-testing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WidgetArea {
    pub widget: WidgetId,
    pub frame: Rect,
    pub progress: Rect,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// The widget box under the pointer, if any.
pub fn widget_at(areas: &[WidgetArea], column: u16, row: u16) -> Option<WidgetId> {
    areas
        .iter()
        .find(|a| contains(a.frame, column, row))
        .map(|a| a.widget)
}

/// Widget and click fraction when the pointer is on a progress bar.
pub fn progress_hit(areas: &[WidgetArea], column: u16, row: u16) -> Option<(WidgetId, f64)> {
    areas
        .iter()
        .find(|a| a.progress.width > 0 && contains(a.progress, column, row))
        .map(|a| {
            let offset = f64::from(column - a.progress.x);
            (a.widget, offset / f64::from(a.progress.width))
        })
}

/// First widget to draw so that `selected` stays visible, centred when possible.
fn window_start(total: usize, visible: usize, selected: usize) -> usize {
    if total <= visible || visible == 0 {
        return 0;
    }
    let half = visible / 2;
    let start = selected.saturating_sub(half);
    start.min(total - visible)
}

fn status_line(widget: &Widget) -> String {
    let glyph = match widget.playback() {
        PlaybackState::Playing => "▶",
        PlaybackState::Paused => "❚❚",
    };
    let mut line = format!("{} {}", glyph, widget.current().title());
    if widget.has_navigation() {
        line.push_str(&format!(
            "  [{}/{}]",
            widget.current_track() + 1,
            widget.track_count()
        ));
    }
    if widget.continuous {
        line.push_str("  ~ continuous");
    }
    line
}

fn draw_widget(frame: &mut Frame, widget: &Widget, area: Rect, selected: bool) -> WidgetArea {
    let border_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker = if selected { "> " } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {}{} ", marker, widget.name))
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(widget)), rows[0]);

    let readout = widget.readout();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((readout.progress_percent / 100.0).clamp(0.0, 1.0))
        .label(readout.time_label());
    frame.render_widget(gauge, rows[1]);

    WidgetArea {
        widget: widget.id(),
        frame: area,
        progress: rows[1],
    }
}

/// Render the page and return where each visible widget landed.
pub fn draw(
    frame: &mut Frame,
    coordinator: &Coordinator,
    selected: usize,
    header_text: &str,
) -> Vec<WidgetArea> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" pageplayer ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let now_playing = coordinator
        .playing()
        .and_then(|id| coordinator.widget(id).ok())
        .map(|w| format!(" • playing: {}", w.name))
        .unwrap_or_default();
    let page_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" players ({}){} ", coordinator.len(), now_playing));
    let page_area = page_block.inner(chunks[1]);
    frame.render_widget(page_block, chunks[1]);

    let widgets = coordinator.widgets();
    let visible = usize::from(page_area.height / WIDGET_HEIGHT);
    let start = window_start(widgets.len(), visible, selected);
    let end = (start + visible).min(widgets.len());

    let mut areas = Vec::with_capacity(end - start);
    for (row, widget) in widgets[start..end].iter().enumerate() {
        let i = start + row;
        let area = Rect {
            x: page_area.x,
            y: page_area.y + row as u16 * WIDGET_HEIGHT,
            width: page_area.width,
            height: WIDGET_HEIGHT,
        };
        areas.push(draw_widget(frame, widget, area, i == selected));
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);

    areas
}
