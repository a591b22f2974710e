use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::coordinator::Coordinator;
use crate::player::{WidgetEvent, WidgetId};
use crate::ui::{self, WidgetArea};

use super::transport::Transport;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Index of the widget the keyboard controls.
    pub selected: usize,
    /// Where widgets were drawn last frame, for mouse hit-testing.
    pub areas: Vec<WidgetArea>,
    last_tick: Instant,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            areas: Vec::new(),
            last_tick: Instant::now(),
        }
    }

    fn selected_id(&self) -> WidgetId {
        WidgetId(self.selected)
    }
}

impl Default for EventLoopState {
    fn default() -> Self {
        Self::new()
    }
}

/// Route one event through the coordinator and hand its effects to the transport.
pub fn dispatch(
    coordinator: &mut Coordinator,
    transport: &mut Transport,
    id: WidgetId,
    event: WidgetEvent,
) {
    match coordinator.dispatch(id, event) {
        Ok(fx) => transport.apply(fx),
        Err(e) => warn!("{e}"),
    }
}

/// Main terminal event loop: draws the page, handles input and ticks the
/// transport. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    header_text: &str,
    coordinator: &mut Coordinator,
    transport: &mut Transport,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.transport.tick_ms);

    loop {
        terminal.draw(|f| {
            state.areas = ui::draw(f, coordinator, state.selected, header_text);
        })?;

        let timeout = tick.saturating_sub(state.last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, coordinator, transport, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, coordinator, transport, state),
                _ => {}
            }
        }

        let elapsed = state.last_tick.elapsed();
        if elapsed >= tick {
            state.last_tick = Instant::now();
            for (id, event) in transport.tick(coordinator, elapsed) {
                dispatch(coordinator, transport, id, event);
            }
        }
    }
}

/// Returns true when the user asked to quit.
fn handle_key_event(
    key: KeyEvent,
    coordinator: &mut Coordinator,
    transport: &mut Transport,
    state: &mut EventLoopState,
) -> bool {
    if coordinator.is_empty() {
        return matches!(key.code, KeyCode::Char('q') | KeyCode::Esc);
    }

    let id = state.selected_id();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            state.selected = (state.selected + 1).min(coordinator.len() - 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.selected = state.selected.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Enter => {
            dispatch(coordinator, transport, id, WidgetEvent::TogglePlayPause);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            dispatch(coordinator, transport, id, WidgetEvent::Previous);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            dispatch(coordinator, transport, id, WidgetEvent::Next);
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let tenths = f64::from(c.to_digit(10).unwrap_or(0));
            dispatch(coordinator, transport, id, WidgetEvent::Seek(tenths / 10.0));
        }
        _ => {}
    }

    false
}

fn handle_mouse_event(
    mouse: MouseEvent,
    coordinator: &mut Coordinator,
    transport: &mut Transport,
    state: &mut EventLoopState,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if let Some(id) = ui::widget_at(&state.areas, mouse.column, mouse.row) {
        state.selected = id.0;
    }
    if let Some((id, fraction)) = ui::progress_hit(&state.areas, mouse.column, mouse.row) {
        dispatch(coordinator, transport, id, WidgetEvent::Seek(fraction));
    }
}
