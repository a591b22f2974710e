use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::coordinator::Coordinator;

mod event_loop;
mod logging;
mod settings;
mod startup;
mod transport;

pub use transport::Transport;

/// Load settings and the page named on the command line (or the current
/// directory), then run the terminal host until the user quits.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_problem) = settings::load_settings();
    logging::init(&settings.log);
    if let Some(msg) = settings_problem {
        warn!("{msg}");
        eprintln!("pageplayer: {msg}");
    }

    let target = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let page = startup::load_page(&target, &settings)?;
    let header_text = page
        .title
        .clone()
        .unwrap_or_else(|| settings.ui.header_text.clone());

    let mut coordinator = Coordinator::new(page.widgets);
    let mut transport = Transport::new(&settings);
    startup::load_metadata(&mut coordinator, &mut transport);
    info!("page ready with {} widget(s)", coordinator.len());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::new();
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &header_text,
        &mut coordinator,
        &mut transport,
        &mut state,
    );

    transport.apply(coordinator.unload());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    run_result
}
