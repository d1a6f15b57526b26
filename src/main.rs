mod app;
mod constants;
mod errors;
mod localization;
mod logging;
mod providers;
mod screens;
mod shapes;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    errors::{AppError, IOError},
    localization::current_labels,
    logging::logger::{init_logger, log_error, log_info, log_warn},
    providers::{
        clock::SystemClock,
        fs::{
            path::{get_base_path, get_log_file_path},
            settings_store::FileSystemSettingsStore,
        },
        settings_store::{SettingsReader, SettingsWriter},
    },
    screens::{scoreboard_screen::ScoreboardScreen, screen::AppAction},
    shapes::settings::{init_settings, Settings},
};
use crokey::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::{error::Error, time::Duration};

/// Loads the settings file, writing the defaults when there is none yet.
/// The second value is set when the defaults are used because of an error.
async fn load_settings<SR: SettingsReader, SW: SettingsWriter>(
    reader: &SR,
    writer: &SW,
) -> (Settings, Option<String>) {
    match reader.read().await {
        Ok(settings) => (settings, None),
        Err(AppError::IO(IOError::NotFound)) => {
            log_info("no settings file found, writing defaults");
            if let Err(e) = writer.save(Settings::default()).await {
                log_error(&format!("could not write default settings: {}", e));
            }
            (Settings::default(), None)
        }
        Err(e) => {
            log_warn(&format!("could not read settings, using defaults: {}", e));
            (Settings::default(), Some(e.to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let base_dir = get_base_path()?;

    // init logger
    init_logger(get_log_file_path(&base_dir));
    log_info(&format!("{} {} starting", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));

    let settings_store = FileSystemSettingsStore::new(&base_dir);
    let (settings, settings_error) = load_settings(&settings_store, &settings_store).await;
    init_settings(settings.clone());
    let mut scoreboard = ScoreboardScreen::new(settings, SystemClock);
    if let Some(e) = settings_error {
        scoreboard =
            scoreboard.with_warning(format!("{}: {}", current_labels().settings_fallback, e));
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(&mut terminal, App::new(Box::new(scoreboard)));
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    match res {
        Ok(()) => log_info("bye"),
        Err(err) => {
            log_error(&format!("terminal error: {}", err));
            println!("{:?}", err)
        }
    }
    Ok(())
}

/// The main structure is the following one:
///
/// |----------------------------|
/// |          header            |
/// |----------------------------|
/// |                            |
/// |                            |
/// |           body             |
/// |                            |
/// |                            |
/// |----------------------------|
/// | footer_left | footer_right |
/// |----------------------------|
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let container = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(size);
            let footer = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(container[2]);
            let header = Paragraph::new(current_labels().app_title)
                .style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, container[0]);
            if let Some(screen) = app.current_screen() {
                screen.render(f, container[1], footer[0], footer[1]);
            }
        })?;
        if event::poll(Duration::from_millis(200))? {
            let action = match (event::read()?, app.current_screen()) {
                (Event::Key(key), _) if key.kind == KeyEventKind::Release => continue,
                (Event::Key(key), Some(screen)) => screen.handle_key(key),
                (Event::Mouse(mouse), Some(screen)) => screen.handle_mouse(mouse),
                _ => AppAction::None,
            };
            match action {
                AppAction::None => {}
                AppAction::SwitchScreen(new_screen) => app.push_screen(new_screen),
                AppAction::Back => app.pop_screen(),
                AppAction::Quit => return Ok(()),
            }
        }
    }
}
