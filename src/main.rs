use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use country_picker::app::App;
use country_picker::config::{CliOverrides, Config};
use country_picker::events::EventHandler;
use country_picker::picker::OptionId;
use country_picker::tui::ui;
use country_picker::{CountryTable, log};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

struct Args {
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = None;
    let mut overrides = CliOverrides::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => match args.get(i + 1) {
                Some(path) => {
                    config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                None => eprintln!("Warning: --config requires a path argument"),
            },
            "--translation" | "-t" => match args.get(i + 1) {
                Some(key) => {
                    overrides.translation = Some(key.clone());
                    i += 1;
                }
                None => eprintln!("Warning: --translation requires a key argument"),
            },
            "--exclude" | "-x" => match args.get(i + 1) {
                Some(codes) => {
                    let excluded = codes
                        .split(',')
                        .map(str::trim)
                        .filter(|code| !code.is_empty())
                        .map(OptionId::from)
                        .collect();
                    overrides.exclude_countries = Some(excluded);
                    i += 1;
                }
                None => eprintln!("Warning: --exclude requires a comma-separated list of codes"),
            },
            "--closeable" => overrides.closeable = true,
            "--filterable" => overrides.filterable = true,
            arg => eprintln!("Warning: ignoring unknown argument '{}'", arg),
        }
        i += 1;
    }

    Args {
        config_path,
        overrides,
    }
}

fn main() -> Result<()> {
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }

    let args = parse_args();
    let config = match &args.config_path {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load(),
    }
    .with_env()
    .with_overrides(args.overrides);

    let table = CountryTable::bundled().context("loading country data")?;
    let (_, rows) = terminal::size()?;
    let props = config.into_props(rows, table.codes());
    log::log(&format!(
        "{} options, translation {}, item height {}",
        props.options_list.len(),
        props.translation,
        props.item_height
    ));

    let mut app = App::new(props, table)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(option) = &app.selected {
        println!("{}", option.id);
    }

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            let action = EventHandler::handle_event(app, &event);
            app.dispatch(action);
        }
    }
    Ok(())
}
