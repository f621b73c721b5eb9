use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::Terminal;

use pokedex::adapters::{JsonFileStore, ReqwestHttpClient};
use pokedex::app::App;
use pokedex::cli::{parse_args, run_cli_command, CliCommand};
use pokedex::config::Config;
use pokedex::input::KeybindingConfig;
use pokedex::logging::init_tracing;
use pokedex::terminal::{setup_panic_hook, TerminalManager};
use pokedex::ui;

/// Frame tick for the loading spinner.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    color_eyre::install()?;
    let config = Config::from_env();

    // Version and help print to stdout and never need a log file.
    if !matches!(command, CliCommand::Version | CliCommand::Help) {
        match init_tracing(&config) {
            Ok(path) => {
                tracing::info!("pokedex starting, logging to {}", path.display());
                config.log_warnings();
            }
            Err(e) => {
                eprintln!("Warning: logging disabled: {}", e);
                for warning in &config.warnings {
                    eprintln!("Warning: {}", warning);
                }
            }
        }
    }

    if let Some(result) = run_cli_command(command, &config) {
        return result;
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let client = Arc::new(ReqwestHttpClient::new());
    let store = Arc::new(JsonFileStore::in_dir(&config.data_dir()));
    tracing::info!(
        "API {} (page size {}), storage {}",
        config.api_base_url,
        config.page_size,
        store.path().display()
    );
    let mut app = App::new(&config, client, store);

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));
    term_manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let keybindings = KeybindingConfig::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let Some(mut message_rx) = app.message_rx.take() else {
        return Err(color_eyre::eyre::eyre!("message receiver already taken"));
    };

    app.start();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let command = keybindings.resolve(&key, app.focus, app.alert.is_some());
                        app.dispatch(command);
                    }
                    Some(Ok(Event::Mouse(mouse))) => match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            if let Some(action) = app.hit_areas.hit_test(mouse.column, mouse.row) {
                                app.handle_click(action);
                            }
                        }
                        MouseEventKind::Moved => {
                            if app.hit_areas.update_hover(mouse.column, mouse.row) {
                                app.mark_dirty();
                            }
                        }
                        _ => {}
                    },
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            tracing::info!("Quitting");
            return Ok(());
        }
    }
}
