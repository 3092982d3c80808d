use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use musik_tui::config::Settings;
use musik_tui::controller::AppController;
use musik_tui::logging;
use musik_tui::model::{Catalog, LibraryCatalog, Playback, QueuePlayer};
use musik_tui::view::{AppView, TerminalPresenter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== musik-tui starting ===");

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load settings, using defaults");
            Settings::default()
        }
    };
    tracing::debug!(?settings, "Settings loaded");

    let catalog = LibraryCatalog::new(settings.library_path.clone());
    let mut controller = AppController::new(catalog, QueuePlayer::new(), TerminalPresenter::new(), settings);

    if !controller.navigator_mut().load_recently_played().await {
        tracing::warn!("Starting without a root view");
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("musik-tui shutting down");
    Ok(())
}

async fn run_app<C: Catalog, P: Playback>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController<C, P, TerminalPresenter>,
) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        controller.prepare_frame(Rect::new(0, 0, size.width, size.height));

        terminal.draw(|f| {
            AppView::render(f, controller);
        })?;

        // Short poll keeps the UI responsive
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await;
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
