use std::{
    io,
    path::PathBuf,
    sync::mpsc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notify::{RecursiveMode, Watcher};
use ratatui::{Terminal, backend::CrosstermBackend, style::Color};

use folio_core::content::PortfolioData;

mod app;
mod events;
mod ui;

use app::{App, Theme};
use events::event_utils;

#[derive(Parser)]
#[command(author, version, about = "Terminal viewer for a portfolio content file")]
struct Cli {
    /// Path to the portfolio JSON content file
    #[arg(default_value = "portfolioData.json")]
    content: PathBuf,

    /// Color theme
    #[arg(long, value_enum, default_value_t = CliTheme::Dark)]
    theme: CliTheme,

    /// Disable hot reloading of the content file
    #[arg(long)]
    no_watch: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliTheme {
    Light,
    Dark,
}

impl From<CliTheme> for Theme {
    fn from(theme: CliTheme) -> Self {
        match theme {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let content = PortfolioData::load(&cli.content)
        .with_context(|| format!("failed to load content from {}", cli.content.display()))?;
    log::info!("loaded content from {}", cli.content.display());

    // Restore the terminal before the panic message prints, otherwise
    // raw mode eats it.
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        orig_hook(panic_info);
    }));

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = App::new(content, cli.theme.into());

    // File watcher feeding reload events through a channel polled in
    // the main loop.
    let (reload_tx, reload_rx) = mpsc::channel::<()>();
    let watcher = if cli.no_watch {
        None
    } else {
        match notify::recommended_watcher(move |result: notify::Result<notify::Event>| {
            if let Ok(event) = result
                && event.kind.is_modify()
            {
                let _ = reload_tx.send(());
            }
        }) {
            Ok(mut watcher) => {
                if let Err(e) = watcher.watch(&cli.content, RecursiveMode::NonRecursive) {
                    log::warn!("could not watch {}: {e}", cli.content.display());
                    None
                } else {
                    Some(watcher)
                }
            }
            Err(e) => {
                log::warn!("could not create file watcher: {e}");
                None
            }
        }
    };

    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            if event_utils::is_terminate_event(&ev) {
                break;
            }
            if let Event::Key(key) = ev
                && key.kind == KeyEventKind::Press
            {
                app.handle_key_event(key);
            }
        }

        if reload_rx.try_recv().is_ok() {
            // Drain duplicate notifications from the same save.
            while reload_rx.try_recv().is_ok() {}
            match PortfolioData::load(&cli.content) {
                Ok(content) => {
                    app.replace_content(content);
                    app.set_status("Content reloaded", Color::Green);
                }
                Err(e) => {
                    log::warn!("reload failed: {e}");
                    app.set_status(format!("Reload failed: {e}"), Color::Red);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.update();
            last_tick = Instant::now();
        }
    }

    // Keep the watcher alive for the whole loop.
    drop(watcher);

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    Ok(())
}
