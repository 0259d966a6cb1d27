//! A terminal pager with browser-style smooth scrolling.
//!
//! Run with a file to page through it, or with no arguments for the built-in
//! help document.  Run with `--print-config` to dump the effective config.

use std::fs::File;
use std::io::{self, stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use tracing::{debug, info};

use glide::app::{
    document::Document,
    event::{spawn_event_reader, AppEvent},
    handler,
    pacer::FramePacer,
    state::AppState,
};
use glide::config::AppConfig;
use glide::core::Easing;
use glide::ui::{layout::AppLayout, pager::PagerView, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Smooth-scrolling terminal pager")]
struct Cli {
    /// File to page through (defaults to the built-in help).
    path: Option<PathBuf>,

    /// Duration of eased jumps, in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Easing curve for eased jumps.
    #[arg(long, value_parser = parse_easing)]
    easing: Option<Easing>,

    /// Start with wheel smoothing off.
    #[arg(long)]
    no_smooth: bool,

    /// Scroll to this selector on start (`#slug`, `h2`, `line:N`).
    #[arg(long)]
    goto: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn parse_easing(s: &str) -> Result<Easing, String> {
    Easing::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = Easing::NAMED.iter().map(|e| e.name()).collect();
        format!("unknown easing `{s}` (expected one of: {})", names.join(", "))
    })
}

impl Cli {
    /// Layer command-line overrides on top of the file config.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(secs) = self.duration {
            config.scroll.duration_secs = secs;
        }
        if let Some(easing) = self.easing {
            config.scroll.easing = easing;
        }
        if self.no_smooth {
            config.scroll.smooth_enabled = false;
        }
    }
}

// ───────────────────────────────────────── logging ───────────

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute the TUI
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut config = AppConfig::load().context("cannot load config")?;
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let document = match &cli.path {
        Some(path) => Document::load(path)?,
        None => Document::sample(),
    };
    info!(
        title = document.title(),
        lines = document.len(),
        headings = document.headings().len(),
        "document loaded"
    );

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let viewport_rows =
        AppLayout::from_area(Rect::new(0, 0, size.width, size.height)).viewport_rows();
    let mut state = AppState::new(document, viewport_rows, config);
    if let Some(selector) = cli.goto.as_deref() {
        handler::goto_selector(&mut state, selector);
    }

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    state.animator.destroy();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader();
    let mut pacer = FramePacer::new(&state.config, Instant::now());

    // ── event loop ────────────────────────────────────────────
    loop {
        // Mouse capture follows the animator's wheel listener.
        if let Some(capture) = state.animator.host_mut().take_capture_change() {
            debug!(capture, "mouse capture");
            if capture {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
        }

        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            let block = Block::default()
                .title(format!(" {} ", state.document().title()))
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            let pager = PagerView::new(state.document(), state.host().top_line()).block(block);
            frame.render_widget(pager, layout.pager_area);

            let status = match &state.status_message {
                Some(msg) => Paragraph::new(format!(" {msg}")).style(Theme::status_message_style()),
                None => Paragraph::new(format!(
                    "{}  | {}",
                    state.position_summary(),
                    handler::KEY_HINT
                ))
                .style(Theme::status_bar_style()),
            };
            frame.render_widget(status, layout.status_area);
        })?;

        pacer.arm(Instant::now(), state.animator.wants_frame());

        tokio::select! {
            // A due frame is stepped before any queued input.
            biased;

            _ = tokio::time::sleep_until(pacer.deadline().into()) => {
                state.animator.on_frame();
                pacer.frame_done(Instant::now(), state.animator.wants_frame());
            }

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize(w, h) => {
                        let layout = AppLayout::from_area(Rect::new(0, 0, w, h));
                        handler::handle_resize(state, layout.viewport_rows());
                    }
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
