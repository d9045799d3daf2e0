// Native binary for galleryx - Terminal UI mode

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;

use galleryx::{
    app::App,
    catalog_api::{CatalogSource, HttpCatalog, StaticCatalog},
    config::{load, Config},
    constants::messages::{COPY_FAILED, COPY_IMAGE},
    copy_api,
    favorites::Favorites,
    page_fetch,
    types::{AppEvent, PageRequest},
    ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    let _ = dotenvy::dotenv();

    let cfg = load().context("Failed to load configuration")?;
    init_logging(&cfg)?;
    cfg.log_summary();

    // catalog + fetch task
    let catalog: Arc<dyn CatalogSource> = if cfg.offline {
        Arc::new(StaticCatalog::sample())
    } else {
        Arc::new(HttpCatalog::new(cfg.catalog_url.clone(), cfg.fetch_timeout_ms))
    };
    let (event_tx, event_rx) = unbounded_channel::<AppEvent>();
    let (page_tx, page_rx) = unbounded_channel::<PageRequest>();
    let fetch_task: JoinHandle<Result<()>> =
        tokio::spawn(page_fetch::run_page_fetch(catalog, page_rx, event_tx));

    let mut app = App::new(
        cfg.start_page,
        Favorites::seeded(cfg.favorites.iter().copied()),
        cfg.render_fps,
        cfg.render_fps_choices.clone(),
        cfg.theme,
        Some(page_tx),
    );
    app.mount();

    // terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // main loop
    let result = run_loop(&mut app, &mut terminal, event_rx).await;

    // cleanup
    fetch_task.abort();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("UI loop failed: {e:?}");
    }
    log::info!("galleryx exiting ({} favourites this session)", app.favorites().len());
    result
}

/// Route `log` output to the configured file; the terminal belongs to the UI.
fn init_logging(cfg: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cfg.log_file)
        .with_context(|| format!("Failed to open log file {}", cfg.log_file))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut rx: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        // frame budget (coalesced renders)
        let frame_ms = 1000u32.saturating_div(app.fps()) as u64;
        let budget = Duration::from_millis(frame_ms.max(1));
        let wait = budget.saturating_sub(last_frame.elapsed());

        // input or fetch events
        if event::poll(wait)? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                    handle_key(app, k);
                }
            }
        }
        while let Ok(ev) = rx.try_recv() {
            app.on_event(ev);
        }

        if last_frame.elapsed() >= budget {
            terminal.draw(|f| ui::draw(f, app))?;
            last_frame = Instant::now();
        }
        if app.quit_flag() {
            break;
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, k: KeyEvent) {
    match (k.code, k.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.on_event(AppEvent::Quit);
        }

        // Pagination
        (KeyCode::Char('n'), _) | (KeyCode::PageDown, _) => app.next_page(),
        (KeyCode::Char('p'), _) | (KeyCode::PageUp, _) => app.prev_page(),

        // Selection
        (KeyCode::Left, _) => app.left(),
        (KeyCode::Right, _) => app.right(),
        (KeyCode::Up, _) => app.up(),
        (KeyCode::Down, _) => app.down(),

        // Favourites
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) | (KeyCode::Char('f'), _) => {
            app.toggle_selected_favorite();
        }

        (KeyCode::Char('c'), _) => {
            if copy_api::copy_current(app) {
                app.show_toast(COPY_IMAGE.to_string());
            } else {
                app.show_error(COPY_FAILED.to_string());
            }
        }
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => app.cycle_fps(),
        _ => {}
    }
}
