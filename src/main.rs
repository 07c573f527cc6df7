// ============================================================================
// ClubStats - Tableau de bord des statistiques du club
// ============================================================================
// Charge les quatre documents JSON, remplit la surface d'affichage, puis :
// - mode terminal : tableau de bord interactif (ratatui)
// - mode --json : imprime la surface remplie sur stdout
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements et rendering
// 3. Async dans sync : tokio::runtime::Runtime pour le chargement
// ============================================================================

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

use clubstats::api::DataSource;
use clubstats::app::App;
use clubstats::config::{Config, OutputMode};
use clubstats::pipeline;
use clubstats::surface::MemorySurface;
use clubstats::ui::events::{
    is_escape_event, is_next_chart_event, is_previous_chart_event, is_quit_event, is_reload_event,
};
use clubstats::ui::{render, Event, EventHandler};

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les println! ne fonctionnent pas une fois le TUI lancé : on log vers un
// fichier, avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// # Utilisation
/// ```bash
/// tail -f ~/.local/share/clubstats/logs/clubstats.log
/// RUST_LOG=clubstats=trace clubstats
/// ```
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "clubstats.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour clubstats, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clubstats=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    init_logging(&config.log_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(source = %config.source, output = ?config.output, "ClubStats starting up");

    let source = config.data_source()?;
    let runtime = Runtime::new()?;

    match config.output {
        OutputMode::Json => export_json(&runtime, &source),
        OutputMode::Terminal => run_terminal(&runtime, &source),
    }
}

/// Mode --json : la surface remplie (textes, graphiques, erreur) sur stdout
fn export_json(runtime: &Runtime, source: &DataSource) -> Result<ExitCode> {
    let mut surface = MemorySurface::dashboard();
    let snapshot = runtime.block_on(pipeline::run(source, &mut surface));

    println!("{}", serde_json::to_string_pretty(&surface)?);

    Ok(if snapshot.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Mode terminal : tableau de bord interactif
fn run_terminal(runtime: &Runtime, source: &DataSource) -> Result<ExitCode> {
    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let mut app = App::new(source.describe());
    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, runtime, source);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result.map(|_| ExitCode::SUCCESS)
}

// ============================================================================
// Event loop
// ============================================================================
// Render → Input → Update, tant que app.is_running()
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    runtime: &Runtime,
    source: &DataSource,
) -> Result<()> {
    reload(terminal, app, runtime, source)?;

    while app.is_running() {
        terminal.draw(|frame| render(frame, app))?;

        let event = events.next()?;
        if matches!(event, Event::Key(_) if is_reload_event(&event)) {
            app.cancel_quit();
            info!("User requested reload");
            reload(terminal, app, runtime, source)?;
        } else {
            handle_event(app, event);
        }
    }

    Ok(())
}

/// Recharge : surface vide, écran "chargement", pipeline, nouvelle surface
///
/// Le chargement bloque la boucle ; les touches pressées entre-temps restent
/// dans la file de crossterm.
fn reload(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &Runtime,
    source: &DataSource,
) -> Result<()> {
    app.start_loading();
    terminal.draw(|frame| render(frame, app))?;

    let mut surface = MemorySurface::dashboard();
    let snapshot = runtime.block_on(pipeline::run(source, &mut surface));
    app.finish_loading(surface, snapshot.map(|s| s.loaded_at()));

    debug!(charts = app.chart_count(), "Reload finished");
    Ok(())
}

/// Gère un événement (hors rechargement)
fn handle_event(app: &mut App, event: Event) {
    match event {
        // 'q' : quit confirmation two-step
        Event::Key(_) if is_quit_event(&event) => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        Event::Key(_) if is_escape_event(&event) => {
            app.cancel_quit();
        }

        Event::Key(_) if is_next_chart_event(&event) => {
            app.cancel_quit();
            app.next_chart();
            debug!(chart = app.selected_chart, "User moved to next chart");
        }

        Event::Key(_) if is_previous_chart_event(&event) => {
            app.cancel_quit();
            app.previous_chart();
            debug!(chart = app.selected_chart, "User moved to previous chart");
        }

        Event::Key(_) => {
            // Toute autre touche : annule la confirmation si active
            app.cancel_quit();
        }

        Event::Tick => {}
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================

/// Configure le terminal en mode TUI (raw mode + alternate screen)
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    terminal.show_cursor()?;

    Ok(())
}
