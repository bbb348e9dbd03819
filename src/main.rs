//! Catview - A terminal-based catalog viewer.

use anyhow::{bail, Context, Result};
use catview::app::{App, Theme};
use catview::catalog::{to_csv, CatalogController, Criteria, LoadOutcome, SortKey};
use catview::config::ViewerConfig;
use catview::ui;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "catview")]
#[command(about = "A terminal-based catalog viewer", long_about = None)]
struct Args {
    /// Path to the catalog file or directory to open
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Load the built-in demo catalog instead of a file
    #[arg(long, conflicts_with = "file")]
    demo: bool,

    /// Initial sort order (title-asc, title-desc, year-asc, year-desc, rating-asc, rating-desc)
    #[arg(long)]
    sort: Option<SortKey>,

    /// Initial free-text search
    #[arg(long)]
    query: Option<String>,

    /// Initial category (type) filter
    #[arg(long)]
    category: Option<String>,

    /// Initial genre filter
    #[arg(long)]
    genre: Option<String>,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Validate the catalog and exit
    #[arg(long, conflicts_with = "print")]
    check: bool,

    /// Print the filtered and sorted view as CSV and exit
    #[arg(long)]
    print: bool,
}

impl Args {
    fn criteria(&self) -> Criteria {
        Criteria {
            category: self.category.clone(),
            genre: self.genre.clone(),
            query: self.query.clone().unwrap_or_default(),
            sort: self.sort.unwrap_or_default(),
        }
    }

    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            start_path: self.file.clone(),
            load_demo: self.demo,
            initial_criteria: self.criteria(),
            theme: if self.light {
                Theme::GruvboxLight
            } else {
                Theme::GruvboxDark
            },
            ..ViewerConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Catview");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    if args.check || args.print {
        return run_headless(&args);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.viewer_config());
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Catview exited");

    Ok(())
}

/// `--check` and `--print`: load, optionally query, write to stdout.
fn run_headless(args: &Args) -> Result<()> {
    let mut catalog = CatalogController::new();

    let outcome = if args.demo {
        catalog.load_demo()
    } else {
        match &args.file {
            Some(path) if path.is_file() => catalog.load_file(path),
            Some(path) => bail!("Not a catalog file: {}", path.display()),
            None => bail!("--check and --print need a catalog file or --demo"),
        }
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };

    if args.check {
        match outcome {
            LoadOutcome::Loaded(count) => println!("OK: {} items", count),
            LoadOutcome::Empty => println!("OK: 0 items"),
        }
        return Ok(());
    }

    catalog.set_criteria(args.criteria());
    print!("{}", to_csv(catalog.view()));
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Details overlay - handle separately
        if app.details_visible {
            handle_details_key(&mut app, key);
            continue;
        }

        // Search mode - handle separately
        if app.query_input.is_active() {
            handle_search_key(&mut app, key);
            continue;
        }

        // File browser mode
        if app.file_browser_mode {
            if handle_browser_key(&mut app, key) {
                return Ok(());
            }
            continue;
        }

        // Normal mode
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Navigation
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.cursor_up(1);
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.cursor_down(1);
            },
            (KeyModifiers::CONTROL, KeyCode::Char('f')) | (_, KeyCode::PageDown) => {
                app.cursor_down(15);
            },
            (KeyModifiers::CONTROL, KeyCode::Char('b')) | (_, KeyCode::PageUp) => {
                app.cursor_up(15);
            },
            (_, KeyCode::Home) => app.goto_first(),
            (_, KeyCode::End) | (_, KeyCode::Char('G')) => app.goto_last(),
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.goto_first();
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            },

            // Details
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.open_details();
            },

            // Search and filters
            (_, KeyCode::Char('/')) => app.start_search(),
            (KeyModifiers::NONE, KeyCode::Char('t')) => app.cycle_category(),
            (KeyModifiers::NONE, KeyCode::Char('e')) => app.cycle_genre(),
            (KeyModifiers::NONE, KeyCode::Char('s')) => app.cycle_sort(true),
            (_, KeyCode::Char('S')) => app.cycle_sort(false),
            (KeyModifiers::NONE, KeyCode::Char('r')) => app.reset_filters(),

            // Loading
            (KeyModifiers::NONE, KeyCode::Char('o')) => app.open_file_browser(),
            (KeyModifiers::NONE, KeyCode::Char('d')) => app.load_demo(),

            // Clipboard
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_selected(),
            (KeyModifiers::NONE, KeyCode::Char('c')) => app.copy_view(),

            // Features
            (_, KeyCode::Char('T')) => app.cycle_theme(),
            (_, KeyCode::Char('?')) => app.show_help(),

            _ => {},
        }
        pending_g = false;
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_overlay(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(1),
        _ => {},
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => app.search_submit(),
        (_, KeyCode::Esc) => app.search_cancel(),
        (_, KeyCode::Backspace) => app.search_backspace(),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.search_clear(),
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input(c);
        },
        _ => {},
    }
}

/// Returns true when the user asked to quit.
fn handle_browser_key(app: &mut App, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => return true,

        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.browser_up();
        },
        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            app.browser_down();
        },

        // Select/Open
        (KeyModifiers::NONE, KeyCode::Enter)
        | (KeyModifiers::NONE, KeyCode::Char('l'))
        | (KeyModifiers::NONE, KeyCode::Right) => {
            app.browser_select();
        },

        // Go to parent directory
        (KeyModifiers::NONE, KeyCode::Char('h')) | (KeyModifiers::NONE, KeyCode::Left) => {
            app.browser_parent();
        },

        (_, KeyCode::Char('.')) => app.toggle_hidden(),
        (KeyModifiers::NONE, KeyCode::Char('a')) => app.toggle_show_all(),
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            app.load_demo();
            app.close_file_browser();
        },
        (KeyModifiers::NONE, KeyCode::Esc) => app.close_file_browser(),

        _ => {},
    }
    false
}
