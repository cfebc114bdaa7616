mod app;
mod domain;
mod input;
mod logging;
mod mood;
mod notepad;
mod notifications;
mod persistence;
mod tasks;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    ensure_data_dir, init_local_data_dir, load_settings, save_settings, settings_file, FileStore,
    MemoryStore, Settings, Store,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Instant;
use tasks::TaskList;

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "A terminal focus widget: pomodoro timer, task list and scratchpad", long_about = None)]
struct Cli {
    /// Focus session length in minutes (overrides settings.json)
    #[arg(long, global = true)]
    focus: Option<u32>,
    /// Short break length in minutes (overrides settings.json)
    #[arg(long, global = true)]
    short_break: Option<u32>,
    /// Long break length in minutes (overrides settings.json)
    #[arg(long, global = true)]
    long_break: Option<u32>,
    /// Keep tasks and notes in memory only; nothing is saved
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .focusflow directory in the current directory
    Init,
    /// Print the saved task list and progress
    Tasks,
}

impl Cli {
    /// Settings with the command-line duration overrides applied and checked
    fn resolve_settings(&self, base: Settings) -> Result<Settings> {
        let settings = base.with_overrides(self.focus, self.short_break, self.long_break);
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init) => {
            let settings = cli.resolve_settings(Settings::default())?;
            let data_dir = init_local_data_dir()?;
            save_settings(settings_file(&data_dir), &settings)?;
            println!("Initialized focusflow directory: {}", data_dir.display());
            println!();
            println!("FocusFlow will now keep tasks and notes in this directory.");
            println!("Run 'focusflow' to start.");
            Ok(())
        }
        Some(Commands::Tasks) => print_tasks(),
        None => {
            let data_dir = ensure_data_dir()?;
            let settings = cli.resolve_settings(load_settings(settings_file(&data_dir))?)?;
            run_tui(&data_dir, settings, cli.ephemeral)
        }
    }
}

fn print_tasks() -> Result<()> {
    let data_dir = ensure_data_dir()?;
    let store = FileStore::new(&data_dir);
    let list = TaskList::load_all(&store);

    if list.is_empty() {
        println!("No tasks yet.");
    }
    for task in list.tasks() {
        let check = if task.completed { "x" } else { " " };
        println!("[{}] {}", check, task.text);
    }
    println!();
    println!("{}", list.progress().label());
    Ok(())
}

fn run_tui(data_dir: &Path, settings: Settings, ephemeral: bool) -> Result<()> {
    logging::init_tracing(data_dir)?;
    tracing::info!(data_dir = %data_dir.display(), ephemeral, "starting focusflow");

    let store: Box<dyn Store> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(data_dir))
    };
    let mut app = AppState::new(settings, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "focusflow stopped with an error");
        eprintln!("Error: {}", err);
    }
    tracing::info!("focusflow exited");

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
