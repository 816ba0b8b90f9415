mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use forklift_core::warehouse::{Command, Outcome, Warehouse};
use log::{info, warn};
use ratatui::{
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
    widgets::*,
};
use render::{YardWidget, render_status};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::{
    fs::File,
    io::{self, Stdout},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

/// Frames per second the main loop is capped at.
const FPS: u32 = 60;

#[derive(Parser, Debug)]
#[command(version, about = "Drive a forklift around a freight yard", long_about = None)]
struct Args {
    /// Seed for the supply area rolls; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// File the log is written to
    #[arg(long, value_name = "LOG_FILE", default_value = "forklift.log")]
    log_file: PathBuf,
}

struct App {
    /// The yard being played.
    warehouse: Warehouse,
    /// Result of the most recent command, shown in the status bar.
    last_outcome: Option<Outcome>,
    /// Flag to control the main loop.
    should_quit: bool,
}

impl App {
    fn new(seed: Option<u64>) -> Self {
        let warehouse = match seed {
            Some(seed) => Warehouse::with_seed(seed),
            None => Warehouse::new(),
        };
        App {
            warehouse,
            last_outcome: None,
            should_quit: false,
        }
    }

    /// Applies one command to the yard.
    fn handle(&mut self, command: Command) {
        let outcome = self.warehouse.apply(command);
        if outcome == Outcome::Quit {
            self.should_quit = true;
        }
        self.last_outcome = Some(outcome);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file.
    if let Err(err) = init_logging(&args.log_file) {
        eprintln!("Logging disabled: {:#}", err);
    }
    info!("Forklift yard starting, seed: {:?}", args.seed);

    let mut app = App::new(args.seed);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &result {
        warn!("Main loop failed: {:#}", err);
    }
    info!("Forklift yard shutting down");
    result
}

/// Installs a debug-level file logger writing to `path`.
fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, log_config, log_file)
        .context("cannot install logger")?;
    Ok(())
}

/// Configures the terminal for TUI interaction.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the frame loop: drain input, draw once, wait out the frame.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let frame_time = Duration::from_secs(1) / FPS;

    while !app.should_quit {
        let frame_start = Instant::now();

        while !app.should_quit && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = input::command_for(key) {
                    app.handle(command);
                }
            }
        }

        terminal.draw(|f| ui(f, app))?;

        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
    Ok(())
}

/// Renders the user interface.
fn ui(frame: &mut Frame, app: &App) {
    let yard = YardWidget::new(&app.warehouse);
    let (yard_width, yard_height) = yard.size();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(yard_height + 2), // Yard plus border
            Constraint::Length(3),               // Status
            Constraint::Length(1),               // Help
            Constraint::Min(0),
        ])
        .split(frame.area());

    let yard_block = Block::default()
        .title("Forklift Yard")
        .borders(Borders::ALL);
    let yard_area = Rect {
        width: (yard_width + 2).min(main_layout[0].width),
        ..main_layout[0]
    };
    let inner = yard_block.inner(yard_area);
    frame.render_widget(yard_block, yard_area);
    frame.render_widget(yard, inner);

    render_status(frame, main_layout[1], &app.warehouse, app.last_outcome);

    let help_text = Paragraph::new("Arrows: move  Space: pick up / drop  r/R: restock  q/Esc: quit")
        .alignment(Alignment::Center);
    frame.render_widget(help_text, main_layout[2]);
}
