use arcade::app::App;
use arcade::config::{self, ArcadeConfig};
use arcade::input::map_key;
use arcade::{logging, ui};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("arcade {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arcade - Tic-Tac-Toe and Connect Four against the computer\n");
                println!("Usage: arcade [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Config: {}", ArcadeConfig::default_path().display());
                println!(
                    "Log:    {} (filter via {})",
                    config::log_path().display(),
                    logging::LOG_ENV
                );
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = logging::init(&config::log_path()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let settings = ArcadeConfig::load_or_default(&ArcadeConfig::default_path());
    let tick_interval = Duration::from_millis(settings.tick_rate_ms);
    let mut app = App::new(settings);
    info!("arcade started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, tick_interval);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        warn!(error = %e, "terminal loop failed");
    }
    info!("arcade exited");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                app.handle_input(map_key(key_event));
            }
        }

        if last_tick.elapsed() >= tick_interval {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
