use std::fs::File;
use std::io;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use bullet_hell::event::{Event, EventHandler};
use bullet_hell::{ui, App, GameConfig};

// The terminal belongs to the game, so logs go to a file
fn init_logging(config: &GameConfig) {
    let path = config.log_path();
    let Ok(file) = File::create(&path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn main() -> io::Result<()> {
    let (config, source) = GameConfig::load();
    init_logging(&config);
    source.log();
    log::info!("Bullet Hell starting, scores at {}", config.scores_path().display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Key release events where the terminal supports them; others fall back
    // to key-repeat timing
    let keyboard_enhanced = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let event_handler = EventHandler::new(config.frame_ms);
    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    log::info!("Bullet Hell exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Click(column, row) => app.on_click(column, row),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
