use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::config::GameConfig;
use alien_invasion::display::TerminalCanvas;
use alien_invasion::driver::FrameDriver;
use alien_invasion::game::{Flow, Game};
use alien_invasion::high_score::{HighScoreFile, HighScoreStore};
use alien_invasion::input::KeyTracker;

#[derive(Parser)]
#[command(name = "alien_invasion")]
#[command(about = "Shoot down a descending alien fleet in your terminal")]
struct Args {
    /// TOML file overriding the default settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the all-time high score is kept
    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// Log file (the terminal itself is the game screen)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable the developer keys: `p` forces enemy speed, `o` widens shots
    #[arg(long)]
    dev_controls: bool,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("alien_invasion.log"));
    init_logging(&log_path)?;

    let mut config = match &args.config {
        Some(path) => {
            let (cfg, err) = GameConfig::load_or_default(path);
            if let Some(e) = err {
                tracing::warn!("{e}; using defaults");
            }
            cfg
        }
        None => GameConfig::default(),
    };
    if let Some(path) = args.high_score_file {
        config.high_score_path = path;
    }
    config.dev_controls |= args.dev_controls;
    for warning in config.validate() {
        tracing::warn!("config: {warning}");
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without the kitty protocol fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &config, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    keyboard_enhanced: bool,
) -> anyhow::Result<()> {
    let display = &config.display;
    let frame = Duration::from_millis(display.frame_ms.max(1));

    let (columns, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(out, columns, rows, display.cell_width, display.cell_height);
    let (width, height) = canvas.logical_size();

    let store = HighScoreFile::new(config.high_score_path.clone());
    let high_score = store.load();
    tracing::info!(
        "screen {columns}x{rows} cells ({width}x{height} px), high score {high_score} from {}",
        store.path().display()
    );

    let game = Game::new(config.settings.clone(), width, height, high_score)
        .with_dev_controls(config.dev_controls);
    let mut driver = FrameDriver::new(game, store, display.hit_pause_frames());
    let mut keys = KeyTracker::new(display.cell_width, display.cell_height, keyboard_enhanced);

    loop {
        let frame_start = Instant::now();

        // Drain all pending input events (non-blocking)
        let mut events = keys.begin_frame();
        while let Ok(ev) = rx.try_recv() {
            if let Some(input) = keys.translate(ev) {
                events.push(input);
            }
        }

        if driver.tick(events, &mut canvas)? == Flow::Quit {
            tracing::info!("quit requested");
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}
