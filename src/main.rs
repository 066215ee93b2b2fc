use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Write},
    path::PathBuf,
    time::Duration,
};
use tracing::info;
use typemaster::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    input_policy::CharPolicy,
    keymap, logging,
    passage::{load_levels, BundledPassages, DirPassageSource},
    runtime::{Clock, CrosstermEventSource, FixedTicker, Frame, MonotonicClock, Runner},
    session::{Session, SessionSettings},
};

const TICK_RATE_MS: u64 = 50;

/// level-based typing speed trainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type three passages of increasing length against the clock. Each level reports words per minute, accuracy and time taken; the final screen sums up the run."
)]
pub struct Cli {
    /// directory holding level1.txt, level2.txt and level3.txt (bundled passages otherwise)
    #[clap(short = 'p', long)]
    passages: Option<PathBuf>,

    /// config file to read instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// only accept printable ASCII characters while typing
    #[clap(long)]
    ascii_only: bool,

    /// seconds of countdown before each level
    #[clap(long)]
    countdown: Option<u32>,

    /// write the effective configuration to the config file and exit
    #[clap(long)]
    write_config: bool,
}

impl Cli {
    /// Command line flags take precedence over the config file
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(dir) = &self.passages {
            cfg.passage_dir = Some(dir.clone());
        }
        if self.ascii_only {
            cfg.input_filter = CharPolicy::PrintableAscii;
        }
        if let Some(secs) = self.countdown {
            cfg.countdown_secs = secs;
        }
        cfg
    }

    fn config_store(&self) -> FileConfigStore {
        self.config
            .as_ref()
            .map(FileConfigStore::with_path)
            .unwrap_or_default()
    }
}

fn build_session(cfg: &Config) -> Session {
    let levels = match &cfg.passage_dir {
        Some(dir) => load_levels(&DirPassageSource::new(dir), &cfg.time_limits),
        None => load_levels(&BundledPassages, &cfg.time_limits),
    };
    Session::new(levels, SessionSettings::from(cfg))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&AppDirs::log_dir());

    let store = cli.config_store();
    let config = cli.apply(store.load());

    if cli.write_config {
        store.save(&config)?;
        println!("wrote {}", store.path().display());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut session = build_session(&config);
    info!(levels = session.level_count(), "session ready");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = start_tui(&mut terminal, &mut session, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let clock = MonotonicClock::new();
    let mut model = session.update(&[], clock.now());

    loop {
        terminal.draw(|f| f.render_widget(&model, f.area()))?;

        let frame = runner.next_frame();
        redraw_on_resize(terminal, &frame)?;
        let (events, quit) = keymap::translate_batch(&frame.keys, model.accepts_text());
        if quit {
            info!(phase = %model.phase(), "quit");
            break;
        }

        model = session.update(&events, clock.now());

        if config.rings_bell(&model.cues) {
            let mut out = io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Wipes the screen after a resize so the next draw repaints every cell.
fn redraw_on_resize<B: Backend>(terminal: &mut Terminal<B>, frame: &Frame) -> io::Result<()> {
    if frame.resized {
        terminal.clear()?;
    }
    Ok(())
}
