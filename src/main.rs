use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grid_snake::config::GameConfig;
use grid_snake::error::Result;
use grid_snake::game::Game;
use grid_snake::input::spawn_input_reader;
use grid_snake::logging;
use grid_snake::session::{GameSession, spawn_ticker};
use grid_snake::terminal_runtime::TerminalScreen;
use tracing::error;

#[derive(Debug, Parser)]
#[command(version, about = "Grid Snake in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Starting snake length.
    #[arg(long)]
    initial_length: Option<usize>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Append tracing output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(length) = self.initial_length {
            config.initial_length = length;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    logging::init(cli.log_file.as_deref())?;
    let game = Game::new(&config)?;

    let mut screen = TerminalScreen::enter()?;

    let tick_interval = config.tick_interval();
    let (handle, mut session) = GameSession::new(game, config);
    session.subscribe(move |board| {
        if let Err(error) = screen.draw(board) {
            error!(%error, "failed to draw frame");
        }
    });

    let input = spawn_input_reader(handle.clone());
    let ticker = spawn_ticker(handle, tick_interval);

    // The drawing observer, and with it the screen, is dropped when `run` returns.
    let _ = session.run();

    if input.join().is_err() {
        error!("input thread panicked");
    }
    if ticker.join().is_err() {
        error!("ticker thread panicked");
    }

    Ok(())
}
