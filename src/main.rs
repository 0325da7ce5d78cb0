use anyhow::{Context, Result, anyhow};
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::{GameConfig, GameEngine};
use snake_arcade::session::Session;
use snake_arcade::storage::{DEFAULT_HIGH_SCORE_FILE, FileHighScoreStore};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Grid snake with menus and a saved high score")]
struct Cli {
    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    /// Where the high score is kept
    #[arg(long, default_value = DEFAULT_HIGH_SCORE_FILE)]
    high_score_file: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }

        config
            .validate()
            .map_err(|err| anyhow!("Invalid game configuration: {err}"))?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse config {:?}", path))
}

/// The terminal belongs to the game, so logs only go to a file when asked
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {:?}", log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        init_tracing(log_file)?;
    }

    let config = cli.game_config()?;

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };
    let store = FileHighScoreStore::new(&cli.high_score_file);

    let mut app = App::new(Session::with_engine(engine, store));
    app.run().await
}
