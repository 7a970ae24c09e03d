use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tilegoal::search::constants::DEFAULT_MAX_NODES;
use tilegoal::{
    Board, Difficulty, GameState, GeneratorConfig, Position, TargetGenerator, TileBag,
};

/// Board size dealt when no board is given
const DEFAULT_DIMENSIONS: (usize, usize) = (8, 8);

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Difficulty level as accepted on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum DifficultyLevel {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
}

impl DifficultyLevel {
    pub fn to_difficulty(&self) -> Difficulty {
        match self {
            DifficultyLevel::Level1 => Difficulty::Level1,
            DifficultyLevel::Level2 => Difficulty::Level2,
            DifficultyLevel::Level3 => Difficulty::Level3,
            DifficultyLevel::Level4 => Difficulty::Level4,
            DifficultyLevel::Level5 => Difficulty::Level5,
            DifficultyLevel::Level6 => Difficulty::Level6,
        }
    }
}

/// Tilegoal - Pick a target value for a tile-path arithmetic puzzle
#[derive(Parser, Debug)]
#[command(name = "tilegoal")]
#[command(
    about = "Pick a target value whose rarity among all reachable path values matches a difficulty"
)]
#[command(version)]
pub struct CliArgs {
    /// Board rows separated by '/' or newlines, e.g. "1+2/-3*/4%5"
    #[arg(short, long, conflicts_with = "random")]
    pub board: Option<String>,

    /// Deal a random WIDTHxHEIGHT board from the standard tile bag
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub random: Option<String>,

    /// Difficulty level
    #[arg(short, long, value_enum, default_value = "level1")]
    pub difficulty: DifficultyLevel,

    /// Moves already played, as "x,y;x,y;..."
    #[arg(short, long)]
    pub path: Option<String>,

    /// Seed for dealing and target selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Node budget for the search (0 disables the limit)
    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,

    /// Expand the search tree on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Print the board before the target
    #[arg(long)]
    pub show_board: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub board: Board,
    pub positions: Vec<Position>,
    pub difficulty: Difficulty,
    pub generator: GeneratorConfig,
    pub show_board: bool,
    pub log_level: LogLevel,
}

/// Parse "WIDTHxHEIGHT" into dimensions
pub fn parse_dimensions(text: &str) -> Result<(usize, usize)> {
    let (width, height) = text
        .split_once(['x', 'X'])
        .with_context(|| format!("Expected WIDTHxHEIGHT, got '{}'", text))?;
    let width = width.trim().parse().context("Invalid board width")?;
    let height = height.trim().parse().context("Invalid board height")?;
    Ok((width, height))
}

/// Parse "x,y;x,y" into positions
pub fn parse_positions(text: &str) -> Result<Vec<Position>> {
    text.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<Position> {
            let Some((x, y)) = pair.split_once(',') else {
                bail!("Expected x,y, got '{}'", pair);
            };
            let x = x.trim().parse().with_context(|| format!("Invalid x in '{}'", pair))?;
            let y = y.trim().parse().with_context(|| format!("Invalid y in '{}'", pair))?;
            Ok(Position::new(x, y))
        })
        .collect()
}

fn load_board(args: &CliArgs) -> Result<Board> {
    if let Some(text) = &args.board {
        return Board::parse(text).context("Invalid board");
    }

    let (width, height) = match &args.random {
        Some(dims) => parse_dimensions(dims)?,
        None => DEFAULT_DIMENSIONS,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut bag = TileBag::shuffled(&mut rng);
    Board::deal(width, height, &mut bag).context("Cannot deal board")
}

/// Turn parsed arguments into a validated configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let board = load_board(&args)?;
    let positions = match &args.path {
        Some(text) => parse_positions(text).context("Invalid path")?,
        None => Vec::new(),
    };

    Ok(CliConfig {
        board,
        positions,
        difficulty: args.difficulty.to_difficulty(),
        generator: GeneratorConfig {
            max_nodes: (args.max_nodes > 0).then_some(args.max_nodes),
            parallel: !args.sequential,
            seed: args.seed,
        },
        show_board: args.show_board,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    if config.show_board {
        println!("{}\n", config.board);
    }

    let state = GameState::replay(config.board, &config.positions)
        .context("Starting path is not playable on this board")?;
    let (board, path) = state.into_parts();
    if !path.is_empty() {
        info!("Starting from '{}' = {}", path, path.evaluate());
    }

    let profile = config.difficulty.profile();
    info!(
        "Generating target for {} (depth {}, multiplier x{})",
        config.difficulty,
        profile.depth(),
        profile.multiplier()
    );

    let generator = TargetGenerator::new(config.generator);
    match generator.select_target_value(board, path, &profile) {
        Ok(target) => {
            println!("{}", target);
            Ok(())
        }
        Err(err) if err.is_empty_result() => {
            warn!("No reachable values on this board");
            println!("Unknown.");
            Ok(())
        }
        Err(err) => Err(err).context("Target generation failed"),
    }
}
