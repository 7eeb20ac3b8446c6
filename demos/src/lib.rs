//! Shared setup for the `maze` demo: command-line arguments, the optional
//! TOML configuration file, and the generate → solve → render pipeline.

use std::fmt;
use std::fs;

use mazer_core::{GridError, Location};
use mazer_gen::{DEFAULT_SPARSENESS, MazeConfig};
use mazer_paths::{Solution, Solver, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLUMNS: usize = 30;

/// Config file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_PATH: &str = "maze.toml";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Parsed command-line arguments. Unset options fall back to the config
/// file, then to built-in defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Args {
    pub config_path: Option<String>,
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub sparseness: Option<f64>,
    pub seed: Option<u64>,
    pub strategy: Option<Strategy>,
    pub help: bool,
}

/// A bad command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    Unknown(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(a) => write!(f, "unknown argument: {a}"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value for {flag}: {value}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut result = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => result.help = true,
            "--dfs" => result.strategy = Some(Strategy::DepthFirst),
            "-c" | "--config" => result.config_path = Some(value(&arg, iter.next())?),
            "-r" | "--rows" => result.rows = Some(parsed(&arg, iter.next())?),
            "-C" | "--columns" => result.columns = Some(parsed(&arg, iter.next())?),
            "-s" | "--sparseness" => result.sparseness = Some(parsed(&arg, iter.next())?),
            "--seed" => result.seed = Some(parsed(&arg, iter.next())?),
            "--strategy" => result.strategy = Some(parsed(&arg, iter.next())?),
            _ => return Err(ArgsError::Unknown(arg.clone())),
        }
    }

    Ok(result)
}

fn value(flag: &str, next: Option<String>) -> Result<String, ArgsError> {
    next.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn parsed<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, ArgsError> {
    let v = value(flag, next)?;
    v.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value: v,
    })
}

pub fn print_help() {
    println!("maze - generate a random maze and solve it");
    println!();
    println!("USAGE:");
    println!("    maze [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>       Configuration file (default: {DEFAULT_CONFIG_PATH})");
    println!("    -r, --rows <N>            Number of rows (default: {DEFAULT_ROWS})");
    println!("    -C, --columns <N>         Number of columns (default: {DEFAULT_COLUMNS})");
    println!("    -s, --sparseness <P>      Probability a cell is blocked (default: {DEFAULT_SPARSENESS})");
    println!("        --seed <N>            Random seed (default: random, logged)");
    println!("        --strategy <bfs|dfs>  Search strategy (default: bfs)");
    println!("        --dfs                 Same as --strategy dfs");
    println!("    -h, --help                Print help information");
    println!();
    println!("Set RUST_LOG=debug for search statistics.");
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

/// Contents of the TOML configuration file. Every key is optional.
///
/// ```toml
/// rows = 8
/// columns = 40
/// sparseness = 0.2
/// seed = 7
/// start = [0, 0]
/// goal = [7, 39]
/// strategy = "dfs"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub sparseness: Option<f64>,
    pub seed: Option<u64>,
    pub start: Option<[usize; 2]>,
    pub goal: Option<[usize; 2]>,
    pub strategy: Option<String>,
}

/// Failure to load a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Strategy(mazer_paths::ParseStrategyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Parse(e) => write!(f, "cannot parse config: {e}"),
            Self::Strategy(e) => write!(f, "bad config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Strategy(e) => Some(e),
        }
    }
}

impl FileConfig {
    /// Parse TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(text).map_err(ConfigError::Parse)?;
        if let Some(s) = &cfg.strategy {
            s.parse::<Strategy>().map_err(ConfigError::Strategy)?;
        }
        Ok(cfg)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&text)
    }
}

/// Load the configuration named on the command line, or the default file if
/// it exists. Problems are logged and yield an empty configuration.
pub fn load_config(args: &Args) -> FileConfig {
    match &args.config_path {
        Some(path) => match FileConfig::load(path) {
            Ok(cfg) => {
                log::info!("Loaded config from {path}");
                cfg
            }
            Err(e) => {
                log::warn!("Failed to load config {path}: {e}");
                FileConfig::default()
            }
        },
        None => match FileConfig::load(DEFAULT_CONFIG_PATH) {
            Ok(cfg) => {
                log::info!("Loaded config from {DEFAULT_CONFIG_PATH}");
                cfg
            }
            Err(ConfigError::Io(_)) => FileConfig::default(),
            Err(e) => {
                log::warn!("Failed to load config {DEFAULT_CONFIG_PATH}: {e}");
                FileConfig::default()
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub maze: MazeConfig,
    pub seed: Option<u64>,
    pub strategy: Strategy,
}

impl Settings {
    /// Merge command-line arguments over the file configuration over the
    /// defaults. Start and goal default to opposite corners of the final
    /// dimensions.
    pub fn resolve(args: &Args, file: &FileConfig) -> Self {
        let rows = args.rows.or(file.rows).unwrap_or(DEFAULT_ROWS);
        let columns = args.columns.or(file.columns).unwrap_or(DEFAULT_COLUMNS);

        let mut maze = MazeConfig::new(rows, columns);
        if let Some(s) = args.sparseness.or(file.sparseness) {
            maze = maze.with_sparseness(s);
        }
        if let Some([r, c]) = file.start {
            maze = maze.with_start(Location::new(r, c));
        }
        if let Some([r, c]) = file.goal {
            maze = maze.with_goal(Location::new(r, c));
        }

        // Invalid names were rejected when the file was loaded.
        let file_strategy = file.strategy.as_deref().and_then(|s| s.parse().ok());
        let strategy = args.strategy.or(file_strategy).unwrap_or_default();

        Self {
            maze,
            seed: args.seed.or(file.seed),
            strategy,
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Result of one demo run.
#[derive(Debug, Clone)]
pub struct Report {
    pub seed: u64,
    pub solution: Solution,
    /// The maze as text, with the path drawn in when one was found.
    pub rendered: String,
}

/// Generate a maze from `settings`, solve it, and render the result.
///
/// `seed` is used when the settings carry none.
pub fn run(settings: &Settings, seed: u64) -> Result<Report, GridError> {
    let seed = settings.seed.unwrap_or(seed);
    let mut grid = mazer_gen::generate(&settings.maze, StdRng::seed_from_u64(seed))?;
    let solution = Solver::new(grid.rows(), grid.columns()).solve_with(&grid, settings.strategy);
    if let Some(path) = solution.path() {
        grid.stamp_path(path);
    }
    Ok(Report {
        seed,
        solution,
        rendered: grid.to_string(),
    })
}
