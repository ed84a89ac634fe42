//! # chatrecap-config
//!
//! **Tier 4 (Configuration)**
//!
//! CLI arguments, the `chatrecap.toml` schema, and the merge of the two into
//! effective [`Settings`].
//!
//! ## What belongs here
//! * Clap `Parser` struct
//! * Configuration file struct definitions (Serde)
//! * Defaults and precedence rules
//!
//! ## What does NOT belong here
//! * Loading archives or running analysis
//! * Interpreting offsets (see `chatrecap-analysis-util::Clock`)

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Archive read when no input is given.
pub const DEFAULT_INPUT: &str = "conversation.json";
/// Report written when no output is given.
pub const DEFAULT_OUTPUT: &str = "summary.json";
/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "chatrecap.toml";

/// `chatrecap` turns an exported chat archive into a year-in-review report.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "chatrecap", version, about, long_about = None)]
pub struct Cli {
    /// Exported archive (JSON array of conversations).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the JSON report.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Config file. Defaults to ./chatrecap.toml when it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// UTC offset for time bucketing: `UTC`, `local`, or `+HH:MM`.
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Skip TF-IDF keyword extraction.
    #[arg(long)]
    pub no_tfidf: bool,

    /// Skip the tokenizer keyword strategy.
    #[arg(long)]
    pub no_tokenizer: bool,

    /// Skip the statistical language detector.
    #[arg(long)]
    pub no_langdetect: bool,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,

    /// Print the report to stdout instead of writing OUTPUT.
    #[arg(long)]
    pub stdout: bool,

    /// Disable the progress spinner.
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose logging (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Root of `chatrecap.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// `UTC`, `local`, or `+HH:MM`.
    pub utc_offset: Option<String>,
    pub pretty: Option<bool>,
    pub backends: BackendsConfig,
}

/// `[backends]` table. Absent keys leave the backend on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendsConfig {
    pub tfidf: Option<bool>,
    pub tokenizer: Option<bool>,
    pub langdetect: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The file named by `--config`, else `chatrecap.toml` in `cwd` if present.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path).map(Some);
        }
        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::from_file(&candidate).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Log verbosity requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Normal,
            (false, 1) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        }
    }

    /// Default `EnvFilter` directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "warn,chatrecap=info",
            Verbosity::Debug => "warn,chatrecap=debug",
            Verbosity::Trace => "warn,chatrecap=trace",
        }
    }
}

/// Which optional backends the run may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendSelection {
    pub tfidf: bool,
    pub tokenizer: bool,
    pub langdetect: bool,
}

/// Effective settings after applying CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Unparsed offset; `None` means UTC.
    pub utc_offset: Option<String>,
    pub pretty: bool,
    pub to_stdout: bool,
    pub progress: bool,
    pub backends: BackendSelection,
    pub verbosity: Verbosity,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: Option<&TomlConfig>) -> Self {
        let file_backends = file.map(|f| &f.backends);
        let backend = |cli_off: bool, pick: fn(&BackendsConfig) -> Option<bool>| {
            !cli_off && file_backends.and_then(pick).unwrap_or(true)
        };

        Self {
            input: cli
                .input
                .clone()
                .or_else(|| file.and_then(|f| f.input.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: cli
                .output
                .clone()
                .or_else(|| file.and_then(|f| f.output.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            utc_offset: cli
                .utc_offset
                .clone()
                .or_else(|| file.and_then(|f| f.utc_offset.clone())),
            pretty: !cli.compact && file.and_then(|f| f.pretty).unwrap_or(true),
            to_stdout: cli.stdout,
            progress: !cli.no_progress,
            backends: BackendSelection {
                tfidf: backend(cli.no_tfidf, |b| b.tfidf),
                tokenizer: backend(cli.no_tokenizer, |b| b.tokenizer),
                langdetect: backend(cli.no_langdetect, |b| b.langdetect),
            },
            verbosity: Verbosity::from_flags(cli.verbose, cli.quiet),
        }
    }
}
