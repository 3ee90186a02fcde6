//! Command-line configuration.

use lispy_parse::GRAMMAR;
use thiserror::Error;

pub const DEFAULT_PROMPT: &str = "lispy> ";

/// Settings for one REPL session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// Print the version banner before the first prompt.
    pub banner: bool,
    /// Print each line's parse tree before its result.
    pub dump_tree: bool,
    /// Lines given with `-e`. When non-empty they are evaluated in order and
    /// the session ends without reading input.
    pub expressions: Vec<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_owned(),
            banner: true,
            dump_tree: false,
            expressions: Vec::new(),
        }
    }
}

impl ReplConfig {
    /// Whether this session evaluates `-e` lines instead of reading input.
    pub fn is_batch(&self) -> bool {
        !self.expressions.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(ReplConfig),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing value for `{0}`")]
    MissingValue(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse command-line arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command, ConfigError> {
    let mut config = ReplConfig::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--no-banner" => config.banner = false,
            "--dump-tree" => config.dump_tree = true,
            "-e" | "--eval" => {
                let expr = iter
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                config.expressions.push(expr.clone());
            }
            "--prompt" => {
                let prompt = iter
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                config.prompt.clone_from(prompt);
            }
            other => {
                if let Some(prompt) = other.strip_prefix("--prompt=") {
                    config.prompt = prompt.to_owned();
                } else if other.starts_with('-') && other.len() > 1 {
                    return Err(ConfigError::UnknownOption(other.to_owned()));
                } else {
                    return Err(ConfigError::UnexpectedArgument(other.to_owned()));
                }
            }
        }
    }

    Ok(Command::Run(config))
}

pub fn usage() -> String {
    format!(
        "\
Usage: lispy [options]

Options:
  -e, --eval <expr>   Evaluate <expr>, print the result, and exit (repeatable)
  --no-banner         Skip the version banner
  --dump-tree         Print the parse tree of each line before its result
  --prompt <text>     Prompt shown before each line (default: \"{DEFAULT_PROMPT}\")
  -h, --help          Show this help
  -V, --version       Show the version

Set RUST_LOG (e.g. RUST_LOG=lispy_eval=trace) to trace evaluation.

Grammar:
{GRAMMAR}
"
    )
}
