// args.rs - Command-line flags for the terminal host

use life_core::{ConfigError, SimConfig};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument {0:?}")]
    Unknown(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    pub config: SimConfig,
    /// Stop after this many ticks; run until interrupted when `None`.
    pub generations: Option<u64>,
    /// Print only status lines instead of full frames.
    pub quiet: bool,
}

pub fn parse<I>(args: I) -> Result<Options, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = SimConfig::default();
    let mut generations = None;
    let mut quiet = false;

    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--quiet" | "-q" => quiet = true,
            "--width" => config.width = value(&flag, args.next())?,
            "--height" => config.height = value(&flag, args.next())?,
            "--fps" => config.ticks_per_second = value(&flag, args.next())?,
            "--seed" => config.seed = Some(value(&flag, args.next())?),
            "--generations" => generations = Some(value(&flag, args.next())?),
            _ => return Err(ArgsError::Unknown(flag)),
        }
    }

    Ok(Options {
        config: config.validated()?,
        generations,
        quiet,
    })
}

fn value<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> Result<T, ArgsError> {
    let raw = raw.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
    raw.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value: raw,
    })
}
