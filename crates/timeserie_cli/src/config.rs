use anyhow::{Result, bail};
use timeserie::Mode;

pub const MODE_VAR: &str = "TIMESERIE_MODE";

/// Settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mode the `sample` command reads the series under.
    pub sample_mode: Mode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let sample_mode = match std::env::var(MODE_VAR) {
            Ok(s) => parse_mode(&s)?,
            Err(_) => Mode::NullSet,
        };
        Ok(Config { sample_mode })
    }
}

pub fn parse_mode(s: &str) -> Result<Mode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "nullset" => Ok(Mode::NullSet),
        "step" => Ok(Mode::Step),
        other => bail!("{MODE_VAR} must be 'nullset' or 'step', got {other:?}"),
    }
}
