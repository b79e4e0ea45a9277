use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use timeserie::calendar::{EveryDay, days};
use timeserie::{Accumulate, Function, Support, ops};
use timeserie_jsonl::{Series, format, open, parse_day};
use tracing::info;

use crate::config::Config;

pub const USAGE: &str = "\
Usage: timeserie cat <file>...
       timeserie delta <series> <file>...
       timeserie cumulate <series> <file>...
       timeserie sample <series> <from YY-M-D> <end YY-M-D> <file>...";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Cat {
        files: Vec<PathBuf>,
    },
    Delta {
        series: String,
        files: Vec<PathBuf>,
    },
    Cumulate {
        series: String,
        files: Vec<PathBuf>,
    },
    Sample {
        series: String,
        from: String,
        end: String,
        files: Vec<PathBuf>,
    },
}

impl Command {
    /// Parses the arguments following the program name. `None` on misuse.
    pub fn parse(args: &[String]) -> Option<Command> {
        let (name, rest) = args.split_first()?;
        let files = |paths: &[String]| -> Option<Vec<PathBuf>> {
            (!paths.is_empty()).then(|| paths.iter().map(PathBuf::from).collect())
        };
        match (name.as_str(), rest) {
            ("cat", paths) => Some(Command::Cat {
                files: files(paths)?,
            }),
            ("delta", [series, paths @ ..]) => Some(Command::Delta {
                series: series.clone(),
                files: files(paths)?,
            }),
            ("cumulate", [series, paths @ ..]) => Some(Command::Cumulate {
                series: series.clone(),
                files: files(paths)?,
            }),
            ("sample", [series, from, end, paths @ ..]) => Some(Command::Sample {
                series: series.clone(),
                from: from.clone(),
                end: end.clone(),
                files: files(paths)?,
            }),
            _ => None,
        }
    }

    pub fn run(&self, config: &Config, out: &mut impl Write) -> Result<()> {
        match self {
            Command::Cat { files } => {
                let dict = load(files)?;
                format(out, &dict)?;
            }
            Command::Delta { series, files } => {
                let dict = load(files)?;
                let delta = lookup(&dict, series)?.delta();
                emit(out, series, delta)?;
            }
            Command::Cumulate { series, files } => {
                let dict = load(files)?;
                let total = lookup(&dict, series)?.scan(0.0, &Accumulate);
                emit(out, series, total)?;
            }
            Command::Sample {
                series,
                from,
                end,
                files,
            } => {
                let from = parse_day(from).ok_or_else(|| anyhow!("invalid start day {from:?}"))?;
                let end = parse_day(end).ok_or_else(|| anyhow!("invalid end day {end:?}"))?;
                let dict = load(files)?;
                let f = Function::new(lookup(&dict, series)?.clone(), config.sample_mode);
                let grid = days(from, end, &EveryDay)?;
                info!(series, days = grid.len(), mode = ?config.sample_mode, "sampling");
                emit(out, series, ops::sample(&grid, &f).into_support())?;
            }
        }
        Ok(())
    }
}

fn load(files: &[PathBuf]) -> Result<Series> {
    let mut dict = Series::new();
    open(&mut dict, files)?;
    info!(files = files.len(), series = dict.len(), "loaded");
    Ok(dict)
}

fn lookup<'a>(dict: &'a Series, series: &str) -> Result<&'a Support> {
    dict.get(series)
        .with_context(|| format!("no series named {series:?} in the input"))
}

fn emit(out: &mut impl Write, series: &str, support: Support) -> Result<()> {
    let dict = Series::from([(series.to_string(), support)]);
    format(out, &dict)?;
    Ok(())
}
