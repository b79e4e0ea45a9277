//! Line-delimited JSON records in and out of named [`Support`]s.
//!
//! Each input line is an object holding a `"on"` day stamp (`YY-M-D`) and any number of
//! numeric attributes; each attribute name is a series. Blank lines are skipped. The first
//! malformed line aborts the load and nothing is added to the target mapping.

mod date;
mod error;

pub use date::{format_day, parse_day};
pub use error::{JsonlError, Result};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use jiff::Timestamp;
use serde_json::Value;
use timeserie::{Function, Mode, Support, iterate};
use tracing::{debug, info};

/// Reserved attribute holding the day stamp.
pub const ATTR_ON: &str = "on";

/// Named series.
pub type Series = BTreeMap<String, Support>;

/// Reads records from `r` into `dict`, creating or extending one series per attribute.
pub fn load(dict: &mut Series, r: impl BufRead) -> Result<()> {
    let mut staged: BTreeMap<String, Vec<(Timestamp, f64)>> = BTreeMap::new();
    let mut records = 0usize;

    for (i, line) in r.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| JsonlError::Read {
            line: line_no,
            source: e,
        })?;
        if line.trim_matches([' ', '\t', '\r']).is_empty() {
            continue;
        }
        let (on, attrs) = parse_record(line_no, &line)?;
        for (name, value) in attrs {
            staged.entry(name).or_default().push((on, value));
        }
        records += 1;
    }

    debug!(records, series = staged.len(), "loaded records");
    for (name, points) in staged {
        dict.entry(name).or_default().extend(points);
    }
    Ok(())
}

/// Loads every file in order into `dict`. Any failure leaves `dict` untouched.
pub fn open<P: AsRef<Path>>(dict: &mut Series, paths: impl IntoIterator<Item = P>) -> Result<()> {
    let mut staged = Series::new();
    for path in paths {
        let path = path.as_ref();
        info!(path = %path.display(), "opening");
        let file = File::open(path).map_err(|e| JsonlError::io(path, e))?;
        load(&mut staged, BufReader::new(file)).map_err(|e| JsonlError::in_file(path, e))?;
    }
    for (name, support) in staged {
        dict.entry(name).or_default().extend(support.values());
    }
    Ok(())
}

/// Writes one record per distinct event time across `dict`, in chronological order.
///
/// A record lists only the series with a point at exactly that time, as
/// `{ "on":"01-1-2", "a":1, "b":2.5}`.
pub fn format(w: &mut impl Write, dict: &Series) -> Result<()> {
    let functions: Vec<Function> = dict
        .values()
        .map(|s| Function::new(s.clone(), Mode::NullSet))
        .collect();
    let refs: Vec<&Function> = functions.iter().collect();
    let names: Vec<String> = dict.keys().map(|k| Value::from(k.as_str()).to_string()).collect();

    let mut lines = 0usize;
    for t in iterate(&refs) {
        write!(w, "{{ \"{ATTR_ON}\":\"{}\"", format_day(t))?;
        for (name, f) in names.iter().zip(&functions) {
            let v = f.eval(t);
            if !v.is_nan() {
                write!(w, ", {name}:{v}")?;
            }
        }
        writeln!(w, "}}")?;
        lines += 1;
    }
    debug!(lines, series = dict.len(), "formatted records");
    Ok(())
}

fn parse_record(line_no: usize, line: &str) -> Result<(Timestamp, Vec<(String, f64)>)> {
    let value: Value = serde_json::from_str(line).map_err(|e| JsonlError::Json {
        line: line_no,
        source: e,
    })?;
    let Value::Object(obj) = value else {
        return Err(JsonlError::record(
            line_no,
            format!("json object is required but got {line:?}"),
        ));
    };

    let on = match obj.get(ATTR_ON) {
        None => {
            return Err(JsonlError::record(
                line_no,
                format!("missing attribute '{ATTR_ON}' with a date: {line:?}"),
            ));
        }
        Some(Value::String(s)) => parse_day(s).ok_or_else(|| {
            JsonlError::record(
                line_no,
                format!("attribute '{ATTR_ON}' must be a YY-M-D date, got {s:?}"),
            )
        })?,
        Some(other) => {
            return Err(JsonlError::record(
                line_no,
                format!("attribute '{ATTR_ON}' must be a string, got {other}"),
            ));
        }
    };

    let mut attrs = Vec::with_capacity(obj.len() - 1);
    for (name, quantity) in obj {
        if name == ATTR_ON {
            continue;
        }
        let Some(v) = quantity.as_f64() else {
            return Err(JsonlError::record(
                line_no,
                format!("attribute {name:?} must be a number, got {quantity}"),
            ));
        };
        attrs.push((name, v));
    }
    Ok((on, attrs))
}
