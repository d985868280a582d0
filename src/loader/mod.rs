//! Timer file loading
//!
//! Reads a timer file once at startup and builds the registry from it.

pub mod error;
pub mod parser;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, info};

use crate::state::{Registry, MAX_TIMERS};

pub use error::{LoadError, ParseError};
pub use parser::{parse_line, Units, MAX_NAME_LEN};

/// Load every timer defined in `path` into a registry
pub fn load_registry(path: &Path, units: Units) -> Result<Registry, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let registry = read_registry(BufReader::new(file), path, units)?;
    info!(
        path = %path.display(),
        count = registry.len(),
        %units,
        "timer file loaded"
    );
    Ok(registry)
}

/// Build a registry from any line source; `path` is only used for error context
pub fn read_registry<R: BufRead>(reader: R, path: &Path, units: Units) -> Result<Registry, LoadError> {
    let mut timers = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;

        let parsed = parse_line(&line, units).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            content: line.clone(),
            source,
        })?;

        if let Some(timer) = parsed {
            debug!(line = line_no, name = timer.name(), "parsed timer");
            timers.push(timer);
            // One past capacity is enough to report the overflow.
            if timers.len() > MAX_TIMERS {
                break;
            }
        }
    }

    Registry::new(timers).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}
