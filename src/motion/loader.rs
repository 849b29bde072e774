use std::{fs, io, path::Path};

use log::{debug, warn};

use crate::{
    error::{MotionError, Result},
    motion::frame::MotionSeries,
};

/// Start of a comment, either on its own line or trailing the values.
const COMMENT: char = '#';

/// Rectangular numeric table read from a whitespace-delimited text file,
/// stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTable {
    values: Vec<f64>,
    columns: usize,
}

impl ParameterTable {
    /// `(rows, columns)`, `(0, 0)` for a table without rows
    pub fn shape(&self) -> (usize, usize) {
        match self.columns {
            0 => (0, 0),
            columns => (self.values.len() / columns, columns),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.columns.max(1))
    }
}

/// Parse whitespace-separated numbers, one row per line.
///
/// Blank lines and `#` comments are skipped. Every remaining line must hold the
/// same number of values. Text without any such line gives an empty table.
pub fn parse_table(text: &str) -> Result<ParameterTable> {
    let mut values = Vec::new();
    let mut columns = None;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let content = match line.split_once(COMMENT) {
            Some((before, _)) => before,
            None => line,
        };

        let row = content
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    MotionError::parse(line_number, format!("could not parse `{token}` as a number"))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if row.is_empty() {
            continue;
        }

        match columns {
            None => columns = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(MotionError::parse(
                    line_number,
                    format!("expected {expected} columns, found {}", row.len()),
                ));
            }
            Some(_) => {}
        }

        values.extend(row);
    }

    Ok(ParameterTable {
        values,
        columns: columns.unwrap_or(0),
    })
}

/// Read a motion parameter file into a [`ParameterTable`].
pub fn load_table(path: impl AsRef<Path>) -> Result<ParameterTable> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(MotionError::file_not_found(path));
    }

    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => MotionError::file_not_found(path),
        io::ErrorKind::InvalidData => MotionError::parse(0, "file is not valid UTF-8 text"),
        _ => MotionError::Io(err),
    });
    let table = text
        .and_then(|text| parse_table(&text))
        .map_err(|err| err.with_path(path))?;

    let (rows, columns) = table.shape();
    if table.is_empty() {
        warn!("{} contains no motion parameters", path.display());
    }
    debug!("loaded {rows}x{columns} table from {}", path.display());
    Ok(table)
}

/// Read a motion parameter file straight into a [`MotionSeries`].
pub fn load(path: impl AsRef<Path>) -> Result<MotionSeries> {
    let path = path.as_ref();
    let table = load_table(path)?;
    MotionSeries::try_from(&table).map_err(|err| err.with_path(path))
}
