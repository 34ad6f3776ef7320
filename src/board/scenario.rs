//! Literal board scenarios
//!
//! A scenario is one string per row, top to bottom. `X`/`O` are pieces,
//! `-`, `.` or a space is empty, and a single `#` marks the empty cell a
//! test expects the agent to pick.

use super::{Cell, Grid};
use crate::{Error, Result};

pub const MARKER: char = '#';

/// A parsed scenario: the grid plus the optional expected-move marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub grid: Grid,
    pub marker: Option<(usize, usize)>,
}

impl Scenario {
    /// Parse rows into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScenario`] for an empty scenario, rows of
    /// unequal width, unknown characters or more than one marker.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidScenario {
                row: 0,
                line: String::new(),
                reason: "scenario has no rows".to_string(),
            });
        };
        let columns = first.as_ref().chars().count();
        if columns == 0 {
            return Err(Error::InvalidScenario {
                row: 0,
                line: String::new(),
                reason: "scenario rows are empty".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(rows.len() * columns);
        let mut marker = None;
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let invalid = |reason: String| Error::InvalidScenario {
                row,
                line: line.to_string(),
                reason,
            };
            if line.chars().count() != columns {
                return Err(invalid(format!("expected {columns} cells")));
            }
            for (column, c) in line.chars().enumerate() {
                if c == MARKER {
                    if marker.is_some() {
                        return Err(invalid("more than one marker".to_string()));
                    }
                    marker = Some((row, column));
                    cells.push(Cell::Empty);
                    continue;
                }
                let cell = Cell::from_char(c)
                    .ok_or_else(|| invalid(format!("unknown cell character '{c}'")))?;
                cells.push(cell);
            }
        }

        Ok(Scenario {
            grid: Grid::from_cells(rows.len(), columns, cells),
            marker,
        })
    }
}
