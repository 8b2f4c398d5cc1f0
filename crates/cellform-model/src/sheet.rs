//! Fixed-size spreadsheet model

use crate::{CellName, Model, ModelError};
use serde::Deserialize;

/// Dimensions of a [`Sheet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Number of rows (`1..=rows`)
    pub rows: u32,
    /// Number of columns (`A..`)
    pub columns: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            columns: 26,
        }
    }
}

/// A grid of cells addressed by A1-style names
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    config: SheetConfig,
}

impl Sheet {
    /// Create a sheet with the given dimensions
    pub fn new(config: SheetConfig) -> Result<Self, ModelError> {
        if config.rows == 0 || config.columns == 0 {
            return Err(ModelError::InvalidConfig(format!(
                "sheet must have at least one row and one column, got {}x{}",
                config.rows, config.columns
            )));
        }
        Ok(Self { config })
    }

    /// Load sheet dimensions from a JSON object such as `{"rows": 50}`
    ///
    /// Missing fields keep their default value.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let config: SheetConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    pub fn config(&self) -> SheetConfig {
        self.config
    }

    /// Resolve `name` to a cell inside this sheet
    pub fn cell(&self, name: &str) -> Option<CellName> {
        let cell: CellName = name.parse().ok()?;
        (cell.column() <= self.config.columns && cell.row() <= self.config.rows).then_some(cell)
    }
}

impl Model for Sheet {
    fn is_valid_name(&self, name: &str) -> bool {
        self.cell(name).is_some()
    }

    fn is_valid_range(&self, start: &str, end: &str) -> bool {
        match (self.cell(start), self.cell(end)) {
            (Some(start), Some(end)) => start.spans_to(&end),
            _ => false,
        }
    }
}
