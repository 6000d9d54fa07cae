//! Simulation tuning
//!
//! All probabilities are per tick, per cell. Fields missing from a JSON
//! document fall back to the defaults below, so hosts only send what they
//! want to change.

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Upper bound on `cols * rows` (16M cells).
pub const MAX_CELLS: u64 = 1 << 24;

pub const DEFAULT_COLS: u32 = 120;
pub const DEFAULT_ROWS: u32 = 80;
pub const DEFAULT_FLOOR_ROWS: u32 = 5;
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub cols: u32,
    pub rows: u32,
    /// Rows of stone laid along the bottom when the grid is created or resized.
    pub floor_rows: u32,
    pub seed: u32,

    pub fire_burnout_chance: f32,
    pub smoke_dissipate_chance: f32,
    pub acid_spread_chance: f32,
    pub acid_corrode_chance: f32,
    pub acid_corrodes_wood: bool,
    pub acid_corrodes_stone: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            floor_rows: DEFAULT_FLOOR_ROWS,
            seed: DEFAULT_SEED,
            fire_burnout_chance: 0.05,
            smoke_dissipate_chance: 0.015,
            acid_spread_chance: 0.1,
            acid_corrode_chance: 0.4,
            acid_corrodes_wood: false,
            acid_corrodes_stone: false,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn with_dimensions(mut self, cols: u32, rows: u32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        validate_dimensions(self.cols, self.rows)?;

        let chances = [
            ("fire_burnout_chance", self.fire_burnout_chance),
            ("smoke_dissipate_chance", self.smoke_dissipate_chance),
            ("acid_spread_chance", self.acid_spread_chance),
            ("acid_corrode_chance", self.acid_corrode_chance),
        ];
        for (name, p) in chances {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        Ok(())
    }
}

pub fn validate_dimensions(cols: u32, rows: u32) -> Result<(), SimError> {
    let cells = (cols as u64) * (rows as u64);
    if cols == 0 || rows == 0 || cells > MAX_CELLS {
        return Err(SimError::InvalidDimensions { cols, rows });
    }
    Ok(())
}
