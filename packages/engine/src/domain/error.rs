use thiserror::Error;

use super::materials::MaterialId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid material id {0}")]
    InvalidMaterial(MaterialId),

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("invalid grid dimensions {cols}x{rows}")]
    InvalidDimensions { cols: u32, rows: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
