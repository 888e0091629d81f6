pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::{file::FileDataset, toml_config::DatasetConfig};
pub use crate::core::{
    census::{CensusEngine, CensusOptions, CensusReport},
    population::Population,
    reference::ReferenceDataset,
};
pub use domain::model::{Lifespan, Year, YearCount};
pub use domain::ports::DatasetSource;
pub use utils::error::{CensusError, Result};
