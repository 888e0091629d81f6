pub mod file;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};

#[cfg(feature = "cli")]
mod cli {
    use crate::config::file::FileDataset;
    use crate::core::census::CensusOptions;
    use crate::core::reference::ReferenceDataset;
    use crate::domain::model::Year;
    use crate::domain::ports::DatasetSource;
    use crate::utils::error::Result;
    use clap::{Parser, ValueEnum};

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
    pub enum OutputFormat {
        #[default]
        Text,
        Json,
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "lifespan-census")]
    #[command(about = "Find the years in which a population shrank")]
    pub struct CliConfig {
        /// Dataset file (.csv, .toml or .json); the built-in reference population when omitted
        #[arg(long)]
        pub dataset: Option<String>,

        /// Years to report the population size for
        #[arg(long = "year", value_delimiter = ',', allow_negative_numbers = true)]
        pub years: Vec<Year>,

        /// Report the population size for every year the dataset spans
        #[arg(long)]
        pub timeline: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Reject records whose death year precedes their birth year
        #[arg(long)]
        pub strict: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn dataset_source(&self) -> Result<Box<dyn DatasetSource>> {
            match &self.dataset {
                Some(path) => Ok(Box::new(FileDataset::new(path.as_str())?)),
                None => Ok(Box::new(ReferenceDataset)),
            }
        }

        pub fn census_options(&self) -> CensusOptions {
            CensusOptions {
                strict: self.strict,
                years: self.years.clone(),
                timeline: self.timeline,
            }
        }
    }

}
