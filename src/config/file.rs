use crate::config::toml_config::DatasetConfig;
use crate::domain::model::Lifespan;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use std::fs;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "toml", "json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Toml,
    Json,
}

impl DatasetFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        validate_path("dataset", path)?;
        let format = match validate_file_extension("dataset", path, &SUPPORTED_EXTENSIONS)?.as_str()
        {
            "csv" => DatasetFormat::Csv,
            "toml" => DatasetFormat::Toml,
            _ => DatasetFormat::Json,
        };
        Ok(format)
    }
}

/// Lifespans read from a `.csv`, `.toml` or `.json` file.
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
    label: String,
    format: DatasetFormat,
}

impl FileDataset {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path: String = path.into();
        let format = DatasetFormat::from_path(&path)?;
        let label = Path::new(&path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&path)
            .to_string();

        Ok(Self {
            path: PathBuf::from(path),
            label,
            format,
        })
    }

    pub fn format(&self) -> DatasetFormat {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_csv(&self) -> Result<Vec<Lifespan>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut lifespans = Vec::new();
        for row in reader.deserialize() {
            lifespans.push(row?);
        }
        Ok(lifespans)
    }

    fn read_json(&self) -> Result<Vec<Lifespan>> {
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn read_toml(&self) -> Result<Vec<Lifespan>> {
        let config = DatasetConfig::from_file(&self.path)?;
        config.validate()?;
        if let Some(name) = config.name() {
            tracing::debug!(
                "TOML dataset declares name '{}' ({})",
                name,
                config.description().unwrap_or("no description")
            );
        }
        Ok(config.lifespans)
    }
}

impl DatasetSource for FileDataset {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self) -> Result<Vec<Lifespan>> {
        tracing::debug!("Reading {:?} dataset from {}", self.format, self.path.display());
        match self.format {
            DatasetFormat::Csv => self.read_csv(),
            DatasetFormat::Toml => self.read_toml(),
            DatasetFormat::Json => self.read_json(),
        }
    }
}
