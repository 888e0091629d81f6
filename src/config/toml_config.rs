use crate::domain::model::Lifespan;
use crate::utils::error::{CensusError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A dataset described in TOML:
///
/// ```toml
/// [dataset]
/// name = "family"
///
/// [[lifespans]]
/// born = 1900
/// died = 1950
///
/// [[lifespans]]
/// born = 1950
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default)]
    pub dataset: Option<DatasetInfo>,
    #[serde(default)]
    pub lifespans: Vec<Lifespan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub description: Option<String>,
}

impl DatasetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` references with environment values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CensusError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CensusError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn name(&self) -> Option<&str> {
        self.dataset.as_ref().map(|info| info.name.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.dataset
            .as_ref()
            .and_then(|info| info.description.as_deref())
    }
}

/// Checks the `[dataset]` table. Record ordering (`died >= born`) is left to
/// strict mode in the census engine.
impl Validate for DatasetConfig {
    fn validate(&self) -> Result<()> {
        if let Some(info) = &self.dataset {
            validate_non_empty_string("dataset.name", &info.name)?;
        }
        Ok(())
    }
}
