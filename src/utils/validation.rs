use crate::domain::model::Lifespan;
use crate::utils::error::{CensusError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CensusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CensusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Returns the lower-cased extension of `path` if it is one of `allowed_extensions`.
pub fn validate_file_extension(
    field_name: &str,
    path: &str,
    allowed_extensions: &[&str],
) -> Result<String> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| CensusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        })?;

    if !allowed_set.contains(extension.as_str()) {
        return Err(CensusError::UnsupportedFormatError { extension });
    }

    Ok(extension)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CensusError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks `died >= born` for one record; `index` is only used for reporting.
pub fn validate_lifespan(index: usize, lifespan: &Lifespan) -> Result<()> {
    match lifespan.died() {
        Some(died) if died < lifespan.born() => Err(CensusError::InvalidLifespanError {
            index,
            born: lifespan.born(),
            died,
        }),
        _ => Ok(()),
    }
}

pub fn validate_lifespans(lifespans: &[Lifespan]) -> Result<()> {
    lifespans
        .iter()
        .enumerate()
        .try_for_each(|(index, lifespan)| validate_lifespan(index, lifespan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("dataset", "data/people.csv").is_ok());
        assert!(validate_path("dataset", "").is_err());
        assert!(validate_path("dataset", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["csv", "toml", "json"];
        assert_eq!(
            validate_file_extension("dataset", "people.CSV", &allowed).unwrap(),
            "csv"
        );
        assert!(matches!(
            validate_file_extension("dataset", "people.xml", &allowed),
            Err(CensusError::UnsupportedFormatError { .. })
        ));
        assert!(matches!(
            validate_file_extension("dataset", "people", &allowed),
            Err(CensusError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("dataset.name", "census").is_ok());
        assert!(validate_non_empty_string("dataset.name", "   ").is_err());
    }

    #[test]
    fn test_validate_lifespans_reports_first_bad_index() {
        let lifespans = vec![
            Lifespan::deceased(1900, 1950),
            Lifespan::living(1920),
            Lifespan::deceased(1960, 1959),
            Lifespan::deceased(1970, 1900),
        ];

        match validate_lifespans(&lifespans) {
            Err(CensusError::InvalidLifespanError { index, born, died }) => {
                assert_eq!((index, born, died), (2, 1960, 1959));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_same_year_birth_and_death_is_valid() {
        assert!(validate_lifespan(0, &Lifespan::deceased(2000, 2000)).is_ok());
    }
}
