use crate::core::population::Population;
use crate::domain::model::{Year, YearCount};
use crate::domain::ports::DatasetSource;
use crate::utils::error::{CensusError, Result};
use crate::utils::validation::validate_lifespans;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Widest year span a timeline may cover.
pub const MAX_TIMELINE_YEARS: i64 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensusOptions {
    /// Reject records whose death year precedes their birth year.
    pub strict: bool,
    /// Years to report a population count for.
    pub years: Vec<Year>,
    /// Report a count for every year of the dataset's span.
    pub timeline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusReport {
    pub dataset: String,
    pub individuals: usize,
    pub decrease_years: Vec<Year>,
    pub year_counts: Vec<YearCount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<YearCount>,
    pub generated_at: DateTime<Utc>,
}

pub struct CensusEngine<S: DatasetSource> {
    source: S,
    options: CensusOptions,
}

impl<S: DatasetSource> CensusEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, CensusOptions::default())
    }

    pub fn with_options(source: S, options: CensusOptions) -> Self {
        Self { source, options }
    }

    /// Loads the dataset into a [`Population`], validating it in strict mode.
    pub fn population(&self) -> Result<Population> {
        tracing::debug!("Loading dataset '{}'", self.source.name());
        let lifespans = self.source.load()?;
        tracing::info!(
            "Loaded {} lifespans from '{}'",
            lifespans.len(),
            self.source.name()
        );

        if self.options.strict {
            validate_lifespans(&lifespans)?;
            tracing::debug!("All lifespans passed strict validation");
        }

        Ok(Population::new(lifespans))
    }

    pub fn run(&self) -> Result<CensusReport> {
        let population = self.population()?;

        let decrease_years = population.years_population_decreased();
        tracing::info!("Population decreased in {} years", decrease_years.len());

        let year_counts: Vec<YearCount> = self
            .options
            .years
            .iter()
            .map(|&year| YearCount {
                year,
                population: population.population_in_year(year),
            })
            .collect();

        let timeline = match (self.options.timeline, population.year_span()) {
            (true, Some(span)) => {
                let years = i64::from(*span.end()) - i64::from(*span.start()) + 1;
                if years > MAX_TIMELINE_YEARS {
                    return Err(CensusError::InvalidConfigValueError {
                        field: "timeline".to_string(),
                        value: format!("{}..={}", span.start(), span.end()),
                        reason: format!(
                            "Dataset spans {} years, timelines are limited to {}",
                            years, MAX_TIMELINE_YEARS
                        ),
                    });
                }
                tracing::debug!("Building timeline for {:?}", span);
                population.timeline(span)
            }
            (true, None) => {
                tracing::warn!("Dataset '{}' is empty, no timeline", self.source.name());
                Vec::new()
            }
            (false, _) => Vec::new(),
        };

        Ok(CensusReport {
            dataset: self.source.name().to_string(),
            individuals: population.len(),
            decrease_years,
            year_counts,
            timeline,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::ReferenceDataset;
    use crate::domain::model::Lifespan;

    struct InMemory(Vec<Lifespan>);

    impl DatasetSource for InMemory {
        fn name(&self) -> &str {
            "in-memory"
        }

        fn load(&self) -> Result<Vec<Lifespan>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_run_reference_dataset() {
        let options = CensusOptions {
            years: vec![1901, 1992],
            ..Default::default()
        };
        let report = CensusEngine::with_options(ReferenceDataset, options)
            .run()
            .unwrap();

        assert_eq!(report.dataset, "reference");
        assert_eq!(report.individuals, 12);
        assert_eq!(report.decrease_years, vec![1992, 2003, 2006, 2009, 2011]);
        assert_eq!(
            report.year_counts,
            vec![
                YearCount { year: 1901, population: 0 },
                YearCount { year: 1992, population: 8 },
            ]
        );
        assert!(report.timeline.is_empty());
    }

    #[test]
    fn test_timeline_spans_dataset() {
        let source = InMemory(vec![Lifespan::deceased(1900, 1902)]);
        let options = CensusOptions {
            timeline: true,
            ..Default::default()
        };
        let report = CensusEngine::with_options(source, options).run().unwrap();

        let years: Vec<Year> = report.timeline.iter().map(|count| count.year).collect();
        assert_eq!(years, vec![1900, 1901, 1902, 1903]);
        assert_eq!(report.timeline.last().unwrap().population, 0);
    }

    #[test]
    fn test_malformed_lifespan_kept_unless_strict() {
        let lifespans = vec![Lifespan::deceased(1950, 1900), Lifespan::living(1940)];

        let lenient = CensusEngine::new(InMemory(lifespans.clone())).run().unwrap();
        assert_eq!(lenient.individuals, 2);

        let strict = CensusEngine::with_options(
            InMemory(lifespans),
            CensusOptions {
                strict: true,
                ..Default::default()
            },
        )
        .run();
        assert!(matches!(
            strict,
            Err(CensusError::InvalidLifespanError { index: 0, .. })
        ));
    }

    #[test]
    fn test_timeline_over_extreme_span_is_rejected() {
        let source = InMemory(vec![
            Lifespan::deceased(Year::MIN, Year::MAX),
            Lifespan::living(Year::MAX),
        ]);
        let options = CensusOptions {
            timeline: true,
            ..Default::default()
        };

        match CensusEngine::with_options(source, options).run() {
            Err(CensusError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "timeline");
                assert_eq!(value, "-2147483648..=2147483647");
            }
            other => panic!("expected timeline limit error, got {:?}", other),
        }
    }

    #[test]
    fn test_same_extreme_span_runs_without_timeline() {
        let source = InMemory(vec![Lifespan::deceased(Year::MIN, Year::MAX)]);
        let report = CensusEngine::new(source).run().unwrap();

        assert!(report.decrease_years.is_empty());
        assert!(report.timeline.is_empty());
    }

    #[test]
    fn test_timeline_at_limit_is_built() {
        let last = 1000 + MAX_TIMELINE_YEARS as Year - 2;
        let source = InMemory(vec![Lifespan::deceased(1000, last)]);
        let options = CensusOptions {
            timeline: true,
            ..Default::default()
        };
        let report = CensusEngine::with_options(source, options).run().unwrap();

        assert_eq!(report.timeline.len() as i64, MAX_TIMELINE_YEARS);
    }

    #[test]
    fn test_empty_dataset_with_timeline() {
        let options = CensusOptions {
            timeline: true,
            years: vec![2000],
            ..Default::default()
        };
        let report = CensusEngine::with_options(InMemory(Vec::new()), options)
            .run()
            .unwrap();

        assert_eq!(report.individuals, 0);
        assert!(report.decrease_years.is_empty());
        assert!(report.timeline.is_empty());
        assert_eq!(report.year_counts[0].population, 0);
    }

    #[test]
    fn test_report_serializes_without_empty_timeline() {
        let report = CensusEngine::new(ReferenceDataset).run().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["decrease_years"][0], 1992);
        assert!(json.get("timeline").is_none());
        assert!(json["generated_at"].is_string());
    }
}
