//! Population queries over a fixed set of lifespans.
//!
//! The population can only shrink in the year right after somebody dies, so
//! decrease detection only inspects those candidate years instead of scanning
//! every year in the dataset's span.

use crate::domain::model::{Lifespan, Year, YearCount};
use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    lifespans: Vec<Lifespan>,
}

impl Population {
    pub fn new(lifespans: Vec<Lifespan>) -> Self {
        Self { lifespans }
    }

    pub fn lifespans(&self) -> &[Lifespan] {
        &self.lifespans
    }

    pub fn len(&self) -> usize {
        self.lifespans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifespans.is_empty()
    }

    /// Number of individuals alive at any point during `year`.
    pub fn population_in_year(&self, year: Year) -> usize {
        self.lifespans
            .iter()
            .filter(|lifespan| lifespan.is_alive_in_year(year))
            .count()
    }

    /// Years whose population is strictly smaller than the year before, ascending.
    ///
    /// Several deaths in the same year nominate the same candidate, which is
    /// evaluated once. Only the net count matters: a death offset by a birth
    /// in the following year is not a decrease.
    pub fn years_population_decreased(&self) -> Vec<Year> {
        let candidates: BTreeSet<Year> = self
            .lifespans
            .iter()
            .filter_map(Lifespan::died)
            .filter_map(|died| died.checked_add(1))
            .collect();

        let mut counts: HashMap<Year, usize> = HashMap::new();
        let mut count_in = |year: Year| {
            *counts
                .entry(year)
                .or_insert_with(|| self.population_in_year(year))
        };

        candidates
            .into_iter()
            .filter(|&year| count_in(year - 1) > count_in(year))
            .collect()
    }

    /// From the earliest birth to the first year after the last recorded death,
    /// stretched to cover the latest birth. `None` when nobody is recorded.
    pub fn year_span(&self) -> Option<RangeInclusive<Year>> {
        let first = self.lifespans.iter().map(Lifespan::born).min()?;
        let last = self
            .lifespans
            .iter()
            .map(|lifespan| match lifespan.died() {
                Some(died) => died.saturating_add(1),
                None => lifespan.born(),
            })
            .max()?;

        Some(first..=last.max(first))
    }

    pub fn timeline(&self, years: RangeInclusive<Year>) -> Vec<YearCount> {
        years
            .map(|year| YearCount {
                year,
                population: self.population_in_year(year),
            })
            .collect()
    }
}

impl From<Vec<Lifespan>> for Population {
    fn from(lifespans: Vec<Lifespan>) -> Self {
        Self::new(lifespans)
    }
}

impl FromIterator<Lifespan> for Population {
    fn from_iter<I: IntoIterator<Item = Lifespan>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
