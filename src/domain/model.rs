use serde::{Deserialize, Serialize};

/// Calendar year. Negative values are allowed and simply compare as integers.
pub type Year = i32;

/// One individual's birth year and, if known, death year.
///
/// The individual counts as alive in both the birth year and the death year.
/// A record with `died < born` is accepted here and is never reported alive;
/// see [`crate::utils::validation::validate_lifespan`] for the strict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lifespan {
    born: Year,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    died: Option<Year>,
}

impl Lifespan {
    pub fn new(born: Year, died: Option<Year>) -> Self {
        Self { born, died }
    }

    /// Someone with no recorded death.
    pub fn living(born: Year) -> Self {
        Self::new(born, None)
    }

    pub fn deceased(born: Year, died: Year) -> Self {
        Self::new(born, Some(died))
    }

    pub fn born(&self) -> Year {
        self.born
    }

    pub fn died(&self) -> Option<Year> {
        self.died
    }

    pub fn is_living(&self) -> bool {
        self.died.is_none()
    }

    pub fn is_alive_in_year(&self, year: Year) -> bool {
        year >= self.born && self.died.map_or(true, |died| died >= year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: Year,
    pub population: usize,
}
