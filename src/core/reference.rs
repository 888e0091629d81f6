use crate::domain::model::Lifespan;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;

/// The twelve-person sample population used when no dataset file is given.
pub fn reference_lifespans() -> Vec<Lifespan> {
    vec![
        Lifespan::deceased(1902, 1991),
        Lifespan::deceased(1941, 1978),
        Lifespan::living(2004),
        Lifespan::living(1957),
        Lifespan::deceased(1989, 2008),
        Lifespan::deceased(1909, 2005),
        Lifespan::living(1918),
        Lifespan::deceased(1913, 2010),
        Lifespan::living(1979),
        Lifespan::deceased(1961, 2002),
        Lifespan::deceased(1977, 2003),
        Lifespan::deceased(1909, 1991),
    ]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceDataset;

impl DatasetSource for ReferenceDataset {
    fn name(&self) -> &str {
        "reference"
    }

    fn load(&self) -> Result<Vec<Lifespan>> {
        Ok(reference_lifespans())
    }
}
