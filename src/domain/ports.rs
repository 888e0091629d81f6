use crate::domain::model::Lifespan;
use crate::utils::error::Result;

/// Somewhere a fixed set of lifespans can be read from.
pub trait DatasetSource {
    /// Short label used in logs and reports.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<Lifespan>>;
}

impl<T: DatasetSource + ?Sized> DatasetSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<Lifespan>> {
        (**self).load()
    }
}

impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<Lifespan>> {
        (**self).load()
    }
}
