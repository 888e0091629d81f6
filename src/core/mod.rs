pub mod census;
pub mod population;
pub mod reference;
