// Domain layer: the lifespan model and the dataset port. No I/O here.

pub mod model;
pub mod ports;
