// Domain layer: catalog models, category taxonomy and ports.

pub mod model;
pub mod ports;
pub mod taxonomy;
