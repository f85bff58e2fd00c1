// Domain layer: core models and ports (interfaces). No dependencies beyond
// serde and async-trait.

pub mod model;
pub mod ports;
