// Domain layer: core models and ports (interfaces). Concrete adapters live under `crate::adapters`.

pub mod model;
pub mod ports;
