// Domain layer: core models and ports (interfaces). Adapters and HTTP wire formats live elsewhere.

pub mod model;
pub mod ports;
