// Domain layer: cost models, ports (interfaces) and the pure report services.

pub mod model;
pub mod ports;

pub mod services;
