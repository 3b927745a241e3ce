// Domain layer: unit naming model and ports (interfaces). Std only.

pub mod model;
pub mod ports;
