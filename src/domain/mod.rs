// Domain layer: wire models and ports (interfaces) shared by adapters and page controllers.

pub mod model;
pub mod ports;
