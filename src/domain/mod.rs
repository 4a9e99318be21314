// Domain layer: request-scoped models and the ports the handlers talk through.

pub mod model;
pub mod ports;
