// Domain layer: the triple model and the ports the tool layer plugs into.

pub mod model;
pub mod ports;
