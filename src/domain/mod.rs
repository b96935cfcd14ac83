// Domain layer: request/response shapes and the ports the client is built around.

pub mod model;
pub mod ports;
