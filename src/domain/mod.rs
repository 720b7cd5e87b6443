// Domain layer: data model and ports. Nothing here knows about axum or Lambda.

pub mod model;
pub mod ports;
