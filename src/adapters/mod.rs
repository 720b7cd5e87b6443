// Adapters layer: hosting runtimes that feed requests into core::handler.

pub mod http;
pub mod lambda;
