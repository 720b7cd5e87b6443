pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, LogFormat, ServerSettings};
pub use core::{handler::handle, predictor::TrajectoryPredictor};
pub use domain::model::{ErrorResult, PredictionStatus, TrajectoryRequest, TrajectoryResult};
pub use utils::error::{PredictorError, Result};
