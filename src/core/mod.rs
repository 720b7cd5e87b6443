pub mod handler;
pub mod predictor;

pub use crate::domain::model::{ErrorResult, ProjectileState, TrajectoryRequest, TrajectoryResult};
pub use crate::domain::ports::{ConfigProvider, InboundRequest, OutboundResponse};
pub use crate::utils::error::Result;
