use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    // 請求處理錯誤: Display 只輸出原始訊息, 直接放進回應的 `error` 欄位
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("{message}")]
    BodyRead { message: String },

    #[error("{message}")]
    BodyEncoding { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl PredictorError {
    /// True for failures raised while decoding an inbound request.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            PredictorError::MalformedBody(_)
                | PredictorError::BodyRead { .. }
                | PredictorError::BodyEncoding { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PredictorError::MalformedBody(_) => {
                "Send a JSON object with optional numeric fields x, y, vx, vy and gravity"
            }
            PredictorError::BodyRead { .. } => {
                "Check the request body size against the configured max_body_bytes"
            }
            PredictorError::BodyEncoding { .. } => "Make sure the request body is UTF-8 JSON",
            PredictorError::IoError(_) => "Check file paths and permissions",
            PredictorError::ConfigParseError { .. }
            | PredictorError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and retry"
            }
            PredictorError::ServerError { .. } => {
                "Check that the address is free and the process may bind to it"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;
