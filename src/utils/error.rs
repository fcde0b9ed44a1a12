use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {message}")]
    InvalidResponse { message: String },

    #[error("Missing navigation parameter: {param}")]
    NotFoundInContext { param: String },

    #[error("Authentication required")]
    AuthRequired,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ClientError::InvalidResponse {
                message: err.to_string(),
            };
        }

        // 有狀態碼代表伺服器已回應，其餘一律視為傳輸失敗
        match err.status() {
            Some(status) => ClientError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            },
            None => ClientError::Transport {
                message: err.to_string(),
            },
        }
    }
}

impl ClientError {
    /// HTTP 狀態碼；傳輸失敗或本地錯誤時為 None
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// 給使用者看的訊息（不含內部分類前綴）
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Transport { .. } => {
                "Could not reach the server. Please try again later.".to_string()
            }
            ClientError::Api { message, .. } => message.clone(),
            ClientError::NotFoundInContext { .. } => "Place not found.".to_string(),
            ClientError::AuthRequired => "You must be logged in.".to_string(),
            ClientError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
