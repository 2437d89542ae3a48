use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}
