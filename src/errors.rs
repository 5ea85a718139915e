use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    OpenError(String),
    BindError(String),
    ControlError(String),
    StreamError(String),
    ConfigError(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CameraError::OpenError(msg) => write!(f, "Camera open error: {}", msg),
            CameraError::BindError(msg) => write!(f, "Preview bind error: {}", msg),
            CameraError::ControlError(msg) => write!(f, "Camera control error: {}", msg),
            CameraError::StreamError(msg) => write!(f, "Preview stream error: {}", msg),
            CameraError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CameraError {}
