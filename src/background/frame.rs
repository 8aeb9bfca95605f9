use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single pre-rendered fluid frame. `source` is usable directly as an image
/// source, normally a `data:` URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub source: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("frame request failed: {0}")]
    Transport(String),
    #[error("frame service responded with HTTP {0}")]
    Status(u16),
    #[error("frame service reported an error: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error("malformed frame response: {0}")]
    Malformed(String),
    #[error("frame response had no frame data")]
    Empty,
    #[error("couldn't decode frame image: {0}")]
    Decode(String),
}

/// Expected body of the frame endpoint. Anything that doesn't match one of the
/// two shapes fails to deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FrameResponse {
    Success {
        #[serde(default)]
        frame: Option<String>,
    },
    Error {
        #[serde(default)]
        message: Option<String>,
    },
}

impl FrameResponse {
    pub fn parse(body: &str) -> Result<Self, FrameError> {
        serde_json::from_str(body).map_err(|e| FrameError::Malformed(e.to_string()))
    }

    /// Only a success status with a non-empty payload yields a frame.
    pub fn into_frame(self) -> Result<Frame, FrameError> {
        match self {
            Self::Success { frame: Some(source) } if !source.trim().is_empty() => {
                Ok(Frame { source })
            }
            Self::Success { .. } => Err(FrameError::Empty),
            Self::Error { message } => Err(FrameError::Rejected(message)),
        }
    }
}

impl Frame {
    pub fn from_json(body: &str) -> Result<Self, FrameError> {
        FrameResponse::parse(body)?.into_frame()
    }
}
