//! Server-side calls to the external backend: the fluid frame stream and the
//! email endpoint. One shared client; every request carries its own timeout.
use std::sync::LazyLock;

use http::StatusCode;
use reqwest::header::ACCEPT;
use serde::Serialize;
use thiserror::Error;

use crate::background::{Frame, FrameError};
use crate::config::SiteConfig;
use crate::contact::ContactReply;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
});

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream responded with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

impl From<UpstreamError> for FrameError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, .. } => FrameError::Status(status.as_u16()),
            other => FrameError::Transport(other.to_string()),
        }
    }
}

fn classify(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Http(err)
    }
}

/// Request one frame. Any non-2xx status, transport failure, or body that isn't
/// a successful frame response is an error.
pub async fn fetch_frame(config: &SiteConfig) -> Result<Frame, FrameError> {
    let res = CLIENT
        .get(config.frame_url())
        .header(ACCEPT, "application/json")
        .timeout(config.frame_timeout)
        .send()
        .await
        .map_err(classify)?;

    let status = res.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            status,
            message: None,
        }
        .into());
    }
    let body = res.text().await.map_err(classify)?;
    Frame::from_json(&body)
}

/// POST `payload` as JSON to the email endpoint. Returns the endpoint's
/// `message`, if the reply had one.
pub async fn post_contact<T>(config: &SiteConfig, payload: &T) -> Result<Option<String>, UpstreamError>
where
    T: Serialize + ?Sized,
{
    let res = CLIENT
        .post(&config.contact_url)
        .header(ACCEPT, "application/json")
        .json(payload)
        .timeout(config.contact_timeout)
        .send()
        .await
        .map_err(classify)?;

    let status = res.status();
    // a reply that isn't JSON still tells us the status
    let reply = res.json::<ContactReply>().await.unwrap_or_default();
    if status.is_success() {
        Ok(reply.message)
    } else {
        Err(UpstreamError::Status {
            status,
            message: reply.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_frame_status() {
        let err = UpstreamError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(FrameError::from(err), FrameError::Status(502));
    }

    #[test]
    fn test_timeout_maps_to_transport() {
        assert_eq!(
            FrameError::from(UpstreamError::Timeout),
            FrameError::Transport("request timed out".to_string())
        );
    }

    #[test]
    fn test_status_message() {
        let err = UpstreamError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: Some("slow down".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "upstream responded with 429 Too Many Requests: slow down"
        );
    }
}
