use thiserror::Error;

/// Sum type representing every possible unexceptional fail state.
#[derive(Error, Debug)]
pub enum SlackError {
    #[error("Invalid webhook endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Slack webhook request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The request went through but Slack didn't like it, for example because
    /// the webhook has been revoked.
    #[error("Slack webhook rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}
