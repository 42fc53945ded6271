//! Compose messages for delivery via an incoming webhook.

use super::{attachment::Attachment, error::SlackError};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// The channel messages are posted to unless told otherwise.
pub const DEFAULT_CHANNEL: &str = "#general";

/// The top-level webhook payload.
///
/// <https://api.slack.com/messaging/webhooks#advanced_message_formatting>
// Field order is the payload's key order.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Message {
    // Slack tolerates a null `text` when there are attachments, so it's always
    // present in the payload.
    #[serialize_always]
    text: Option<String>,
    username: Option<String>,
    channel: String,
    icon_url: Option<String>,
    icon_emoji: Option<String>,
    unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
}

impl Message {
    /// A message with optional text, posted to [DEFAULT_CHANNEL] if no channel
    /// is given.
    pub fn new(text: Option<&str>, channel: Option<&str>) -> Self {
        Message {
            text: text.map(ToOwned::to_owned),
            username: None,
            channel: channel.unwrap_or(DEFAULT_CHANNEL).to_owned(),
            icon_url: None,
            icon_emoji: None,
            unfurl_links: None,
            attachments: Vec::new(),
        }
    }

    pub fn content<T: Into<String>>(&mut self, text: T) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Override the username the webhook posts as.
    pub fn assign_to<T: Into<String>>(&mut self, username: T) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    pub fn on<T: Into<String>>(&mut self, channel: T) -> &mut Self {
        self.channel = channel.into();
        self
    }

    /// Use an emoji such as `:robot_face:` as the avatar.
    pub fn with_emoji<T: Into<String>>(&mut self, emoji: T) -> &mut Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Use an image as the avatar. Nothing stops this being set alongside an
    /// emoji; Slack decides which wins.
    pub fn with_icon<T: Into<String>>(&mut self, url: T) -> &mut Self {
        self.icon_url = Some(url.into());
        self
    }

    pub fn with_unfurl_links(&mut self, unfurl_links: bool) -> &mut Self {
        self.unfurl_links = Some(unfurl_links);
        self
    }

    pub fn add_attachment(&mut self, attachment: Attachment) -> &mut Self {
        self.attachments.push(attachment);
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Encode as the JSON Slack expects in the `payload` form field.
    pub fn to_payload(&self) -> Result<String, SlackError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::new(None, None)
    }
}
