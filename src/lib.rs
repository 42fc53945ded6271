//! The messenger of the gods, for mortals with a Slack webhook.
//!
//! Compose a [Message], optionally carrying [Attachment]s with fields and
//! buttons, and post it to an incoming webhook with a [SlackClient].
//!
//! ```no_run
//! use iris::{Attachment, Message, SlackClient};
//!
//! let mut attachment = Attachment::new("Deploy finished");
//! attachment
//!     .set_color("good")
//!     .add_field("Version", "v1234", Some(true))
//!     .add_button("Open", "https://example.com", None);
//!
//! let mut msg = Message::new(Some("Hello"), Some("#random"));
//! msg.assign_to("deploy-bot").add_attachment(attachment);
//!
//! let ok = SlackClient::new("https://hooks.slack.com/services/T/B/X").send(&msg);
//! ```

mod ser;
pub mod slack;

pub use slack::{
    action::{Action, Button},
    api::SlackClient,
    attachment::Attachment,
    error::SlackError,
    field::AttachmentField,
    message::Message,
};
