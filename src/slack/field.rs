use crate::ser::not_true;
use serde::Serialize;

/// A title and value pair rendered as a small table within an attachment.
///
/// <https://api.slack.com/reference/messaging/attachments#field_objects>
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttachmentField {
    title: String,
    value: String,
    /// Whether the field is short enough to sit side by side with others.
    #[serde(skip_serializing_if = "not_true")]
    short: Option<bool>,
}

impl AttachmentField {
    pub fn new<T: Into<String>, V: Into<String>>(
        title: T,
        value: V,
        short: Option<bool>,
    ) -> Self {
        AttachmentField {
            title: title.into(),
            value: value.into(),
            short,
        }
    }

    pub fn set_short(&mut self, short: bool) -> &mut Self {
        self.short = Some(short);
        self
    }
}
