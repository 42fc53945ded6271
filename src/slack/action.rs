use serde::ser::SerializeStruct;
use serde::{ser, Serialize};

/// Interactive elements at the foot of an attachment. This is our limited
/// subset thereof.
///
/// <https://api.slack.com/reference/messaging/attachments#actions>
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A link styled as a button.
    Button(Button),
}

/// A button which opens `url` in the browser when clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    /// The button's label.
    pub text: String,
    pub url: String,
    /// Slack understands "primary" and "danger", but it's passed on verbatim.
    pub style: Option<String>,
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            Action::Button(x) => {
                let len = if x.style.is_some() { 4 } else { 3 };
                let mut state = serializer.serialize_struct("Action", len)?;

                state.serialize_field("type", "button")?;
                state.serialize_field("text", &x.text)?;
                state.serialize_field("url", &x.url)?;

                match &x.style {
                    Some(style) => state.serialize_field("style", style)?,
                    None => state.skip_field("style")?,
                };

                state.end()
            }
        }
    }
}
