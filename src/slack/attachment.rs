//! Legacy secondary attachments: a coloured block beneath the message text
//! holding an author, title, fields, imagery, a footer, and buttons.
//!
//! <https://api.slack.com/reference/messaging/attachments>

use super::{action::*, field::AttachmentField};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// An attachment in which everything but the fallback is optional. Anything
/// left unset is omitted from the payload entirely.
///
/// Nothing here is validated. Slack documents limits, for example a footer of
/// at most 300 characters, and enforces them itself.
// Field order is the payload's key order.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attachment {
    /// Plain text shown by clients which can't render attachments.
    fallback: String,
    /// Either "good", "warning", "danger", or a hex colour code.
    color: Option<String>,
    pretext: Option<String>,
    author_name: Option<String>,
    /// Names of the attributes in which Slack should render mrkdwn.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    markdown_in: Vec<String>,
    author_link: Option<String>,
    author_icon: Option<String>,
    title: Option<String>,
    title_link: Option<String>,
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<AttachmentField>,
    image_url: Option<String>,
    thumb_url: Option<String>,
    footer: Option<String>,
    footer_icon: Option<String>,
    /// Unix epoch seconds, shown alongside the footer.
    ts: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    actions: Vec<Action>,
}

impl Attachment {
    pub fn new<T: Into<String>>(fallback: T) -> Self {
        Attachment {
            fallback: fallback.into(),
            color: None,
            pretext: None,
            author_name: None,
            markdown_in: Vec::new(),
            author_link: None,
            author_icon: None,
            title: None,
            title_link: None,
            text: None,
            fields: Vec::new(),
            image_url: None,
            thumb_url: None,
            footer: None,
            footer_icon: None,
            ts: None,
            actions: Vec::new(),
        }
    }

    pub fn set_color<T: Into<String>>(&mut self, color: T) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn set_text<T: Into<String>>(&mut self, text: T) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Text shown above the attachment block.
    pub fn set_pretext<T: Into<String>>(&mut self, pretext: T) -> &mut Self {
        self.pretext = Some(pretext.into());
        self
    }

    /// Set the author's name, along with their link and icon if given. Those
    /// not given are left as they were.
    pub fn set_author<T: Into<String>>(
        &mut self,
        name: T,
        link: Option<&str>,
        icon: Option<&str>,
    ) -> &mut Self {
        self.set_author_name(name);

        if let Some(link) = link {
            self.set_author_link(link);
        }

        if let Some(icon) = icon {
            self.set_author_icon(icon);
        }

        self
    }

    pub fn set_author_name<T: Into<String>>(&mut self, name: T) -> &mut Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn set_author_link<T: Into<String>>(&mut self, link: T) -> &mut Self {
        self.author_link = Some(link.into());
        self
    }

    pub fn set_author_icon<T: Into<String>>(&mut self, icon: T) -> &mut Self {
        self.author_icon = Some(icon.into());
        self
    }

    /// Enable mrkdwn formatting for the named attribute, for example "text",
    /// "pretext", or "fields". Tags are kept in order and never deduplicated.
    pub fn enable_markdown_for<T: Into<String>>(&mut self, field_name: T) -> &mut Self {
        self.markdown_in.push(field_name.into());
        self
    }

    /// As [Attachment::enable_markdown_for], for several attributes at once.
    pub fn enable_markdown_for_all<I, T>(&mut self, field_names: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.markdown_in
            .extend(field_names.into_iter().map(Into::into));
        self
    }

    /// Set the title, and make it a link if one is given. A previously set
    /// link survives if none is given.
    pub fn set_title<T: Into<String>>(&mut self, title: T, link: Option<&str>) -> &mut Self {
        self.title = Some(title.into());

        if let Some(link) = link {
            self.title_link = Some(link.to_owned());
        }

        self
    }

    /// A large image shown within the attachment.
    pub fn set_image<T: Into<String>>(&mut self, url: T) -> &mut Self {
        self.image_url = Some(url.into());
        self
    }

    /// A small image shown to the right of the attachment.
    pub fn set_thumbnail<T: Into<String>>(&mut self, url: T) -> &mut Self {
        self.thumb_url = Some(url.into());
        self
    }

    pub fn set_footer_text<T: Into<String>>(&mut self, text: T) -> &mut Self {
        self.footer = Some(text.into());
        self
    }

    pub fn set_footer_icon<T: Into<String>>(&mut self, url: T) -> &mut Self {
        self.footer_icon = Some(url.into());
        self
    }

    pub fn set_timestamp(&mut self, ts: i64) -> &mut Self {
        self.ts = Some(ts);
        self
    }

    pub fn add_field_instance(&mut self, field: AttachmentField) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn add_field<T: Into<String>, V: Into<String>>(
        &mut self,
        title: T,
        value: V,
        short: Option<bool>,
    ) -> &mut Self {
        self.add_field_instance(AttachmentField::new(title, value, short))
    }

    pub fn add_button<T: Into<String>, U: Into<String>>(
        &mut self,
        text: T,
        url: U,
        style: Option<&str>,
    ) -> &mut Self {
        self.actions.push(Action::Button(Button {
            text: text.into(),
            url: url.into(),
            style: style.map(ToOwned::to_owned),
        }));
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use serde_json::json;

    fn to_json(a: &Attachment) -> serde_json::Value {
        serde_json::to_value(a).unwrap()
    }

    quickcheck! {
        fn test_fallback_only_by_default(fallback: String) -> bool {
            let a = Attachment::new(fallback.clone());
            a.fallback() == fallback && to_json(&a) == json!({ "fallback": fallback })
        }

        fn test_markdown_in_preserves_order(tags: Vec<String>) -> bool {
            let mut a = Attachment::new("F");
            for tag in &tags {
                a.enable_markdown_for(tag.as_str());
            }

            let expected = if tags.is_empty() { json!(null) } else { json!(tags) };
            to_json(&a).get("markdown_in").cloned().unwrap_or(json!(null)) == expected
        }
    }

    #[test]
    fn test_markdown_in() {
        let mut a = Attachment::new("F");
        a.enable_markdown_for("text").enable_markdown_for("pretext");

        assert_eq!(to_json(&a)["markdown_in"], json!(["text", "pretext"]));

        let mut b = Attachment::new("F");
        b.enable_markdown_for_all(["text", "fields"])
            .enable_markdown_for("text");

        assert_eq!(to_json(&b)["markdown_in"], json!(["text", "fields", "text"]));
    }

    #[test]
    fn test_add_field() {
        let mut a = Attachment::new("F");
        a.add_field("T", "V", Some(true));

        assert_eq!(
            to_json(&a)["fields"],
            json!([{ "title": "T", "value": "V", "short": true }]),
        );
    }

    #[test]
    fn test_fields_accumulate() {
        let mut a = Attachment::new("F");
        a.add_field("A", "1", None)
            .add_field_instance(AttachmentField::new("B", "2", Some(false)));

        assert_eq!(
            to_json(&a)["fields"],
            json!([
                { "title": "A", "value": "1" },
                { "title": "B", "value": "2" },
            ]),
        );
    }

    #[test]
    fn test_add_button() {
        let mut a = Attachment::new("F");
        a.add_button("Click", "https://x", Some("primary"))
            .add_button("Other", "https://y", None);

        assert_eq!(
            to_json(&a)["actions"],
            json!([
                { "type": "button", "text": "Click", "url": "https://x", "style": "primary" },
                { "type": "button", "text": "Other", "url": "https://y" },
            ]),
        );
    }

    #[test]
    fn test_set_author() {
        let mut a = Attachment::new("F");
        a.set_author("Ada", None, None);

        assert_eq!(to_json(&a), json!({ "fallback": "F", "author_name": "Ada" }));

        a.set_author("Grace", Some("https://link"), Some("https://icon"))
            .set_author("Ada", None, None);

        assert_eq!(
            to_json(&a),
            json!({
                "fallback": "F",
                "author_name": "Ada",
                "author_link": "https://link",
                "author_icon": "https://icon",
            }),
        );
    }

    #[test]
    fn test_set_title() {
        let mut a = Attachment::new("F");
        a.set_title("Title", None);

        assert_eq!(to_json(&a), json!({ "fallback": "F", "title": "Title" }));

        a.set_title("Linked", Some("https://x"));

        assert_eq!(
            to_json(&a),
            json!({ "fallback": "F", "title": "Linked", "title_link": "https://x" }),
        );
    }

    #[test]
    fn test_last_setter_call_wins() {
        let mut a = Attachment::new("F");
        a.set_color("good").set_color("danger");

        assert_eq!(to_json(&a), json!({ "fallback": "F", "color": "danger" }));
    }

    #[test]
    fn test_chaining_returns_same_instance() {
        let mut a = Attachment::new("F");
        let chained: *const Attachment = a
            .set_color("good")
            .set_text("t")
            .add_field("K", "V", None);

        assert!(std::ptr::eq(chained, &a));
    }

    #[test]
    fn test_no_validation() {
        let mut a = Attachment::new("");
        a.set_color("not a colour")
            .set_image("not a url")
            .set_footer_text("");

        assert_eq!(
            to_json(&a),
            json!({
                "fallback": "",
                "color": "not a colour",
                "image_url": "not a url",
                "footer": "",
            }),
        );
    }

    #[test]
    fn test_key_order() {
        let mut a = Attachment::new("F");
        a.add_button("B", "https://b", None)
            .set_timestamp(1700000000)
            .set_footer_icon("https://fi")
            .set_footer_text("foot")
            .set_thumbnail("https://th")
            .set_image("https://im")
            .add_field("K", "V", None)
            .set_text("text")
            .set_title("title", Some("https://tl"))
            .set_author_icon("https://ai")
            .set_author_link("https://al")
            .enable_markdown_for("text")
            .set_author_name("author")
            .set_pretext("pre")
            .set_color("good");

        let expected = concat!(
            r#"{"fallback":"F","color":"good","pretext":"pre","author_name":"author","#,
            r#""markdown_in":["text"],"author_link":"https://al","author_icon":"https://ai","#,
            r#""title":"title","title_link":"https://tl","text":"text","#,
            r#""fields":[{"title":"K","value":"V"}],"image_url":"https://im","#,
            r#""thumb_url":"https://th","footer":"foot","footer_icon":"https://fi","#,
            r#""ts":1700000000,"actions":[{"type":"button","text":"B","url":"https://b"}]}"#,
        );

        assert_eq!(serde_json::to_string(&a).unwrap(), expected);
    }
}
