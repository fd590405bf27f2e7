//! Slack Block Kit primitives.
//!
//! Small constructors for the block and element shapes the builders emit.
//! Blocks are kept as `serde_json::Value` because edited payloads come back
//! from Slack in whatever shape the platform stored them.

use serde_json::{Value, json};

/// A single Block Kit block.
pub type Block = Value;

/// Placeholder carried in every button's `value` field.
pub const BUTTON_VALUE: &str = "value";

/// Emphasis applied to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Danger,
}

impl ButtonStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "primary",
            ButtonStyle::Danger => "danger",
        }
    }
}

/// A `section` block with `mrkdwn` text.
pub fn section(text: &str) -> Block {
    json!({
        "type": "section",
        "text": { "type": "mrkdwn", "text": text }
    })
}

/// A `button` element. Unstyled buttons omit the `style` key entirely.
pub fn button(text: &str, action_id: &str, style: Option<ButtonStyle>) -> Value {
    let mut btn = json!({
        "type": "button",
        "text": { "type": "plain_text", "text": text, "emoji": true },
        "value": BUTTON_VALUE,
        "action_id": action_id,
    });
    if let (Some(style), Some(map)) = (style, btn.as_object_mut()) {
        map.insert("style".into(), json!(style.as_str()));
    }
    btn
}

pub fn actions(elements: Vec<Value>) -> Block {
    json!({ "type": "actions", "elements": elements })
}

pub fn divider() -> Block {
    json!({ "type": "divider" })
}

/// A `rich_text` block holding one line of unformatted text.
pub fn rich_text(line: &str) -> Block {
    json!({
        "type": "rich_text",
        "elements": [{
            "type": "rich_text_section",
            "elements": [{ "type": "text", "text": line }]
        }]
    })
}

/// Slack mention syntax. An absent id renders as `<@None>`.
pub fn mention(id: Option<&str>) -> String {
    format!("<@{}>", id.unwrap_or("None"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_uses_mrkdwn() {
        assert_eq!(
            section("*hi*"),
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "*hi*"}})
        );
    }

    #[test]
    fn styled_button() {
        let btn = button("👍", "thread_positive", Some(ButtonStyle::Primary));
        assert_eq!(btn["style"], "primary");
        assert_eq!(btn["action_id"], "thread_positive");
        assert_eq!(btn["value"], "value");
        assert_eq!(btn["text"]["emoji"], true);
    }

    #[test]
    fn unstyled_button_has_no_style_key() {
        let btn = button("Open support request", "vertex_raise_ticket", None);
        assert!(btn.get("style").is_none());
    }

    #[test]
    fn rich_text_nesting() {
        let block = rich_text("hello");
        assert_eq!(block["type"], "rich_text");
        assert_eq!(block["elements"][0]["type"], "rich_text_section");
        assert_eq!(block["elements"][0]["elements"][0], json!({"type": "text", "text": "hello"}));
    }

    #[test]
    fn mention_handles_absent_id() {
        assert_eq!(mention(Some("U123")), "<@U123>");
        assert_eq!(mention(None), "<@None>");
    }
}
