//! 👍 / 👎 feedback prompts appended under an answer.

use crate::elements::{Block, ButtonStyle, actions, button, divider, section};

pub const FEEDBACK_PROMPT: &str = "Did you find our suggestion satisfactory?";

pub const MESSAGE_POSITIVE_ACTION: &str = "vertex_positive";
pub const MESSAGE_NEGATIVE_ACTION: &str = "vertex_negative";
pub const THREAD_POSITIVE_ACTION: &str = "thread_positive";
pub const THREAD_NEGATIVE_ACTION: &str = "thread_negative";

/// Where the feedback buttons live; the event handler tells the two apart
/// by action id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackScope {
    /// Top-level channel message.
    Message,
    /// Reply inside a thread.
    Thread,
}

impl FeedbackScope {
    pub fn positive_action(self) -> &'static str {
        match self {
            FeedbackScope::Message => MESSAGE_POSITIVE_ACTION,
            FeedbackScope::Thread => THREAD_POSITIVE_ACTION,
        }
    }

    pub fn negative_action(self) -> &'static str {
        match self {
            FeedbackScope::Message => MESSAGE_NEGATIVE_ACTION,
            FeedbackScope::Thread => THREAD_NEGATIVE_ACTION,
        }
    }
}

/// Divider, prompt, and the two feedback buttons.
pub fn feedback_blocks(scope: FeedbackScope) -> Vec<Block> {
    vec![
        divider(),
        section(FEEDBACK_PROMPT),
        actions(vec![
            button("👍", scope.positive_action(), Some(ButtonStyle::Primary)),
            button("👎", scope.negative_action(), Some(ButtonStyle::Danger)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_scope_layout() {
        let blocks = feedback_blocks(FeedbackScope::Message);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0]["type"], "divider");
        assert_eq!(blocks[1]["text"]["text"], FEEDBACK_PROMPT);

        let buttons = blocks[2]["elements"].as_array().unwrap();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0]["action_id"], "vertex_positive");
        assert_eq!(buttons[0]["style"], "primary");
        assert_eq!(buttons[1]["action_id"], "vertex_negative");
        assert_eq!(buttons[1]["style"], "danger");
    }

    #[test]
    fn thread_scope_only_changes_action_ids() {
        let message = feedback_blocks(FeedbackScope::Message);
        let thread = feedback_blocks(FeedbackScope::Thread);
        assert_eq!(message[..2], thread[..2]);
        assert_eq!(thread[2]["elements"][0]["action_id"], "thread_positive");
        assert_eq!(thread[2]["elements"][1]["action_id"], "thread_negative");
    }
}
