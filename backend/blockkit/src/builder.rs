//! Answer payloads for the helpdesk bot.
//!
//! [`BlockKit`] carries everything known about one request/response cycle
//! and renders it into Slack blocks. Every method is total: absent fields
//! render as placeholders instead of failing.

use crate::elements::{Block, mention, section};
use crate::feedback::{FeedbackScope, feedback_blocks};
use crate::links::{extract_links, link_hint_blocks};
use crate::routing::channel_label;
use crate::text::sanitize;
use crate::ticket::TicketInfo;
use helpdesk_config::BlockKitConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A message body: serializes as `{"blocks": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub blocks: Vec<Block>,
}

impl Payload {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        let mut map = Map::new();
        map.insert("blocks".into(), Value::Array(payload.blocks));
        Value::Object(map)
    }
}

/// Builder state for one request/response cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockKit {
    /// Thread timestamp of the conversation, if any.
    pub thread_id: Option<String>,
    /// The user's original question. Carried for callers; not rendered.
    pub question: Option<String>,
    /// Slack user id of the asker.
    pub user_id: Option<String>,
    /// Blocks of an earlier message that is being edited.
    pub existing_payload: Option<Vec<Block>>,
    pub channel_id: Option<String>,
    pub additional_context: Option<String>,
    /// Bot user id, mentioned in follow-up prompts.
    pub bot_id: Option<String>,
    /// Generated answer, set by the caller after the lookup.
    pub answer_text: Option<String>,
    /// Never filled in here; callers wanting links use [`BlockKit::extract_links`].
    pub extracted_links: Option<String>,
    /// Product label derived from the route key.
    pub channel_label: Option<String>,
    /// Limits and links; not part of the serialized state.
    #[serde(skip)]
    pub config: BlockKitConfig,
}

impl BlockKit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use non-default limits and URLs.
    pub fn with_config(mut self, config: BlockKitConfig) -> Self {
        self.config = config;
        self
    }

    /// Normalise a raw route key into [`BlockKit::channel_label`].
    pub fn set_channel_name(&mut self, raw: &str) {
        self.channel_label = Some(channel_label(raw).to_string());
    }

    pub fn extract_links(text: &str) -> Vec<String> {
        extract_links(text)
    }

    pub fn feedback_block_kit() -> Vec<Block> {
        feedback_blocks(FeedbackScope::Message)
    }

    pub fn thread_feedback_block_kit() -> Vec<Block> {
        feedback_blocks(FeedbackScope::Thread)
    }

    /// Full answer for a top-level message: preamble, answer, link hints,
    /// and message-level feedback buttons.
    pub fn build_answer_blocks(&self) -> Payload {
        let Some(answer) = self.answer() else {
            return Payload::new(vec![self.no_suggestion_block()]);
        };

        let mut blocks = vec![section(&self.preamble()), section(&answer)];
        blocks.extend(self.link_hints(&answer));
        blocks.extend(Self::feedback_block_kit());
        Payload::new(blocks)
    }

    /// Compact answer for a thread reply: no preamble, thread-level
    /// feedback buttons.
    pub fn thread_block_kit(&self) -> Vec<Block> {
        let Some(answer) = self.answer() else {
            return vec![self.no_suggestion_block()];
        };

        let mut blocks = vec![section(&answer)];
        blocks.extend(self.link_hints(&answer));
        blocks.extend(Self::thread_feedback_block_kit());
        blocks
    }

    /// Re-sanitize the text of every section in the message being edited.
    ///
    /// Without an existing payload this renders a fresh answer instead.
    pub fn feedback_update_block(&self) -> Vec<Block> {
        match &self.existing_payload {
            Some(blocks) if !blocks.is_empty() => {
                sanitize_sections(blocks.clone(), self.config.max_text_chars())
            }
            _ => {
                debug!(user_id = ?self.user_id, "No payload to edit; rendering a fresh answer");
                self.build_answer_blocks().into_blocks()
            }
        }
    }

    /// Same as [`BlockKit::feedback_update_block`].
    pub fn feedback_update_block_session(&self) -> Vec<Block> {
        self.feedback_update_block()
    }

    /// Ticket formatter for the same user and settings.
    pub fn ticket_info(
        &self,
        ticket_number: Option<String>,
        ticket_url: Option<String>,
    ) -> TicketInfo {
        TicketInfo {
            ticket_number,
            ticket_url,
            user_id: self.user_id.clone(),
            config: self.config.clone(),
        }
    }

    fn answer(&self) -> Option<String> {
        let raw = self.answer_text.as_deref().filter(|a| !a.is_empty());
        if raw.is_none() {
            debug!(user_id = ?self.user_id, "No answer text; rendering no-suggestion message");
        }
        raw.map(|a| sanitize(a, self.config.max_text_chars()))
    }

    fn preamble(&self) -> String {
        format!(
            "Thank you for submitting a request with {}. Based on your query, the following answer has been found:",
            self.config.team_name()
        )
    }

    fn no_suggestion_block(&self) -> Block {
        section(&format!(
            "Sorry, {} — no suggestions have been found.",
            mention(self.user_id.as_deref())
        ))
    }

    fn link_hints(&self, answer: &str) -> Vec<Block> {
        let links = extract_links(answer);
        debug!(links = links.len(), "Extracted links from answer");
        link_hint_blocks(&links, self.config.max_link_hints())
    }
}

/// Decode and truncate the text of every `section` block; other blocks pass
/// through untouched.
pub fn sanitize_sections(mut blocks: Vec<Block>, limit: usize) -> Vec<Block> {
    for block in &mut blocks {
        if block.get("type").and_then(Value::as_str) != Some("section") {
            continue;
        }
        if let Some(Value::String(text)) = block.get_mut("text").and_then(|t| t.get_mut("text")) {
            *text = sanitize(text, limit);
        }
    }
    blocks
}
