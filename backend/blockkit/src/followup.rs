//! Follow-up prompts posted after feedback or after a quiet period.

use crate::builder::BlockKit;
use crate::elements::{Block, mention, section};

impl BlockKit {
    /// Pointer to the self-help docs, shown after feedback.
    pub fn self_help_link_block(&self) -> Vec<Block> {
        vec![section(&format!(
            "Thank you for your feedback. Alternatively, you may also find the \
             following self-help documentation useful:\n<{}|CloudTech Docs>",
            self.config.docs_url()
        ))]
    }

    /// Invite to keep asking by mentioning the bot.
    pub fn followup_block_kit(&self) -> Vec<Block> {
        vec![section(&format!(
            "Not clear yet? I can guide you one step at a time — \
             just @mention {} with your follow-up questions.",
            mention(self.bot_id.as_deref())
        ))]
    }

    /// Nudge sent when the user has not reacted for a while.
    pub fn followup_delay_message(&self) -> Vec<Block> {
        vec![section(&format!(
            "Did you find the suggestion satisfactory? If not, you can ask me more \
             questions by sending me an @mention {}.",
            mention(self.bot_id.as_deref())
        ))]
    }
}
