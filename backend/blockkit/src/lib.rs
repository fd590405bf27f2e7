//! Slack Block Kit payloads for the helpdesk bot.
//!
//! Turns answer text, feedback prompts, and ticket outcomes into the block
//! structures Slack renders. Transport, ticketing, and answer generation live
//! elsewhere; everything here is a pure formatter.

pub mod builder;
pub mod elements;
pub mod feedback;
pub mod followup;
pub mod links;
pub mod routing;
pub mod text;
pub mod ticket;

pub use builder::{BlockKit, Payload, sanitize_sections};
pub use elements::{Block, ButtonStyle};
pub use feedback::{FeedbackScope, feedback_blocks};
pub use helpdesk_config::BlockKitConfig;
pub use links::extract_links;
pub use routing::channel_label;
pub use ticket::TicketInfo;
