//! HelpCentral ticket messages: call to action, progress, and outcome.

use crate::builder::Payload;
use crate::elements::{actions, button, mention, rich_text, section};
use helpdesk_config::BlockKitConfig;
use serde::{Deserialize, Serialize};

/// Action id of the "Open support request" button.
pub const RAISE_TICKET_ACTION: &str = "vertex_raise_ticket";

const TICKET_FAILED: &str = "There seems to be a problem while raising the ticket. \
    Please try again after some time or contact the development team.";

const OUTAGE_NOTICE: &str = "*Please be advised:* Due to a scheduled maintenance, \
    HelpCentral will be offline from Friday, 01/31/2025 8:00 PM PT to Saturday, 02/01/2025.";

/// Outcome of a ticket-creation attempt, as reported by the ticket service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketInfo {
    pub ticket_number: Option<String>,
    /// Absent when creation failed.
    pub ticket_url: Option<String>,
    pub user_id: Option<String>,
    #[serde(skip)]
    pub config: BlockKitConfig,
}

impl TicketInfo {
    pub fn new(
        ticket_number: Option<String>,
        ticket_url: Option<String>,
        user_id: Option<String>,
    ) -> Self {
        Self {
            ticket_number,
            ticket_url,
            user_id,
            config: BlockKitConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BlockKitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn open_ticket_cta() -> Payload {
        Payload::new(vec![
            section(
                "Hello. If you are looking for assistance from CloudTech/CSE Support, \
                 please click the button to open a ticket; someone will follow up with you.",
            ),
            actions(vec![button("Open support request", RAISE_TICKET_ACTION, None)]),
        ])
    }

    pub fn clicked_ticket_button(&self) -> Payload {
        Payload::new(vec![section(&format!(
            "{} clicked on *Open Support Request*",
            mention(self.user_id.as_deref())
        ))])
    }

    pub fn ticket_creation_followup() -> Payload {
        Payload::new(vec![rich_text("Creating your ticket… one moment please.")])
    }

    /// Final message: a link to the new ticket, or a retry notice when the
    /// ticket service returned no URL.
    pub fn ticket_details(&self) -> Payload {
        let text = match self.ticket_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => format!(
                "The following HelpCentral ticket has been created on your behalf \
                 <{url}|{}> — someone from our team will follow up.\n\
                 See SLA details: <{}|SLA link>",
                self.ticket_number.as_deref().unwrap_or("None"),
                self.config.sla_url(),
            ),
            None => {
                tracing::warn!(user_id = ?self.user_id, "Ticket creation returned no URL");
                TICKET_FAILED.to_string()
            }
        };
        Payload::new(vec![section(&text)])
    }

    pub fn outage_banner() -> Payload {
        Payload::new(vec![section(OUTAGE_NOTICE)])
    }
}
