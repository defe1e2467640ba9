//! Command surface for the demo's "mutations".
//!
//! Quote requests and status updates have no backing store; dispatching a
//! command logs it as a structured event and hands back a receipt. The
//! dataset itself stays untouched, so dashboards recompute identical numbers.

use serde::Serialize;
use uuid::Uuid;

use super::entities::BookingStatus;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BookingCommand {
    RequestQuote {
        artist_id: String,
    },
    UpdateStatus {
        request_id: String,
        status: BookingStatus,
    },
}

impl BookingCommand {
    fn name(&self) -> &'static str {
        match self {
            BookingCommand::RequestQuote { .. } => "request_quote",
            BookingCommand::UpdateStatus { .. } => "update_status",
        }
    }
}

/// Acknowledgement returned to the caller; `reference` is what a real backend
/// would hand out as a tracking id.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandReceipt {
    pub reference: String,
    pub command: BookingCommand,
}

pub fn dispatch(command: BookingCommand) -> CommandReceipt {
    let reference = Uuid::new_v4().to_string();
    match serde_json::to_string(&command) {
        Ok(payload) => {
            tracing::info!(command = command.name(), %reference, %payload, "dispatched booking command");
        }
        Err(err) => {
            tracing::warn!(command = command.name(), %reference, %err, "failed to serialize command payload");
        }
    }
    CommandReceipt { reference, command }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_echoes_the_command() {
        let command = BookingCommand::RequestQuote {
            artist_id: "2".to_string(),
        };
        let receipt = dispatch(command.clone());
        assert_eq!(receipt.command, command);
        assert!(!receipt.reference.is_empty());
    }

    #[test]
    fn references_are_unique_per_dispatch() {
        let command = BookingCommand::UpdateStatus {
            request_id: "1".to_string(),
            status: BookingStatus::Accepted,
        };
        let first = dispatch(command.clone());
        let second = dispatch(command);
        assert_ne!(first.reference, second.reference);
    }

    #[test]
    fn commands_serialize_with_tag_and_status() {
        let json = serde_json::to_string(&BookingCommand::UpdateStatus {
            request_id: "4".to_string(),
            status: BookingStatus::Rejected,
        })
        .unwrap();
        assert!(json.contains("\"command\":\"update_status\""));
        assert!(json.contains("\"status\":\"rejected\""));
    }
}
