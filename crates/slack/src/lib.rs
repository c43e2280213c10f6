//! Slack slash-command surface for the cat facts service.
//!
//! - **Commands** (`commands`) - `/cat-facts about|info|cats|<tag>` parsing and dispatch
//! - **Responses** (`responses`) - fixed texts and the attachment payload envelope
//!
//! # Architecture
//!
//! ```text
//! command text → parse_fact_command → CommandRouter → FactStore
//!                                          ↓
//!                          CommandResponse (text | payload)
//! ```

pub mod commands;
pub mod responses;

pub use commands::{parse_fact_command, CommandError, CommandRouter, FactCommand};
pub use responses::{Attachment, CommandResponse, ResponseType, SlashResponse};
