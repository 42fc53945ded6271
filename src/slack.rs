//! Supports posting a structured message to a Slack incoming webhook.
//!
//! Messages are built up from plain value objects, each of which serialises
//! straight to the JSON Slack expects, omitting anything that was never set.
//!
//! See [message::Message] and [api::SlackClient].

pub mod action;
pub mod api;
pub mod attachment;
pub mod error;
pub mod field;
pub mod message;
