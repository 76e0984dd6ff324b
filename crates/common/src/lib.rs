//! Shared boundary types used across all vitryna crates.

pub mod types;

pub use types::{Button, ButtonAction, InboundEvent, Intent, ReplyPayload};
