//! Telegram delivery channel for vitryna.
//!
//! Receives updates via a manual getUpdates long-poll loop, routes each
//! message through the intent router, and renders [`ReplyPayload`] values as
//! Telegram messages with inline keyboards.
//!
//! [`ReplyPayload`]: vitryna_common::ReplyPayload

pub mod bot;
pub mod config;
pub mod error;
pub mod handlers;
pub mod outbound;

pub use {bot::start_polling, config::BotConfig, error::Error};
