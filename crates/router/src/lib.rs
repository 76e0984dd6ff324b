//! Message-intent router: the core of the bot.
//!
//! [`classifier::classify`] maps an inbound event to an [`Intent`];
//! [`composer::Composer`] maps an intent to the outbound reply payload.
//! Both steps are pure and total — every event yields exactly one intent and
//! exactly one payload, with no I/O and no shared state.
//!
//! [`Intent`]: vitryna_common::Intent

pub mod classifier;
pub mod composer;
pub mod texts;

pub use {
    classifier::classify,
    composer::{Composer, StorefrontConfig},
};
