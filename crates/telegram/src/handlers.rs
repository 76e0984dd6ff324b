use {
    teloxide::{
        prelude::*,
        types::{CallbackQuery, Message},
    },
    tracing::{debug, warn},
};

use {
    vitryna_common::InboundEvent,
    vitryna_router::{Composer, classify, texts},
};

use crate::outbound;

/// Handle a single inbound Telegram message.
///
/// Every message with a sender yields exactly one reply: the event is
/// classified, composed, and sent. Delivery failures are logged with the
/// user and intent, then swallowed — the user gets no retry and no error
/// message, and the router is never re-invoked.
pub async fn handle_message(msg: Message, bot: &Bot, composer: &Composer) {
    let Some(from) = msg.from.as_ref() else {
        // Service updates (channel posts, join notifications) have no
        // addressable sender.
        debug!(chat_id = msg.chat.id.0, "ignoring update without sender");
        return;
    };

    let event = InboundEvent::new(from.id.0.to_string(), msg.text().map(str::to_string));
    let intent = classify(&event);
    debug!(user_id = %event.user_id, %intent, "classified inbound message");

    let payload = composer.compose(intent);
    if let Err(e) = outbound::send_reply(bot, msg.chat.id, &payload).await {
        warn!(
            user_id = %event.user_id,
            %intent,
            error = %e,
            "reply delivery failed, dropping"
        );
    }
}

/// Handle an inline keyboard button press.
///
/// Always answers the query so the client stops showing a spinner. The
/// `about` button replies with the shop description; anything else is
/// answered and ignored.
pub async fn handle_callback_query(query: CallbackQuery, bot: &Bot) {
    if let Err(e) = bot.answer_callback_query(&query.id).await {
        warn!(user_id = query.from.id.0, error = %e, "failed to answer callback query");
    }

    let Some(data) = query.data.as_deref() else {
        return;
    };
    if data != texts::ABOUT_CALLBACK {
        debug!(user_id = query.from.id.0, data, "ignoring unknown callback data");
        return;
    }

    let Some(chat_id) = query.message.as_ref().map(|m| m.chat().id) else {
        // Button attached to a message too old for Telegram to reference.
        return;
    };
    if let Err(e) = bot.send_message(chat_id, texts::ABOUT_TEXT).await {
        warn!(
            user_id = query.from.id.0,
            error = %e,
            "about reply delivery failed, dropping"
        );
    }
}
