use {
    teloxide::{
        payloads::{SendAnimationSetters, SendMessageSetters},
        prelude::*,
        types::{
            ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode, WebAppInfo,
        },
    },
    tracing::warn,
};

use vitryna_common::{ButtonAction, ReplyPayload};

use crate::error::Result;

/// Render a payload's buttons as an inline keyboard, one button per row,
/// in payload order. `None` when the payload carries no buttons.
pub fn reply_markup(payload: &ReplyPayload) -> Option<InlineKeyboardMarkup> {
    if payload.buttons.is_empty() {
        return None;
    }
    let rows = payload.buttons.iter().map(|button| {
        let rendered = match &button.action {
            ButtonAction::OpenMiniApp(url) => InlineKeyboardButton::web_app(
                button.label.clone(),
                WebAppInfo { url: url.clone() },
            ),
            ButtonAction::OpenExternalLink(url) => {
                InlineKeyboardButton::url(button.label.clone(), url.clone())
            },
            ButtonAction::Callback(id) => {
                InlineKeyboardButton::callback(button.label.clone(), id.clone())
            },
        };
        vec![rendered]
    });
    Some(InlineKeyboardMarkup::new(rows))
}

/// Transmit one reply to a chat.
///
/// A payload with an attachment goes out as a single animation message with
/// the body as caption; otherwise as a text message. Text sends use HTML
/// parse mode with a plain-text retry, since Telegram rejects the whole
/// message when it dislikes the markup.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, payload: &ReplyPayload) -> Result<()> {
    let markup = reply_markup(payload);

    if let Some(animation) = &payload.attachment_url {
        let mut request = bot
            .send_animation(chat_id, InputFile::url(animation.clone()))
            .caption(payload.body_text.clone())
            .parse_mode(ParseMode::Html);
        if let Some(markup) = markup {
            request = request.reply_markup(markup);
        }
        request.await?;
        return Ok(());
    }

    let mut html_request = bot
        .send_message(chat_id, payload.body_text.clone())
        .parse_mode(ParseMode::Html);
    if let Some(markup) = markup.clone() {
        html_request = html_request.reply_markup(markup);
    }
    match html_request.await {
        Ok(_) => Ok(()),
        Err(e) => {
            warn!(
                chat_id = chat_id.0,
                error = %e,
                "HTML send failed, retrying as plain text"
            );
            let mut plain_request = bot.send_message(chat_id, payload.body_text.clone());
            if let Some(markup) = markup {
                plain_request = plain_request.reply_markup(markup);
            }
            plain_request.await?;
            Ok(())
        },
    }
}
