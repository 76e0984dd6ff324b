use {
    secrecy::ExposeSecret,
    teloxide::{
        ApiError, RequestError,
        payloads::{SetChatMenuButtonSetters, SetMyDescriptionSetters},
        prelude::*,
        types::{AllowedUpdate, BotCommand, MenuButton, UpdateKind, WebAppInfo},
    },
    tokio_util::sync::CancellationToken,
    tracing::{debug, info, warn},
};

use vitryna_router::{Composer, texts};

use crate::{config::BotConfig, handlers};

/// Connect the bot and start the getUpdates long-poll loop.
///
/// Verifies credentials, registers the command menu and the mini-app chat
/// menu button, then spawns the polling task. The task runs until the
/// `CancellationToken` is cancelled; the returned handle resolves once the
/// loop has drained.
pub async fn start_polling(
    config: BotConfig,
    cancel: CancellationToken,
) -> anyhow::Result<tokio::task::JoinHandle<()>> {
    // Client timeout longer than the long-polling timeout (30s) so the HTTP
    // client doesn't abort the request before Telegram responds.
    let client = teloxide::net::default_reqwest_settings()
        .timeout(std::time::Duration::from_secs(45))
        .build()?;
    let bot = Bot::with_client(config.token.expose_secret(), client);

    // Verify credentials before touching anything else.
    let me = bot.get_me().await?;
    info!(username = ?me.username, "telegram bot connected");

    // Delete any existing webhook so long polling works.
    bot.delete_webhook().send().await?;

    setup_bot_surface(&bot, &config).await;

    let composer = Composer::new(config.storefront);

    let handle = tokio::spawn(async move {
        run_polling_loop(bot, composer, cancel).await;
    });
    Ok(handle)
}

/// Register slash commands, the profile description, and the persistent
/// mini-app menu button. Best effort: failures are logged and the bot still
/// answers messages.
async fn setup_bot_surface(bot: &Bot, config: &BotConfig) {
    let commands = vec![
        BotCommand::new("start", "Запустити бота"),
        BotCommand::new("shop", "Відкрити магазин"),
        BotCommand::new("menu", "Головне меню"),
    ];
    if let Err(e) = bot.set_my_commands(commands).await {
        warn!(error = %e, "failed to register bot commands");
    }

    if let Err(e) = bot.set_my_description().description(texts::ABOUT_TEXT).await {
        warn!(error = %e, "failed to set bot description");
    }

    let menu_button = MenuButton::WebApp {
        text: texts::SHOP_BUTTON.to_string(),
        web_app: WebAppInfo {
            url: config.storefront.storefront_url.clone(),
        },
    };
    if let Err(e) = bot.set_chat_menu_button().menu_button(menu_button).await {
        warn!(error = %e, "failed to set chat menu button");
    }
}

async fn run_polling_loop(bot: Bot, composer: Composer, cancel: CancellationToken) {
    info!("starting telegram polling loop");
    let mut offset: i32 = 0;

    loop {
        let request = bot
            .get_updates()
            .offset(offset)
            .timeout(30)
            .allowed_updates(vec![AllowedUpdate::Message, AllowedUpdate::CallbackQuery]);
        let result = tokio::select! {
            () = cancel.cancelled() => {
                info!("telegram polling stopped");
                break;
            },
            r = request.send() => r,
        };

        match result {
            Ok(updates) => {
                debug!(count = updates.len(), "got telegram updates");
                for update in updates {
                    offset = update.id.as_offset();
                    match update.kind {
                        UpdateKind::Message(msg) => {
                            handlers::handle_message(msg, &bot, &composer).await;
                        },
                        UpdateKind::CallbackQuery(query) => {
                            handlers::handle_callback_query(query, &bot).await;
                        },
                        other => {
                            debug!("ignoring non-message update: {other:?}");
                        },
                    }
                }
            },
            Err(e) => {
                // Another instance is polling with the same token; back off
                // for good instead of fighting over updates.
                if matches!(&e, RequestError::Api(ApiError::TerminatedByOtherGetUpdates)) {
                    warn!("another bot instance is already running with this token, stopping");
                    cancel.cancel();
                    break;
                }
                warn!(error = %e, "telegram getUpdates failed");
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            },
        }
    }
}
