//! End-to-end classify→compose scenarios over the full pipeline.

use {
    url::Url,
    vitryna_common::{ButtonAction, InboundEvent, Intent},
    vitryna_router::{Composer, StorefrontConfig, classify, texts},
};

fn composer() -> Composer {
    Composer::new(StorefrontConfig {
        storefront_url: Url::parse("https://itconcerent.github.io/markesell/").unwrap(),
        support_url: Url::parse("https://instagram.com").unwrap(),
        intro_animation_url: Url::parse("https://i.gifer.com/3P0Ho.gif").unwrap(),
    })
}

fn handle(text: &str) -> (Intent, vitryna_common::ReplyPayload) {
    let event = InboundEvent::new("377114917", Some(text.to_string()));
    let intent = classify(&event);
    (intent, composer().compose(intent))
}

#[test]
fn start_command_sends_animated_welcome() {
    let (intent, payload) = handle("/start");
    assert_eq!(intent, Intent::Start);
    assert!(payload.attachment_url.is_some());
    assert_eq!(payload.buttons.len(), 1);
    assert!(matches!(
        payload.buttons[0].action,
        ButtonAction::OpenMiniApp(_)
    ));
}

#[test]
fn ukrainian_catalog_question_routes_to_keyword_reply() {
    let (intent, payload) = handle("Де у вас каталог?");
    assert_eq!(intent, Intent::KeywordMatch);
    assert_eq!(payload.body_text, texts::KEYWORD_REPLY);
}

#[test]
fn small_talk_gets_the_generic_prompt() {
    let (intent, payload) = handle("hello");
    assert_eq!(intent, Intent::Fallback);
    assert_eq!(payload.body_text, texts::FALLBACK_PROMPT);
}

#[test]
fn menu_command_sends_three_buttons_in_order() {
    let (intent, payload) = handle("/menu");
    assert_eq!(intent, Intent::Menu);
    let kinds: Vec<_> = payload
        .buttons
        .iter()
        .map(|b| match &b.action {
            ButtonAction::OpenMiniApp(_) => "mini_app",
            ButtonAction::OpenExternalLink(_) => "link",
            ButtonAction::Callback(_) => "callback",
        })
        .collect();
    assert_eq!(kinds, ["mini_app", "link", "callback"]);
}

#[test]
fn every_event_yields_exactly_one_reply() {
    // Router totality: a grab bag of inputs, none may panic and all must
    // produce a payload with at least one button.
    for text in ["", "/", "//", "/start@", "🤖", "BUY", "restore my order"] {
        let (_, payload) = handle(text);
        assert!(!payload.buttons.is_empty());
    }
}
