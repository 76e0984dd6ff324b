use {
    url::Url,
    vitryna_common::{Button, ButtonAction, Intent, ReplyPayload},
};

use crate::texts;

/// Process-wide storefront destinations, resolved once at startup and
/// injected here so composition never touches the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Mini-app web surface opened by the shop buttons.
    pub storefront_url: Url,
    /// External support page (Instagram).
    pub support_url: Url,
    /// Animation sent with the welcome message.
    pub intro_animation_url: Url,
}

/// Maps a classified [`Intent`] to its outbound [`ReplyPayload`].
///
/// A pure mapping: the same intent always yields a structurally identical
/// payload. Transmission belongs to the delivery channel.
#[derive(Debug, Clone)]
pub struct Composer {
    config: StorefrontConfig,
}

impl Composer {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }

    pub fn storefront_url(&self) -> &Url {
        &self.config.storefront_url
    }

    /// Build the reply for one intent.
    pub fn compose(&self, intent: Intent) -> ReplyPayload {
        match intent {
            Intent::Start => ReplyPayload {
                body_text: texts::WELCOME_CAPTION.to_string(),
                attachment_url: Some(self.config.intro_animation_url.clone()),
                buttons: vec![self.open_shop_button()],
            },
            Intent::Shop => ReplyPayload {
                body_text: texts::SHOP_PROMPT.to_string(),
                attachment_url: None,
                buttons: vec![self.open_shop_button()],
            },
            Intent::Menu => ReplyPayload {
                body_text: texts::MENU_HEADING.to_string(),
                attachment_url: None,
                buttons: vec![
                    Button::new(
                        texts::SHOP_BUTTON,
                        ButtonAction::OpenMiniApp(self.config.storefront_url.clone()),
                    ),
                    Button::new(
                        texts::SUPPORT_BUTTON,
                        ButtonAction::OpenExternalLink(self.config.support_url.clone()),
                    ),
                    Button::new(
                        texts::ABOUT_BUTTON,
                        ButtonAction::Callback(texts::ABOUT_CALLBACK.to_string()),
                    ),
                ],
            },
            Intent::KeywordMatch => ReplyPayload {
                body_text: texts::KEYWORD_REPLY.to_string(),
                attachment_url: None,
                buttons: vec![self.open_shop_button()],
            },
            Intent::Fallback => ReplyPayload {
                body_text: texts::FALLBACK_PROMPT.to_string(),
                attachment_url: None,
                buttons: vec![self.open_shop_button()],
            },
        }
    }

    fn open_shop_button(&self) -> Button {
        Button::new(
            texts::OPEN_SHOP_BUTTON,
            ButtonAction::OpenMiniApp(self.config.storefront_url.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn composer() -> Composer {
        Composer::new(StorefrontConfig {
            storefront_url: Url::parse("https://example.com/shop/").unwrap(),
            support_url: Url::parse("https://instagram.com/example").unwrap(),
            intro_animation_url: Url::parse("https://example.com/intro.gif").unwrap(),
        })
    }

    #[rstest]
    #[case(Intent::Start)]
    #[case(Intent::Shop)]
    #[case(Intent::Menu)]
    #[case(Intent::KeywordMatch)]
    #[case(Intent::Fallback)]
    fn compose_is_deterministic(#[case] intent: Intent) {
        let c = composer();
        assert_eq!(c.compose(intent), c.compose(intent));
    }

    #[rstest]
    #[case(Intent::Start)]
    #[case(Intent::Shop)]
    #[case(Intent::KeywordMatch)]
    #[case(Intent::Fallback)]
    fn non_menu_intents_have_one_mini_app_button(#[case] intent: Intent) {
        let c = composer();
        let payload = c.compose(intent);
        assert_eq!(payload.buttons.len(), 1);
        assert_eq!(
            payload.buttons[0].action,
            ButtonAction::OpenMiniApp(c.storefront_url().clone())
        );
    }

    #[test]
    fn start_carries_intro_animation() {
        let payload = composer().compose(Intent::Start);
        assert_eq!(payload.body_text, texts::WELCOME_CAPTION);
        assert_eq!(
            payload.attachment_url.as_ref().map(Url::as_str),
            Some("https://example.com/intro.gif")
        );
    }

    #[rstest]
    #[case(Intent::Shop)]
    #[case(Intent::Menu)]
    #[case(Intent::KeywordMatch)]
    #[case(Intent::Fallback)]
    fn only_start_has_attachment(#[case] intent: Intent) {
        assert_eq!(composer().compose(intent).attachment_url, None);
    }

    #[test]
    fn menu_has_three_buttons_in_fixed_order() {
        let c = composer();
        let payload = c.compose(Intent::Menu);
        assert_eq!(payload.buttons.len(), 3);
        assert!(matches!(
            payload.buttons[0].action,
            ButtonAction::OpenMiniApp(_)
        ));
        assert!(matches!(
            payload.buttons[1].action,
            ButtonAction::OpenExternalLink(_)
        ));
        assert_eq!(
            payload.buttons[2].action,
            ButtonAction::Callback("about".to_string())
        );
    }

    #[test]
    fn keyword_and_fallback_wording_stay_distinct() {
        let c = composer();
        assert_ne!(
            c.compose(Intent::KeywordMatch).body_text,
            c.compose(Intent::Fallback).body_text
        );
    }
}
