use {
    secrecy::Secret,
    url::Url,
};

use vitryna_router::StorefrontConfig;

use crate::error::{Error, Result};

/// Production storefront mini-app.
pub const DEFAULT_STOREFRONT_URL: &str = "https://itconcerent.github.io/markesell/";
/// Support page linked from the main menu.
pub const DEFAULT_SUPPORT_URL: &str = "https://instagram.com";
/// Animation sent with the welcome message.
pub const DEFAULT_INTRO_ANIMATION_URL: &str = "https://i.gifer.com/3P0Ho.gif";

/// Process-wide bot configuration, resolved once at startup.
pub struct BotConfig {
    /// Bot token from @BotFather.
    pub token: Secret<String>,
    /// Destinations injected into the reply composer.
    pub storefront: StorefrontConfig,
}

impl BotConfig {
    /// Load configuration from the environment.
    ///
    /// `BOT_TOKEN` is required; the storefront URLs fall back to the
    /// production defaults when unset. Fails before any event is handled, so
    /// a misconfigured process never answers a user.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("BOT_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(Secret::new)
            .ok_or(Error::MissingToken)?;

        let storefront = StorefrontConfig {
            storefront_url: env_url("WEBAPP_URL", DEFAULT_STOREFRONT_URL)?,
            support_url: env_url("SUPPORT_URL", DEFAULT_SUPPORT_URL)?,
            intro_animation_url: env_url("INTRO_ANIMATION_URL", DEFAULT_INTRO_ANIMATION_URL)?,
        };

        Ok(Self { token, storefront })
    }
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"[REDACTED]")
            .field("storefront", &self.storefront)
            .finish()
    }
}

fn env_url(name: &'static str, default: &str) -> Result<Url> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    parse_url(name, &raw)
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| Error::InvalidUrl { name, source })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("WEBAPP_URL", DEFAULT_STOREFRONT_URL)]
    #[case("SUPPORT_URL", DEFAULT_SUPPORT_URL)]
    #[case("INTRO_ANIMATION_URL", DEFAULT_INTRO_ANIMATION_URL)]
    fn default_urls_parse(#[case] name: &'static str, #[case] raw: &str) {
        assert!(parse_url(name, raw).is_ok());
    }

    #[test]
    fn invalid_url_names_the_variable() {
        let err = parse_url("WEBAPP_URL", "not a url").unwrap_err();
        assert!(err.to_string().contains("WEBAPP_URL"), "{err}");
    }

    #[test]
    fn debug_redacts_token() {
        let config = BotConfig {
            token: Secret::new("123:ABC".into()),
            storefront: StorefrontConfig {
                storefront_url: Url::parse(DEFAULT_STOREFRONT_URL).unwrap(),
                support_url: Url::parse(DEFAULT_SUPPORT_URL).unwrap(),
                intro_animation_url: Url::parse(DEFAULT_INTRO_ANIMATION_URL).unwrap(),
            },
        };
        let dump = format!("{config:?}");
        assert!(!dump.contains("123:ABC"), "{dump}");
        assert!(dump.contains("[REDACTED]"), "{dump}");
    }
}
