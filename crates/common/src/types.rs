use {
    serde::{Deserialize, Serialize},
    url::Url,
};

/// A single user-originated message delivered by the chat platform.
///
/// Immutable; one value per inbound message, discarded after handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Raw message text. Absent for non-text events (stickers, photos).
    pub text: Option<String>,
    /// Opaque platform identifier for the sender.
    pub user_id: String,
    /// True when the text begins with the `/` command prefix.
    pub is_command: bool,
}

impl InboundEvent {
    pub fn new(user_id: impl Into<String>, text: Option<String>) -> Self {
        let is_command = text.as_deref().is_some_and(|t| t.starts_with('/'));
        Self {
            text,
            user_id: user_id.into(),
            is_command,
        }
    }
}

/// The classified purpose of an inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The registered `/start` command.
    Start,
    /// The registered `/shop` command.
    Shop,
    /// The registered `/menu` command.
    Menu,
    /// Free text containing a storefront keyword.
    KeywordMatch,
    /// Anything else, including absent text.
    Fallback,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Shop => "shop",
            Self::Menu => "menu",
            Self::KeywordMatch => "keyword_match",
            Self::Fallback => "fallback",
        };
        write!(f, "{name}")
    }
}

/// What an interactive button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    /// Open an embedded web surface inside the chat client (mini-app).
    OpenMiniApp(Url),
    /// Open an external hyperlink in the browser.
    OpenExternalLink(Url),
    /// Send an opaque callback identifier back to the bot.
    Callback(String),
}

/// One interactive control attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// The outbound reply for one handled event.
///
/// Constructed fresh per response, handed to the delivery channel, and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyPayload {
    pub body_text: String,
    /// Animated attachment sent alongside the body (intro animation).
    pub attachment_url: Option<Url>,
    /// Buttons rendered under the message, in order.
    pub buttons: Vec<Button>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_prefix_sets_is_command() {
        let event = InboundEvent::new("42", Some("/start".into()));
        assert!(event.is_command);
    }

    #[test]
    fn plain_text_is_not_command() {
        let event = InboundEvent::new("42", Some("hello".into()));
        assert!(!event.is_command);
    }

    #[test]
    fn absent_text_is_not_command() {
        let event = InboundEvent::new("42", None);
        assert!(!event.is_command);
        assert_eq!(event.text, None);
    }

    #[test]
    fn intent_serializes_snake_case() {
        let json = serde_json::to_string(&Intent::KeywordMatch).unwrap();
        assert_eq!(json, "\"keyword_match\"");
    }

    #[test]
    fn button_action_roundtrip() {
        let action = ButtonAction::Callback("about".into());
        let json = serde_json::to_string(&action).unwrap();
        let back: ButtonAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
