use vitryna_common::{InboundEvent, Intent};

/// Free-text keywords that route to [`Intent::KeywordMatch`].
///
/// Lowercase; matched by substring containment on the lowercased text, so
/// mixed-case and Cyrillic variants fold onto these entries. Extend here to
/// localize — the classifier control flow never changes.
pub const STOREFRONT_KEYWORDS: &[&str] = &[
    "shop", "store", "buy", "catalog", "магазин", "купити", "товар", "каталог",
];

/// A registered slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Shop,
    Menu,
}

/// Parse the leading slash command out of a message text.
///
/// Accepts trailing arguments (`/shop please`) and the `@BotName` suffix
/// Telegram appends in group chats (`/start@SomeBot`). Returns `None` for
/// unregistered commands, which then fall through to keyword matching.
fn parse_command(text: &str) -> Option<Command> {
    let token = text.split_whitespace().next()?;
    let name = token.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    match name.to_ascii_lowercase().as_str() {
        "start" => Some(Command::Start),
        "shop" => Some(Command::Shop),
        "menu" => Some(Command::Menu),
        _ => None,
    }
}

/// Classify an inbound event into exactly one [`Intent`].
///
/// Pure and total: command checks take precedence over keyword checks, and
/// absent or empty text classifies as [`Intent::Fallback`] rather than
/// erroring. Which keyword matched is irrelevant — all keyword hits route to
/// the same intent.
pub fn classify(event: &InboundEvent) -> Intent {
    let Some(text) = event.text.as_deref() else {
        return Intent::Fallback;
    };

    if event.is_command {
        match parse_command(text) {
            Some(Command::Start) => return Intent::Start,
            Some(Command::Shop) => return Intent::Shop,
            Some(Command::Menu) => return Intent::Menu,
            None => {},
        }
    }

    let lowered = text.to_lowercase();
    if STOREFRONT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return Intent::KeywordMatch;
    }

    Intent::Fallback
}
