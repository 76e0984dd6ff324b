use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Telegram(#[from] teloxide::RequestError),

    #[error("BOT_TOKEN is not set")]
    MissingToken,

    #[error("invalid {name}: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
