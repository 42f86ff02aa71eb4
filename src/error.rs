use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Niepoprawny region: {0}")]
    InvalidRegion(String),

    #[error("Wystąpił błąd podczas pobierania profilu przywoływacza.")]
    ProfileFetch,

    #[error("Wystąpił błąd podczas pobierania danych rang przywoływacza.")]
    RankFetch,

    #[error("Wystąpił błąd podczas pobierania danych o mistrzostwach przywoływacza.")]
    MasteryFetch,

    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}
