use riftlink_riot_api::RiotApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Riot API error: {0}")]
    Api(#[from] RiotApiError),
}
