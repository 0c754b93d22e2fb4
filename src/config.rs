use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use riftlink_shared::Region;

use crate::error::Error;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
    /// Client-side limit on primary API requests. `None` relies on the server's 429s alone.
    pub rate_limit_per_second: Option<NonZeroU32>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>, region: Region) -> Self {
        Self {
            api_key: api_key.into(),
            region,
            rate_limit_per_second: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_rate_limit(mut self, per_second: NonZeroU32) -> Self {
        self.rate_limit_per_second = Some(per_second);
        self
    }

    /// Read the configuration from the environment, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("RIOT_API_KEY must be set".into()))?;

        let region = match lookup("RIOT_REGION") {
            Some(region) => region
                .parse::<Region>()
                .map_err(|e| Error::Config(e.to_string()))?,
            None => Region::Na,
        };

        let rate_limit_per_second = match lookup("RIOT_RATE_LIMIT_PER_SECOND") {
            Some(v) => Some(
                v.parse::<u32>()
                    .ok()
                    .and_then(NonZeroU32::new)
                    .ok_or_else(|| {
                        Error::Config(format!("RIOT_RATE_LIMIT_PER_SECOND is invalid: {v}"))
                    })?,
            ),
            None => None,
        };

        let request_timeout = match lookup("RIOT_REQUEST_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    Error::Config(format!("RIOT_REQUEST_TIMEOUT_SECS is invalid: {v}"))
                })?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            region,
            rate_limit_per_second,
            request_timeout,
        })
    }
}
