//! League of Legends API client.
//!
//! [`Client`] bundles the primary REST API, Data Dragon and the static reference data behind
//! one transport. The endpoint clients live in [`riftlink_riot_api`] and can be used on their
//! own.

use std::sync::Arc;

use riftlink_riot_api::{
    DataDragonClient, LolApiClient, ReqwestTransport, StaticDataClient, api::HttpTransport,
};
use tracing::info;

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::Error;
pub use riftlink_riot_api as riot_api;
pub use riftlink_shared::{ApiError, Division, LeagueQueue, Region, Tier};

#[derive(Debug, Clone)]
pub struct Client {
    riot: LolApiClient,
    ddragon: DataDragonClient,
    static_data: StaticDataClient,
}

impl Client {
    /// Build every endpoint client on `transport` and resolve the Data Dragon realm of the
    /// configured region.
    pub async fn new(config: &Config, transport: Arc<dyn HttpTransport>) -> Result<Self, Error> {
        let riot = LolApiClient::new(
            transport.clone(),
            &config.api_key,
            config.region,
            config.rate_limit_per_second,
        )?;
        let ddragon = DataDragonClient::new(transport.clone(), config.region).await;
        let static_data = StaticDataClient::new(transport);

        info!(
            "Riot client ready for {} (ddragon v{})",
            config.region,
            ddragon.version()
        );

        Ok(Self {
            riot,
            ddragon,
            static_data,
        })
    }

    /// Same as [`Client::new`] over a `reqwest` transport honouring the configured timeout.
    pub async fn from_config(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Self::new(config, Arc::new(ReqwestTransport::with_client(http))).await
    }

    pub fn riot(&self) -> &LolApiClient {
        &self.riot
    }

    pub fn ddragon(&self) -> &DataDragonClient {
        &self.ddragon
    }

    pub fn static_data(&self) -> &StaticDataClient {
        &self.static_data
    }

    /// Spawn one task per endpoint client logging its request rate every minute.
    pub fn start_metrics_logging(&self) {
        self.riot.start_metrics_logging();
        for metrics in [
            self.ddragon.base().metrics.clone(),
            self.static_data.base().metrics.clone(),
        ] {
            tokio::spawn(async move { metrics.log_loop().await });
        }
    }
}

#[cfg(test)]
mod tests {
    use riftlink_riot_api::{RiotApiError, api::mock::MockTransport};
    use serde_json::json;

    use super::*;

    fn realm() -> serde_json::Value {
        json!({ "n": {}, "v": "9.3.1", "l": "fr_FR", "cdn": "https://ddragon.leagueoflegends.com/cdn" })
    }

    #[tokio::test]
    async fn clients_share_one_transport() {
        let transport = MockTransport::new();
        transport
            .push_json(realm())
            .push_json(json!({ "freeChampionIds": [1, 2], "freeChampionIdsForNewPlayers": [3], "maxNewPlayerLevel": 10 }))
            .push_json(json!([{ "id": 13, "season": "SEASON 2019" }]));
        let config = Config::new("RGAPI-TEST", Region::Euw);

        let client = Client::new(&config, transport.clone()).await.unwrap();
        client.riot().get_champion_rotation().await.unwrap();
        client.static_data().seasons().await.unwrap();

        assert_eq!(client.ddragon().version(), "9.3.1");
        assert_eq!(client.ddragon().language(), "fr_FR");
        assert_eq!(client.riot().region(), Region::Euw);
        assert_eq!(
            transport.urls(),
            vec![
                "https://ddragon.leagueoflegends.com/realms/euw.json",
                "https://euw1.api.riotgames.com/lol/platform/v3/champion-rotations",
                "https://static.developer.riotgames.com/docs/lol/seasons.json",
            ]
        );

        let requests = transport.requests();
        assert!(requests[0].headers.get("x-riot-token").is_none());
        assert_eq!(requests[1].headers["x-riot-token"], "RGAPI-TEST");
        assert!(requests[2].headers.get("x-riot-token").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn unreachable_ddragon_does_not_fail_construction() {
        let transport = MockTransport::new();
        transport.push(503, "").push(503, "");
        let config = Config::new("RGAPI-TEST", Region::Na);

        let client = Client::new(&config, transport).await.unwrap();

        assert_eq!(
            client.ddragon().version(),
            riot_api::ddragon::version::FALLBACK_VERSION
        );
    }

    #[tokio::test]
    async fn invalid_api_key_is_rejected() {
        let config = Config::new("bad\nkey", Region::Na);

        let err = Client::new(&config, MockTransport::new()).await.unwrap_err();

        assert!(matches!(err, Error::Api(RiotApiError::Transport(_))));
    }

    #[tokio::test]
    async fn api_errors_convert_into_the_crate_error() {
        let transport = MockTransport::new();
        transport.push_json(realm()).push(404, "");
        let client = Client::new(&Config::new("RGAPI-TEST", Region::Euw), transport)
            .await
            .unwrap();

        let err: Error = client
            .riot()
            .get_summoner("missing")
            .await
            .unwrap_err()
            .into();

        assert_eq!(
            err.to_string(),
            "Riot API error: HTTP status error: data not found (HTTP 404)"
        );
    }
}
