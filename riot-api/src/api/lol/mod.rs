use std::{num::NonZeroU32, sync::Arc};

use riftlink_shared::Region;

use crate::types::RiotApiResponse;

use super::{client::ApiClientBase, transport::HttpTransport};

pub mod champion_mastery_v4;
pub mod champion_v3;
pub mod league_v4;
pub mod match_v4;
pub mod spectator_v4;
pub mod status_v3;
pub mod summoner_v4;
pub mod tournament_v4;

/// Client of the primary League of Legends API for one region.
///
/// Each endpoint family lives in its own module as an `impl LolApiClient` block.
#[derive(Debug, Clone)]
pub struct LolApiClient {
    base: Arc<ApiClientBase>,
    region: Region,
}

impl LolApiClient {
    /// Create a new API client using the provided key.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        api_key: &str,
        region: Region,
        rate_limit_per_second: Option<NonZeroU32>,
    ) -> RiotApiResponse<Self> {
        let mut base = ApiClientBase::with_api_key(transport, api_key, "LOL")?;
        if let Some(per_second) = rate_limit_per_second {
            base = base.with_rate_limit(per_second);
        }

        Ok(Self::from_base(Arc::new(base), region))
    }

    pub fn from_base(base: Arc<ApiClientBase>, region: Region) -> Self {
        Self { base, region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn base(&self) -> &Arc<ApiClientBase> {
        &self.base
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.base.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    fn platform_url(&self, path: &str) -> String {
        format!("https://{}{}", self.region.to_endpoint(), path)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::mock::MockTransport;

    pub(crate) fn client(transport: &Arc<MockTransport>) -> LolApiClient {
        LolApiClient::new(transport.clone(), "RGAPI-TEST", Region::Euw, None).unwrap()
    }

    #[test]
    fn platform_url_uses_region_host() {
        let api = client(&MockTransport::new());
        assert_eq!(
            api.platform_url("/lol/status/v3/shard-data"),
            "https://euw1.api.riotgames.com/lol/status/v3/shard-data"
        );
        assert_eq!(api.region(), Region::Euw);
    }
}
