use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::LolApiClient;

const SUMMONER_ROUTE: &str = "/lol/summoner/v4/summoners";

impl LolApiClient {
    pub async fn get_summoner_by_name(&self, name: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[SUMMONER-V4 API] get_summoner_by_name {} in {:?}", name, self.region);
        let path = format!("{}/by-name/{}", SUMMONER_ROUTE, urlencoding::encode(name));

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_summoner_by_account_id(&self, account_id: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!(
            "[SUMMONER-V4 API] get_summoner_by_account_id {} in {:?}",
            account_id,
            self.region
        );
        let path = format!("{}/by-account/{}", SUMMONER_ROUTE, account_id);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_summoner_by_puuid(&self, puuid: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[SUMMONER-V4 API] get_summoner_by_puuid {} in {:?}", puuid, self.region);
        let path = format!("{}/by-puuid/{}", SUMMONER_ROUTE, puuid);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_summoner(&self, summoner_id: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[SUMMONER-V4 API] get_summoner {} in {:?}", summoner_id, self.region);
        let path = format!("{}/{}", SUMMONER_ROUTE, summoner_id);

        self.base.get(self.platform_url(&path)).await
    }
}

/// Representation of the summoner data response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id.
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub name: String,
    pub profile_icon_id: i32,
    /// Epoch milliseconds of the last modification.
    pub revision_date: i64,
    pub summoner_level: i64,
}
