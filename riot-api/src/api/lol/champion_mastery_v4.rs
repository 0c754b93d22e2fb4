use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::LolApiClient;

const MASTERY_ROUTE: &str = "/lol/champion-mastery/v4";

impl LolApiClient {
    /// All champion masteries of a summoner, sorted by points on the server side.
    pub async fn get_champion_masteries(
        &self,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<ChampionMasteryDto>> {
        tracing::trace!(
            "[CHAMPION-MASTERY-V4 API] get_champion_masteries {} in {:?}",
            summoner_id,
            self.region
        );
        let path = format!("{}/champion-masteries/by-summoner/{}", MASTERY_ROUTE, summoner_id);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_champion_mastery(
        &self,
        summoner_id: &str,
        champion_id: i64,
    ) -> RiotApiResponse<ChampionMasteryDto> {
        tracing::trace!(
            "[CHAMPION-MASTERY-V4 API] get_champion_mastery {}/{} in {:?}",
            summoner_id,
            champion_id,
            self.region
        );
        let path = format!(
            "{}/champion-masteries/by-summoner/{}/by-champion/{}",
            MASTERY_ROUTE, summoner_id, champion_id
        );

        self.base.get(self.platform_url(&path)).await
    }

    /// Sum of the champion mastery levels of a summoner.
    pub async fn get_champion_mastery_score(&self, summoner_id: &str) -> RiotApiResponse<i32> {
        tracing::trace!(
            "[CHAMPION-MASTERY-V4 API] get_champion_mastery_score {} in {:?}",
            summoner_id,
            self.region
        );
        let path = format!("{}/scores/by-summoner/{}", MASTERY_ROUTE, summoner_id);

        self.base.get(self.platform_url(&path)).await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i32,
    pub champion_points_since_last_level: i64,
    pub champion_points_until_next_level: i64,
    pub last_play_time: i64,
    pub chest_granted: bool,
    pub tokens_earned: i32,
    pub summoner_id: String,
}
