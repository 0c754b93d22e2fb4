use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::LolApiClient;

impl LolApiClient {
    /// Champions currently in the free rotation.
    pub async fn get_champion_rotation(&self) -> RiotApiResponse<ChampionInfo> {
        tracing::trace!("[CHAMPION-V3 API] get_champion_rotation in {:?}", self.region);

        self.base
            .get(self.platform_url("/lol/platform/v3/champion-rotations"))
            .await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionInfo {
    pub free_champion_ids: Vec<i32>,
    pub free_champion_ids_for_new_players: Vec<i32>,
    pub max_new_player_level: i32,
}
