use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::LolApiClient;

const SPECTATOR_ROUTE: &str = "/lol/spectator/v4";

impl LolApiClient {
    /// Game the summoner is currently playing; a 404 means they are not in game.
    pub async fn get_current_game(&self, summoner_id: &str) -> RiotApiResponse<CurrentGameInfo> {
        tracing::trace!("[SPECTATOR-V4 API] get_current_game {} in {:?}", summoner_id, self.region);
        let path = format!("{}/active-games/by-summoner/{}", SPECTATOR_ROUTE, summoner_id);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_featured_games(&self) -> RiotApiResponse<FeaturedGames> {
        tracing::trace!("[SPECTATOR-V4 API] get_featured_games in {:?}", self.region);
        let path = format!("{}/featured-games", SPECTATOR_ROUTE);

        self.base.get(self.platform_url(&path)).await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfo {
    pub game_id: i64,
    pub game_type: String,
    pub game_start_time: i64,
    pub map_id: i64,
    pub game_length: i64,
    pub platform_id: String,
    pub game_mode: String,
    pub game_queue_config_id: Option<i64>,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampion>,
    pub observers: Observer,
    pub participants: Vec<CurrentGameParticipant>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampion {
    pub pick_turn: i32,
    pub champion_id: i64,
    pub team_id: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observer {
    pub encryption_key: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    pub champion_id: i64,
    pub profile_icon_id: i64,
    pub bot: bool,
    pub team_id: i64,
    pub summoner_name: String,
    pub summoner_id: Option<String>,
    pub spell1_id: i64,
    pub spell2_id: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGames {
    pub game_list: Vec<FeaturedGameInfo>,
    /// Suggested seconds to wait before refreshing the list.
    pub client_refresh_interval: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGameInfo {
    pub game_id: i64,
    pub game_type: String,
    pub game_start_time: i64,
    pub map_id: i64,
    pub game_length: i64,
    pub platform_id: String,
    pub game_mode: String,
    pub game_queue_config_id: Option<i64>,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampion>,
    pub observers: Observer,
    pub participants: Vec<CurrentGameParticipant>,
}
