use riftlink_shared::{Division, LeagueQueue, Tier};
use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::LolApiClient;

const LEAGUE_ROUTE: &str = "/lol/league/v4";

impl LolApiClient {
    pub async fn get_challenger_league(&self, queue: LeagueQueue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LEAGUE-V4 API] get_challenger_league {} in {:?}", queue, self.region);
        let path = format!("{}/challengerleagues/by-queue/{}", LEAGUE_ROUTE, queue);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_grandmaster_league(
        &self,
        queue: LeagueQueue,
    ) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LEAGUE-V4 API] get_grandmaster_league {} in {:?}", queue, self.region);
        let path = format!("{}/grandmasterleagues/by-queue/{}", LEAGUE_ROUTE, queue);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_master_league(&self, queue: LeagueQueue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LEAGUE-V4 API] get_master_league {} in {:?}", queue, self.region);
        let path = format!("{}/masterleagues/by-queue/{}", LEAGUE_ROUTE, queue);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_league(&self, league_id: &str) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LEAGUE-V4 API] get_league {} in {:?}", league_id, self.region);
        let path = format!("{}/leagues/{}", LEAGUE_ROUTE, league_id);

        self.base.get(self.platform_url(&path)).await
    }

    /// One page (starting at 1) of the entries of a queue, tier and division.
    pub async fn get_league_entries(
        &self,
        queue: LeagueQueue,
        tier: Tier,
        division: Division,
        page: u32,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!(
            "[LEAGUE-V4 API] get_league_entries {} {} {} page {} in {:?}",
            queue,
            tier,
            division,
            page,
            self.region
        );
        let path = format!(
            "{}/entries/{}/{}/{}?page={}",
            LEAGUE_ROUTE,
            queue,
            tier,
            division,
            page.max(1)
        );

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_leagues_by_summoner(
        &self,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!("[LEAGUE-V4 API] get_leagues_by_summoner {} in {:?}", summoner_id, self.region);
        let path = format!("{}/entries/by-summoner/{}", LEAGUE_ROUTE, summoner_id);

        self.base.get(self.platform_url(&path)).await
    }
}

/// Representation of a whole league (challenger, master, or one by id).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListDto {
    pub league_id: String,
    pub tier: Tier,
    pub queue: String,
    pub name: String,
    pub entries: Vec<LeagueItemDto>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueItemDto {
    pub summoner_id: String,
    pub summoner_name: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub veteran: bool,
    pub inactive: bool,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    pub mini_series: Option<MiniSeriesDto>,
}

/// Representation of the league entry response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub league_id: String,
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub summoner_id: String,
    pub summoner_name: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub veteran: bool,
    pub inactive: bool,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    pub mini_series: Option<MiniSeriesDto>,
}

impl LeagueEntryDto {
    pub fn is_ranked_solo_duo(&self) -> bool {
        self.queue_type.eq(LeagueQueue::SoloDuo.as_str())
    }

    pub fn is_ranked_flex(&self) -> bool {
        self.queue_type.eq(LeagueQueue::Flex.as_str())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MiniSeriesDto {
    pub losses: i32,
    pub progress: String,
    pub target: i32,
    pub wins: i32,
}
