use riftlink_shared::Region;
use serde::Serialize;

use crate::types::RiotApiResponse;

use super::LolApiClient;

/// Tournament routes are only served by the americas cluster, whatever the client's region.
const TOURNAMENT_REGION: Region = Region::Na;

/// Which tournament service receives the calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentBackend {
    Live,
    /// Sandbox returning mock data, for development keys.
    Stub,
}

impl TournamentBackend {
    fn route(&self) -> &'static str {
        match self {
            TournamentBackend::Live => "/lol/tournament/v4",
            TournamentBackend::Stub => "/lol/tournament-stub/v4",
        }
    }
}

impl LolApiClient {
    pub fn tournament(&self) -> TournamentApi<'_> {
        TournamentApi {
            client: self,
            backend: TournamentBackend::Live,
        }
    }

    pub fn tournament_stub(&self) -> TournamentApi<'_> {
        TournamentApi {
            client: self,
            backend: TournamentBackend::Stub,
        }
    }
}

/// Tournament-V4 routes, on either the live or the stub backend.
#[derive(Debug, Clone, Copy)]
pub struct TournamentApi<'a> {
    client: &'a LolApiClient,
    backend: TournamentBackend,
}

impl TournamentApi<'_> {
    pub fn backend(&self) -> TournamentBackend {
        self.backend
    }

    /// Register a provider and return its id.
    pub async fn create_provider(
        &self,
        params: &ProviderRegistrationParameters,
    ) -> RiotApiResponse<i64> {
        tracing::trace!("[TOURNAMENT-V4 API] create_provider {:?} ({:?})", params, self.backend);

        self.client.base.post(self.url("/providers"), params).await
    }

    /// Register a tournament for a provider and return its id.
    pub async fn create_tournament(
        &self,
        params: &TournamentRegistrationParameters,
    ) -> RiotApiResponse<i64> {
        tracing::trace!("[TOURNAMENT-V4 API] create_tournament {:?} ({:?})", params, self.backend);

        self.client.base.post(self.url("/tournaments"), params).await
    }

    /// Generate `count` tournament codes for a tournament.
    pub async fn create_codes(
        &self,
        tournament_id: i64,
        count: u32,
        params: &TournamentCodeParameters,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::trace!(
            "[TOURNAMENT-V4 API] create_codes {} x{} ({:?})",
            tournament_id,
            count,
            self.backend
        );
        let path = format!("/codes?tournamentId={}&count={}", tournament_id, count);

        self.client.base.post(self.url(&path), params).await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "https://{}{}{}",
            TOURNAMENT_REGION.to_global_endpoint(),
            self.backend.route(),
            path
        )
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRegistrationParameters {
    /// Platform region the provider runs its tournaments in ("NA", "EUW", ...).
    pub region: String,
    /// Callback URL receiving game results.
    pub url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRegistrationParameters {
    pub provider_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_summoner_ids: Option<Vec<String>>,
    pub map_type: MapType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub pick_type: PickType,
    pub spectator_type: SpectatorType,
    pub team_size: u8,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    SummonersRift,
    TwistedTreeline,
    HowlingAbyss,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickType {
    BlindPick,
    DraftMode,
    AllRandom,
    TournamentDraft,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpectatorType {
    None,
    LobbyOnly,
    All,
}
