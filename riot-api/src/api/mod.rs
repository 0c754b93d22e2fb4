pub mod client;
pub mod lol;
pub mod metrics;
pub mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub mod types {
    pub use super::lol::champion_mastery_v4::ChampionMasteryDto;
    pub use super::lol::champion_v3::ChampionInfo;
    pub use super::lol::league_v4::{LeagueEntryDto, LeagueItemDto, LeagueListDto, MiniSeriesDto};
    pub use super::lol::match_v4::{
        MatchDto, MatchListEvent, MatchListStream, MatchReferenceDto, MatchTimelineDto,
        MatchlistDto, ParticipantDto,
    };
    pub use super::lol::spectator_v4::{CurrentGameInfo, FeaturedGames};
    pub use super::lol::status_v3::ShardStatus;
    pub use super::lol::summoner_v4::SummonerDto;
    pub use super::lol::tournament_v4::{
        MapType, PickType, ProviderRegistrationParameters, SpectatorType, TournamentCodeParameters,
        TournamentRegistrationParameters,
    };
}

pub use client::ApiClientBase;
pub use lol::LolApiClient;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
