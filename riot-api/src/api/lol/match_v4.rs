use std::collections::HashMap;

use futures::{Stream, stream};
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

use crate::types::{RiotApiError, RiotApiResponse};

use super::LolApiClient;

const MATCH_ROUTE: &str = "/lol/match/v4";

/// Largest `endIndex - beginIndex` window the match list endpoint accepts.
pub const MATCH_LIST_PAGE_SIZE: u32 = 100;
const MATCH_LIST_CHANNEL_CAPACITY: usize = 100;

impl LolApiClient {
    pub async fn get_match(&self, match_id: i64) -> RiotApiResponse<MatchDto> {
        tracing::trace!("[MATCH-V4 API] get_match {} in {:?}", match_id, self.region);
        let path = format!("{}/matches/{}", MATCH_ROUTE, match_id);

        self.base.get(self.platform_url(&path)).await
    }

    pub async fn get_match_timeline(&self, match_id: i64) -> RiotApiResponse<MatchTimelineDto> {
        tracing::trace!("[MATCH-V4 API] get_match_timeline {} in {:?}", match_id, self.region);
        let path = format!("{}/timelines/by-match/{}", MATCH_ROUTE, match_id);

        self.base.get(self.platform_url(&path)).await
    }

    /// Matches of an account between `begin_index` (inclusive) and `end_index` (exclusive).
    pub async fn get_match_list(
        &self,
        account_id: &str,
        begin_index: u32,
        end_index: u32,
    ) -> RiotApiResponse<MatchlistDto> {
        tracing::trace!(
            "[MATCH-V4 API] get_match_list {} [{}, {}) in {:?}",
            account_id,
            begin_index,
            end_index,
            self.region
        );
        let path = format!(
            "{}/matchlists/by-account/{}?beginIndex={}&endIndex={}",
            MATCH_ROUTE, account_id, begin_index, end_index
        );

        self.base.get(self.platform_url(&path)).await
    }

    /// Stream the whole match list of an account, one match at a time.
    ///
    /// Pages of [`MATCH_LIST_PAGE_SIZE`] are fetched on a background task and pushed through a
    /// bounded channel, so the task waits whenever the consumer falls behind. The stream ends
    /// with [`MatchListEvent::End`] after the first short page, or with
    /// [`MatchListEvent::Failed`] on the first error.
    ///
    /// Cancelling `cancel`, or dropping the returned stream, stops the task.
    pub fn match_list_stream(&self, account_id: &str, cancel: CancellationToken) -> MatchListStream {
        let (tx, rx) = mpsc::channel(MATCH_LIST_CHANNEL_CAPACITY);
        let token = cancel.child_token();

        let api = self.clone();
        let account_id = account_id.to_string();
        let task_token = token.clone();
        tokio::spawn(async move { api.drain_match_list(account_id, tx, task_token).await });

        MatchListStream {
            rx,
            _guard: token.drop_guard(),
        }
    }

    async fn drain_match_list(
        self,
        account_id: String,
        tx: mpsc::Sender<MatchListEvent>,
        cancel: CancellationToken,
    ) {
        let mut begin = 0;

        loop {
            let page = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("match list stream of {} cancelled", account_id);
                    return;
                }
                page = self.get_match_list(&account_id, begin, begin + MATCH_LIST_PAGE_SIZE) => page,
            };

            let matches = match page {
                Ok(list) => list.matches,
                Err(e) => {
                    warn!("match list stream of {} failed at index {}: {}", account_id, begin, e);
                    send_event(&tx, &cancel, MatchListEvent::Failed(e)).await;
                    return;
                }
            };

            let exhausted = matches.len() < MATCH_LIST_PAGE_SIZE as usize;
            for reference in matches {
                if !send_event(&tx, &cancel, MatchListEvent::Match(reference)).await {
                    debug!("match list stream of {} stopped by consumer", account_id);
                    return;
                }
            }

            if exhausted {
                send_event(&tx, &cancel, MatchListEvent::End).await;
                return;
            }
            begin += MATCH_LIST_PAGE_SIZE;
        }
    }
}

/// Returns `false` when the stream was cancelled or its receiver is gone.
async fn send_event(
    tx: &mpsc::Sender<MatchListEvent>,
    cancel: &CancellationToken,
    event: MatchListEvent,
) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        sent = tx.send(event) => sent.is_ok(),
    }
}

/// Item of a [`MatchListStream`].
#[derive(Debug)]
pub enum MatchListEvent {
    Match(MatchReferenceDto),
    /// Every match was delivered.
    End,
    /// Terminal error; nothing follows it.
    Failed(RiotApiError),
}

/// Receiving side of [`LolApiClient::match_list_stream`].
#[derive(Debug)]
pub struct MatchListStream {
    rx: mpsc::Receiver<MatchListEvent>,
    _guard: DropGuard,
}

impl MatchListStream {
    /// Next event, or `None` once the producer stopped without a terminal event (cancelled).
    pub async fn recv(&mut self) -> Option<MatchListEvent> {
        self.rx.recv().await
    }

    /// Adapt into a [`Stream`] of results ending after the last match or the first error.
    pub fn into_stream(self) -> impl Stream<Item = RiotApiResponse<MatchReferenceDto>> {
        stream::unfold(Some(self), |state| async move {
            let mut this = state?;
            match this.recv().await? {
                MatchListEvent::Match(reference) => Some((Ok(reference), Some(this))),
                MatchListEvent::Failed(e) => Some((Err(e), None)),
                MatchListEvent::End => None,
            }
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchlistDto {
    pub matches: Vec<MatchReferenceDto>,
    pub start_index: i32,
    pub end_index: i32,
    pub total_games: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchReferenceDto {
    pub game_id: i64,
    pub platform_id: String,
    pub champion: i32,
    pub queue: i32,
    pub season: i32,
    pub timestamp: i64,
    pub role: String,
    pub lane: String,
}

/// Representation of the match data response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub game_id: i64,
    pub platform_id: String,
    pub game_creation: i64,
    pub game_duration: i64,
    pub queue_id: i32,
    pub map_id: i32,
    pub season_id: i32,
    pub game_version: String,
    pub game_mode: String,
    pub game_type: String,
    pub teams: Vec<TeamStatsDto>,
    pub participants: Vec<ParticipantDto>,
    pub participant_identities: Vec<ParticipantIdentityDto>,
}

impl MatchDto {
    /// Participant played by the given account, if they took part in this match.
    pub fn participant_of(&self, account_id: &str) -> Option<&ParticipantDto> {
        let identity = self
            .participant_identities
            .iter()
            .find(|i| i.player.as_ref().is_some_and(|p| p.account_id == account_id))?;
        self.participants
            .iter()
            .find(|p| p.participant_id == identity.participant_id)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsDto {
    pub team_id: i32,
    /// "Win" or "Fail".
    pub win: String,
    pub first_blood: bool,
    pub first_tower: bool,
    pub tower_kills: i32,
    pub baron_kills: i32,
    pub dragon_kills: i32,
    #[serde(default)]
    pub bans: Vec<TeamBansDto>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamBansDto {
    pub champion_id: i32,
    pub pick_turn: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub participant_id: i32,
    pub team_id: i32,
    pub champion_id: i32,
    pub spell1_id: i32,
    pub spell2_id: i32,
    pub stats: ParticipantStatsDto,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStatsDto {
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    #[serde(default)]
    pub total_minions_killed: i32,
    #[serde(default)]
    pub gold_earned: i32,
    #[serde(default)]
    pub total_damage_dealt_to_champions: i64,
    #[serde(default)]
    pub vision_score: i64,
}

impl ParticipantStatsDto {
    pub fn kda_ratio(&self) -> f64 {
        if self.deaths == 0 {
            (self.kills + self.assists) as f64
        } else {
            (self.kills + self.assists) as f64 / self.deaths as f64
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentityDto {
    pub participant_id: i32,
    /// Absent for custom games where identities are hidden.
    pub player: Option<PlayerDto>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub account_id: String,
    pub summoner_id: String,
    pub summoner_name: String,
    pub platform_id: String,
    pub profile_icon: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchTimelineDto {
    pub frame_interval: i64,
    pub frames: Vec<MatchFrameDto>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchFrameDto {
    pub timestamp: i64,
    /// Keyed by participant id.
    pub participant_frames: HashMap<String, MatchParticipantFrameDto>,
    #[serde(default)]
    pub events: Vec<MatchEventDto>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipantFrameDto {
    pub participant_id: i32,
    pub level: i32,
    pub current_gold: i32,
    pub total_gold: i32,
    pub xp: i32,
    pub minions_killed: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchEventDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: i64,
    pub participant_id: Option<i32>,
    pub killer_id: Option<i32>,
    pub victim_id: Option<i32>,
    pub item_id: Option<i32>,
    pub skill_slot: Option<i32>,
}
