//! Data Dragon, the CDN serving static game assets.
//!
//! Documents are versioned independently from the primary API. The version and language are
//! resolved once from the realm document when the client is built.

use std::{collections::HashMap, sync::Arc};

use riftlink_shared::Region;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::{
    api::{client::ApiClientBase, transport::HttpTransport},
    types::{RiotApiError, RiotApiResponse},
};

pub mod types;
pub mod version;

use types::{
    ChampionDto, Envelope, ItemDto, MasteryDto, ProfileIconDto, RealmDto, RuneDto,
    SummonerSpellDto,
};
use version::{DataDragonUrl, RealmState};

#[derive(Debug, Clone)]
pub struct DataDragonClient {
    base: Arc<ApiClientBase>,
    realm: RealmState,
}

impl DataDragonClient {
    /// Build a client for the realm of `region`, falling back to a fixed version and language
    /// when the realm document is unavailable.
    pub async fn new(transport: Arc<dyn HttpTransport>, region: Region) -> Self {
        let base = Arc::new(ApiClientBase::unauthenticated(transport, "DDRAGON"));
        let realm = Self::fetch_realm(&base, region.realm()).await;

        Self { base, realm }
    }

    /// Build a client with an already known realm state, without any request.
    pub fn with_realm(transport: Arc<dyn HttpTransport>, realm: RealmState) -> Self {
        Self {
            base: Arc::new(ApiClientBase::unauthenticated(transport, "DDRAGON")),
            realm,
        }
    }

    async fn fetch_realm(base: &ApiClientBase, realm: &str) -> RealmState {
        let url = RealmState::fallback().url(DataDragonUrl::Realm(realm));

        match base.get::<RealmDto>(url).await {
            Ok(dto) => {
                info!("Using Riot Ddragon assets v{} ({})", dto.version, dto.language);
                RealmState::new(dto.version, dto.language)
            }
            Err(e) => {
                let fallback = RealmState::fallback();
                warn!(
                    "Could not resolve Ddragon realm {}: {}. Falling back to v{} ({})",
                    realm, e, fallback.version, fallback.language
                );
                fallback
            }
        }
    }

    pub fn version(&self) -> &str {
        &self.realm.version
    }

    pub fn language(&self) -> &str {
        &self.realm.language
    }

    pub fn realm(&self) -> &RealmState {
        &self.realm
    }

    pub fn base(&self) -> &Arc<ApiClientBase> {
        &self.base
    }

    /// All champions keyed by their internal name.
    pub async fn champions(&self) -> RiotApiResponse<HashMap<String, ChampionDto>> {
        tracing::trace!("[DDRAGON] champions v{}", self.realm.version);
        self.data("champion.json").await
    }

    /// Full document of one champion, by internal name (`"MonkeyKing"`, `"Ahri"`...).
    pub async fn champion(&self, name: &str) -> RiotApiResponse<ChampionDto> {
        tracing::trace!("[DDRAGON] champion {} v{}", name, self.realm.version);
        let mut data: HashMap<String, ChampionDto> =
            self.data(&format!("champion/{}.json", name)).await?;

        data.remove(name).ok_or_else(|| {
            warn!("[DDRAGON] champion document has no entry for {}", name);
            RiotApiError::ChampionNotFound(name.to_string())
        })
    }

    pub async fn items(&self) -> RiotApiResponse<HashMap<String, ItemDto>> {
        tracing::trace!("[DDRAGON] items v{}", self.realm.version);
        self.data("item.json").await
    }

    pub async fn profile_icons(&self) -> RiotApiResponse<HashMap<String, ProfileIconDto>> {
        tracing::trace!("[DDRAGON] profile_icons v{}", self.realm.version);
        self.data("profileicon.json").await
    }

    pub async fn masteries(&self) -> RiotApiResponse<HashMap<String, MasteryDto>> {
        tracing::trace!("[DDRAGON] masteries");
        self.data("mastery.json").await
    }

    pub async fn summoner_spells(&self) -> RiotApiResponse<HashMap<String, SummonerSpellDto>> {
        tracing::trace!("[DDRAGON] summoner_spells v{}", self.realm.version);
        self.data("summoner.json").await
    }

    pub async fn runes(&self) -> RiotApiResponse<HashMap<String, RuneDto>> {
        tracing::trace!("[DDRAGON] runes");
        self.data("rune.json").await
    }

    /// Square portrait, from the `image.full` of a [`ChampionDto`].
    pub fn champion_square_url(&self, image_full: &str) -> String {
        self.realm
            .url(DataDragonUrl::Image(&format!("champion/{}", image_full)))
    }

    pub fn item_image_url(&self, item_id: &str) -> String {
        self.realm
            .url(DataDragonUrl::Image(&format!("item/{}.png", item_id)))
    }

    pub fn profile_icon_url(&self, icon_id: i64) -> String {
        self.realm
            .url(DataDragonUrl::Image(&format!("profileicon/{}.png", icon_id)))
    }

    /// Spell icon, from the `image.full` of a [`SummonerSpellDto`].
    pub fn summoner_spell_image_url(&self, image_full: &str) -> String {
        self.realm
            .url(DataDragonUrl::Image(&format!("spell/{}", image_full)))
    }

    /// Fetch a data document and unwrap its envelope.
    async fn data<T: DeserializeOwned>(&self, path: &str) -> RiotApiResponse<T> {
        let envelope: Envelope<T> = self.base.get(self.realm.url(DataDragonUrl::Data(path))).await?;
        Ok(envelope.data)
    }
}
