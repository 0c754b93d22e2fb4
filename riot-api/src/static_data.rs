//! Reference data published on the developer portal (seasons, queues, maps, game modes and
//! game types).
//!
//! These documents change a few times a year, so every call reads through a
//! [`StaticDataCache`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::{client::ApiClientBase, transport::HttpTransport},
    cache::{Category, StaticDataCache},
    types::RiotApiResponse,
};

pub const STATIC_DATA_HOST: &str = "https://static.developer.riotgames.com/docs/lol";

#[derive(Debug, Clone)]
pub struct StaticDataClient {
    base: Arc<ApiClientBase>,
    cache: Arc<StaticDataCache>,
}

impl StaticDataClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base: Arc::new(ApiClientBase::unauthenticated(transport, "STATIC")),
            cache: Arc::new(StaticDataCache::new()),
        }
    }

    pub fn base(&self) -> &Arc<ApiClientBase> {
        &self.base
    }

    pub fn cache(&self) -> &StaticDataCache {
        &self.cache
    }

    pub async fn seasons(&self) -> RiotApiResponse<Vec<Season>> {
        self.cached(Category::Seasons).await
    }

    pub async fn queues(&self) -> RiotApiResponse<Vec<Queue>> {
        self.cached(Category::Queues).await
    }

    pub async fn maps(&self) -> RiotApiResponse<Vec<MapInfo>> {
        self.cached(Category::Maps).await
    }

    pub async fn game_modes(&self) -> RiotApiResponse<Vec<GameMode>> {
        self.cached(Category::GameModes).await
    }

    pub async fn game_types(&self) -> RiotApiResponse<Vec<GameType>> {
        self.cached(Category::GameTypes).await
    }

    /// Forget every cached document; the next call of each kind fetches again.
    pub fn clear_caches(&self) {
        self.cache.clear();
    }

    async fn cached<T>(&self, category: Category) -> RiotApiResponse<T>
    where
        T: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
    {
        self.cache
            .get_or_fetch(category, || {
                tracing::trace!("[STATIC DATA] {}", category);
                self.base
                    .get(format!("{}/{}.json", STATIC_DATA_HOST, category.as_str()))
            })
            .await
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub id: i32,
    pub season: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub queue_id: i32,
    pub map: String,
    /// Missing for custom games.
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MapInfo {
    pub map_id: i32,
    pub map_name: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub game_mode: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameType {
    pub gametype: String,
    pub description: String,
}
