use serde::Deserialize;

use crate::types::RiotApiResponse;

use super::LolApiClient;

impl LolApiClient {
    pub async fn get_shard_status(&self) -> RiotApiResponse<ShardStatus> {
        tracing::trace!("[LOL-STATUS-V3 API] get_shard_status in {:?}", self.region);

        self.base
            .get(self.platform_url("/lol/status/v3/shard-data"))
            .await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ShardStatus {
    pub name: String,
    pub slug: String,
    pub region_tag: String,
    pub hostname: String,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,
    pub slug: String,
    pub status: String,
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Incident {
    pub id: i64,
    pub active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updates: Vec<Message>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub author: String,
    pub content: String,
    pub severity: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Translation {
    pub locale: String,
    pub content: String,
    pub heading: Option<String>,
}

impl ShardStatus {
    /// Services which are not reported as online.
    pub fn degraded_services(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.status != "online")
    }
}
