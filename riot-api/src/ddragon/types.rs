use std::collections::HashMap;

use serde::Deserialize;

/// `{type, version, data}` wrapper around every Data Dragon document.
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub data: T,
}

/// Realm document (`/realms/{realm}.json`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RealmDto {
    /// Current version of the realm.
    #[serde(rename = "v")]
    pub version: String,
    /// Default language.
    #[serde(rename = "l")]
    pub language: String,
    pub cdn: String,
    /// Latest version of each document kind.
    #[serde(rename = "n", default)]
    pub versions: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ImageDto {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChampionDto {
    /// Internal name, which is also the key of the champion maps.
    pub id: String,
    /// Numeric champion id as a string, as used by the primary API.
    pub key: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    pub info: ChampionInfoDto,
    pub image: ImageDto,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub partype: String,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
}

impl ChampionDto {
    pub fn numeric_key(&self) -> Option<i64> {
        self.key.parse().ok()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChampionInfoDto {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ItemDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plaintext: String,
    pub gold: GoldDto,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Items this one builds into.
    #[serde(default)]
    pub into: Vec<String>,
    /// Components of this item.
    #[serde(default)]
    pub from: Vec<String>,
    pub image: ImageDto,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GoldDto {
    pub base: i32,
    pub total: i32,
    pub sell: i32,
    pub purchasable: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileIconDto {
    pub id: i64,
    pub image: ImageDto,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MasteryDto {
    pub id: i64,
    pub name: String,
    /// One line per rank.
    #[serde(default)]
    pub description: Vec<String>,
    pub ranks: i32,
    pub image: ImageDto,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSpellDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub key: String,
    #[serde(default)]
    pub cooldown: Vec<f64>,
    #[serde(default)]
    pub summoner_level: i32,
    #[serde(default)]
    pub modes: Vec<String>,
    pub image: ImageDto,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RuneDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rune: RuneMetaDto,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: ImageDto,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RuneMetaDto {
    pub isrune: bool,
    pub tier: String,
    #[serde(rename = "type")]
    pub kind: String,
}
