use std::{fmt, str::FromStr};

pub mod errors;
pub mod league;

pub use errors::ApiError;
pub use league::{Division, LeagueQueue, Tier};

/// Routing cluster a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Na,
    Euw,
    Eune,
    Oce,
    Ru,
    Tr,
    Br,
    Lan,
    Las,
    Jp,
    Kr,
    Tw,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::Na,
        Region::Euw,
        Region::Eune,
        Region::Oce,
        Region::Ru,
        Region::Tr,
        Region::Br,
        Region::Lan,
        Region::Las,
        Region::Jp,
        Region::Kr,
        Region::Tw,
    ];

    /// Regional routing host (account, tournament and other cross-platform routes).
    pub fn to_global_endpoint(&self) -> &'static str {
        match self {
            Region::Lan | Region::Las | Region::Na | Region::Br => "americas.api.riotgames.com",
            Region::Euw | Region::Eune | Region::Tr | Region::Ru => "europe.api.riotgames.com",
            Region::Kr | Region::Jp => "asia.api.riotgames.com",
            Region::Oce | Region::Tw => "sea.api.riotgames.com",
        }
    }

    /// Platform host serving summoner, league, match and spectator routes.
    pub fn to_endpoint(&self) -> &'static str {
        match self {
            Region::Lan => "la1.api.riotgames.com",
            Region::Las => "la2.api.riotgames.com",
            Region::Na => "na1.api.riotgames.com",
            Region::Br => "br1.api.riotgames.com",
            Region::Euw => "euw1.api.riotgames.com",
            Region::Eune => "eun1.api.riotgames.com",
            Region::Tr => "tr1.api.riotgames.com",
            Region::Ru => "ru.api.riotgames.com",
            Region::Kr => "kr.api.riotgames.com",
            Region::Jp => "jp1.api.riotgames.com",
            Region::Oce => "oc1.api.riotgames.com",
            Region::Tw => "tw2.api.riotgames.com",
        }
    }

    /// Data Dragon realm name, used to discover the current asset version.
    pub fn realm(&self) -> &'static str {
        match self {
            Region::Lan => "lan",
            Region::Las => "las",
            Region::Na => "na",
            Region::Br => "br",
            Region::Euw => "euw",
            Region::Eune => "eune",
            Region::Tr => "tr",
            Region::Ru => "ru",
            Region::Kr => "kr",
            Region::Jp => "jp",
            Region::Oce => "oce",
            Region::Tw => "tw",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Na => "NA",
            Region::Br => "BR",
            Region::Euw => "EUW",
            Region::Eune => "EUNE",
            Region::Tr => "TR",
            Region::Ru => "RU",
            Region::Kr => "KR",
            Region::Jp => "JP",
            Region::Oce => "OCE",
            Region::Tw => "TW",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "LAN" | "LA1" => Ok(Region::Lan),
            "LAS" | "LA2" => Ok(Region::Las),
            "NA" | "NA1" => Ok(Region::Na),
            "BR" | "BR1" => Ok(Region::Br),
            "EUW" | "EUW1" => Ok(Region::Euw),
            "EUNE" | "EUN1" => Ok(Region::Eune),
            "TR" | "TR1" => Ok(Region::Tr),
            "RU" => Ok(Region::Ru),
            "KR" => Ok(Region::Kr),
            "JP" | "JP1" => Ok(Region::Jp),
            "OCE" | "OC1" => Ok(Region::Oce),
            "TW" | "TW2" => Ok(Region::Tw),
            _ => Err(UnknownRegion(value.to_string())),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = UnknownRegion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
