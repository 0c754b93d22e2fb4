use std::fmt;

use serde::{Deserialize, Serialize};

/// Ranked queues exposing league listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueQueue {
    /// Ranked Solo/Duo
    #[serde(rename = "RANKED_SOLO_5x5")]
    SoloDuo,
    /// Ranked Flex on Summoner's Rift
    #[serde(rename = "RANKED_FLEX_SR")]
    Flex,
    /// Ranked Flex on Twisted Treeline
    #[serde(rename = "RANKED_FLEX_TT")]
    FlexTwistedTreeline,
}

impl LeagueQueue {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueQueue::SoloDuo => "RANKED_SOLO_5x5",
            LeagueQueue::Flex => "RANKED_FLEX_SR",
            LeagueQueue::FlexTwistedTreeline => "RANKED_FLEX_TT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::I => "I",
            Division::II => "II",
            Division::III => "III",
            Division::IV => "IV",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(LeagueQueue, Tier, Division);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_match_wire_names() {
        assert_eq!(LeagueQueue::SoloDuo.to_string(), "RANKED_SOLO_5x5");
        assert_eq!(Tier::Grandmaster.to_string(), "GRANDMASTER");
        assert_eq!(Division::III.to_string(), "III");
    }

    #[test]
    fn deserializes_from_wire_names() {
        let queue: LeagueQueue = serde_json::from_str("\"RANKED_FLEX_SR\"").unwrap();
        assert_eq!(queue, LeagueQueue::Flex);
        let tier: Tier = serde_json::from_str("\"DIAMOND\"").unwrap();
        assert_eq!(tier, Tier::Diamond);
        assert!(Tier::Diamond > Tier::Platinum);
        let tier: Tier = serde_json::from_str("\"EMERALD\"").unwrap();
        assert!(Tier::Platinum < tier && tier < Tier::Diamond);
    }
}
