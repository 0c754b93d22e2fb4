//! Versioned Data Dragon URLs.

pub const DDRAGON_HOST: &str = "https://ddragon.leagueoflegends.com";

/// Last release still shipping the rune and mastery documents.
pub const LAST_RUNE_MASTERY_VERSION: &str = "7.23.1";

/// Used when the realm document cannot be fetched.
pub const FALLBACK_VERSION: &str = "15.12.1";
pub const FALLBACK_LANGUAGE: &str = "en_US";

/// Kinds of Data Dragon URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDragonUrl<'a> {
    /// JSON document under `/cdn/{version}/data/{language}/`.
    Data(&'a str),
    /// Asset under `/cdn/{version}/img/`.
    Image(&'a str),
    /// Realm document of the given realm name.
    Realm(&'a str),
}

/// CDN version and language resolved for a realm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealmState {
    pub version: String,
    pub language: String,
}

impl RealmState {
    pub fn new(version: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            language: language.into(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_VERSION, FALLBACK_LANGUAGE)
    }

    pub fn url(&self, kind: DataDragonUrl<'_>) -> String {
        match kind {
            DataDragonUrl::Data(path) => format!(
                "{}/cdn/{}/data/{}/{}",
                DDRAGON_HOST,
                self.version_for(path),
                self.language,
                path
            ),
            DataDragonUrl::Image(path) => {
                format!("{}/cdn/{}/img/{}", DDRAGON_HOST, self.version_for(path), path)
            }
            DataDragonUrl::Realm(realm) => format!("{}/realms/{}.json", DDRAGON_HOST, realm),
        }
    }

    /// Runes and masteries were removed after [`LAST_RUNE_MASTERY_VERSION`].
    fn version_for(&self, path: &str) -> &str {
        let retired = path.contains("rune") || path.contains("mastery");
        if retired && version_greater_than(&self.version, LAST_RUNE_MASTERY_VERSION) {
            LAST_RUNE_MASTERY_VERSION
        } else {
            &self.version
        }
    }
}

/// Compare dotted versions segment by segment as integers.
///
/// A non-numeric segment met before the versions differ makes the result `false`. When every
/// compared segment is equal, the version with more segments is the greater one.
pub fn version_greater_than(a: &str, b: &str) -> bool {
    let (mut lhs, mut rhs) = (a.split('.'), b.split('.'));

    loop {
        match (lhs.next(), rhs.next()) {
            (Some(x), Some(y)) => {
                let (Ok(x), Ok(y)) = (x.parse::<u64>(), y.parse::<u64>()) else {
                    return false;
                };
                if x != y {
                    return x > y;
                }
            }
            (Some(_), None) => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comparison() {
        assert!(version_greater_than("7.24.1", "7.23.1"));
        assert!(!version_greater_than("7.23.1", "7.23.1"));
        assert!(!version_greater_than("1", "a"));
        assert!(!version_greater_than("a", "1"));
        assert!(!version_greater_than("7.22.9", "7.23.1"));
        assert!(version_greater_than("10.1.1", "9.24.1"));
        assert!(version_greater_than("7.23.1.1", "7.23.1"));
        assert!(!version_greater_than("7.23", "7.23.1"));
    }

    #[test]
    fn non_numeric_segment_after_a_difference_is_ignored() {
        assert!(version_greater_than("8.1.x", "7.23.1"));
        assert!(!version_greater_than("7.x.1", "7.23.1"));
    }

    #[test]
    fn data_and_image_urls() {
        let realm = RealmState::new("9.3.1", "fr_FR");

        assert_eq!(
            realm.url(DataDragonUrl::Data("champion.json")),
            "https://ddragon.leagueoflegends.com/cdn/9.3.1/data/fr_FR/champion.json"
        );
        assert_eq!(
            realm.url(DataDragonUrl::Image("champion/Ahri.png")),
            "https://ddragon.leagueoflegends.com/cdn/9.3.1/img/champion/Ahri.png"
        );
        assert_eq!(
            realm.url(DataDragonUrl::Realm("euw")),
            "https://ddragon.leagueoflegends.com/realms/euw.json"
        );
    }

    #[test]
    fn retired_assets_are_pinned() {
        let realm = RealmState::new("9.3.1", "en_US");

        assert_eq!(
            realm.url(DataDragonUrl::Data("rune.json")),
            "https://ddragon.leagueoflegends.com/cdn/7.23.1/data/en_US/rune.json"
        );
        assert_eq!(
            realm.url(DataDragonUrl::Image("mastery/6111.png")),
            "https://ddragon.leagueoflegends.com/cdn/7.23.1/img/mastery/6111.png"
        );
    }

    #[test]
    fn older_versions_keep_their_own_rune_documents() {
        let realm = RealmState::new("7.20.3", "en_US");

        assert_eq!(
            realm.url(DataDragonUrl::Data("mastery.json")),
            "https://ddragon.leagueoflegends.com/cdn/7.20.3/data/en_US/mastery.json"
        );
    }
}
