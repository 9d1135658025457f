use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

/// Tag stored on vocab entries that Jisho could not place in a JLPT level.
pub const NON_JLPT_TAG: &str = "non-jlpt word";

/// Level filter applied to the card set under study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JlptFilter {
    #[default]
    All,
    N5,
    N4,
    N3,
    N2,
    N1,
    NonJlpt,
}

impl JlptFilter {
    pub const ALL: [JlptFilter; 7] = [
        JlptFilter::All,
        JlptFilter::N5,
        JlptFilter::N4,
        JlptFilter::N3,
        JlptFilter::N2,
        JlptFilter::N1,
        JlptFilter::NonJlpt,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            JlptFilter::All => "all",
            JlptFilter::N5 => "n5",
            JlptFilter::N4 => "n4",
            JlptFilter::N3 => "n3",
            JlptFilter::N2 => "n2",
            JlptFilter::N1 => "n1",
            JlptFilter::NonJlpt => "nonjlpt",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|filter| filter.token() == token)
    }

    pub fn label(&self) -> &'static str {
        match self {
            JlptFilter::All => "JLPT: All",
            JlptFilter::N5 => "N5",
            JlptFilter::N4 => "N4",
            JlptFilter::N3 => "N3",
            JlptFilter::N2 => "N2",
            JlptFilter::N1 => "N1",
            JlptFilter::NonJlpt => "Non-JLPT",
        }
    }

    /// Whether a card with the given stored tag passes this filter.
    ///
    /// Tags are matched case-insensitively against the exact strings the
    /// backend stores: `"jlpt-n5"`..`"jlpt-n1"` and the non-JLPT marker.
    /// An untagged card only passes `All`.
    pub fn matches(&self, tag: Option<&str>) -> bool {
        if *self == JlptFilter::All {
            return true;
        }

        let Some(tag) = tag else {
            return false;
        };
        let lowered = tag.to_lowercase();

        match self {
            JlptFilter::All => true,
            JlptFilter::NonJlpt => lowered == NON_JLPT_TAG,
            level => lowered == format!("jlpt-{}", level.token()),
        }
    }
}

/// Persisted as the token string; a stale or hand-edited token falls back
/// to `All` rather than failing the whole settings load.
impl Serialize for JlptFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for JlptFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_passes_everything() {
        assert!(JlptFilter::All.matches(Some("jlpt-n1")));
        assert!(JlptFilter::All.matches(Some("anything")));
        assert!(JlptFilter::All.matches(None));
    }

    #[test]
    fn level_match_is_case_insensitive() {
        let tags = [Some("jlpt-n3"), Some("JLPT-N3"), Some("Non-JLPT Word"), None];

        let n3_hits: Vec<bool> = tags.iter().map(|t| JlptFilter::N3.matches(*t)).collect();
        assert_eq!(n3_hits, vec![true, true, false, false]);

        let nonjlpt_hits: Vec<bool> = tags.iter().map(|t| JlptFilter::NonJlpt.matches(*t)).collect();
        assert_eq!(nonjlpt_hits, vec![false, false, true, false]);

        let n5_hits: Vec<bool> = tags.iter().map(|t| JlptFilter::N5.matches(*t)).collect();
        assert_eq!(n5_hits, vec![false, false, false, false]);
    }

    #[test]
    fn untagged_cards_only_pass_all() {
        for filter in JlptFilter::ALL {
            assert_eq!(filter.matches(None), filter == JlptFilter::All);
        }
    }

    #[test]
    fn tokens_round_trip() {
        for filter in JlptFilter::ALL {
            assert_eq!(JlptFilter::from_token(filter.token()), Some(filter));
        }
        assert_eq!(JlptFilter::from_token("n6"), None);
    }

    #[test]
    fn settings_store_filters_as_tokens() {
        assert_eq!(serde_json::to_string(&JlptFilter::NonJlpt).unwrap(), "\"nonjlpt\"");

        let parsed: JlptFilter = serde_json::from_str("\"n3\"").unwrap();
        assert_eq!(parsed, JlptFilter::N3);

        // A token from a newer or hand-edited settings file falls back to All.
        let unknown: JlptFilter = serde_json::from_str("\"n6\"").unwrap();
        assert_eq!(unknown, JlptFilter::All);
    }
}
