use crate::difficulty::Difficulty;
use enum_map::EnumMap;
use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};

/// The best score achieved on each difficulty
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScores(EnumMap<Difficulty, u32>);

impl HighScores {
    pub(crate) fn get(&self, difficulty: Difficulty) -> u32 {
        self.0[difficulty]
    }

    /// Record `score` as having been achieved on `difficulty`.  Returns
    /// `true` if this beat the previous high score, in which case the table
    /// has been updated.
    pub(crate) fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        if score > self.0[difficulty] {
            self.0[difficulty] = score;
            true
        } else {
            false
        }
    }

    /// Serialize the table as a JSON object keyed by difficulty name
    pub(crate) fn to_json(self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| {
            unreachable!("serializing a struct of integers should not fail");
        })
    }

    /// Parse a table serialized by [`HighScores::to_json()`].  Difficulties
    /// missing from the object default to zero.
    pub(crate) fn from_json(s: &str) -> Result<HighScores, serde_json::Error> {
        serde_json::from_str(s)
    }

    fn to_raw(self) -> RawHighScores {
        RawHighScores {
            easy: self.0[Difficulty::Easy],
            medium: self.0[Difficulty::Medium],
            hard: self.0[Difficulty::Hard],
        }
    }

    fn from_raw(raw: RawHighScores) -> HighScores {
        HighScores(EnumMap::from_array([raw.easy, raw.medium, raw.hard]))
    }
}

impl Serialize for HighScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HighScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawHighScores::deserialize(deserializer).map(HighScores::from_raw)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
struct RawHighScores {
    easy: u32,
    medium: u32,
    hard: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_monotonic() {
        let mut scores = HighScores::default();
        assert!(scores.record(Difficulty::Medium, 3));
        assert!(!scores.record(Difficulty::Medium, 2));
        assert!(!scores.record(Difficulty::Medium, 3));
        assert!(scores.record(Difficulty::Medium, 4));
        assert_eq!(scores.get(Difficulty::Medium), 4);
        assert_eq!(scores.get(Difficulty::Easy), 0);
        assert_eq!(scores.get(Difficulty::Hard), 0);
    }

    #[test]
    fn to_json() {
        let mut scores = HighScores::default();
        scores.record(Difficulty::Hard, 17);
        assert_eq!(scores.to_json(), r#"{"easy":0,"medium":0,"hard":17}"#);
    }

    #[test]
    fn from_json() {
        let scores = HighScores::from_json(r#"{"easy": 4, "medium": 9, "hard": 1}"#).unwrap();
        assert_eq!(scores.get(Difficulty::Easy), 4);
        assert_eq!(scores.get(Difficulty::Medium), 9);
        assert_eq!(scores.get(Difficulty::Hard), 1);
    }

    #[test]
    fn from_partial_json() {
        let scores = HighScores::from_json(r#"{"medium": 12}"#).unwrap();
        assert_eq!(scores.get(Difficulty::Easy), 0);
        assert_eq!(scores.get(Difficulty::Medium), 12);
    }

    #[test]
    fn from_bad_json() {
        assert!(HighScores::from_json("null").is_err());
        assert!(HighScores::from_json(r#"{"easy": -1}"#).is_err());
        assert!(HighScores::from_json(r#""medium""#).is_err());
    }
}
