//! Configuration files spell levels either as ranks or as names.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::Level;

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

struct LevelVisitor;

impl Visitor<'_> for LevelVisitor {
    type Value = Level;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a severity rank between 0 and 255 or a level name")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Level, E> {
        u8::try_from(value)
            .map(Level::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Level, E> {
        u8::try_from(value)
            .map(Level::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Level, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LevelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_integers_and_names() {
        let levels: Vec<Level> =
            serde_json::from_str(r#"[20, "WARNING", "importantinfo", "Level 7"]"#)
                .expect("valid levels");
        assert_eq!(
            levels,
            vec![Level::INFO, Level::WARNING, Level::IMPORTANT_INFO, Level::new(7)]
        );
    }

    #[test]
    fn rejects_out_of_range_ranks() {
        assert!(serde_json::from_str::<Level>("256").is_err());
        assert!(serde_json::from_str::<Level>("-1").is_err());
    }

    #[test]
    fn rejects_unknown_names() {
        let error = serde_json::from_str::<Level>(r#""LOUD""#).expect_err("unknown name");
        assert!(error.to_string().contains("LOUD"));
    }

    #[test]
    fn serializes_as_rank() {
        assert_eq!(
            serde_json::to_string(&Level::CRITICAL).expect("serializes"),
            "50"
        );
    }
}
