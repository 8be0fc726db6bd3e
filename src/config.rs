//! Story configuration: which cards start which map chapter.
//!
//! The configuration is keyed by chapter, each chapter listing the card ids
//! that trigger it. Cards need the opposite direction, so the chapters are
//! inverted into a card id -> chapter map before trigger resolution.

use crate::error::NarrativeError;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// Card id -> trigger (chapter) id.
pub type TriggerMap = HashMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Chapter {
    #[serde(default)]
    pub triggers: Vec<String>,
}

/// Chapters in the order they appear in the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryConfig {
    pub chapters: Vec<(String, Chapter)>,
}

impl StoryConfig {
    pub fn from_json(text: &str) -> Result<Self, NarrativeError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;

        let mut chapters = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let chapter = serde_json::from_value(value).map_err(|source| {
                NarrativeError::InvalidChapter {
                    chapter: name.clone(),
                    source,
                }
            })?;
            chapters.push((name, chapter));
        }

        Ok(Self { chapters })
    }

    /// Invert chapters into a card id -> chapter map. When two chapters list
    /// the same card the later one wins.
    pub fn trigger_map(&self) -> TriggerMap {
        let mut map = TriggerMap::new();
        for (chapter, cfg) in &self.chapters {
            for card_id in &cfg.triggers {
                if let Some(previous) = map.insert(card_id.clone(), chapter.clone()) {
                    if previous != *chapter {
                        warn!(
                            card_id = %card_id,
                            previous = %previous,
                            chapter = %chapter,
                            "card listed by two chapters, keeping the later one"
                        );
                    }
                }
            }
        }
        map
    }
}

/// Parse an already inverted `{ "cardId": "chapter" }` object.
pub fn trigger_map_from_json(text: &str) -> Result<TriggerMap, NarrativeError> {
    serde_json::from_str(text).map_err(NarrativeError::InvalidTriggerMap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r#"{
        "start": {
            "camera": { "center": [-34.9952, -8.024595], "zoom": 16 },
            "triggers": ["card-camaragibe-recife"]
        },
        "recife": {
            "camera": { "center": [-34.8959673, -8.0760724], "zoom": 11 },
            "triggers": ["card-camaragibe-recife"]
        },
        "novotel": { "triggers": ["card-etapa-final", "card-volta-start"] },
        "overview": { "camera": { "zoom": 9 } }
    }"#;

    #[test]
    fn loads_chapters_in_document_order() {
        let config = StoryConfig::from_json(CONFIG).unwrap();
        let names: Vec<&str> = config.chapters.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["start", "recife", "novotel", "overview"]);
        assert!(config.chapters[3].1.triggers.is_empty());
    }

    #[test]
    fn inverts_into_card_map() {
        let map = StoryConfig::from_json(CONFIG).unwrap().trigger_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["card-etapa-final"], "novotel");
        assert_eq!(map["card-volta-start"], "novotel");
    }

    #[test]
    fn later_chapter_wins_duplicate_claims() {
        let map = StoryConfig::from_json(CONFIG).unwrap().trigger_map();
        assert_eq!(map["card-camaragibe-recife"], "recife");

        let reversed = r#"{ "z": { "triggers": ["c"] }, "a": { "triggers": ["c"] } }"#;
        let map = StoryConfig::from_json(reversed).unwrap().trigger_map();
        assert_eq!(map["c"], "a");
    }

    #[test]
    fn rejects_malformed_chapter() {
        let err = StoryConfig::from_json(r#"{ "start": { "triggers": "card-a" } }"#).unwrap_err();
        assert!(matches!(err, NarrativeError::InvalidChapter { ref chapter, .. } if chapter == "start"));
    }

    #[test]
    fn rejects_non_object_config() {
        let err = StoryConfig::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, NarrativeError::InvalidStoryConfig(_)));
    }

    #[test]
    fn reads_flat_trigger_map() {
        let map = trigger_map_from_json(r#"{ "a": "chapterX" }"#).unwrap();
        assert_eq!(map["a"], "chapterX");
        assert!(matches!(
            trigger_map_from_json("nope"),
            Err(NarrativeError::InvalidTriggerMap(_))
        ));
    }
}
