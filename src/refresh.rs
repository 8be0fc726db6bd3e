use crate::config::TriggerMap;
use crate::types::ContentNode;
use std::fmt::Display;
use tracing::{debug, warn};

/// The last good parse of a narrative document.
///
/// Seeded from the bundled copy, then offered each remote refetch. A failed
/// fetch, or a document that parses to nothing, leaves the current items in
/// place.
#[derive(Debug, Clone)]
pub struct NarrativeFeed {
    items: Vec<ContentNode>,
    triggers: TriggerMap,
}

impl NarrativeFeed {
    pub fn new(bundled: &str, triggers: TriggerMap) -> Self {
        let items = crate::resolve_triggers(crate::parse(bundled), &triggers);
        Self { items, triggers }
    }

    pub fn items(&self) -> &[ContentNode] {
        &self.items
    }

    /// Offer a fetch result. Returns whether the items were replaced.
    pub fn refresh<E: Display>(&mut self, fetched: Result<String, E>) -> bool {
        let text = match fetched {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "narrative refetch failed, keeping previous items");
                return false;
            }
        };

        let items = crate::resolve_triggers(crate::parse(&text), &self.triggers);
        if items.is_empty() {
            warn!("refetched narrative produced no items, keeping previous items");
            return false;
        }

        debug!(count = items.len(), "narrative items replaced");
        self.items = items;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed() -> NarrativeFeed {
        let triggers = TriggerMap::from([("a".to_string(), "recife".to_string())]);
        NarrativeFeed::new("# Bundled\n\n[card: a]\nbody", triggers)
    }

    #[test]
    fn bundled_copy_is_resolved() {
        let feed = feed();
        assert_eq!(feed.items().len(), 2);
        assert_eq!(
            feed.items()[1].as_card().unwrap().trigger_after.as_deref(),
            Some("recife")
        );
    }

    #[test]
    fn failed_fetch_keeps_items() {
        let mut feed = feed();
        let before = feed.items().to_vec();
        assert!(!feed.refresh(Err::<String, _>("timeout")));
        assert_eq!(feed.items(), before.as_slice());
    }

    #[test]
    fn empty_document_keeps_items() {
        let mut feed = feed();
        assert!(!feed.refresh(Ok::<_, String>("\n\n".to_string())));
        assert_eq!(feed.items().len(), 2);
    }

    #[test]
    fn new_document_replaces_items() {
        let mut feed = feed();
        assert!(feed.refresh(Ok::<_, String>("[card]\nx\n\n[card: a]\ny".to_string())));
        let cards: Vec<_> = feed.items().iter().filter_map(ContentNode::as_card).collect();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].trigger_after, None);
        assert_eq!(cards[1].trigger_after.as_deref(), Some("recife"));
    }
}
