use crate::types::{Align, CardNode, ContentNode};
use std::collections::HashMap;

fn cards_mut(nodes: &mut [ContentNode]) -> impl Iterator<Item = &mut CardNode> {
    nodes.iter_mut().filter_map(ContentNode::as_card_mut)
}

/// Cards alternate right, left, right... by their position among cards only.
/// Recomputed from scratch, so running it twice changes nothing.
pub fn assign_alignment(nodes: &mut [ContentNode]) {
    for (idx, card) in cards_mut(nodes).enumerate() {
        card.align = if idx % 2 == 0 { Align::Right } else { Align::Left };
    }
}

/// Set `trigger_after` on every card from a card id -> trigger map. Cards
/// missing from the map get `None`.
pub fn apply_triggers(nodes: &mut [ContentNode], mapping: &HashMap<String, String>) {
    for card in cards_mut(nodes) {
        card.trigger_after = mapping.get(&card.id).cloned();
    }
}
