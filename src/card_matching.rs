use crate::scryfall::{ScryfallCard, FACE_SEPARATOR};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Strip accents so that "Lorien Revealed" matches "Lórien Revealed".
///
/// Applies NFKD decomposition and keeps only the ASCII characters.
pub fn normalize_name(name: &str) -> String {
    name.nfkd().filter(char::is_ascii).collect()
}

/// Returns true if `candidate` is `input` itself or a multi-faced card whose
/// leading face(s) spell `input`. Both sides must already be normalized.
fn name_matches(input: &str, candidate: &str) -> bool {
    match candidate.strip_prefix(input) {
        Some("") => true,
        Some(rest) => rest.starts_with(FACE_SEPARATOR),
        None => false,
    }
}

/// Find the first card in database order matching a collection name.
///
/// The collection export lists only the front face of split and double-faced
/// cards, so "Fire" matches "Fire // Ice".
pub fn find_matching_card<'a>(
    card_name: &str,
    cards: &'a [ScryfallCard],
) -> Option<&'a ScryfallCard> {
    let normalized = normalize_name(card_name);
    cards
        .iter()
        .find(|card| name_matches(&normalized, &normalize_name(&card.name)))
}

/// Precomputed lookup from normalized name to card.
///
/// Gives the same answers as [`find_matching_card`] without rescanning the
/// database for every collection row.
pub struct CardIndex<'a> {
    cards: &'a [ScryfallCard],
    positions: HashMap<String, usize>,
}

impl<'a> CardIndex<'a> {
    pub fn build(cards: &'a [ScryfallCard]) -> Self {
        let mut positions = HashMap::with_capacity(cards.len());

        for (position, card) in cards.iter().enumerate() {
            let normalized = normalize_name(&card.name);
            // Register every leading face combination: "A", "A // B" for "A // B // C"
            // Separators may overlap ("A // // B"), so test every offset
            for (offset, _) in normalized.char_indices() {
                if normalized[offset..].starts_with(FACE_SEPARATOR) {
                    positions
                        .entry(normalized[..offset].to_string())
                        .or_insert(position);
                }
            }
            positions.entry(normalized).or_insert(position);
        }

        log::debug!(
            "Built card index with {} names for {} cards",
            positions.len(),
            cards.len()
        );

        Self { cards, positions }
    }

    pub fn find(&self, card_name: &str) -> Option<&'a ScryfallCard> {
        let cards = self.cards;
        self.positions
            .get(&normalize_name(card_name))
            .map(|&position| &cards[position])
    }
}

#[cfg(test)]
#[path = "card_matching_tests.rs"]
mod tests;
