//! Scryfall oracle card model
//!
//! Mirrors the subset of the Scryfall bulk "Oracle Cards" export the collection
//! export needs. Everything except `name` is optional in the bulk file, so missing
//! fields fall back to their defaults instead of failing the whole load.

use crate::models::{Color, Format};
use serde::Deserialize;
use std::collections::HashMap;

/// Status string Scryfall uses for a card that may be played in a format
const LEGAL: &str = "legal";

/// Type line marker shared by all basic lands (including snow basics)
const BASIC_LAND: &str = "Basic Land";

/// Separator between the faces of a multi-faced card name
pub const FACE_SEPARATOR: &str = " // ";

/// Scryfall oracle card
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScryfallCard {
    pub name: String,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub prices: ScryfallPrices,
    #[serde(default)]
    pub legalities: HashMap<String, String>,
    /// For multi-faced cards, most gameplay fields live on the faces
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScryfallPrices {
    pub usd: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
}

/// Legality flags restricted to the supported formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Legalities {
    pub standard: bool,
    pub alchemy: bool,
    pub brawl: bool,
    pub standardbrawl: bool,
}

impl Legalities {
    pub fn is_legal(&self, format: Format) -> bool {
        match format {
            Format::Standard => self.standard,
            Format::Alchemy => self.alchemy,
            Format::Brawl => self.brawl,
            Format::StandardBrawl => self.standardbrawl,
        }
    }

    /// Supported formats the card is legal in, in `Format::all()` order
    pub fn legal_formats(&self) -> Vec<Format> {
        Format::all()
            .iter()
            .copied()
            .filter(|format| self.is_legal(*format))
            .collect()
    }
}

impl ScryfallCard {
    fn faces(&self) -> &[CardFace] {
        self.card_faces.as_deref().unwrap_or(&[])
    }

    fn joined_faces<'a>(
        &'a self,
        field: impl Fn(&'a CardFace) -> Option<&'a String>,
    ) -> String {
        self.faces()
            .iter()
            .filter_map(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(FACE_SEPARATOR)
    }

    /// Type line, empty if Scryfall has none
    pub fn type_line(&self) -> &str {
        self.type_line.as_deref().unwrap_or("")
    }

    /// Mana cost, joined across faces when the card has no top-level cost
    pub fn mana_cost(&self) -> String {
        match &self.mana_cost {
            Some(cost) => cost.clone(),
            None => self.joined_faces(|face| face.mana_cost.as_ref()),
        }
    }

    /// Oracle text, joined across faces when the card has no top-level text
    pub fn oracle_text(&self) -> String {
        match &self.oracle_text {
            Some(text) => text.clone(),
            None => self.joined_faces(|face| face.oracle_text.as_ref()),
        }
    }

    /// Color codes of the card. Empty means colorless.
    ///
    /// Cards without top-level colors take the union of their face colors.
    pub fn colors(&self) -> Vec<&str> {
        if let Some(ref colors) = self.colors {
            return colors.iter().map(String::as_str).collect();
        }
        let mut union: Vec<&str> = Vec::new();
        for face in self.faces() {
            for color in face.colors.iter().flatten() {
                if !union.contains(&color.as_str()) {
                    union.push(color.as_str());
                }
            }
        }
        union
    }

    pub fn is_colorless(&self) -> bool {
        self.colors().is_empty()
    }

    /// Returns true if the card has the given color. `N` matches colorless cards.
    pub fn has_color(&self, color: Color) -> bool {
        match color {
            Color::N => self.is_colorless(),
            _ => self.colors().contains(&color.code()),
        }
    }

    /// Power, falling back to the front face
    pub fn power(&self) -> Option<&str> {
        self.power
            .as_deref()
            .or_else(|| self.faces().first().and_then(|f| f.power.as_deref()))
            .filter(|p| !p.is_empty())
    }

    /// Toughness, falling back to the front face
    pub fn toughness(&self) -> Option<&str> {
        self.toughness
            .as_deref()
            .or_else(|| self.faces().first().and_then(|f| f.toughness.as_deref()))
            .filter(|t| !t.is_empty())
    }

    /// Parse the USD price, `None` if missing or malformed
    pub fn usd_price(&self) -> Option<f64> {
        self.prices
            .usd
            .as_deref()
            .and_then(|price| price.trim().parse::<f64>().ok())
            .filter(|price| price.is_finite())
    }

    /// Returns true if the type line marks the card as a basic land
    pub fn is_basic_land(&self) -> bool {
        self.type_line().contains(BASIC_LAND)
    }

    /// Legality flags for the supported formats
    pub fn legalities(&self) -> Legalities {
        let legal = |format: Format| {
            self.legalities
                .get(format.as_str())
                .is_some_and(|status| status.as_str() == LEGAL)
        };
        Legalities {
            standard: legal(Format::Standard),
            alchemy: legal(Format::Alchemy),
            brawl: legal(Format::Brawl),
            standardbrawl: legal(Format::StandardBrawl),
        }
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
