use crate::error::ExportError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formats the export knows about. Legalities for any other format are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[value(name = "standard")]
    Standard,
    #[value(name = "alchemy")]
    Alchemy,
    #[value(name = "brawl")]
    Brawl,
    #[value(name = "standardbrawl")]
    StandardBrawl,
}

impl Format {
    /// Returns the Scryfall legality key (e.g., "standard", "standardbrawl")
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Standard => "standard",
            Format::Alchemy => "alchemy",
            Format::Brawl => "brawl",
            Format::StandardBrawl => "standardbrawl",
        }
    }

    /// Returns all supported formats in output order
    pub fn all() -> &'static [Format] {
        &[
            Format::Standard,
            Format::Alchemy,
            Format::Brawl,
            Format::StandardBrawl,
        ]
    }

    fn valid_names() -> String {
        Self::all()
            .iter()
            .map(Format::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ExportError::InvalidFormat {
                value: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// Color codes accepted by the color filters. `N` stands for colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Color {
    /// Black
    #[value(name = "B")]
    B,
    /// White
    #[value(name = "W")]
    W,
    /// Red
    #[value(name = "R")]
    R,
    /// Blue
    #[value(name = "U")]
    U,
    /// Green
    #[value(name = "G")]
    G,
    /// Colorless
    #[value(name = "N")]
    N,
}

impl Color {
    /// Returns the single-letter code as used by Scryfall
    pub fn code(&self) -> &'static str {
        match self {
            Color::B => "B",
            Color::W => "W",
            Color::R => "R",
            Color::U => "U",
            Color::G => "G",
            Color::N => "N",
        }
    }

    /// Returns every color code, colorless last
    pub fn all() -> &'static [Color] {
        &[Color::B, Color::W, Color::R, Color::U, Color::G, Color::N]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of a goldfish collection export
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CollectionEntry {
    #[serde(rename = "Card")]
    pub name: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
}

impl CollectionEntry {
    /// Parse the quantity as an integer, `None` if the cell is malformed
    pub fn quantity_count(&self) -> Option<u32> {
        self.quantity.trim().parse::<u32>().ok()
    }
}

/// Trimmed card record written to the output file
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OutputRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_line: String,
    pub cost: String,
    pub text: String,
    pub qty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyw: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tough: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_for: Option<Vec<Format>>,
}
