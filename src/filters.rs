//! Row filters applied after a collection entry has been matched
//!
//! Filters run in a fixed order (format, included colors, excluded colors,
//! basic lands) and the first failing one decides why a row is omitted.

use crate::models::{Color, Format};
use crate::scryfall::{Legalities, ScryfallCard};
use std::fmt;

/// Reason a matched card was left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Omission {
    NotLegal(Format),
    MissingColors,
    ExcludedColor,
    BasicLand,
}

impl fmt::Display for Omission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Omission::NotLegal(format) => write!(f, "it is not legal in {}", format),
            Omission::MissingColors => write!(f, "it does not include any specified colors"),
            Omission::ExcludedColor => write!(f, "it includes an excluded color"),
            Omission::BasicLand => write!(f, "it is a basic land"),
        }
    }
}

/// Resolved filter settings for one export run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub format: Option<Format>,
    pub include_colors: Vec<Color>,
    pub exclude_colors: Vec<Color>,
}

impl FilterOptions {
    /// Build the filter settings from the raw command-line choices.
    ///
    /// With `exclusive` and at least one included color, the excluded colors
    /// become every color not included, replacing any explicit list.
    pub fn resolve(
        format: Option<Format>,
        include_colors: Vec<Color>,
        exclude_colors: Vec<Color>,
        exclusive: bool,
    ) -> Self {
        let exclude_colors = if exclusive && !include_colors.is_empty() {
            let derived: Vec<Color> = Color::all()
                .iter()
                .copied()
                .filter(|color| !include_colors.contains(color))
                .collect();
            log::info!(
                "Excluding colors: {}",
                derived
                    .iter()
                    .map(Color::code)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            derived
        } else {
            exclude_colors
        };

        Self {
            format,
            include_colors,
            exclude_colors,
        }
    }

    /// Only cards legal in the selected format pass
    pub fn check_format(&self, legalities: &Legalities) -> Result<(), Omission> {
        match self.format {
            Some(format) if !legalities.is_legal(format) => Err(Omission::NotLegal(format)),
            _ => Ok(()),
        }
    }

    /// Cards need at least one included color, then must avoid every excluded one
    pub fn check_colors(&self, card: &ScryfallCard) -> Result<(), Omission> {
        if !self.include_colors.is_empty() && !has_any_color(card, &self.include_colors) {
            return Err(Omission::MissingColors);
        }
        if !self.exclude_colors.is_empty() && has_any_color(card, &self.exclude_colors) {
            return Err(Omission::ExcludedColor);
        }
        Ok(())
    }
}

/// Returns true if the card shows any of the colors. `N` matches colorless cards.
pub fn has_any_color(card: &ScryfallCard, colors: &[Color]) -> bool {
    colors.iter().any(|color| card.has_color(*color))
}

/// Basic lands are never exported
pub fn check_basic_land(card: &ScryfallCard) -> Result<(), Omission> {
    if card.is_basic_land() {
        Err(Omission::BasicLand)
    } else {
        Ok(())
    }
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
