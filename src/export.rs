//! Joins collection rows with the card database and builds the output records

use crate::card_matching::CardIndex;
use crate::filters::{check_basic_land, FilterOptions, Omission};
use crate::models::{CollectionEntry, OutputRecord};
use crate::scryfall::{Legalities, ScryfallCard};
use std::collections::HashMap;

/// Everything one export run produces
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Output records in collection order
    pub records: Vec<OutputRecord>,
    /// Paper value in USD of the rows that passed the format and color filters
    pub total_value: f64,
    /// Collection names without a database match
    pub unmatched: Vec<String>,
    /// Number of matched rows left out, by reason
    pub omitted: HashMap<Omission, usize>,
}

impl ExportReport {
    pub fn omitted_count(&self) -> usize {
        self.omitted.values().sum()
    }
}

/// Paper value of a row, `None` if the price or the quantity is unusable
pub fn entry_value(entry: &CollectionEntry, card: &ScryfallCard) -> Option<f64> {
    let price = card.usd_price()?;
    let quantity = entry.quantity_count()?;
    Some(price * f64::from(quantity))
}

/// Run the filters for one matched row and build its record.
///
/// The row's value is added to `total_value` once it has passed the format and
/// color filters, even if it is dropped as a basic land afterwards.
pub fn export_entry(
    entry: &CollectionEntry,
    card: &ScryfallCard,
    options: &FilterOptions,
    total_value: &mut f64,
) -> Result<OutputRecord, Omission> {
    let legalities = card.legalities();

    options.check_format(&legalities)?;
    options.check_colors(card)?;

    if let Some(value) = entry_value(entry, card) {
        *total_value += value;
    }

    check_basic_land(card)?;

    Ok(build_record(entry, card, options, &legalities))
}

fn build_record(
    entry: &CollectionEntry,
    card: &ScryfallCard,
    options: &FilterOptions,
    legalities: &Legalities,
) -> OutputRecord {
    OutputRecord {
        name: entry.name.clone(),
        type_line: card.type_line().to_string(),
        cost: card.mana_cost(),
        text: card.oracle_text(),
        qty: entry.quantity.clone(),
        keyw: (!card.keywords.is_empty()).then(|| card.keywords.clone()),
        pow: card.power().map(str::to_string),
        tough: card.toughness().map(str::to_string),
        // Legality is implied when the export is already limited to one format
        legal_for: options
            .format
            .is_none()
            .then(|| legalities.legal_formats()),
    }
}

/// Process every collection row against the card database
pub fn export_collection(
    entries: &[CollectionEntry],
    cards: &[ScryfallCard],
    options: &FilterOptions,
) -> ExportReport {
    let index = CardIndex::build(cards);
    let mut report = ExportReport::default();

    for entry in entries {
        let Some(card) = index.find(&entry.name) else {
            log::warn!("Unable to find match for {}!", entry.name);
            report.unmatched.push(entry.name.clone());
            continue;
        };

        match export_entry(entry, card, options, &mut report.total_value) {
            Ok(record) => {
                log::info!("Added {}", entry.name);
                report.records.push(record);
            }
            Err(omission) => {
                log::info!("-- Omitting {} because {}.", entry.name, omission);
                *report.omitted.entry(omission).or_insert(0) += 1;
            }
        }
    }

    log::info!(
        "Processed {} rows: {} exported, {} omitted, {} unmatched",
        entries.len(),
        report.records.len(),
        report.omitted_count(),
        report.unmatched.len()
    );

    report
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
