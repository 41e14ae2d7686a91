//! Collection Export - MTG collection to JSON
//!
//! Joins a goldfish collection export (CSV) with a Scryfall "Oracle Cards" bulk
//! export and writes a compact, filtered JSON file suited for feeding to an AI.

pub mod card_matching;
pub mod cli;
pub mod error;
pub mod export;
pub mod filters;
pub mod io;
pub mod models;
pub mod output;
pub mod scryfall;

// Re-export commonly used items
pub use card_matching::{find_matching_card, normalize_name, CardIndex};
pub use error::{ExportError, Result};
pub use export::{export_collection, ExportReport};
pub use filters::{FilterOptions, Omission};
pub use io::{load_card_database, read_collection};
pub use models::{CollectionEntry, Color, Format, OutputRecord};
pub use scryfall::ScryfallCard;
