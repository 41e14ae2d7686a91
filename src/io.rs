use crate::error::{ExportError, Result};
use crate::models::CollectionEntry;
use crate::scryfall::ScryfallCard;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Columns every goldfish export must provide
const REQUIRED_COLUMNS: [&str; 2] = ["Card", "Quantity"];

/// Read a goldfish collection export. Only the `Card` and `Quantity` columns are used.
///
/// A header without those columns fails the load. Rows that cannot be read are
/// logged and skipped.
pub fn read_collection<P: AsRef<Path>>(path: P) -> Result<Vec<CollectionEntry>> {
    let path = path.as_ref();
    let csv_error = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| ExportError::io(path, e))?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = rdr.headers().map_err(csv_error)?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(ExportError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        match result {
            Ok(entry) => entries.push(entry),
            // A short or malformed row only loses that row
            Err(e) => log::warn!("Skipping unreadable collection row: {}", e),
        }
    }

    log::info!("Loaded {} collection rows from {}", entries.len(), path.display());
    Ok(entries)
}

/// Load a Scryfall bulk "Oracle Cards" export
pub fn load_card_database<P: AsRef<Path>>(path: P) -> Result<Vec<ScryfallCard>> {
    let path = path.as_ref();
    log::info!("Loading card database from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    let cards: Vec<ScryfallCard> =
        serde_json::from_str(&content).map_err(|source| ExportError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Loaded {} cards", cards.len());
    Ok(cards)
}
