use crate::error::{ExportError, Result};
use crate::filters::FilterOptions;
use crate::models::{Color, OutputRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

fn join_colors(colors: &[Color]) -> String {
    colors
        .iter()
        .map(Color::code)
        .collect::<Vec<_>>()
        .join("-")
}

/// Output file name encoding the active filters,
/// e.g. `format-standard.include-W-U.exclude-B-R-G-N.json`
pub fn output_file_name(options: &FilterOptions) -> String {
    let mut name = match options.format {
        Some(format) => format!("format-{}", format),
        None => "formats-all".to_string(),
    };

    if !options.include_colors.is_empty() {
        name.push_str(&format!(".include-{}", join_colors(&options.include_colors)));
    }
    if !options.exclude_colors.is_empty() {
        name.push_str(&format!(".exclude-{}", join_colors(&options.exclude_colors)));
    }

    name.push_str(".json");
    name
}

pub fn output_path<P: AsRef<Path>>(output_dir: P, options: &FilterOptions) -> PathBuf {
    output_dir.as_ref().join(output_file_name(options))
}

/// Write the records as one compact JSON array, creating the parent directory if needed
pub fn write_records<P: AsRef<Path>>(path: P, records: &[OutputRecord]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
            log::info!("Created directory: {}", parent.display());
        }
    }

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records)?;
    writer.flush().map_err(|e| ExportError::io(path, e))?;

    log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Two-line summary printed at the end of a run
pub fn format_summary(count: usize, path: &Path, total_value: f64) -> String {
    format!(
        "Output for {} cards written to {}\nThe paper value of processed cards is ${:.2}",
        count,
        path.display(),
        total_value
    )
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
