//! Presentation of a calculation result
//!
//! Three renderings of the same [`CalculationResult`]:
//! - a one-row text table with the export headers
//! - a two-bar chart of energy output against carbon credits
//! - the CSV export, whose layout downstream consumers depend on
//!
//! The CSV number format matches what the export has always produced:
//! shortest round-trip digits with a mandatory decimal point (`67.5`,
//! `100.0`, `0.0`) and exponent form from `1e+16` upward or below `1e-04`
//! (`1e-05`).

use crate::calculator::CalculationResult;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Default file name offered for the CSV export
pub const DEFAULT_CSV_FILE_NAME: &str = "beccs_results.csv";

/// Title shown above the bar chart
pub const CHART_TITLE: &str = "BECCS Energy and Carbon Credit Results";

/// Bar chart width used when the caller has no preference
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Format a number the way the CSV export always has
///
/// Integral values keep a trailing `.0`; magnitudes of 1e16 and above use
/// `1e+16` style exponents and non-zero magnitudes below 1e-4 use `1e-05`
/// style ones.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value != 0.0 && !(1e-4..1e16).contains(&value.abs()) {
        return format_exponent(value);
    }

    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// `1.5e+17` / `1e-05` from Rust's `1.5e17` / `1e-5`
fn format_exponent(value: f64) -> String {
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

/// CSV export: header row plus one data row, `\n` terminated
pub fn to_csv_string(result: &CalculationResult) -> String {
    let header = CalculationResult::FIELD_NAMES.join(",");
    let row = result
        .values()
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(",");
    format!("{header}\n{row}\n")
}

/// Write the CSV export to any writer
///
/// # Errors
/// Returns [`ReportError::Io`] if the writer fails.
pub fn write_csv<W: Write>(result: &CalculationResult, mut writer: W) -> Result<(), ReportError> {
    writer.write_all(to_csv_string(result).as_bytes())?;
    writer.flush()?;
    debug!("wrote CSV export");
    Ok(())
}

/// Save the CSV export to a file, replacing any existing file
///
/// # Errors
/// Returns [`ReportError::Io`] if the file cannot be created or written.
pub fn save_csv<P: AsRef<Path>>(result: &CalculationResult, path: P) -> Result<(), ReportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(result, BufWriter::new(file))?;
    info!(path = %path.display(), "saved CSV export");
    Ok(())
}

/// Pretty-printed JSON object keyed by the export headers
///
/// # Errors
/// Returns [`ReportError::Serialize`] if serialization fails.
pub fn to_json_string(result: &CalculationResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One-row text table with the export headers as columns
pub fn render_table(result: &CalculationResult) -> String {
    let cells: Vec<(&str, String)> = result
        .fields()
        .map(|(name, value)| (name, format_number(value)))
        .collect();

    let widths: Vec<usize> = cells
        .iter()
        .map(|(name, value)| name.len().max(value.len()))
        .collect();

    let rule = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");

    let mut out = String::new();
    let header = cells
        .iter()
        .zip(&widths)
        .map(|((name, _), w)| format!(" {name:<w$} "))
        .collect::<Vec<_>>()
        .join("|");
    let row = cells
        .iter()
        .zip(&widths)
        .map(|((_, value), w)| format!(" {value:>w$} "))
        .collect::<Vec<_>>()
        .join("|");

    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{row}");
    out
}

/// Horizontal two-bar chart: energy output and carbon credits
///
/// Bars are scaled so the larger value spans `width` cells. Zero and
/// negative values draw an empty bar.
pub fn render_bar_chart(result: &CalculationResult, width: usize) -> String {
    let bars = [
        ("Energy Output (MWh)", result.energy_output_mwh),
        ("Carbon Credits (credits)", result.carbon_credits),
    ];

    let label_width = bars.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let max_value = bars
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    let _ = writeln!(out, "{CHART_TITLE}");
    for (label, value) in bars {
        let cells = bar_cells(value, max_value, width);
        let _ = writeln!(
            out,
            "{label:<label_width$} | {bar:<width$} {value}",
            bar = "#".repeat(cells),
            value = format_number(value),
        );
    }
    out
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "Bar length is a small non-negative cell count"
)]
fn bar_cells(value: f64, max_value: f64, width: usize) -> usize {
    if width == 0 || !(value.is_finite() && max_value > 0.0 && value > 0.0) {
        return 0;
    }
    let cells = (value / max_value * width as f64).round() as usize;
    cells.clamp(1, width)
}
