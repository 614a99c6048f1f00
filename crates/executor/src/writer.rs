//! Result writer
//!
//! Two output formats:
//! - **display**: human-readable dump to stdout, one entity per line
//! - **csv_file**: rows written to the configured output file with columns
//!   `id,name,diameter_min_km,orbits,orbit_dates`
//!
//! Writing never raises. An unknown format name or an I/O failure is logged
//! and reported as `false`.

use neodb_core::{Error, NearEarthObject, Result};
use neodb_search::dedup_by_identity;
use neodb_storage::RecordStore;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::output::Output;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable dump to stdout
    Display,
    /// Rows written to the configured CSV file
    CsvFile,
}

impl OutputFormat {
    /// All formats
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Display, OutputFormat::CsvFile];

    /// Resolve a format name (`"display"` or `"csv_file"`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "display" => Some(OutputFormat::Display),
            "csv_file" => Some(OutputFormat::CsvFile),
            _ => None,
        }
    }

    /// Public name of this format
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Display => "display",
            OutputFormat::CsvFile => "csv_file",
        }
    }

    /// Names of all formats, for help text
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize)]
struct ResultRow<'a> {
    id: &'a str,
    name: &'a str,
    diameter_min_km: f64,
    orbits: String,
    orbit_dates: String,
}

impl<'a> ResultRow<'a> {
    fn from_neo(neo: &'a NearEarthObject) -> Self {
        ResultRow {
            id: &neo.id,
            name: &neo.name,
            diameter_min_km: neo.diameter_min_km,
            orbits: render_list(neo.orbits.iter().map(|o| o.neo_name.as_str())),
            orbit_dates: render_list(neo.orbit_dates()),
        }
    }
}

fn render_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    format!("[{}]", items.into_iter().collect::<Vec<_>>().join(", "))
}

/// Writes command outputs in a chosen format
#[derive(Debug, Clone)]
pub struct NeoWriter {
    output_path: PathBuf,
}

impl NeoWriter {
    /// Create a writer whose `csv_file` format targets `output_path`
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        NeoWriter {
            output_path: output_path.into(),
        }
    }

    /// Destination of `csv_file` output
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write `output` in the named format
    ///
    /// Orbit paths are written to CSV as rows of their owning NEO, resolved
    /// through `store`.
    ///
    /// Returns `false` for an unknown format name or a failed write.
    pub fn write(&self, format: &str, output: &Output, store: &RecordStore) -> bool {
        let Some(format) = OutputFormat::from_name(format) else {
            warn!(target: "neodb::writer", format, "Unsupported output format");
            return false;
        };

        let result = match format {
            OutputFormat::Display => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write_display(output, &mut lock).map_err(Error::from)
            }
            OutputFormat::CsvFile => self.write_csv(output, store),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(target: "neodb::writer", format = %format, error = %e, "Write failed");
                false
            }
        }
    }

    /// Number of data rows `csv_file` would write for `output`
    ///
    /// Zero for outputs that cannot be written as CSV.
    pub fn csv_row_count(&self, output: &Output, store: &RecordStore) -> usize {
        csv_rows(output, store).map_or(0, |rows| rows.len())
    }

    fn write_csv(&self, output: &Output, store: &RecordStore) -> Result<()> {
        let neos = csv_rows(output, store)?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let path = self.output_path.display().to_string();
        let mut writer = csv::Writer::from_path(&self.output_path).map_err(io::Error::from)?;
        if neos.is_empty() {
            writer
                .write_record(["id", "name", "diameter_min_km", "orbits", "orbit_dates"])
                .map_err(io::Error::from)?;
        }
        for neo in &neos {
            writer
                .serialize(ResultRow::from_neo(neo))
                .map_err(io::Error::from)?;
        }
        writer.flush()?;

        info!(target: "neodb::writer", path = %path, rows = neos.len(), "Wrote results");
        Ok(())
    }
}

/// NEOs written as CSV rows
///
/// Orbit paths become their owners' rows, one row per owner in first
/// occurrence order.
fn csv_rows<'a>(output: &'a Output, store: &'a RecordStore) -> Result<Vec<&'a NearEarthObject>> {
    match output {
        Output::Neos(neos) => Ok(neos.iter().collect()),
        Output::Paths(paths) => Ok(dedup_by_identity(
            paths.iter().filter_map(|p| store.owner_of(p)).collect(),
        )),
        Output::MaybeNeo(neo) => Ok(neo.iter().collect()),
        Output::StoreInfo(_) => Err(Error::unsupported("csv_file output of store info")),
    }
}

/// Human-readable dump, one entity per line
pub(crate) fn write_display<W: Write>(output: &Output, w: &mut W) -> io::Result<()> {
    match output {
        Output::Neos(neos) if neos.is_empty() => writeln!(w, "(empty list)")?,
        Output::Paths(paths) if paths.is_empty() => writeln!(w, "(empty list)")?,
        Output::Neos(neos) => {
            for neo in neos {
                writeln!(w, "{}", neo)?;
            }
        }
        Output::Paths(paths) => {
            for path in paths {
                writeln!(w, "{}", path)?;
            }
        }
        Output::MaybeNeo(Some(neo)) => writeln!(w, "{}", neo)?,
        Output::MaybeNeo(None) => writeln!(w, "(nil)")?,
        Output::StoreInfo(info) => writeln!(w, "{}", info)?,
    }
    Ok(())
}
