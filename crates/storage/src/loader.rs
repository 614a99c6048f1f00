//! CSV ingestion
//!
//! Input files carry a header row; each following row becomes a
//! [`RawRecord`] keyed by header name. Loading is all-or-nothing: every row
//! is parsed before the first one is ingested, so a malformed file never
//! produces a partially built store.

use neodb_core::{Error, RawRecord, Result};
use std::io;
use std::path::Path;
use tracing::info;

use crate::store::RecordStore;

/// Load a store from a CSV file
///
/// # Errors
///
/// Returns `Error::Load` if the file cannot be opened or any row fails to
/// parse.
pub fn load(path: impl AsRef<Path>) -> Result<RecordStore> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let reader = csv::Reader::from_path(path).map_err(|e| Error::load(&source, e))?;
    let store = ingest_all(reader, &source)?;
    info!(
        target: "neodb::store",
        path = %source,
        neos = store.neo_count(),
        orbits = store.orbit_count(),
        dates = store.date_count(),
        "Loaded record store"
    );
    Ok(store)
}

/// Load a store from any CSV byte source
///
/// `source` names the input in error messages.
pub fn load_from_reader<R: io::Read>(reader: R, source: &str) -> Result<RecordStore> {
    ingest_all(csv::Reader::from_reader(reader), source)
}

fn ingest_all<R: io::Read>(mut reader: csv::Reader<R>, source: &str) -> Result<RecordStore> {
    let records = reader
        .deserialize::<RawRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()
        .map_err(|e| Error::load(source, e))?;
    Ok(RecordStore::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
id,name,estimated_diameter_min_kilometers,is_potentially_hazardous_asteroid,close_approach_date,miss_distance_kilometers
2000433,433 Eros,10.0,False,2020-01-01,26729978.1
2000433,433 Eros,10.0,False,2020-01-05,31000000.0
3542519,(2010 PK9),0.12,True,2020-01-03,4500000.0
";

    #[test]
    fn test_load_from_reader() {
        let store = load_from_reader(SAMPLE.as_bytes(), "sample").unwrap();
        assert_eq!(store.neo_count(), 2);
        assert_eq!(store.orbit_count(), 3);
        assert_eq!(store.date_count(), 3);

        let pk9 = store.neo_by_name("(2010 PK9)").unwrap();
        assert!(pk9.is_potentially_hazardous_asteroid);
        assert_eq!(pk9.orbits[0].miss_distance_kilometers, 4_500_000.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let store = load(file.path()).unwrap();
        assert_eq!(store.neo_count(), 2);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn test_ragged_row_aborts_whole_load() {
        let data = "id,name,close_approach_date\n1,a,2020-01-01\n2,b\n";
        let err = load_from_reader(data.as_bytes(), "ragged").unwrap_err();
        assert!(matches!(err, Error::Load { ref path, .. } if path == "ragged"));
    }

    #[test]
    fn test_extra_columns_ignored_and_bad_numbers_coerce() {
        let data = "\
name,close_approach_date,miss_distance_kilometers,orbiting_body
a,2020-01-01,unknown,Earth
";
        let store = load_from_reader(data.as_bytes(), "extra").unwrap();
        let a = store.neo_by_name("a").unwrap();
        assert_eq!(a.orbits[0].miss_distance_kilometers, 0.0);
        assert_eq!(a.diameter_min_km, 0.0);
    }

    #[test]
    fn test_header_only_gives_empty_store() {
        let data = "id,name,close_approach_date\n";
        let store = load_from_reader(data.as_bytes(), "empty").unwrap();
        assert!(store.is_empty());
    }
}
