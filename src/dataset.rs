//! Dataset loading
//!
//! Reads the Johns Hopkins wide-format CSV (one row per location, one
//! column per date) and melts it into long form: one [`CaseRecord`] per
//! (location, date) pair. The dataset is loaded once at startup and is
//! immutable afterwards.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Identifier columns expected before the date columns.
const ID_COLUMNS: usize = 4;

/// Date column headers use the Johns Hopkins `M/D/YY` convention.
const DATE_HEADER_FORMAT: &str = "%m/%d/%y";

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file does not exist. Fatal at startup, no retry.
    #[error("Missing dataset: {path:?}")]
    Missing { path: PathBuf },

    /// The file exists but could not be read or parsed as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Outcome of parsing a date column header.
///
/// Headers that do not match `M/D/YY` are kept as [`ParsedDate::Unparseable`]
/// rather than dropped, so the record count stays rows x date columns.
/// Unparseable dates never satisfy a date comparison, so such records fall
/// out of any date-windowed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParsedDate {
    Valid(NaiveDate),
    Unparseable,
}

impl ParsedDate {
    /// Parse a column header under the fixed `M/D/YY` format.
    pub fn from_header(header: &str) -> Self {
        match NaiveDate::parse_from_str(header.trim(), DATE_HEADER_FORMAT) {
            Ok(date) => ParsedDate::Valid(date),
            Err(_) => ParsedDate::Unparseable,
        }
    }

    /// The contained date, if valid.
    pub fn valid(&self) -> Option<NaiveDate> {
        match self {
            ParsedDate::Valid(date) => Some(*date),
            ParsedDate::Unparseable => None,
        }
    }
}

/// One (location, date) observation after the wide-to-long melt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseRecord {
    /// Province or state; empty for country-level rows
    pub province: String,
    /// Country or region name
    pub country: String,
    /// Latitude; `None` when the cell was empty or non-numeric
    pub lat: Option<f64>,
    /// Longitude; `None` when the cell was empty or non-numeric
    pub long: Option<f64>,
    /// Observation date, parsed from the column header
    pub date: ParsedDate,
    /// Cumulative confirmed cases as of `date`
    pub cases: u64,
}

/// The loaded dataset: an ordered, immutable collection of records
#[derive(Debug)]
pub struct Dataset {
    records: Vec<CaseRecord>,
}

impl Dataset {
    /// Load and reshape the dataset from a CSV file.
    ///
    /// Fails with [`DatasetError::Missing`] if the file is absent. Each
    /// input row expands to one record per date column; identifier columns
    /// (`Province/State`, `Country/Region`, `Lat`, `Long`) are repeated on
    /// every record. Malformed cells are absorbed: coordinates become
    /// `None`, case counts become 0. No further validation is performed.
    pub fn load(path: &Path) -> DatasetResult<Dataset> {
        if !path.exists() {
            return Err(DatasetError::Missing {
                path: path.to_path_buf(),
            });
        }

        tracing::info!("Loading dataset from {:?}", path);
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

        let headers = reader.headers()?.clone();
        let dataset = Self::melt(&headers, reader.records())?;

        tracing::info!(
            records = dataset.len(),
            countries = dataset.countries().len(),
            "Dataset loaded successfully"
        );
        Ok(dataset)
    }

    /// Load from a CSV string (useful for testing)
    pub fn load_str(csv_data: &str) -> DatasetResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        let headers = reader.headers()?.clone();
        Self::melt(&headers, reader.records())
    }

    /// Melt wide rows into long-form records.
    fn melt<R: std::io::Read>(
        headers: &csv::StringRecord,
        rows: csv::StringRecordsIter<R>,
    ) -> DatasetResult<Dataset> {
        // Parse each date header once; every row reuses the column's date.
        let dates: Vec<ParsedDate> = headers
            .iter()
            .skip(ID_COLUMNS)
            .map(ParsedDate::from_header)
            .collect();

        let mut records = Vec::new();
        for row in rows {
            let row = row?;

            let province = row.get(0).unwrap_or_default().to_string();
            let country = row.get(1).unwrap_or_default().to_string();
            let lat = parse_coord(row.get(2));
            let long = parse_coord(row.get(3));

            for (col, date) in dates.iter().enumerate() {
                let cases = row
                    .get(ID_COLUMNS + col)
                    .and_then(|cell| cell.trim().parse::<u64>().ok())
                    .unwrap_or(0);

                records.push(CaseRecord {
                    province: province.clone(),
                    country: country.clone(),
                    lat,
                    long,
                    date: *date,
                    cases,
                });
            }
        }

        Ok(Dataset { records })
    }

    /// All records in load order
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique country names in first-appearance order.
    ///
    /// Feeds the dashboard's country multi-select options.
    pub fn countries(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.clone())
            .collect()
    }

    /// Maximum valid date across the full dataset, if any.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records.iter().filter_map(|r| r.date.valid()).max()
    }
}

/// Parse a coordinate cell; empty or non-numeric cells absorb to `None`.
fn parse_coord(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|c| c.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20,1/23/20,1/24/20
,Afghanistan,33.93911,67.709953,0,0,5
British Columbia,Canada,49.2827,-123.1207,1,2,3
,Canada,56.1304,-106.3468,0,1,1";

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/cases.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Missing { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 9);
    }

    #[test]
    fn test_melt_record_count() {
        // 3 rows x 3 date columns
        let dataset = Dataset::load_str(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.len(), 9);
    }

    #[test]
    fn test_melt_preserves_identifiers() {
        let dataset = Dataset::load_str(SAMPLE_CSV).unwrap();
        let first = &dataset.records()[0];
        assert_eq!(first.province, "");
        assert_eq!(first.country, "Afghanistan");
        assert_eq!(first.lat, Some(33.93911));
        assert_eq!(first.long, Some(67.709953));
        assert_eq!(
            first.date,
            ParsedDate::Valid(NaiveDate::from_ymd_opt(2020, 1, 22).unwrap())
        );
        assert_eq!(first.cases, 0);

        // Province-level row keeps its own coordinates on every date
        let bc = &dataset.records()[3];
        assert_eq!(bc.province, "British Columbia");
        assert_eq!(bc.lat, Some(49.2827));
    }

    #[test]
    fn test_unparseable_date_header_retained() {
        let csv_data = "\
Province/State,Country/Region,Lat,Long,1/22/20,not-a-date
,Afghanistan,33.9,67.7,0,4";
        let dataset = Dataset::load_str(csv_data).unwrap();
        // Both columns produce records; the bad header yields Unparseable
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].date, ParsedDate::Unparseable);
        assert_eq!(dataset.records()[1].cases, 4);
    }

    #[test]
    fn test_malformed_cells_absorbed() {
        let csv_data = "\
Province/State,Country/Region,Lat,Long,1/22/20
,Nowhere,,abc,x";
        let dataset = Dataset::load_str(csv_data).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.lat, None);
        assert_eq!(record.long, None);
        assert_eq!(record.cases, 0);
    }

    #[test]
    fn test_countries_unique_in_order() {
        let dataset = Dataset::load_str(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.countries(), vec!["Afghanistan", "Canada"]);
    }

    #[test]
    fn test_latest_date() {
        let dataset = Dataset::load_str(SAMPLE_CSV).unwrap();
        assert_eq!(
            dataset.latest_date(),
            Some(NaiveDate::from_ymd_opt(2020, 1, 24).unwrap())
        );
    }

    #[test]
    fn test_latest_date_empty() {
        let dataset = Dataset::load_str("Province/State,Country/Region,Lat,Long").unwrap();
        assert_eq!(dataset.latest_date(), None);
    }

    #[test]
    fn test_parsed_date_from_header() {
        assert_eq!(
            ParsedDate::from_header("3/15/21"),
            ParsedDate::Valid(NaiveDate::from_ymd_opt(2021, 3, 15).unwrap())
        );
        assert_eq!(ParsedDate::from_header("2021-03-15"), ParsedDate::Unparseable);
    }

    #[test]
    fn test_error_display() {
        let err = DatasetError::Missing {
            path: PathBuf::from("cases.csv"),
        };
        assert_eq!(err.to_string(), "Missing dataset: \"cases.csv\"");
    }
}
