//! Loading the global health statistics table into memory.
//!
//! The table is read once at startup, from an embedded CSV string or from
//! a file on disk (plain or gzip-compressed), and checked for the columns
//! listed in [`Record::COLUMNS`]. Any failure here is fatal: callers are
//! expected to abort rather than run with a partial table.

use crate::error::{DataError, Result};
use crate::record::Record;
use flate2::read::GzDecoder;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Immutable in-memory table of [`Record`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    year_min: i32,
    year_max: i32,
}

impl Dataset {
    /// Build a dataset from already parsed records.
    ///
    /// Fails with [`DataError::Empty`] when `records` is empty, since the
    /// year slider bounds are undefined for an empty table.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let year_min = records.iter().map(|r| r.year).min().ok_or(DataError::Empty)?;
        let year_max = records.iter().map(|r| r.year).max().ok_or(DataError::Empty)?;
        Ok(Self {
            records,
            year_min,
            year_max,
        })
    }

    /// Parse a dataset from a CSV string with a header row.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Parse a dataset from any CSV byte source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: HashSet<String> = rdr.headers()?.iter().map(str::to_owned).collect();
        if let Some(missing) = Record::COLUMNS.iter().find(|c| !headers.contains(**c)) {
            return Err(DataError::MissingColumn(missing.to_string()));
        }

        let records = rdr
            .deserialize::<Record>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let dataset = Self::from_records(records)?;
        log::info!(
            "[GHS] loader: Loaded {} records ({} countries, {} diseases, years {}-{})",
            dataset.len(),
            dataset.countries().len(),
            dataset.diseases().len(),
            dataset.year_min,
            dataset.year_max
        );
        Ok(dataset)
    }

    /// Parse a gzip-compressed CSV byte source.
    pub fn from_gz_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader(GzDecoder::new(reader))
    }

    /// Load a dataset from disk. Paths ending in `.gz` are decompressed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("[GHS] loader: Reading {}", path.display());
        let file = File::open(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("gz") => Self::from_gz_reader(file),
            _ => Self::from_reader(file),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest year present, inclusive.
    pub fn year_bounds(&self) -> (i32, i32) {
        (self.year_min, self.year_max)
    }

    /// Distinct countries in order of first appearance.
    pub fn countries(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.country.as_str()))
    }

    /// Distinct disease names in order of first appearance.
    pub fn diseases(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.disease_name.as_str()))
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Gender;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
country,year,disease_name,disease_category,mortality_rate,recovery_rate,incidence_rate,population_affected,treatment_type,healthcare_access,per_capita_income_usd,age_group,gender,improvement_in_5_years
Italy,2013,Cholera,Bacterial,7.2,82.1,12.4,471007,Medication,57.3,8908,0-18,Male,2.3
France,2002,Influenza,Viral,5.1,60.9,8.8,634318,Surgery,89.2,15579,61+,Female,13.1
Italy,2010,Influenza,Viral,2.9,67.0,3.1,154878,Vaccination,77.0,22451,36-60,Other,6.0
";

    #[test]
    fn load_dataset_from_csv() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.records()[0];
        assert_eq!(first.country, "Italy");
        assert_eq!(first.disease_name, "Cholera");
        assert_eq!(first.gender, Gender::Male);
        assert_eq!(first.population_affected, 471007);
        assert!((first.mortality_rate - 7.2).abs() < 1e-9);
        assert_eq!(first.age_group, "0-18");
    }

    #[test]
    fn year_bounds_cover_all_rows() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.year_bounds(), (2002, 2013));
    }

    #[test]
    fn choices_keep_first_appearance_order() {
        let dataset = Dataset::from_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(dataset.countries(), vec!["Italy", "France"]);
        assert_eq!(dataset.diseases(), vec!["Cholera", "Influenza"]);
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "\
country,year,disease_name
Italy,2013,Cholera
";
        match Dataset::from_csv_str(csv) {
            Err(DataError::MissingColumn(column)) => assert_eq!(column, "gender"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn malformed_value_is_fatal() {
        let csv = SAMPLE_CSV.replace("471007", "lots");
        assert!(matches!(
            Dataset::from_csv_str(&csv),
            Err(DataError::Csv(_))
        ));
    }

    #[test]
    fn unknown_gender_is_fatal() {
        let csv = SAMPLE_CSV.replace("Male,2.3", "Unknown,2.3");
        assert!(matches!(
            Dataset::from_csv_str(&csv),
            Err(DataError::Csv(_))
        ));
    }

    #[test]
    fn header_only_is_empty() {
        let header = SAMPLE_CSV.lines().next().unwrap();
        assert!(matches!(
            Dataset::from_csv_str(header),
            Err(DataError::Empty)
        ));
    }

    #[test]
    fn load_dataset_from_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let dataset = Dataset::from_gz_reader(compressed.as_slice()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.year_bounds(), (2002, 2013));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Dataset::from_path("does/not/exist.csv"),
            Err(DataError::Io(_))
        ));
    }
}
