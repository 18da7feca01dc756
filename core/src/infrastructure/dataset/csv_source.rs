use std::{fs::File, io::Read, path::PathBuf};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{ports::RecipeSource, value_objects::RawRow},
};

/// Reads recipe rows from a CSV file with a header line.
#[derive(Debug, Clone)]
pub struct CsvRecipeSource {
    path: PathBuf,
}

impl CsvRecipeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecipeSource for CsvRecipeSource {
    fn read_rows(&self) -> Result<Vec<RawRow>, CoreError> {
        let file = File::open(&self.path).map_err(|e| {
            CoreError::DatasetUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        read_csv_rows(file)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses CSV text into rows keyed by header. Short records simply miss
/// their trailing columns.
pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| CoreError::MalformedDataset(format!("invalid header: {}", e)))?
        .clone();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            CoreError::MalformedDataset(format!("invalid record {}: {}", line + 1, e))
        })?;

        rows.push(RawRow::from_pairs(headers.iter().zip(record.iter())));
    }

    Ok(rows)
}
