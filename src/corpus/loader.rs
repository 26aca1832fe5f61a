use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::movie::MovieRecord;

// Cell values that tabular exports use for a missing value.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

fn cell(record: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .filter(|value| !is_missing(value))
        .map(str::to_string)
}

/// The movie corpus, in dataset row order.
#[derive(Debug, Clone)]
pub struct Corpus {
    movies: Vec<MovieRecord>,
}

impl Corpus {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        info!("Loading movie dataset from {}", path.display());

        let file = std::fs::File::open(path)
            .map_err(|e| CorpusError::Open(path.display().to_string(), e))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        // Short rows are padded with missing cells, long rows are an error.
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers()?.clone();

        let column = |name: &str| headers.iter().position(|h| h == name);
        let genres_idx = column("genres").ok_or(CorpusError::MissingColumn("genres"))?;
        let overview_idx = column("overview").ok_or(CorpusError::MissingColumn("overview"))?;
        let title_idx = column("title");
        if title_idx.is_none() {
            debug!("Dataset has no title column, titles will be empty");
        }

        let mut movies = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(CorpusError::RowTooLong {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    fields: record.len(),
                    expected: headers.len(),
                });
            }
            let raw_genres = cell(&record, Some(genres_idx));
            movies.push(MovieRecord::new(
                cell(&record, title_idx),
                cell(&record, Some(overview_idx)),
                raw_genres.as_deref(),
            ));
        }

        info!("Loaded {} movies", movies.len());
        Ok(Self { movies })
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.description.as_str()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Failed to open dataset {0}: {1}")]
    Open(String, std::io::Error),
    #[error("Failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset is missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("Dataset line {line} has {fields} fields, expected at most {expected}")]
    RowTooLong {
        line: u64,
        fields: usize,
        expected: usize,
    },
}
