use std::fs::File;
use std::io::Read;
use std::path::Path;

use arrow::array::{Array, AsArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::DataError;
use super::model::{Dataset, Entry};

/// Columns every source must provide, in the order `clean_row` expects them.
pub const REQUIRED_COLUMNS: [&str; 6] = ["name", "score", "lowest_price", "comment", "stress", "link"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and clean a listings table.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least the [`REQUIRED_COLUMNS`] (default)
/// * `.json`    – `[{ "name": ..., "score": ..., ... }, ...]`
/// * `.parquet` – one column per required field, numeric or text
pub fn load_file(path: &Path) -> Result<Dataset, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        _ => {
            let file = File::open(path).map_err(|e| DataError::unavailable(path, e))?;
            load_csv_reader(file, path)
        }
    }
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// Coerce a score cell. Blank, non-numeric and non-finite values are missing.
pub fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a price cell such as `"￥1,500"` into `1500.0`.
///
/// The yen glyph (full or half width) and every thousands separator are
/// stripped before parsing.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '￥' | '¥' | ','))
        .collect();
    parse_score(&cleaned)
}

fn clean_row(cells: [&str; 6]) -> Option<Entry> {
    let [name, score, lowest_price, comment, stress, link] = cells;
    Some(Entry {
        name: name.to_string(),
        score: parse_score(score)?,
        lowest_price: parse_price(lowest_price)?,
        comment: comment.to_string(),
        stress: stress.to_string(),
        link: link.to_string(),
    })
}

/// Accumulates cleaned entries and counts the rows that were dropped.
#[derive(Default)]
struct Cleaner {
    entries: Vec<Entry>,
    dropped: usize,
}

impl Cleaner {
    fn push(&mut self, row: usize, cells: [&str; 6]) {
        match clean_row(cells) {
            Some(entry) => self.entries.push(entry),
            None => {
                log::debug!(
                    "row {row}: dropping '{}' (score={:?}, lowest_price={:?})",
                    cells[0],
                    cells[1],
                    cells[2]
                );
                self.dropped += 1;
            }
        }
    }

    fn finish(self, origin: &Path) -> Dataset {
        let dataset = Dataset::from_entries(self.entries, self.dropped);
        log::info!(
            "Loaded {} entries from {} ({} rows dropped)",
            dataset.len(),
            origin.display(),
            dataset.dropped_rows
        );
        let dups = dataset.duplicate_names();
        if !dups.is_empty() {
            log::warn!(
                "{} names occur more than once; link lookup uses the first row: {:?}",
                dups.len(),
                dups.keys().take(5).collect::<Vec<_>>()
            );
        }
        dataset
    }
}

/// Position of each required column, or the first one that is absent.
fn locate_columns<S: AsRef<str>>(headers: &[S]) -> Result<[usize; 6], DataError> {
    let mut idx = [0usize; 6];
    for (slot, column) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.as_ref().trim() == column)
            .ok_or_else(|| DataError::SchemaMismatch {
                column: column.to_string(),
            })?;
    }
    Ok(idx)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a comma-separated table from any reader.
///
/// `origin` is only used for error messages and logging. Rows shorter than
/// the header are accepted; their missing cells read as blank.
pub fn load_csv_reader<R: Read>(reader: R, origin: &Path) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::unavailable(origin, e))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    let idx = locate_columns(&headers)?;

    let mut cleaner = Cleaner::default();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| DataError::unavailable(origin, e))?;
        cleaner.push(row_no, idx.map(|i| record.get(i).unwrap_or("")));
    }
    Ok(cleaner.finish(origin))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "name": "A", "score": 3.8, "lowest_price": "￥1,200",
///     "comment": "...", "stress": "low", "link": "https://..." }
/// ]
/// ```
///
/// A column counts as present when any record carries the key.
fn load_json(path: &Path) -> Result<Dataset, DataError> {
    let text = std::fs::read_to_string(path).map_err(|e| DataError::unavailable(path, e))?;
    let records: Vec<Map<String, JsonValue>> =
        serde_json::from_str(&text).map_err(|e| DataError::unavailable(path, e))?;

    for column in REQUIRED_COLUMNS {
        if !records.iter().any(|r| r.contains_key(column)) {
            return Err(DataError::SchemaMismatch {
                column: column.to_string(),
            });
        }
    }

    let mut cleaner = Cleaner::default();
    for (row_no, rec) in records.iter().enumerate() {
        let owned = REQUIRED_COLUMNS.map(|col| json_to_cell(rec.get(col)));
        cleaner.push(row_no, owned.each_ref().map(String::as_str));
    }
    Ok(cleaner.finish(path))
}

fn json_to_cell(val: Option<&JsonValue>) -> String {
    match val {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per required field.
///
/// Every column is cast to UTF-8 first, so numeric and text encodings of
/// `score` and `lowest_price` go through the same cleaning as CSV cells.
/// Works with files written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|e| DataError::unavailable(path, e))?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).map_err(|e| DataError::unavailable(path, e))?;

    let schema = builder.schema().clone();
    let field_names: Vec<String> = schema.fields().iter().map(|f| f.name().clone()).collect();
    let idx = locate_columns(&field_names)?;
    for (&i, column) in idx.iter().zip(REQUIRED_COLUMNS) {
        if !is_scalar(schema.field(i).data_type()) {
            log::error!(
                "column '{column}' has type {:?}, expected text or number",
                schema.field(i).data_type()
            );
            return Err(DataError::SchemaMismatch {
                column: column.to_string(),
            });
        }
    }

    let reader = builder.build().map_err(|e| DataError::unavailable(path, e))?;

    let mut cleaner = Cleaner::default();
    let mut row_offset = 0;
    for batch_result in reader {
        let batch = batch_result.map_err(|e| DataError::unavailable(path, e))?;

        let mut columns = Vec::with_capacity(idx.len());
        for (&i, column) in idx.iter().zip(REQUIRED_COLUMNS) {
            let text = arrow::compute::cast(batch.column(i), &DataType::Utf8).map_err(|e| {
                log::error!("cannot read column '{column}' as text: {e}");
                DataError::SchemaMismatch {
                    column: column.to_string(),
                }
            })?;
            columns.push(text);
        }

        for row in 0..batch.num_rows() {
            let cells: [&str; 6] = std::array::from_fn(|c| {
                let col = columns[c].as_string::<i32>();
                if col.is_null(row) {
                    ""
                } else {
                    col.value(row)
                }
            });
            cleaner.push(row_offset + row, cells);
        }
        row_offset += batch.num_rows();
    }
    Ok(cleaner.finish(path))
}

/// Types whose cells can be cleaned as text: numbers, strings, booleans.
fn is_scalar(data_type: &DataType) -> bool {
    data_type.is_primitive()
        || matches!(
            data_type,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View | DataType::Boolean | DataType::Null
        )
}
