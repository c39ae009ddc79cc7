//! CSV fetch-and-parse for `date,price` series.
//!
//! The header row must name a `date` column (`"Mon YYYY"`) and a `price`
//! column; other columns are ignored. Loading is all-or-nothing: the first
//! bad row aborts with its line number.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::{DataPoint, Dataset, LoadError, UtcDateTime};

const DATE_COLUMN: &str = "date";
const PRICE_COLUMN: &str = "price";

/// Open and parse the CSV at `path`.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_csv(file)?;
    let overview = dataset.time_extent();
    tracing::info!(
        path = %path.display(),
        points = dataset.len(),
        from = %overview.min().format_month_year(),
        to = %overview.max().format_month_year(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse a CSV document from any reader.
pub fn read_csv<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let date_index = column_index(&headers, DATE_COLUMN)?;
    let price_index = column_index(&headers, PRICE_COLUMN)?;

    let mut points = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |position| position.line());
        let point = parse_row(&record, date_index, price_index)
            .map_err(|message| LoadError::Row { line, message })?;
        points.push(point);
    }

    Dataset::new(points).ok_or(LoadError::EmptyDataset)
}

fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(column))
        .ok_or(LoadError::MissingColumn { column })
}

fn parse_row(
    record: &StringRecord,
    date_index: usize,
    price_index: usize,
) -> Result<DataPoint, String> {
    let date = record.get(date_index).unwrap_or_default();
    let ts = UtcDateTime::parse_month_year(date).map_err(|error| error.to_string())?;

    let raw_price = record.get(price_index).unwrap_or_default();
    if raw_price.is_empty() {
        return Err(String::from("price is empty"));
    }
    let price = raw_price
        .parse::<f64>()
        .map_err(|_| format!("price '{raw_price}' is not a number"))?;

    DataPoint::new(ts, price).map_err(|error| error.to_string())
}
