//! CSV ingestion of the athlete-events file.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use crate::dataset::{AthleteEvent, Dataset};
use crate::error::{DashboardError, DashboardResult};

/// Columns that must be present in the header.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "ID", "Sex", "Age", "Team", "NOC", "Year", "Season", "Sport", "Medal",
];

/// Cell text treated as a missing value, besides the empty string.
const MISSING: &str = "NA";

/// Largest accepted `Age`.
pub const MAX_AGE: f64 = 150.0;

/// Ingest the athlete-events CSV file into a [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all [`REQUIRED_COLUMNS`] (order can differ, extra columns are ignored
///   except `Name` and `Event`, which are kept when present).
/// - Empty cells and `NA` are missing values. Only `Age`, `Medal`, `Name` and `Event` may be
///   missing.
/// - A present `Age` must lie in `[0, MAX_AGE]`.
pub fn ingest_athletes_from_path(path: impl AsRef<Path>) -> DashboardResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_athletes_from_reader(&mut rdr)
}

/// Ingest athlete-events CSV data from an existing CSV reader.
pub fn ingest_athletes_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> DashboardResult<Dataset> {
    let headers = rdr.headers()?.clone();
    let cols = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        records.push(cols.parse_record(user_row, &record)?);
    }

    Ok(Dataset::new(records))
}

/// Header positions of the columns we read.
struct Columns {
    id: usize,
    sex: usize,
    age: usize,
    team: usize,
    noc: usize,
    year: usize,
    season: usize,
    sport: usize,
    medal: usize,
    name: Option<usize>,
    event: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> DashboardResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                DashboardError::schema(format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ))
            })
        };

        Ok(Self {
            id: require("ID")?,
            sex: require("Sex")?,
            age: require("Age")?,
            team: require("Team")?,
            noc: require("NOC")?,
            year: require("Year")?,
            season: require("Season")?,
            sport: require("Sport")?,
            medal: require("Medal")?,
            name: find("Name"),
            event: find("Event"),
        })
    }

    fn parse_record(&self, row: usize, record: &StringRecord) -> DashboardResult<AthleteEvent> {
        let age = optional(record, self.age)
            .map(|raw| parse_number::<f64>(row, "Age", raw))
            .transpose()?;
        if let Some(a) = age.filter(|a| !(0.0..=MAX_AGE).contains(a)) {
            return Err(DashboardError::schema(format!(
                "row {row} column 'Age': expected an age in [0, {MAX_AGE}], got {a}"
            )));
        }

        Ok(AthleteEvent {
            id: parse_number(row, "ID", required(record, self.id, row, "ID")?)?,
            name: self.name.and_then(|idx| optional(record, idx)).map(str::to_owned),
            sex: parse_category(row, "Sex", required(record, self.sex, row, "Sex")?)?,
            age,
            team: required(record, self.team, row, "Team")?.to_owned(),
            noc: required(record, self.noc, row, "NOC")?.to_owned(),
            year: parse_number(row, "Year", required(record, self.year, row, "Year")?)?,
            season: parse_category(row, "Season", required(record, self.season, row, "Season")?)?,
            sport: required(record, self.sport, row, "Sport")?.to_owned(),
            event: self.event.and_then(|idx| optional(record, idx)).map(str::to_owned),
            medal: optional(record, self.medal)
                .map(|raw| parse_category(row, "Medal", raw))
                .transpose()?,
        })
    }
}

/// Trimmed cell text, or `None` for empty / `NA` / absent cells.
fn optional(record: &StringRecord, idx: usize) -> Option<&str> {
    let raw = record.get(idx)?.trim();
    if raw.is_empty() || raw == MISSING {
        None
    } else {
        Some(raw)
    }
}

fn required<'r>(
    record: &'r StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> DashboardResult<&'r str> {
    optional(record, idx).ok_or_else(|| {
        DashboardError::schema(format!("row {row} column '{column}': missing value"))
    })
}

fn parse_number<T>(row: usize, column: &str, raw: &str) -> DashboardResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| DashboardError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

fn parse_category<T>(row: usize, column: &str, raw: &str) -> DashboardResult<T>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>()
        .map_err(|message| DashboardError::schema(format!("row {row} column '{column}': {message}")))
}
