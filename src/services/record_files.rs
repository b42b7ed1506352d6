use std::io::{self, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::burndown::{BurndownSample, BurndownSeries};
use crate::domain::calendar_date::{format_calendar_timestamp, parse_calendar_date};
use crate::domain::chart_error::ChartDataError;
use crate::domain::status_sample::{BurnupSeries, StatusSample};
use crate::domain::work_item::WorkItemSnapshot;

#[derive(Error, Debug)]
pub enum RecordFileError {
    #[error("failed to read record file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse yaml records: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse json records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid record: {0}")]
    Invalid(#[from] ChartDataError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    /// `.json` files are JSON, everything else is read as YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RecordFormat::Json,
            _ => RecordFormat::Yaml,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BurnupRecord {
    status: String,
    project_day: String,
    qty: i64,
}

/// Written quantities are never negative, so they keep the full `u64` range.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BurnupOutputRecord<'a> {
    status: &'a str,
    project_day: String,
    qty: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BurndownRecord {
    iteration_day: String,
    remaining: f64,
    ideal: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkItemRecord {
    item_id: String,
    change_date: String,
    status: String,
    #[serde(default)]
    effort: f64,
    iteration_id: Option<String>,
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RecordFileError> {
    let contents = std::fs::read_to_string(path)?;
    let format = RecordFormat::from_path(path);
    debug!(path = %path.display(), ?format, "reading records");
    deserialize_records(&contents, format)
}

fn deserialize_records<T: DeserializeOwned>(
    input: &str,
    format: RecordFormat,
) -> Result<Vec<T>, RecordFileError> {
    match format {
        RecordFormat::Json => Ok(serde_json::from_str(input)?),
        RecordFormat::Yaml => Ok(serde_yaml::from_str(input)?),
    }
}

fn write_records<W: Write, T: Serialize>(
    writer: &mut W,
    records: &[T],
    format: RecordFormat,
) -> io::Result<()> {
    let text = match format {
        RecordFormat::Json => serde_json::to_string_pretty(records)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
        RecordFormat::Yaml => {
            serde_yaml::to_string(records).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
        }
    };
    writer.write_all(text.as_bytes())
}

pub fn load_status_samples<P: AsRef<Path>>(path: P) -> Result<Vec<StatusSample>, RecordFileError> {
    let records: Vec<BurnupRecord> = read_records(path.as_ref())?;
    status_samples_from_records(records)
}

pub fn deserialize_status_samples(
    input: &str,
    format: RecordFormat,
) -> Result<Vec<StatusSample>, RecordFileError> {
    status_samples_from_records(deserialize_records(input, format)?)
}

fn status_samples_from_records(
    records: Vec<BurnupRecord>,
) -> Result<Vec<StatusSample>, RecordFileError> {
    Ok(records
        .into_iter()
        .map(|record| {
            let day = parse_calendar_date(&record.project_day)?;
            StatusSample::new(record.status, day, record.qty)
        })
        .collect::<Result<Vec<_>, _>>()?)
}

pub fn load_burndown_samples<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<BurndownSample>, RecordFileError> {
    let records: Vec<BurndownRecord> = read_records(path.as_ref())?;
    burndown_samples_from_records(records)
}

pub fn deserialize_burndown_samples(
    input: &str,
    format: RecordFormat,
) -> Result<Vec<BurndownSample>, RecordFileError> {
    burndown_samples_from_records(deserialize_records(input, format)?)
}

fn burndown_samples_from_records(
    records: Vec<BurndownRecord>,
) -> Result<Vec<BurndownSample>, RecordFileError> {
    Ok(records
        .into_iter()
        .map(|record| {
            let day = parse_calendar_date(&record.iteration_day)?;
            BurndownSample::new(day, record.remaining, record.ideal)
        })
        .collect::<Result<Vec<_>, _>>()?)
}

pub fn load_work_item_history<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<WorkItemSnapshot>, RecordFileError> {
    let records: Vec<WorkItemRecord> = read_records(path.as_ref())?;
    Ok(records
        .into_iter()
        .map(|record| -> Result<WorkItemSnapshot, ChartDataError> {
            let snapshot = WorkItemSnapshot {
                item_id: record.item_id,
                change_date: parse_calendar_date(&record.change_date)?,
                status: record.status,
                effort: record.effort,
                iteration_id: record.iteration_id,
            };
            snapshot.validate()?;
            Ok(snapshot)
        })
        .collect::<Result<Vec<_>, _>>()?)
}

pub fn serialize_status_samples<W: Write>(
    writer: &mut W,
    samples: &[StatusSample],
    format: RecordFormat,
) -> io::Result<()> {
    let records: Vec<BurnupOutputRecord> = samples
        .iter()
        .map(|sample| BurnupOutputRecord {
            status: &sample.status,
            project_day: format_calendar_timestamp(sample.day),
            qty: sample.qty,
        })
        .collect();
    write_records(writer, &records, format)
}

pub fn serialize_burnup_series<W: Write>(
    writer: &mut W,
    series: &BurnupSeries,
    format: RecordFormat,
) -> io::Result<()> {
    serialize_status_samples(writer, &series.to_samples(), format)
}

pub fn serialize_burndown_samples<W: Write>(
    writer: &mut W,
    samples: &[BurndownSample],
    format: RecordFormat,
) -> io::Result<()> {
    let records: Vec<BurndownRecord> = samples
        .iter()
        .map(|sample| BurndownRecord {
            iteration_day: format_calendar_timestamp(sample.day),
            remaining: sample.remaining,
            ideal: sample.ideal,
        })
        .collect();
    write_records(writer, &records, format)
}

pub fn serialize_burndown_series<W: Write>(
    writer: &mut W,
    series: &BurndownSeries,
    format: RecordFormat,
) -> io::Result<()> {
    serialize_burndown_samples(writer, &series.samples, format)
}
