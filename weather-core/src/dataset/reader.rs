//! CSV reader for weather logs
//!
//! Accepts English or Spanish headers. Rows whose numeric columns do not
//! parse are skipped, never reported as errors.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;

use super::record::Observation;
use crate::constants::TIMESTAMP_FORMAT;
use crate::error::{CoreError, CoreResult};
use crate::features::FeatureVector;

// ============================================================================
// COLUMNS
// ============================================================================

const CITY: &[&str] = &["City", "Ciudad"];
const TEMPERATURE: &[&str] = &["Temperature", "Temperatura"];
const HUMIDITY: &[&str] = &["Humidity", "Humedad"];
const PRESSURE: &[&str] = &["Pressure", "Presión"];
const WIND: &[&str] = &["Wind", "Viento"];
const DESCRIPTION: &[&str] = &["Description", "Descripción"];
const TIMESTAMP: &[&str] = &["Timestamp", "FechaHora"];

/// Resolved column positions for one file
#[derive(Debug, Clone, Copy)]
struct Columns {
    city: usize,
    temp: usize,
    hum: usize,
    pres: usize,
    wind: usize,
    description: Option<usize>,
    timestamp: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> CoreResult<Self> {
        let required = |names: &[&'static str]| {
            find_column(headers, names).ok_or(CoreError::MissingColumn(names[0]))
        };

        Ok(Self {
            city: required(CITY)?,
            temp: required(TEMPERATURE)?,
            hum: required(HUMIDITY)?,
            pres: required(PRESSURE)?,
            wind: required(WIND)?,
            description: find_column(headers, DESCRIPTION),
            timestamp: find_column(headers, TIMESTAMP),
        })
    }
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim() == *n))
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse `dd/mm/yyyy HH:MM:SS`; anything else yields `None`
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

fn parse_float(record: &StringRecord, idx: usize) -> Option<f64> {
    record.get(idx)?.trim().parse::<f64>().ok()
}

fn parse_record(record: &StringRecord, cols: &Columns) -> Option<Observation> {
    let temp = parse_float(record, cols.temp)?;
    let hum = parse_float(record, cols.hum)?;
    let pres = parse_float(record, cols.pres)?;
    let wind = parse_float(record, cols.wind)?;

    let city = record.get(cols.city).unwrap_or("").trim().to_string();
    let description = cols
        .description
        .and_then(|i| record.get(i))
        .unwrap_or("")
        .to_string();
    let timestamp = cols
        .timestamp
        .and_then(|i| record.get(i))
        .and_then(parse_timestamp);

    Some(Observation {
        city,
        features: FeatureVector::new(temp, hum, pres, wind),
        description,
        timestamp,
    })
}

/// Read observations from any CSV source with a header row
pub fn read_observations<R: Read>(source: R) -> CoreResult<Vec<Observation>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let cols = Columns::resolve(reader.headers()?)?;

    let mut observations = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        match parse_record(&record, &cols) {
            Some(obs) => observations.push(obs),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {} rows with non-numeric features", skipped);
    }
    log::info!("Parsed {} observations", observations.len());

    Ok(observations)
}

/// Read observations from a CSV file
pub fn read_csv(path: &Path) -> CoreResult<Vec<Observation>> {
    log::info!("Reading training data from: {}", path.display());
    let file = File::open(path).map_err(|e| CoreError::io(path, e))?;
    read_observations(file)
}
