//! CSV trip logs in, accuracy curves and predictions out.
//!
//! Input columns: `Day, StartLoc, EndLoc, Holiday, NbPassengers, Time`, where
//! `Time` is an `H.MM` clock reading and `NbPassengers` may be written as an
//! integral float (`2.0`). Other columns (such as a leading row
//! index) are ignored.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use wayfind_core::models::{Day, EvaluationReport, Location, Prediction, TripFeatures, TripRecord};
use wayfind_evaluation::TimeBucketer;

#[derive(Debug, Deserialize)]
struct TripRow {
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "StartLoc")]
    start: String,
    #[serde(rename = "EndLoc")]
    end: String,
    #[serde(rename = "Holiday", deserialize_with = "flag")]
    holiday: bool,
    #[serde(rename = "NbPassengers", deserialize_with = "count")]
    passengers: u32,
    #[serde(rename = "Time")]
    time: f64,
}

/// Accepts `0`/`1` as well as `true`/`false` in any case.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected 0/1/true/false, got `{other}`"
        ))),
    }
}

/// Accepts `2` as well as `2.0`; fractional or negative counts are rejected.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return Ok(n);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&v) => {
            Ok(v as u32)
        }
        _ => Err(serde::de::Error::custom(format!(
            "expected a non-negative whole count, got `{raw}`"
        ))),
    }
}

/// Read a trip log, oldest first, bucketing the clock column.
pub fn read_trips(path: &Path, bucketer: &TimeBucketer) -> Result<Vec<TripRecord>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_trips_from(file, bucketer).with_context(|| format!("failed to read {}", path.display()))
}

pub fn read_trips_from<R: Read>(reader: R, bucketer: &TimeBucketer) -> Result<Vec<TripRecord>> {
    let mut trips = Vec::new();
    for (i, row) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        let row: TripRow = row.with_context(|| format!("malformed row {}", i + 1))?;
        let time_bucket = bucketer
            .bucket(row.time)
            .with_context(|| format!("bad Time in row {}", i + 1))?;
        trips.push(TripRecord::new(
            TripFeatures {
                day: Day::new(row.day.trim()),
                start_location: Location::new(row.start.trim()),
                holiday: row.holiday,
                passengers: row.passengers,
                time_bucket,
            },
            Location::new(row.end.trim()),
        ));
    }
    Ok(trips)
}

/// How the accuracy curve is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `iteration,accuracy` rows
    Csv,
    /// The full report as pretty JSON
    Json,
}

pub fn write_report<W: Write>(
    report: &EvaluationReport,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut out = csv::Writer::from_writer(writer);
            for point in &report.points {
                out.serialize(point)?;
            }
            out.flush()?;
        }
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct PredictionRow<'a> {
    row: usize,
    start: &'a Location,
    predicted: &'a Location,
    actual: &'a Location,
    factor: f64,
    evidence: wayfind_core::models::Evidence,
}

pub fn write_predictions<W: Write>(
    queries: &[TripRecord],
    predictions: &[Prediction],
    writer: W,
) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for (i, (query, prediction)) in queries.iter().zip(predictions).enumerate() {
        out.serialize(PredictionRow {
            row: i + 1,
            start: &query.features.start_location,
            predicted: &prediction.destination,
            actual: &query.end_location,
            factor: prediction.factor,
            evidence: prediction.evidence,
        })?;
    }
    out.flush()?;
    Ok(())
}
