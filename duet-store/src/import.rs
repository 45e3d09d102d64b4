//! CSV import/export for date events.
//!
//! Format: `title,price,date,status,rating,match_result` with a header row.
//! Rows without a title are skipped; malformed dates and ratings degrade to
//! empty values rather than failing the import.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use duet_core::EventStatus;

use crate::events::StoredEvent;

/// Read events from a CSV file.
pub fn read_events_csv(path: impl AsRef<Path>) -> Result<Vec<StoredEvent>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    read_events(file)
}

/// Read events from any reader (used directly by tests).
pub fn read_events(reader: impl Read) -> Result<Vec<StoredEvent>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut events = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let title = record.get(0).unwrap_or("").trim();
        if title.is_empty() {
            continue;
        }

        let price = record.get(1).unwrap_or("").trim().to_string();
        let date = record
            .get(2)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
        let status = match record.get(3).map(str::trim) {
            Some("completed") => EventStatus::Completed,
            Some("pending_review") => EventStatus::PendingReview,
            _ => EventStatus::Scheduled,
        };
        let rating = record
            .get(4)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .map(|r| r.clamp(0.0, 1.0));
        let match_result = record
            .get(5)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        events.push(StoredEvent {
            id: format!("evt-{:04}", events.len() + 1),
            title: title.to_string(),
            price,
            date,
            status,
            rating,
            match_result,
        });
    }

    Ok(events)
}

/// Write events to a CSV file in the import format.
pub fn write_events_csv(path: impl AsRef<Path>, events: &[StoredEvent]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;

    wtr.write_record(["title", "price", "date", "status", "rating", "match_result"])?;
    for e in events {
        let status = match e.status {
            EventStatus::Scheduled => "scheduled",
            EventStatus::PendingReview => "pending_review",
            EventStatus::Completed => "completed",
        };
        wtr.write_record([
            e.title.as_str(),
            e.price.as_str(),
            &e.date.map(|d| d.to_string()).unwrap_or_default(),
            status,
            &e.rating.map(|r| r.to_string()).unwrap_or_default(),
            e.match_result.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
