use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Availability window as served by the calendar data endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityEvent {
    /// Backend primary key; deletion is impossible without it
    #[serde(default)]
    pub id: Option<u64>,
    /// Display label, e.g. "alice's Availability"
    pub title: String,
    /// Local date-time, ISO 8601
    pub start: String,
    /// Local date-time, ISO 8601
    pub end: String,
    /// Username the window belongs to; key for color assignment
    #[serde(default)]
    pub owner: String,
}

/// An event annotated with its owner's display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredEvent {
    #[serde(flatten)]
    pub event: AvailabilityEvent,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized event time: {0}")]
pub struct EventTimeError(pub String);

impl ColoredEvent {
    pub fn start_at(&self) -> Result<NaiveDateTime, EventTimeError> {
        parse_event_instant(&self.event.start)
    }

    pub fn end_at(&self) -> Result<NaiveDateTime, EventTimeError> {
        parse_event_instant(&self.event.end)
    }

    /// Whether the event starts on `date`. Events with unreadable start times never match.
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_at().map(|start| start.date() == date).unwrap_or(false)
    }

    /// "09:00 - 10:30" style label for chips
    pub fn time_range_label(&self) -> String {
        match (self.start_at(), self.end_at()) {
            (Ok(start), Ok(end)) => format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
            (Ok(start), Err(_)) => start.format("%H:%M").to_string(),
            _ => String::new(),
        }
    }
}

/// Parse an event instant into local wall-clock time.
///
/// Accepts naive ISO date-times (with or without seconds / fractional seconds),
/// RFC 3339 with an offset (offset is dropped, wall time kept) and bare dates.
pub fn parse_event_instant(value: &str) -> Result<NaiveDateTime, EventTimeError> {
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    for format in NAIVE_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(instant);
        }
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.naive_local());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| EventTimeError(value.to_string()))
}

/// Events starting on `date`, ordered by start time
pub fn events_on(events: &[ColoredEvent], date: NaiveDate) -> Vec<&ColoredEvent> {
    let mut day: Vec<&ColoredEvent> = events.iter().filter(|e| e.starts_on(date)).collect();
    day.sort_by_key(|e| e.start_at().ok());
    day
}
