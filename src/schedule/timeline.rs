//! Horizontal daily timeline: each event becomes a marker positioned by
//! percentage along a 24-hour-wide track.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use super::geometry::{project_block, timeline_percent, LayoutError};
use super::grid::SkippedEvent;
use super::time::parse_minutes;
use crate::db::models::Event;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMarker {
    pub event_id: String,
    pub title: String,
    pub event_type: String,
    pub color: &'static str,
    pub start: String,
    pub end: String,
    pub left_percent: f64,
    pub width_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub date: NaiveDate,
    pub markers: Vec<TimelineMarker>,
    pub skipped: Vec<SkippedEvent>,
}

fn marker(event: &Event) -> Result<(u32, TimelineMarker), LayoutError> {
    let start = parse_minutes(&event.start)?;
    let end = parse_minutes(&event.end)?;
    project_block(start, end)?;

    let left_percent = timeline_percent(start);
    Ok((
        start,
        TimelineMarker {
            event_id: event.id.clone(),
            title: event.title.clone(),
            event_type: event.event_type.clone(),
            color: event.color(),
            start: event.start.clone(),
            end: event.end.clone(),
            left_percent,
            width_percent: timeline_percent(end) - left_percent,
        },
    ))
}

/// Markers for every event on `date`, ordered by start time.
pub fn timeline(date: NaiveDate, events: &[Event]) -> Timeline {
    let mut positioned = Vec::new();
    let mut skipped = Vec::new();

    for event in events.iter().filter(|event| event.occurs_on(date)) {
        match marker(event) {
            Ok(entry) => positioned.push(entry),
            Err(e) => {
                warn!(event_id = %event.id, "Skipping timeline marker: {}", e);
                skipped.push(SkippedEvent {
                    event_id: event.id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    positioned.sort_by_key(|(start, _)| *start);

    Timeline {
        date,
        markers: positioned.into_iter().map(|(_, marker)| marker).collect(),
        skipped,
    }
}
