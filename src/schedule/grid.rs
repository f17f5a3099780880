//! Day, week and team grids.
//!
//! A grid is 24 hour rows of 60 px and one column per day or per team member.
//! Every event that belongs to a column is placed as an absolutely positioned
//! rectangle. Overlapping events are not rearranged: each keeps the geometry
//! of its own time range and `z_index` follows input order, so the later event
//! is painted on top.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::geometry::{project_range, BlockRect, GRID_HEIGHT_PX, HOUR_HEIGHT_PX};
use super::time::hour_label;
use crate::db::models::{Event, TeamMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    Week,
    Team,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourRow {
    pub hour: u32,
    pub label: String,
    pub top: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedEvent {
    pub event: Event,
    pub color: &'static str,
    pub rect: BlockRect,
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub key: String,
    pub label: String,
    pub date: NaiveDate,
    pub member_id: Option<String>,
    pub events: Vec<PlacedEvent>,
}

/// An event that could not be placed, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEvent {
    pub event_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub view: ViewKind,
    pub height: u32,
    pub hours: Vec<HourRow>,
    pub columns: Vec<GridColumn>,
    pub skipped: Vec<SkippedEvent>,
}

impl GridLayout {
    /// Topmost event under the vertical offset `y` of a column. This is what a
    /// click on the grid resolves to.
    pub fn event_at(&self, column: usize, y: u32) -> Option<&Event> {
        self.columns
            .get(column)?
            .events
            .iter()
            .filter(|placed| placed.rect.contains(y))
            .max_by_key(|placed| placed.z_index)
            .map(|placed| &placed.event)
    }
}

struct ColumnSpec {
    key: String,
    label: String,
    date: NaiveDate,
    member_id: Option<String>,
}

pub fn hour_rows() -> Vec<HourRow> {
    (0..24)
        .map(|hour| HourRow {
            hour,
            label: hour_label(hour),
            top: hour * HOUR_HEIGHT_PX,
            height: HOUR_HEIGHT_PX,
        })
        .collect()
}

/// The seven days of the week containing `anchor`.
pub fn week_days(anchor: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let offset = (7 + anchor.weekday().num_days_from_monday()
        - week_start.num_days_from_monday())
        % 7;
    let first = anchor - Duration::days(i64::from(offset));
    (0..7).map(|i| first + Duration::days(i)).collect()
}

fn day_column(date: NaiveDate) -> ColumnSpec {
    ColumnSpec {
        key: date.to_string(),
        label: date.format("%a %-d").to_string(),
        date,
        member_id: None,
    }
}

pub fn day_grid(date: NaiveDate, events: &[Event]) -> GridLayout {
    build(ViewKind::Day, vec![day_column(date)], events)
}

pub fn week_grid(anchor: NaiveDate, week_start: Weekday, events: &[Event]) -> GridLayout {
    let columns = week_days(anchor, week_start)
        .into_iter()
        .map(day_column)
        .collect();
    build(ViewKind::Week, columns, events)
}

/// One column per member. Only events assigned to that member are placed.
pub fn team_grid(date: NaiveDate, members: &[TeamMember], events: &[Event]) -> GridLayout {
    let columns = members
        .iter()
        .map(|member| ColumnSpec {
            key: member.id.clone(),
            label: member.name.clone(),
            date,
            member_id: Some(member.id.clone()),
        })
        .collect();
    build(ViewKind::Team, columns, events)
}

fn belongs_to(spec: &ColumnSpec, event: &Event) -> bool {
    if !event.occurs_on(spec.date) {
        return false;
    }
    match spec.member_id {
        Some(ref member_id) => event.member_id.as_deref() == Some(member_id.as_str()),
        None => true,
    }
}

fn build(view: ViewKind, specs: Vec<ColumnSpec>, events: &[Event]) -> GridLayout {
    let mut skipped: Vec<SkippedEvent> = Vec::new();

    let columns = specs
        .into_iter()
        .map(|spec| {
            let mut placed = Vec::new();

            for event in events.iter().filter(|event| belongs_to(&spec, event)) {
                match project_range(&event.start, &event.end) {
                    Ok(rect) => placed.push(PlacedEvent {
                        event: event.clone(),
                        color: event.color(),
                        rect,
                        z_index: placed.len() as u32,
                    }),
                    Err(e) => {
                        if !skipped.iter().any(|s| s.event_id == event.id) {
                            warn!(event_id = %event.id, column = %spec.key, "Skipping event: {}", e);
                            skipped.push(SkippedEvent {
                                event_id: event.id.clone(),
                                reason: e.to_string(),
                            });
                        }
                    }
                }
            }

            GridColumn {
                key: spec.key,
                label: spec.label,
                date: spec.date,
                member_id: spec.member_id,
                events: placed,
            }
        })
        .collect();

    GridLayout {
        view,
        height: GRID_HEIGHT_PX,
        hours: hour_rows(),
        columns,
        skipped,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    pub(crate) fn event(id: &str, start: &str, end: &str, date: Option<NaiveDate>) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            start: start.to_string(),
            end: end.to_string(),
            date,
            event_type: "appointment".to_string(),
            member_id: None,
            attendees: Vec::new(),
            location: None,
            meeting_link: None,
            recurring: None,
            description: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn member(id: &str, name: &str) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: "Coach".to_string(),
            avatar_url: None,
            created_at: timestamp(),
        }
    }

    // 2024-05-15 is a Wednesday.
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn hour_rows_cover_the_day() {
        let rows = hour_rows();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].label, "12 AM");
        assert_eq!(rows[13].label, "1 PM");
        assert_eq!(rows[23].top, 23 * 60);
        assert_eq!(rows.iter().map(|r| r.height).sum::<u32>(), GRID_HEIGHT_PX);
    }

    #[test]
    fn week_starts_on_configured_day() {
        let sunday_first = week_days(wednesday(), Weekday::Sun);
        assert_eq!(sunday_first[0], NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
        assert_eq!(sunday_first[6], NaiveDate::from_ymd_opt(2024, 5, 18).unwrap());

        let monday_first = week_days(wednesday(), Weekday::Mon);
        assert_eq!(monday_first[0].weekday(), Weekday::Mon);
        assert_eq!(monday_first[2], wednesday());

        let on_start = week_days(NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(), Weekday::Sun);
        assert_eq!(on_start[0], NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
    }

    #[test]
    fn dated_event_only_in_its_column_undated_everywhere() {
        let events = vec![
            event("wed", "9:00 AM", "10:00 AM", Some(wednesday())),
            event("daily", "7:00 AM", "7:30 AM", None),
        ];

        let layout = week_grid(wednesday(), Weekday::Sun, &events);
        assert_eq!(layout.view, ViewKind::Week);
        assert_eq!(layout.columns.len(), 7);

        for column in &layout.columns {
            let ids: Vec<&str> = column.events.iter().map(|p| p.event.id.as_str()).collect();
            assert!(ids.contains(&"daily"), "undated event missing on {}", column.date);
            if column.date == wednesday() {
                assert!(ids.contains(&"wed"));
            } else {
                assert!(!ids.contains(&"wed"), "dated event leaked into {}", column.date);
            }
        }
    }

    #[test]
    fn overlapping_events_keep_their_own_geometry() {
        let events = vec![
            event("a", "9:00 AM", "10:00 AM", Some(wednesday())),
            event("b", "9:30 AM", "10:30 AM", Some(wednesday())),
        ];

        let layout = day_grid(wednesday(), &events);
        let placed = &layout.columns[0].events;
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].rect, BlockRect { top: 540, height: 60 });
        assert_eq!(placed[1].rect, BlockRect { top: 570, height: 60 });
        assert_eq!(placed[0].z_index, 0);
        assert_eq!(placed[1].z_index, 1);
        assert!(layout.skipped.is_empty());
    }

    #[test]
    fn click_resolves_to_topmost_event() {
        let events = vec![
            event("a", "9:00 AM", "10:00 AM", Some(wednesday())),
            event("b", "9:30 AM", "10:30 AM", Some(wednesday())),
        ];
        let layout = day_grid(wednesday(), &events);

        assert_eq!(layout.event_at(0, 545).map(|e| e.id.as_str()), Some("a"));
        assert_eq!(layout.event_at(0, 580).map(|e| e.id.as_str()), Some("b"));
        assert_eq!(layout.event_at(0, 620).map(|e| e.id.as_str()), Some("b"));
        assert_eq!(layout.event_at(0, 700), None);
        assert_eq!(layout.event_at(3, 545), None);
    }

    #[test]
    fn malformed_events_are_skipped_once() {
        let events = vec![
            event("inverted", "11:00 PM", "1:00 AM", None),
            event("garbage", "later", "1:00 PM", None),
            event("ok", "1:00 PM", "2:00 PM", None),
        ];

        let layout = week_grid(wednesday(), Weekday::Mon, &events);
        assert_eq!(layout.skipped.len(), 2);
        assert!(layout.skipped.iter().any(|s| s.event_id == "inverted"));
        assert!(layout.skipped.iter().any(|s| s.event_id == "garbage"));
        for column in &layout.columns {
            assert_eq!(column.events.len(), 1);
            assert_eq!(column.events[0].z_index, 0);
        }
    }

    #[test]
    fn team_columns_only_hold_assigned_events() {
        let mut lee = event("lee-1", "8:00 AM", "9:00 AM", Some(wednesday()));
        lee.member_id = Some("lee".to_string());
        let mut kim = event("kim-1", "8:00 AM", "8:45 AM", None);
        kim.member_id = Some("kim".to_string());
        let unassigned = event("open", "8:00 AM", "9:00 AM", None);

        let members = vec![member("lee", "Dr. Lee"), member("kim", "Kim Park")];
        let layout = team_grid(wednesday(), &members, &[lee, kim, unassigned]);

        assert_eq!(layout.view, ViewKind::Team);
        assert_eq!(layout.columns[0].label, "Dr. Lee");
        assert_eq!(layout.columns[0].events.len(), 1);
        assert_eq!(layout.columns[0].events[0].event.id, "lee-1");
        assert_eq!(layout.columns[1].events.len(), 1);
        assert_eq!(layout.columns[1].events[0].event.id, "kim-1");
        assert_eq!(layout.columns[1].events[0].rect.height, 45);
    }

    #[test]
    fn placed_events_carry_category_color() {
        let mut sleep = event("s", "12:00 AM", "6:00 AM", None);
        sleep.event_type = "Sleep".to_string();
        let layout = day_grid(wednesday(), &[sleep]);
        assert_eq!(layout.columns[0].events[0].color, "#6366f1");
        assert_eq!(layout.columns[0].label, "Wed 15");
    }
}
