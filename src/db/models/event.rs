use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::category::category_color;

// ============================================================================
// Schedule Event Models
// ============================================================================

/// A scheduled occurrence shown on the dashboard calendars.
///
/// `start` and `end` are wall-clock strings in `"H:MM AM/PM"` form. An event
/// without a `date` repeats every day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub member_id: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub recurring: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Event {
    /// Whether the event belongs on the given day.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.date.map_or(true, |date| date == day)
    }

    pub fn color(&self) -> &'static str {
        category_color(&self.event_type)
    }

    /// Apply the fields present in `update`, leaving the rest untouched.
    /// An explicit `null` clears an optional field.
    pub fn apply(&mut self, update: UpdateEvent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(start) = update.start {
            self.start = start;
        }
        if let Some(end) = update.end {
            self.end = end;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(event_type) = update.event_type {
            self.event_type = event_type;
        }
        if let Some(member_id) = update.member_id {
            self.member_id = member_id;
        }
        if let Some(attendees) = update.attendees {
            self.attendees = attendees;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(meeting_link) = update.meeting_link {
            self.meeting_link = meeting_link;
        }
        if let Some(recurring) = update.recurring {
            self.recurring = recurring;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    pub start: String,
    pub end: String,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub member_id: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub recurring: Option<String>,
    pub description: Option<String>,
}

/// Partial update. For the nullable fields an absent key leaves the value
/// alone and `null` clears it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub date: Option<Option<NaiveDate>>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub member_id: Option<Option<String>>,
    pub attendees: Option<Vec<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub meeting_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub recurring: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}

/// Filters accepted when listing events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub member_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_from_null() {
        let keep: UpdateEvent = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(keep.date, None);
        assert_eq!(keep.member_id, None);

        let clear: UpdateEvent =
            serde_json::from_value(serde_json::json!({ "date": null, "memberId": null })).unwrap();
        assert_eq!(clear.date, Some(None));
        assert_eq!(clear.member_id, Some(None));

        let set: UpdateEvent =
            serde_json::from_value(serde_json::json!({ "date": "2024-05-15", "location": "Room 4" }))
                .unwrap();
        assert_eq!(set.date, Some(NaiveDate::from_ymd_opt(2024, 5, 15)));
        assert_eq!(set.location, Some(Some("Room 4".to_string())));
    }
}
