//! Demo team members and events for the dashboard, dated relative to `today`.

use chrono::{Duration, NaiveDate};

use crate::db::models::{CreateEvent, CreateTeamMember};
use crate::db::{EventRepository, TeamMemberRepository};
use crate::error::AppResult;

fn members() -> Vec<CreateTeamMember> {
    [
        ("coach-maya", "Maya Patel", "Health Coach"),
        ("dr-chen", "Dr. Alex Chen", "Physician"),
        ("rd-jordan", "Jordan Lee", "Registered Dietitian"),
    ]
    .into_iter()
    .map(|(id, name, role)| CreateTeamMember {
        id: Some(id.to_string()),
        name: name.to_string(),
        role: role.to_string(),
        avatar_url: None,
    })
    .collect()
}

struct SeedEvent {
    title: &'static str,
    start: &'static str,
    end: &'static str,
    day_offset: Option<i64>,
    event_type: &'static str,
    member_id: Option<&'static str>,
    attendees: &'static [&'static str],
    location: Option<&'static str>,
    meeting_link: Option<&'static str>,
    recurring: Option<&'static str>,
}

const EVENTS: &[SeedEvent] = &[
    SeedEvent {
        title: "Sleep",
        start: "12:00 AM",
        end: "6:00 AM",
        day_offset: None,
        event_type: "sleep",
        member_id: None,
        attendees: &[],
        location: None,
        meeting_link: None,
        recurring: Some("daily"),
    },
    SeedEvent {
        title: "Morning client check-ins",
        start: "8:00 AM",
        end: "8:30 AM",
        day_offset: None,
        event_type: "work",
        member_id: Some("coach-maya"),
        attendees: &[],
        location: None,
        meeting_link: None,
        recurring: Some("daily"),
    },
    SeedEvent {
        title: "Initial consultation: Sarah Johnson",
        start: "9:00 AM",
        end: "10:00 AM",
        day_offset: Some(0),
        event_type: "appointment",
        member_id: Some("dr-chen"),
        attendees: &["Sarah Johnson"],
        location: Some("Exam room 1"),
        meeting_link: None,
        recurring: None,
    },
    SeedEvent {
        title: "Lab review: lipid panel",
        start: "9:30 AM",
        end: "10:30 AM",
        day_offset: Some(0),
        event_type: "consultation",
        member_id: Some("dr-chen"),
        attendees: &["Michael Brown"],
        location: None,
        meeting_link: Some("https://meet.example.com/lab-review"),
        recurring: None,
    },
    SeedEvent {
        title: "Care team standup",
        start: "11:30 AM",
        end: "12:30 PM",
        day_offset: Some(0),
        event_type: "meeting",
        member_id: None,
        attendees: &["Maya Patel", "Dr. Alex Chen", "Jordan Lee"],
        location: Some("Conference room"),
        meeting_link: Some("https://meet.example.com/standup"),
        recurring: Some("weekly"),
    },
    SeedEvent {
        title: "Lunch",
        start: "12:30 PM",
        end: "1:30 PM",
        day_offset: None,
        event_type: "busy",
        member_id: None,
        attendees: &[],
        location: None,
        meeting_link: None,
        recurring: Some("daily"),
    },
    SeedEvent {
        title: "Open office hours",
        start: "3:00 PM",
        end: "5:00 PM",
        day_offset: Some(-1),
        event_type: "free",
        member_id: Some("rd-jordan"),
        attendees: &[],
        location: Some("Nutrition lab"),
        meeting_link: None,
        recurring: None,
    },
    SeedEvent {
        title: "Nutrition plan review: Emily Davis",
        start: "2:00 PM",
        end: "2:45 PM",
        day_offset: Some(2),
        event_type: "appointment",
        member_id: Some("rd-jordan"),
        attendees: &["Emily Davis"],
        location: None,
        meeting_link: Some("https://meet.example.com/nutrition"),
        recurring: None,
    },
    SeedEvent {
        title: "Billing follow-up",
        start: "4:00 PM",
        end: "4:30 PM",
        day_offset: Some(1),
        event_type: "work",
        member_id: Some("coach-maya"),
        attendees: &[],
        location: None,
        meeting_link: None,
        recurring: None,
    },
    SeedEvent {
        title: "Group HIIT class",
        start: "6:00 PM",
        end: "6:45 PM",
        day_offset: Some(1),
        event_type: "HIIT",
        member_id: Some("coach-maya"),
        attendees: &["David Wilson", "Lisa Anderson"],
        location: Some("Studio B"),
        meeting_link: None,
        recurring: Some("weekly"),
    },
];

impl SeedEvent {
    fn to_create(&self, today: NaiveDate) -> CreateEvent {
        CreateEvent {
            title: self.title.to_string(),
            start: self.start.to_string(),
            end: self.end.to_string(),
            date: self.day_offset.map(|offset| today + Duration::days(offset)),
            event_type: self.event_type.to_string(),
            member_id: self.member_id.map(str::to_string),
            attendees: self.attendees.iter().map(|a| a.to_string()).collect(),
            location: self.location.map(str::to_string),
            meeting_link: self.meeting_link.map(str::to_string),
            recurring: self.recurring.map(str::to_string),
            description: None,
        }
    }
}

/// Insert the demo data set. Returns the number of events created.
pub async fn seed_mock_data(pool: &sqlx::SqlitePool, today: NaiveDate) -> AppResult<usize> {
    let members = members();
    let member_count = members.len();
    for member in members {
        TeamMemberRepository::create(pool, member).await?;
    }

    for event in EVENTS {
        EventRepository::create(pool, event.to_create(today)).await?;
    }

    tracing::info!(
        members = member_count,
        events = EVENTS.len(),
        "Seeded mock schedule data for {}",
        today
    );

    Ok(EVENTS.len())
}
