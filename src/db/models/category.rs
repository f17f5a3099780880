use serde::Serialize;

pub const DEFAULT_COLOR: &str = "#6b7280";

/// Known event categories. Event `type` values are free text; anything not
/// listed here renders with the default colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Work,
    Meeting,
    Appointment,
    Busy,
    Free,
    Sleep,
    Hiit,
    Workout,
    Consultation,
}

impl EventCategory {
    /// Convert from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" => Some(EventCategory::Work),
            "meeting" => Some(EventCategory::Meeting),
            "appointment" => Some(EventCategory::Appointment),
            "busy" => Some(EventCategory::Busy),
            "free" => Some(EventCategory::Free),
            "sleep" => Some(EventCategory::Sleep),
            "hiit" => Some(EventCategory::Hiit),
            "workout" => Some(EventCategory::Workout),
            "consultation" => Some(EventCategory::Consultation),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EventCategory::Work => "#3b82f6",
            EventCategory::Meeting => "#8b5cf6",
            EventCategory::Appointment => "#10b981",
            EventCategory::Busy => "#ef4444",
            EventCategory::Free => "#22c55e",
            EventCategory::Sleep => "#6366f1",
            EventCategory::Hiit => "#f97316",
            EventCategory::Workout => "#f59e0b",
            EventCategory::Consultation => "#14b8a6",
        }
    }
}

/// Display colour for a free-text event type.
pub fn category_color(event_type: &str) -> &'static str {
    EventCategory::from_str(event_type)
        .map(EventCategory::color)
        .unwrap_or(DEFAULT_COLOR)
}
