use icalendar::{Calendar, Component, EventLike};
use tracing::{info, warn};

use crate::model::schedule::ScheduleEvent;

pub const ICS_FILENAME: &str = "creatorhub-schedule.ics";
pub const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
const UID_SUFFIX: &str = "@creatorhub";

/// Stable identifier for an exported event: the event id, or a random one when absent.
pub fn event_uid(ev: &ScheduleEvent) -> String {
    let stem = match ev.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => uuid::Uuid::new_v4().simple().to_string(),
    };
    format!("{}{}", stem, UID_SUFFIX)
}

/// Export the whole schedule as an iCalendar stream.
/// DTSTAMP is the event start so repeated exports of the same data are identical.
/// Events whose start cannot be parsed are skipped with a warning, so the export
/// holds one VEVENT per event with a valid ISO 8601 start.
pub fn to_ics(events: &[ScheduleEvent]) -> String {
    let mut calendar = Calendar::new();
    calendar.name("CreatorHub Schedule");

    let mut exported = 0usize;
    for ev in events {
        let Some(start) = ev.start_at() else {
            warn!(title = %ev.title, start = %ev.start, "Skipping event with invalid start");
            continue;
        };
        let end = ev.end_at().unwrap_or(start);

        let event = icalendar::Event::new()
            .uid(&event_uid(ev))
            .timestamp(start)
            .starts(start)
            .ends(end)
            .summary(&ev.title)
            .description(ev.note.as_deref().unwrap_or(""))
            .location(ev.platform.as_deref().unwrap_or(""))
            .done();
        calendar.push(event);
        exported += 1;
    }

    info!(exported, total = events.len(), "Built iCalendar export");
    calendar.done().to_string()
}

/// Parsed view of an exported calendar, used to trace entries back to their source.
pub struct Ical {
    pub calendar: Option<Calendar>,
}

impl Ical {
    /// Build from a raw ICS string (no network).
    pub fn from_ics(ics: &str) -> Self {
        let calendar = match icalendar::parser::read_calendar(ics) {
            Ok(parsed) => Some(parsed.into()),
            Err(e) => {
                warn!(error = %e, "ICS parse error");
                None
            }
        };
        Self { calendar }
    }

    /// Property values of every VEVENT, in document order.
    pub fn events(&self) -> Vec<ExportedEvent> {
        let Some(cal) = self.calendar.as_ref() else {
            return Vec::new();
        };
        cal.components
            .iter()
            .filter_map(|comp| match comp {
                icalendar::CalendarComponent::Event(e) => Some(ExportedEvent {
                    uid: e.property_value("UID").unwrap_or("").to_string(),
                    summary: e.property_value("SUMMARY").unwrap_or("").to_string(),
                    location: e.property_value("LOCATION").unwrap_or("").to_string(),
                    dtstart: e.property_value("DTSTART").unwrap_or("").to_string(),
                    dtend: e.property_value("DTEND").unwrap_or("").to_string(),
                }),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedEvent {
    pub uid: String,
    pub summary: String,
    pub location: String,
    pub dtstart: String,
    pub dtend: String,
}
