//! ICS document generation.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use icalendar::{Alarm, Calendar, Component, EventLike, Property, Trigger, ValueType};

use crate::countdown::{Countdown, CountdownEvent};

pub const PRODID: &str = "-//mkical//mkical//EN";

/// Render a countdown as a complete VCALENDAR document (CRLF line endings).
pub fn generate_calendar(countdown: &Countdown) -> String {
    let mut cal = Calendar::new();

    cal.append_property(Property::new("METHOD", "PUBLISH"));
    // icalendar only escapes properties it knows to be TEXT, and NAME
    // (RFC 7986) is not among them. X-WR-* values are escaped.
    cal.append_property(Property::new("NAME", &escape_text(&countdown.name)));
    cal.append_property(Property::new("X-WR-CALNAME", &countdown.name));
    if let Some(ref tz) = countdown.timezone {
        cal.append_property(Property::new("X-WR-TIMEZONE", tz));
    }

    let stamp = format_utc(&countdown.stamp);
    for event in &countdown.events {
        cal.push(build_event(event, &stamp));
    }

    normalize(&cal.done().to_string())
}

/// Escape a TEXT value per RFC 5545 section 3.3.11.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

fn build_event(event: &CountdownEvent, stamp: &str) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);

    ics_event.add_property("DTSTAMP", stamp);
    ics_event.add_property("CREATED", stamp);
    ics_event.add_property("LAST-MODIFIED", stamp);

    add_date_property(&mut ics_event, "DTSTART", event.date);
    add_date_property(&mut ics_event, "DTEND", event.end_date());

    ics_event.summary(&event.summary);
    ics_event.description(&event.description);
    ics_event.location(&event.location);

    ics_event.add_property("STATUS", "CONFIRMED");
    ics_event.add_property("TRANSP", "OPAQUE");

    if let Some(minutes) = event.alarm_minutes {
        let trigger = Trigger::before_start(Duration::minutes(i64::from(minutes)));
        ics_event.alarm(Alarm::display(&event.summary, trigger));
    }

    ics_event.done()
}

/// All-day date property, e.g. `DTSTART;VALUE=DATE:20241115`.
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Post-process the icalendar crate's output:
/// - PRODID becomes ours, followed by an explicit CALSCALE
/// - DTSTAMP and UID inside VALARM are dropped (not required by RFC 5545)
fn normalize(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\nCALSCALE:GREGORIAN\r\n");
            continue;
        }

        if line.starts_with("CALSCALE:") {
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
