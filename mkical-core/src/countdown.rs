//! Countdown assembly: one all-day event per generated month.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::months::MonthSequence;
use crate::template::{Template, TemplateContext};
use crate::uid::UidGenerator;

pub const DEFAULT_CALENDAR_NAME: &str = "Mortgage Countdown";
pub const DEFAULT_LOCATION: &str = "Home";
pub const DEFAULT_SUMMARY: &str = "{remaining} months remaining on mortgage";

/// Everything about a countdown except its dates.
#[derive(Debug, Clone)]
pub struct CountdownOptions {
    pub name: String,
    pub summary: Template,
    /// Empty means "reuse the summary".
    pub description: Template,
    pub location: String,
    /// Optional IANA zone name, written as X-WR-TIMEZONE.
    pub timezone: Option<String>,
    /// Minutes before the start of each event to show a reminder.
    pub alarm_minutes: Option<u32>,
    pub uids: UidGenerator,
}

impl Default for CountdownOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_CALENDAR_NAME.to_string(),
            summary: Template::parse(DEFAULT_SUMMARY),
            description: Template::parse(""),
            location: DEFAULT_LOCATION.to_string(),
            timezone: None,
            alarm_minutes: None,
            uids: UidGenerator::default(),
        }
    }
}

/// A single month of the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownEvent {
    pub uid: String,
    pub date: NaiveDate,
    /// Months left including this one; counts down to 1.
    pub remaining: usize,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub alarm_minutes: Option<u32>,
}

impl CountdownEvent {
    /// Exclusive end date of the all-day event.
    pub fn end_date(&self) -> NaiveDate {
        self.date + Duration::days(1)
    }
}

/// A fully computed countdown, ready to render.
#[derive(Debug, Clone)]
pub struct Countdown {
    pub name: String,
    pub timezone: Option<String>,
    /// Shared DTSTAMP / CREATED / LAST-MODIFIED for every event.
    pub stamp: DateTime<Utc>,
    pub events: Vec<CountdownEvent>,
}

impl Countdown {
    pub fn build(options: &CountdownOptions, dates: MonthSequence, stamp: DateTime<Utc>) -> Self {
        let total = dates.len();
        let mut events = Vec::with_capacity(total);

        for (i, date) in dates.enumerate() {
            let ctx = TemplateContext {
                remaining: total - i,
                elapsed: i + 1,
                total,
                date,
                name: &options.name,
                location: &options.location,
            };

            let summary = options.summary.render(&ctx);
            let description = if options.description.is_empty() {
                summary.clone()
            } else {
                options.description.render(&ctx)
            };

            debug!(%date, remaining = ctx.remaining, "countdown event");

            events.push(CountdownEvent {
                uid: options.uids.next_uid(),
                date,
                remaining: ctx.remaining,
                summary,
                description,
                location: options.location.clone(),
                alarm_minutes: options.alarm_minutes,
            });
        }

        Countdown {
            name: options.name.clone(),
            timezone: options.timezone.clone(),
            stamp,
            events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
