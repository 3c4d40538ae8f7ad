use chrono::{DateTime, Local, NaiveDate, Utc};
use mkical_core::{
    Countdown, CountdownOptions, DayOfMonth, MkicalResult, MonthCount, MonthSequence, Template,
    UidGenerator, YearMonth, ics,
};
use tracing::info;

use crate::config::Settings;

/// Today's date in the configured timezone, or system local time.
fn today(settings: &Settings, now: DateTime<Utc>) -> NaiveDate {
    match settings.timezone {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.with_timezone(&Local).date_naive(),
    }
}

/// Build the countdown calendar for `settings` as of `now`.
///
/// Day of month is validated first, then the month count, then the start
/// month, so a run with several bad values reports the earliest of them.
pub fn render(settings: &Settings, now: DateTime<Utc>) -> MkicalResult<String> {
    let today = today(settings, now);
    let day = DayOfMonth::resolve(settings.dom, today)?;
    let count = MonthCount::new(settings.months)?;
    let start = settings
        .start
        .as_deref()
        .map(str::parse::<YearMonth>)
        .transpose()?
        .unwrap_or_else(|| YearMonth::of(today));

    let dates = MonthSequence::new(start, day, count)?;
    info!(%start, %day, months = count.get(), "generating countdown");

    let options = CountdownOptions {
        name: settings.name.clone(),
        summary: Template::parse(&settings.summary),
        description: Template::parse(&settings.description),
        location: settings.location.clone(),
        timezone: settings.timezone.map(|tz| tz.name().to_string()),
        alarm_minutes: settings.alarm_minutes,
        uids: UidGenerator::new(settings.uid_domain.as_str()),
    };

    let countdown = Countdown::build(&options, dates, now);
    Ok(ics::generate_calendar(&countdown))
}
