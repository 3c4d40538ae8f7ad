//! Core types for mkical.
//!
//! This crate turns a start month, a day of month and a month count into a
//! countdown of all-day events, and renders that countdown as an iCalendar
//! document:
//! - `months` for the monthly date sequence
//! - `params` for validated day-of-month and month-count inputs
//! - `template` for summary/description placeholder expansion
//! - `countdown` for assembling events
//! - `ics` for rendering

pub mod countdown;
pub mod error;
pub mod ics;
pub mod months;
pub mod params;
pub mod template;
pub mod uid;

pub use countdown::{Countdown, CountdownEvent, CountdownOptions};
pub use error::{MkicalError, MkicalResult};
pub use months::{MonthSequence, YearMonth};
pub use params::{DayOfMonth, MonthCount};
pub use template::Template;
pub use uid::UidGenerator;
