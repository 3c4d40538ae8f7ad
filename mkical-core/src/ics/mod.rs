//! iCalendar (RFC 5545) output.

mod generate;

pub use generate::{PRODID, generate_calendar};
