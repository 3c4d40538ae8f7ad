//! Event UID generation.

use uuid::Uuid;

pub const DEFAULT_UID_DOMAIN: &str = "mkical";

/// Generates `<uuid>@<domain>` identifiers.
///
/// UIDs only need to be unique within one generated calendar so that
/// consumers don't collapse events into each other. They are not stable
/// across runs.
#[derive(Debug, Clone)]
pub struct UidGenerator {
    domain: String,
}

impl UidGenerator {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    pub fn next_uid(&self) -> String {
        format!("{}@{}", Uuid::new_v4(), self.domain)
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_UID_DOMAIN)
    }
}
