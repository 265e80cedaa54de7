use chrono::{DateTime, Utc};

/// Soft-delete state of a record.
///
/// Derived from the nullable `deletion_date` (or `deprecation_date`) column:
/// `None` means the record is active, a timestamp means it was retired at
/// that instant. Once set the timestamp is never cleared; there is no
/// un-delete path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    SoftDeleted(DateTime<Utc>),
}

impl Lifecycle {
    pub fn from_deletion_date(deletion_date: Option<DateTime<Utc>>) -> Self {
        match deletion_date {
            None => Lifecycle::Active,
            Some(at) => Lifecycle::SoftDeleted(at),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Lifecycle::Active => None,
            Lifecycle::SoftDeleted(at) => Some(*at),
        }
    }
}

/// Implemented by entities that retire via a nullable timestamp column.
pub trait SoftDeletable {
    fn lifecycle(&self) -> Lifecycle;

    fn is_active(&self) -> bool {
        self.lifecycle().is_active()
    }
}
