use serde::{Deserialize, Serialize};

/// Attendance state of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Undecided; flips to `Ok` on toggle.
    Pending,
    /// Confirmed attending; flips back to `Pending` on toggle.
    Ok,
    /// No attendance expected. Assigned to zero-member groups at creation
    /// and never left by toggling.
    Unknown,
}

impl Status {
    /// Status assigned at creation time. Derived once, never re-applied on edit.
    pub fn initial(count: u32) -> Self {
        if count == 0 { Self::Unknown } else { Self::Pending }
    }

    /// The status after one user toggle. `Unknown` is sticky.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Ok,
            Self::Ok => Self::Pending,
            Self::Unknown => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ok => "ok",
            Self::Unknown => "unknown",
        }
    }
}

/// A named unit of people tracked for attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique within the collection; assigned at creation, immutable.
    pub id: u64,
    /// Non-empty, trimmed.
    pub name: String,
    /// Member count.
    pub count: u32,
    pub status: Status,
}
