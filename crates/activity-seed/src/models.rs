use serde::{Deserialize, Serialize};

/// An extracurricular activity as stored in the `activities` collection.
///
/// `name` is the natural key; the collection carries a unique index on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub name: String,
    pub description: String,
    /// Free text, e.g. "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".
    pub schedule: String,
    /// Capacity shown by the app. Not checked against `participants` here.
    pub max_participants: i32,
    /// Email addresses of signed-up students, in sign-up order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: i32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}
