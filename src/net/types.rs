//! Wire DTOs returned by the lesson backend.
//!
//! DESIGN
//! ======
//! These are read-only projections of backend records. Field names are
//! camelCase on the wire; optional fields tolerate older backends that omit
//! them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Lightweight lesson record for list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonTile {
    pub id: Uuid,
    /// Start time as formatted by the backend (`yyyy-MM-dd | HH:mm`).
    pub date: String,
    /// Human-readable duration (e.g. `"1h 30m"`).
    pub duration: String,
    /// Missing or `null` on the wire reads as [`LessonStatus::Other`].
    #[serde(default = "unknown_status", deserialize_with = "nullable_status")]
    pub status: LessonStatus,
    pub instructor: Instructor,
    pub clients_count: u64,
    /// Maximum number of participants, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl LessonTile {
    /// Whether the lesson has reached its reported capacity.
    /// Lessons without a reported capacity are never full.
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.clients_count >= u64::from(cap))
    }
}

/// Lifecycle status of a lesson.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LessonStatus {
    #[default]
    Planned,
    InProgress,
    Finished,
    /// Any status this client does not know about.
    #[serde(other)]
    Other,
}

fn unknown_status() -> LessonStatus {
    LessonStatus::Other
}

fn nullable_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LessonStatus, D::Error> {
    Ok(Option::<LessonStatus>::deserialize(deserializer)?.unwrap_or_else(unknown_status))
}

/// Public instructor record embedded in lesson tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub qualification_level: String,
    /// Average rating rounded to one decimal, `0.0` when unrated.
    #[serde(default)]
    pub rating: f64,
}

impl Instructor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Client enrolled in a lesson.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Parameters for scheduling a new lesson via `POST /lessons/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    /// ISO local date-time, e.g. `2025-01-20T10:00:00`.
    pub time: String,
    /// ISO-8601 duration, e.g. `PT1H30M`.
    pub duration: String,
    pub instructor_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}
