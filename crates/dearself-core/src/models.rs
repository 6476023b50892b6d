//! Row types for the remote store collections.
//!
//! Each `*Log`/row struct mirrors a table exactly as the store returns it;
//! the paired `New*` struct is the insert payload (the store assigns `id`
//! and `created_at`). Every row is scoped to its owner by `user_id`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Mood labels shared by mood logs and journal entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Calm,
    Excited,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Calm,
        Mood::Excited,
        Mood::Neutral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
            Mood::Neutral => "Neutral",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "anxious" => Ok(Mood::Anxious),
            "calm" => Ok(Mood::Calm),
            "excited" => Ok(Mood::Excited),
            "neutral" => Ok(Mood::Neutral),
            other => Err(format!("Unknown mood: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationLog {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub amount_ml: i64,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewHydrationLog {
    pub amount_ml: i64,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodLog {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub mood: Mood,
    /// 1 (barely) ..= 10 (overwhelming).
    pub intensity: i64,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewMoodLog {
    pub mood: Mood,
    pub intensity: i64,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepsLog {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub steps: i64,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewStepsLog {
    pub steps: i64,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

/// A completed guided-breathing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingSessionRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub pattern_name: String,
    pub duration_seconds: i64,
    pub cycles_completed: i64,
    pub date: NaiveDate,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBreathingSessionRecord {
    pub pattern_name: String,
    pub duration_seconds: i64,
    pub cycles_completed: i64,
    pub date: NaiveDate,
    pub user_id: Uuid,
}
