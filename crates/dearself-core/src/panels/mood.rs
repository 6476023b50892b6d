//! Mood panel: one check-in per user per day, same upsert shape as steps.

use serde_json::json;

use crate::auth::Session;
use crate::error::{Result, ValidationError};
use crate::models::{Mood, MoodLog, NewMoodLog};
use crate::panels::{today, week_ago};
use crate::store::{tables, Order, Query, StoreClient};

pub struct MoodPanel<'a> {
    store: &'a StoreClient,
    session: &'a Session,
    today_log: Option<MoodLog>,
    weekly_logs: Vec<MoodLog>,
}

impl<'a> MoodPanel<'a> {
    pub fn new(store: &'a StoreClient, session: &'a Session) -> Self {
        Self {
            store,
            session,
            today_log: None,
            weekly_logs: Vec::new(),
        }
    }

    pub fn today_log(&self) -> Option<&MoodLog> {
        self.today_log.as_ref()
    }

    pub fn weekly_logs(&self) -> &[MoodLog] {
        &self.weekly_logs
    }

    pub fn weekly_average_intensity(&self) -> f64 {
        if self.weekly_logs.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.weekly_logs.iter().map(|l| l.intensity).sum();
        sum as f64 / self.weekly_logs.len() as f64
    }

    pub async fn load(&mut self) -> Result<()> {
        let today_query = Query::new()
            .eq("user_id", self.session.user_id)
            .eq("date", today());
        let today_log = self
            .store
            .select_one(self.session, tables::MOOD_LOGS, today_query)
            .await
            .inspect_err(|e| log::warn!("mood load failed: {e}"))?;

        let weekly_query = Query::new()
            .eq("user_id", self.session.user_id)
            .gte("date", week_ago())
            .order("date", Order::Desc);
        let weekly_logs = self
            .store
            .select(self.session, tables::MOOD_LOGS, weekly_query)
            .await?;

        self.today_log = today_log;
        self.weekly_logs = weekly_logs;
        Ok(())
    }

    /// Record today's mood. Intensity is 1..=10; blank notes are stored as
    /// null. Updates today's row when one exists, inserts otherwise.
    pub async fn log_mood(&mut self, mood: Mood, intensity: i64, notes: Option<&str>) -> Result<()> {
        if !(1..=10).contains(&intensity) {
            return Err(ValidationError::OutOfRange {
                field: "intensity".into(),
                value: intensity,
                min: 1,
                max: 10,
            }
            .into());
        }
        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);

        match &self.today_log {
            Some(existing) => {
                self.store
                    .update(
                        self.session,
                        tables::MOOD_LOGS,
                        existing.id,
                        &json!({ "mood": mood, "intensity": intensity, "notes": notes }),
                    )
                    .await?;
            }
            None => {
                let row = NewMoodLog {
                    mood,
                    intensity,
                    notes,
                    date: today(),
                    user_id: self.session.user_id,
                };
                let _: MoodLog = self
                    .store
                    .insert(self.session, tables::MOOD_LOGS, &row)
                    .await?;
            }
        }
        self.load().await
    }
}
