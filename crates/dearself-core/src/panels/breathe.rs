//! Completed guided-breathing sessions.
//!
//! The session engine itself keeps no history; this panel writes one row per
//! finished exercise so the dashboard and `breathe` screen can show recent
//! practice.

use crate::auth::Session;
use crate::breathing::BreathingPattern;
use crate::error::Result;
use crate::models::{BreathingSessionRecord, NewBreathingSessionRecord};
use crate::panels::today;
use crate::store::{tables, Order, Query, StoreClient};

pub struct BreathePanel<'a> {
    store: &'a StoreClient,
    session: &'a Session,
}

impl<'a> BreathePanel<'a> {
    pub fn new(store: &'a StoreClient, session: &'a Session) -> Self {
        Self { store, session }
    }

    /// Record a finished exercise.
    pub async fn record(
        &self,
        pattern: &BreathingPattern,
        cycles_completed: u32,
        duration_seconds: u32,
    ) -> Result<BreathingSessionRecord> {
        let row = NewBreathingSessionRecord {
            pattern_name: pattern.name.to_string(),
            duration_seconds: duration_seconds as i64,
            cycles_completed: cycles_completed as i64,
            date: today(),
            user_id: self.session.user_id,
        };
        let record = self
            .store
            .insert(self.session, tables::BREATHING_SESSIONS, &row)
            .await?;
        Ok(record)
    }

    /// Most recent sessions, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<BreathingSessionRecord>> {
        let query = Query::new()
            .eq("user_id", self.session.user_id)
            .order("created_at", Order::Desc)
            .limit(limit);
        let rows = self
            .store
            .select(self.session, tables::BREATHING_SESSIONS, query)
            .await
            .inspect_err(|e| log::warn!("breathing history load failed: {e}"))?;
        Ok(rows)
    }
}
