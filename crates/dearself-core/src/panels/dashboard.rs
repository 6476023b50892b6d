//! Dashboard: read-only summary across all logging domains.

use serde::Serialize;

use crate::auth::Session;
use crate::error::Result;
use crate::models::{HydrationLog, MoodLog, StepsLog, Task};
use crate::panels::today;
use crate::store::{tables, Order, Query, StoreClient};

/// One day's worth of headline numbers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSummary {
    pub tasks_total: usize,
    pub tasks_completed: usize,
    pub hydration_ml_today: i64,
    pub steps_today: i64,
    /// Lifetime journal entry count (count-only query, no rows fetched).
    pub journal_entries: u64,
    pub latest_mood: Option<MoodLog>,
}

pub struct DashboardPanel<'a> {
    store: &'a StoreClient,
    session: &'a Session,
    summary: DashboardSummary,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(store: &'a StoreClient, session: &'a Session) -> Self {
        Self {
            store,
            session,
            summary: DashboardSummary::default(),
        }
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    pub async fn load(&mut self) -> Result<()> {
        let user = self.session.user_id;

        let tasks: Vec<Task> = self
            .store
            .select(self.session, tables::TODOS, Query::new().eq("user_id", user))
            .await
            .inspect_err(|e| log::warn!("dashboard load failed: {e}"))?;

        let hydration: Vec<HydrationLog> = self
            .store
            .select(
                self.session,
                tables::HYDRATION_LOGS,
                Query::new().eq("user_id", user).eq("date", today()),
            )
            .await?;

        let steps: Option<StepsLog> = self
            .store
            .select_one(
                self.session,
                tables::STEPS_LOGS,
                Query::new().eq("user_id", user).eq("date", today()),
            )
            .await?;

        let journal_entries = self
            .store
            .count(
                self.session,
                tables::JOURNAL_ENTRIES,
                Query::new().eq("user_id", user),
            )
            .await?;

        let latest_mood: Option<MoodLog> = self
            .store
            .select_one(
                self.session,
                tables::MOOD_LOGS,
                Query::new()
                    .eq("user_id", user)
                    .order("created_at", Order::Desc),
            )
            .await?;

        self.summary = DashboardSummary {
            tasks_total: tasks.len(),
            tasks_completed: tasks.iter().filter(|t| t.completed).count(),
            hydration_ml_today: hydration.iter().map(|l| l.amount_ml).sum(),
            steps_today: steps.map(|l| l.steps).unwrap_or(0),
            journal_entries,
            latest_mood,
        };
        Ok(())
    }
}
