//! Steps panel: one row per user per day.
//!
//! The store does not enforce the singleton - this panel checks for today's
//! row first and decides insert-vs-update itself, like the original screen.

use serde_json::json;

use crate::auth::Session;
use crate::error::{Result, ValidationError};
use crate::models::{NewStepsLog, StepsLog};
use crate::panels::{today, week_ago};
use crate::store::{tables, Order, Query, StoreClient};

pub struct StepsPanel<'a> {
    store: &'a StoreClient,
    session: &'a Session,
    goal_steps: i64,
    today_log: Option<StepsLog>,
    weekly_logs: Vec<StepsLog>,
}

impl<'a> StepsPanel<'a> {
    pub fn new(store: &'a StoreClient, session: &'a Session, goal_steps: i64) -> Self {
        Self {
            store,
            session,
            goal_steps,
            today_log: None,
            weekly_logs: Vec::new(),
        }
    }

    pub fn today_log(&self) -> Option<&StepsLog> {
        self.today_log.as_ref()
    }

    pub fn today_steps(&self) -> i64 {
        self.today_log.as_ref().map(|l| l.steps).unwrap_or(0)
    }

    pub fn goal_steps(&self) -> i64 {
        self.goal_steps
    }

    pub fn goal_progress_pct(&self) -> f64 {
        if self.goal_steps <= 0 {
            return 0.0;
        }
        (self.today_steps() as f64 / self.goal_steps as f64 * 100.0).min(100.0)
    }

    pub fn weekly_logs(&self) -> &[StepsLog] {
        &self.weekly_logs
    }

    pub fn weekly_average(&self) -> i64 {
        if self.weekly_logs.is_empty() {
            return 0;
        }
        let sum: i64 = self.weekly_logs.iter().map(|l| l.steps).sum();
        sum / self.weekly_logs.len() as i64
    }

    pub fn goals_met_this_week(&self) -> usize {
        self.weekly_logs
            .iter()
            .filter(|l| l.steps >= self.goal_steps)
            .count()
    }

    pub async fn load(&mut self) -> Result<()> {
        let today_query = Query::new()
            .eq("user_id", self.session.user_id)
            .eq("date", today());
        let today_log = self
            .store
            .select_one(self.session, tables::STEPS_LOGS, today_query)
            .await
            .inspect_err(|e| log::warn!("steps load failed: {e}"))?;

        let weekly_query = Query::new()
            .eq("user_id", self.session.user_id)
            .gte("date", week_ago())
            .order("date", Order::Desc);
        let weekly_logs = self
            .store
            .select(self.session, tables::STEPS_LOGS, weekly_query)
            .await?;

        self.today_log = today_log;
        self.weekly_logs = weekly_logs;
        Ok(())
    }

    /// Record today's step count, updating the existing row when one was
    /// loaded and inserting otherwise.
    pub async fn log_steps(&mut self, steps: i64) -> Result<()> {
        if steps < 0 {
            return Err(ValidationError::NegativeAmount {
                field: "steps".into(),
                value: steps,
            }
            .into());
        }
        match &self.today_log {
            Some(existing) => {
                self.store
                    .update(
                        self.session,
                        tables::STEPS_LOGS,
                        existing.id,
                        &json!({ "steps": steps }),
                    )
                    .await?;
            }
            None => {
                let row = NewStepsLog {
                    steps,
                    date: today(),
                    user_id: self.session.user_id,
                };
                let _: StepsLog = self
                    .store
                    .insert(self.session, tables::STEPS_LOGS, &row)
                    .await?;
            }
        }
        self.load().await
    }
}
