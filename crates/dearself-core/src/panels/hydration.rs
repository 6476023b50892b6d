//! Hydration panel: free-form water logging, many rows per day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::auth::Session;
use crate::error::{Result, ValidationError};
use crate::models::{HydrationLog, NewHydrationLog};
use crate::panels::{today, week_ago};
use crate::store::{tables, Order, Query, StoreClient};

pub struct HydrationPanel<'a> {
    store: &'a StoreClient,
    session: &'a Session,
    goal_ml: i64,
    today_logs: Vec<HydrationLog>,
    weekly_logs: Vec<HydrationLog>,
}

impl<'a> HydrationPanel<'a> {
    pub fn new(store: &'a StoreClient, session: &'a Session, goal_ml: i64) -> Self {
        Self {
            store,
            session,
            goal_ml,
            today_logs: Vec::new(),
            weekly_logs: Vec::new(),
        }
    }

    pub fn today_logs(&self) -> &[HydrationLog] {
        &self.today_logs
    }

    pub fn goal_ml(&self) -> i64 {
        self.goal_ml
    }

    /// Sum of all amounts logged today.
    pub fn today_total_ml(&self) -> i64 {
        self.today_logs.iter().map(|l| l.amount_ml).sum()
    }

    pub fn goal_progress_pct(&self) -> f64 {
        if self.goal_ml <= 0 {
            return 0.0;
        }
        (self.today_total_ml() as f64 / self.goal_ml as f64 * 100.0).min(100.0)
    }

    /// Per-day totals over the trailing week, oldest first.
    pub fn weekly_totals(&self) -> Vec<(NaiveDate, i64)> {
        let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for log in &self.weekly_logs {
            *totals.entry(log.date).or_insert(0) += log.amount_ml;
        }
        totals.into_iter().collect()
    }

    pub async fn load(&mut self) -> Result<()> {
        let today_query = Query::new()
            .eq("user_id", self.session.user_id)
            .eq("date", today())
            .order("created_at", Order::Desc);
        let today_logs = self
            .store
            .select(self.session, tables::HYDRATION_LOGS, today_query)
            .await
            .inspect_err(|e| log::warn!("hydration load failed: {e}"))?;

        let weekly_query = Query::new()
            .eq("user_id", self.session.user_id)
            .gte("date", week_ago())
            .order("date", Order::Asc);
        let weekly_logs = self
            .store
            .select(self.session, tables::HYDRATION_LOGS, weekly_query)
            .await?;

        self.today_logs = today_logs;
        self.weekly_logs = weekly_logs;
        Ok(())
    }

    /// Log an amount for today. Must be positive.
    pub async fn log_amount(&mut self, amount_ml: i64) -> Result<()> {
        if amount_ml <= 0 {
            return Err(ValidationError::NonPositiveAmount {
                field: "amount_ml".into(),
                value: amount_ml,
            }
            .into());
        }
        let row = NewHydrationLog {
            amount_ml,
            date: today(),
            user_id: self.session.user_id,
        };
        let _: HydrationLog = self
            .store
            .insert(self.session, tables::HYDRATION_LOGS, &row)
            .await?;
        self.load().await
    }
}
