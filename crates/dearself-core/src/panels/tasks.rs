//! Task list panel.

use serde_json::json;
use uuid::Uuid;

use crate::auth::Session;
use crate::error::{Result, ValidationError};
use crate::models::{NewTask, Priority, Task};
use crate::store::{tables, Order, Query, StoreClient};

pub struct TasksPanel<'a> {
    store: &'a StoreClient,
    session: &'a Session,
    tasks: Vec<Task>,
}

impl<'a> TasksPanel<'a> {
    pub fn new(store: &'a StoreClient, session: &'a Session) -> Self {
        Self {
            store,
            session,
            tasks: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Fetch all of the user's tasks, newest first.
    pub async fn load(&mut self) -> Result<()> {
        let query = Query::new()
            .eq("user_id", self.session.user_id)
            .order("created_at", Order::Desc);
        let tasks = self
            .store
            .select(self.session, tables::TODOS, query)
            .await
            .inspect_err(|e| log::warn!("task load failed: {e}"))?;
        self.tasks = tasks;
        Ok(())
    }

    /// Create a task. The title must be non-empty; an empty description is
    /// stored as null, as the original form did.
    pub async fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        priority: Priority,
    ) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "title".into(),
            }
            .into());
        }
        let row = NewTask {
            title: title.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            priority,
            user_id: self.session.user_id,
        };
        let _: Task = self.store.insert(self.session, tables::TODOS, &row).await?;
        self.load().await
    }

    pub async fn set_completed(&mut self, id: Uuid, completed: bool) -> Result<()> {
        self.store
            .update(self.session, tables::TODOS, id, &json!({ "completed": completed }))
            .await?;
        self.load().await
    }

    pub async fn remove(&mut self, id: Uuid) -> Result<()> {
        self.store.delete(self.session, tables::TODOS, id).await?;
        self.load().await
    }
}
