//! Journal panel: dated entries with a mood tag, searchable client-side.

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use crate::auth::Session;
use crate::error::{Result, ValidationError};
use crate::models::{JournalEntry, Mood, NewJournalEntry};
use crate::panels::today;
use crate::store::{tables, Order, Query, StoreClient};

pub struct JournalPanel<'a> {
    store: &'a StoreClient,
    session: &'a Session,
    entries: Vec<JournalEntry>,
}

impl<'a> JournalPanel<'a> {
    pub fn new(store: &'a StoreClient, session: &'a Session) -> Self {
        Self {
            store,
            session,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Filter the loaded entries by a search term (title or content,
    /// case-insensitive) and an optional mood.
    pub fn filtered(&self, search: &str, mood: Option<Mood>) -> Vec<&JournalEntry> {
        let needle = search.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.title.to_lowercase().contains(&needle)
                    || e.content.to_lowercase().contains(&needle)
            })
            .filter(|e| mood.map_or(true, |m| e.mood == m))
            .collect()
    }

    pub async fn load(&mut self) -> Result<()> {
        let query = Query::new()
            .eq("user_id", self.session.user_id)
            .order("date", Order::Desc);
        let entries = self
            .store
            .select(self.session, tables::JOURNAL_ENTRIES, query)
            .await
            .inspect_err(|e| log::warn!("journal load failed: {e}"))?;
        self.entries = entries;
        Ok(())
    }

    /// Write a new entry, dated today unless a date is given.
    pub async fn add(
        &mut self,
        title: &str,
        content: &str,
        mood: Mood,
        date: Option<NaiveDate>,
    ) -> Result<()> {
        validate_text("title", title)?;
        validate_text("content", content)?;
        let row = NewJournalEntry {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            mood,
            date: date.unwrap_or_else(today),
            user_id: self.session.user_id,
        };
        let _: JournalEntry = self
            .store
            .insert(self.session, tables::JOURNAL_ENTRIES, &row)
            .await?;
        self.load().await
    }

    /// Rewrite an existing entry's text and mood.
    pub async fn update_entry(
        &mut self,
        id: Uuid,
        title: &str,
        content: &str,
        mood: Mood,
    ) -> Result<()> {
        validate_text("title", title)?;
        validate_text("content", content)?;
        self.store
            .update(
                self.session,
                tables::JOURNAL_ENTRIES,
                id,
                &json!({ "title": title.trim(), "content": content.trim(), "mood": mood }),
            )
            .await?;
        self.load().await
    }

    pub async fn remove(&mut self, id: Uuid) -> Result<()> {
        self.store
            .delete(self.session, tables::JOURNAL_ENTRIES, id)
            .await?;
        self.load().await
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.into(),
        });
    }
    Ok(())
}
