//! Remote store access (Supabase PostgREST data API).

pub mod client;
pub mod query;

pub use client::StoreClient;
pub use query::{Order, Query};

/// Collection names, exactly as they exist on the hosted backend.
pub mod tables {
    pub const TODOS: &str = "todos";
    pub const HYDRATION_LOGS: &str = "hydration_logs";
    pub const JOURNAL_ENTRIES: &str = "journal_entries";
    pub const STEPS_LOGS: &str = "steps_logs";
    pub const MOOD_LOGS: &str = "mood_logs";
    pub const BREATHING_SESSIONS: &str = "breathing_sessions";
}
