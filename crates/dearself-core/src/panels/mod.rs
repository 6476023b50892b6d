//! Feature data panels, one per screen.
//!
//! Each panel owns the local view state for "today's records", issues reads
//! and writes scoped by the session's user id (and a date filter where the
//! screen uses one), and is driven by an explicit `load()` from the hosting
//! shell - on mount and again after each mutation. Mutations reload on
//! success; on failure the previous state is left untouched and the error
//! propagates to the caller.

pub mod breathe;
pub mod dashboard;
pub mod hydration;
pub mod journal;
pub mod mood;
pub mod steps;
pub mod tasks;

pub use breathe::BreathePanel;
pub use dashboard::{DashboardPanel, DashboardSummary};
pub use hydration::HydrationPanel;
pub use journal::JournalPanel;
pub use mood::MoodPanel;
pub use steps::StepsPanel;
pub use tasks::TasksPanel;

use chrono::{Duration, NaiveDate, Utc};

/// Today, in the store's date format.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Start of the trailing 7-day window.
pub(crate) fn week_ago() -> NaiveDate {
    today() - Duration::days(7)
}
