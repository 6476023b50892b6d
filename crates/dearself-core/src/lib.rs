//! # DearSelf Core Library
//!
//! Core business logic for DearSelf, a personal wellness tracker covering
//! tasks, hydration, mood, steps, journaling, and guided breathing. The CLI
//! binary is a thin layer over this crate; persistence and authentication
//! live in a hosted backend consumed over HTTP.
//!
//! ## Architecture
//!
//! - **Breathing session**: a phase-cycling state machine that requires the
//!   host to invoke `tick()` once per second - no internal timers
//! - **Store**: typed CRUD client for the hosted data API, every row scoped
//!   to the signed-in user
//! - **Auth**: password sign-in/sign-up plus an explicit session object that
//!   panels receive instead of reading ambient global state
//! - **Panels**: one per screen, each an explicit `load()`-then-render state
//!   holder with validate-before-write mutations
//!
//! ## Key Components
//!
//! - [`BreathingSession`]: the guided breathing engine
//! - [`StoreClient`]: remote collection access
//! - [`Session`] / [`SessionStore`]: identity and sign-in transitions
//! - [`Config`]: TOML configuration management

pub mod auth;
pub mod breathing;
pub mod error;
pub mod events;
pub mod models;
pub mod panels;
pub mod storage;
pub mod store;

pub use auth::{AuthClient, Session, SessionStore, SubscriptionId};
pub use breathing::{catalog, find_pattern, BreathingPattern, BreathingSession, Phase};
pub use error::{AuthError, ConfigError, CoreError, Result, StoreError, ValidationError};
pub use events::BreathingEvent;
pub use models::{
    BreathingSessionRecord, HydrationLog, JournalEntry, Mood, MoodLog, Priority, StepsLog, Task,
};
pub use panels::{
    BreathePanel, DashboardPanel, DashboardSummary, HydrationPanel, JournalPanel, MoodPanel,
    StepsPanel, TasksPanel,
};
pub use storage::{data_dir, Config, GoalsConfig, StoreConfig};
pub use store::{tables, Order, Query, StoreClient};
