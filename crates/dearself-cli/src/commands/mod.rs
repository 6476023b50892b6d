pub mod auth;
pub mod breathe;
pub mod config;
pub mod dashboard;
pub mod hydration;
pub mod journal;
pub mod mood;
pub mod steps;
pub mod task;

use std::io::{self, Write};

use dearself_core::auth::token_store;
use dearself_core::models::Mood;
use dearself_core::{Config, Session, StoreClient};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a store-backed command needs: config, the signed-in session,
/// and a client scoped to it.
pub struct Context {
    pub config: Config,
    pub session: Session,
    pub store: StoreClient,
}

/// Load config and the stored session. Commands that need the remote store
/// fail here with a sign-in hint when no session exists - the CLI analog of
/// redirecting an unauthenticated visitor to the login screen.
pub fn load_context() -> Result<Context, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let session = token_store::load()?
        .ok_or("not signed in; run `dearself auth login` first")?;
    if session.is_expired() {
        return Err("session expired; run `dearself auth login` again".into());
    }
    let base_url = config.store.base_url()?;
    let store = StoreClient::new(base_url, config.store.anon_key.clone());
    Ok(Context {
        config,
        session,
        store,
    })
}

/// Ask before a destructive action. Anything but an explicit yes declines.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Mood labels as CLI values.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MoodArg {
    Happy,
    Sad,
    Anxious,
    Calm,
    Excited,
    Neutral,
}

impl From<MoodArg> for Mood {
    fn from(arg: MoodArg) -> Mood {
        match arg {
            MoodArg::Happy => Mood::Happy,
            MoodArg::Sad => Mood::Sad,
            MoodArg::Anxious => Mood::Anxious,
            MoodArg::Calm => Mood::Calm,
            MoodArg::Excited => Mood::Excited,
            MoodArg::Neutral => Mood::Neutral,
        }
    }
}
