use clap::Subcommand;
use dearself_core::auth::token_store;
use dearself_core::{AuthClient, Config};

use super::CommandResult;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create a new account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Status,
}

fn auth_client(config: &Config) -> Result<AuthClient, Box<dyn std::error::Error>> {
    let base_url = config.store.base_url()?;
    Ok(AuthClient::new(base_url, config.store.anon_key.clone()))
}

pub async fn run(action: AuthAction) -> CommandResult {
    let config = Config::load()?;

    match action {
        AuthAction::Register { email, password } => {
            // Already signed in: the register screen redirects to the dashboard.
            if let Some(session) = token_store::load()? {
                println!("Already signed in as {}; run `dearself auth logout` first", session.email);
                return Ok(());
            }
            match auth_client(&config)?.sign_up(&email, &password).await? {
                Some(session) => {
                    token_store::save(&session)?;
                    println!("Registered and signed in as {}", session.email);
                }
                None => {
                    println!("Confirmation email sent; confirm the account, then run `dearself auth login`");
                }
            }
        }
        AuthAction::Login { email, password } => {
            if let Some(session) = token_store::load()? {
                if !session.is_expired() {
                    println!("Already signed in as {}", session.email);
                    return Ok(());
                }
            }
            let session = auth_client(&config)?.sign_in(&email, &password).await?;
            token_store::save(&session)?;
            println!("Signed in as {}", session.email);
        }
        AuthAction::Logout => {
            if let Some(session) = token_store::load()? {
                // Revocation failure is non-fatal; the local session goes away
                // regardless.
                let _ = auth_client(&config)?.sign_out(&session).await;
            }
            token_store::clear()?;
            println!("Signed out");
        }
        AuthAction::Status => match token_store::load()? {
            Some(session) => {
                println!("Signed in as {} ({})", session.email, session.user_id);
                if session.is_expired() {
                    println!("Session expired; run `dearself auth login` again");
                }
            }
            None => println!("Not signed in"),
        },
    }

    Ok(())
}
