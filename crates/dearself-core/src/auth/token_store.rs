//! Thin wrapper around the OS keyring for session persistence, so separate
//! CLI invocations stay signed in.

use super::Session;
use crate::error::AuthError;

const SERVICE: &str = "dearself";
const SESSION_KEY: &str = "session";

/// Load the stored session, if any.
pub fn load() -> Result<Option<Session>, AuthError> {
    let entry = entry()?;
    match entry.get_password() {
        Ok(json) => {
            let session = serde_json::from_str(&json)
                .map_err(|e| AuthError::CredentialStore(format!("corrupt stored session: {e}")))?;
            Ok(Some(session))
        }
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(AuthError::CredentialStore(e.to_string())),
    }
}

/// Persist the session.
pub fn save(session: &Session) -> Result<(), AuthError> {
    let json = serde_json::to_string(session)
        .map_err(|e| AuthError::CredentialStore(e.to_string()))?;
    entry()?
        .set_password(&json)
        .map_err(|e| AuthError::CredentialStore(e.to_string()))
}

/// Remove the stored session. Absent entries are fine.
pub fn clear() -> Result<(), AuthError> {
    match entry()?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(AuthError::CredentialStore(e.to_string())),
    }
}

fn entry() -> Result<keyring::Entry, AuthError> {
    keyring::Entry::new(SERVICE, SESSION_KEY)
        .map_err(|e| AuthError::CredentialStore(e.to_string()))
}
