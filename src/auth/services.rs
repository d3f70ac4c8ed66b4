use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use super::{
    password::{hash_password, verify_password},
    repo::UserRepo,
    repo_types::User,
};
use crate::error::{AppError, Result};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    /// Verified against when the email is unknown, so both failures cost one argon2 run.
    static ref DUMMY_HASH: Option<String> = hash_password("login-timing-equalizer").ok();
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn sign_up(users: &dyn UserRepo, email: &str, password: &str) -> Result<User> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::Validation("email is missing or malformed".into()));
    }
    if password.is_empty() {
        return Err(AppError::Validation("password is required".into()));
    }

    let hash = hash_password(password)?;
    let user = users.create(&email, &hash).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Unknown email and wrong password fail identically.
pub async fn login(users: &dyn UserRepo, email: &str, password: &str) -> Result<User> {
    let email = normalize_email(email);

    let Some(user) = users.find_by_email(&email).await? else {
        if let Some(dummy) = DUMMY_HASH.as_deref() {
            let _ = verify_password(password, dummy);
        }
        warn!(email = %email, "login unknown email");
        return Err(AppError::invalid_credentials());
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(AppError::invalid_credentials());
    }

    info!(user_id = user.id, "user logged in");
    Ok(user)
}
