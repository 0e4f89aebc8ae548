//! Contact form intake with email verification.
//!
//! Submissions land in a temporary collection with a random verification
//! token and a 24-hour expiry; an HTTP endpoint exchanges a valid token
//! for promotion into the permanent collection. Email delivery itself is
//! an external collaborator — this module only produces the token and the
//! records.
//!
//! # Example
//!
//! ```ignore
//! use btwboek::contact::*;
//! use btwboek::store::MemoryStore;
//! use chrono::Utc;
//!
//! let mut store = MemoryStore::new();
//! let pending = submit_message(&mut store, NewContactMessage {
//!     email: "Jan@Voorbeeld.nl".into(),
//!     name: Some("Jan".into()),
//!     contact_type: ContactType::Vraag,
//!     body: "Hoe werkt de BTW-export?".into(),
//! }, Utc::now())?;
//!
//! // ... email the token, then later:
//! let verified = verify_token(&mut store, &pending.verification_token, Utc::now())?;
//! ```

mod rate_limit;

pub use rate_limit::{MAX_MESSAGES_PER_DAY, check_daily_limit, utc_day_bounds};

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{ContactMessage, ContactStore, PendingContact, StoreError};

/// Token length in alphanumeric characters.
const TOKEN_LEN: usize = 48;

/// Pending messages expire this long after submission.
const TOKEN_TTL_HOURS: i64 = 24;

/// Errors from the contact intake flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContactError {
    /// Email address missing or malformed.
    #[error("invalid email address")]
    InvalidEmail,

    /// Message body is required.
    #[error("message body must not be empty")]
    EmptyBody,

    /// Daily cap reached for this email address; try again tomorrow.
    #[error("daily submission limit of {MAX_MESSAGES_PER_DAY} reached")]
    DailyLimitReached,

    /// Unknown verification token.
    #[error("verification token is invalid")]
    TokenInvalid,

    /// The token exists but its 24-hour window has passed.
    #[error("verification token has expired")]
    TokenExpired,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What the submission is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Vraag,
    Opmerking,
    Feedback,
}

impl ContactType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vraag => "Vraag",
            Self::Opmerking => "Opmerking",
            Self::Feedback => "Feedback",
        }
    }
}

/// A raw contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub email: String,
    pub name: Option<String>,
    pub contact_type: ContactType,
    pub body: String,
}

/// Validate, rate-limit, and store a contact submission as a pending
/// record with a fresh verification token.
///
/// The email is lowercased before the rate-limit check and storage, so
/// `A@b.com` and `a@B.com` share one daily budget. Nothing is written when
/// validation or the limit check fails.
pub fn submit_message(
    store: &mut (impl ContactStore + ?Sized),
    message: NewContactMessage,
    now: DateTime<Utc>,
) -> Result<PendingContact, ContactError> {
    let email = normalize_email(&message.email)?;
    if message.body.trim().is_empty() {
        return Err(ContactError::EmptyBody);
    }
    check_daily_limit(store, &email, now)?;

    let pending = store.insert_pending(PendingContact {
        id: String::new(), // store assigns
        email,
        name: message.name,
        contact_type: message.contact_type.label().to_string(),
        body: message.body,
        verification_token: generate_token(TOKEN_LEN),
        submitted_at: now,
        expires_at: now + Duration::hours(TOKEN_TTL_HOURS),
    })?;
    tracing::debug!(id = %pending.id, "contact submission stored pending verification");
    Ok(pending)
}

/// Exchange a verification token for promotion into the permanent
/// collection, deleting the pending record.
///
/// Unknown tokens yield [`ContactError::TokenInvalid`], expired ones
/// [`ContactError::TokenExpired`] — callers map both to an HTTP 400.
pub fn verify_token(
    store: &mut (impl ContactStore + ?Sized),
    token: &str,
    now: DateTime<Utc>,
) -> Result<ContactMessage, ContactError> {
    let pending = store
        .find_pending_by_token(token)?
        .ok_or(ContactError::TokenInvalid)?;
    if now > pending.expires_at {
        tracing::debug!(id = %pending.id, "verification token expired");
        return Err(ContactError::TokenExpired);
    }
    Ok(store.promote_pending(&pending.id, now)?)
}

/// Lowercase and minimally validate an email address. Hand-rolled on
/// purpose: one `@`, non-empty local part, a dot in the domain.
fn normalize_email(email: &str) -> Result<String, ContactError> {
    let email = email.trim().to_lowercase();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ContactError::InvalidEmail);
    };
    if local.is_empty() || domain.len() < 3 || !domain.contains('.') || domain.contains('@') {
        return Err(ContactError::InvalidEmail);
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(ContactError::InvalidEmail);
    }
    Ok(email)
}

fn generate_token(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
