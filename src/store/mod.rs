//! Typed repository interfaces over the hosted backend.
//!
//! The backend itself (a hosted relational database with row-level
//! security) is out of scope; these traits are the seam the rest of the
//! library talks to. Every user-scoped call takes an explicit [`Session`]
//! carrying the user identifier — there is no ambient "current user"
//! state anywhere in the crate.
//!
//! Failures are terminal for the action: no retries, the caller surfaces a
//! message and the user resubmits. An empty result set is `Ok(vec![])`,
//! never an error.

mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::core::{BusinessPartner, FilterLabel, Invoice, InvoiceKind, NewInvoice};

/// Errors from the persistence boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The addressed row does not exist (or belongs to another user —
    /// indistinguishable on purpose).
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness or ownership constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Backend/network failure. Logged and surfaced, never retried.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Explicit session context: set at login, cleared at logout, passed to
/// every call that needs the user identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Purchase and sales invoice persistence.
pub trait InvoiceStore {
    /// All invoices of one direction for this user, newest first
    /// (by invoice date).
    fn list_invoices(
        &self,
        session: &Session,
        kind: InvoiceKind,
    ) -> Result<Vec<Invoice>, StoreError>;

    /// Invoices with an invoice date in `[from, to]`, newest first.
    fn find_invoices_by_date_range(
        &self,
        session: &Session,
        kind: InvoiceKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Invoice>, StoreError>;

    /// Insert a new invoice; the store assigns the id and `created_at`.
    fn insert_invoice(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        invoice: NewInvoice,
        now: DateTime<Utc>,
    ) -> Result<Invoice, StoreError>;

    /// Full-row replace of an existing invoice; sets `updated_at`.
    fn update_invoice(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        id: &str,
        fields: NewInvoice,
        now: DateTime<Utc>,
    ) -> Result<Invoice, StoreError>;

    /// Hard delete. Irreversible — the UI asks for confirmation first.
    fn delete_invoice(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        id: &str,
    ) -> Result<(), StoreError>;
}

/// User-scoped lookup lists, append-only from the forms.
pub trait LookupStore {
    fn list_filter_labels(&self, session: &Session) -> Result<Vec<FilterLabel>, StoreError>;

    fn add_filter_label(
        &mut self,
        session: &Session,
        name: &str,
    ) -> Result<FilterLabel, StoreError>;

    /// Saved suppliers (inkoop) or customers (verkoop).
    fn list_partners(
        &self,
        session: &Session,
        kind: InvoiceKind,
    ) -> Result<Vec<BusinessPartner>, StoreError>;

    fn add_partner(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        name: &str,
    ) -> Result<BusinessPartner, StoreError>;
}

/// A contact message awaiting email verification. Short-lived: expires
/// 24 hours after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingContact {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub contact_type: String,
    pub body: String,
    pub verification_token: String,
    pub submitted_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A verified, permanent contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub contact_type: String,
    pub body: String,
    /// Original submission time — the rate limiter counts by this, so
    /// verifying a message never shifts it into another day.
    pub submitted_at: DateTime<Utc>,
    pub verified_at: DateTime<Utc>,
}

/// Contact message persistence: the temp/permanent table pair.
pub trait ContactStore {
    /// Count pending + verified submissions for `email` (already
    /// lowercased) with a submission time in `[from, to]`.
    fn count_messages_between(
        &self,
        email: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<usize, StoreError>;

    /// Store a pending message; the store assigns the id.
    fn insert_pending(&mut self, pending: PendingContact) -> Result<PendingContact, StoreError>;

    /// Look up a pending message by its verification token, expired or not.
    fn find_pending_by_token(&self, token: &str)
    -> Result<Option<PendingContact>, StoreError>;

    /// Promote a pending message to the permanent collection and delete
    /// the pending record.
    fn promote_pending(
        &mut self,
        pending_id: &str,
        verified_at: DateTime<Utc>,
    ) -> Result<ContactMessage, StoreError>;
}
