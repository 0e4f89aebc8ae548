//! In-memory store backing the tests and demos.
//!
//! Not a persistence engine: ids are sequential, everything lives in
//! `BTreeMap`s, and there is no durability. A hosted backend implements
//! the same traits with its own id scheme.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::{BusinessPartner, FilterLabel, Invoice, InvoiceKind, NewInvoice};

use super::{
    ContactMessage, ContactStore, InvoiceStore, LookupStore, PendingContact, Session, StoreError,
};

/// In-memory implementation of all store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    invoices: BTreeMap<(String, InvoiceKind), Vec<Invoice>>,
    filter_labels: BTreeMap<String, Vec<FilterLabel>>,
    partners: BTreeMap<(String, InvoiceKind), Vec<BusinessPartner>>,
    pending_contacts: Vec<PendingContact>,
    contact_messages: Vec<ContactMessage>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verified contact messages, oldest first. Test/demo accessor.
    pub fn contact_messages(&self) -> &[ContactMessage] {
        &self.contact_messages
    }

    /// Pending (unverified) contact submissions. Test/demo accessor.
    pub fn pending_contacts(&self) -> &[PendingContact] {
        &self.pending_contacts
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{:04}", self.next_id)
    }
}

impl InvoiceStore for MemoryStore {
    fn list_invoices(
        &self,
        session: &Session,
        kind: InvoiceKind,
    ) -> Result<Vec<Invoice>, StoreError> {
        let mut rows = self
            .invoices
            .get(&(session.user_id.clone(), kind))
            .cloned()
            .unwrap_or_default();
        rows.sort_by(|a, b| b.invoice_date.cmp(&a.invoice_date));
        Ok(rows)
    }

    fn find_invoices_by_date_range(
        &self,
        session: &Session,
        kind: InvoiceKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Invoice>, StoreError> {
        let mut rows = self.list_invoices(session, kind)?;
        rows.retain(|inv| inv.invoice_date >= from && inv.invoice_date <= to);
        Ok(rows)
    }

    fn insert_invoice(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        invoice: NewInvoice,
        now: DateTime<Utc>,
    ) -> Result<Invoice, StoreError> {
        let id = self.next_id("F");
        let row = Invoice {
            id,
            number: invoice.number,
            invoice_date: invoice.invoice_date,
            counterparty: invoice.counterparty,
            description: invoice.description,
            amount: invoice.amount,
            rate: invoice.rate,
            mode: invoice.mode,
            payment_date: invoice.payment_date,
            payment_status: invoice.payment_status,
            payment_account: invoice.payment_account,
            filter_label: invoice.filter_label,
            created_at: now,
            updated_at: None,
        };
        self.invoices
            .entry((session.user_id.clone(), kind))
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    fn update_invoice(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        id: &str,
        fields: NewInvoice,
        now: DateTime<Utc>,
    ) -> Result<Invoice, StoreError> {
        let rows = self
            .invoices
            .get_mut(&(session.user_id.clone(), kind))
            .ok_or_else(|| StoreError::NotFound(format!("invoice {id}")))?;
        let row = rows
            .iter_mut()
            .find(|inv| inv.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("invoice {id}")))?;
        row.apply(fields);
        row.updated_at = Some(now);
        Ok(row.clone())
    }

    fn delete_invoice(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        id: &str,
    ) -> Result<(), StoreError> {
        let rows = self
            .invoices
            .get_mut(&(session.user_id.clone(), kind))
            .ok_or_else(|| StoreError::NotFound(format!("invoice {id}")))?;
        let before = rows.len();
        rows.retain(|inv| inv.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(format!("invoice {id}")));
        }
        Ok(())
    }
}

impl LookupStore for MemoryStore {
    fn list_filter_labels(&self, session: &Session) -> Result<Vec<FilterLabel>, StoreError> {
        Ok(self
            .filter_labels
            .get(&session.user_id)
            .cloned()
            .unwrap_or_default())
    }

    fn add_filter_label(
        &mut self,
        session: &Session,
        name: &str,
    ) -> Result<FilterLabel, StoreError> {
        let labels = self.filter_labels.entry(session.user_id.clone()).or_default();
        if labels.iter().any(|l| l.name == name) {
            return Err(StoreError::Conflict(format!("label '{name}' already exists")));
        }
        self.next_id += 1;
        let label = FilterLabel {
            id: format!("L-{:04}", self.next_id),
            name: name.to_string(),
        };
        labels.push(label.clone());
        Ok(label)
    }

    fn list_partners(
        &self,
        session: &Session,
        kind: InvoiceKind,
    ) -> Result<Vec<BusinessPartner>, StoreError> {
        Ok(self
            .partners
            .get(&(session.user_id.clone(), kind))
            .cloned()
            .unwrap_or_default())
    }

    fn add_partner(
        &mut self,
        session: &Session,
        kind: InvoiceKind,
        name: &str,
    ) -> Result<BusinessPartner, StoreError> {
        let key = (session.user_id.clone(), kind);
        if self
            .partners
            .get(&key)
            .is_some_and(|ps| ps.iter().any(|p| p.name == name))
        {
            return Err(StoreError::Conflict(format!(
                "partner '{name}' already exists"
            )));
        }
        let partner = BusinessPartner {
            id: self.next_id("P"),
            name: name.to_string(),
        };
        self.partners.entry(key).or_default().push(partner.clone());
        Ok(partner)
    }
}

impl ContactStore for MemoryStore {
    fn count_messages_between(
        &self,
        email: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<usize, StoreError> {
        let pending = self
            .pending_contacts
            .iter()
            .filter(|p| p.email == email && p.submitted_at >= from && p.submitted_at <= to)
            .count();
        let verified = self
            .contact_messages
            .iter()
            .filter(|m| m.email == email && m.submitted_at >= from && m.submitted_at <= to)
            .count();
        Ok(pending + verified)
    }

    fn insert_pending(&mut self, pending: PendingContact) -> Result<PendingContact, StoreError> {
        let mut row = pending;
        row.id = self.next_id("C");
        self.pending_contacts.push(row.clone());
        Ok(row)
    }

    fn find_pending_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PendingContact>, StoreError> {
        Ok(self
            .pending_contacts
            .iter()
            .find(|p| p.verification_token == token)
            .cloned())
    }

    fn promote_pending(
        &mut self,
        pending_id: &str,
        verified_at: DateTime<Utc>,
    ) -> Result<ContactMessage, StoreError> {
        let index = self
            .pending_contacts
            .iter()
            .position(|p| p.id == pending_id)
            .ok_or_else(|| StoreError::NotFound(format!("pending contact {pending_id}")))?;
        let pending = self.pending_contacts.remove(index);
        let message = ContactMessage {
            id: self.next_id("M"),
            email: pending.email,
            name: pending.name,
            contact_type: pending.contact_type,
            body: pending.body,
            submitted_at: pending.submitted_at,
            verified_at,
        };
        self.contact_messages.push(message.clone());
        Ok(message)
    }
}
