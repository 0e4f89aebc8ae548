#![cfg(feature = "contact")]

use btwboek::contact::*;
use btwboek::store::{ContactStore, MemoryStore};
use chrono::{DateTime, TimeZone, Utc};

fn at(h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 23, h, min, 0).unwrap()
}

fn message(email: &str) -> NewContactMessage {
    NewContactMessage {
        email: email.into(),
        name: Some("Jan Jansen".into()),
        contact_type: ContactType::Vraag,
        body: "Hoe werkt de BTW-export?".into(),
    }
}

// --- Rate limiter ---

#[test]
fn fourth_submission_same_day_rejected() {
    let mut store = MemoryStore::new();
    for i in 0..3 {
        submit_message(&mut store, message("a@b.com"), at(8 + i, 0)).unwrap();
    }
    let err = submit_message(&mut store, message("a@b.com"), at(22, 0)).unwrap_err();
    assert!(matches!(err, ContactError::DailyLimitReached));
}

#[test]
fn next_day_resets_the_counter() {
    let mut store = MemoryStore::new();
    for i in 0..3 {
        submit_message(&mut store, message("a@b.com"), at(8 + i, 0)).unwrap();
    }
    let tomorrow = Utc.with_ymd_and_hms(2026, 8, 24, 0, 0, 1).unwrap();
    assert!(submit_message(&mut store, message("a@b.com"), tomorrow).is_ok());
}

#[test]
fn limit_is_per_email_case_insensitive() {
    let mut store = MemoryStore::new();
    submit_message(&mut store, message("a@b.com"), at(8, 0)).unwrap();
    submit_message(&mut store, message("A@B.com"), at(9, 0)).unwrap();
    submit_message(&mut store, message("a@B.COM"), at(10, 0)).unwrap();
    assert!(submit_message(&mut store, message("A@b.CoM"), at(11, 0)).is_err());
    // A different address is unaffected
    assert!(submit_message(&mut store, message("c@d.com"), at(11, 0)).is_ok());
}

#[test]
fn rejected_submission_writes_nothing() {
    let mut store = MemoryStore::new();
    for i in 0..3 {
        submit_message(&mut store, message("a@b.com"), at(8 + i, 0)).unwrap();
    }
    submit_message(&mut store, message("a@b.com"), at(22, 0)).unwrap_err();
    let (from, to) = utc_day_bounds(at(12, 0));
    assert_eq!(store.count_messages_between("a@b.com", from, to).unwrap(), 3);
}

#[test]
fn invalid_email_rejected_before_any_write() {
    let mut store = MemoryStore::new();
    let err = submit_message(&mut store, message("not-an-email"), at(8, 0)).unwrap_err();
    assert!(matches!(err, ContactError::InvalidEmail));
}

#[test]
fn empty_body_rejected() {
    let mut store = MemoryStore::new();
    let mut msg = message("a@b.com");
    msg.body = "   ".into();
    assert!(matches!(
        submit_message(&mut store, msg, at(8, 0)),
        Err(ContactError::EmptyBody)
    ));
}

// --- Verification tokens ---

#[test]
fn valid_token_promotes_and_deletes_pending() {
    let mut store = MemoryStore::new();
    let pending = submit_message(&mut store, message("a@b.com"), at(8, 0)).unwrap();

    let verified = verify_token(&mut store, &pending.verification_token, at(9, 0)).unwrap();
    assert_eq!(verified.email, "a@b.com");
    assert_eq!(verified.contact_type, "Vraag");
    assert_eq!(verified.verified_at, at(9, 0));
    assert_eq!(verified.submitted_at, at(8, 0));

    // Pending record is gone: the token cannot be replayed
    assert!(matches!(
        verify_token(&mut store, &pending.verification_token, at(9, 30)),
        Err(ContactError::TokenInvalid)
    ));
    assert_eq!(store.contact_messages().len(), 1);
}

#[test]
fn expired_token_rejected() {
    let mut store = MemoryStore::new();
    let pending = submit_message(&mut store, message("a@b.com"), at(8, 0)).unwrap();

    let after_expiry = Utc.with_ymd_and_hms(2026, 8, 24, 8, 0, 1).unwrap();
    assert!(matches!(
        verify_token(&mut store, &pending.verification_token, after_expiry),
        Err(ContactError::TokenExpired)
    ));
}

#[test]
fn token_valid_up_to_the_full_24_hours() {
    let mut store = MemoryStore::new();
    let pending = submit_message(&mut store, message("a@b.com"), at(8, 0)).unwrap();

    let exactly_24h = Utc.with_ymd_and_hms(2026, 8, 24, 8, 0, 0).unwrap();
    assert!(verify_token(&mut store, &pending.verification_token, exactly_24h).is_ok());
}

#[test]
fn unknown_token_rejected() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        verify_token(&mut store, "deadbeef", at(8, 0)),
        Err(ContactError::TokenInvalid)
    ));
}

#[test]
fn verifying_does_not_free_up_daily_budget() {
    let mut store = MemoryStore::new();
    for i in 0..3 {
        let pending = submit_message(&mut store, message("a@b.com"), at(8 + i, 0)).unwrap();
        verify_token(&mut store, &pending.verification_token, at(8 + i, 30)).unwrap();
    }
    assert!(matches!(
        submit_message(&mut store, message("a@b.com"), at(22, 0)),
        Err(ContactError::DailyLimitReached)
    ));
}
