use btwboek::contact::*;
use btwboek::store::MemoryStore;
use chrono::Utc;

fn main() {
    let mut store = MemoryStore::new();
    let now = Utc::now();

    println!("=== Contact intake ===\n");

    // First three submissions of the day go through
    for i in 1..=4 {
        let result = submit_message(
            &mut store,
            NewContactMessage {
                email: "jan@voorbeeld.nl".into(),
                name: Some("Jan Jansen".into()),
                contact_type: ContactType::Vraag,
                body: format!("Vraag nummer {i} over de BTW-export"),
            },
            now,
        );
        match result {
            Ok(pending) => println!(
                "  #{i}: pending as {} (token {}..., expires {})",
                pending.id,
                &pending.verification_token[..8],
                pending.expires_at
            ),
            Err(e) => println!("  #{i}: rejected — {e}"),
        }
    }

    println!("\n=== Verification ===\n");

    // Grab one stored token and exchange it
    let token = store.pending_contacts()[0].verification_token.clone();
    match verify_token(&mut store, &token, now) {
        Ok(message) => println!(
            "  Verified: {} <{}> — {}",
            message.contact_type, message.email, message.body
        ),
        Err(e) => println!("  Verification failed: {e}"),
    }

    // A second exchange of the same token fails: the pending record is gone
    match verify_token(&mut store, &token, now) {
        Ok(_) => println!("  Replay accepted?!"),
        Err(e) => println!("  Replay rejected: {e}"),
    }

    println!(
        "\n{} pending, {} verified",
        store.pending_contacts().len(),
        store.contact_messages().len()
    );
}
