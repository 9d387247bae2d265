//! Scripted demo driving the bookmark core against the in-process
//! backend emulation: sign in, add entries, receive them through the
//! realtime stream, apply an external edit, delete, and sign out.

use linkbox::app::App;
use linkbox::backend::MemoryBackend;
use linkbox::services::bookmark_service::CreateOutcome;
use linkbox::types::auth::OAuthProvider;

fn print_list(app: &App<MemoryBackend, MemoryBackend, MemoryBackend>) {
    match app.current_user() {
        Some(user) => println!("signed in as {}", user.id),
        None => println!("signed out"),
    }
    if app.bookmarks().is_empty() {
        println!("  (no bookmarks)");
    }
    for entry in app.bookmarks() {
        println!("  [{}] {} -> {}", entry.created_at, entry.title, entry.url);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let backend = MemoryBackend::new()?;
    let mut app = App::initialize(backend.clone(), backend.clone(), backend.clone()).await;

    app.sign_in(OAuthProvider::GitHub).await;
    app.process_pending().await;
    print_list(&app);

    for (title, url) in [
        ("Rust Book", "https://doc.rust-lang.org/book/"),
        ("Crates.io", "https://crates.io/"),
    ] {
        let outcome = app.add_bookmark(title, url).await;
        if outcome != CreateOutcome::Submitted {
            println!("add {:?} was not submitted: {:?}", title, outcome);
        }
    }
    // Created rows only land locally once their insert events are applied.
    app.process_pending().await;
    print_list(&app);

    // An edit from "another session" arrives through the update event.
    if let Some(first) = app.bookmarks().first().cloned() {
        backend.update(&first.id, "crates.io: Rust package registry", &first.url)?;
        app.process_pending().await;
        print_list(&app);

        match app.delete_bookmark(&first.id).await {
            Ok(()) => println!("deleted {}", first.title),
            Err(e) => println!("delete failed: {}", e),
        }
        // The redundant delete event is a no-op.
        app.process_pending().await;
        print_list(&app);
    }

    app.sign_out().await;
    app.process_pending().await;
    print_list(&app);

    Ok(())
}
