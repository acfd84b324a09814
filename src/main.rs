//! Theme Toggle - Dioxus fullstack entry point.
//!
//! Server builds render the page; web builds hydrate it and run the toggle.

use theme_toggle::app::App;

fn main() {
    #[cfg(feature = "server")]
    init_logging();

    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "theme_toggle=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    match result {
        Ok(()) => tracing::info!(
            "Starting Theme Toggle v{} ({})",
            theme_toggle::config::version(),
            theme_toggle::config::git_sha()
        ),
        Err(e) => eprintln!("Logging already initialized: {}", e),
    }
}
