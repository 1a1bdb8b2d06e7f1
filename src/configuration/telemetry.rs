use once_cell::sync::Lazy;
use tracing::subscriber::set_global_default;
use tracing::warn;
use tracing_forest::ForestLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

static TRACING: Lazy<()> = Lazy::new(setup_global_subscriber);

fn setup_global_subscriber() {
    let env_filter = EnvFilter::from_default_env();
    let subscriber = Registry::default()
        .with(env_filter)
        .with(ForestLayer::default());
    if let Err(e) = set_global_default(subscriber) {
        // another subscriber (e.g. installed by the embedding application) stays in charge
        warn!("tracing subscriber already set: '{}'", e);
    }
}

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Safe to call many times, only the first call has an effect.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
