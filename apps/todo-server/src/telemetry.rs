use tracing_subscriber::{
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

// Console tracing only; filter via RUST_LOG, defaulting to info.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer();
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
