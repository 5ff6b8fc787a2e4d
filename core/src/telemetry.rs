use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_LOG_FILTER: &str = "greeting_core=info,bootstrap=info,runner_local=info";

/// Installs the global subscriber. `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
///
/// Pass `with_timestamps = false` when the host stamps captured lines itself;
/// that also turns off ANSI colors.
pub fn init_tracing(with_timestamps: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);
    if with_timestamps {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().without_time().with_ansi(false))
            .init();
    }
}
