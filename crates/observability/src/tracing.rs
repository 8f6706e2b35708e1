//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// `RUST_LOG` wins over `default_directive`. Output is JSON on stderr so that
/// stdout stays free for command output. Safe to call multiple times.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_is_a_no_op() {
        super::init("debug");
        assert!(::tracing::dispatcher::has_been_set());

        super::init("warn");
        crate::init();
        assert!(::tracing::dispatcher::has_been_set());

        // The first filter stays in force.
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(::tracing::enabled!(::tracing::Level::DEBUG));
        }
    }
}
