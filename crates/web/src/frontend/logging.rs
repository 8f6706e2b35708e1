//! Browser console logging.
//!
//! Routes `tracing` events to the browser console, so gate denials and session
//! store failures leave a trace in the running client.

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

static INIT: Once = Once::new();

/// Install the console subscriber. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(MakeWebConsoleWriter::new())
            .without_time(); // no std::time on wasm32

        let _ = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(fmt_layer)
            .try_init();
    });
}
