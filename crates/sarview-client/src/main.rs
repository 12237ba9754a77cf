//! SARView Client
//!
//! Yew WASM frontend application.
//!
//! Only meaningful on wasm32. Build with `trunk build` from the workspace root.

use sarview_ui::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    // Redirects to /panic with the panic message kept in localStorage
    sarview_ui::set_panic_hook();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::info!("Starting SARView client");
    yew::Renderer::<App>::new().render();
}
